//! Public library API for binding ABI-decoded node trees into shaped values.

/// Decoded node model, target shapes, and the type-directed binder.
pub mod abi;
