mod bind;
mod convert;
mod error;
mod ident;
mod node;
mod shape;
mod value;

/// Binder entry points.
pub use bind::{bind, bind_new};
/// Error and result aliases.
pub use error::{BindError, Result};
/// Fixed-width binary identifier leaf.
pub use ident::{IDENT_LEN, Ident};
/// Decoded node tree handed over by the wire decoder.
pub use node::Node;
/// Arbitrary-precision integer carried by pre-typed leaf nodes.
pub use num_bigint::BigInt;
/// Target shape descriptions.
pub use shape::{CompositeShape, FieldShape, ScalarKind, Shape};
/// Target value trees populated by the binder.
pub use value::{CompositeValue, FieldValue, Value};
