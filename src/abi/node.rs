use num_bigint::BigInt;

/// One decoded unit handed over by the wire decoder.
///
/// Nodes are read-only inputs: the binder consumes them once and never
/// retains them beyond the call. A `List` node stands for either a nested
/// composite or a sequence; which one is decided by the target shape, not by
/// the node itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// Decoder nil sentinel.
	Null,
	/// Boolean atom.
	Bool(bool),
	/// Signed 64-bit atom.
	I64(i64),
	/// Unsigned 64-bit atom.
	U64(u64),
	/// Floating-point atom.
	F64(f64),
	/// Text atom, including `0x`-prefixed hex renderings of identifiers.
	Str(Box<str>),
	/// Raw byte payload.
	Bytes(Vec<u8>),
	/// Pre-typed arbitrary-precision integer leaf.
	BigInt(BigInt),
	/// Nested composite or sequence.
	List(Vec<Node>),
}

impl Node {
	/// Name of the node's dynamic representation for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Node::Null => "null",
			Node::Bool(_) => "bool",
			Node::I64(_) => "i64",
			Node::U64(_) => "u64",
			Node::F64(_) => "f64",
			Node::Str(_) => "string",
			Node::Bytes(_) => "bytes",
			Node::BigInt(_) => "bigint",
			Node::List(_) => "list",
		}
	}
}
