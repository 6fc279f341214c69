use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BindError>;

/// Errors produced while binding decoded nodes into shaped values.
#[derive(Debug, Error)]
pub enum BindError {
	/// Target value does not have the layout the invoked binder requires.
	#[error("invalid target: expected {expected}, got {got}")]
	InvalidTarget {
		/// Required target layout.
		expected: &'static str,
		/// Actual target layout.
		got: String,
	},
	/// Decoded node count does not match the composite field count.
	#[error("shape mismatch in {composite}: {fields} fields, {nodes} nodes")]
	ShapeMismatch {
		/// Composite shape name.
		composite: String,
		/// Declared field count.
		fields: usize,
		/// Presented node count.
		nodes: usize,
	},
	/// Node's dynamic representation does not match a required leaf representation.
	#[error("type mismatch: expected {expected}, got {got}")]
	TypeMismatch {
		/// Required representation.
		expected: &'static str,
		/// Actual node kind or offending text.
		got: String,
	},
	/// No lossless conversion exists between node and declared scalar kinds.
	#[error("cannot convert {from} to {to}")]
	ConversionFailure {
		/// Node dynamic kind.
		from: &'static str,
		/// Declared scalar kind.
		to: &'static str,
	},
	/// Indirection points at a shape the binder cannot allocate through.
	#[error("unsupported indirection to {shape}")]
	UnsupportedIndirection {
		/// Inner shape label.
		shape: String,
	},
	/// Failure occurred while binding a named composite field.
	#[error("field {name}: {source}")]
	Field {
		/// Field name from the composite shape.
		name: String,
		/// Underlying failure.
		source: Box<BindError>,
	},
	/// Failure occurred while binding one sequence element.
	#[error("element {index}: {source}")]
	Element {
		/// Zero-based node index within the sequence.
		index: usize,
		/// Underlying failure.
		source: Box<BindError>,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input file is not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Shape description document is structurally invalid.
	#[error("invalid shape description: {reason}")]
	InvalidShapeSpec {
		/// What was wrong with the document.
		reason: String,
	},
	/// Node description document contains an unrecognized construct.
	#[error("invalid node description: {reason}")]
	InvalidNodeSpec {
		/// What was wrong with the document.
		reason: String,
	},
}
