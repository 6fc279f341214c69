/// Introspectable description of a bind target.
///
/// Shapes form a closed set: the binder selects exactly one handler per
/// variant. The two special leaf kinds are their own variants, marked once
/// when the shape is described, so a composite shape is always decomposable
/// and the composite arity check applies to it unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
	/// Fixed set of named fields, bound one node each in declaration order.
	Composite(CompositeShape),
	/// Homogeneous growable sequence of one element shape.
	Sequence(Box<Shape>),
	/// Optional single-value reference, lazily allocated on first write.
	Indirect(Box<Shape>),
	/// Plain scalar leaf.
	Scalar(ScalarKind),
	/// Atomic arbitrary-precision integer leaf.
	BigInt,
	/// Atomic fixed-width identifier leaf parsed from hex text.
	Ident,
}

/// Concrete representation of a scalar leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
	/// Boolean.
	Bool,
	/// Signed 64-bit integer.
	I64,
	/// Unsigned 64-bit integer.
	U64,
	/// Double-precision float.
	F64,
	/// Text.
	Str,
	/// Raw byte payload.
	Bytes,
}

/// Ordered named fields of a composite target.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeShape {
	/// Composite type name, used in diagnostics.
	pub name: Box<str>,
	/// Field declarations in source order.
	pub fields: Vec<FieldShape>,
}

/// One named field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
	/// Field name.
	pub name: Box<str>,
	/// Declared field shape.
	pub shape: Shape,
}

impl Shape {
	/// Short label for the shape variant, used in diagnostics.
	pub fn describe(&self) -> String {
		match self {
			Shape::Composite(inner) => format!("composite {}", inner.name),
			Shape::Sequence(elem) => format!("sequence of {}", elem.describe()),
			Shape::Indirect(inner) => format!("indirect {}", inner.describe()),
			Shape::Scalar(kind) => kind.name().to_owned(),
			Shape::BigInt => "bigint".to_owned(),
			Shape::Ident => "ident".to_owned(),
		}
	}

	/// The shape behind one level of indirection, or the shape itself.
	pub(crate) fn strip_indirect(&self) -> &Shape {
		match self {
			Shape::Indirect(inner) => inner,
			other => other,
		}
	}
}

impl ScalarKind {
	/// Name of the scalar representation for diagnostics.
	pub fn name(&self) -> &'static str {
		match self {
			ScalarKind::Bool => "bool",
			ScalarKind::I64 => "i64",
			ScalarKind::U64 => "u64",
			ScalarKind::F64 => "f64",
			ScalarKind::Str => "string",
			ScalarKind::Bytes => "bytes",
		}
	}
}
