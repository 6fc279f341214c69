use num_bigint::BigInt;

use crate::abi::ident::Ident;
use crate::abi::shape::{CompositeShape, ScalarKind, Shape};

/// Mutable typed value tree the binder populates.
///
/// Instances are caller-owned and pre-exist the bind call; the binder only
/// writes into them, allocating nested storage for unset indirections, and
/// never replaces the caller-owned root.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Boolean scalar.
	Bool(bool),
	/// Signed 64-bit scalar.
	I64(i64),
	/// Unsigned 64-bit scalar.
	U64(u64),
	/// Floating-point scalar.
	F64(f64),
	/// Text scalar.
	Str(Box<str>),
	/// Raw byte scalar.
	Bytes(Vec<u8>),
	/// Arbitrary-precision integer leaf.
	BigInt(BigInt),
	/// Fixed-width identifier leaf.
	Ident(Ident),
	/// Composite instance with named field slots.
	Composite(CompositeValue),
	/// Growable sequence of homogeneous elements.
	Sequence(Vec<Value>),
	/// Optional single-value reference; `None` is the unset state.
	Indirect(Option<Box<Value>>),
}

/// Composite instance with named field slots.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeValue {
	/// Composite type name.
	pub name: Box<str>,
	/// Field slots in declaration order.
	pub fields: Vec<FieldValue>,
}

/// One named field slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Current field value.
	pub value: Value,
}

impl Value {
	/// Allocate the zero value for a shape.
	///
	/// Composite fields are zeroed recursively, sequences start empty, and
	/// indirections start unset.
	pub fn zero_of(shape: &Shape) -> Value {
		match shape {
			Shape::Composite(inner) => Value::zero_composite(inner),
			Shape::Sequence(_) => Value::Sequence(Vec::new()),
			Shape::Indirect(_) => Value::Indirect(None),
			Shape::Scalar(kind) => Value::zero_scalar(*kind),
			Shape::BigInt => Value::BigInt(BigInt::from(0)),
			Shape::Ident => Value::Ident(Ident::default()),
		}
	}

	/// Allocate a zero-valued composite instance for a composite shape.
	pub fn zero_composite(shape: &CompositeShape) -> Value {
		let fields = shape
			.fields
			.iter()
			.map(|field| FieldValue {
				name: field.name.clone(),
				value: Value::zero_of(&field.shape),
			})
			.collect();
		Value::Composite(CompositeValue {
			name: shape.name.clone(),
			fields,
		})
	}

	/// Zero value of a scalar kind.
	pub fn zero_scalar(kind: ScalarKind) -> Value {
		match kind {
			ScalarKind::Bool => Value::Bool(false),
			ScalarKind::I64 => Value::I64(0),
			ScalarKind::U64 => Value::U64(0),
			ScalarKind::F64 => Value::F64(0.0),
			ScalarKind::Str => Value::Str("".into()),
			ScalarKind::Bytes => Value::Bytes(Vec::new()),
		}
	}

	/// Name of the value's layout for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Bool(_) => "bool",
			Value::I64(_) => "i64",
			Value::U64(_) => "u64",
			Value::F64(_) => "f64",
			Value::Str(_) => "string",
			Value::Bytes(_) => "bytes",
			Value::BigInt(_) => "bigint",
			Value::Ident(_) => "ident",
			Value::Composite(_) => "composite",
			Value::Sequence(_) => "sequence",
			Value::Indirect(_) => "indirection",
		}
	}
}

impl CompositeValue {
	/// Look up a field slot by name.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}
}
