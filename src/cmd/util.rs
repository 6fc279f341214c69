use std::path::Path;

use abibind::abi::{BigInt, BindError, CompositeShape, FieldShape, Node, Result, ScalarKind, Shape, Value};

/// Serde mirror of one shape description document.
#[derive(serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
	/// Named composite with ordered fields.
	Composite {
		/// Composite type name.
		name: String,
		/// Field declarations in order.
		fields: Vec<FieldSpec>,
	},
	/// Homogeneous sequence.
	Sequence {
		/// Element shape.
		elem: Box<ShapeSpec>,
	},
	/// Optional single-value reference.
	Indirect {
		/// Pointed-to shape.
		inner: Box<ShapeSpec>,
	},
	/// Boolean scalar.
	Bool,
	/// Signed 64-bit scalar.
	I64,
	/// Unsigned 64-bit scalar.
	U64,
	/// Floating-point scalar.
	F64,
	/// Text scalar.
	Str,
	/// Raw byte scalar.
	Bytes,
	/// Arbitrary-precision integer leaf.
	Bigint,
	/// Fixed-width identifier leaf.
	Ident,
}

/// Serde mirror of one field declaration.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
	/// Field name.
	pub name: String,
	/// Declared shape.
	pub shape: ShapeSpec,
}

impl ShapeSpec {
	/// Convert the parsed document into a binder shape.
	pub fn into_shape(self) -> Shape {
		match self {
			ShapeSpec::Composite { name, fields } => Shape::Composite(CompositeShape {
				name: name.into(),
				fields: fields
					.into_iter()
					.map(|field| FieldShape {
						name: field.name.into(),
						shape: field.shape.into_shape(),
					})
					.collect(),
			}),
			ShapeSpec::Sequence { elem } => Shape::Sequence(Box::new(elem.into_shape())),
			ShapeSpec::Indirect { inner } => Shape::Indirect(Box::new(inner.into_shape())),
			ShapeSpec::Bool => Shape::Scalar(ScalarKind::Bool),
			ShapeSpec::I64 => Shape::Scalar(ScalarKind::I64),
			ShapeSpec::U64 => Shape::Scalar(ScalarKind::U64),
			ShapeSpec::F64 => Shape::Scalar(ScalarKind::F64),
			ShapeSpec::Str => Shape::Scalar(ScalarKind::Str),
			ShapeSpec::Bytes => Shape::Scalar(ScalarKind::Bytes),
			ShapeSpec::Bigint => Shape::BigInt,
			ShapeSpec::Ident => Shape::Ident,
		}
	}
}

/// Load a shape description file whose top level must be a composite.
pub fn load_composite_shape(path: &Path) -> Result<CompositeShape> {
	let text = std::fs::read_to_string(path)?;
	let spec: ShapeSpec = serde_json::from_str(&text)?;
	match spec.into_shape() {
		Shape::Composite(shape) => Ok(shape),
		other => Err(BindError::InvalidShapeSpec {
			reason: format!("top-level shape must be a composite, got {}", other.describe()),
		}),
	}
}

/// Load a decoded-node document whose top level must be an array.
pub fn load_nodes(path: &Path) -> Result<Vec<Node>> {
	let text = std::fs::read_to_string(path)?;
	let doc: serde_json::Value = serde_json::from_str(&text)?;
	let serde_json::Value::Array(items) = doc else {
		return Err(BindError::InvalidNodeSpec {
			reason: "top-level node document must be an array".to_owned(),
		});
	};
	items.iter().map(node_from_json).collect()
}

/// Convert one JSON value into a decoded node.
///
/// Scalars map directly; `{"bigint": "<decimal>"}` becomes a pre-typed big
/// integer leaf and `{"bytes": "0x…"}` a raw byte payload.
pub fn node_from_json(doc: &serde_json::Value) -> Result<Node> {
	match doc {
		serde_json::Value::Null => Ok(Node::Null),
		serde_json::Value::Bool(flag) => Ok(Node::Bool(*flag)),
		serde_json::Value::Number(number) => {
			if let Some(value) = number.as_u64() {
				Ok(Node::U64(value))
			} else if let Some(value) = number.as_i64() {
				Ok(Node::I64(value))
			} else if let Some(value) = number.as_f64() {
				Ok(Node::F64(value))
			} else {
				Err(BindError::InvalidNodeSpec {
					reason: format!("unrepresentable number {number}"),
				})
			}
		}
		serde_json::Value::String(text) => Ok(Node::Str(text.as_str().into())),
		serde_json::Value::Array(items) => Ok(Node::List(items.iter().map(node_from_json).collect::<Result<_>>()?)),
		serde_json::Value::Object(entries) => {
			if let Some(text) = entries.get("bigint").and_then(|value| value.as_str()) {
				let value = text.parse::<BigInt>().map_err(|_| BindError::InvalidNodeSpec {
					reason: format!("invalid bigint literal {text:?}"),
				})?;
				return Ok(Node::BigInt(value));
			}
			if let Some(text) = entries.get("bytes").and_then(|value| value.as_str()) {
				let digits = text.strip_prefix("0x").unwrap_or(text);
				let bytes = hex::decode(digits).map_err(|_| BindError::InvalidNodeSpec {
					reason: format!("invalid bytes literal {text:?}"),
				})?;
				return Ok(Node::Bytes(bytes));
			}
			Err(BindError::InvalidNodeSpec {
				reason: "node object must carry a \"bigint\" or \"bytes\" string".to_owned(),
			})
		}
	}
}

/// Render a bound value as JSON.
///
/// Identifiers render as `0x…` strings, big integers as decimal strings,
/// byte payloads as `0x…` hex, unset indirections as `null`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Bool(v) => (*v).into(),
		Value::I64(v) => (*v).into(),
		Value::U64(v) => (*v).into(),
		Value::F64(v) => serde_json::Number::from_f64(*v).map(serde_json::Value::Number).unwrap_or(serde_json::Value::Null),
		Value::Str(v) => v.as_ref().into(),
		Value::Bytes(v) => format!("0x{}", hex::encode(v)).into(),
		Value::BigInt(v) => v.to_string().into(),
		Value::Ident(v) => v.to_hex().into(),
		Value::Composite(record) => {
			let mut out = serde_json::Map::new();
			for field in &record.fields {
				out.insert(field.name.to_string(), value_to_json(&field.value));
			}
			serde_json::Value::Object(out)
		}
		Value::Sequence(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
		Value::Indirect(None) => serde_json::Value::Null,
		Value::Indirect(Some(inner)) => value_to_json(inner),
	}
}

/// Print one bound value tree.
pub fn print_value(value: &Value, indent: usize) {
	let pad = "  ".repeat(indent);
	match value {
		Value::Bool(v) => println!("{pad}{v}"),
		Value::I64(v) => println!("{pad}{v}"),
		Value::U64(v) => println!("{pad}{v}"),
		Value::F64(v) => println!("{pad}{v}"),
		Value::Str(v) => println!("{pad}\"{v}\""),
		Value::Bytes(v) => println!("{pad}0x{}", hex::encode(v)),
		Value::BigInt(v) => println!("{pad}{v}"),
		Value::Ident(v) => println!("{pad}{}", v.to_hex()),
		Value::Composite(record) => {
			println!("{pad}{} {{", record.name);
			for field in &record.fields {
				println!("{pad}  {}:", field.name);
				print_value(&field.value, indent + 2);
			}
			println!("{pad}}}");
		}
		Value::Sequence(items) => {
			println!("{pad}[");
			for item in items {
				print_value(item, indent + 1);
			}
			println!("{pad}]");
		}
		Value::Indirect(None) => println!("{pad}unset"),
		Value::Indirect(Some(inner)) => print_value(inner, indent),
	}
}
