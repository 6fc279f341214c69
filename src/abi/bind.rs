use num_bigint::BigInt;

use crate::abi::convert::{assign_scalar, scalar_value};
use crate::abi::error::{BindError, Result};
use crate::abi::ident::Ident;
use crate::abi::node::Node;
use crate::abi::shape::{CompositeShape, Shape};
use crate::abi::value::Value;

/// Bind a decoded node list into an addressable composite target.
///
/// `nodes` is the ordered decoder output for one call or event, `shape`
/// describes the target layout, and `target` is the caller-owned composite
/// instance whose field slots are written in declaration order, one node per
/// field. Binding is fail-fast and non-transactional: on error the target may
/// be left partially populated. Callers that need all-or-nothing semantics
/// should use [`bind_new`] and swap the result in on success.
pub fn bind(nodes: &[Node], shape: &CompositeShape, target: &mut Value) -> Result<()> {
	bind_composite(nodes, shape, target)
}

/// Bind into a freshly allocated zero target and return it.
///
/// The returned value is only produced when the whole bind succeeded, which
/// makes this the commit-on-success building block for transactional callers.
pub fn bind_new(nodes: &[Node], shape: &CompositeShape) -> Result<Value> {
	let mut value = Value::zero_composite(shape);
	bind_composite(nodes, shape, &mut value)?;
	Ok(value)
}

fn bind_composite(nodes: &[Node], shape: &CompositeShape, target: &mut Value) -> Result<()> {
	let Value::Composite(record) = target else {
		return Err(BindError::InvalidTarget {
			expected: "composite",
			got: target.kind().to_owned(),
		});
	};
	if record.fields.len() != shape.fields.len() {
		return Err(BindError::InvalidTarget {
			expected: "composite with one slot per declared field",
			got: format!("{} slots for {} fields", record.fields.len(), shape.fields.len()),
		});
	}
	if nodes.len() != shape.fields.len() {
		return Err(BindError::ShapeMismatch {
			composite: shape.name.to_string(),
			fields: shape.fields.len(),
			nodes: nodes.len(),
		});
	}

	for ((decl, slot), node) in shape.fields.iter().zip(record.fields.iter_mut()).zip(nodes) {
		bind_field(node, &decl.shape, &mut slot.value).map_err(|err| BindError::Field {
			name: decl.name.to_string(),
			source: Box::new(err),
		})?;
	}

	Ok(())
}

fn bind_field(node: &Node, shape: &Shape, slot: &mut Value) -> Result<()> {
	match shape {
		Shape::Composite(inner) => bind_composite(expect_list(node)?, inner, slot),
		Shape::Indirect(inner) => match inner.as_ref() {
			Shape::Composite(comp) => {
				let items = expect_list(node)?;
				let Value::Indirect(cell) = slot else {
					return Err(BindError::InvalidTarget {
						expected: "indirection",
						got: slot.kind().to_owned(),
					});
				};
				let value = cell.get_or_insert_with(|| Box::new(Value::zero_composite(comp)));
				bind_composite(items, comp, value)
			}
			other => bind_indirect(node, other, slot),
		},
		Shape::Sequence(elem) => match node {
			// one hex identifier may stand in for the whole sequence
			Node::Str(text) if matches!(elem.strip_indirect(), Shape::Ident) => {
				let ident = parse_ident(text)?;
				let element = match elem.as_ref() {
					Shape::Indirect(_) => Value::Indirect(Some(Box::new(Value::Ident(ident)))),
					_ => Value::Ident(ident),
				};
				let Value::Sequence(items) = slot else {
					return Err(BindError::InvalidTarget {
						expected: "sequence",
						got: slot.kind().to_owned(),
					});
				};
				*items = vec![element];
				Ok(())
			}
			Node::List(items) => bind_sequence(items, elem, slot),
			other => Err(BindError::TypeMismatch {
				expected: "node list",
				got: other.kind().to_owned(),
			}),
		},
		Shape::Scalar(kind) => assign_scalar(node, *kind, slot),
		Shape::BigInt => {
			*slot = Value::BigInt(expect_bigint(node)?);
			Ok(())
		}
		Shape::Ident => {
			*slot = Value::Ident(expect_ident(node)?);
			Ok(())
		}
	}
}

fn bind_sequence(nodes: &[Node], elem: &Shape, target: &mut Value) -> Result<()> {
	let Value::Sequence(items) = target else {
		return Err(BindError::InvalidTarget {
			expected: "sequence",
			got: target.kind().to_owned(),
		});
	};

	items.reserve(nodes.len());
	for (index, node) in nodes.iter().enumerate() {
		let element = bind_element(node, elem).map_err(|err| BindError::Element {
			index,
			source: Box::new(err),
		})?;
		items.push(element);
	}

	Ok(())
}

fn bind_element(node: &Node, elem: &Shape) -> Result<Value> {
	match elem {
		Shape::Indirect(inner) => {
			let mut value = Value::Indirect(None);
			bind_indirect(node, inner, &mut value)?;
			Ok(value)
		}
		Shape::Composite(comp) => {
			let mut value = Value::zero_composite(comp);
			bind_composite(expect_list(node)?, comp, &mut value)?;
			Ok(value)
		}
		// each nested node list gets its own inner sequence
		Shape::Sequence(inner) => {
			let mut value = Value::Sequence(Vec::new());
			bind_sequence(expect_list(node)?, inner, &mut value)?;
			Ok(value)
		}
		Shape::Scalar(kind) => scalar_value(node, *kind),
		Shape::BigInt => Ok(Value::BigInt(expect_bigint(node)?)),
		Shape::Ident => Ok(Value::Ident(expect_ident(node)?)),
	}
}

fn bind_indirect(node: &Node, inner: &Shape, target: &mut Value) -> Result<()> {
	let Value::Indirect(cell) = target else {
		return Err(BindError::InvalidTarget {
			expected: "indirection",
			got: target.kind().to_owned(),
		});
	};

	let value = cell.get_or_insert_with(|| Box::new(Value::zero_of(inner)));
	match inner {
		Shape::Composite(comp) => bind_composite(expect_list(node)?, comp, value),
		Shape::Sequence(elem) => bind_sequence(expect_list(node)?, elem, value),
		Shape::Scalar(kind) => assign_scalar(node, *kind, value),
		Shape::BigInt => {
			**value = Value::BigInt(expect_bigint(node)?);
			Ok(())
		}
		Shape::Ident => {
			**value = Value::Ident(expect_ident(node)?);
			Ok(())
		}
		Shape::Indirect(_) => Err(BindError::UnsupportedIndirection { shape: inner.describe() }),
	}
}

fn expect_list(node: &Node) -> Result<&[Node]> {
	match node {
		Node::List(items) => Ok(items),
		other => Err(BindError::TypeMismatch {
			expected: "node list",
			got: other.kind().to_owned(),
		}),
	}
}

fn expect_bigint(node: &Node) -> Result<BigInt> {
	match node {
		Node::BigInt(value) => Ok(value.clone()),
		other => Err(BindError::TypeMismatch {
			expected: "bigint",
			got: other.kind().to_owned(),
		}),
	}
}

fn expect_ident(node: &Node) -> Result<Ident> {
	match node {
		Node::Str(text) => parse_ident(text),
		other => Err(BindError::TypeMismatch {
			expected: "hex string",
			got: other.kind().to_owned(),
		}),
	}
}

fn parse_ident(text: &str) -> Result<Ident> {
	Ident::from_hex(text).ok_or_else(|| BindError::TypeMismatch {
		expected: "hex string",
		got: format!("malformed hex {text:?}"),
	})
}
