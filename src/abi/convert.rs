use crate::abi::error::{BindError, Result};
use crate::abi::node::Node;
use crate::abi::shape::ScalarKind;
use crate::abi::value::Value;

/// Produce the scalar value for a node, converting losslessly when the
/// node's dynamic representation differs from the declared kind.
///
/// This is the single scalar-assignment policy shared by all three binders:
/// composite fields, sequence elements, and indirection targets all convert
/// identically. A `Null` node yields the declared kind's zero value.
pub(crate) fn scalar_value(node: &Node, kind: ScalarKind) -> Result<Value> {
	match (node, kind) {
		(Node::Null, _) => Ok(Value::zero_scalar(kind)),
		(Node::Bool(v), ScalarKind::Bool) => Ok(Value::Bool(*v)),
		(Node::I64(v), ScalarKind::I64) => Ok(Value::I64(*v)),
		(Node::U64(v), ScalarKind::U64) => Ok(Value::U64(*v)),
		(Node::F64(v), ScalarKind::F64) => Ok(Value::F64(*v)),
		(Node::Str(v), ScalarKind::Str) => Ok(Value::Str(v.clone())),
		(Node::Bytes(v), ScalarKind::Bytes) => Ok(Value::Bytes(v.clone())),
		(Node::I64(v), ScalarKind::U64) => u64::try_from(*v).map(Value::U64).map_err(|_| no_conversion(node, kind)),
		(Node::U64(v), ScalarKind::I64) => i64::try_from(*v).map(Value::I64).map_err(|_| no_conversion(node, kind)),
		(Node::I64(v), ScalarKind::F64) => {
			let wide = *v as f64;
			// wide == I64_UPPER saturates on the way back, hiding a rounded value
			if wide < I64_UPPER && wide as i64 == *v {
				Ok(Value::F64(wide))
			} else {
				Err(no_conversion(node, kind))
			}
		}
		(Node::U64(v), ScalarKind::F64) => {
			let wide = *v as f64;
			if wide < U64_UPPER && wide as u64 == *v {
				Ok(Value::F64(wide))
			} else {
				Err(no_conversion(node, kind))
			}
		}
		(Node::F64(v), ScalarKind::I64) => {
			if v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < I64_UPPER {
				Ok(Value::I64(*v as i64))
			} else {
				Err(no_conversion(node, kind))
			}
		}
		(Node::F64(v), ScalarKind::U64) => {
			if v.fract() == 0.0 && *v >= 0.0 && *v < U64_UPPER {
				Ok(Value::U64(*v as u64))
			} else {
				Err(no_conversion(node, kind))
			}
		}
		_ => Err(no_conversion(node, kind)),
	}
}

/// Assign a decoded node into a scalar slot.
pub(crate) fn assign_scalar(node: &Node, kind: ScalarKind, slot: &mut Value) -> Result<()> {
	*slot = scalar_value(node, kind)?;
	Ok(())
}

// Exclusive float bounds of the 64-bit integer ranges.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
const U64_UPPER: f64 = 18_446_744_073_709_551_616.0;

fn no_conversion(node: &Node, kind: ScalarKind) -> BindError {
	BindError::ConversionFailure {
		from: node.kind(),
		to: kind.name(),
	}
}
