use std::path::PathBuf;

use abibind::abi::{Result, Shape};

use crate::cmd::util::load_composite_shape;

#[derive(clap::Args)]
pub struct Args {
	pub shape: PathBuf,
}

/// Parse a shape description and print a per-field summary.
pub fn run(args: Args) -> Result<()> {
	let Args { shape } = args;

	let shape = load_composite_shape(&shape)?;
	println!("name: {}", shape.name);
	println!("fields: {}", shape.fields.len());
	for field in &shape.fields {
		println!("  {}: {}", field.name, field.shape.describe());
	}
	println!("max_depth: {}", shape.fields.iter().map(|field| shape_depth(&field.shape)).max().unwrap_or(0));

	Ok(())
}

fn shape_depth(shape: &Shape) -> usize {
	match shape {
		Shape::Composite(inner) => 1 + inner.fields.iter().map(|field| shape_depth(&field.shape)).max().unwrap_or(0),
		Shape::Sequence(elem) => 1 + shape_depth(elem),
		Shape::Indirect(inner) => 1 + shape_depth(inner),
		Shape::Scalar(_) | Shape::BigInt | Shape::Ident => 1,
	}
}
