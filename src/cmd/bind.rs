use std::path::PathBuf;

use abibind::abi::{Result, bind_new};

use crate::cmd::util::{load_composite_shape, load_nodes, print_value, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	pub shape: PathBuf,
	pub nodes: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Bind a decoded-node document against a shape description and print the result.
pub fn run(args: Args) -> Result<()> {
	let Args { shape, nodes, json } = args;

	let shape = load_composite_shape(&shape)?;
	let nodes = load_nodes(&nodes)?;
	let bound = bind_new(&nodes, &shape)?;

	if json {
		println!("{}", serde_json::to_string_pretty(&value_to_json(&bound))?);
		return Ok(());
	}

	print_value(&bound, 0);
	Ok(())
}
