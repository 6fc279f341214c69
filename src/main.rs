#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "abibind", about = "Bind ABI-decoded node trees into shaped values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Bind(cmd::bind::Args),
	Shape(cmd::shape::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> abibind::abi::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Bind(args) => cmd::bind::run(args),
		Commands::Shape(args) => cmd::shape::run(args),
	}
}
