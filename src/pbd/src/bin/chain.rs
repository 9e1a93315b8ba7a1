use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pbd::{PWorld, PhysicalModel, ScenarioConfig};
use protocol::Message;

/// Run the pinned chain headless and report particle positions.
#[derive(Parser, Debug)]
struct Args {
	/// YAML scenario, built-in defaults when absent
	#[arg(short, long)]
	scenario: Option<PathBuf>,
	#[arg(short, long, default_value_t = 10000)]
	frames: u64,
	/// Write every frame as length-prefixed protocol messages
	#[arg(short, long)]
	dump: Option<PathBuf>,
	/// Print positions every n frames, 0 for the last frame only
	#[arg(short, long, default_value_t = 0)]
	print_every: u64,
}

fn print_positions(pworld: &PWorld) {
	let model = pworld.pr_model();
	let line: Vec<String> = model
		.positions
		.iter()
		.map(|[x, y]| format!("({:.4}, {:.4})", x, y))
		.collect();
	println!("{}: {}", model.frame, line.join(" "));
}

fn main() -> Result<()> {
	let args = Args::parse();
	let scenario = match args.scenario.as_ref() {
		Some(path) => ScenarioConfig::load(path)?,
		None => ScenarioConfig::default(),
	};
	let model = PhysicalModel::new_chain(&scenario.chain);
	let mut pworld = PWorld::initialize(scenario.sim, &model)?;
	let mut dump = match args.dump.as_ref() {
		Some(path) => Some(BufWriter::new(File::create(path)?)),
		None => None,
	};

	for _ in 0..args.frames {
		let stats = pworld.run()?;
		if let Some(w) = dump.as_mut() {
			w.write_all(&Message::WorldUpdate(pworld.pr_model()).to_frame()?)?;
		}
		if args.print_every > 0 && stats.frame % args.print_every == 0 {
			print_positions(&pworld);
		}
	}
	if let Some(mut w) = dump {
		w.flush()?;
	}
	print_positions(&pworld);
	Ok(())
}
