use std::time::Instant;

use pbd::{ChainConfig, PWorld, PhysicalModel, SimConfig, SolverMode};

fn main() -> anyhow::Result<()> {
	let chain = ChainConfig {
		particles: 200,
		..Default::default()
	};
	let model = PhysicalModel::new_chain(&chain);
	for solver in [SolverMode::GaussSeidel, SolverMode::Jacobi] {
		let config = SimConfig::default()
			.with_capacity(chain.particles, chain.particles)
			.with_solver(solver);
		let mut pworld = PWorld::initialize(config, &model)?;
		let start = Instant::now();
		let rframes = 1000;
		for _ in 0..rframes {
			pworld.run()?;
		}
		let time = rframes as f32 * pworld.config().dt;
		let duration = start.elapsed().as_secs_f32();
		// share of simulated time spent computing
		eprintln!("{:?}: {:.3}%", solver, duration / time * 100.0);
	}
	Ok(())
}
