use crate::config::ChainConfig;
use crate::constraint::constraint_template::ConstraintTemplate;
use crate::particle::ParticleTemplate;
use crate::V2;

/// Scene topology, turned into a world by `PWorld::initialize`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhysicalModel {
	pub particles: Vec<ParticleTemplate>,
	pub constraints: Vec<ConstraintTemplate>,
}

impl PhysicalModel {
	pub fn add_particle(&mut self, p: ParticleTemplate) -> usize {
		self.particles.push(p);
		self.particles.len() - 1
	}

	pub fn add_constraint(&mut self, c: ConstraintTemplate) -> usize {
		self.constraints.push(c);
		self.constraints.len() - 1
	}

	/// Horizontal chain hanging from a pinned head at `anchor`, particle i
	/// at `anchor - (spacing * i, 0)`, consecutive particles joined by
	/// distance constraints.
	pub fn new_chain(config: &ChainConfig) -> Self {
		let anchor = V2::from(config.anchor);
		let mut model = Self::default();
		for idx in 0..config.particles {
			let pos = anchor - V2::new(config.spacing * idx as f32, 0.);
			let imass = if idx == 0 { 0.0 } else { config.inverse_mass };
			model.add_particle(ParticleTemplate::new(imass, pos));
		}
		if config.particles == 0 {
			return model;
		}
		model.add_constraint(ConstraintTemplate::pin(0, Some(anchor)));
		for idx in 1..config.particles {
			model.add_constraint(ConstraintTemplate::distance(
				idx - 1,
				idx,
				config.rest_length,
			));
		}
		model
	}
}
