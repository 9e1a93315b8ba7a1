//! Simulation parameters and YAML scenario loading.
//!
//! A scenario file looks like:
//!
//! ```yaml
//! sim:
//!   dt: 3.0e-3
//!   damping: 0.99
//!   iteration: 10
//!   gravity: [0.0, -9.8]
//!   solver: gauss_seidel   # or "jacobi"
//! chain:
//!   particles: 6
//!   anchor: [0.5, 0.8]
//!   spacing: 0.1
//!   rest_length: 0.1
//! ```
//!
//! Every field is optional and falls back to the defaults below.

use std::path::Path;

use serde::Deserialize;

use crate::error::PbdError;
use crate::V2;

/// How one relaxation pass visits the constraints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverMode {
	/// Sequential, each correction is visible to the next constraint.
	#[default]
	GaussSeidel,
	/// Parallel, corrections are accumulated against a frozen copy of the
	/// pass input and averaged per particle. Converges slower.
	Jacobi,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
	pub dt: f32,
	pub damping: f32,
	pub iteration: usize,
	pub gravity: [f32; 2],
	pub max_particles: usize,
	pub max_constraints: usize,
	pub solver: SolverMode,
	// reject pins on movable particles instead of warning
	pub strict_pins: bool,
	// real time pacing of the threaded driver only
	pub time_scale: f32,
}

impl Default for SimConfig {
	fn default() -> Self {
		Self {
			dt: 3e-3,
			damping: 0.99,
			iteration: 10,
			gravity: [0., -9.8],
			max_particles: 256,
			max_constraints: 256,
			solver: SolverMode::GaussSeidel,
			strict_pins: false,
			time_scale: 1.0,
		}
	}
}

impl SimConfig {
	pub fn with_dt(mut self, dt: f32) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_iteration(mut self, iteration: usize) -> Self {
		self.iteration = iteration;
		self
	}

	pub fn with_gravity(mut self, gravity: V2) -> Self {
		self.gravity = gravity.into();
		self
	}

	pub fn with_solver(mut self, solver: SolverMode) -> Self {
		self.solver = solver;
		self
	}

	pub fn with_strict_pins(mut self) -> Self {
		self.strict_pins = true;
		self
	}

	pub fn with_capacity(mut self, particles: usize, constraints: usize) -> Self {
		self.max_particles = particles;
		self.max_constraints = constraints;
		self
	}

	pub fn with_time_scale(mut self, time_scale: f32) -> Self {
		self.time_scale = time_scale;
		self
	}

	pub fn gravity(&self) -> V2 {
		V2::from(self.gravity)
	}

	pub fn validate(&self) -> Result<(), PbdError> {
		let invalid = |name, reason| Err(PbdError::InvalidParameter { name, reason });
		if !self.dt.is_finite() || self.dt <= 0.0 {
			return invalid("dt", "must be finite and positive");
		}
		if !(0.0..=1.0).contains(&self.damping) {
			return invalid("damping", "must lie in [0, 1]");
		}
		if !self.gravity.iter().all(|g| g.is_finite()) {
			return invalid("gravity", "must be finite");
		}
		if self.max_particles == 0 {
			return invalid("max_particles", "must be positive");
		}
		if self.max_constraints == 0 {
			return invalid("max_constraints", "must be positive");
		}
		if !self.time_scale.is_finite() || self.time_scale < 0.0 {
			return invalid("time_scale", "must be finite and non-negative");
		}
		Ok(())
	}
}

/// Topology of the pinned chain scene.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
	pub particles: usize,
	pub anchor: [f32; 2],
	pub spacing: f32,
	// None: derive from the initial spacing
	pub rest_length: Option<f32>,
	pub inverse_mass: f32,
}

impl Default for ChainConfig {
	fn default() -> Self {
		Self {
			particles: 6,
			anchor: [0.5, 0.8],
			spacing: 0.1,
			rest_length: Some(0.1),
			inverse_mass: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
	pub sim: SimConfig,
	pub chain: ChainConfig,
}

impl ScenarioConfig {
	pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
		serde_yaml::from_str(s)
	}

	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let file = std::fs::File::open(path)?;
		let reader = std::io::BufReader::new(file);
		let scenario: Self = serde_yaml::from_reader(reader)?;
		scenario.sim.validate()?;
		Ok(scenario)
	}
}
