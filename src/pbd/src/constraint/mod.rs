pub mod constraint_template;
pub mod distance;
pub mod pin;

use dyn_clone::DynClone;

use crate::particle::Particle;
use crate::V2;

pub type CRef = Box<dyn Constraint>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
	Applied,
	// coincident endpoints, correction skipped for this pass
	Degenerate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Correction {
	Offset { particle: usize, dp: V2 },
	// hard override, wins over offsets of the same pass
	Snap { particle: usize, pos: V2 },
}

pub trait Constraint: DynClone + Send + Sync {
	/// Particle index pair to draw, None for constraints without an edge.
	fn render(&self) -> Option<[usize; 2]>;

	/// Correct predicted positions in place.
	fn project(&self, ps: &mut [Particle]) -> Projection;

	/// Same correction as `project`, computed against a frozen state.
	fn corrections(&self, ps: &[Particle], out: &mut Vec<Correction>) -> Projection;

	/// Absolute residual at the current predicted positions.
	fn violation(&self, ps: &[Particle]) -> f32;

	fn move_anchor(&mut self, _pos: V2) -> bool {
		false
	}
}

dyn_clone::clone_trait_object!(Constraint);
