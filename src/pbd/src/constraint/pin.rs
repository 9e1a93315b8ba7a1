use crate::constraint::{Constraint, Correction, Projection};
use crate::particle::Particle;
use crate::V2;

/// Hard positional constraint. Ignores inverse mass and overwrites the
/// predicted position with the anchor every pass.
#[derive(Clone, Debug)]
pub struct PinConstraint {
	p: usize,
	pos: V2,
}

impl PinConstraint {
	/// Pin at the particle's current position.
	pub fn new(p: usize, ps: &[Particle]) -> Self {
		Self::new_with_pos(p, ps[p].get_pos())
	}

	pub fn new_with_pos(p: usize, pos: V2) -> Self {
		Self { p, pos }
	}

	pub fn build(self) -> Box<dyn Constraint> {
		Box::new(self)
	}
}

impl Constraint for PinConstraint {
	fn render(&self) -> Option<[usize; 2]> {
		None
	}

	fn project(&self, ps: &mut [Particle]) -> Projection {
		ps[self.p].set_ppos(self.pos);
		Projection::Applied
	}

	fn corrections(&self, _ps: &[Particle], out: &mut Vec<Correction>) -> Projection {
		out.push(Correction::Snap {
			particle: self.p,
			pos: self.pos,
		});
		Projection::Applied
	}

	fn violation(&self, ps: &[Particle]) -> f32 {
		(ps[self.p].get_ppos() - self.pos).magnitude()
	}

	fn move_anchor(&mut self, pos: V2) -> bool {
		self.pos = pos;
		true
	}
}
