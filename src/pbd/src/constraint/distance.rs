use crate::constraint::{Constraint, Correction, Projection};
use crate::particle::Particle;
use crate::V2;

#[derive(Clone, Debug)]
pub struct DistanceConstraint {
	p1: usize,
	p2: usize,
	l0: f32,
}

impl DistanceConstraint {
	/// Rest length taken from the current separation.
	pub fn new(p1: usize, p2: usize, ps: &[Particle]) -> Self {
		let l0 = (ps[p1].get_pos() - ps[p2].get_pos()).magnitude();
		Self::new_with_l0(p1, p2, l0)
	}

	pub fn new_with_l0(p1: usize, p2: usize, l0: f32) -> Self {
		Self { p1, p2, l0 }
	}

	pub fn rest_length(&self) -> f32 {
		self.l0
	}

	pub fn build(self) -> Box<dyn Constraint> {
		Box::new(self)
	}

	// None if the endpoints coincide
	fn deltas(&self, ps: &[Particle]) -> Option<(V2, V2)> {
		let imass1 = ps[self.p1].get_imass();
		let imass2 = ps[self.p2].get_imass();
		let imass = imass1 + imass2;
		if imass == 0.0 {
			return Some((V2::zeros(), V2::zeros()));
		}
		let dp = ps[self.p1].get_ppos() - ps[self.p2].get_ppos();
		let l = dp.magnitude();
		if !l.is_normal() {
			return None;
		}
		let n = dp / l;
		let c = l - self.l0;
		Some((-(imass1 / imass) * c * n, (imass2 / imass) * c * n))
	}
}

impl Constraint for DistanceConstraint {
	fn render(&self) -> Option<[usize; 2]> {
		Some([self.p1, self.p2])
	}

	fn project(&self, ps: &mut [Particle]) -> Projection {
		match self.deltas(ps) {
			Some((d1, d2)) => {
				ps[self.p1].add_ppos(d1);
				ps[self.p2].add_ppos(d2);
				Projection::Applied
			}
			None => Projection::Degenerate,
		}
	}

	fn corrections(&self, ps: &[Particle], out: &mut Vec<Correction>) -> Projection {
		match self.deltas(ps) {
			Some((d1, d2)) => {
				out.push(Correction::Offset {
					particle: self.p1,
					dp: d1,
				});
				out.push(Correction::Offset {
					particle: self.p2,
					dp: d2,
				});
				Projection::Applied
			}
			None => Projection::Degenerate,
		}
	}

	fn violation(&self, ps: &[Particle]) -> f32 {
		let l = (ps[self.p1].get_ppos() - ps[self.p2].get_ppos()).magnitude();
		(l - self.l0).abs()
	}
}
