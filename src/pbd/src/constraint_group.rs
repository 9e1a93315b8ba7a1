use crate::config::SolverMode;
use crate::constraint::{CRef, Correction, Projection};
use crate::error::PbdError;
use crate::particle::Particle;
use crate::V2;

/// Fixed capacity constraint arena, solved in index order.
#[derive(Clone)]
pub struct ConstraintGroup {
	constraints: Vec<CRef>,
	capacity: usize,
}

impl ConstraintGroup {
	pub fn new(capacity: usize) -> Self {
		Self {
			constraints: Vec::new(),
			capacity,
		}
	}

	/// Preallocate `additional` slots, never beyond the capacity bound.
	pub fn reserve(&mut self, additional: usize) {
		let free = self.capacity - self.constraints.len();
		self.constraints.reserve(additional.min(free));
	}

	pub fn add_constraint(&mut self, constraint: CRef) -> Result<usize, PbdError> {
		if self.constraints.len() >= self.capacity {
			return Err(PbdError::CapacityExceeded {
				resource: "constraints",
				limit: self.capacity,
			});
		}
		self.constraints.push(constraint);
		Ok(self.constraints.len() - 1)
	}

	pub fn len(&self) -> usize {
		self.constraints.len()
	}

	pub fn is_empty(&self) -> bool {
		self.constraints.is_empty()
	}

	pub fn move_anchor(&mut self, id: usize, pos: V2) -> bool {
		match self.constraints.get_mut(id) {
			Some(c) => c.move_anchor(pos),
			None => false,
		}
	}

	/// One relaxation pass, returns the number of skipped projections.
	pub fn solve_constraints(&self, ps: &mut [Particle], mode: SolverMode) -> usize {
		match mode {
			SolverMode::GaussSeidel => self.solve_sequential(ps),
			SolverMode::Jacobi => self.solve_jacobi(ps),
		}
	}

	fn solve_sequential(&self, ps: &mut [Particle]) -> usize {
		self.constraints
			.iter()
			.filter(|constraint| constraint.project(ps) == Projection::Degenerate)
			.count()
	}

	fn solve_jacobi(&self, ps: &mut [Particle]) -> usize {
		use rayon::prelude::*;
		let frozen: &[Particle] = ps;
		let results: Vec<(Vec<Correction>, Projection)> = self
			.constraints
			.par_iter()
			.map(|constraint| {
				let mut out = Vec::with_capacity(2);
				let proj = constraint.corrections(frozen, &mut out);
				(out, proj)
			})
			.collect();

		let mut acc = vec![(V2::zeros(), 0u32); ps.len()];
		let mut snaps = Vec::new();
		let mut degenerate = 0;
		for (out, proj) in results.iter() {
			if *proj == Projection::Degenerate {
				degenerate += 1;
			}
			for correction in out.iter() {
				match *correction {
					Correction::Offset { particle, dp } => {
						acc[particle].0 += dp;
						acc[particle].1 += 1;
					}
					Correction::Snap { particle, pos } => snaps.push((particle, pos)),
				}
			}
		}
		for (p, (dp, n)) in ps.iter_mut().zip(acc.into_iter()) {
			if n > 0 {
				p.add_ppos(dp / n as f32);
			}
		}
		for (particle, pos) in snaps.into_iter() {
			ps[particle].set_ppos(pos);
		}
		degenerate
	}

	pub fn max_violation(&self, ps: &[Particle]) -> f32 {
		self.constraints
			.iter()
			.map(|constraint| constraint.violation(ps))
			.fold(0.0, f32::max)
	}

	pub fn pr_edges(&self) -> Vec<[usize; 2]> {
		self.constraints
			.iter()
			.filter_map(|constraint| constraint.render())
			.collect()
	}
}
