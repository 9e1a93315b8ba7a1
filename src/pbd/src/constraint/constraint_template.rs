use super::distance::DistanceConstraint;
use super::pin::PinConstraint;
use super::CRef;
use crate::error::PbdError;
use crate::particle::Particle;
use crate::V2;

#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraintTemplate {
	pub ps: [usize; 2],
	// None: initial separation
	pub l0: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PinConstraintTemplate {
	pub p: usize,
	// None: initial position
	pub pos: Option<V2>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConstraintTemplate {
	Distance(DistanceConstraintTemplate),
	Pin(PinConstraintTemplate),
}

impl ConstraintTemplate {
	pub fn distance(p1: usize, p2: usize, l0: Option<f32>) -> Self {
		Self::Distance(DistanceConstraintTemplate { ps: [p1, p2], l0 })
	}

	pub fn pin(p: usize, pos: Option<V2>) -> Self {
		Self::Pin(PinConstraintTemplate { p, pos })
	}

	fn indices(&self) -> &[usize] {
		match self {
			Self::Distance(ct) => &ct.ps,
			Self::Pin(ct) => std::slice::from_ref(&ct.p),
		}
	}

	/// Topology check, `id` is the constraint index used in errors.
	/// Returns true when the template is valid but suspicious
	/// (a pin on a movable particle without `strict_pins`).
	pub fn validate(
		&self,
		id: usize,
		ps: &[Particle],
		strict_pins: bool,
	) -> Result<bool, PbdError> {
		for &index in self.indices() {
			if index >= ps.len() {
				return Err(PbdError::ParticleOutOfRange {
					constraint: id,
					index,
					count: ps.len(),
				});
			}
		}
		match self {
			Self::Distance(ct) => {
				let [a, b] = ct.ps;
				if a == b {
					return Err(PbdError::SelfDistance {
						constraint: id,
						index: a,
					});
				}
				if ps[a].get_imass() == 0.0 && ps[b].get_imass() == 0.0 {
					return Err(PbdError::ImmovablePair { constraint: id, a, b });
				}
				if let Some(l0) = ct.l0 {
					if !l0.is_finite() || l0 < 0.0 {
						return Err(PbdError::InvalidParameter {
							name: "rest_length",
							reason: "must be finite and non-negative",
						});
					}
				}
				Ok(false)
			}
			Self::Pin(ct) => {
				if ps[ct.p].get_imass() == 0.0 {
					return Ok(false);
				}
				if strict_pins {
					return Err(PbdError::MovablePin {
						constraint: id,
						index: ct.p,
					});
				}
				Ok(true)
			}
		}
	}

	/// Assumes `validate` passed.
	pub fn instantiate(&self, ps: &[Particle]) -> CRef {
		match self {
			Self::Distance(ct) => {
				let [p1, p2] = ct.ps;
				let dc = match ct.l0 {
					Some(l0) => DistanceConstraint::new_with_l0(p1, p2, l0),
					None => DistanceConstraint::new(p1, p2, ps),
				};
				dc.build()
			}
			Self::Pin(ct) => {
				let pc = match ct.pos {
					Some(pos) => PinConstraint::new_with_pos(ct.p, pos),
					None => PinConstraint::new(ct.p, ps),
				};
				pc.build()
			}
		}
	}
}
