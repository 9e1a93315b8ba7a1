use std::fmt;

/// Errors raised while building or stepping a world.
#[derive(Clone, Debug, PartialEq)]
pub enum PbdError {
	/// A constraint references a particle that does not exist.
	ParticleOutOfRange {
		constraint: usize,
		index: usize,
		count: usize,
	},
	/// A distance constraint joins a particle to itself.
	SelfDistance { constraint: usize, index: usize },
	/// Both endpoints of a distance constraint have zero inverse mass.
	ImmovablePair {
		constraint: usize,
		a: usize,
		b: usize,
	},
	/// Pin target is movable, only reported with `strict_pins`.
	MovablePin { constraint: usize, index: usize },
	CapacityExceeded {
		resource: &'static str,
		limit: usize,
	},
	InvalidParameter {
		name: &'static str,
		reason: &'static str,
	},
	/// A predicted position or the derived velocity left the finite range,
	/// the frame was rolled back.
	NonFinite { particle: usize },
}

impl PbdError {
	pub fn is_configuration(&self) -> bool {
		!matches!(self, Self::NonFinite { .. })
	}
}

impl fmt::Display for PbdError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ParticleOutOfRange {
				constraint,
				index,
				count,
			} => write!(
				f,
				"constraint {constraint}: particle {index} out of range (count={count})"
			),
			Self::SelfDistance { constraint, index } => write!(
				f,
				"constraint {constraint}: distance from particle {index} to itself"
			),
			Self::ImmovablePair { constraint, a, b } => write!(
				f,
				"constraint {constraint}: particles {a} and {b} both have zero inverse mass"
			),
			Self::MovablePin { constraint, index } => write!(
				f,
				"constraint {constraint}: pinned particle {index} has nonzero inverse mass"
			),
			Self::CapacityExceeded { resource, limit } => {
				write!(f, "too many {resource} (limit={limit})")
			}
			Self::InvalidParameter { name, reason } => {
				write!(f, "invalid {name}: {reason}")
			}
			Self::NonFinite { particle } => {
				write!(f, "particle {particle} reached a non-finite position or velocity")
			}
		}
	}
}

impl std::error::Error for PbdError {}
