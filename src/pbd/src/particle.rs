use crate::error::PbdError;
use crate::V2;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleTemplate {
	pub imass: f32,
	pub pos: V2,
	pub vel: V2,
}

impl ParticleTemplate {
	pub fn new(imass: f32, pos: V2) -> Self {
		Self {
			imass,
			pos,
			vel: V2::zeros(),
		}
	}

	pub fn with_vel(mut self, vel: V2) -> Self {
		self.vel = vel;
		self
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub pos: V2,
	// predicted position, scratch within a frame
	pub ppos: V2,
	pub vel: V2,
	pub imass: f32, // 0 is immovable
}

impl Particle {
	pub fn from_template(t: &ParticleTemplate) -> Self {
		Self {
			pos: t.pos,
			ppos: t.pos,
			vel: t.vel,
			imass: t.imass,
		}
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_ppos(&self) -> V2 {
		self.ppos
	}

	pub fn get_imass(&self) -> f32 {
		self.imass
	}

	pub fn add_ppos(&mut self, dp: V2) {
		self.ppos += dp;
	}

	pub fn set_ppos(&mut self, p: V2) {
		self.ppos = p;
	}
}

/// Fixed capacity particle arena. Slots are filled once during scene
/// setup, afterwards only the float fields change.
#[derive(Clone, Debug)]
pub struct ParticleStore {
	particles: Vec<Particle>,
	capacity: usize,
}

impl ParticleStore {
	pub fn new(capacity: usize) -> Self {
		Self {
			particles: Vec::new(),
			capacity,
		}
	}

	/// Preallocate `additional` slots, never beyond the capacity bound.
	pub fn reserve(&mut self, additional: usize) {
		let free = self.capacity - self.particles.len();
		self.particles.reserve(additional.min(free));
	}

	pub fn add(&mut self, t: &ParticleTemplate) -> Result<usize, PbdError> {
		if self.particles.len() >= self.capacity {
			return Err(PbdError::CapacityExceeded {
				resource: "particles",
				limit: self.capacity,
			});
		}
		self.particles.push(Particle::from_template(t));
		Ok(self.particles.len() - 1)
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn as_slice(&self) -> &[Particle] {
		&self.particles
	}

	pub fn as_mut_slice(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn positions(&self) -> Vec<[f32; 2]> {
		self.particles.iter().map(|p| p.pos.into()).collect()
	}

	/// v += dt * w * g, then v *= damping
	pub fn apply_external(&mut self, dt: f32, gravity: V2, damping: f32) {
		for p in self.particles.iter_mut() {
			p.vel += dt * p.imass * gravity;
			p.vel *= damping;
		}
	}

	/// x* = x + dt * v, immovable particles stay put
	pub fn predict(&mut self, dt: f32) {
		for p in self.particles.iter_mut() {
			if p.imass == 0.0 {
				p.ppos = p.pos;
				continue;
			}
			p.ppos = p.pos + dt * p.vel;
		}
	}

	/// v = (x* - x) / dt, then commit x = x*. Nothing is written if any
	/// resulting velocity is non-finite.
	pub fn reconcile(&mut self, dt: f32) -> Result<(), PbdError> {
		if let Some(particle) = self.particles.iter().position(|p| {
			let v = (p.ppos - p.pos) / dt;
			!(v[0].is_finite() && v[1].is_finite())
		}) {
			return Err(PbdError::NonFinite { particle });
		}
		for p in self.particles.iter_mut() {
			p.vel = (p.ppos - p.pos) / dt;
			p.pos = p.ppos;
		}
		Ok(())
	}

	pub fn check_finite(&self) -> Result<(), PbdError> {
		match self
			.particles
			.iter()
			.position(|p| !(p.ppos[0].is_finite() && p.ppos[1].is_finite()))
		{
			Some(particle) => Err(PbdError::NonFinite { particle }),
			None => Ok(()),
		}
	}

	pub fn velocities(&self) -> Vec<V2> {
		self.particles.iter().map(|p| p.vel).collect()
	}

	pub fn restore_velocities(&mut self, vels: &[V2]) {
		for (p, v) in self.particles.iter_mut().zip(vels.iter()) {
			p.vel = *v;
		}
	}
}
