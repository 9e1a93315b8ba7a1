use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use crate::config::SimConfig;
use crate::constraint_group::ConstraintGroup;
use crate::controller_message::ControllerMessage;
use crate::error::PbdError;
use crate::particle::{Particle, ParticleStore};
use crate::physical_model::PhysicalModel;
use crate::V2;
use protocol::pr_model::PrModel;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
	pub frame: u64,
	// projections skipped because both endpoints coincided
	pub degenerate: usize,
	// after the last relaxation pass, before commit
	pub max_violation: f32,
}

/// Owns the whole simulation state and sequences one frame:
/// external forces, prediction, relaxation passes, velocity update.
#[derive(Clone)]
pub struct PWorld {
	config: SimConfig,
	frame: u64,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,

	ps: ParticleStore,
	constraints: ConstraintGroup,
}

impl PWorld {
	pub fn initialize(config: SimConfig, model: &PhysicalModel) -> Result<Self, PbdError> {
		config.validate()?;
		let mut ps = ParticleStore::new(config.max_particles);
		ps.reserve(model.particles.len());
		for p in model.particles.iter() {
			if !p.imass.is_finite() || p.imass < 0.0 {
				return Err(PbdError::InvalidParameter {
					name: "inverse_mass",
					reason: "must be finite and non-negative",
				});
			}
			ps.add(p)?;
		}
		let mut constraints = ConstraintGroup::new(config.max_constraints);
		constraints.reserve(model.constraints.len());
		for (id, ct) in model.constraints.iter().enumerate() {
			if ct.validate(id, ps.as_slice(), config.strict_pins)? {
				eprintln!("WARN: constraint {}: pinned particle has nonzero inverse mass", id);
			}
			constraints.add_constraint(ct.instantiate(ps.as_slice()))?;
		}
		eprintln!(
			"INFO: add model: {} particles, {} constraints",
			ps.len(),
			constraints.len()
		);
		Ok(Self {
			config,
			frame: 0,
			forward_frames: -1,
			ps,
			constraints,
		})
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	pub fn config(&self) -> &SimConfig {
		&self.config
	}

	pub fn frame(&self) -> u64 {
		self.frame
	}

	pub fn particles(&self) -> &[Particle] {
		self.ps.as_slice()
	}

	pub fn constraint_len(&self) -> usize {
		self.constraints.len()
	}

	/// Retarget a pin, applied from the next frame on.
	pub fn move_pin(&mut self, constraint: usize, pos: V2) -> bool {
		self.constraints.move_anchor(constraint, pos)
	}

	/// Advance exactly one frame. On error nothing is committed: positions
	/// and velocities keep the previous frame's values.
	pub fn step_frame(&mut self, dt: f32) -> Result<FrameStats, PbdError> {
		if !dt.is_finite() || dt <= 0.0 {
			return Err(PbdError::InvalidParameter {
				name: "dt",
				reason: "must be finite and positive",
			});
		}
		let vels = self.ps.velocities();
		self.ps
			.apply_external(dt, self.config.gravity(), self.config.damping);
		self.ps.predict(dt);
		let mut degenerate = 0;
		for _ in 0..self.config.iteration {
			degenerate += self
				.constraints
				.solve_constraints(self.ps.as_mut_slice(), self.config.solver);
		}
		let max_violation = self.constraints.max_violation(self.ps.as_slice());
		if let Err(e) = self.ps.check_finite().and_then(|_| self.ps.reconcile(dt)) {
			self.ps.restore_velocities(&vels);
			eprintln!("ERROR: frame {} aborted: {}", self.frame + 1, e);
			return Err(e);
		}
		self.frame += 1;
		if degenerate > 0 {
			eprintln!(
				"WARN: frame {}: skipped {} degenerate distance projections",
				self.frame, degenerate
			);
		}
		Ok(FrameStats {
			frame: self.frame,
			degenerate,
			max_violation,
		})
	}

	pub fn run(&mut self) -> Result<FrameStats, PbdError> {
		self.step_frame(self.config.dt)
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			frame: self.frame,
			positions: self.ps.positions(),
			edges: self.constraints.pr_edges(),
		}
	}

	/// Drive frames in real time, emitting a snapshot after every frame.
	/// Returns when `Quit` arrives, the controller hangs up, the renderer
	/// hangs up, or a frame fails.
	pub fn run_thread(&mut self, tx: Sender<PrModel>, rx: Receiver<ControllerMessage>) {
		let rtime = Duration::from_secs_f32(self.config.dt * self.config.time_scale);
		let mut start_time = Instant::now();
		let mut first_frame = true;
		eprintln!("INFO: driver started at frame {}", self.frame);
		'running: loop {
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				if !first_frame {
					if let Err(e) = self.run() {
						eprintln!("ERROR: driver stopped: {}", e);
						break;
					}
				} else {
					first_frame = false;
				}
				if tx.send(self.pr_model()).is_err() {
					break;
				}
			}

			loop {
				match rx.try_recv() {
					Ok(ControllerMessage::TogglePause) => {
						if self.forward_frames == 0 {
							self.forward_frames = -1;
						} else {
							self.forward_frames = 0;
						}
					}
					Ok(ControllerMessage::FrameForward) => {
						if self.forward_frames >= 0 {
							self.forward_frames += 1;
						}
					}
					Ok(ControllerMessage::Quit) | Err(TryRecvError::Disconnected) => {
						break 'running
					}
					Err(TryRecvError::Empty) => break,
				}
			}
			let elapsed = start_time.elapsed();
			if elapsed < rtime {
				std::thread::sleep(rtime - elapsed);
			}
			start_time = Instant::now();
		}
		eprintln!("INFO: driver stopped at frame {}", self.frame);
	}
}
