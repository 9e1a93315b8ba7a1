use std::path::PathBuf;

use pbd::constraint::constraint_template::ConstraintTemplate;
use pbd::particle::ParticleTemplate;
use pbd::{ChainConfig, PWorld, PbdError, PhysicalModel, ScenarioConfig, SimConfig, SolverMode, V2};

fn two_particles(w0: f32, w1: f32) -> PhysicalModel {
	let mut model = PhysicalModel::default();
	model.add_particle(ParticleTemplate::new(w0, V2::new(0.0, 0.0)));
	model.add_particle(ParticleTemplate::new(w1, V2::new(0.1, 0.0)));
	model
}

fn init_err(model: &PhysicalModel, config: SimConfig) -> PbdError {
	match PWorld::initialize(config, model) {
		Ok(_) => panic!("initialize should fail"),
		Err(e) => e,
	}
}

#[test]
fn scenario_file_loads() {
	let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("scenarios")
		.join("chain.yaml");
	let scenario = ScenarioConfig::load(&path).unwrap();
	assert_eq!(scenario.sim, SimConfig::default());
	assert_eq!(scenario.chain, ChainConfig::default());
	assert_eq!(scenario.sim.solver, SolverMode::GaussSeidel);
}

#[test]
fn missing_scenario_file_fails() {
	let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios/none.yaml");
	assert!(ScenarioConfig::load(&path).is_err());
}

#[test]
fn constraint_index_out_of_range() {
	let mut model = two_particles(0.0, 1.0);
	model.add_constraint(ConstraintTemplate::pin(0, None));
	model.add_constraint(ConstraintTemplate::distance(1, 2, Some(0.1)));
	assert_eq!(
		init_err(&model, SimConfig::default()),
		PbdError::ParticleOutOfRange {
			constraint: 1,
			index: 2,
			count: 2
		}
	);
}

#[test]
fn distance_to_self() {
	let mut model = two_particles(0.0, 1.0);
	model.add_constraint(ConstraintTemplate::distance(1, 1, Some(0.1)));
	assert_eq!(
		init_err(&model, SimConfig::default()),
		PbdError::SelfDistance {
			constraint: 0,
			index: 1
		}
	);
}

#[test]
fn distance_between_immovables() {
	let mut model = two_particles(0.0, 0.0);
	model.add_constraint(ConstraintTemplate::distance(0, 1, Some(0.1)));
	let e = init_err(&model, SimConfig::default());
	assert_eq!(
		e,
		PbdError::ImmovablePair {
			constraint: 0,
			a: 0,
			b: 1
		}
	);
	assert!(e.is_configuration());
}

#[test]
fn pin_on_movable_particle() {
	let mut model = two_particles(1.0, 1.0);
	model.add_constraint(ConstraintTemplate::pin(0, None));
	assert!(PWorld::initialize(SimConfig::default(), &model).is_ok());
	assert_eq!(
		init_err(&model, SimConfig::default().with_strict_pins()),
		PbdError::MovablePin {
			constraint: 0,
			index: 0
		}
	);
}

#[test]
fn capacity_is_enforced() {
	let model = PhysicalModel::new_chain(&ChainConfig::default());
	assert_eq!(
		init_err(&model, SimConfig::default().with_capacity(5, 10)),
		PbdError::CapacityExceeded {
			resource: "particles",
			limit: 5
		}
	);
	assert_eq!(
		init_err(&model, SimConfig::default().with_capacity(6, 5)),
		PbdError::CapacityExceeded {
			resource: "constraints",
			limit: 5
		}
	);
	assert!(PWorld::initialize(SimConfig::default().with_capacity(6, 6), &model).is_ok());
}

#[test]
fn negative_inverse_mass() {
	let model = two_particles(-1.0, 1.0);
	assert!(matches!(
		init_err(&model, SimConfig::default()),
		PbdError::InvalidParameter {
			name: "inverse_mass",
			..
		}
	));
}

#[test]
fn invalid_config_rejected() {
	let model = PhysicalModel::new_chain(&ChainConfig::default());
	assert!(matches!(
		init_err(&model, SimConfig::default().with_damping(-0.5)),
		PbdError::InvalidParameter { name: "damping", .. }
	));
	assert!(matches!(
		init_err(&model, SimConfig::default().with_gravity(V2::new(f32::NAN, 0.0))),
		PbdError::InvalidParameter { name: "gravity", .. }
	));
}

#[test]
fn non_finite_frame_rolls_back() {
	let mut model = PhysicalModel::default();
	let start = V2::new(f32::MAX, 0.0);
	let vel = V2::new(f32::MAX, 0.0);
	model.add_particle(ParticleTemplate::new(1.0, start).with_vel(vel));
	let mut w = PWorld::initialize(SimConfig::default(), &model).unwrap();
	let e = w.run().unwrap_err();
	assert_eq!(e, PbdError::NonFinite { particle: 0 });
	assert!(!e.is_configuration());
	assert_eq!(w.frame(), 0);
	assert_eq!(w.particles()[0].pos, start);
	assert_eq!(w.particles()[0].vel, vel);
	// deterministic, so the retry fails the same way
	assert_eq!(w.run().unwrap_err(), e);
}

#[test]
fn huge_capacity_bound_does_not_preallocate() {
	let config = SimConfig::default().with_capacity(usize::MAX, usize::MAX);
	let w = PWorld::initialize(config.clone(), &PhysicalModel::default()).unwrap();
	assert!(w.particles().is_empty());
	let model = PhysicalModel::new_chain(&ChainConfig::default());
	let w = PWorld::initialize(config, &model).unwrap();
	assert_eq!(w.particles().len(), 6);
	assert_eq!(w.constraint_len(), 6);
}

#[test]
fn infinite_velocity_rolls_back() {
	// both positions finite, their difference over dt is not
	let mut model = PhysicalModel::default();
	let start = V2::new(f32::MAX, 0.0);
	model.add_particle(ParticleTemplate::new(0.0, start));
	model.add_constraint(ConstraintTemplate::pin(0, Some(V2::new(-f32::MAX, 0.0))));
	let mut w = PWorld::initialize(SimConfig::default(), &model).unwrap();
	assert_eq!(w.run().unwrap_err(), PbdError::NonFinite { particle: 0 });
	assert_eq!(w.frame(), 0);
	assert_eq!(w.particles()[0].pos, start);
	assert_eq!(w.particles()[0].vel, V2::zeros());
}
