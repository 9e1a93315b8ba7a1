use std::sync::mpsc::channel;
use std::thread;

use pbd::controller_message::ControllerMessage;
use pbd::{ChainConfig, PWorld, PhysicalModel, SimConfig};

fn paused_world() -> PWorld {
	let model = PhysicalModel::new_chain(&ChainConfig::default());
	let config = SimConfig::default().with_time_scale(0.0);
	PWorld::initialize(config, &model).unwrap().with_paused()
}

#[test]
fn paused_driver_steps_on_demand() {
	let mut world = paused_world();
	let (tx, rx) = channel();
	let (ctx, crx) = channel();
	let handle = thread::spawn(move || {
		world.run_thread(tx, crx);
		world
	});
	let first = rx.recv().unwrap();
	assert_eq!(first.frame, 0);
	assert_eq!(first.positions[0], [0.5, 0.8]);

	ctx.send(ControllerMessage::FrameForward).unwrap();
	assert_eq!(rx.recv().unwrap().frame, 1);
	ctx.send(ControllerMessage::FrameForward).unwrap();
	assert_eq!(rx.recv().unwrap().frame, 2);

	ctx.send(ControllerMessage::Quit).unwrap();
	let world = handle.join().unwrap();
	assert_eq!(world.frame(), 2);
}

#[test]
fn driver_runs_until_receiver_hangs_up() {
	let model = PhysicalModel::new_chain(&ChainConfig::default());
	let config = SimConfig::default().with_time_scale(0.0);
	let mut world = PWorld::initialize(config, &model).unwrap();
	let (tx, rx) = channel();
	let (_ctx, crx) = channel();
	let handle = thread::spawn(move || {
		world.run_thread(tx, crx);
		world
	});
	for expected in 0..20 {
		assert_eq!(rx.recv().unwrap().frame, expected);
	}
	drop(rx);
	let world = handle.join().unwrap();
	assert!(world.frame() >= 19);
}

#[test]
fn toggle_pause_resumes_playback() {
	let mut world = paused_world();
	let (tx, rx) = channel();
	let (ctx, crx) = channel();
	let handle = thread::spawn(move || {
		world.run_thread(tx, crx);
		world
	});
	assert_eq!(rx.recv().unwrap().frame, 0);
	ctx.send(ControllerMessage::TogglePause).unwrap();
	for expected in 1..10 {
		assert_eq!(rx.recv().unwrap().frame, expected);
	}
	drop(ctx);
	let world = handle.join().unwrap();
	assert!(world.frame() >= 9);
}
