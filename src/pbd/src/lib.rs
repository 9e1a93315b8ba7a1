//! Position based dynamics for a pinned chain of point masses.
//!
//! One frame: external forces, position prediction, a fixed number of
//! constraint relaxation passes, and a velocity update derived from the
//! corrected positions. See `pworld::PWorld`.

pub mod config;
pub mod constraint;
pub mod constraint_group;
pub mod controller_message;
pub mod error;
pub mod particle;
pub mod physical_model;
pub mod pworld;

pub type V2 = nalgebra::Vector2<f32>;

pub use config::{ChainConfig, ScenarioConfig, SimConfig, SolverMode};
pub use error::PbdError;
pub use physical_model::PhysicalModel;
pub use pworld::{FrameStats, PWorld};
