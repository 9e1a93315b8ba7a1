// pr_model: Physical model for rendering

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrModel {
	pub frame: u64,
	pub positions: Vec<[f32; 2]>,
	// particle index pairs of distance constraints
	pub edges: Vec<[usize; 2]>,
}

impl PrModel {
	pub fn segments(&self) -> impl Iterator<Item = ([f32; 2], [f32; 2])> + '_ {
		self.edges
			.iter()
			.filter_map(|[a, b]| Some((*self.positions.get(*a)?, *self.positions.get(*b)?)))
	}
}
