//! The approach map decreases towards every ally agent, an agent wanting to
//! close in on the player team steps to its lowest neighbour.
//!

use crate::prelude::*;
use bevy::prelude::*;

use super::{relax_and_shape, seed_team};

/// Seed the tile of every agent on the ally team and relax outwards
pub fn gen_approach_map(
	world: &impl WorldView,
	falloff: &FalloffSpec,
	config: &InfluenceConfig,
) -> Option<FieldBuffer> {
	let grid = world.grid()?;
	let mut field = FieldBuffer::initialize(grid);
	let seeded = seed_team(world, grid, &mut field, config.ally_team);
	debug!("Approach map seeded from {} ally tiles", seeded);
	Some(relax_and_shape(grid, field, falloff, config))
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// A single ally in the middle of an open grid produces Manhattan distances
	#[test]
	fn manhattan_from_single_ally() {
		let world = WorldSnapshot::new(Grid::open(5, 5)).with_agent(IVec2::new(2, 2), 0);
		let field = gen_approach_map(&world, &FalloffSpec::linear(1.0), &InfluenceConfig::default()).unwrap();

		let actual: Vec<f32> = vec![
			4.0, 3.0, 2.0, 3.0, 4.0,
			3.0, 2.0, 1.0, 2.0, 3.0,
			2.0, 1.0, 0.0, 1.0, 2.0,
			3.0, 2.0, 1.0, 2.0, 3.0,
			4.0, 3.0, 2.0, 3.0, 4.0,
		];
		assert_eq!(actual, field.get_field().to_vec());
	}
	/// A wall sealing the corner leaves it unreachable
	#[test]
	fn sealed_corner() {
		let grid = Grid::from_ascii(&[
			".#...",
			"#....",
			".....",
			".....",
			".....",
		]).unwrap();
		let world = WorldSnapshot::new(grid).with_agent(IVec2::new(2, 2), 0);
		let field = gen_approach_map(&world, &FalloffSpec::linear(1.0), &InfluenceConfig::default()).unwrap();
		assert_eq!(UNREACHED, field.read(0, 0));
		assert_eq!(UNREACHED, field.read(1, 0));
		assert_eq!(UNREACHED, field.read(0, 1));
		assert_eq!(0.0, field.read(2, 2));
		assert_eq!(4.0, field.read(4, 4));
	}
	/// Only the configured ally team seeds the map
	#[test]
	fn enemies_do_not_seed() {
		let world = WorldSnapshot::new(Grid::open(4, 1))
			.with_agent(IVec2::new(0, 0), 2)
			.with_agent(IVec2::new(3, 0), 0);
		let field = gen_approach_map(&world, &FalloffSpec::linear(1.0), &InfluenceConfig::default()).unwrap();
		assert_eq!(vec![3.0, 2.0, 1.0, 0.0], field.get_field().to_vec());

		let config = InfluenceConfig { ally_team: 2, ..Default::default() };
		let field = gen_approach_map(&world, &FalloffSpec::linear(1.0), &config).unwrap();
		assert_eq!(vec![0.0, 1.0, 2.0, 3.0], field.get_field().to_vec());
	}
	/// Exponential falloff maps the seed to one
	#[test]
	fn exponential_approach() {
		let world = WorldSnapshot::new(Grid::open(3, 1)).with_agent(IVec2::new(0, 0), 0);
		let field = gen_approach_map(&world, &FalloffSpec::exponential(0.5), &InfluenceConfig::default()).unwrap();
		assert_eq!(vec![1.0, 0.5, 0.25], field.get_field().to_vec());
	}
	/// With no allies nothing is reached
	#[test]
	fn no_allies() {
		let world = WorldSnapshot::new(Grid::open(3, 3));
		let field = gen_approach_map(&world, &FalloffSpec::linear(1.0), &InfluenceConfig::default()).unwrap();
		assert_eq!(0, field.reached_count());
	}
}
