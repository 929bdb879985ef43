//! The hive pack map decreases towards hive markers, monsters of a pack
//! descend it to regroup around their hive.
//!

use crate::prelude::*;
use bevy::prelude::*;

use super::relax_and_shape;

/// Seed every hive marker and relax outwards
pub fn gen_hive_pack_map(
	world: &impl WorldView,
	falloff: &FalloffSpec,
	config: &InfluenceConfig,
) -> Option<FieldBuffer> {
	let grid = world.grid()?;
	let mut field = FieldBuffer::initialize(grid);
	let mut seeded = 0;
	for hive in world.hives() {
		if field.seed_at(grid, hive) {
			seeded += 1;
		}
	}
	debug!("Hive pack map seeded from {} hives", seeded);
	Some(relax_and_shape(grid, field, falloff, config))
}
