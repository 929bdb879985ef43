//! The flee map is the approach map multiplied by a negative factor
//! (`-1.2` by default). Tiles next to allies become strongly negative, far
//! away tiles mildly negative, so descending it leads away from the allies.
//!
//! By default the scaled field is returned as is ([FleeStrategy::Rescale]).
//! [FleeStrategy::Relaxed] additionally relaxes the scaled field, which lets
//! an agent cornered in a dead-end near an ally prefer running past it into
//! open space.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Generate the approach map and invert it into a flee map
pub fn gen_flee_map(
	world: &impl WorldView,
	falloff: &FalloffSpec,
	config: &InfluenceConfig,
) -> Option<FieldBuffer> {
	let mut field = gen_approach_map(world, falloff, config)?;
	field.scale_reached(config.flee_scale);
	match config.flee_strategy {
		FleeStrategy::Rescale => {}
		FleeStrategy::Relaxed => {
			let grid = world.grid()?;
			let report = relax(grid, &mut field, config.max_sweeps);
			debug!("Flee map re-relaxed in {} sweeps", report.sweeps);
		}
	}
	Some(field)
}
