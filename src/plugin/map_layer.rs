//! Logic relating to regenerating [InfluenceMap]s from the current state of
//! the world
//!

use crate::prelude::*;
use bevy::prelude::*;

/// A request for an influence field, attach it to any entity and the
/// [refresh_influence_maps] system keeps `field` up to date every frame
#[derive(Component, Clone, Debug)]
pub struct InfluenceMap {
	/// Which map to generate
	kind: InfluenceMapKind,
	/// How rings are shaped into magnitudes
	falloff: FalloffSpec,
	/// The field produced on the last update, [None] until the first update
	/// or while the world has no [Grid]
	field: Option<FieldBuffer>,
}

impl InfluenceMap {
	/// Create a new instance of [InfluenceMap], its field is empty until the next update
	pub fn new(kind: InfluenceMapKind, falloff: FalloffSpec) -> Self {
		InfluenceMap {
			kind,
			falloff,
			field: None,
		}
	}
	/// Which map is generated
	pub fn get_kind(&self) -> InfluenceMapKind {
		self.kind
	}
	/// The falloff applied to the map
	pub fn get_falloff(&self) -> FalloffSpec {
		self.falloff
	}
	/// The most recently generated field
	pub fn get_field(&self) -> Option<&FieldBuffer> {
		self.field.as_ref()
	}
}

/// Regenerate the field of every [InfluenceMap] from the current world state
#[cfg(not(tarpaulin_include))]
pub fn refresh_influence_maps(
	world: EcsWorldView,
	config: Res<InfluenceConfig>,
	mut maps: Query<&mut InfluenceMap>,
) {
	if maps.is_empty() {
		return;
	}
	let grids = world.grid_count();
	if grids > 1 {
		warn!("Found {} grids, influence maps use the first one", grids);
	}
	for mut map in &mut maps {
		let field = map.kind.generate(&world, &map.falloff, &config);
		map.field = field;
	}
}
