//! Defines the Bevy [Plugin] for influence fields
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod map_layer;
pub mod world_view;

/// System sets of the plugin
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum InfluenceSet {
	/// Regeneration of every [InfluenceMap]
	Generate,
}

/// Registers the influence field types and keeps every [InfluenceMap] in
/// sync with the world each [Update]
pub struct InfluenceFieldsPlugin;

impl Plugin for InfluenceFieldsPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<Tile>()
			.register_type::<Position>()
			.register_type::<Team>()
			.register_type::<Hive>()
			.register_type::<FalloffKind>()
			.register_type::<FalloffSpec>()
			.register_type::<FleeStrategy>()
			.register_type::<InfluenceMapKind>()
			.register_type::<InfluenceConfig>()
			.init_resource::<InfluenceConfig>()
			.add_systems(
				Update,
				map_layer::refresh_influence_maps.in_set(InfluenceSet::Generate),
			);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	/// Build a headless app with the plugin
	fn app() -> App {
		let mut app = App::new();
		app.add_plugins(InfluenceFieldsPlugin);
		app
	}
	#[test]
	fn maps_are_generated_on_update() {
		let mut app = app();
		app.world_mut().spawn(Grid::open(5, 5));
		app.world_mut().spawn(AgentBundle::new(2, 2, 0));
		app.world_mut().spawn(HiveBundle::new(0, 0));
		let approach = app
			.world_mut()
			.spawn(InfluenceMap::new(InfluenceMapKind::Approach, FalloffSpec::linear(1.0)))
			.id();
		let hive = app
			.world_mut()
			.spawn(InfluenceMap::new(InfluenceMapKind::HivePack, FalloffSpec::linear(1.0)))
			.id();
		app.update();

		let field = app
			.world()
			.get::<InfluenceMap>(approach)
			.and_then(|m| m.get_field())
			.unwrap();
		assert_eq!(0.0, field.read(2, 2));
		assert_eq!(4.0, field.read(0, 0));
		let field = app
			.world()
			.get::<InfluenceMap>(hive)
			.and_then(|m| m.get_field())
			.unwrap();
		assert_eq!(0.0, field.read(0, 0));
		assert_eq!(8.0, field.read(4, 4));
	}
	#[test]
	fn maps_follow_agents() {
		let mut app = app();
		app.world_mut().spawn(Grid::open(5, 1));
		let agent = app.world_mut().spawn(AgentBundle::new(0, 0, 0)).id();
		let map = app
			.world_mut()
			.spawn(InfluenceMap::new(InfluenceMapKind::Approach, FalloffSpec::linear(1.0)))
			.id();
		app.update();
		let before = app.world().get::<InfluenceMap>(map).and_then(|m| m.get_field()).cloned().unwrap();
		assert_eq!(0.0, before.read(0, 0));

		if let Some(mut position) = app.world_mut().get_mut::<Position>(agent) {
			*position = Position::new(4, 0);
		}
		app.update();
		let after = app.world().get::<InfluenceMap>(map).and_then(|m| m.get_field()).cloned().unwrap();
		assert_eq!(4.0, after.read(0, 0));
		assert_eq!(0.0, after.read(4, 0));
	}
	#[test]
	fn no_grid_no_field() {
		let mut app = app();
		app.world_mut().spawn(AgentBundle::new(0, 0, 0));
		let map = app
			.world_mut()
			.spawn(InfluenceMap::new(InfluenceMapKind::Flee, FalloffSpec::linear(1.0)))
			.id();
		app.update();
		assert!(app.world().get::<InfluenceMap>(map).unwrap().get_field().is_none());
	}
	#[test]
	fn config_resource_is_respected() {
		let mut app = App::new();
		app.insert_resource(InfluenceConfig {
			shooting_range: 2,
			..Default::default()
		});
		app.add_plugins(InfluenceFieldsPlugin);
		app.world_mut().spawn(Grid::open(9, 9));
		app.world_mut().spawn(AgentBundle::new(4, 4, 0));
		let map = app
			.world_mut()
			.spawn(InfluenceMap::new(InfluenceMapKind::Archer, FalloffSpec::linear(1.0)))
			.id();
		app.update();
		let field = app.world().get::<InfluenceMap>(map).and_then(|m| m.get_field()).unwrap();
		assert_eq!(2.0, field.read(4, 4));
		assert_eq!(0.0, field.read(4, 2));
	}
}
