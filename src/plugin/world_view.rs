//! Exposes the ECS world to the map generators through [WorldView]
//!

use crate::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// Read-only queries over the [Grid], agents and hives of the ECS world
#[derive(SystemParam)]
pub struct EcsWorldView<'w, 's> {
	/// Every level grid, exactly one is expected
	grids: Query<'w, 's, &'static Grid>,
	/// Every agent with a team
	agents: Query<'w, 's, (&'static Position, &'static Team)>,
	/// Every hive marker
	hives: Query<'w, 's, &'static Position, With<Hive>>,
}

impl EcsWorldView<'_, '_> {
	/// Number of [Grid] components in the world
	pub fn grid_count(&self) -> usize {
		self.grids.iter().count()
	}
}

impl WorldView for EcsWorldView<'_, '_> {
	fn grid(&self) -> Option<&Grid> {
		self.grids.iter().next()
	}
	fn agents(&self) -> impl Iterator<Item = AgentView> + '_ {
		self.agents
			.iter()
			.map(|(position, team)| AgentView::new(position.0, team.0))
	}
	fn hives(&self) -> impl Iterator<Item = IVec2> + '_ {
		self.hives.iter().map(|position| position.0)
	}
}
