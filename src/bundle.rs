//! Components describing agents and hives in the ECS world along with
//! bundles to spawn them
//!

use bevy::prelude::*;

/// Tile coordinate `(x, y)` of an entity on the [crate::prelude::Grid]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub struct Position(pub IVec2);

impl Position {
	/// Create a new instance of [Position]
	pub fn new(x: i32, y: i32) -> Self {
		Position(IVec2::new(x, y))
	}
}

/// Team id of an agent, `0` is the player/ally team by default
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub struct Team(pub u32);

/// Marks an entity as a hive that packs regroup around
#[derive(Component, Clone, Copy, Debug, Default, Reflect)]
pub struct Hive;

/// An agent standing on the grid
#[derive(Bundle)]
pub struct AgentBundle {
	/// Where the agent is
	position: Position,
	/// Who the agent fights for
	team: Team,
}

impl AgentBundle {
	/// Create a new instance of [AgentBundle]
	pub fn new(x: i32, y: i32, team: u32) -> Self {
		AgentBundle {
			position: Position::new(x, y),
			team: Team(team),
		}
	}
}

/// A hive marker placed on the grid
#[derive(Bundle)]
pub struct HiveBundle {
	/// Where the hive is
	position: Position,
	/// Hive marker
	hive: Hive,
}

impl HiveBundle {
	/// Create a new instance of [HiveBundle]
	pub fn new(x: i32, y: i32) -> Self {
		HiveBundle {
			position: Position::new(x, y),
			hive: Hive,
		}
	}
}
