//! Tunables shared by the map generators
//!

use bevy::prelude::*;

/// Team id of the player/ally agents that seed approach, flee and archer maps
pub const DEFAULT_ALLY_TEAM: u32 = 0;
/// Factor applied to an approach field to turn it into a flee field
pub const DEFAULT_FLEE_SCALE: f32 = -1.2;
/// Distance in tiles at which archers keep their targets
pub const DEFAULT_SHOOTING_RANGE: i32 = 4;

/// How a flee field is derived from the approach field
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum FleeStrategy {
	/// Multiply the approach field by the flee scale and stop there
	#[default]
	Rescale,
	/// Multiply by the flee scale then relax the result again so that
	/// dead-ends near allies are smoothed out towards open ground.
	///
	/// It's unsettled whether this or [FleeStrategy::Rescale] is the intended
	/// behaviour, so it is kept selectable rather than made the default
	Relaxed,
}

/// Configuration for the map generators
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(default)
)]
#[derive(Resource, Clone, Copy, Debug, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct InfluenceConfig {
	/// Team id whose agents seed the approach, flee and archer maps
	pub ally_team: u32,
	/// Scale applied to the approach field by the flee map
	pub flee_scale: f32,
	/// How the flee map is produced
	pub flee_strategy: FleeStrategy,
	/// Radius of the diamond ring archers try to hold
	pub shooting_range: i32,
	/// Optional ceiling on relaxation sweeps, [None] runs to the fixed point
	pub max_sweeps: Option<usize>,
}

impl Default for InfluenceConfig {
	fn default() -> Self {
		InfluenceConfig {
			ally_team: DEFAULT_ALLY_TEAM,
			flee_scale: DEFAULT_FLEE_SCALE,
			flee_strategy: FleeStrategy::default(),
			shooting_range: DEFAULT_SHOOTING_RANGE,
			max_sweeps: None,
		}
	}
}

impl InfluenceConfig {
	/// From a `ron` string generate the [InfluenceConfig], missing fields
	/// take their default
	#[cfg(feature = "ron")]
	pub fn from_ron_str(ron_text: &str) -> Result<Self, ron::error::SpannedError> {
		ron::from_str(ron_text)
	}
}
