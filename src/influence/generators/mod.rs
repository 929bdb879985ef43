//! Map generators read a snapshot of the world, seed a fresh [FieldBuffer]
//! and run it through [relax] and a [FalloffSpec].
//!
//! The world is reached only through the read-only [WorldView] trait so the
//! generators have no knowledge of how agents are stored. [WorldSnapshot] is a
//! plain owned implementation, the Bevy plugin provides another one over ECS
//! queries.
//!
//! | Map | Seeds |
//! |-----|-------|
//! | [InfluenceMapKind::Approach] | tiles occupied by ally agents |
//! | [InfluenceMapKind::Flee] | approach map scaled by a negative factor |
//! | [InfluenceMapKind::Archer] | tiles at shooting range of an ally with a clear line of sight |
//! | [InfluenceMapKind::HivePack] | tiles holding a hive marker |
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod approach;
pub mod archer;
pub mod flee;
pub mod hive;

/// A read-only agent as seen by the generators
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentView {
	/// Tile the agent stands on
	pub position: IVec2,
	/// Team id of the agent
	pub team: u32,
}

impl AgentView {
	/// Create a new instance of [AgentView]
	pub fn new(position: IVec2, team: u32) -> Self {
		AgentView { position, team }
	}
}

/// Read-only queries the generators make of the world
pub trait WorldView {
	/// The level grid, [None] when the world has no grid yet
	fn grid(&self) -> Option<&Grid>;
	/// Every agent with a position and a team
	fn agents(&self) -> impl Iterator<Item = AgentView> + '_;
	/// Position of every hive marker
	fn hives(&self) -> impl Iterator<Item = IVec2> + '_;
}

/// An owned snapshot of the world, useful outside of an ECS or for tests
#[derive(Clone, Debug, Default)]
pub struct WorldSnapshot {
	/// The level grid
	pub grid: Option<Grid>,
	/// All agents
	pub agents: Vec<AgentView>,
	/// All hive markers
	pub hives: Vec<IVec2>,
}

impl WorldSnapshot {
	/// Create a new instance of [WorldSnapshot] over `grid` with no agents or hives
	pub fn new(grid: Grid) -> Self {
		WorldSnapshot {
			grid: Some(grid),
			agents: Vec::new(),
			hives: Vec::new(),
		}
	}
	/// Add an agent of `team` at `position`
	pub fn with_agent(mut self, position: IVec2, team: u32) -> Self {
		self.agents.push(AgentView::new(position, team));
		self
	}
	/// Add a hive marker at `position`
	pub fn with_hive(mut self, position: IVec2) -> Self {
		self.hives.push(position);
		self
	}
}

impl WorldView for WorldSnapshot {
	fn grid(&self) -> Option<&Grid> {
		self.grid.as_ref()
	}
	fn agents(&self) -> impl Iterator<Item = AgentView> + '_ {
		self.agents.iter().copied()
	}
	fn hives(&self) -> impl Iterator<Item = IVec2> + '_ {
		self.hives.iter().copied()
	}
}

/// The kinds of influence map that can be generated
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum InfluenceMapKind {
	/// Decreases towards ally agents
	Approach,
	/// Derived from [InfluenceMapKind::Approach], descending it leads away from allies
	Flee,
	/// Decreases towards tiles from which an ally can be shot at range
	Archer,
	/// Decreases towards hives, used to regroup packs
	HivePack,
}

impl InfluenceMapKind {
	/// Generate this kind of map from `world`, [None] when the world has no grid
	pub fn generate(
		&self,
		world: &impl WorldView,
		falloff: &FalloffSpec,
		config: &InfluenceConfig,
	) -> Option<FieldBuffer> {
		match self {
			InfluenceMapKind::Approach => gen_approach_map(world, falloff, config),
			InfluenceMapKind::Flee => gen_flee_map(world, falloff, config),
			InfluenceMapKind::Archer => gen_archer_map(world, falloff, config),
			InfluenceMapKind::HivePack => gen_hive_pack_map(world, falloff, config),
		}
	}
}

/// Seed the tile of every agent belonging to `team`, returning how many seeds were placed
pub(crate) fn seed_team(world: &impl WorldView, grid: &Grid, field: &mut FieldBuffer, team: u32) -> usize {
	let mut seeded = 0;
	for agent in world.agents().filter(|agent| agent.team == team) {
		if field.seed_at(grid, agent.position) {
			seeded += 1;
		}
	}
	seeded
}

/// Relax a seeded field and remap its rings through `falloff`
pub(crate) fn relax_and_shape(
	grid: &Grid,
	mut field: FieldBuffer,
	falloff: &FalloffSpec,
	config: &InfluenceConfig,
) -> FieldBuffer {
	let report = relax(grid, &mut field, config.max_sweeps);
	falloff.apply(&mut field, report.max_ring);
	field
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn no_grid_generates_nothing() {
		let world = WorldSnapshot::default().with_agent(IVec2::new(1, 1), 0);
		let config = InfluenceConfig::default();
		for kind in [
			InfluenceMapKind::Approach,
			InfluenceMapKind::Flee,
			InfluenceMapKind::Archer,
			InfluenceMapKind::HivePack,
		] {
			assert_eq!(None, kind.generate(&world, &FalloffSpec::linear(1.0), &config));
		}
	}
	#[test]
	fn seed_team_filters_and_discards() {
		let grid = Grid::from_ascii(&["...", ".#.", "..."]).unwrap();
		let world = WorldSnapshot::new(grid.clone())
			.with_agent(IVec2::new(0, 0), 0)
			.with_agent(IVec2::new(2, 2), 1)
			.with_agent(IVec2::new(1, 1), 0)
			.with_agent(IVec2::new(7, -2), 0);
		let mut field = FieldBuffer::initialize(&grid);
		let seeded = seed_team(&world, &grid, &mut field, 0);
		assert_eq!(1, seeded);
		assert_eq!(0.0, field.read(0, 0));
		assert_eq!(UNREACHED, field.read(2, 2));
	}
	#[test]
	fn dispatch_matches_generator() {
		let world = WorldSnapshot::new(Grid::open(5, 5)).with_agent(IVec2::new(2, 2), 0);
		let falloff = FalloffSpec::linear(1.0);
		let config = InfluenceConfig::default();
		assert_eq!(
			gen_flee_map(&world, &falloff, &config),
			InfluenceMapKind::Flee.generate(&world, &falloff, &config)
		);
	}
}
