//! The archer map decreases towards tiles from which an ally can be shot.
//!
//! Around each ally the tiles exactly `shooting_range` orthogonal steps away
//! form a diamond shaped ring. A ring tile is seeded when it is walkable and
//! an unobstructed line can be drawn from the ally to it. For a range of `3`
//! the candidate ring around an ally `A` looks like:
//!
//! ```text
//!  _________________________________________
//! |     |     |     |  x  |     |     |     |
//! |_____|_____|_____|_____|_____|_____|_____|
//! |     |     |  x  |     |  x  |     |     |
//! |_____|_____|_____|_____|_____|_____|_____|
//! |     |  x  |     |     |     |  x  |     |
//! |_____|_____|_____|_____|_____|_____|_____|
//! |  x  |     |     |  A  |     |     |  x  |
//! |_____|_____|_____|_____|_____|_____|_____|
//! |     |  x  |     |     |     |  x  |     |
//! |_____|_____|_____|_____|_____|_____|_____|
//! |     |     |  x  |     |  x  |     |     |
//! |_____|_____|_____|_____|_____|_____|_____|
//! |     |     |     |  x  |     |     |     |
//! |_____|_____|_____|_____|_____|_____|_____|
//! ```
//!
//! The line check samples `shooting_range` equally spaced points starting at
//! the ally and stepping towards the candidate, each rounded to the nearest
//! tile. Any sample landing on a blocked tile (or off the grid) rejects the
//! candidate.
//!

use crate::prelude::*;
use bevy::prelude::*;

use super::relax_and_shape;

/// Unit directions walked around the ring, one per quadrant
const QUADRANTS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Iterate over the `4 * range` tiles lying exactly `range` orthogonal steps
/// from `origin`. Tiles are produced whether or not they are on a grid,
/// coordinates saturate at the `i32` limits
pub fn shooting_ring(origin: IVec2, range: i32) -> impl Iterator<Item = IVec2> {
	(0..range.max(0)).flat_map(move |i| {
		QUADRANTS.into_iter().map(move |(dx, dy)| {
			let axis_x = if dy != dx { range * dy } else { 0 };
			let axis_y = if dy == dx { -range * dx } else { 0 };
			origin
				.saturating_add(IVec2::new(axis_x, axis_y))
				.saturating_add(IVec2::new(i * dx, i * dy))
		})
	})
}

/// Whether `cell` lies on the ring of radius `range` around `origin`
pub fn is_in_shooting_ring(origin: IVec2, cell: IVec2, range: i32) -> bool {
	let offset = (cell.as_i64vec2() - origin.as_i64vec2()).abs();
	range > 0 && offset.x + offset.y == range as i64
}

/// Whether `samples` points from `from` towards `to`, rounded to the nearest
/// tile, all land on walkable tiles. The first sample is `from` itself and
/// `to` is never sampled
pub fn has_clear_line(grid: &Grid, from: IVec2, to: IVec2, samples: i32) -> bool {
	let delta = to.as_vec2() - from.as_vec2();
	let start = from.as_vec2();
	(0..samples.max(0)).all(|j| {
		let t = j as f32 / samples as f32;
		let sample = IVec2::new(
			(start.x + t * delta.x).round() as i32,
			(start.y + t * delta.y).round() as i32,
		);
		grid.is_floor(sample)
	})
}

/// Seed every tile on the ring around `origin` that is walkable and in clear
/// sight of it, returning how many seeds were placed. An `origin` that isn't
/// a walkable tile of `grid` has no line of sight and seeds nothing
pub fn seed_shooting_ring(grid: &Grid, field: &mut FieldBuffer, origin: IVec2, range: i32) -> usize {
	if !grid.is_floor(origin) {
		return 0;
	}
	let mut seeded = 0;
	for cell in shooting_ring(origin, range) {
		if grid.is_floor(cell) && has_clear_line(grid, origin, cell, range) && field.seed_at(grid, cell) {
			seeded += 1;
		}
	}
	seeded
}

/// Seed the shooting ring of every ally and relax outwards
pub fn gen_archer_map(
	world: &impl WorldView,
	falloff: &FalloffSpec,
	config: &InfluenceConfig,
) -> Option<FieldBuffer> {
	let grid = world.grid()?;
	let mut field = FieldBuffer::initialize(grid);
	let mut seeded = 0;
	for agent in world.agents().filter(|a| a.team == config.ally_team) {
		seeded += seed_shooting_ring(grid, &mut field, agent.position, config.shooting_range);
	}
	debug!(
		"Archer map seeded {} tiles at range {}",
		seeded, config.shooting_range
	);
	Some(relax_and_shape(grid, field, falloff, config))
}
