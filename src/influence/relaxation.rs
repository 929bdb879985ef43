//! Relaxation turns a [FieldBuffer] containing a handful of seeds into a full
//! field of ring counts.
//!
//! Rather than expanding a wavefront from a priority queue the buffer is swept
//! in row-major order, each walkable tile taking the lowest value of its
//! orthogonal neighbours plus one whenever that is an improvement. Sweeps
//! repeat until one of them changes nothing:
//!
//! 1. For every [Tile::Floor] tile look up its North, East, South and West neighbours
//! 2. Neighbours off the grid, [Tile::Blocked] or still [UNREACHED] contribute nothing
//! 3. If the lowest neighbour plus one is below the tile's current value, store it
//! 4. When a full sweep stores nothing the field is at its fixed point
//!
//! Values only ever decrease and can't drop below the lowest seed so the
//! process terminates, in the worst case after a number of sweeps proportional
//! to the grid diameter. The result is identical to an unweighted Dijkstra
//! flood from all seeds at once.
//!
//! Blocked tiles are reset to [UNREACHED] before the first sweep and never
//! read as a source, floor tiles walled off from every seed keep it too.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Outcome of a call to [relax]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelaxationReport {
	/// Number of sweeps performed, including the final sweep that confirmed
	/// the fixed point
	pub sweeps: usize,
	/// Largest ring written during relaxation, sizes the falloff table
	pub max_ring: usize,
	/// `false` when a sweep ceiling stopped relaxation before the fixed point
	pub converged: bool,
}

/// Lowest value among the walkable orthogonal neighbours of `pos`, [UNREACHED]
/// when none of them has been reached
fn lowest_neighbour(grid: &Grid, field: &FieldBuffer, pos: IVec2) -> f32 {
	let mut lowest = UNREACHED;
	for offset in ORTHOGONAL_OFFSETS.iter() {
		let n = pos + *offset;
		if let Some(index) = grid.index_of(n) {
			if grid.tiles()[index] == Tile::Floor {
				lowest = lowest.min(field.get(index));
			}
		}
	}
	lowest
}

/// Perform a single row-major sweep, returning whether any cell changed and
/// the largest value written
fn sweep(grid: &Grid, field: &mut FieldBuffer) -> (bool, f32) {
	let mut changed = false;
	let mut highest_write: f32 = 0.0;
	for (index, tile) in grid.tiles().iter().enumerate() {
		if *tile != Tile::Floor {
			continue;
		}
		let lowest = lowest_neighbour(grid, field, grid.position_of(index));
		if !FieldBuffer::is_reached(lowest) {
			continue;
		}
		let candidate = lowest + 1.0;
		if candidate < field.get(index) {
			field.set(index, candidate);
			changed = true;
			highest_write = highest_write.max(candidate);
		}
	}
	(changed, highest_write)
}

/// Propagate the seeds of `field` across the walkable tiles of `grid` until
/// a fixed point is reached or `max_sweeps` sweeps have been performed.
///
/// `field` must have been initialised from `grid`. It may contain any
/// starting values, cells are only ever lowered
pub fn relax(grid: &Grid, field: &mut FieldBuffer, max_sweeps: Option<usize>) -> RelaxationReport {
	debug_assert_eq!(grid.len(), field.len());
	for (index, tile) in grid.tiles().iter().enumerate() {
		if *tile != Tile::Floor {
			field.set(index, UNREACHED);
		}
	}
	let mut report = RelaxationReport::default();
	let mut highest: f32 = 0.0;
	loop {
		if let Some(limit) = max_sweeps {
			if report.sweeps >= limit {
				warn!(
					"Relaxation stopped at the sweep ceiling of {} before converging",
					limit
				);
				break;
			}
		}
		let (changed, highest_write) = sweep(grid, field);
		report.sweeps += 1;
		highest = highest.max(highest_write);
		if !changed {
			report.converged = true;
			break;
		}
	}
	report.max_ring = highest as usize;
	trace!(
		"Relaxed {}x{} grid in {} sweeps, max ring {}",
		grid.width(),
		grid.height(),
		report.sweeps,
		report.max_ring
	);
	report
}
