//! Influence fields (also known as Dijkstra maps) are a means of steering a
//! crowd of agents towards or away from points of interest without planning a
//! path for each of them.
//!
//! [The Incredible Power of Dijkstra Maps](https://www.roguebasin.com/index.php/The_Incredible_Power_of_Dijkstra_Maps)
//!
//! [Dijkstra Maps Visualized](https://www.roguebasin.com/index.php/Dijkstra_Maps_Visualized)
//!
//! A field is a dense array of `f32` values, one per grid tile. Seed tiles
//! (allies, hives, threat positions) are set to `0` and every other walkable
//! tile receives the number of orthogonal steps to its nearest seed. The ring
//! counts are then passed through a [falloff::FalloffSpec] to shape how
//! quickly the influence fades. An agent reads the field around itself and
//! steps to the lowest (approach) value.
//!
//! Definitions:
//!
//! * Grid - a read-only snapshot of `W x H` tiles, each either floor or blocked
//! * Field buffer - the `W x H` array of values being computed
//! * Ring - the integer number of steps from the nearest seed
//! * Relaxation - repeated row-major sweeps lowering each tile to its lowest neighbour plus one until nothing changes
//! * Falloff - the function remapping rings into magnitudes
//!
//! ```text
//!  _____________________________
//! |  4  |  3  |  2  |  3  |  4  |
//! |_____|_____|_____|_____|_____|
//! |  3  |  2  |  1  |  2  |  3  |
//! |_____|_____|_____|_____|_____|
//! |  2  |  1  |  0  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |  3  |  2  |  1  |  2  |  3  |
//! |_____|_____|_____|_____|_____|
//! |  4  |  3  |  2  |  3  |  4  |
//! |_____|_____|_____|_____|_____|
//! ```
//!

use bevy::prelude::*;

pub mod config;
pub mod error;
pub mod falloff;
pub mod field_buffer;
pub mod generators;
pub mod grid;
pub mod relaxation;

/// Sentinel value of a tile no seed can reach. Consumers must treat it as
/// "unreachable" rather than as a large distance
pub const UNREACHED: f32 = f32::MAX;

/// Offsets to the orthogonal neighbours of a tile, North, East, South, West
pub const ORTHOGONAL_OFFSETS: [IVec2; 4] = [
	IVec2::new(0, -1),
	IVec2::new(1, 0),
	IVec2::new(0, 1),
	IVec2::new(-1, 0),
];
