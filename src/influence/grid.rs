//! The [Grid] is a read-only snapshot of the tiles of a level. Each tile is
//! either [Tile::Floor], which agents can stand on and which influence can
//! flow across, or [Tile::Blocked] which is a wall and never takes part in a
//! field calculation.
//!
//! Tiles are stored row-major, `index = y * width + x`, with `(0, 0)` in the
//! top-left corner:
//!
//! ```text
//!  _______________________
//! |     |     |     |     |
//! | 0,0 | 1,0 | 2,0 | 3,0 |
//! |_____|_____|_____|_____|
//! |     |     |     |     |
//! | 0,1 | 1,1 | 2,1 | 3,1 |
//! |_____|_____|_____|_____|
//! ```
//!
//! Any coordinate outside of `[0, width) x [0, height)` is treated as
//! [Tile::Blocked] so callers never need to bounds check before asking.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Classification of a single grid tile
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum Tile {
	/// Walkable tile, influence propagates across it
	#[default]
	Floor,
	/// Wall or void, never walkable
	Blocked,
}

/// Serialized shape of a [Grid], validated on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize, serde::Serialize)]
struct RawGrid {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Row-major tile classifications
	tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
	type Error = GridError;
	fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
		Grid::new(raw.width, raw.height, raw.tiles)
	}
}

#[cfg(feature = "serde")]
impl From<Grid> for RawGrid {
	fn from(grid: Grid) -> Self {
		RawGrid {
			width: grid.width,
			height: grid.height,
			tiles: grid.tiles,
		}
	}
}

/// Dimensions and tile classification of a level. Immutable once built, a
/// fresh snapshot is expected each frame the level changes
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(try_from = "RawGrid", into = "RawGrid")
)]
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Row-major tile classifications, always `width * height` long
	tiles: Vec<Tile>,
}

impl Grid {
	/// Create a new [Grid], `tiles` must contain exactly `width * height` entries
	pub fn new(width: usize, height: usize, tiles: Vec<Tile>) -> Result<Self, GridError> {
		if tiles.len() != width * height {
			return Err(GridError::TileCountMismatch {
				width,
				height,
				tiles: tiles.len(),
			});
		}
		Ok(Grid {
			width,
			height,
			tiles,
		})
	}
	/// Create a [Grid] of `width` by `height` where every tile is [Tile::Floor]
	pub fn open(width: usize, height: usize) -> Self {
		Grid {
			width,
			height,
			tiles: vec![Tile::Floor; width * height],
		}
	}
	/// Build a [Grid] from rows of text where `#` marks a [Tile::Blocked]
	/// tile and any other character is [Tile::Floor]. Every row must have the
	/// same length
	pub fn from_ascii(rows: &[&str]) -> Result<Self, GridError> {
		let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
		let mut tiles = Vec::with_capacity(width * rows.len());
		for (row, line) in rows.iter().enumerate() {
			let found = line.chars().count();
			if found != width {
				return Err(GridError::RaggedRows {
					row,
					expected: width,
					found,
				});
			}
			tiles.extend(line.chars().map(|c| match c {
				'#' => Tile::Blocked,
				_ => Tile::Floor,
			}));
		}
		Grid::new(width, rows.len(), tiles)
	}
	/// From a `ron` string generate the [Grid]
	#[cfg(feature = "ron")]
	pub fn from_ron_str(ron_text: &str) -> Result<Self, GridError> {
		Ok(ron::from_str(ron_text)?)
	}
	/// Number of columns
	pub fn width(&self) -> usize {
		self.width
	}
	/// Number of rows
	pub fn height(&self) -> usize {
		self.height
	}
	/// Total number of tiles
	pub fn len(&self) -> usize {
		self.tiles.len()
	}
	/// Whether the grid has no tiles at all
	pub fn is_empty(&self) -> bool {
		self.tiles.is_empty()
	}
	/// Get a reference to the row-major tile array
	pub fn tiles(&self) -> &[Tile] {
		&self.tiles
	}
	/// Whether `pos` lies inside `[0, width) x [0, height)`
	pub fn in_bounds(&self, pos: IVec2) -> bool {
		pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
	}
	/// Convert a position into an index of the tile array, [None] when the
	/// position is outside of the grid
	pub fn index_of(&self, pos: IVec2) -> Option<usize> {
		if self.in_bounds(pos) {
			Some(pos.y as usize * self.width + pos.x as usize)
		} else {
			None
		}
	}
	/// Convert an index of the tile array back into a position
	pub fn position_of(&self, index: usize) -> IVec2 {
		IVec2::new((index % self.width) as i32, (index / self.width) as i32)
	}
	/// Classification of the tile at `pos`, out of bounds positions are [Tile::Blocked]
	pub fn tile_at(&self, pos: IVec2) -> Tile {
		match self.index_of(pos) {
			Some(i) => self.tiles[i],
			None => Tile::Blocked,
		}
	}
	/// Whether the tile at `pos` is in bounds and walkable
	pub fn is_floor(&self, pos: IVec2) -> bool {
		self.tile_at(pos) == Tile::Floor
	}
	/// Based on a position find its in-bounds orthogonal neighbours (up to 4)
	/// in the order North, East, South, West
	pub fn orthogonal_neighbours(&self, pos: IVec2) -> Vec<IVec2> {
		ORTHOGONAL_OFFSETS
			.iter()
			.map(|offset| pos + *offset)
			.filter(|n| self.in_bounds(*n))
			.collect()
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn new_grid_rejects_wrong_tile_count() {
		let result = Grid::new(3, 3, vec![Tile::Floor; 8]);
		let actual = Err(GridError::TileCountMismatch {
			width: 3,
			height: 3,
			tiles: 8,
		});
		assert_eq!(actual, result);
	}
	#[test]
	fn ascii_grid() {
		let grid = Grid::from_ascii(&["..#", "#..", "..."]).unwrap();
		assert_eq!(3, grid.width());
		assert_eq!(3, grid.height());
		assert_eq!(Tile::Blocked, grid.tile_at(IVec2::new(2, 0)));
		assert_eq!(Tile::Blocked, grid.tile_at(IVec2::new(0, 1)));
		assert_eq!(Tile::Floor, grid.tile_at(IVec2::new(1, 1)));
	}
	#[test]
	fn ascii_grid_ragged() {
		let result = Grid::from_ascii(&["...", ".."]);
		let actual = Err(GridError::RaggedRows {
			row: 1,
			expected: 3,
			found: 2,
		});
		assert_eq!(actual, result);
	}
	#[test]
	fn out_of_bounds_is_blocked() {
		let grid = Grid::open(4, 2);
		assert_eq!(Tile::Blocked, grid.tile_at(IVec2::new(-1, 0)));
		assert_eq!(Tile::Blocked, grid.tile_at(IVec2::new(4, 0)));
		// a y beyond the height but within the width must not alias another row
		assert_eq!(Tile::Blocked, grid.tile_at(IVec2::new(0, 3)));
		assert_eq!(None, grid.index_of(IVec2::new(0, 2)));
	}
	#[test]
	fn index_round_trip() {
		let grid = Grid::open(5, 3);
		let pos = IVec2::new(3, 2);
		let index = grid.index_of(pos).unwrap();
		assert_eq!(13, index);
		assert_eq!(pos, grid.position_of(index));
	}
	#[test]
	fn corner_neighbours() {
		let grid = Grid::open(3, 3);
		let result = grid.orthogonal_neighbours(IVec2::new(0, 0));
		let actual = vec![IVec2::new(1, 0), IVec2::new(0, 1)];
		assert_eq!(actual, result);
	}
	#[test]
	fn centre_neighbours() {
		let grid = Grid::open(3, 3);
		let result = grid.orthogonal_neighbours(IVec2::new(1, 1));
		let actual = vec![
			IVec2::new(1, 0),
			IVec2::new(2, 1),
			IVec2::new(1, 2),
			IVec2::new(0, 1),
		];
		assert_eq!(actual, result);
	}
	#[test]
	#[cfg(feature = "ron")]
	fn grid_from_ron() {
		let grid = Grid::from_ron_str("(width: 2, height: 1, tiles: [Floor, Blocked])").unwrap();
		assert_eq!(Tile::Blocked, grid.tile_at(IVec2::new(1, 0)));
	}
	#[test]
	#[cfg(feature = "ron")]
	fn grid_from_ron_wrong_size() {
		let result = Grid::from_ron_str("(width: 2, height: 2, tiles: [Floor, Blocked])");
		assert!(result.is_err());
	}
}
