//! The [FieldBuffer] contains a dense array of `f32` values, one per tile of
//! the [Grid] it was initialised from and indexed the same way
//! (`index = y * width + x`).
//!
//! A fresh buffer has every cell set to [UNREACHED]. Seeding a cell sets it
//! to `0`, the [crate::prelude::relax] pass then fills in ring counts and a
//! [crate::prelude::FalloffSpec] finally remaps those rings into magnitudes.
//! Cells that were never reached keep the sentinel throughout.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Serialized shape of a [FieldBuffer], validated on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize, serde::Serialize)]
struct RawFieldBuffer {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Row-major cell values
	values: Vec<f32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFieldBuffer> for FieldBuffer {
	type Error = GridError;
	fn try_from(raw: RawFieldBuffer) -> Result<Self, Self::Error> {
		if raw.values.len() != raw.width * raw.height {
			return Err(GridError::ValueCountMismatch {
				width: raw.width,
				height: raw.height,
				values: raw.values.len(),
			});
		}
		Ok(FieldBuffer {
			width: raw.width,
			height: raw.height,
			values: raw.values,
		})
	}
}

#[cfg(feature = "serde")]
impl From<FieldBuffer> for RawFieldBuffer {
	fn from(field: FieldBuffer) -> Self {
		RawFieldBuffer {
			width: field.width,
			height: field.height,
			values: field.values,
		}
	}
}

/// Scalar influence values for every tile of a [Grid]
#[cfg_attr(
	feature = "serde",
	derive(serde::Deserialize, serde::Serialize),
	serde(try_from = "RawFieldBuffer", into = "RawFieldBuffer")
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldBuffer {
	/// Number of columns of the source grid
	width: usize,
	/// Number of rows of the source grid
	height: usize,
	/// Row-major cell values
	values: Vec<f32>,
}

impl FieldBuffer {
	/// Create a [FieldBuffer] sized to `grid` with every cell [UNREACHED]
	pub fn initialize(grid: &Grid) -> Self {
		FieldBuffer {
			width: grid.width(),
			height: grid.height(),
			values: vec![UNREACHED; grid.len()],
		}
	}
	/// Whether a cell value is a real distance/magnitude rather than the sentinel
	pub fn is_reached(value: f32) -> bool {
		value != UNREACHED
	}
	/// Number of columns
	pub fn width(&self) -> usize {
		self.width
	}
	/// Number of rows
	pub fn height(&self) -> usize {
		self.height
	}
	/// Total number of cells
	pub fn len(&self) -> usize {
		self.values.len()
	}
	/// Whether the buffer has no cells
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
	/// Get a reference to the row-major cell array
	pub fn get_field(&self) -> &[f32] {
		&self.values
	}
	/// Value of the cell at `index`, [UNREACHED] when out of range
	pub fn get(&self, index: usize) -> f32 {
		self.values.get(index).copied().unwrap_or(UNREACHED)
	}
	/// Overwrite the cell at `index`, out of range writes are dropped
	pub(crate) fn set(&mut self, index: usize, value: f32) {
		if let Some(cell) = self.values.get_mut(index) {
			*cell = value;
		}
	}
	/// Set the cell at `index` to `0`. Only ever lowers a value so seeding
	/// the same cell twice is harmless. The tile is not checked, callers go
	/// through [FieldBuffer::seed_at]
	pub(crate) fn seed(&mut self, index: usize) {
		if let Some(cell) = self.values.get_mut(index) {
			if *cell > 0.0 {
				*cell = 0.0;
			}
		}
	}
	/// Seed the cell under `pos` if it is inside `grid` and walkable.
	/// Returns whether a seed was placed, positions off the grid or on a
	/// [Tile::Blocked] tile are silently discarded
	pub fn seed_at(&mut self, grid: &Grid, pos: IVec2) -> bool {
		match grid.index_of(pos) {
			Some(index) if grid.tiles()[index] == Tile::Floor => {
				self.seed(index);
				true
			}
			_ => false,
		}
	}
	/// Bounds checked read of the cell at `(x, y)`, returns [UNREACHED] for
	/// positions off the grid. Blocked tiles always hold [UNREACHED]
	pub fn read(&self, x: i32, y: i32) -> f32 {
		if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
			return UNREACHED;
		}
		self.get(y as usize * self.width + x as usize)
	}
	/// Number of cells holding a real value
	pub fn reached_count(&self) -> usize {
		self.values
			.iter()
			.filter(|v| FieldBuffer::is_reached(**v))
			.count()
	}
	/// Multiply every reached cell by `factor`, [UNREACHED] cells are untouched
	pub fn scale_reached(&mut self, factor: f32) {
		for v in self.values.iter_mut() {
			if FieldBuffer::is_reached(*v) {
				*v *= factor;
			}
		}
	}
}
