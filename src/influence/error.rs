//! Errors raised while building a [crate::prelude::Grid] or restoring a
//! [crate::prelude::FieldBuffer]
//!

use thiserror::Error;

/// Reasons a [crate::prelude::Grid] or [crate::prelude::FieldBuffer] could not be constructed
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
	/// The tile array does not cover `width * height` cells
	#[error("grid of {width}x{height} needs {} tiles, got {tiles}", .width * .height)]
	TileCountMismatch {
		/// Requested number of columns
		width: usize,
		/// Requested number of rows
		height: usize,
		/// Number of tiles supplied
		tiles: usize,
	},
	/// The value array of a field buffer does not cover `width * height` cells
	#[error("field buffer of {width}x{height} needs {} values, got {values}", .width * .height)]
	ValueCountMismatch {
		/// Number of columns
		width: usize,
		/// Number of rows
		height: usize,
		/// Number of values supplied
		values: usize,
	},
	/// A row of an ascii grid has a different length to the first row
	#[error("row {row} has {found} tiles, expected {expected}")]
	RaggedRows {
		/// Zero based row that failed
		row: usize,
		/// Length of the first row
		expected: usize,
		/// Length of the offending row
		found: usize,
	},
	/// The `ron` text could not be deserialized
	#[cfg(feature = "ron")]
	#[error("failed deserializing grid: {0}")]
	Ron(#[from] ron::error::SpannedError),
}
