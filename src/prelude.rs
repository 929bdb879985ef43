//! `use bevy_influence_fields_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::influence::{
	config::*,
	error::*,
	falloff::*,
	field_buffer::*,
	generators::{approach::*, archer::*, flee::*, hive::*, *},
	grid::*,
	relaxation::*,
	*,
};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	plugin::{map_layer::*, world_view::*, *},
};
