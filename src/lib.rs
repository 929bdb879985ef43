//! Influence fields (also known as Dijkstra maps) for grid based AI, with a
//! plugin to keep them up to date inside the Bevy game engine
//!
//! An influence field stores, for every floor tile of a [prelude::Grid], how
//! many orthogonal steps separate it from the nearest seed. The field is then
//! shaped by a [prelude::FalloffSpec] so that agents can simply walk towards
//! (or away from) the lowest neighbouring value.
//!
//! The maps can be generated directly from a [prelude::WorldSnapshot]:
//!
//! ```
//! use bevy::prelude::*;
//! use bevy_influence_fields_plugin::prelude::*;
//!
//! let grid = Grid::open(5, 5);
//! let world = WorldSnapshot::new(grid).with_agent(IVec2::new(2, 2), 0);
//! let field = gen_approach_map(&world, &FalloffSpec::linear(1.0), &InfluenceConfig::default())
//! 	.unwrap();
//! assert_eq!(4.0, field.read(0, 0));
//! ```
//!
//! Or kept in sync every frame by adding the [prelude::InfluenceFieldsPlugin]
//! and spawning [prelude::InfluenceMap] components.
//!

pub mod bundle;
pub mod influence;
pub mod plugin;

pub mod prelude;
