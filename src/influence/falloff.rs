//! A falloff remaps the integer rings produced by relaxation into the
//! magnitudes an agent actually reads, shaping how fast influence fades with
//! distance.
//!
//! A lookup table is built once per field covering ring `0` up to the largest
//! ring observed plus one, every reached cell is then replaced by the table
//! entry of its ring. For a parameter `a`:
//!
//! * [FalloffKind::Linear] - `m(0) = 0`, `m(r) = m(r - 1) + a`
//! * [FalloffKind::Exponential] - `m(0) = 1`, `m(r) = m(r - 1) * a`
//! * [FalloffKind::Power] - `m(0) = 0`, `m(r) = r^a`
//!
//! [UNREACHED] cells are left as they are.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The shape of a falloff curve
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum FalloffKind {
	/// Constant step of `a` per ring
	Linear,
	/// Geometric growth (or decay when `a < 1`) by a factor of `a` per ring
	Exponential,
	/// Ring raised to the power `a`
	Power,
}

/// Falloff curve and its parameter, chosen by the caller for each field
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct FalloffSpec {
	/// Curve shape
	pub kind: FalloffKind,
	/// Step, factor or exponent depending on `kind`
	pub parameter: f32,
}

impl FalloffSpec {
	/// Create a new instance of [FalloffSpec]
	pub fn new(kind: FalloffKind, parameter: f32) -> Self {
		FalloffSpec { kind, parameter }
	}
	/// A [FalloffKind::Linear] falloff stepping `a` per ring
	pub fn linear(a: f32) -> Self {
		FalloffSpec::new(FalloffKind::Linear, a)
	}
	/// A [FalloffKind::Exponential] falloff multiplying by `a` per ring
	pub fn exponential(a: f32) -> Self {
		FalloffSpec::new(FalloffKind::Exponential, a)
	}
	/// A [FalloffKind::Power] falloff raising each ring to `a`
	pub fn power(a: f32) -> Self {
		FalloffSpec::new(FalloffKind::Power, a)
	}
	/// Magnitude of ring `0`
	fn base(&self) -> f32 {
		match self.kind {
			FalloffKind::Linear | FalloffKind::Power => 0.0,
			FalloffKind::Exponential => 1.0,
		}
	}
	/// Magnitude of `ring` given the magnitude of the ring before it
	fn step(&self, previous: f32, ring: usize) -> f32 {
		match self.kind {
			FalloffKind::Linear => previous + self.parameter,
			FalloffKind::Exponential => previous * self.parameter,
			FalloffKind::Power => (ring as f32).powf(self.parameter),
		}
	}
	/// Closed form magnitude of a single ring. Used for rings that fall
	/// outside of a table, otherwise prefer [FalloffSpec::build_table]
	pub fn magnitude(&self, ring: usize) -> f32 {
		if ring == 0 {
			return self.base();
		}
		match self.kind {
			FalloffKind::Linear => ring as f32 * self.parameter,
			FalloffKind::Exponential => self.parameter.powi(ring as i32),
			FalloffKind::Power => (ring as f32).powf(self.parameter),
		}
	}
	/// Build the lookup table for rings `0..=max_ring + 1`, i.e `max_ring + 2`
	/// entries
	pub fn build_table(&self, max_ring: usize) -> Vec<f32> {
		let mut table = Vec::with_capacity(max_ring + 2);
		let mut previous = self.base();
		table.push(previous);
		for ring in 1..=max_ring + 1 {
			previous = self.step(previous, ring);
			table.push(previous);
		}
		table
	}
	/// Rewrite every reached cell of `field` from its ring to its magnitude.
	/// `max_ring` is the largest ring present, as reported by
	/// [crate::prelude::relax]
	pub fn apply(&self, field: &mut FieldBuffer, max_ring: usize) {
		let table = self.build_table(max_ring);
		for index in 0..field.len() {
			let value = field.get(index);
			if !FieldBuffer::is_reached(value) {
				continue;
			}
			// rings are whole numbers here so truncation is exact
			let ring = value as usize;
			let magnitude = match table.get(ring) {
				Some(m) => *m,
				None => self.magnitude(ring),
			};
			field.set(index, magnitude);
		}
		trace!(
			"Applied {:?} falloff with a table of {} rings",
			self.kind,
			table.len()
		);
	}
}
