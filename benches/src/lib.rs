//! Benchmark helper utilities for frm-rs
//!
//! This module provides generators for synthetic sprites so the benchmarks do
//! not depend on game assets being present.

use frm_types::file::{Direction, Frame, FrmFile, Orientation};

/// Generates one direction of `frames` frames that wobble around the anchor.
///
/// Offsets alternate sign so the layout has to apply negative corrections.
pub fn generate_direction(orientation: Orientation, frames: u16, size: u16) -> Direction {
	let frames = (0..frames)
		.map(|i| {
			let width = size + i % 7;
			let height = size + i % 5;
			let offset_x = if i % 2 == 0 { 3 } else { -5 };
			let offset_y = (i % 3) as i16 - 1;
			let pixels = (0..usize::from(width) * usize::from(height)).map(|p| (p % 251) as u8).collect();
			Frame::new(width, height, offset_x, offset_y, pixels).expect("non-empty frame matching its pixel buffer")
		})
		.collect();
	Direction::new(orientation, frames)
}

/// Generates a full six-direction sprite.
pub fn generate_sprite(frames: u16, size: u16) -> FrmFile {
	let directions = Orientation::ALL.into_iter().map(|o| generate_direction(o, frames, size)).collect();
	FrmFile::new(10, directions).expect("every direction has the same frame count")
}

/// Serializes a generated sprite, for parsing benchmarks.
pub fn generate_sprite_bytes(frames: u16, size: u16) -> Vec<u8> {
	generate_sprite(frames, size).to_bytes().expect("six directions fit the header")
}
