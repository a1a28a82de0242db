//! Conversion of relative frame offsets into absolute placements.
//!
//! FRM frames do not store where they should be drawn. Each frame instead
//! records how far a conceptual anchor point (the "spot", bottom-center of the
//! first frame) moved since the previous frame. [`layout_direction`] walks the
//! sequence, turns every spot position into a top-left placement, and shifts the
//! whole sequence right/down so that no frame ends up at a negative coordinate.

use frm_types::file::Frame;
use log::trace;
use serde::Serialize;

use crate::RenderError;

/// Top-left position of a frame inside its direction canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Placement {
	/// Horizontal position in pixels
	pub x: u32,
	/// Vertical position in pixels
	pub y: u32,
}

impl Placement {
	/// Creates a new placement.
	pub const fn new(x: u32, y: u32) -> Self {
		Self {
			x,
			y,
		}
	}
}

/// Placements of all frames of a direction plus the canvas that holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionLayout {
	placements: Vec<Placement>,
	width: u32,
	height: u32,
}

impl DirectionLayout {
	/// Returns one placement per frame, in frame order.
	#[inline]
	pub fn placements(&self) -> &[Placement] {
		&self.placements
	}

	/// Returns the placement of frame `index`.
	pub fn placement(&self, index: usize) -> Option<Placement> {
		self.placements.get(index).copied()
	}

	/// Width of the tight bounding box over all placed frames.
	#[inline]
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Height of the tight bounding box over all placed frames.
	#[inline]
	pub fn height(&self) -> u32 {
		self.height
	}
}

/// Computes absolute placements and the minimal canvas size for one direction.
///
/// The function is pure: the same frames always produce the same layout.
///
/// # Errors
///
/// Returns [`RenderError::EmptyFrameSequence`] if `frames` is empty.
///
/// # Examples
///
/// ```
/// use frm_render::layout::{Placement, layout_direction};
/// use frm_types::file::Frame;
///
/// let frames = [Frame::filled(10, 10, 0, 0, 1).unwrap(), Frame::filled(10, 10, -8, 0, 1).unwrap()];
/// let layout = layout_direction(&frames).unwrap();
///
/// assert_eq!(layout.placements(), &[Placement::new(8, 0), Placement::new(0, 0)]);
/// assert_eq!((layout.width(), layout.height()), (18, 10));
/// ```
pub fn layout_direction(frames: &[Frame]) -> Result<DirectionLayout, RenderError> {
	let Some(first) = frames.first() else {
		return Err(RenderError::EmptyFrameSequence);
	};

	let mut spot_x = i64::from(first.width()) / 2;
	let mut spot_y = i64::from(first.height());

	// the first frame is the movable anchor; it absorbs every negative placement
	let mut anchor_x = 0i64;
	let mut anchor_y = 0i64;

	let mut relative = Vec::with_capacity(frames.len());
	relative.push((0i64, 0i64));

	for frame in &frames[1..] {
		spot_x += i64::from(frame.offset_x());
		spot_y += i64::from(frame.offset_y());

		let x = spot_x - i64::from(frame.width()) / 2;
		let y = spot_y - i64::from(frame.height());

		if x < 0 {
			anchor_x = anchor_x.max(-x);
		}
		if y < 0 {
			anchor_y = anchor_y.max(-y);
		}

		trace!(
			"offset frame:{} {},{} -> {},{}",
			frame.index(),
			frame.offset_x(),
			frame.offset_y(),
			x,
			y
		);
		relative.push((x, y));
	}

	let mut placements = Vec::with_capacity(frames.len());
	let mut width = 0u32;
	let mut height = 0u32;

	for (index, (frame, (x, y))) in frames.iter().zip(relative).enumerate() {
		let (x, y) = if index == 0 {
			(anchor_x, anchor_y)
		} else {
			(x + anchor_x, y + anchor_y)
		};
		debug_assert!(x >= 0 && y >= 0, "anchor correction left a negative placement");

		let placement = Placement::new(x as u32, y as u32);
		width = width.max(placement.x + u32::from(frame.width()));
		height = height.max(placement.y + u32::from(frame.height()));
		placements.push(placement);
	}

	Ok(DirectionLayout {
		placements,
		width,
		height,
	})
}

#[cfg(test)]
mod tests {
	use rand::{Rng, SeedableRng, rngs::SmallRng};

	use super::*;

	fn frame(width: u16, height: u16, offset_x: i16, offset_y: i16) -> Frame {
		Frame::filled(width, height, offset_x, offset_y, 1).unwrap()
	}

	fn random_frames(rng: &mut SmallRng) -> Vec<Frame> {
		let count = rng.random_range(1..=12);
		(0..count)
			.map(|_| {
				frame(
					rng.random_range(1..=40),
					rng.random_range(1..=40),
					rng.random_range(-30..=30),
					rng.random_range(-30..=30),
				)
			})
			.collect()
	}

	#[test]
	fn test_empty_sequence() {
		assert!(matches!(layout_direction(&[]), Err(RenderError::EmptyFrameSequence)));
	}

	#[test]
	fn test_single_frame_identity() {
		// offsets of the first frame are never applied
		let layout = layout_direction(&[frame(7, 9, 100, -100)]).unwrap();
		assert_eq!(layout.placements(), &[Placement::new(0, 0)]);
		assert_eq!((layout.width(), layout.height()), (7, 9));
	}

	#[test]
	fn test_negative_x_shifts_anchor() {
		let layout = layout_direction(&[frame(10, 10, 0, 0), frame(10, 10, -8, 0)]).unwrap();
		assert_eq!(layout.placements(), &[Placement::new(8, 0), Placement::new(0, 0)]);
		assert_eq!((layout.width(), layout.height()), (18, 10));
	}

	#[test]
	fn test_negative_y_shifts_anchor() {
		// spot (2, 4) -> (2, 1); frame 1 top = 1 - 6 = -5
		let layout = layout_direction(&[frame(4, 4, 0, 0), frame(4, 6, 0, -3)]).unwrap();
		assert_eq!(layout.placements(), &[Placement::new(0, 5), Placement::new(0, 0)]);
		assert_eq!((layout.width(), layout.height()), (4, 9));
	}

	#[test]
	fn test_positive_motion_grows_canvas() {
		// spot (3, 5) -> (7, 6) -> (11, 6)
		let frames = [frame(6, 5, 0, 0), frame(6, 5, 4, 1), frame(6, 5, 4, 0)];
		let layout = layout_direction(&frames).unwrap();
		assert_eq!(
			layout.placements(),
			&[Placement::new(0, 0), Placement::new(4, 1), Placement::new(8, 1)]
		);
		assert_eq!((layout.width(), layout.height()), (14, 6));
	}

	#[test]
	fn test_odd_widths_truncate() {
		// spot (2, 3) -> (2, 3); frame 1 left = 2 - 7 / 2 = -1
		let layout = layout_direction(&[frame(5, 3, 0, 0), frame(7, 3, 0, 0)]).unwrap();
		assert_eq!(layout.placements(), &[Placement::new(1, 0), Placement::new(0, 0)]);
		assert_eq!((layout.width(), layout.height()), (7, 3));
	}

	#[test]
	fn test_largest_correction_wins() {
		let frames = [frame(2, 2, 0, 0), frame(2, 2, -3, 0), frame(2, 2, -2, 0), frame(2, 2, 6, 0)];
		let layout = layout_direction(&frames).unwrap();
		// relative lefts: 0, -3, -5, 1
		assert_eq!(
			layout.placements(),
			&[Placement::new(5, 0), Placement::new(2, 0), Placement::new(0, 0), Placement::new(6, 0)]
		);
		assert_eq!(layout.width(), 8);
	}

	#[test]
	fn test_random_sequences_are_deterministic_and_tight() {
		let mut rng = SmallRng::seed_from_u64(0x5EED);

		for _ in 0..500 {
			let frames = random_frames(&mut rng);
			let layout = layout_direction(&frames).unwrap();

			assert_eq!(layout, layout_direction(&frames).unwrap());
			assert_eq!(layout.placements().len(), frames.len());

			let right = frames
				.iter()
				.zip(layout.placements())
				.map(|(f, p)| p.x + u32::from(f.width()))
				.max()
				.unwrap();
			let bottom = frames
				.iter()
				.zip(layout.placements())
				.map(|(f, p)| p.y + u32::from(f.height()))
				.max()
				.unwrap();

			// every frame fits and shrinking either side would cut one off
			assert_eq!(layout.width(), right);
			assert_eq!(layout.height(), bottom);
		}
	}

	#[test]
	fn test_random_sequences_touch_origin() {
		let mut rng = SmallRng::seed_from_u64(7);

		for _ in 0..500 {
			let frames = random_frames(&mut rng);
			let layout = layout_direction(&frames).unwrap();

			// the correction shifts exactly enough to reach the left/top edge
			// unless nothing was negative, in which case frame 0 sits at 0
			assert_eq!(layout.placements().iter().map(|p| p.x).min(), Some(0));
			assert_eq!(layout.placements().iter().map(|p| p.y).min(), Some(0));
		}
	}
}
