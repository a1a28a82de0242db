//! Compass directions and per-direction frame sequences.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Frame;

/// Compass facing of a direction, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
	/// North-east
	NorthEast = 0,
	/// East
	East = 1,
	/// South-east
	SouthEast = 2,
	/// South-west
	SouthWest = 3,
	/// West
	West = 4,
	/// North-west
	NorthWest = 5,
}

impl Orientation {
	/// All orientations in file order.
	pub const ALL: [Self; 6] = [
		Self::NorthEast,
		Self::East,
		Self::SouthEast,
		Self::SouthWest,
		Self::West,
		Self::NorthWest,
	];

	/// Converts a 0-based direction index to an orientation.
	pub fn from_index(index: usize) -> Option<Self> {
		Self::ALL.get(index).copied()
	}

	/// Returns the 0-based direction index.
	#[inline]
	pub fn index(self) -> usize {
		self as usize
	}

	/// Returns the orientation mirrored across the north-south axis.
	///
	/// NE↔NW, E↔W, SE↔SW.
	pub fn mirror(self) -> Self {
		Self::ALL[5 - self.index()]
	}

	/// Returns `true` for NE, E and SE.
	pub fn is_east(self) -> bool {
		self.index() <= Self::SouthEast.index()
	}

	/// Short compass label.
	pub fn abbreviation(self) -> &'static str {
		match self {
			Self::NorthEast => "NE",
			Self::East => "E",
			Self::SouthEast => "SE",
			Self::SouthWest => "SW",
			Self::West => "W",
			Self::NorthWest => "NW",
		}
	}
}

impl fmt::Display for Orientation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.abbreviation())
	}
}

/// Ordered animation sequence for a single compass direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
	orientation: Orientation,
	shift_x: i16,
	shift_y: i16,

	/// Offset of the first frame inside the frame area
	data_offset: u32,

	frames: Vec<Frame>,
}

impl Direction {
	/// Creates a direction from its frames.
	///
	/// Frame ordinals are renumbered to match their position in `frames`.
	pub fn new(orientation: Orientation, frames: Vec<Frame>) -> Self {
		let frames = frames
			.into_iter()
			.enumerate()
			.map(|(index, frame)| frame.with_index(u16::try_from(index).unwrap_or(u16::MAX)))
			.collect();

		Self {
			orientation,
			shift_x: 0,
			shift_y: 0,
			data_offset: 0,
			frames,
		}
	}

	/// Sets the direction-level shift carried from the file header.
	#[must_use]
	pub fn with_shift(mut self, shift_x: i16, shift_y: i16) -> Self {
		self.shift_x = shift_x;
		self.shift_y = shift_y;
		self
	}

	#[must_use]
	pub(crate) fn with_data_offset(mut self, data_offset: u32) -> Self {
		self.data_offset = data_offset;
		self
	}

	/// Returns the compass facing of this direction.
	#[inline]
	pub fn orientation(&self) -> Orientation {
		self.orientation
	}

	/// Returns the horizontal shift.
	#[inline]
	pub fn shift_x(&self) -> i16 {
		self.shift_x
	}

	/// Returns the vertical shift.
	#[inline]
	pub fn shift_y(&self) -> i16 {
		self.shift_y
	}

	/// Returns the offset of this direction's data inside the frame area.
	#[inline]
	pub fn data_offset(&self) -> u32 {
		self.data_offset
	}

	/// Returns the frames in playback order.
	#[inline]
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns the frame at `index`.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Widest frame in this direction, or 0 when empty.
	pub fn max_frame_width(&self) -> u16 {
		self.frames.iter().map(Frame::width).max().unwrap_or(0)
	}

	/// Tallest frame in this direction, or 0 when empty.
	pub fn max_frame_height(&self) -> u16 {
		self.frames.iter().map(Frame::height).max().unwrap_or(0)
	}
}
