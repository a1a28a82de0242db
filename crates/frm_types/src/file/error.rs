//! Error types for file format parsing and manipulation.

use thiserror::Error;

/// Errors that can occur when parsing or building FRM files
#[derive(Debug, Error)]
pub enum FrmError {
	/// Not enough data to parse
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Pixel buffer does not match the frame dimensions
	#[error("Pixel count mismatch: frame is {width}x{height}, but {actual} pixels were supplied")]
	PixelCountMismatch {
		/// Frame width
		width: u16,
		/// Frame height
		height: u16,
		/// Number of pixels supplied
		actual: usize,
	},

	/// Frame with no pixels
	#[error("Empty frame: {width}x{height}")]
	EmptyFrame {
		/// Frame width
		width: u16,
		/// Frame height
		height: u16,
	},

	/// Directions disagree on the number of frames they hold
	#[error(
		"Frame count mismatch: direction {direction} has {actual} frames, expected {expected}"
	)]
	FrameCountMismatch {
		/// Index of the offending direction
		direction: usize,
		/// Frames per direction taken from the first direction
		expected: u16,
		/// Frames found in the offending direction
		actual: usize,
	},

	/// Too many frames per direction for the 16-bit header field
	#[error("Too many frames per direction: {0} (at most 65535 are supported)")]
	TooManyFrames(usize),

	/// Too many directions for the six header slots
	#[error("Too many directions: {0} (at most 6 are supported)")]
	TooManyDirections(usize),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when parsing or adjusting PAL files
#[derive(Debug, Error)]
pub enum PalError {
	/// Not enough data to parse
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Brightness multiplier outside the supported range
	#[error("Invalid RGB multiplier {0}: must be between 2 and 4")]
	InvalidMultiplier(u8),

	/// Multiplying a color channel would overflow a byte
	#[error(
		"RGB multiplier {multiplier} overflows color {index} channel {channel}: {value} * {multiplier} >= 255"
	)]
	MultiplierOverflow {
		/// Palette index of the color
		index: u8,
		/// Channel name (`R`, `G` or `B`)
		channel: char,
		/// Original channel value
		value: u8,
		/// Requested multiplier
		multiplier: u8,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
