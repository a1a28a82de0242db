//! Error types for layout, composition and output.

use frm_types::file::{FrmError, PalError};
use thiserror::Error;

/// Errors that can occur while laying out, composing or writing sprite images
#[derive(Debug, Error)]
pub enum RenderError {
	/// The packed composer needs exactly one direction per compass facing
	#[error("Invalid direction count: expected {expected} directions, got {actual}")]
	InvalidDirectionCount {
		/// Number of directions required
		expected: usize,
		/// Number of directions supplied
		actual: usize,
	},

	/// A direction without frames cannot be laid out
	#[error("Empty frame sequence: a direction must contain at least one frame")]
	EmptyFrameSequence,

	/// Packed canvas dimensions do not fit in 32 bits
	#[error("Packed layout overflows with spacing {spacing}")]
	LayoutOverflow {
		/// Requested spacing between cells
		spacing: u32,
	},

	/// Sink methods were called out of order
	#[error("Invalid sink state: {0}")]
	SinkState(&'static str),

	/// Sink received more frames than announced in its header
	#[error("Too many frames: header announced {expected}, got frame #{actual}")]
	TooManyFrames {
		/// Frame count announced in the header
		expected: u32,
		/// 1-based number of the rejected frame
		actual: u32,
	},

	/// Invalid FRM data
	#[error(transparent)]
	FrmError(#[from] FrmError),

	/// Invalid palette or multiplier
	#[error(transparent)]
	PalError(#[from] PalError),

	/// APNG encoding error
	#[error(transparent)]
	PngError(#[from] png::EncodingError),

	/// Static image encoding error
	#[error(transparent)]
	ImageError(#[from] image::ImageError),

	/// Configuration loading error
	#[error(transparent)]
	ConfigError(#[from] config::ConfigError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
