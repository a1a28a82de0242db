//! `.FRM` file format support.
//!
//! FRM files hold palette-indexed sprite animations for up to six compass
//! directions. Every direction holds the same number of frames, and each frame
//! stores how far its anchor point moved relative to the previous frame.
//!
//! # File Structure
//!
//! All values are big-endian.
//!
//! - **Header (0x00-0x3D):** version, frames per second, action frame, frames per
//!   direction, six X shifts, six Y shifts, six data offsets and the frame area size
//! - **Frame Area:** frame records for each direction, starting at
//!   `0x3E + data_offset`
//!
//! # Frame Record Format
//!
//! - Width (2 bytes)
//! - Height (2 bytes)
//! - Pixel count (4 bytes, redundant with `width * height`)
//! - Offset X (2 bytes, signed)
//! - Offset Y (2 bytes, signed)
//! - Palette indices (`width * height` bytes, row-major)
//!
//! Directions that share a data offset with the preceding direction are stored
//! once; the loader keeps only the first of such a run.
//!
//! # Examples
//!
//! ```no_run
//! use frm_types::file::frm::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frm = File::open("HMJMPSAA.FRM")?;
//!
//! println!("{} directions, {} frames each", frm.directions().len(), frm.frames_per_direction());
//! for direction in frm.directions() {
//!     for frame in direction.frames() {
//!         println!("{}: {}", direction.orientation(), frame);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::{fmt, io::Read, path::Path};

use log::{debug, trace};

use crate::file::FrmError;

mod direction;
mod frame;

pub use direction::{Direction, Orientation};
pub use frame::{Frame, FrameRowIterator};

/// FRM file constants.
pub mod constants {
	/// Number of direction slots in the header
	pub const DIRECTION_SLOTS: usize = 6;

	/// Size of the file header; the frame area starts right after it
	pub const HEADER_SIZE: usize = 62;

	/// Size of a frame record header (width, height, size, offsets)
	pub const FRAME_HEADER_SIZE: usize = 12;

	/// Version written by [`super::File::new`]
	pub const DEFAULT_VERSION: u32 = 4;
}

/// FRM file structure, representing a complete multi-direction sprite animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	version: u32,
	frames_per_second: u16,
	action_frame: u16,
	frames_per_direction: u16,
	directions: Vec<Direction>,
}

impl File {
	/// Creates a file from its directions.
	///
	/// # Errors
	///
	/// - [`FrmError::TooManyFrames`] if a direction holds more frames than the
	///   16-bit header field can count
	/// - [`FrmError::FrameCountMismatch`] if the directions do not all hold the
	///   same number of frames
	pub fn new(frames_per_second: u16, directions: Vec<Direction>) -> Result<Self, FrmError> {
		let frame_count = directions.first().map_or(0, |d| d.frames().len());
		let frames_per_direction =
			u16::try_from(frame_count).map_err(|_| FrmError::TooManyFrames(frame_count))?;

		if let Some((index, direction)) = directions
			.iter()
			.enumerate()
			.find(|(_, d)| d.frames().len() != frame_count)
		{
			return Err(FrmError::FrameCountMismatch {
				direction: index,
				expected: frames_per_direction,
				actual: direction.frames().len(),
			});
		}

		Ok(Self {
			version: constants::DEFAULT_VERSION,
			frames_per_second,
			action_frame: 0,
			frames_per_direction,
			directions,
		})
	}

	/// Sets the action frame marker.
	#[must_use]
	pub fn with_action_frame(mut self, action_frame: u16) -> Self {
		self.action_frame = action_frame;
		self
	}

	/// Opens an FRM file from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or its structure is truncated.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, FrmError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Loads an FRM file from any reader.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the file structure is truncated.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, FrmError> {
		let mut raw = Vec::new();
		reader.read_to_end(&mut raw)?;
		Self::from_bytes(&raw)
	}

	/// Loads an FRM file from a byte slice.
	///
	/// # Errors
	///
	/// Returns [`FrmError::InsufficientData`] if the header, a frame record or
	/// its pixels extend past the end of `data`.
	pub fn from_bytes(data: &[u8]) -> Result<Self, FrmError> {
		let mut reader = ByteReader::new(data);

		let version = reader.u32()?;
		let frames_per_second = reader.u16()?;
		let action_frame = reader.u16()?;
		let frames_per_direction = reader.u16()?;

		let mut shift_x = [0i16; constants::DIRECTION_SLOTS];
		for shift in &mut shift_x {
			*shift = reader.i16()?;
		}
		let mut shift_y = [0i16; constants::DIRECTION_SLOTS];
		for shift in &mut shift_y {
			*shift = reader.i16()?;
		}
		let mut data_offsets = [0u32; constants::DIRECTION_SLOTS];
		for offset in &mut data_offsets {
			*offset = reader.u32()?;
		}
		let _frame_area_size = reader.u32()?;

		let mut directions = Vec::with_capacity(constants::DIRECTION_SLOTS);
		for (slot, orientation) in Orientation::ALL.into_iter().enumerate() {
			if slot > 0 && data_offsets[slot - 1] == data_offsets[slot] {
				debug!("direction {orientation} shares data with the previous direction, skipped");
				continue;
			}

			reader.seek(constants::HEADER_SIZE + data_offsets[slot] as usize);

			let mut frames = Vec::with_capacity(frames_per_direction as usize);
			for _ in 0..frames_per_direction {
				let width = reader.u16()?;
				let height = reader.u16()?;
				let _pixel_count = reader.u32()?;
				let offset_x = reader.i16()?;
				let offset_y = reader.i16()?;
				let pixels = reader.bytes(width as usize * height as usize)?.to_vec();

				frames.push(Frame::new(width, height, offset_x, offset_y, pixels)?);
			}
			trace!("direction {orientation}: {} frames", frames.len());

			directions.push(
				Direction::new(orientation, frames)
					.with_shift(shift_x[slot], shift_y[slot])
					.with_data_offset(data_offsets[slot]),
			);
		}

		Ok(Self {
			version,
			frames_per_second,
			action_frame,
			frames_per_direction,
			directions,
		})
	}

	/// Serializes the FRM file to bytes.
	///
	/// Header slots beyond the last direction repeat the last direction's values
	/// so the file loads back with the same number of directions.
	///
	/// # Errors
	///
	/// Returns [`FrmError::TooManyDirections`] if there are more than six directions.
	pub fn to_bytes(&self) -> Result<Vec<u8>, FrmError> {
		if self.directions.len() > constants::DIRECTION_SLOTS {
			return Err(FrmError::TooManyDirections(self.directions.len()));
		}

		let mut frame_area = Vec::new();
		let mut data_offsets = Vec::with_capacity(self.directions.len());
		for direction in &self.directions {
			data_offsets.push(frame_area.len() as u32);
			for frame in direction.frames() {
				frame_area.extend_from_slice(&frame.width().to_be_bytes());
				frame_area.extend_from_slice(&frame.height().to_be_bytes());
				frame_area.extend_from_slice(&(frame.pixel_count() as u32).to_be_bytes());
				frame_area.extend_from_slice(&frame.offset_x().to_be_bytes());
				frame_area.extend_from_slice(&frame.offset_y().to_be_bytes());
				frame_area.extend_from_slice(frame.pixels());
			}
		}

		let slot = |index: usize| self.directions.get(index).or(self.directions.last());

		let mut raw = Vec::with_capacity(constants::HEADER_SIZE + frame_area.len());
		raw.extend_from_slice(&self.version.to_be_bytes());
		raw.extend_from_slice(&self.frames_per_second.to_be_bytes());
		raw.extend_from_slice(&self.action_frame.to_be_bytes());
		raw.extend_from_slice(&self.frames_per_direction.to_be_bytes());
		for index in 0..constants::DIRECTION_SLOTS {
			let shift = slot(index).map_or(0, Direction::shift_x);
			raw.extend_from_slice(&shift.to_be_bytes());
		}
		for index in 0..constants::DIRECTION_SLOTS {
			let shift = slot(index).map_or(0, Direction::shift_y);
			raw.extend_from_slice(&shift.to_be_bytes());
		}
		for index in 0..constants::DIRECTION_SLOTS {
			let offset = data_offsets.get(index).or(data_offsets.last()).copied().unwrap_or(0);
			raw.extend_from_slice(&offset.to_be_bytes());
		}
		raw.extend_from_slice(&(frame_area.len() as u32).to_be_bytes());
		raw.extend_from_slice(&frame_area);

		Ok(raw)
	}

	/// Saves the FRM file to disk.
	///
	/// # Errors
	///
	/// Returns an error if serialization fails or the file cannot be written.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FrmError> {
		std::fs::write(path, self.to_bytes()?)?;
		Ok(())
	}

	/// Returns the format version.
	#[inline]
	pub fn version(&self) -> u32 {
		self.version
	}

	/// Returns the playback rate.
	#[inline]
	pub fn frames_per_second(&self) -> u16 {
		self.frames_per_second
	}

	/// Returns the action frame marker.
	#[inline]
	pub fn action_frame(&self) -> u16 {
		self.action_frame
	}

	/// Returns the number of frames every direction holds.
	#[inline]
	pub fn frames_per_direction(&self) -> u16 {
		self.frames_per_direction
	}

	/// Returns the directions with distinct content, in file order.
	#[inline]
	pub fn directions(&self) -> &[Direction] {
		&self.directions
	}

	/// Returns the direction at `index`.
	pub fn direction(&self, index: usize) -> Option<&Direction> {
		self.directions.get(index)
	}

	/// Widest frame across all directions.
	pub fn max_frame_width(&self) -> u16 {
		self.directions.iter().map(Direction::max_frame_width).max().unwrap_or(0)
	}

	/// Tallest frame across all directions.
	pub fn max_frame_height(&self) -> u16 {
		self.directions.iter().map(Direction::max_frame_height).max().unwrap_or(0)
	}
}

impl fmt::Display for File {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"FRM File: v{}, {} fps, {} directions × {} frames",
			self.version,
			self.frames_per_second,
			self.directions.len(),
			self.frames_per_direction
		)
	}
}

/// Big-endian cursor that reports truncation as [`FrmError::InsufficientData`].
struct ByteReader<'a> {
	data: &'a [u8],
	position: usize,
}

impl<'a> ByteReader<'a> {
	fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			position: 0,
		}
	}

	fn seek(&mut self, position: usize) {
		self.position = position;
	}

	fn bytes(&mut self, len: usize) -> Result<&'a [u8], FrmError> {
		let end = self.position.saturating_add(len);
		let slice = self.data.get(self.position..end).ok_or(FrmError::InsufficientData {
			expected: end,
			actual: self.data.len(),
		})?;
		self.position = end;
		Ok(slice)
	}

	fn array<const N: usize>(&mut self) -> Result<[u8; N], FrmError> {
		let mut out = [0u8; N];
		out.copy_from_slice(self.bytes(N)?);
		Ok(out)
	}

	fn u16(&mut self) -> Result<u16, FrmError> {
		self.array().map(u16::from_be_bytes)
	}

	fn i16(&mut self) -> Result<i16, FrmError> {
		self.array().map(i16::from_be_bytes)
	}

	fn u32(&mut self) -> Result<u32, FrmError> {
		self.array().map(u32::from_be_bytes)
	}
}
