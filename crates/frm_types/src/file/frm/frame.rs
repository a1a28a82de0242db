//! FRM frame structures and utilities.

use std::fmt;

use crate::file::FrmError;

/// Single palette-indexed image inside a direction.
///
/// `offset_x` and `offset_y` describe how far the anchor point moves relative to
/// the previous frame of the same direction. The offsets of the first frame are
/// carried from the file but are not used for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	width: u16,
	height: u16,
	offset_x: i16,
	offset_y: i16,
	index: u16,

	/// Row-major palette indices, `width * height` entries
	pixels: Vec<u8>,
}

impl Frame {
	/// Creates a new frame.
	///
	/// # Arguments
	///
	/// * `width` - Frame width in pixels
	/// * `height` - Frame height in pixels
	/// * `offset_x` - Horizontal anchor motion relative to the previous frame
	/// * `offset_y` - Vertical anchor motion relative to the previous frame
	/// * `pixels` - Palette indices in row-major order
	///
	/// # Errors
	///
	/// - [`FrmError::EmptyFrame`] if `width` or `height` is zero
	/// - [`FrmError::PixelCountMismatch`] if `pixels` does not hold exactly
	///   `width * height` entries
	pub fn new(
		width: u16,
		height: u16,
		offset_x: i16,
		offset_y: i16,
		pixels: Vec<u8>,
	) -> Result<Self, FrmError> {
		if width == 0 || height == 0 {
			return Err(FrmError::EmptyFrame { width, height });
		}
		if pixels.len() != width as usize * height as usize {
			return Err(FrmError::PixelCountMismatch {
				width,
				height,
				actual: pixels.len(),
			});
		}

		Ok(Self {
			width,
			height,
			offset_x,
			offset_y,
			index: 0,
			pixels,
		})
	}

	/// Creates a frame filled with a single palette index.
	///
	/// # Errors
	///
	/// Returns [`FrmError::EmptyFrame`] if `width` or `height` is zero.
	pub fn filled(
		width: u16,
		height: u16,
		offset_x: i16,
		offset_y: i16,
		color: u8,
	) -> Result<Self, FrmError> {
		Self::new(width, height, offset_x, offset_y, vec![color; width as usize * height as usize])
	}

	/// Sets the ordinal of this frame within its direction.
	#[must_use]
	pub fn with_index(mut self, index: u16) -> Self {
		self.index = index;
		self
	}

	/// Returns the frame width.
	#[inline]
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the frame height.
	#[inline]
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Returns the horizontal offset relative to the previous frame.
	#[inline]
	pub fn offset_x(&self) -> i16 {
		self.offset_x
	}

	/// Returns the vertical offset relative to the previous frame.
	#[inline]
	pub fn offset_y(&self) -> i16 {
		self.offset_y
	}

	/// Returns the 0-based position of this frame within its direction.
	#[inline]
	pub fn index(&self) -> u16 {
		self.index
	}

	/// Returns the total number of pixels in this frame.
	#[inline]
	pub fn pixel_count(&self) -> usize {
		self.pixels.len()
	}

	/// Returns the raw palette indices.
	#[inline]
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Gets the palette index at the specified coordinates.
	///
	/// Coordinates outside the frame read as index 0 (transparent).
	pub fn color_index(&self, x: u16, y: u16) -> u8 {
		if x >= self.width || y >= self.height {
			return 0;
		}
		self.pixels[y as usize * self.width as usize + x as usize]
	}

	/// Returns an iterator over the rows of palette indices.
	pub fn rows(&self) -> FrameRowIterator<'_> {
		FrameRowIterator::new(&self.pixels, self.width as usize)
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"#{} {}×{} (offset: {}, {})",
			self.index, self.width, self.height, self.offset_x, self.offset_y
		)
	}
}

/// Iterator over rows of pixel data in a frame.
#[derive(Debug, Clone)]
pub struct FrameRowIterator<'a> {
	pixels: &'a [u8],
	width: usize,
	current_row: usize,
	total_rows: usize,
}

impl<'a> FrameRowIterator<'a> {
	fn new(pixels: &'a [u8], width: usize) -> Self {
		let total_rows = if width > 0 {
			pixels.len() / width
		} else {
			0
		};

		Self {
			pixels,
			width,
			current_row: 0,
			total_rows,
		}
	}
}

impl<'a> Iterator for FrameRowIterator<'a> {
	type Item = &'a [u8];

	fn next(&mut self) -> Option<Self::Item> {
		if self.current_row >= self.total_rows {
			return None;
		}

		let start = self.current_row * self.width;
		self.current_row += 1;

		Some(&self.pixels[start..start + self.width])
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.total_rows - self.current_row;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for FrameRowIterator<'_> {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_frame_creation() {
		let frame = Frame::new(2, 2, -3, 4, vec![1, 2, 3, 4]).unwrap();
		assert_eq!(frame.width(), 2);
		assert_eq!(frame.height(), 2);
		assert_eq!(frame.offset_x(), -3);
		assert_eq!(frame.offset_y(), 4);
		assert_eq!(frame.pixel_count(), 4);
	}

	#[test]
	fn test_pixel_count_mismatch() {
		let err = Frame::new(3, 2, 0, 0, vec![0; 5]).unwrap_err();
		assert!(matches!(
			err,
			FrmError::PixelCountMismatch {
				width: 3,
				height: 2,
				actual: 5
			}
		));
	}

	#[test]
	fn test_zero_sized_frames_are_rejected() {
		for (width, height) in [(0, 2), (2, 0), (0, 0)] {
			let err = Frame::new(width, height, 0, 0, Vec::new()).unwrap_err();
			assert!(matches!(err, FrmError::EmptyFrame { width: w, height: h } if (w, h) == (width, height)));
			assert!(matches!(Frame::filled(width, height, 0, 0, 1), Err(FrmError::EmptyFrame { .. })));
		}
		assert_eq!(Frame::filled(2, 3, 0, 0, 5).unwrap().pixels(), &[5; 6]);
	}

	#[test]
	fn test_color_index_out_of_range_is_transparent() {
		let frame = Frame::new(2, 1, 0, 0, vec![7, 9]).unwrap();
		assert_eq!(frame.color_index(1, 0), 9);
		assert_eq!(frame.color_index(2, 0), 0);
		assert_eq!(frame.color_index(0, 1), 0);
	}

	#[test]
	fn test_row_iterator() {
		let frame = Frame::new(3, 2, 0, 0, vec![1, 2, 3, 4, 5, 6]).unwrap();
		let rows: Vec<_> = frame.rows().collect();
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0], &[1, 2, 3]);
		assert_eq!(rows[1], &[4, 5, 6]);
	}
}
