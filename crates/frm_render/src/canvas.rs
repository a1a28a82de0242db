//! RGBA pixel buffers and the palette-to-RGBA blitter.

use std::{
	io::{Seek, Write},
	path::Path,
};

use frm_types::file::{Color, Frame};
use image::{ImageFormat, Rgba, RgbaImage};
use log::trace;

use crate::RenderError;

/// Owned RGBA raster, zero-initialized (transparent black).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
	image: RgbaImage,
}

impl Canvas {
	/// Creates a transparent canvas.
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			image: RgbaImage::new(width, height),
		}
	}

	/// Creates a canvas exactly the size of `frame` and draws it at the origin.
	pub fn from_frame<L>(frame: &Frame, lookup: L) -> Self
	where
		L: Fn(u8) -> Color,
	{
		let mut canvas = Self::new(u32::from(frame.width()), u32::from(frame.height()));
		canvas.blit(frame, 0, 0, lookup);
		canvas
	}

	/// Returns the canvas width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.image.width()
	}

	/// Returns the canvas height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.image.height()
	}

	/// Gets the color at the specified coordinates, or `None` when out of bounds.
	pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
		let Rgba([r, g, b, a]) = *self.image.get_pixel_checked(x, y)?;
		Some(Color::new(r, g, b, a))
	}

	/// Returns the raw RGBA bytes, row-major.
	#[inline]
	pub fn as_raw(&self) -> &[u8] {
		self.image.as_raw()
	}

	/// Returns the underlying image buffer.
	#[inline]
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Consumes the canvas and returns the underlying image buffer.
	pub fn into_image(self) -> RgbaImage {
		self.image
	}

	/// Copies `frame` onto the canvas with its top-left corner at (`x`, `y`).
	///
	/// Every frame pixel is converted through `lookup` and written as-is,
	/// transparent colors included. Destination pixels that fall outside the
	/// canvas are skipped; the number of skipped pixels is returned.
	pub fn blit<L>(&mut self, frame: &Frame, x: u32, y: u32, lookup: L) -> usize
	where
		L: Fn(u8) -> Color,
	{
		let (canvas_width, canvas_height) = (u64::from(self.width()), u64::from(self.height()));
		let mut clipped = 0;

		for (row_index, row) in frame.rows().enumerate() {
			let target_y = u64::from(y) + row_index as u64;
			if target_y >= canvas_height {
				clipped += row.len();
				continue;
			}

			for (column, &index) in row.iter().enumerate() {
				let target_x = u64::from(x) + column as u64;
				if target_x >= canvas_width {
					clipped += row.len() - column;
					break;
				}
				let color = lookup(index);
				self.image.put_pixel(target_x as u32, target_y as u32, Rgba(color.to_array()));
			}
		}

		if clipped > 0 {
			trace!(
				"blit {}x{} @ {},{} clipped {} pixels",
				frame.width(),
				frame.height(),
				x,
				y,
				clipped
			);
		}
		clipped
	}

	/// Returns a canvas of `width` × `height` with this canvas drawn at (`x`, `y`).
	///
	/// Pixels that do not fit are dropped.
	pub fn expanded(&self, width: u32, height: u32, x: u32, y: u32) -> Self {
		let mut target = Self::new(width, height);
		image::imageops::replace(&mut target.image, &self.image, i64::from(x), i64::from(y));
		target
	}

	/// Encodes the canvas as a PNG into `writer`.
	///
	/// # Errors
	///
	/// Returns an error if encoding or writing fails.
	pub fn write_png<W: Write + Seek>(&self, writer: &mut W) -> Result<(), RenderError> {
		self.image.write_to(writer, ImageFormat::Png)?;
		Ok(())
	}

	/// Saves the canvas as a PNG file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be created or encoding fails.
	pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
		self.image.save_with_format(path, ImageFormat::Png)?;
		Ok(())
	}
}
