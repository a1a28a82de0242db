//! `.PAL` color palette support.
//!
//! PAL files start with 256 RGB triplets whose channels use the 0-63 range of
//! the original VGA hardware. Data past the color table (lookup tables used by
//! the game engine) is ignored.
//!
//! Color 0 is always transparent. Indices 229-254 are palette-cycling slots the
//! engine animates at runtime; they are replaced by marker colors so that they
//! stay recognizable in converted images.

use std::{fmt, io::Read, path::Path};

use crate::file::PalError;

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Creates a transparent black color.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}

	/// Returns the color as `[R, G, B, A]`.
	pub const fn to_array(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::transparent()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Palette-cycling groups: first index, last index, green marker value.
const CYCLING_GROUPS: [(u8, u8, u8); 6] = [
	(229, 232, 0),   // slime
	(233, 237, 51),  // monitors
	(238, 242, 102), // slow fire
	(243, 247, 153), // fast fire
	(248, 253, 204), // shore
	(254, 254, 255), // alarm
];

/// 256-color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	colors: [Color; 256],

	/// Colors excluded from brightness scaling
	fixed: [bool; 256],
}

impl Palette {
	/// Number of colors in a palette
	pub const PALETTE_SIZE: usize = 256;

	/// Size of the color table at the start of a PAL file (256 × RGB)
	pub const COLOR_TABLE_SIZE: usize = Self::PALETTE_SIZE * 3;

	/// Multiplier applied when none is configured
	pub const DEFAULT_MULTIPLIER: u8 = 4;

	/// Creates a palette with all colors set to transparent black.
	pub fn new() -> Self {
		Self {
			colors: [Color::transparent(); 256],
			fixed: [false; 256],
		}
	}

	/// Loads a palette from a PAL file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or is shorter than the color table.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PalError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Loads a palette from a reader.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the data is shorter than the color table.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, PalError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Loads a palette from a byte slice.
	///
	/// # Errors
	///
	/// Returns [`PalError::InsufficientData`] if `data` is shorter than 768 bytes.
	pub fn from_bytes(data: &[u8]) -> Result<Self, PalError> {
		if data.len() < Self::COLOR_TABLE_SIZE {
			return Err(PalError::InsufficientData {
				expected: Self::COLOR_TABLE_SIZE,
				actual: data.len(),
			});
		}

		let mut palette = Self::new();

		// the first triplet is never read; index 0 stays transparent
		for (index, rgb) in data[..Self::COLOR_TABLE_SIZE].chunks_exact(3).enumerate().skip(1) {
			palette.colors[index] = Color::rgb(rgb[0], rgb[1], rgb[2]);
		}

		palette.mark_special_colors();
		Ok(palette)
	}

	/// Creates a grayscale palette in the 0-63 channel range.
	///
	/// Useful when no PAL file is available.
	pub fn grayscale() -> Self {
		let mut palette = Self::new();
		for index in 1..Self::PALETTE_SIZE {
			let value = (index / 4) as u8;
			palette.colors[index] = Color::rgb(value, value, value);
		}
		palette.mark_special_colors();
		palette
	}

	fn mark_special_colors(&mut self) {
		self.fixed[0] = true;
		self.fixed[255] = true;

		for (first, last, group) in CYCLING_GROUPS {
			for index in first..=last {
				let slot = index as usize;
				self.colors[slot] = Color::new(153, group, (index - first) * 51, 51);
				self.fixed[slot] = true;
			}
		}
	}

	/// Returns a copy of this palette with every scalable channel multiplied.
	///
	/// Transparent, white-point and palette-cycling colors are left untouched.
	///
	/// # Errors
	///
	/// - [`PalError::InvalidMultiplier`] if `multiplier` is outside `2..=4`
	/// - [`PalError::MultiplierOverflow`] if a scaled channel would reach 255
	pub fn with_multiplier(&self, multiplier: u8) -> Result<Self, PalError> {
		if !(2..=4).contains(&multiplier) {
			return Err(PalError::InvalidMultiplier(multiplier));
		}

		let mut scaled = self.clone();
		for (index, color) in scaled.colors.iter_mut().enumerate() {
			if self.fixed[index] {
				continue;
			}

			let scale = |channel: char, value: u8| {
				let product = u32::from(value) * u32::from(multiplier);
				if product >= u32::from(u8::MAX) {
					return Err(PalError::MultiplierOverflow {
						index: index as u8,
						channel,
						value,
						multiplier,
					});
				}
				Ok(product as u8)
			};

			let r = scale('R', color.r)?;
			let g = scale('G', color.g)?;
			let b = scale('B', color.b)?;
			*color = Color::new(r, g, b, color.a);
		}

		Ok(scaled)
	}

	/// Gets a color by index.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Sets a color by index.
	///
	/// The color keeps its multiplier behavior.
	pub fn set(&mut self, index: u8, color: Color) {
		self.colors[index as usize] = color;
	}

	/// Returns all colors.
	pub fn colors(&self) -> &[Color; 256] {
		&self.colors
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::new()
	}
}
