//! Output strategy selection and saving of rendered results.

use std::{
	fmt,
	path::{Path, PathBuf},
	str::FromStr,
};

use frm_types::file::{FrmFile, Palette};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
	Animation, Canvas, RenderError, RenderOptions,
	compose::{compose_directions, compose_grid, compose_packed},
};

/// Output strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Generator {
	/// One static grid image with every frame in a fixed cell
	#[default]
	Legacy,
	/// One animated image per direction
	Anim,
	/// One animated image with all six directions
	AnimPacked,
}

impl Generator {
	/// All generators, in the order they are listed to users.
	pub const ALL: [Self; 3] = [Self::Legacy, Self::Anim, Self::AnimPacked];

	/// Name used on the command line and in configuration files.
	pub fn name(self) -> &'static str {
		match self {
			Self::Legacy => "legacy",
			Self::Anim => "anim",
			Self::AnimPacked => "anim-packed",
		}
	}

	/// Returns `true` for the strategies that produce animations.
	pub fn is_animated(self) -> bool {
		!matches!(self, Self::Legacy)
	}

	/// Generator to use for `file` when `self` was requested.
	///
	/// A sprite with a single direction is always written as a legacy grid.
	pub fn resolve(self, file: &FrmFile) -> Self {
		if self.is_animated() && file.directions().len() == 1 {
			debug!("single direction, {self} resolved to {}", Self::Legacy);
			return Self::Legacy;
		}
		self
	}

	/// Renders `file` with `palette`.
	///
	/// The palette's brightness multiplier is applied once up front; the
	/// generator in `options` is ignored in favor of `self`.
	///
	/// # Errors
	///
	/// - [`RenderError::PalError`] if the multiplier is invalid or overflows a color
	/// - [`RenderError::InvalidDirectionCount`] for [`Generator::AnimPacked`] without six directions
	/// - [`RenderError::EmptyFrameSequence`] for animated output of a direction without frames
	pub fn render(self, file: &FrmFile, palette: &Palette, options: &RenderOptions) -> Result<Rendered, RenderError> {
		let palette = palette.with_multiplier(options.rgb_multiplier)?;
		let lookup = |index: u8| palette.get(index);

		debug!("render {} x{}", self, options.rgb_multiplier);

		Ok(match self {
			Self::Legacy => Rendered::Static(compose_grid(file, lookup)),
			Self::Anim => Rendered::Animated(compose_directions(file, lookup, options)?),
			Self::AnimPacked => Rendered::Animated(vec![compose_packed(file, lookup, options)?]),
		})
	}
}

impl fmt::Display for Generator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Error returned when parsing an unknown generator name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown generator '{0}', expected one of: legacy, anim, anim-packed")]
pub struct ParseGeneratorError(String);

impl FromStr for Generator {
	type Err = ParseGeneratorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|generator| generator.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| ParseGeneratorError(s.to_string()))
	}
}

/// Result of rendering a sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
	/// A single still image
	Static(Canvas),
	/// One or more animations
	Animated(Vec<Animation>),
}

impl Rendered {
	/// Saves the result next to `path` and returns the files written.
	///
	/// - a still image is written to `path`
	/// - a single packed animation is written to `path`
	/// - per-direction animations are written to `<stem>_<index><ext>`, one per direction
	///
	/// # Errors
	///
	/// Returns an error if a file cannot be created or encoding fails.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<Vec<PathBuf>, RenderError> {
		let path = path.as_ref();
		let written = match self {
			Self::Static(canvas) => {
				canvas.save_png(path)?;
				vec![path.to_path_buf()]
			}
			Self::Animated(animations) => match animations.as_slice() {
				[animation] if animation.orientation().is_none() => {
					animation.save_apng(path)?;
					vec![path.to_path_buf()]
				}
				_ => {
					let mut written = Vec::with_capacity(animations.len());
					for (index, animation) in animations.iter().enumerate() {
						let target = direction_path(path, index);
						animation.save_apng(&target)?;
						written.push(target);
					}
					written
				}
			},
		};

		for file in &written {
			debug!("wrote {}", file.display());
		}
		Ok(written)
	}
}

/// Inserts `_<index>` between the file stem and the extension of `path`.
///
/// ```
/// use std::path::Path;
///
/// use frm_render::generator::direction_path;
///
/// assert_eq!(direction_path(Path::new("out/hero.png"), 3), Path::new("out/hero_3.png"));
/// assert_eq!(direction_path(Path::new("hero"), 0), Path::new("hero_0"));
/// ```
pub fn direction_path(path: &Path, index: usize) -> PathBuf {
	let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
	let mut name = format!("{stem}_{index}");
	if let Some(extension) = path.extension() {
		name.push('.');
		name.push_str(&extension.to_string_lossy());
	}
	path.with_file_name(name)
}

#[cfg(test)]
mod tests {
	use frm_types::file::{Color, Direction, Frame, Orientation, PalError};

	use super::*;

	fn sprite(directions: usize) -> FrmFile {
		let directions = Orientation::ALL
			.into_iter()
			.take(directions)
			.map(|o| Direction::new(o, vec![Frame::filled(3, 3, 0, 0, 1).unwrap(), Frame::filled(3, 3, 1, 0, 2).unwrap()]))
			.collect();
		FrmFile::new(10, directions).unwrap()
	}

	#[test]
	fn test_names_round_trip() {
		for generator in Generator::ALL {
			assert_eq!(generator.name().parse::<Generator>().unwrap(), generator);
		}
		assert_eq!("ANIM-PACKED".parse::<Generator>().unwrap(), Generator::AnimPacked);
		assert!("packed".parse::<Generator>().is_err());
	}

	#[test]
	fn test_dispatch() {
		let palette = Palette::grayscale();
		let options = RenderOptions::default();

		let Rendered::Static(canvas) = Generator::Legacy.render(&sprite(6), &palette, &options).unwrap() else {
			panic!("legacy must be static");
		};
		assert_eq!((canvas.width(), canvas.height()), (6, 18));

		let Rendered::Animated(animations) = Generator::Anim.render(&sprite(6), &palette, &options).unwrap() else {
			panic!("anim must be animated");
		};
		assert_eq!(animations.len(), 6);

		let Rendered::Animated(animations) = Generator::AnimPacked.render(&sprite(6), &palette, &options).unwrap()
		else {
			panic!("anim-packed must be animated");
		};
		assert_eq!(animations.len(), 1);
		assert_eq!(animations[0].orientation(), None);
	}

	#[test]
	fn test_single_direction_resolves_to_legacy() {
		for generator in Generator::ALL {
			assert_eq!(generator.resolve(&sprite(1)), Generator::Legacy);
			assert_eq!(generator.resolve(&sprite(6)), generator);
			assert_eq!(generator.resolve(&sprite(2)), generator);
		}

		// one frame per direction is still animated
		let still = FrmFile::new(
			10,
			Orientation::ALL.into_iter().map(|o| Direction::new(o, vec![Frame::filled(3, 3, 0, 0, 1).unwrap()])).collect(),
		)
		.unwrap();
		assert_eq!(Generator::Anim.resolve(&still), Generator::Anim);
	}

	#[test]
	fn test_packed_requires_six_directions() {
		let result = Generator::AnimPacked.render(&sprite(1), &Palette::grayscale(), &RenderOptions::default());
		assert!(matches!(result, Err(RenderError::InvalidDirectionCount { .. })));
	}

	#[test]
	fn test_multiplier_applied() {
		let file = FrmFile::new(10, vec![Direction::new(Orientation::East, vec![Frame::filled(1, 1, 0, 0, 200).unwrap()])]).unwrap();
		let options = RenderOptions {
			rgb_multiplier: 2,
			..RenderOptions::default()
		};
		let Rendered::Static(canvas) = Generator::Legacy.render(&file, &Palette::grayscale(), &options).unwrap() else {
			panic!("legacy must be static");
		};
		// grayscale 200 / 4 = 50, doubled
		assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(100, 100, 100)));

		let options = RenderOptions {
			rgb_multiplier: 7,
			..RenderOptions::default()
		};
		let result = Generator::Legacy.render(&file, &Palette::grayscale(), &options);
		assert!(matches!(result, Err(RenderError::PalError(PalError::InvalidMultiplier(7)))));
	}

	#[test]
	fn test_save_names() {
		let dir = std::env::temp_dir().join(format!("frm-render-save-{}", std::process::id()));
		std::fs::create_dir_all(&dir).unwrap();
		let palette = Palette::grayscale();
		let options = RenderOptions::default();

		let written = Generator::Anim.render(&sprite(6), &palette, &options).unwrap().save(dir.join("hero.png")).unwrap();
		let names: Vec<_> = written.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
		assert_eq!(names, ["hero_0.png", "hero_1.png", "hero_2.png", "hero_3.png", "hero_4.png", "hero_5.png"]);

		let written =
			Generator::AnimPacked.render(&sprite(6), &palette, &options).unwrap().save(dir.join("packed.png")).unwrap();
		assert_eq!(written, [dir.join("packed.png")]);
		assert!(std::fs::read(&written[0]).unwrap().starts_with(b"\x89PNG"));

		std::fs::remove_dir_all(&dir).unwrap();
	}
}
