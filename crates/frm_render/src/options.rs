//! Render options.
//!
//! Options can be built in code, or loaded from an optional TOML file layered
//! under `FRM_*` environment variables:
//!
//! ```toml
//! generator = "anim-packed"
//! rgb_multiplier = 3
//! spacing = 8
//! loop_count = 0
//! preview = true
//! ```
//!
//! `FRM_SPACING=2` then overrides the file's `spacing`.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use frm_types::file::Palette;
use serde::{Deserialize, Serialize};

use crate::{Generator, RenderError};

/// Prefix of the environment variables read by [`RenderOptions::load`].
pub const ENV_PREFIX: &str = "FRM";

/// Options shared by all output strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Output strategy
	pub generator: Generator,
	/// Brightness multiplier applied to the palette, `2..=4`
	pub rgb_multiplier: u8,
	/// Gap in pixels between cells of the packed layout
	pub spacing: u32,
	/// Number of animation plays; 0 loops forever
	pub loop_count: u32,
	/// Emit a still preview frame ahead of each animation
	pub preview: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			generator: Generator::default(),
			rgb_multiplier: Palette::DEFAULT_MULTIPLIER,
			spacing: 4,
			loop_count: 0,
			preview: true,
		}
	}
}

impl RenderOptions {
	/// Loads options from an optional TOML file and the environment.
	///
	/// Missing keys keep their defaults; environment variables win over the file.
	///
	/// # Errors
	///
	/// Returns [`RenderError::ConfigError`] if the file cannot be read or a value
	/// has the wrong type.
	pub fn load(path: Option<&Path>) -> Result<Self, RenderError> {
		let mut builder = Config::builder();
		if let Some(path) = path {
			builder = builder.add_source(File::from(path).format(FileFormat::Toml));
		}
		let settings = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true)).build()?;
		Ok(settings.try_deserialize()?)
	}

	/// Parses options from TOML text, ignoring the environment.
	///
	/// # Errors
	///
	/// Returns [`RenderError::ConfigError`] if the text is not valid TOML or a
	/// value has the wrong type.
	pub fn from_toml_str(text: &str) -> Result<Self, RenderError> {
		let settings = Config::builder().add_source(File::from_str(text, FileFormat::Toml)).build()?;
		Ok(settings.try_deserialize()?)
	}
}
