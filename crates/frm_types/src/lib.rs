//! This crate provides core data types and file format support for the `frm-rs` project.
//!
//! # File Formats
//!
//! - **FRM**: Multi-direction, multi-frame palette-indexed sprite animations
//! - **PAL**: 256-color palettes with VGA (0-63) channel values
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use frm_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frm = FrmFile::open("HMJMPSAA.FRM")?;
//! let palette = Palette::from_file("COLOR.PAL")?.with_multiplier(4)?;
//!
//! let frame = &frm.directions()[0].frames()[0];
//! let color = palette.get(frame.color_index(0, 0));
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use frm_types::file::frm::{Direction, File, Frame, Orientation};
//!
//! let direction = Direction::new(Orientation::East, vec![Frame::filled(8, 8, 0, 0, 1).unwrap()]);
//! let frm = File::new(10, vec![direction]).unwrap();
//! assert_eq!(frm.frames_per_direction(), 1);
//! ```

pub mod file;

/// `use frm_types::prelude::*;` to import commonly used items.
pub mod prelude;
