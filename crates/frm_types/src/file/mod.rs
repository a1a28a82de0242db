//! File type support for the `frm-rs` project.

mod error;

pub mod frm;
pub mod pal;

// Re-export error types
pub use error::{FrmError, PalError};

// Re-export main file types
pub use frm::{Direction, File as FrmFile, Frame, FrameRowIterator, Orientation};
pub use pal::{Color, Palette};
