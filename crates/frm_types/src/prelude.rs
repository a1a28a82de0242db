//! Prelude module for `frm_types`.
//!
//! This module provides a convenient way to import commonly used types.
//!
//! # Examples
//!
//! ```
//! use frm_types::prelude::*;
//!
//! let palette = Palette::grayscale();
//! assert_eq!(palette.get(0), Color::transparent());
//! ```

#[doc(inline)]
pub use crate::file::{
	// Palette types
	Color,

	// FRM types
	Direction,
	Frame,
	FrmError,
	FrmFile,
	Orientation,

	PalError,
	Palette,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
