//! Prelude module for `frm_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use frm_internal::prelude::*;
//!
//! let direction = Direction::new(Orientation::NorthEast, vec![Frame::filled(4, 4, 0, 0, 1).unwrap()]);
//! let file = FrmFile::new(10, vec![direction]).unwrap();
//!
//! let canvas = compose_grid(&file, |index| Palette::grayscale().get(index));
//! assert_eq!((canvas.width(), canvas.height()), (4, 4));
//! ```

// Re-export everything from both preludes
#[doc(inline)]
pub use frm_render::prelude::*;
#[doc(inline)]
pub use frm_types::prelude::*;

#[doc(inline)]
pub use frm_render::compose::{compose_direction, compose_directions, compose_grid, compose_packed};

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use frm_render;
#[doc(inline)]
pub use frm_types;
