//! Output strategies that turn a parsed sprite into images.
//!
//! - [`compose_grid`]: one static image, every frame in a fixed grid cell
//! - [`compose_directions`]: one animation per direction
//! - [`compose_packed`]: one animation showing all six directions at once
//!
//! All composers take a color lookup that maps palette indices to final RGBA
//! values, typically [`Palette::get`](frm_types::file::Palette::get) on a
//! palette that already has the brightness multiplier applied.

mod directions;
mod grid;
mod packed;

pub use directions::{compose_direction, compose_directions};
pub use grid::compose_grid;
pub use packed::{PackedLayout, compose_packed};
