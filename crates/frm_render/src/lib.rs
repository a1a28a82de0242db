//! Layout, composition and image output for FRM sprites.
//!
//! The pipeline has three stages:
//!
//! 1. [`layout`] turns each direction's relative frame offsets into absolute
//!    placements on the smallest canvas that holds every frame.
//! 2. [`compose`] draws frames onto [`Canvas`]es in one of three arrangements,
//!    selected with [`Generator`].
//! 3. [`sink`] streams the resulting [`Animation`]s to an encoder; still
//!    images are written with [`Canvas::save_png`].
//!
//! # Examples
//!
//! ```
//! use frm_render::{Generator, Rendered, RenderOptions};
//! use frm_types::prelude::*;
//!
//! let frames = vec![Frame::filled(10, 10, 0, 0, 1).unwrap(), Frame::filled(10, 10, -8, 0, 1).unwrap()];
//! let file = FrmFile::new(10, vec![Direction::new(Orientation::East, frames)]).unwrap();
//!
//! let rendered = Generator::Anim.render(&file, &Palette::grayscale(), &RenderOptions::default()).unwrap();
//! let Rendered::Animated(animations) = rendered else { unreachable!() };
//! assert_eq!((animations[0].width(), animations[0].height()), (18, 10));
//! ```

pub mod anim;
pub mod canvas;
pub mod compose;
mod error;
pub mod generator;
pub mod layout;
pub mod options;
pub mod sink;

pub use anim::Animation;
pub use canvas::Canvas;
pub use error::RenderError;
pub use generator::{Generator, ParseGeneratorError, Rendered};
pub use options::RenderOptions;

/// `use frm_render::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use crate::{
		Animation, Canvas, Generator, RenderError, RenderOptions, Rendered,
		layout::{DirectionLayout, Placement, layout_direction},
		sink::{AnimationSink, ApngSink},
	};
}
