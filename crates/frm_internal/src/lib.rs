//! This module is separated into its own crate so the root package stays a thin facade, and should not be used directly.

/// `use frm_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export member crates for convenience
pub use frm_render;
pub use frm_types;

// Re-export commonly used types at crate root
pub use frm_render::{Animation, Canvas, Generator, RenderError, RenderOptions, Rendered};
pub use frm_types::file::{FrmError, FrmFile, PalError, Palette};
