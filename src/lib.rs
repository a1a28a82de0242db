#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `frm-rs` converts FRM sprite animations into PNG grids and animated PNGs.
//!
pub use frm_internal::*;
