//! Integration tests for `frm-rs`: parsing, layout and rendering end to end.

mod convert;
mod scenarios;

use frm_rs::prelude::*;

/// Builds a six-direction walk cycle where every step moves `step` pixels.
pub(crate) fn walk_cycle(frames: u16, step: i16) -> FrmFile {
	let directions = Orientation::ALL
		.into_iter()
		.map(|orientation| {
			let frames = (0..frames)
				.map(|i| {
					let offset = if i == 0 { 0 } else { step };
					Frame::filled(6 + i % 2, 10, offset, 0, orientation.index() as u8 + 1).unwrap()
				})
				.collect();
			Direction::new(orientation, frames)
		})
		.collect();
	FrmFile::new(10, directions).unwrap().with_action_frame(1)
}

/// Unique scratch directory for a test.
pub(crate) fn scratch_dir(name: &str) -> std::path::PathBuf {
	let dir = std::env::temp_dir().join(format!("frm-rs-{name}-{}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap();
	dir
}
