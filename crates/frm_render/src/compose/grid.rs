use frm_types::file::{Color, FrmFile};
use log::debug;

use crate::Canvas;

/// Draws every frame of every direction into one grid image.
///
/// Each cell is as large as the largest frame in the file. Direction `d`
/// occupies row `d` and frame `f` column `f`; frame offsets are ignored.
pub fn compose_grid<L>(file: &FrmFile, lookup: L) -> Canvas
where
	L: Fn(u8) -> Color,
{
	let cell_width = u32::from(file.max_frame_width());
	let cell_height = u32::from(file.max_frame_height());
	let columns = u32::from(file.frames_per_direction());
	let rows = file.directions().len() as u32;

	debug!("grid cell {cell_width}x{cell_height}, {columns} columns x {rows} rows");

	let mut canvas = Canvas::new(cell_width * columns, cell_height * rows);
	for (row, direction) in file.directions().iter().enumerate() {
		for (column, frame) in direction.frames().iter().enumerate() {
			canvas.blit(frame, cell_width * column as u32, cell_height * row as u32, &lookup);
		}
	}
	canvas
}
