use frm_types::file::{Color, Direction, FrmFile};
use log::debug;

use crate::{
	Animation, Canvas, RenderError, RenderOptions,
	anim::{AnimationStep, Delay},
	layout::layout_direction,
};

/// Builds one animation per direction of `file`.
///
/// # Errors
///
/// Returns [`RenderError::EmptyFrameSequence`] if a direction has no frames.
pub fn compose_directions<L>(file: &FrmFile, lookup: L, options: &RenderOptions) -> Result<Vec<Animation>, RenderError>
where
	L: Fn(u8) -> Color,
{
	file.directions()
		.iter()
		.map(|direction| compose_direction(direction, file.frames_per_second(), &lookup, options))
		.collect()
}

/// Builds the animation of a single direction.
///
/// The canvas is the tight bounding box of the laid out frames. Every step
/// carries a frame-sized canvas positioned at the frame's placement. When
/// previews are enabled, frame 0 centered in the canvas is emitted first.
///
/// # Errors
///
/// Returns [`RenderError::EmptyFrameSequence`] if the direction has no frames.
pub fn compose_direction<L>(
	direction: &Direction,
	frames_per_second: u16,
	lookup: L,
	options: &RenderOptions,
) -> Result<Animation, RenderError>
where
	L: Fn(u8) -> Color,
{
	let layout = layout_direction(direction.frames())?;
	let (width, height) = (layout.width(), layout.height());
	let delay = Delay::from_fps(frames_per_second);

	debug!(
		"direction {} canvas {}x{}, {} frames",
		direction.orientation(),
		width,
		height,
		direction.frames().len()
	);

	let preview = match direction.frames().first() {
		Some(first) if options.preview => {
			let mut canvas = Canvas::new(width, height);
			let x = (width / 2).saturating_sub(u32::from(first.width()) / 2);
			let y = (height / 2).saturating_sub(u32::from(first.height()) / 2);
			canvas.blit(first, x, y, &lookup);
			Some(AnimationStep::preview(canvas))
		}
		_ => None,
	};

	let steps = direction
		.frames()
		.iter()
		.zip(layout.placements())
		.map(|(frame, placement)| {
			AnimationStep::new(Canvas::from_frame(frame, &lookup), placement.x, placement.y, delay)
		})
		.collect();

	Ok(Animation::new(Some(direction.orientation()), width, height, options.loop_count, preview, steps))
}
