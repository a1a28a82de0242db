use frm_types::file::{Color, FrmFile, Orientation, frm::constants::DIRECTION_SLOTS};
use log::{debug, trace};
use serde::Serialize;

use crate::{
	Animation, Canvas, RenderError, RenderOptions,
	anim::{AnimationStep, Delay},
	layout::{DirectionLayout, Placement, layout_direction},
};

/// Two-column arrangement of all six directions on one canvas.
///
/// East-side directions (NE, E, SE) fill the right column top to bottom and
/// their mirrors (NW, W, SW) sit beside them in the left column, so that each
/// row holds a facing and its mirror image. Left cells are right-aligned
/// against the center gutter and every cell is bottom-aligned within its row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackedLayout {
	directions: Vec<DirectionLayout>,
	origins: Vec<Placement>,
	width: u32,
	height: u32,
}

impl PackedLayout {
	/// Lays out the six directions of `file` with `spacing` pixels between cells.
	///
	/// # Errors
	///
	/// - [`RenderError::InvalidDirectionCount`] unless the file has exactly six directions
	/// - [`RenderError::EmptyFrameSequence`] if a direction has no frames
	/// - [`RenderError::LayoutOverflow`] if the canvas size does not fit in a `u32`
	pub fn new(file: &FrmFile, spacing: u32) -> Result<Self, RenderError> {
		if file.directions().len() != DIRECTION_SLOTS {
			return Err(RenderError::InvalidDirectionCount {
				expected: DIRECTION_SLOTS,
				actual: file.directions().len(),
			});
		}

		let directions = file
			.directions()
			.iter()
			.map(|direction| layout_direction(direction.frames()))
			.collect::<Result<Vec<_>, _>>()?;

		let size = |orientation: Orientation| {
			let layout = &directions[orientation.index()];
			(layout.width(), layout.height())
		};

		// one row per east-side facing, paired with its mirror
		let rows: Vec<(Orientation, Orientation)> =
			Orientation::ALL.into_iter().filter(|o| o.is_east()).map(|east| (east.mirror(), east)).collect();

		let mut width = 0;
		let mut max_left = 0;
		let mut max_right = 0;
		let mut row_heights = Vec::with_capacity(rows.len());
		for &(left, right) in &rows {
			let ((left_width, left_height), (right_width, right_height)) = (size(left), size(right));
			width = width.max(left_width + right_width);
			max_left = max_left.max(left_width);
			max_right = max_right.max(right_width);
			row_heights.push(left_height.max(right_height));
		}

		let overflow = || RenderError::LayoutOverflow { spacing };
		let half = spacing / 2;
		let center_x = max_left.checked_add(half).ok_or_else(overflow)?;
		// the widest left cell and the widest right cell may come from different rows
		let spanned = center_x.checked_add(half).and_then(|x| x.checked_add(max_right)).ok_or_else(overflow)?;
		let width = width.checked_add(spacing).ok_or_else(overflow)?.max(spanned);
		let height = row_heights
			.iter()
			.try_fold(0u32, |sum, &h| sum.checked_add(h))
			.and_then(|sum| spacing.checked_mul(2).and_then(|gaps| sum.checked_add(gaps)))
			.ok_or_else(overflow)?;

		let mut origins = vec![Placement::default(); DIRECTION_SLOTS];
		let mut row_top = 0u32;
		for (row, &(left, right)) in rows.iter().enumerate() {
			let row_height = row_heights[row];
			for orientation in [left, right] {
				let (cell_width, cell_height) = size(orientation);
				// right column starts past the gutter, left cells end at it
				let x = if orientation.is_east() {
					center_x + half
				} else {
					center_x - half - cell_width
				};
				let origin = Placement::new(x, row_top + row_height - cell_height);
				trace!("packed {} row {} -> {},{}", orientation, row, origin.x, origin.y);
				origins[orientation.index()] = origin;
			}
			row_top = row_top.saturating_add(row_height + spacing);
		}

		debug!("packed canvas {width}x{height}, center {center_x}");

		Ok(Self {
			directions,
			origins,
			width,
			height,
		})
	}

	/// Layout of each direction, indexed like the file's directions.
	///
	/// The direction at position `i` is placed as [`Orientation`] `i`.
	#[inline]
	pub fn directions(&self) -> &[DirectionLayout] {
		&self.directions
	}

	/// Top-left corner of a direction's cell inside the packed canvas.
	pub fn origin(&self, orientation: Orientation) -> Placement {
		self.origins[orientation.index()]
	}

	/// Packed canvas width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Packed canvas height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.height
	}
}

/// Builds a single animation that shows all six directions side by side.
///
/// Every step is a full canvas drawn from scratch: frame `f` of each direction
/// at its cell origin plus its placement within the direction. The preview
/// shows frame 0 of each direction centered in its cell.
///
/// # Errors
///
/// - [`RenderError::InvalidDirectionCount`] unless the file has exactly six directions
/// - [`RenderError::EmptyFrameSequence`] if a direction has no frames
/// - [`RenderError::LayoutOverflow`] if the canvas size does not fit in a `u32`
pub fn compose_packed<L>(file: &FrmFile, lookup: L, options: &RenderOptions) -> Result<Animation, RenderError>
where
	L: Fn(u8) -> Color,
{
	let packed = PackedLayout::new(file, options.spacing)?;
	let delay = Delay::from_fps(file.frames_per_second());

	let preview = options.preview.then(|| {
		let mut canvas = Canvas::new(packed.width(), packed.height());
		for ((slot, direction), layout) in Orientation::ALL.into_iter().zip(file.directions()).zip(packed.directions()) {
			if let Some(first) = direction.frame(0) {
				let origin = packed.origin(slot);
				let x = (layout.width() / 2).saturating_sub(u32::from(first.width()) / 2);
				let y = (layout.height() / 2).saturating_sub(u32::from(first.height()) / 2);
				canvas.blit(first, origin.x + x, origin.y + y, &lookup);
			}
		}
		AnimationStep::preview(canvas)
	});

	let steps = (0..usize::from(file.frames_per_direction()))
		.map(|index| {
			let mut canvas = Canvas::new(packed.width(), packed.height());
			for ((slot, direction), layout) in Orientation::ALL.into_iter().zip(file.directions()).zip(packed.directions()) {
				let (Some(frame), Some(placement)) = (direction.frame(index), layout.placement(index)) else {
					continue;
				};
				let origin = packed.origin(slot);
				let clipped = canvas.blit(frame, origin.x + placement.x, origin.y + placement.y, &lookup);
				if clipped > 0 {
					debug!("packed frame {index} of {slot} clipped {clipped} pixels");
				}
			}
			AnimationStep::new(canvas, 0, 0, delay)
		})
		.collect();

	Ok(Animation::new(None, packed.width(), packed.height(), options.loop_count, preview, steps))
}
