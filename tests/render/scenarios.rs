use frm_rs::prelude::*;

use crate::walk_cycle;

#[test_log::test]
fn legacy_grid_two_by_two() {
	let directions = [Orientation::NorthEast, Orientation::East]
		.into_iter()
		.map(|o| Direction::new(o, vec![Frame::filled(8, 8, 0, 0, 1).unwrap(), Frame::filled(8, 8, 0, 0, 2).unwrap()]))
		.collect();
	let file = FrmFile::new(10, directions).unwrap();

	let Rendered::Static(canvas) =
		Generator::Legacy.render(&file, &Palette::grayscale(), &RenderOptions::default()).unwrap()
	else {
		panic!("legacy output must be a still image");
	};
	assert_eq!((canvas.width(), canvas.height()), (16, 16));

	let palette = Palette::grayscale().with_multiplier(4).unwrap();
	assert_eq!(canvas.pixel(8, 8), Some(palette.get(2)));
	assert_eq!(canvas.pixel(7, 7), Some(palette.get(1)));
}

#[test_log::test]
fn offset_converter_scenario() {
	let frames = [Frame::filled(10, 10, 0, 0, 1).unwrap(), Frame::filled(10, 10, -8, 0, 1).unwrap()];
	let layout = layout_direction(&frames).unwrap();

	assert_eq!(layout.placements(), &[Placement::new(8, 0), Placement::new(0, 0)]);
	assert_eq!((layout.width(), layout.height()), (18, 10));
}

#[test_log::test]
fn packed_needs_six_directions() {
	for count in [5usize, 7] {
		let directions = (0..count)
			.map(|i| Direction::new(Orientation::ALL[i % 6], vec![Frame::filled(2, 2, 0, 0, 1).unwrap()]))
			.collect();
		let file = FrmFile::new(10, directions).unwrap();
		let result = compose_packed(&file, |i| Color::rgb(i, i, i), &RenderOptions::default());
		assert!(matches!(
			result,
			Err(RenderError::InvalidDirectionCount {
				expected: 6,
				..
			})
		));
	}

	assert!(compose_packed(&walk_cycle(3, 2), |i| Color::rgb(i, i, i), &RenderOptions::default()).is_ok());
}

#[test_log::test]
fn blit_clips_at_right_edge() {
	let mut canvas = Canvas::new(10, 4);
	let clipped = canvas.blit(&Frame::filled(4, 4, 0, 0, 3).unwrap(), canvas.width() - 2, 0, |i| Color::rgb(i, 0, 0));

	assert_eq!(clipped, 8);
	assert_eq!(canvas.pixel(9, 3), Some(Color::rgb(3, 0, 0)));
	assert_eq!(canvas.pixel(7, 0), Some(Color::transparent()));
}

#[test_log::test]
fn per_direction_animations_share_timing() {
	let file = walk_cycle(4, 3);
	let animations = compose_directions(&file, |i| Color::rgb(i, i, i), &RenderOptions::default()).unwrap();

	assert_eq!(animations.len(), 6);
	for animation in &animations {
		let header = animation.header();
		assert_eq!(header.frame_count, 5);
		assert!(header.first_frame_is_preview);
		// spot advances 3 pixels per frame; placements stay inside the canvas
		for step in animation.steps() {
			assert!(step.x + step.canvas.width() <= animation.width());
			assert!(step.y + step.canvas.height() <= animation.height());
			assert_eq!(step.delay.denominator, 5);
		}
	}
}
