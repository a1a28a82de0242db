use frm_rs::prelude::*;

use crate::{scratch_dir, walk_cycle};

fn palette_bytes() -> Vec<u8> {
	(0..=255u8).flat_map(|i| [i / 4, i / 8, i / 16]).collect()
}

#[test_log::test]
fn frm_survives_save_and_open() {
	let dir = scratch_dir("roundtrip");
	let path = dir.join("HMWALK.FRM");

	let original = walk_cycle(4, 2);
	original.save(&path).unwrap();
	let loaded = FrmFile::open(&path).unwrap();

	assert_eq!(loaded.frames_per_second(), 10);
	assert_eq!(loaded.action_frame(), 1);
	assert_eq!(loaded.directions().len(), 6);
	for (a, b) in original.directions().iter().zip(loaded.directions()) {
		assert_eq!(a.orientation(), b.orientation());
		assert_eq!(a.frames().len(), b.frames().len());
		for (fa, fb) in a.frames().iter().zip(b.frames()) {
			assert_eq!(fa.pixels(), fb.pixels());
			assert_eq!((fa.offset_x(), fa.offset_y()), (fb.offset_x(), fb.offset_y()));
		}
	}

	std::fs::remove_dir_all(&dir).unwrap();
}

#[test_log::test]
fn convert_with_every_generator() {
	let dir = scratch_dir("convert");
	let frm_path = dir.join("HMWALK.FRM");
	walk_cycle(3, 4).save(&frm_path).unwrap();

	let file = FrmFile::open(&frm_path).unwrap();
	let palette = Palette::from_bytes(&palette_bytes()).unwrap();
	let options = RenderOptions::default();

	let legacy = Generator::Legacy.render(&file, &palette, &options).unwrap().save(dir.join("legacy.png")).unwrap();
	assert_eq!(legacy.len(), 1);

	let anim = Generator::Anim.render(&file, &palette, &options).unwrap().save(dir.join("anim.png")).unwrap();
	assert_eq!(anim.len(), 6);
	assert!(anim.iter().all(|path| path.exists()));

	let packed =
		Generator::AnimPacked.render(&file, &palette, &options).unwrap().save(dir.join("packed.png")).unwrap();
	assert_eq!(packed, [dir.join("packed.png")]);

	for path in legacy.iter().chain(&anim).chain(&packed) {
		let data = std::fs::read(path).unwrap();
		assert!(data.starts_with(b"\x89PNG\r\n\x1a\n"), "{}", path.display());
	}
	for path in anim.iter().chain(&packed) {
		let data = std::fs::read(path).unwrap();
		assert!(data.windows(4).any(|w| w == b"acTL"), "{} is not animated", path.display());
	}

	std::fs::remove_dir_all(&dir).unwrap();
}

#[test_log::test]
fn single_direction_file_is_elided_on_reload() {
	let file = FrmFile::new(12, vec![Direction::new(Orientation::NorthEast, vec![Frame::filled(3, 3, 0, 0, 9).unwrap()])]).unwrap();
	let reloaded = FrmFile::from_bytes(&file.to_bytes().unwrap()).unwrap();

	assert_eq!(reloaded.directions().len(), 1);
	let result = Generator::AnimPacked.render(&reloaded, &Palette::grayscale(), &RenderOptions::default());
	assert!(matches!(result, Err(RenderError::InvalidDirectionCount { actual: 1, .. })));
}
