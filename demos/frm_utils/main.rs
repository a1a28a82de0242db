//! FRM conversion utility.
//!
//! Provides three subcommands:
//! - `convert`: render a `.FRM` sprite to a PNG grid or animated PNGs
//! - `info`: print header fields and per-direction statistics
//! - `layout`: print the computed frame placements of every direction

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use frm_rs::prelude::*;
use log::{info, warn};

fn main() -> Result<()> {
	let cli = Cli::parse();

	let default_level = if cli.verbose {
		"debug"
	} else {
		"info"
	};
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_level));

	match cli.command {
		Command::Convert(args) => run_convert(args),
		Command::Info(args) => run_info(&args),
		Command::Layout(args) => run_layout(&args),
	}
}

#[derive(Parser)]
#[command(name = "frm_utils")]
#[command(author = "frm-rs project")]
#[command(version)]
#[command(about = "Convert and inspect FRM sprite animations", long_about = None)]
struct Cli {
	/// Print per-frame layout and drawing diagnostics
	#[arg(short, long, global = true, default_value_t = false)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Render a sprite to PNG or APNG
	Convert(ConvertArgs),
	/// Show header information of a sprite
	Info(FileArgs),
	/// Show computed frame placements of a sprite
	Layout(LayoutArgs),
}

#[derive(Args)]
struct ConvertArgs {
	/// Path to the .FRM file
	#[arg(value_name = "FRM")]
	file: PathBuf,

	/// Palette file; defaults to a .PAL next to the sprite, then COLOR.PAL
	#[arg(short, long, value_name = "PAL")]
	palette: Option<PathBuf>,

	/// Output strategy: legacy, anim or anim-packed
	#[arg(short, long, value_name = "NAME")]
	generator: Option<Generator>,

	/// Output file; defaults to the sprite path with a .png extension
	#[arg(short, long, value_name = "FILE")]
	output: Option<PathBuf>,

	/// Brightness multiplier applied to the palette (2-4)
	#[arg(short = 'm', long, value_name = "N")]
	rgb_multiplier: Option<u8>,

	/// Gap in pixels between cells of the packed layout
	#[arg(long, value_name = "PIXELS")]
	spacing: Option<u32>,

	/// Number of animation plays, 0 loops forever
	#[arg(long, value_name = "COUNT")]
	loop_count: Option<u32>,

	/// Do not emit a still preview frame ahead of animations
	#[arg(long, default_value_t = false)]
	no_preview: bool,

	/// TOML file with render options; FRM_* environment variables override it
	#[arg(short, long, value_name = "FILE", env = "FRM_CONFIG")]
	config: Option<PathBuf>,
}

#[derive(Args)]
struct FileArgs {
	/// Path to the .FRM file
	#[arg(value_name = "FRM")]
	file: PathBuf,
}

#[derive(Args)]
struct LayoutArgs {
	/// Path to the .FRM file
	#[arg(value_name = "FRM")]
	file: PathBuf,

	/// Print machine-readable JSON instead of a table
	#[arg(long, default_value_t = false)]
	json: bool,

	/// Also compute the packed six-direction layout with this spacing
	#[arg(long, value_name = "PIXELS")]
	packed: Option<u32>,
}

fn open_sprite(path: &Path) -> Result<FrmFile> {
	FrmFile::open(path).with_context(|| format!("Failed to read sprite {}", path.display()))
}

fn run_convert(args: ConvertArgs) -> Result<()> {
	let mut options = RenderOptions::load(args.config.as_deref()).context("Failed to load render options")?;
	if let Some(generator) = args.generator {
		options.generator = generator;
	}
	if let Some(multiplier) = args.rgb_multiplier {
		options.rgb_multiplier = multiplier;
	}
	if let Some(spacing) = args.spacing {
		options.spacing = spacing;
	}
	if let Some(loop_count) = args.loop_count {
		options.loop_count = loop_count;
	}
	if args.no_preview {
		options.preview = false;
	}

	let file = open_sprite(&args.file)?;
	let palette = load_palette(&args.file, args.palette.as_deref())?;

	let generator = options.generator.resolve(&file);
	if generator != options.generator {
		warn!("{} has a single direction, using {} output", args.file.display(), generator);
	}

	let output = args.output.unwrap_or_else(|| args.file.with_extension("png"));
	info!("{} -> {} ({})", args.file.display(), output.display(), generator);

	let written = generator
		.render(&file, &palette, &options)
		.and_then(|rendered| rendered.save(&output))
		.with_context(|| format!("Failed to convert {}", args.file.display()))?;

	for path in written {
		println!("{}", path.display());
	}
	Ok(())
}

fn load_palette(sprite: &Path, explicit: Option<&Path>) -> Result<Palette> {
	if let Some(path) = explicit {
		return Palette::from_file(path).with_context(|| format!("Failed to read palette {}", path.display()));
	}

	let candidates = [sprite.with_extension("PAL"), sprite.with_extension("pal"), sprite.with_file_name("COLOR.PAL")];
	for candidate in candidates {
		if candidate.is_file() {
			info!("using palette {}", candidate.display());
			return Palette::from_file(&candidate)
				.with_context(|| format!("Failed to read palette {}", candidate.display()));
		}
	}

	warn!("no palette found next to {}, using grayscale", sprite.display());
	Ok(Palette::grayscale())
}

fn run_info(args: &FileArgs) -> Result<()> {
	let file = open_sprite(&args.file)?;

	println!("File: {}", args.file.display());
	println!("{file}");
	println!("Action frame: {}", file.action_frame());
	println!("Max frame size: {}x{}", file.max_frame_width(), file.max_frame_height());
	for direction in file.directions() {
		println!(
			"  [{}] shift {},{} frames {} max {}x{}",
			direction.orientation().abbreviation(),
			direction.shift_x(),
			direction.shift_y(),
			direction.frames().len(),
			direction.max_frame_width(),
			direction.max_frame_height()
		);
	}
	Ok(())
}

fn run_layout(args: &LayoutArgs) -> Result<()> {
	let file = open_sprite(&args.file)?;

	let mut layouts = Vec::with_capacity(file.directions().len());
	for direction in file.directions() {
		let layout = layout_direction(direction.frames())
			.with_context(|| format!("Failed to lay out direction {}", direction.orientation()))?;
		layouts.push((direction.orientation(), layout));
	}

	let packed = match args.packed {
		Some(spacing) => {
			if file.directions().len() != 6 {
				bail!("Packed layout needs 6 directions, {} has {}", args.file.display(), file.directions().len());
			}
			Some(frm_rs::frm_render::compose::PackedLayout::new(&file, spacing)?)
		}
		None => None,
	};

	if args.json {
		let directions: Vec<_> = layouts
			.iter()
			.map(|(orientation, layout)| {
				serde_json::json!({
					"orientation": orientation,
					"width": layout.width(),
					"height": layout.height(),
					"placements": layout.placements(),
				})
			})
			.collect();
		let document = serde_json::json!({
			"frames_per_second": file.frames_per_second(),
			"frames_per_direction": file.frames_per_direction(),
			"directions": directions,
			"packed": packed,
		});
		println!("{}", serde_json::to_string_pretty(&document)?);
		return Ok(());
	}

	for (orientation, layout) in &layouts {
		println!("{} canvas {}x{}", orientation.abbreviation(), layout.width(), layout.height());
		for (index, placement) in layout.placements().iter().enumerate() {
			println!("  frame {:3}: {:4},{:4}", index, placement.x, placement.y);
		}
	}
	if let Some(packed) = packed {
		println!("packed canvas {}x{}", packed.width(), packed.height());
		for orientation in Orientation::ALL {
			let origin = packed.origin(orientation);
			println!("  {}: {},{}", orientation.abbreviation(), origin.x, origin.y);
		}
	}
	Ok(())
}
