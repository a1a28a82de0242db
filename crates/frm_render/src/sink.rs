//! Animation output sinks.
//!
//! A sink receives an [`AnimationHeader`] followed by every step of an
//! animation, then is closed. [`ApngSink`] streams the sequence as an animated
//! PNG; other encoders can be plugged in by implementing [`AnimationSink`].

use std::{fs::File, io::BufWriter, io::Write, path::Path};

use log::debug;

use crate::{
	Animation, Canvas, RenderError,
	anim::{AnimationHeader, AnimationStep, BlendOp, DisposeOp},
};

/// Consumer of an animation sequence.
///
/// Calls must happen in order: `open` once, `append_frame` once per frame
/// announced in the header, then `close`.
pub trait AnimationSink {
	/// Starts a new animation.
	fn open(&mut self, header: &AnimationHeader) -> Result<(), RenderError>;

	/// Appends the next frame.
	fn append_frame(&mut self, step: &AnimationStep) -> Result<(), RenderError>;

	/// Finishes the animation and flushes all output.
	fn close(&mut self) -> Result<(), RenderError>;
}

enum State<W: Write> {
	Ready(W),
	Writing {
		writer: png::Writer<W>,
		header: AnimationHeader,
		frames_written: u32,
	},
	Closed,
}

/// Animated PNG encoder backed by the `png` crate.
pub struct ApngSink<W: Write> {
	state: State<W>,
}

impl<W: Write> ApngSink<W> {
	/// Creates a sink writing to `output`.
	pub fn new(output: W) -> Self {
		Self {
			state: State::Ready(output),
		}
	}
}

impl<W: Write> AnimationSink for ApngSink<W> {
	fn open(&mut self, header: &AnimationHeader) -> Result<(), RenderError> {
		let output = match std::mem::replace(&mut self.state, State::Closed) {
			State::Ready(output) => output,
			other => {
				self.state = other;
				return Err(RenderError::SinkState("open called twice"));
			}
		};

		let animated_frames = header.frame_count.saturating_sub(u32::from(header.first_frame_is_preview));
		if animated_frames == 0 {
			return Err(RenderError::EmptyFrameSequence);
		}

		let mut encoder = png::Encoder::new(output, header.width, header.height);
		encoder.set_color(png::ColorType::Rgba);
		encoder.set_depth(png::BitDepth::Eight);
		encoder.set_animated(animated_frames, header.loop_count)?;
		if header.first_frame_is_preview {
			encoder.set_sep_def_img(true)?;
		}

		debug!(
			"apng {}x{} frames:{} loop:{} preview:{}",
			header.width,
			header.height,
			animated_frames,
			header.loop_count,
			header.first_frame_is_preview
		);

		self.state = State::Writing {
			writer: encoder.write_header()?,
			header: *header,
			frames_written: 0,
		};
		Ok(())
	}

	fn append_frame(&mut self, step: &AnimationStep) -> Result<(), RenderError> {
		let State::Writing {
			writer,
			header,
			frames_written,
		} = &mut self.state
		else {
			return Err(RenderError::SinkState("append_frame called outside open/close"));
		};

		if *frames_written >= header.frame_count {
			return Err(RenderError::TooManyFrames {
				expected: header.frame_count,
				actual: *frames_written + 1,
			});
		}

		if *frames_written == 0 && header.first_frame_is_preview {
			// the default image is not part of the animation and has no frame control
			let canvas = full_size(step, header);
			writer.write_image_data(canvas.as_raw())?;
			*frames_written += 1;
			return Ok(());
		}

		// the first animation frame must cover the whole canvas
		let first_animated = *frames_written == u32::from(header.first_frame_is_preview);
		let expanded;
		let (canvas, x, y) = if first_animated && !covers(step, header) {
			expanded = full_size(step, header);
			(&expanded, 0, 0)
		} else {
			(&step.canvas, step.x, step.y)
		};

		writer.reset_frame_position()?;
		writer.set_frame_dimension(canvas.width(), canvas.height())?;
		writer.set_frame_position(x, y)?;
		writer.set_frame_delay(step.delay.numerator, step.delay.denominator)?;
		writer.set_dispose_op(match step.dispose {
			DisposeOp::None => png::DisposeOp::None,
			DisposeOp::Background => png::DisposeOp::Background,
			DisposeOp::Previous => png::DisposeOp::Previous,
		})?;
		writer.set_blend_op(match step.blend {
			BlendOp::Source => png::BlendOp::Source,
			BlendOp::Over => png::BlendOp::Over,
		})?;
		writer.write_image_data(canvas.as_raw())?;

		*frames_written += 1;
		Ok(())
	}

	fn close(&mut self) -> Result<(), RenderError> {
		match std::mem::replace(&mut self.state, State::Closed) {
			State::Writing {
				writer,
				..
			} => {
				writer.finish()?;
				Ok(())
			}
			State::Ready(output) => {
				self.state = State::Ready(output);
				Err(RenderError::SinkState("close called before open"))
			}
			State::Closed => Err(RenderError::SinkState("close called twice")),
		}
	}
}

fn covers(step: &AnimationStep, header: &AnimationHeader) -> bool {
	step.x == 0 && step.y == 0 && step.canvas.width() == header.width && step.canvas.height() == header.height
}

fn full_size(step: &AnimationStep, header: &AnimationHeader) -> Canvas {
	if covers(step, header) {
		step.canvas.clone()
	} else {
		step.canvas.expanded(header.width, header.height, step.x, step.y)
	}
}

impl Animation {
	/// Encodes the animation as an APNG into `writer`.
	///
	/// # Errors
	///
	/// Returns an error if encoding or writing fails.
	pub fn write_apng<W: Write>(&self, writer: W) -> Result<(), RenderError> {
		self.write_to(&mut ApngSink::new(writer))
	}

	/// Saves the animation as an APNG file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be created or encoding fails.
	pub fn save_apng(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
		let mut output = BufWriter::new(File::create(path)?);
		self.write_apng(&mut output)?;
		output.flush()?;
		Ok(())
	}
}
