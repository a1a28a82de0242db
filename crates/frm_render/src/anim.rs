//! In-memory animation sequences produced by the animated composers.

use frm_types::file::Orientation;

use crate::{Canvas, RenderError, sink::AnimationSink};

/// Frame display time as a fraction of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Delay {
	/// Numerator of the fraction
	pub numerator: u16,
	/// Denominator of the fraction
	pub denominator: u16,
}

impl Delay {
	/// Creates a new delay.
	pub const fn new(numerator: u16, denominator: u16) -> Self {
		Self {
			numerator,
			denominator,
		}
	}

	/// Step delay for a sprite played at `frames_per_second`.
	///
	/// The denominator is half the playback rate, matching how sprite
	/// animations were timed in game.
	pub const fn from_fps(frames_per_second: u16) -> Self {
		Self::new(1, frames_per_second / 2)
	}
}

/// What happens to a frame's region before the next frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisposeOp {
	/// Leave the region as it is
	#[default]
	None,
	/// Clear the region to transparent black
	Background,
	/// Restore the region to what it was before the frame
	Previous,
}

/// How a frame is combined with the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendOp {
	/// Overwrite the region, alpha included
	#[default]
	Source,
	/// Alpha-composite over the region
	Over,
}

/// Parameters announced to a sink before any frame is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHeader {
	/// Output width in pixels
	pub width: u32,
	/// Output height in pixels
	pub height: u32,
	/// Number of frames that will be appended, preview included
	pub frame_count: u32,
	/// Number of plays; 0 loops forever
	pub loop_count: u32,
	/// Whether the first appended frame is a still fallback outside the animation
	pub first_frame_is_preview: bool,
}

/// One frame of output, positioned inside the animation's canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationStep {
	/// Pixels of this step; may be smaller than the animation canvas
	pub canvas: Canvas,
	/// Horizontal position inside the animation canvas
	pub x: u32,
	/// Vertical position inside the animation canvas
	pub y: u32,
	/// Display time
	pub delay: Delay,
	/// Disposal applied after display
	pub dispose: DisposeOp,
	/// Blending applied when drawn
	pub blend: BlendOp,
}

impl AnimationStep {
	/// Creates a regular animation step.
	pub fn new(canvas: Canvas, x: u32, y: u32, delay: Delay) -> Self {
		Self {
			canvas,
			x,
			y,
			delay,
			dispose: DisposeOp::Background,
			blend: BlendOp::Source,
		}
	}

	/// Creates a full-canvas still image shown by viewers without animation support.
	pub fn preview(canvas: Canvas) -> Self {
		Self {
			canvas,
			x: 0,
			y: 0,
			delay: Delay::default(),
			dispose: DisposeOp::None,
			blend: BlendOp::Source,
		}
	}
}

/// Complete animation: canvas size, optional preview and timed steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
	orientation: Option<Orientation>,
	width: u32,
	height: u32,
	loop_count: u32,
	preview: Option<AnimationStep>,
	steps: Vec<AnimationStep>,
}

impl Animation {
	/// Creates an animation.
	///
	/// `orientation` names the direction the animation was built from; packed
	/// animations that show every direction use `None`.
	pub fn new(
		orientation: Option<Orientation>,
		width: u32,
		height: u32,
		loop_count: u32,
		preview: Option<AnimationStep>,
		steps: Vec<AnimationStep>,
	) -> Self {
		Self {
			orientation,
			width,
			height,
			loop_count,
			preview,
			steps,
		}
	}

	/// Direction this animation shows, if it shows a single one.
	#[inline]
	pub fn orientation(&self) -> Option<Orientation> {
		self.orientation
	}

	/// Canvas width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Canvas height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.height
	}

	/// The still fallback frame, if any.
	#[inline]
	pub fn preview(&self) -> Option<&AnimationStep> {
		self.preview.as_ref()
	}

	/// The animated steps in playback order.
	#[inline]
	pub fn steps(&self) -> &[AnimationStep] {
		&self.steps
	}

	/// Builds the header announced to sinks.
	pub fn header(&self) -> AnimationHeader {
		AnimationHeader {
			width: self.width,
			height: self.height,
			frame_count: self.steps.len() as u32 + u32::from(self.preview.is_some()),
			loop_count: self.loop_count,
			first_frame_is_preview: self.preview.is_some(),
		}
	}

	/// Streams the animation into `sink`: open, preview, steps, close.
	///
	/// # Errors
	///
	/// Propagates the first error reported by the sink.
	pub fn write_to<S: AnimationSink + ?Sized>(&self, sink: &mut S) -> Result<(), RenderError> {
		sink.open(&self.header())?;
		for step in self.preview.iter().chain(&self.steps) {
			sink.append_frame(step)?;
		}
		sink.close()
	}
}
