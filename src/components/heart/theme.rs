//! Visual constants for the heart effect.
//!
//! Every tunable number of the animation lives here, grouped by the layer it
//! belongs to. Nothing is read at runtime; `Theme::default()` is the effect.

use std::f64::consts::TAU;
use std::ops::Range;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// HSLA color, used for the per-particle hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	/// Hue in degrees.
	pub h: f64,
	/// Saturation in percent.
	pub s: f64,
	/// Lightness in percent.
	pub l: f64,
	pub a: f64,
}

impl Hsla {
	pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
		Self { h, s, l, a }
	}

	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// Linear map of a unit random sample onto `range`.
pub fn sample(range: &Range<f64>, r: f64) -> f64 {
	range.start + r * (range.end - range.start)
}

/// Per-particle randomization bounds.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Pool size
	pub count: usize,
	/// Curve parameter advance per frame
	pub speed: Range<f64>,
	/// Lifetime budget in frames
	pub max_life: Range<f64>,
	pub line_width: Range<f64>,
	pub opacity: Range<f64>,
	/// Hue in degrees (wraps past 360 into the reds)
	pub hue: Range<f64>,
	/// Trail cap in points; the fractional part is dropped
	pub trail_length: Range<f64>,
	/// Total width of the positional scatter around the curve
	pub offset_spread: f64,
	pub wiggle: Range<f64>,
	pub wiggle_speed: Range<f64>,
	/// Saturation/lightness of the trail body
	pub trail_saturation: f64,
	pub trail_lightness: f64,
	/// Lightness of the transparent trail ends
	pub trail_edge_lightness: f64,
	pub head_lightness: f64,
	/// Head glow alpha before fading
	pub head_alpha: f64,
	/// Head radius as a multiple of the line width
	pub head_radius: f64,
}

/// Full-surface rectangle that slowly buries previous frames.
#[derive(Clone, Debug)]
pub struct FadeStyle {
	pub color: Color,
}

/// Radial glow centered on the heart.
#[derive(Clone, Debug)]
pub struct GlowStyle {
	/// Gradient radius as a fraction of the heart size
	pub radius: f64,
	/// `(offset, color)` gradient stops
	pub stops: Vec<(f64, Color)>,
}

/// Pulsing outline drawn over everything else.
#[derive(Clone, Debug)]
pub struct OutlineStyle {
	/// Outline size as a multiple of the heart size
	pub scale: f64,
	/// Angular sampling step
	pub step: f64,
	pub color: Color,
	pub line_width: f64,
	/// Pulse is `sin(seconds) * amplitude + base`
	pub pulse_amplitude: f64,
	pub pulse_base: f64,
}

/// Balloon spawning cadence and randomization.
#[derive(Clone, Debug)]
pub struct BalloonStyle {
	pub interval_ms: u32,
	/// Delay before a balloon is removed, regardless of its animation
	pub lifetime_ms: u32,
	/// Horizontal start in percent of the container width
	pub left_percent: Range<f64>,
	/// Fall animation duration in seconds
	pub duration_secs: Range<f64>,
	/// Start offset below the container, in pixels
	pub bottom_px: f64,
	pub class: &'static str,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub particles: ParticleStyle,
	pub fade: FadeStyle,
	pub glow: GlowStyle,
	pub outline: OutlineStyle,
	pub balloons: BalloonStyle,
	/// Heart size as a fraction of the smaller surface dimension
	pub heart_scale: f64,
}

impl Theme {
	/// Crimson heart on black.
	pub fn crimson() -> Self {
		let glow = Color::rgba(255, 0, 50, 0.3);
		Self {
			particles: ParticleStyle {
				count: 10,
				speed: 0.003..0.010,
				max_life: 100.0..250.0,
				line_width: 0.5..2.5,
				opacity: 0.2..0.7,
				hue: 350.0..370.0,
				trail_length: 20.0..50.0,
				offset_spread: 20.0,
				wiggle: 0.0..2.0,
				wiggle_speed: 0.01..0.04,
				trail_saturation: 100.0,
				trail_lightness: 60.0,
				trail_edge_lightness: 50.0,
				head_lightness: 70.0,
				head_alpha: 0.3,
				head_radius: 2.0,
			},
			fade: FadeStyle {
				color: Color::rgba(0, 0, 0, 0.03),
			},
			glow: GlowStyle {
				radius: 0.6,
				stops: vec![
					(0.0, glow),
					(0.6, glow.with_alpha(0.1)),
					(1.0, glow.with_alpha(0.0)),
				],
			},
			outline: OutlineStyle {
				scale: 1.05,
				step: 0.01,
				color: Color::rgba(255, 0, 30, 0.2),
				line_width: 2.0,
				pulse_amplitude: 0.1,
				pulse_base: 0.9,
			},
			balloons: BalloonStyle {
				interval_ms: 300,
				lifetime_ms: 10_000,
				left_percent: 0.0..100.0,
				duration_secs: 5.0..9.0,
				bottom_px: -50.0,
				class: "balloon",
			},
			heart_scale: 0.4,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::crimson()
	}
}

/// Uniform angle in `[0, 2π)`.
pub fn sample_angle(r: f64) -> f64 {
	r * TAU
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_maps_unit_interval_onto_range() {
		let range = 5.0..9.0;
		assert_eq!(sample(&range, 0.0), 5.0);
		assert_eq!(sample(&range, 0.5), 7.0);
		assert!(sample(&range, 0.999_999) < 9.0);
	}

	#[test]
	fn css_serialization() {
		assert_eq!(Color::rgba(255, 0, 50, 0.3).to_css(), "rgba(255, 0, 50, 0.3)");
		assert_eq!(Hsla::new(355.5, 100.0, 60.0, 0.25).to_css(), "hsla(355.5, 100%, 60%, 0.25)");
	}

	#[test]
	fn glow_fades_to_transparent() {
		let theme = Theme::default();
		let last = theme.glow.stops.last().map(|(offset, c)| (*offset, c.a));
		assert_eq!(last, Some((1.0, 0.0)));
		assert_eq!(theme.glow.stops[0].1.a, 0.3);
	}

	#[test]
	fn pulse_constants_bound_the_scale() {
		let o = Theme::default().outline;
		assert!((o.pulse_base - o.pulse_amplitude - 0.8).abs() < 1e-12);
		assert!((o.pulse_base + o.pulse_amplitude - 1.0).abs() < 1e-12);
	}
}
