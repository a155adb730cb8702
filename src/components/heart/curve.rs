//! Heart curve geometry.
//!
//! The classic parametric heart:
//!
//! ```text
//! x(t) = 16 sin³(t)
//! y(t) = 13 cos(t) - 5 cos(2t) - 2 cos(3t) - cos(4t)
//! ```
//!
//! Raw curve values span roughly ±16 units, so positions are divided by 16
//! and multiplied by the heart size. The y axis is flipped to screen space.

use std::f64::consts::TAU;

use super::theme::OutlineStyle;

/// Raw (unscaled, y-up) point on the heart curve.
pub fn heart_point(t: f64) -> (f64, f64) {
	let x = 16.0 * t.sin().powi(3);
	let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
	(x, y)
}

/// Heart curve point scaled to `size` and flipped to screen orientation,
/// relative to the heart center.
pub fn heart_offset(t: f64, size: f64) -> (f64, f64) {
	let (x, y) = heart_point(t);
	(x * size / 16.0, -y * size / 16.0)
}

/// Outline pulse factor for a wall-clock time in seconds. Stays in `[0.8, 1.0]`
/// with the default outline style.
pub fn pulse_scale(time_secs: f64, style: &OutlineStyle) -> f64 {
	time_secs.sin() * style.pulse_amplitude + style.pulse_base
}

/// Where the heart sits on the surface.
///
/// Derived once from the initial surface dimensions and kept for the
/// lifetime of the scene; resizing the surface does not move it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartGeometry {
	pub center_x: f64,
	pub center_y: f64,
	/// Curve scale in pixels
	pub size: f64,
}

impl HeartGeometry {
	pub fn from_surface(width: f64, height: f64, heart_scale: f64) -> Self {
		Self {
			center_x: width / 2.0,
			center_y: height / 2.0,
			size: width.min(height) * heart_scale,
		}
	}

	/// Absolute screen position of the curve at `t`, plus an extra offset.
	pub fn position(&self, t: f64, (dx, dy): (f64, f64)) -> (f64, f64) {
		let (x, y) = heart_offset(t, self.size);
		(self.center_x + x + dx, self.center_y + y + dy)
	}

	/// Outline vertices, sampled at `style.step` over `[0, 2π)`.
	pub fn outline(&self, style: &OutlineStyle) -> Vec<(f64, f64)> {
		let size = self.size * style.scale;
		let steps = (TAU / style.step).ceil() as usize;
		(0..steps)
			.map(|i| i as f64 * style.step)
			.take_while(|t| *t < TAU)
			.map(|t| {
				let (x, y) = heart_offset(t, size);
				(self.center_x + x, self.center_y + y)
			})
			.collect()
	}
}
