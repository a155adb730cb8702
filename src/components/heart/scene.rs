//! Frame state shared by the update and draw passes.
//!
//! Everything the animation loop touches lives in one [`Scene`], owned by the
//! canvas component and handed to the renderer each frame.

use fastrand::Rng;

use super::curve::HeartGeometry;
use super::particles::ParticleField;
use super::theme::Theme;

/// Pixel size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
	pub width: f64,
	pub height: f64,
}

/// Particle pool, heart placement and surface bounds.
pub struct Scene {
	pub surface: SurfaceSize,
	pub geometry: HeartGeometry,
	pub field: ParticleField,
	pub theme: Theme,
}

impl Scene {
	pub fn new(width: f64, height: f64, theme: Theme, rng: Rng) -> Self {
		let geometry = HeartGeometry::from_surface(width, height, theme.heart_scale);
		let field = ParticleField::new(theme.particles.clone(), rng);
		Self {
			surface: SurfaceSize { width, height },
			geometry,
			field,
			theme,
		}
	}

	/// Tracks the new surface bounds. The heart keeps the center and size it
	/// was created with.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.surface = SurfaceSize { width, height };
	}

	/// Advances the particle field by one frame.
	pub fn tick(&mut self) {
		self.field.update(&self.geometry);
	}
}
