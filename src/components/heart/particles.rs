//! Trail particles that travel along the heart curve.
//!
//! The pool is allocated once. A particle whose lifetime runs out is
//! re-randomized in place and starts a fresh trail, so the swarm keeps
//! regenerating without any per-frame allocation and without the particles
//! ever falling into step with each other.

use std::collections::VecDeque;

use fastrand::Rng;

use super::curve::HeartGeometry;
use super::theme::{Hsla, ParticleStyle, sample, sample_angle};

/// Fade in over the first tenth of life, out over the last tenth.
pub fn fade_factor(life_ratio: f64) -> f64 {
	if life_ratio < 0.1 {
		life_ratio * 10.0
	} else if life_ratio > 0.9 {
		(1.0 - life_ratio) * 10.0
	} else {
		1.0
	}
}

/// One quadratic curve segment of a smoothed trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
	pub cx: f64,
	pub cy: f64,
	pub x: f64,
	pub y: f64,
}

/// A trail smoothed through midpoints, ready to be stroked.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailPath {
	/// Oldest trail point; the path starts here.
	pub start: (f64, f64),
	/// Newest trail point; the gradient runs from `start` to `end`.
	pub end: (f64, f64),
	pub segments: Vec<QuadSegment>,
}

impl TrailPath {
	/// Builds the smoothed path. Each interior point becomes the control of a
	/// segment that ends halfway to the next point, which rounds every joint.
	/// The last point closes the path with a degenerate segment.
	pub fn smooth(points: &VecDeque<(f64, f64)>) -> Option<Self> {
		if points.len() < 2 {
			return None;
		}
		let start = points[0];
		let end = points[points.len() - 1];

		let mut segments = Vec::with_capacity(points.len() - 1);
		for (&(x0, y0), &(x1, y1)) in points.iter().zip(points.iter().skip(1)).skip(1) {
			segments.push(QuadSegment {
				cx: x0,
				cy: y0,
				x: (x0 + x1) / 2.0,
				y: (y0 + y1) / 2.0,
			});
		}
		segments.push(QuadSegment {
			cx: end.0,
			cy: end.1,
			x: end.0,
			y: end.1,
		});

		Some(Self {
			start,
			end,
			segments,
		})
	}
}

/// A single trail particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Curve parameter; grows without bound since the curve is periodic.
	pub t: f64,
	pub speed: f64,
	/// Frames lived so far.
	pub life: f64,
	pub max_life: f64,
	pub line_width: f64,
	pub opacity: f64,
	pub hue: f64,
	/// Recent head positions, oldest first.
	pub trail: VecDeque<(f64, f64)>,
	pub trail_cap: usize,
	/// Current head position.
	pub x: f64,
	pub y: f64,
	/// Fixed scatter away from the ideal curve.
	pub offset: (f64, f64),
	pub wiggle: f64,
	pub wiggle_speed: f64,
	pub wiggle_offset: f64,
}

impl Particle {
	pub fn new(rng: &mut Rng, style: &ParticleStyle) -> Self {
		let mut particle = Self {
			t: 0.0,
			speed: 0.0,
			life: 0.0,
			max_life: 0.0,
			line_width: 0.0,
			opacity: 0.0,
			hue: 0.0,
			trail: VecDeque::with_capacity(style.trail_length.end as usize + 1),
			trail_cap: 0,
			x: 0.0,
			y: 0.0,
			offset: (0.0, 0.0),
			wiggle: 0.0,
			wiggle_speed: 0.0,
			wiggle_offset: 0.0,
		};
		particle.reset(rng, style);
		particle
	}

	/// Re-randomizes every attribute and empties the trail.
	pub fn reset(&mut self, rng: &mut Rng, style: &ParticleStyle) {
		self.t = sample_angle(rng.f64());
		self.speed = sample(&style.speed, rng.f64());
		self.life = 0.0;
		self.max_life = sample(&style.max_life, rng.f64());
		self.line_width = sample(&style.line_width, rng.f64());
		self.opacity = sample(&style.opacity, rng.f64());
		self.hue = sample(&style.hue, rng.f64());
		self.trail.clear();
		self.trail_cap = sample(&style.trail_length, rng.f64()) as usize;
		self.x = 0.0;
		self.y = 0.0;
		self.offset = (
			(rng.f64() - 0.5) * style.offset_spread,
			(rng.f64() - 0.5) * style.offset_spread,
		);
		self.wiggle = sample(&style.wiggle, rng.f64());
		self.wiggle_speed = sample(&style.wiggle_speed, rng.f64());
		self.wiggle_offset = sample_angle(rng.f64());
	}

	/// Scatter plus the current wiggle, added on top of the curve position.
	pub fn displacement(&self) -> (f64, f64) {
		let phase = self.wiggle_offset + self.life * self.wiggle_speed;
		(
			self.offset.0 + phase.sin() * self.wiggle,
			self.offset.1 + phase.cos() * self.wiggle,
		)
	}

	/// Advances one frame. Returns `false` when the particle expired and was
	/// reset instead of moving.
	pub fn update(&mut self, geometry: &HeartGeometry, rng: &mut Rng, style: &ParticleStyle) -> bool {
		self.life += 1.0;
		if self.life > self.max_life {
			self.reset(rng, style);
			return false;
		}

		self.t += self.speed;
		let (x, y) = geometry.position(self.t, self.displacement());
		self.x = x;
		self.y = y;

		self.trail.push_back((x, y));
		if self.trail.len() > self.trail_cap {
			self.trail.pop_front();
		}
		true
	}

	pub fn fade(&self) -> f64 {
		fade_factor(self.life / self.max_life)
	}

	/// Gradient stops along the trail: transparent, lit, transparent.
	pub fn trail_stops(&self, style: &ParticleStyle) -> [(f64, Hsla); 3] {
		let edge = Hsla::new(self.hue, style.trail_saturation, style.trail_edge_lightness, 0.0);
		[
			(0.0, edge),
			(
				0.5,
				Hsla::new(
					self.hue,
					style.trail_saturation,
					style.trail_lightness,
					self.opacity * self.fade(),
				),
			),
			(1.0, edge),
		]
	}

	pub fn head_color(&self, style: &ParticleStyle) -> Hsla {
		Hsla::new(
			self.hue,
			style.trail_saturation,
			style.head_lightness,
			style.head_alpha * self.fade(),
		)
	}

	pub fn head_radius(&self, style: &ParticleStyle) -> f64 {
		self.line_width * style.head_radius
	}
}

/// Fixed-size pool of trail particles.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	style: ParticleStyle,
	rng: Rng,
}

impl ParticleField {
	/// Fills the pool, starting each particle at a random point in its life so
	/// the swarm does not pulse in unison.
	pub fn new(style: ParticleStyle, mut rng: Rng) -> Self {
		let particles = (0..style.count)
			.map(|_| {
				let mut p = Particle::new(&mut rng, &style);
				p.life = (rng.f64() * p.max_life).floor();
				p
			})
			.collect();

		Self {
			particles,
			style,
			rng,
		}
	}

	pub fn style(&self) -> &ParticleStyle {
		&self.style
	}

	/// Advances every particle by one frame.
	pub fn update(&mut self, geometry: &HeartGeometry) {
		for p in &mut self.particles {
			p.update(geometry, &mut self.rng, &self.style);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::heart::theme::Theme;

	fn field(seed: u64) -> (ParticleField, HeartGeometry) {
		let theme = Theme::default();
		let geometry = HeartGeometry::from_surface(1280.0, 720.0, theme.heart_scale);
		(ParticleField::new(theme.particles, Rng::with_seed(seed)), geometry)
	}

	#[test]
	fn fade_ramps_and_holds() {
		assert_eq!(fade_factor(0.0), 0.0);
		assert!((fade_factor(0.05) - 0.5).abs() < 1e-12);
		assert_eq!(fade_factor(0.1), 1.0);
		assert_eq!(fade_factor(0.5), 1.0);
		assert_eq!(fade_factor(0.9), 1.0);
		assert!((fade_factor(0.95) - 0.5).abs() < 1e-9);
		assert!(fade_factor(1.0).abs() < 1e-12);
	}

	#[test]
	fn fade_is_continuous_at_the_knees() {
		let eps = 1e-9;
		assert!((fade_factor(0.1 - eps) - 1.0).abs() < 1e-6);
		assert!((fade_factor(0.9 + eps) - 1.0).abs() < 1e-6);
	}

	#[test]
	fn pool_starts_desynchronized() {
		let (field, _) = field(7);
		assert_eq!(field.particles.len(), 10);
		for p in &field.particles {
			assert!(p.life >= 0.0 && p.life < p.max_life);
			assert_eq!(p.life, p.life.floor());
			assert!(p.trail.is_empty());
		}
	}

	#[test]
	fn reset_stays_within_style_bounds() {
		let style = Theme::default().particles;
		let mut rng = Rng::with_seed(42);
		for _ in 0..500 {
			let p = Particle::new(&mut rng, &style);
			assert!(style.speed.contains(&p.speed));
			assert!(style.max_life.contains(&p.max_life));
			assert!(style.hue.contains(&p.hue));
			assert!((20..50).contains(&p.trail_cap));
			assert!(p.offset.0.abs() <= 10.0 && p.offset.1.abs() <= 10.0);
			assert!((0.0..std::f64::consts::TAU).contains(&p.t));
		}
	}

	#[test]
	fn invariants_hold_over_many_frames() {
		let (mut field, geometry) = field(1);
		for _ in 0..2_000 {
			field.update(&geometry);
			for p in &field.particles {
				assert!(p.life >= 0.0 && p.life <= p.max_life);
				assert!(p.trail.len() <= p.trail_cap);
			}
		}
	}

	#[test]
	fn expiry_resets_in_place() {
		let style = Theme::default().particles;
		let geometry = HeartGeometry::from_surface(800.0, 600.0, 0.4);
		let mut rng = Rng::with_seed(3);
		let mut p = Particle::new(&mut rng, &style);
		p.life = p.max_life.floor();
		while p.update(&geometry, &mut rng, &style) {}

		assert_eq!(p.life, 0.0);
		assert!(p.life < p.max_life);
		assert!(p.trail.is_empty());

		assert!(p.update(&geometry, &mut rng, &style));
		assert_eq!(p.trail.len(), 1);
	}

	#[test]
	fn trail_evicts_oldest_first() {
		let style = Theme::default().particles;
		let geometry = HeartGeometry::from_surface(800.0, 600.0, 0.4);
		let mut rng = Rng::with_seed(9);
		let mut p = Particle::new(&mut rng, &style);
		p.max_life = 10_000.0;

		let mut heads = Vec::new();
		for _ in 0..p.trail_cap + 5 {
			assert!(p.update(&geometry, &mut rng, &style));
			heads.push((p.x, p.y));
		}
		assert_eq!(p.trail.len(), p.trail_cap);
		let expected: Vec<_> = heads[heads.len() - p.trail_cap..].to_vec();
		assert_eq!(p.trail.iter().copied().collect::<Vec<_>>(), expected);
		assert_eq!(p.trail.back(), Some(&(p.x, p.y)));
	}

	#[test]
	fn t_advances_by_speed() {
		let style = Theme::default().particles;
		let geometry = HeartGeometry::from_surface(800.0, 600.0, 0.4);
		let mut rng = Rng::with_seed(11);
		let mut p = Particle::new(&mut rng, &style);
		let t0 = p.t;
		p.update(&geometry, &mut rng, &style);
		p.update(&geometry, &mut rng, &style);
		assert!((p.t - (t0 + 2.0 * p.speed)).abs() < 1e-12);
	}

	#[test]
	fn head_sits_near_the_curve() {
		let style = Theme::default().particles;
		let geometry = HeartGeometry::from_surface(800.0, 600.0, 0.4);
		let mut rng = Rng::with_seed(5);
		let mut p = Particle::new(&mut rng, &style);
		p.update(&geometry, &mut rng, &style);
		let (cx, cy) = geometry.position(p.t, (0.0, 0.0));
		// Scatter is at most 10 per axis, wiggle at most 2.
		assert!((p.x - cx).abs() <= 12.0);
		assert!((p.y - cy).abs() <= 12.0);
	}

	#[test]
	fn smoothing_needs_two_points() {
		let mut points = VecDeque::new();
		assert!(TrailPath::smooth(&points).is_none());
		points.push_back((1.0, 1.0));
		assert!(TrailPath::smooth(&points).is_none());
	}

	#[test]
	fn smoothing_uses_midpoints() {
		let points: VecDeque<_> = [(0.0, 0.0), (2.0, 0.0), (4.0, 2.0), (6.0, 2.0)].into();
		let path = TrailPath::smooth(&points).unwrap();
		assert_eq!(path.start, (0.0, 0.0));
		assert_eq!(path.end, (6.0, 2.0));
		assert_eq!(
			path.segments,
			vec![
				QuadSegment { cx: 2.0, cy: 0.0, x: 3.0, y: 1.0 },
				QuadSegment { cx: 4.0, cy: 2.0, x: 5.0, y: 2.0 },
				QuadSegment { cx: 6.0, cy: 2.0, x: 6.0, y: 2.0 },
			]
		);
	}

	#[test]
	fn two_points_give_one_closing_segment() {
		let points: VecDeque<_> = [(0.0, 0.0), (1.0, 1.0)].into();
		let path = TrailPath::smooth(&points).unwrap();
		assert_eq!(path.segments, vec![QuadSegment { cx: 1.0, cy: 1.0, x: 1.0, y: 1.0 }]);
	}

	#[test]
	fn colors_follow_fade() {
		let style = Theme::default().particles;
		let mut rng = Rng::with_seed(21);
		let mut p = Particle::new(&mut rng, &style);
		p.life = p.max_life * 0.05;

		let stops = p.trail_stops(&style);
		assert_eq!(stops[0].1.a, 0.0);
		assert_eq!(stops[2].1.a, 0.0);
		assert!((stops[1].1.a - p.opacity * 0.5).abs() < 1e-9);
		assert!((p.head_color(&style).a - 0.15).abs() < 1e-9);
		assert_eq!(p.head_radius(&style), p.line_width * 2.0);
	}
}
