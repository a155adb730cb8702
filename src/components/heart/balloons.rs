//! Decorative balloons drifting over the heart.
//!
//! Balloons are plain DOM elements whose motion comes entirely from the page
//! stylesheet. This module only tracks which balloons are alive; the view is
//! a projection of [`BalloonSpawner::live`].

use fastrand::Rng;

use super::theme::{BalloonStyle, sample};

/// A single live balloon.
#[derive(Clone, Debug, PartialEq)]
pub struct Balloon {
	pub id: u64,
	/// Horizontal start in percent of the container width.
	pub left_percent: f64,
	/// Fall animation duration in seconds.
	pub duration_secs: f64,
	/// Creation timestamp, milliseconds since the epoch.
	pub created_at_ms: f64,
}

impl Balloon {
	/// Inline style consumed by the `.balloon` animation.
	pub fn style(&self, style: &BalloonStyle) -> String {
		format!(
			"left: {}%; bottom: {}px; animation-duration: {}s;",
			self.left_percent, style.bottom_px, self.duration_secs
		)
	}

	/// When the balloon is due to be removed.
	pub fn removal_at_ms(&self, style: &BalloonStyle) -> f64 {
		self.created_at_ms + style.lifetime_ms as f64
	}
}

/// Creates balloons and forgets them again.
///
/// There is no cap on live balloons; the fixed removal delay against the
/// spawn interval bounds the set at roughly `lifetime / interval`.
#[derive(Debug)]
pub struct BalloonSpawner {
	style: BalloonStyle,
	live: Vec<Balloon>,
	next_id: u64,
	rng: Rng,
}

impl BalloonSpawner {
	pub fn new(style: BalloonStyle, rng: Rng) -> Self {
		Self {
			style,
			live: Vec::new(),
			next_id: 0,
			rng,
		}
	}

	pub fn style(&self) -> &BalloonStyle {
		&self.style
	}

	/// Creates one balloon at `now_ms` and returns a copy of it.
	pub fn spawn(&mut self, now_ms: f64) -> Balloon {
		let balloon = Balloon {
			id: self.next_id,
			left_percent: sample(&self.style.left_percent, self.rng.f64()),
			duration_secs: sample(&self.style.duration_secs, self.rng.f64()),
			created_at_ms: now_ms,
		};
		self.next_id += 1;
		self.live.push(balloon.clone());
		balloon
	}

	/// Drops a balloon. Returns `false` if it was already gone.
	pub fn remove(&mut self, id: u64) -> bool {
		let before = self.live.len();
		self.live.retain(|b| b.id != id);
		self.live.len() != before
	}

	/// Live balloons in creation order.
	pub fn live(&self) -> &[Balloon] {
		&self.live
	}
}
