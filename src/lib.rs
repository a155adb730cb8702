//! heart-glow: an animated particle heart for the browser.
//!
//! This crate provides a WASM app that traces a heart shape with fading
//! particle trails, overlays a pulsing glow and outline, and lets balloons
//! float across the page.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::heart::{BalloonLayer, HeartCanvas, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("heart-glow: logging initialized");
}

/// Main application component.
/// Stacks the balloon layer over the full-window heart canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Heart" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="heart-stage">
			<HeartCanvas />
			<BalloonLayer />
		</div>
	}
}
