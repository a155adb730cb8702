//! Leptos components for the heart effect.
//!
//! `HeartCanvas` fills the viewport with a canvas and drives the scene from a
//! `requestAnimationFrame` loop. `BalloonLayer` spawns balloons on a fixed
//! interval, independent of the frame loop; the only thing the two share is
//! the viewport.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use fastrand::Rng;
use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::balloons::{Balloon, BalloonSpawner};
use super::error::SurfaceError;
use super::render;
use super::scene::Scene;
use super::theme::Theme;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn window() -> Result<Window, SurfaceError> {
	web_sys::window().ok_or(SurfaceError::NoWindow)
}

fn viewport_size(window: &Window) -> Result<(f64, f64), SurfaceError> {
	let width = window.inner_width().ok().and_then(|v| v.as_f64());
	let height = window.inner_height().ok().and_then(|v| v.as_f64());
	width.zip(height).ok_or(SurfaceError::NoViewport)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(|e| SurfaceError::ContextRequest(format!("{e:?}")))?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into()
		.map_err(|_| SurfaceError::NoContext)
}

fn request_frame(cb: &FrameCallback) {
	let (Some(cb), Some(win)) = (cb.borrow().as_ref().map(|c| c.as_ref().clone()), web_sys::window())
	else {
		return;
	};
	let _ = win.request_animation_frame(cb.unchecked_ref());
}

/// Sizes the canvas, builds the scene and starts the resize listener and frame loop.
fn start(
	canvas: HtmlCanvasElement,
	scene: Rc<RefCell<Option<Scene>>>,
	animate: FrameCallback,
	resize_cb: FrameCallback,
) -> Result<(), SurfaceError> {
	let window = window()?;
	let (w, h) = viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = context_2d(&canvas)?;

	let built = Scene::new(w, h, Theme::default(), Rng::new());
	info!(
		"heart-glow: {} particles, heart size {:.1} at ({:.0}, {:.0})",
		built.field.particles.len(),
		built.geometry.size,
		built.geometry.center_x,
		built.geometry.center_y
	);
	*scene.borrow_mut() = Some(built);

	let (scene_resize, canvas_resize) = (scene.clone(), canvas.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Some((nw, nh)) = web_sys::window().and_then(|win| viewport_size(&win).ok()) else {
			return;
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut s) = *scene_resize.borrow_mut() {
			s.resize(nw, nh);
		}
		debug!("heart-glow: surface resized to {nw}x{nh}");
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}

	let (scene_anim, animate_inner) = (scene.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut s) = *scene_anim.borrow_mut() {
			s.tick();
			render::render(s, &ctx, js_sys::Date::now() * 0.001);
		}
		request_frame(&animate_inner);
	}));
	request_frame(&animate);

	Ok(())
}

/// Full-viewport canvas with the animated heart.
///
/// The canvas follows the window size, but the heart keeps the center and
/// size computed when the component mounted.
#[component]
pub fn HeartCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<Scene>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if scene.borrow().is_some() {
			return;
		}
		if let Err(e) = start(canvas.into(), scene.clone(), animate.clone(), resize_cb.clone()) {
			error!("heart-glow: cannot start heart canvas: {e}");
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="heartCanvas"
			class="heart-canvas"
			style="display: block;"
		/>
	}
}

/// Container of falling balloons.
///
/// One balloon is appended every interval and removed unconditionally after
/// the configured lifetime, whether or not its animation has finished.
#[component]
pub fn BalloonLayer() -> impl IntoView {
	let spawner = RwSignal::new(BalloonSpawner::new(Theme::default().balloons, Rng::new()));
	let (interval, lifetime) = spawner.with_untracked(|s| {
		(
			Duration::from_millis(s.style().interval_ms as u64),
			Duration::from_millis(s.style().lifetime_ms as u64),
		)
	});

	let spawn = move || {
		let Some(balloon) = spawner.try_update(|s| s.spawn(js_sys::Date::now())) else {
			return;
		};
		set_timeout(
			move || {
				spawner.update(|s| {
					s.remove(balloon.id);
				});
			},
			lifetime,
		);
	};
	match set_interval_with_handle(spawn, interval) {
		Ok(_) => info!("heart-glow: spawning balloons every {}ms", interval.as_millis()),
		Err(e) => error!("heart-glow: cannot schedule balloons: {e:?}"),
	}

	view! {
		<div id="balloonContainer" class="balloon-container">
			<For
				each=move || spawner.with(|s| s.live().to_vec())
				key=|b| b.id
				children=move |b: Balloon| {
					let (class, style) = spawner.with_untracked(|s| (s.style().class, b.style(s.style())));
					view! { <div class=class style=style /> }
				}
			/>
		</div>
	}
}
