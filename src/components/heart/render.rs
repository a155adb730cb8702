//! Canvas rendering for the heart effect.
//!
//! The surface is never cleared. Each frame draws in this order:
//! 1. A faint rectangle over the previous frames
//! 2. Particle trails and head glows (additive)
//! 3. The radial glow (additive)
//! 4. The pulsing outline
//!
//! The compositing mode is left on `lighter` at the end of a frame, so the
//! next frame's fade rectangle is composited additively too.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::curve::pulse_scale;
use super::particles::{Particle, TrailPath};
use super::scene::Scene;
use super::theme::ParticleStyle;

const ADDITIVE: &str = "lighter";
const NORMAL: &str = "source-over";

/// Renders one frame of an already updated scene. `time_secs` drives the pulse.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d, time_secs: f64) {
	draw_fade(scene, ctx);

	let _ = ctx.set_global_composite_operation(ADDITIVE);
	let style = scene.field.style();
	for p in &scene.field.particles {
		draw_particle(ctx, p, style);
	}
	let _ = ctx.set_global_composite_operation(NORMAL);

	draw_glow(scene, ctx);
	draw_outline(scene, ctx, time_secs);
}

fn draw_fade(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&scene.theme.fade.color.to_css());
	ctx.fill_rect(0.0, 0.0, scene.surface.width, scene.surface.height);
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle, style: &ParticleStyle) {
	let Some(path) = TrailPath::smooth(&p.trail) else {
		return;
	};

	ctx.begin_path();
	ctx.move_to(path.start.0, path.start.1);
	for seg in &path.segments {
		ctx.quadratic_curve_to(seg.cx, seg.cy, seg.x, seg.y);
	}

	let gradient = ctx.create_linear_gradient(path.start.0, path.start.1, path.end.0, path.end.1);
	for (offset, color) in p.trail_stops(style) {
		let _ = gradient.add_color_stop(offset as f32, &color.to_css());
	}

	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_line_width(p.line_width);
	ctx.set_line_cap("round");
	ctx.set_line_join("round");
	ctx.stroke();

	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, p.head_radius(style), 0.0, PI * 2.0);
	ctx.set_fill_style_str(&p.head_color(style).to_css());
	ctx.fill();
}

fn draw_glow(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	let g = &scene.geometry;
	let Ok(gradient) = ctx.create_radial_gradient(
		g.center_x,
		g.center_y,
		0.0,
		g.center_x,
		g.center_y,
		g.size * scene.theme.glow.radius,
	) else {
		return;
	};

	for (offset, color) in &scene.theme.glow.stops {
		let _ = gradient.add_color_stop(*offset as f32, &color.to_css());
	}

	let _ = ctx.set_global_composite_operation(ADDITIVE);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, scene.surface.width, scene.surface.height);
}

fn draw_outline(scene: &Scene, ctx: &CanvasRenderingContext2d, time_secs: f64) {
	let g = &scene.geometry;
	let style = &scene.theme.outline;
	let pulse = pulse_scale(time_secs, style);

	ctx.save();
	let _ = ctx.translate(g.center_x, g.center_y);
	let _ = ctx.scale(pulse, pulse);
	let _ = ctx.translate(-g.center_x, -g.center_y);

	ctx.begin_path();
	let points = g.outline(style);
	if let Some((&(x0, y0), rest)) = points.split_first() {
		ctx.move_to(x0, y0);
		for &(x, y) in rest {
			ctx.line_to(x, y);
		}
	}
	ctx.close_path();

	ctx.set_stroke_style_str(&style.color.to_css());
	ctx.set_line_width(style.line_width);
	ctx.stroke();
	ctx.restore();
}
