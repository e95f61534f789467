use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::layout::Layout;
use super::setup::SetupForm;
use super::shapes::{EdgeShape, edge_shapes};
use super::state::{Phase, SandboxState, Session};
use super::types::{Point, VertexId};

const BACKGROUND: &str = "#000000";
const FOREGROUND: &str = "#ffffff";
const HOVER: &str = "#ffff00";
const ERROR: &str = "#ff5555";
const EDGE_WIDTH: f64 = 1.5;

/// Vertex and edge colours for the two auxiliary layouts.
const LAYOUT_COLORS: [(&str, &str); 2] = [
	("#00ff00", "rgb(50, 100, 150)"),
	("#ff0000", "rgb(200, 150, 100)"),
];

pub fn render(state: &SandboxState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	match &state.phase {
		Phase::Setup(form) => draw_setup(state, form, ctx),
		Phase::Drawing(session) => draw_session(state, session, ctx),
		Phase::Closed => draw_closed(state, ctx),
	}
}

fn draw_setup(state: &SandboxState, form: &SetupForm, ctx: &CanvasRenderingContext2d) {
	let (cx, cy) = (state.width / 2.0, state.height / 2.0);
	ctx.set_text_align("center");

	ctx.set_fill_style_str(FOREGROUND);
	ctx.set_font("28px sans-serif");
	let _ = ctx.fill_text("Isomorphic Graph Generator", cx, cy - 90.0);

	ctx.set_font("18px sans-serif");
	let _ = ctx.fill_text(form.field.prompt(), cx, cy - 30.0);
	ctx.set_font("24px monospace");
	let _ = ctx.fill_text(&format!("{}_", form.buffer), cx, cy + 10.0);

	if let Some(err) = &form.error {
		ctx.set_fill_style_str(ERROR);
		ctx.set_font("14px sans-serif");
		let _ = ctx.fill_text(&err.to_string(), cx, cy + 50.0);
	}

	ctx.set_fill_style_str("rgba(255, 255, 255, 0.5)");
	ctx.set_font("12px sans-serif");
	let _ = ctx.fill_text("Enter to confirm, Esc to quit", cx, cy + 90.0);
	ctx.set_text_align("start");
}

fn draw_closed(state: &SandboxState, ctx: &CanvasRenderingContext2d) {
	ctx.set_text_align("center");
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");
	ctx.set_font("16px sans-serif");
	let _ = ctx.fill_text("Closed. Reload the page to start again.", state.width / 2.0, state.height / 2.0);
	ctx.set_text_align("start");
}

fn draw_session(state: &SandboxState, session: &Session, ctx: &CanvasRenderingContext2d) {
	let area = session.config.drawing_area;
	ctx.set_stroke_style_str(FOREGROUND);
	ctx.set_line_width(2.0);
	ctx.stroke_rect(area.left, area.top, area.width, area.height);

	draw_edges(session, ctx);
	draw_pending(session, state.mouse, ctx);
	draw_vertices(session, state.mouse, ctx);
	for (layout, colors) in session.layouts.iter().zip(LAYOUT_COLORS) {
		draw_layout(session, layout, colors, ctx);
	}
	draw_status(state, session, ctx);
}

fn draw_edges(session: &Session, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(FOREGROUND);
	ctx.set_line_width(EDGE_WIDTH);

	for shape in edge_shapes(&session.graph, &session.config) {
		match shape {
			EdgeShape::Straight(a, b) => stroke_polyline(ctx, &[a, b]),
			EdgeShape::Curve(points) => stroke_polyline(ctx, &points),
			EdgeShape::Loop { center, radius } => {
				ctx.begin_path();
				let _ = ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
				ctx.stroke();
			}
		}
	}
}

fn draw_pending(session: &Session, mouse: Point, ctx: &CanvasRenderingContext2d) {
	let Some(start) = session.tool.pending() else {
		return;
	};
	let Ok(v) = session.graph.vertex(start) else {
		return;
	};
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(4.0),
	));
	ctx.set_stroke_style_str("rgba(255, 255, 0, 0.6)");
	ctx.set_line_width(1.0);
	stroke_polyline(ctx, &[v.center(), mouse]);
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_vertices(session: &Session, mouse: Point, ctx: &CanvasRenderingContext2d) {
	for (i, v) in session.graph.vertices().iter().enumerate() {
		let color = if session.is_hovered(VertexId(i), mouse) {
			HOVER
		} else {
			FOREGROUND
		};
		fill_circle(ctx, v.center(), v.radius, color);
	}
}

fn draw_layout(
	session: &Session,
	layout: &Layout,
	(vertex_color, edge_color): (&str, &str),
	ctx: &CanvasRenderingContext2d,
) {
	if let Some(analysis) = &session.analysis {
		ctx.set_stroke_style_str(edge_color);
		ctx.set_line_width(EDGE_WIDTH);
		for (a, b) in layout.segments(&analysis.adjacency) {
			stroke_polyline(ctx, &[a, b]);
		}
	}
	for &p in &layout.positions {
		fill_circle(ctx, p, session.config.layout_vertex_radius, vertex_color);
	}
}

fn draw_status(state: &SandboxState, session: &Session, ctx: &CanvasRenderingContext2d) {
	let (graph, cfg) = (&session.graph, &session.config);
	ctx.set_fill_style_str(FOREGROUND);
	ctx.set_font("13px sans-serif");
	let status = format!(
		"{} | vertices {}/{} | edges {}/{}",
		session.tool.label(),
		graph.vertex_count(),
		graph.vertex_capacity(),
		graph.edge_count(),
		graph.edge_capacity(),
	);
	let _ = ctx.fill_text(&status, cfg.drawing_area.left + 8.0, state.height - 12.0);

	if let Some(analysis) = &session.analysis {
		let degrees: Vec<String> = analysis
			.degrees
			.iter()
			.enumerate()
			.map(|(i, d)| format!("v{}={d}", i + 1))
			.collect();
		let _ = ctx.fill_text(
			&format!("Degrees: {}", degrees.join("  ")),
			cfg.layout_area.left + 16.0,
			state.height - 12.0,
		);
	}
}

fn fill_circle(ctx: &CanvasRenderingContext2d, center: Point, radius: f64, color: &str) {
	ctx.begin_path();
	let _ = ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(color);
	ctx.fill();
}

fn stroke_polyline(ctx: &CanvasRenderingContext2d, points: &[Point]) {
	let Some((first, rest)) = points.split_first() else {
		return;
	};
	ctx.begin_path();
	ctx.move_to(first.x, first.y);
	for p in rest {
		ctx.line_to(p.x, p.y);
	}
	ctx.stroke();
}
