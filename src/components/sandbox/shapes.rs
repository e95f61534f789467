//! What the main drawing area shows for the committed edges, independent of the canvas.

use super::config::SandboxConfig;
use super::geometry::{curve_control, quadratic_bezier};
use super::graph::Graph;
use super::types::{EdgeKind, Point};

#[derive(Clone, Debug, PartialEq)]
pub enum EdgeShape {
	Straight(Point, Point),
	Curve(Vec<Point>),
	Loop { center: Point, radius: f64 },
}

/// Slot owners draw straight on odd redundancy and nothing on even; every later
/// edge of the slot becomes a curve, alternating sides with a growing offset.
/// A loop is one circle resting on its vertex, scaled by `1 + step * redundancy`.
pub fn edge_shapes(graph: &Graph, cfg: &SandboxConfig) -> Vec<EdgeShape> {
	let ordinals = graph.duplicate_ordinals();
	let mut out = Vec::new();

	for (i, edge) in graph.edges().iter().enumerate() {
		// Curves of one slot share the owner's orientation so they fan out evenly.
		let owner = &graph.edges()[edge.slot];
		let (Ok(a), Ok(b)) = (graph.vertex(owner.from), graph.vertex(owner.to)) else {
			continue;
		};
		let (pa, pb) = (a.center(), b.center());

		match edge.kind {
			EdgeKind::Loop if edge.owns_slot(i) => {
				let radius = a.radius * (1.0 + cfg.loop_scale_step * edge.redundancy as f64);
				out.push(EdgeShape::Loop {
					center: Point::new(pa.x, pa.y - radius),
					radius,
				});
			}
			EdgeKind::Loop => {}
			EdgeKind::Line if edge.owns_slot(i) => {
				if edge.redundancy % 2 == 1 {
					out.push(EdgeShape::Straight(pa, pb));
				}
			}
			EdgeKind::Line => {
				let k = ordinals[i];
				let side = if k % 2 == 1 { 1.0 } else { -1.0 };
				let offset = side * cfg.curve_offset * k.div_ceil(2) as f64;
				let control = curve_control(pa, pb, offset);
				out.push(EdgeShape::Curve(quadratic_bezier(
					pa,
					control,
					pb,
					cfg.curve_samples,
				)));
			}
		}
	}
	out
}
