use log::{debug, error, info, warn};
use rand::Rng;

use super::analysis::Analysis;
use super::audio::Cue;
use super::config::SandboxConfig;
use super::error::UndoError;
use super::graph::Graph;
use super::history::{Command, History};
use super::layout::Layout;
use super::setup::{SetupForm, SetupOutcome};
use super::tool::Tool;
use super::types::{InputEvent, Key, Point, VertexId};

pub enum Phase {
	Setup(SetupForm),
	Drawing(Box<Session>),
	Closed,
}

/// Everything the event loop owns: one value, mutated by [`SandboxState::handle`]
/// and read by the renderer.
pub struct SandboxState {
	pub phase: Phase,
	pub mouse: Point,
	pub width: f64,
	pub height: f64,
	hit_radius: Option<f64>,
}

impl SandboxState {
	pub fn new(width: f64, height: f64, hit_radius: Option<f64>) -> Self {
		Self {
			phase: Phase::Setup(SetupForm::default()),
			mouse: Point::default(),
			width,
			height,
			hit_radius,
		}
	}

	pub fn is_open(&self) -> bool {
		!matches!(self.phase, Phase::Closed)
	}

	pub fn close(&mut self) {
		info!("Window closed");
		self.phase = Phase::Closed;
	}

	pub fn handle<R: Rng>(&mut self, event: InputEvent, rng: &mut R) -> Option<Cue> {
		match event {
			InputEvent::Closed
			| InputEvent::KeyPressed {
				key: Key::Escape, ..
			} => {
				self.close();
				None
			}
			InputEvent::MouseMoved(p) => {
				self.mouse = p;
				None
			}
			InputEvent::LeftClick(p) => {
				self.mouse = p;
				match &mut self.phase {
					Phase::Drawing(session) => session.click(p),
					_ => None,
				}
			}
			InputEvent::KeyPressed { key, ctrl } => match &mut self.phase {
				Phase::Setup(form) => {
					match form.key(key) {
						SetupOutcome::Done { vertices, edges } => self.start(vertices, edges, rng),
						SetupOutcome::Cancelled => self.close(),
						SetupOutcome::Pending => {}
					}
					None
				}
				Phase::Drawing(session) => session.key(key, ctrl),
				Phase::Closed => None,
			},
		}
	}

	fn start<R: Rng>(&mut self, vertices: usize, edges: usize, rng: &mut R) {
		match SandboxConfig::new(vertices, edges) {
			Ok(config) => {
				let config = config.with_hit_radius(self.hit_radius);
				info!("Drawing {vertices} vertices and {edges} edges");
				self.phase = Phase::Drawing(Box::new(Session::new(config, rng)));
			}
			Err(e) => warn!("{e}"),
		}
	}
}

/// One drawing session: the graph being built plus everything derived from it.
pub struct Session {
	pub config: SandboxConfig,
	pub graph: Graph,
	pub tool: Tool,
	pub history: History,
	pub layouts: [Layout; 2],
	pub analysis: Option<Analysis>,
}

impl Session {
	pub fn new<R: Rng>(config: SandboxConfig, rng: &mut R) -> Self {
		let n = config.vertex_target;
		let (center_a, center_b) = config.layout_centers();
		let layouts = [
			Layout::circular(n, center_a, config.layout_radius, None, rng),
			Layout::circular(
				n,
				center_b,
				config.layout_radius,
				Some(config.jitter.clone()),
				rng,
			),
		];
		Self {
			graph: Graph::new(n, config.edge_target),
			tool: Tool::Idle,
			history: History::default(),
			layouts,
			analysis: None,
			config,
		}
	}

	pub fn is_complete(&self) -> bool {
		self.analysis.is_some()
	}

	pub fn key(&mut self, key: Key, ctrl: bool) -> Option<Cue> {
		match key {
			Key::VertexTool => {
				self.select_tool(Tool::Vertex);
				None
			}
			Key::EdgeTool => {
				self.select_tool(Tool::EdgeAwaitingFirst);
				None
			}
			Key::Undo if ctrl => match self.undo() {
				Ok(cue) => Some(cue),
				Err(e) => {
					warn!("undo rejected: {e}");
					None
				}
			},
			_ => None,
		}
	}

	/// Switching tools always drops a half-picked edge.
	pub fn select_tool(&mut self, tool: Tool) {
		self.tool = tool;
		match tool {
			Tool::Vertex => info!("Vertex Tool is Active"),
			Tool::EdgeAwaitingFirst | Tool::EdgeAwaitingSecond(_) => info!("Edge Tool is Active"),
			Tool::Idle => info!("No tool is active"),
		}
	}

	pub fn click(&mut self, p: Point) -> Option<Cue> {
		if !self.config.drawing_area.contains(p) {
			return None;
		}
		match self.tool {
			Tool::Idle => None,
			Tool::Vertex => self.place_vertex(p),
			Tool::EdgeAwaitingFirst | Tool::EdgeAwaitingSecond(_) => self.pick_vertex(p),
		}
	}

	fn place_vertex(&mut self, p: Point) -> Option<Cue> {
		let id = self.graph.add_vertex(p, self.config.vertex_radius).ok()?;
		debug!("placed vertex {} at ({}, {})", id.index() + 1, p.x, p.y);
		self.history.record(Command::PlaceVertex(id));
		self.check_completion();
		Some(Cue::PlaceVertex)
	}

	fn pick_vertex(&mut self, p: Point) -> Option<Cue> {
		if self.graph.edges_full() {
			return None;
		}
		let Some(picked) = self.graph.nearest_vertex(p, self.config.hit_radius) else {
			debug!("no vertex near ({}, {})", p.x, p.y);
			return None;
		};
		let Tool::EdgeAwaitingSecond(start) = self.tool else {
			info!("Edge drawing tool enabled.");
			self.tool = Tool::EdgeAwaitingSecond(picked);
			return None;
		};

		let added = match self.graph.add_edge(start, picked) {
			Ok(added) => added,
			Err(e) => {
				error!("edge rejected: {e}");
				self.tool = Tool::EdgeAwaitingFirst;
				return None;
			}
		};
		info!("{}", added.kind);
		if added.redundancy > 1 {
			info!("Updated degree [{}] : {}", added.slot, added.redundancy);
		}
		self.history.record(Command::AddEdge {
			index: added.index,
			slot: added.slot,
		});
		self.tool = Tool::EdgeAwaitingFirst;
		info!("Edge drawing tool disabled.");
		self.check_completion();
		Some(Cue::PlaceEdge)
	}

	pub fn undo(&mut self) -> Result<Cue, UndoError> {
		if self.tool.is_mid_selection() {
			return Err(UndoError::SelectionInProgress);
		}
		if self.graph.edges_full() {
			return Err(UndoError::GraphComplete);
		}
		let command = self.history.undo(&mut self.graph)?;
		match command {
			Command::PlaceVertex(id) => info!("Vertex {} undone.", id.index() + 1),
			Command::AddEdge { .. } => info!("Edge undone."),
		}
		Ok(Cue::Undo)
	}

	fn check_completion(&mut self) {
		if self.is_complete() || !self.graph.edges_full() || !self.graph.vertices_full() {
			return;
		}
		match Analysis::of(&self.graph) {
			Ok(analysis) => {
				info!("{}", analysis.report());
				self.analysis = Some(analysis);
			}
			Err(e) => error!("cannot analyse drawn graph: {e}"),
		}
	}

	/// Hover highlight for the edge tool: every vertex within the hit radius, or just
	/// the nearest one when the radius is unbounded.
	pub fn is_hovered(&self, id: VertexId, mouse: Point) -> bool {
		if !self.tool.is_edge() {
			return false;
		}
		match self.config.hit_radius {
			Some(r) => self.graph.vertices_within(mouse, r).any(|v| v == id),
			None => self.graph.nearest_vertex(mouse, None) == Some(id),
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::sandbox::shapes::{EdgeShape, edge_shapes};
	use crate::components::sandbox::types::EdgeKind;

	const CORNERS: [(f64, f64); 4] = [(50.0, 50.0), (250.0, 50.0), (250.0, 250.0), (50.0, 250.0)];

	fn key(key: Key) -> InputEvent {
		InputEvent::KeyPressed { key, ctrl: false }
	}

	fn click(x: f64, y: f64) -> InputEvent {
		InputEvent::LeftClick(Point::new(x, y))
	}

	fn undo() -> InputEvent {
		InputEvent::KeyPressed {
			key: Key::Undo,
			ctrl: true,
		}
	}

	struct Harness {
		state: SandboxState,
		rng: StdRng,
	}

	impl Harness {
		fn new(vertices: usize, edges: usize) -> Self {
			let mut h = Self {
				state: SandboxState::new(1200.0, 600.0, Some(18.0)),
				rng: StdRng::seed_from_u64(42),
			};
			for count in [vertices, edges] {
				for b in count.to_string().bytes() {
					h.send(key(Key::Digit(b - b'0')));
				}
				h.send(key(Key::Enter));
			}
			h
		}

		fn send(&mut self, event: InputEvent) -> Option<Cue> {
			self.state.handle(event, &mut self.rng)
		}

		fn session(&self) -> &Session {
			match &self.state.phase {
				Phase::Drawing(s) => &**s,
				_ => panic!("not drawing"),
			}
		}

		fn place_corners(&mut self) {
			self.send(key(Key::VertexTool));
			for (x, y) in CORNERS {
				assert_eq!(self.send(click(x, y)), Some(Cue::PlaceVertex));
			}
			self.send(key(Key::EdgeTool));
		}

		fn edge(&mut self, a: usize, b: usize) -> Option<Cue> {
			let (ax, ay) = CORNERS[a];
			let (bx, by) = CORNERS[b];
			self.send(click(ax + 3.0, ay - 2.0));
			self.send(click(bx - 4.0, by + 1.0))
		}
	}

	#[test]
	fn setup_starts_a_session() {
		let h = Harness::new(4, 5);
		let s = h.session();
		assert_eq!(s.config.vertex_target, 4);
		assert_eq!(s.config.edge_target, 5);
		assert_eq!(s.layouts[0].positions.len(), 4);
		assert_eq!(s.tool, Tool::Idle);
	}

	#[test]
	fn escape_closes_from_any_phase() {
		let mut h = Harness::new(4, 4);
		h.send(key(Key::Escape));
		assert!(!h.state.is_open());

		let mut fresh = SandboxState::new(1200.0, 600.0, None);
		fresh.handle(key(Key::Escape), &mut StdRng::seed_from_u64(1));
		assert!(!fresh.is_open());
	}

	#[test]
	fn page_hide_closes_the_session() {
		let mut h = Harness::new(4, 4);
		h.place_corners();
		assert_eq!(h.send(InputEvent::Closed), None);
		assert!(!h.state.is_open());
		assert_eq!(h.send(click(50.0, 50.0)), None);
	}

	#[test]
	fn vertex_clicks_outside_area_or_over_capacity_are_ignored() {
		let mut h = Harness::new(4, 4);
		h.send(key(Key::VertexTool));
		assert_eq!(h.send(click(600.0, 100.0)), None);
		for (x, y) in CORNERS {
			h.send(click(x, y));
		}
		assert_eq!(h.send(click(120.0, 120.0)), None);
		assert_eq!(h.session().graph.vertex_count(), 4);
	}

	#[test]
	fn ring_completes_and_reports() {
		let mut h = Harness::new(4, 4);
		h.place_corners();
		for (a, b) in [(0, 1), (1, 2), (2, 3)] {
			assert_eq!(h.edge(a, b), Some(Cue::PlaceEdge));
			assert!(!h.session().is_complete());
		}
		h.edge(3, 0);

		let analysis = h.session().analysis.as_ref().unwrap();
		assert_eq!(analysis.degrees, vec![2, 2, 2, 2]);
		assert!(analysis.adjacency.is_symmetric());
		for layout in &h.session().layouts {
			assert_eq!(layout.segments(&analysis.adjacency).len(), 4);
		}
	}

	#[test]
	fn missed_second_click_keeps_pending_start() {
		let mut h = Harness::new(4, 4);
		h.place_corners();
		h.send(click(52.0, 52.0));
		assert_eq!(h.session().tool, Tool::EdgeAwaitingSecond(VertexId(0)));
		assert_eq!(h.send(click(150.0, 150.0)), None);
		assert_eq!(h.session().tool, Tool::EdgeAwaitingSecond(VertexId(0)));
		assert_eq!(h.send(click(250.0, 48.0)), Some(Cue::PlaceEdge));
	}

	#[test]
	fn switching_tool_clears_pending_start() {
		let mut h = Harness::new(4, 4);
		h.place_corners();
		h.send(click(52.0, 52.0));
		h.send(key(Key::EdgeTool));
		assert_eq!(h.session().tool, Tool::EdgeAwaitingFirst);
	}

	#[test]
	fn idle_tool_drops_pending_start_and_ignores_clicks() {
		let mut h = Harness::new(4, 4);
		h.place_corners();
		h.send(click(52.0, 52.0));
		match &mut h.state.phase {
			Phase::Drawing(s) => s.select_tool(Tool::Idle),
			_ => unreachable!(),
		}
		assert_eq!(h.session().tool, Tool::Idle);
		assert_eq!(h.send(click(250.0, 50.0)), None);
		assert_eq!(h.session().graph.edge_count(), 0);
	}

	#[test]
	fn double_edge_hides_straight_line_until_odd() {
		let mut h = Harness::new(4, 4);
		h.place_corners();
		h.edge(0, 1);
		h.edge(1, 0);
		let s = h.session();
		assert_eq!(s.graph.edges()[0].redundancy, 2);
		assert_eq!(s.graph.edges()[1].slot, 0);
		let shapes = edge_shapes(&s.graph, &s.config);
		assert!(!shapes.iter().any(|e| matches!(e, EdgeShape::Straight(..))));

		h.edge(0, 1);
		let s = h.session();
		let shapes = edge_shapes(&s.graph, &s.config);
		assert_eq!(
			shapes
				.iter()
				.filter(|e| matches!(e, EdgeShape::Straight(..)))
				.count(),
			1
		);
	}

	#[test]
	fn self_loop_lands_on_diagonal() {
		let mut h = Harness::new(4, 4);
		h.place_corners();
		h.edge(2, 2);
		assert_eq!(h.session().graph.edges()[0].kind, EdgeKind::Loop);
		for (a, b) in [(0, 1), (1, 3), (3, 0)] {
			h.edge(a, b);
		}
		let m = &h.session().analysis.as_ref().unwrap().adjacency;
		assert_eq!(m.get(2, 2), 1);
		assert!((0..4).filter(|&j| j != 2).all(|j| m.get(2, j) == 0));
	}

	#[test]
	fn undo_with_empty_history_changes_nothing() {
		let mut h = Harness::new(4, 4);
		h.send(key(Key::EdgeTool));
		assert_eq!(h.send(undo()), None);
		assert_eq!(h.session().graph.vertex_count(), 0);
		assert!(h.session().history.is_empty());
	}

	#[test]
	fn undo_is_refused_mid_selection_and_after_completion() {
		let mut h = Harness::new(4, 4);
		h.place_corners();
		h.edge(0, 1);
		h.send(click(250.0, 250.0));
		assert_eq!(h.send(undo()), None);
		assert_eq!(h.session().graph.edge_count(), 1);

		h.send(click(50.0, 250.0));
		h.edge(3, 0);
		h.edge(1, 2);
		assert!(h.session().is_complete());
		assert_eq!(h.send(undo()), None);
		assert_eq!(h.session().graph.edge_count(), 4);
	}

	#[test]
	fn undo_then_readd_restores_counters() {
		let mut h = Harness::new(4, 6);
		h.place_corners();
		h.edge(0, 1);
		h.edge(0, 1);
		let before = h.session().graph.edges().to_vec();

		assert_eq!(h.send(undo()), Some(Cue::Undo));
		assert_eq!(h.session().graph.edges()[0].redundancy, 1);
		h.edge(0, 1);
		assert_eq!(h.session().graph.edges(), &before[..]);
	}

	#[test]
	fn hover_follows_edge_tool_only() {
		let mut h = Harness::new(4, 4);
		h.place_corners();
		let mouse = Point::new(55.0, 55.0);
		assert!(h.session().is_hovered(VertexId(0), mouse));
		assert!(!h.session().is_hovered(VertexId(1), mouse));
		h.send(key(Key::VertexTool));
		assert!(!h.session().is_hovered(VertexId(0), mouse));
	}
}
