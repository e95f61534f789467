use super::geometry;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Index of a vertex in placement order. Never reused while the vertex exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
	pub fn index(self) -> usize {
		self.0
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
	/// Top-left corner of the marker's bounding box.
	pub position: Point,
	pub radius: f64,
}

impl Vertex {
	pub fn centered_at(center: Point, radius: f64) -> Self {
		Self {
			position: geometry::marker_origin(center, radius),
			radius,
		}
	}

	pub fn center(&self) -> Point {
		geometry::marker_center(self.position, self.radius)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
	Line,
	Loop,
}

impl std::fmt::Display for EdgeKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			EdgeKind::Line => write!(f, "Line"),
			EdgeKind::Loop => write!(f, "Loop"),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	pub from: VertexId,
	pub to: VertexId,
	pub kind: EdgeKind,
	/// Index of the first edge joining the same pair of vertices.
	pub slot: usize,
	/// How many edges share this slot. Only the slot owner counts; duplicates hold 0.
	pub redundancy: u32,
}

impl Edge {
	pub fn joins(&self, a: VertexId, b: VertexId) -> bool {
		(self.from == a && self.to == b) || (self.from == b && self.to == a)
	}

	pub fn owns_slot(&self, index: usize) -> bool {
		self.slot == index
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
	Escape,
	VertexTool,
	EdgeTool,
	Undo,
	Digit(u8),
	Backspace,
	Enter,
	Other,
}

impl Key {
	/// Maps a DOM `KeyboardEvent.key` value.
	pub fn from_dom(key: &str) -> Self {
		match key {
			"Escape" => Key::Escape,
			"f" | "F" => Key::VertexTool,
			"g" | "G" => Key::EdgeTool,
			"z" | "Z" => Key::Undo,
			"Backspace" => Key::Backspace,
			"Enter" => Key::Enter,
			_ => match key.as_bytes() {
				[d @ b'0'..=b'9'] => Key::Digit(d - b'0'),
				_ => Key::Other,
			},
		}
	}

	/// Whether the key does something with this modifier state. Only undo takes Ctrl;
	/// every other binding is plain so browser shortcuts like Ctrl+F pass through.
	pub fn is_bound(self, ctrl: bool) -> bool {
		match self {
			Key::Other => false,
			Key::Undo => ctrl,
			_ => !ctrl,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
	KeyPressed { key: Key, ctrl: bool },
	LeftClick(Point),
	MouseMoved(Point),
	Closed,
}
