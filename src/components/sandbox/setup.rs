//! Start screen: the vertex and edge targets are typed straight into the canvas.

use super::config::parse_count;
use super::error::ConfigError;
use super::types::Key;

const MAX_DIGITS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	Vertices,
	Edges,
}

impl Field {
	pub fn prompt(self) -> &'static str {
		match self {
			Field::Vertices => "Enter the number of vertices:",
			Field::Edges => "Enter the number of edges:",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupOutcome {
	Pending,
	Done { vertices: usize, edges: usize },
	Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupForm {
	pub field: Field,
	pub buffer: String,
	pub vertices: Option<usize>,
	pub error: Option<ConfigError>,
}

impl Default for SetupForm {
	fn default() -> Self {
		Self {
			field: Field::Vertices,
			buffer: String::new(),
			vertices: None,
			error: None,
		}
	}
}

impl SetupForm {
	pub fn key(&mut self, key: Key) -> SetupOutcome {
		match key {
			Key::Escape => return SetupOutcome::Cancelled,
			Key::Digit(d) if self.buffer.len() < MAX_DIGITS => {
				self.buffer.push(char::from(b'0' + d));
			}
			Key::Backspace => {
				self.buffer.pop();
			}
			Key::Enter => return self.submit(),
			_ => {}
		}
		SetupOutcome::Pending
	}

	fn submit(&mut self) -> SetupOutcome {
		let input = std::mem::take(&mut self.buffer);
		let n = match parse_count(&input) {
			Ok(n) => n,
			Err(e) => {
				log::warn!("{e}");
				self.error = Some(e);
				return SetupOutcome::Pending;
			}
		};
		self.error = None;
		match (self.field, self.vertices) {
			(Field::Vertices, _) => {
				self.vertices = Some(n);
				self.field = Field::Edges;
				SetupOutcome::Pending
			}
			(Field::Edges, Some(vertices)) => SetupOutcome::Done { vertices, edges: n },
			(Field::Edges, None) => {
				self.field = Field::Vertices;
				SetupOutcome::Pending
			}
		}
	}
}
