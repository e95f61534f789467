use super::types::VertexId;

/// Active interaction mode. Vertex and edge tools are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
	#[default]
	Idle,
	Vertex,
	EdgeAwaitingFirst,
	EdgeAwaitingSecond(VertexId),
}

impl Tool {
	pub fn is_edge(self) -> bool {
		matches!(self, Tool::EdgeAwaitingFirst | Tool::EdgeAwaitingSecond(_))
	}

	pub fn is_mid_selection(self) -> bool {
		matches!(self, Tool::EdgeAwaitingSecond(_))
	}

	pub fn pending(self) -> Option<VertexId> {
		match self {
			Tool::EdgeAwaitingSecond(start) => Some(start),
			_ => None,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Tool::Idle => "No tool (F: vertex, G: edge)",
			Tool::Vertex => "Vertex Tool",
			Tool::EdgeAwaitingFirst => "Edge Tool",
			Tool::EdgeAwaitingSecond(_) => "Edge Tool (pick end vertex)",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_second_pick_is_mid_selection() {
		assert!(!Tool::Idle.is_mid_selection());
		assert!(!Tool::EdgeAwaitingFirst.is_mid_selection());
		assert!(Tool::EdgeAwaitingSecond(VertexId(1)).is_mid_selection());
		assert_eq!(Tool::EdgeAwaitingSecond(VertexId(1)).pending(), Some(VertexId(1)));
		assert!(Tool::EdgeAwaitingFirst.is_edge());
		assert!(!Tool::Vertex.is_edge());
	}
}
