//! Undo log.
//!
//! Every mutation appends one [`Command`]; undo pops the newest command and
//! reverts it against the graph. Reverting is constant time: an edge add is
//! undone by popping the edge and decrementing the slot it counted against.

use super::error::UndoError;
use super::graph::Graph;
use super::types::VertexId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	PlaceVertex(VertexId),
	AddEdge { index: usize, slot: usize },
}

#[derive(Clone, Debug, Default)]
pub struct History {
	log: Vec<Command>,
}

impl History {
	pub fn record(&mut self, command: Command) {
		self.log.push(command);
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.log.len()
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.log.is_empty()
	}

	#[cfg(test)]
	pub fn last(&self) -> Option<&Command> {
		self.log.last()
	}

	/// Pops the newest command and reverts it. The command must describe the top of
	/// the graph; otherwise both the log and the graph are left untouched.
	pub fn undo(&mut self, graph: &mut Graph) -> Result<Command, UndoError> {
		let command = *self.log.last().ok_or(UndoError::NothingToUndo)?;
		match command {
			Command::PlaceVertex(id) => {
				if graph.vertex_count().checked_sub(1) != Some(id.index()) {
					return Err(UndoError::VertexMismatch(id));
				}
				graph.remove_last_vertex()?;
			}
			Command::AddEdge { index, slot } => {
				let on_top = graph.edges().last().map(|e| e.slot) == Some(slot)
					&& graph.edge_count().checked_sub(1) == Some(index);
				if !on_top {
					return Err(UndoError::EdgeMismatch(index));
				}
				graph.remove_last_edge();
			}
		}
		self.log.pop();
		Ok(command)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::components::sandbox::types::Point;

	fn ring_graph() -> Graph {
		let mut g = Graph::new(4, 8);
		for i in 0..4 {
			g.add_vertex(Point::new(40.0 + 80.0 * i as f64, 100.0), 10.0)
				.unwrap();
		}
		g
	}

	fn add(g: &mut Graph, h: &mut History, a: usize, b: usize) {
		let added = g.add_edge(VertexId(a), VertexId(b)).unwrap();
		h.record(Command::AddEdge {
			index: added.index,
			slot: added.slot,
		});
	}

	#[test]
	fn empty_undo_is_a_no_op() {
		let mut g = ring_graph();
		let mut h = History::default();
		assert_eq!(h.undo(&mut g), Err(UndoError::NothingToUndo));
		assert_eq!(g.vertex_count(), 4);
		assert_eq!(g.edge_count(), 0);
	}

	#[test]
	fn undo_reverts_vertices_after_their_edges() {
		let mut g = Graph::new(4, 4);
		let mut h = History::default();
		for x in [10.0, 60.0] {
			let id = g.add_vertex(Point::new(x, 10.0), 10.0).unwrap();
			h.record(Command::PlaceVertex(id));
		}
		add(&mut g, &mut h, 0, 1);

		assert!(matches!(h.undo(&mut g), Ok(Command::AddEdge { .. })));
		assert_eq!(h.undo(&mut g), Ok(Command::PlaceVertex(VertexId(1))));
		assert_eq!(g.vertex_count(), 1);
		assert_eq!(h.len(), 1);
	}

	#[test]
	fn undo_after_duplicate_restores_counter() {
		let mut g = ring_graph();
		let mut h = History::default();
		add(&mut g, &mut h, 0, 1);
		add(&mut g, &mut h, 0, 1);
		assert_eq!(g.edges()[0].redundancy, 2);

		h.undo(&mut g).unwrap();
		assert_eq!(g.edges()[0].redundancy, 1);
		assert_eq!(g.edge_count(), 1);
	}

	#[test]
	fn out_of_sync_entry_is_refused() {
		let mut g = ring_graph();
		let mut h = History::default();
		g.add_edge(VertexId(0), VertexId(1)).unwrap();
		h.record(Command::AddEdge { index: 3, slot: 3 });
		assert_eq!(h.undo(&mut g), Err(UndoError::EdgeMismatch(3)));
		assert_eq!(g.edge_count(), 1);
		assert_eq!(h.len(), 1);

		let mut h = History::default();
		h.record(Command::PlaceVertex(VertexId(0)));
		g.remove_last_edge();
		assert_eq!(h.undo(&mut g), Err(UndoError::VertexMismatch(VertexId(0))));
		assert_eq!(g.vertex_count(), 4);
	}

	proptest! {
		#[test]
		fn undo_then_readd_round_trips(pairs in prop::collection::vec((0usize..4, 0usize..4), 1..8)) {
			let mut g = ring_graph();
			let mut h = History::default();
			for &(a, b) in &pairs {
				add(&mut g, &mut h, a, b);
			}
			let before = g.edges().to_vec();

			let undone = h.undo(&mut g).unwrap();
			prop_assert_eq!(g.edge_count(), before.len() - 1);

			let &(a, b) = pairs.last().unwrap();
			add(&mut g, &mut h, a, b);
			prop_assert_eq!(g.edges(), &before[..]);
			prop_assert_eq!(h.last(), Some(&undone));
		}
	}
}
