use std::collections::HashMap;

use super::error::GraphError;
use super::geometry::distance;
use super::types::{Edge, EdgeKind, Point, Vertex, VertexId};

/// Outcome of a committed edge, used for logging and for the history log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeAdded {
	pub index: usize,
	pub kind: EdgeKind,
	pub slot: usize,
	pub redundancy: u32,
}

/// Vertices and edges placed by the user, bounded by the session targets.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	vertices: Vec<Vertex>,
	edges: Vec<Edge>,
	vertex_capacity: usize,
	edge_capacity: usize,
}

impl Graph {
	pub fn new(vertex_capacity: usize, edge_capacity: usize) -> Self {
		Self {
			vertices: Vec::with_capacity(vertex_capacity),
			edges: Vec::with_capacity(edge_capacity),
			vertex_capacity,
			edge_capacity,
		}
	}

	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn vertex_capacity(&self) -> usize {
		self.vertex_capacity
	}

	pub fn edge_capacity(&self) -> usize {
		self.edge_capacity
	}

	pub fn vertices_full(&self) -> bool {
		self.vertices.len() >= self.vertex_capacity
	}

	pub fn edges_full(&self) -> bool {
		self.edges.len() >= self.edge_capacity
	}

	pub fn vertex(&self, id: VertexId) -> Result<&Vertex, GraphError> {
		self.vertices
			.get(id.index())
			.ok_or(GraphError::UnknownVertex(id))
	}

	pub fn add_vertex(&mut self, center: Point, radius: f64) -> Result<VertexId, GraphError> {
		if self.vertices_full() {
			return Err(GraphError::VertexCapacity(self.vertex_capacity));
		}
		let id = VertexId(self.vertices.len());
		self.vertices.push(Vertex::centered_at(center, radius));
		Ok(id)
	}

	/// Commits an edge. Repeating an existing pair (in either direction) bumps the
	/// redundancy counter of the first edge with that pair instead of starting a new slot.
	pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeAdded, GraphError> {
		self.vertex(from)?;
		self.vertex(to)?;
		if self.edges_full() {
			return Err(GraphError::EdgeCapacity(self.edge_capacity));
		}

		let index = self.edges.len();
		let kind = if from == to {
			EdgeKind::Loop
		} else {
			EdgeKind::Line
		};
		let slot = self
			.edges
			.iter()
			.position(|e| e.joins(from, to))
			.unwrap_or(index);

		self.edges.push(Edge {
			from,
			to,
			kind,
			slot,
			redundancy: 0,
		});
		let owner = &mut self.edges[slot];
		owner.redundancy += 1;

		Ok(EdgeAdded {
			index,
			kind,
			slot,
			redundancy: owner.redundancy,
		})
	}

	/// Reverts the most recent [`Graph::add_edge`].
	pub fn remove_last_edge(&mut self) -> Option<Edge> {
		let edge = self.edges.pop()?;
		if let Some(owner) = self.edges.get_mut(edge.slot) {
			owner.redundancy = owner.redundancy.saturating_sub(1);
		}
		Some(edge)
	}

	pub fn remove_last_vertex(&mut self) -> Result<Option<Vertex>, GraphError> {
		let Some(last) = self.vertices.len().checked_sub(1).map(VertexId) else {
			return Ok(None);
		};
		if self.edges.iter().any(|e| e.from == last || e.to == last) {
			return Err(GraphError::VertexInUse(last));
		}
		Ok(self.vertices.pop())
	}

	/// Nearest vertex center strictly within `hit_radius` of `point`; ties go to the
	/// lowest index. Unbounded when `hit_radius` is `None`.
	pub fn nearest_vertex(&self, point: Point, hit_radius: Option<f64>) -> Option<VertexId> {
		let mut best: Option<(VertexId, f64)> = None;
		for (i, v) in self.vertices.iter().enumerate() {
			let d = distance(point, v.center());
			let in_range = hit_radius.is_none_or(|r| d < r);
			if in_range && best.is_none_or(|(_, bd)| d < bd) {
				best = Some((VertexId(i), d));
			}
		}
		best.map(|(id, _)| id)
	}

	pub fn vertices_within(&self, point: Point, radius: f64) -> impl Iterator<Item = VertexId> + '_ {
		self.vertices
			.iter()
			.enumerate()
			.filter(move |(_, v)| distance(point, v.center()) < radius)
			.map(|(i, _)| VertexId(i))
	}

	/// For each edge, how many earlier edges share its slot.
	pub fn duplicate_ordinals(&self) -> Vec<usize> {
		let mut seen: HashMap<usize, usize> = HashMap::new();
		self.edges
			.iter()
			.map(|e| {
				let n = seen.entry(e.slot).or_insert(0);
				let ordinal = *n;
				*n += 1;
				ordinal
			})
			.collect()
	}
}
