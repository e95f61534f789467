use std::fmt::Write;

use super::error::GraphError;
use super::graph::Graph;
use super::types::EdgeKind;

/// Square multigraph adjacency matrix indexed by vertex id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
	cells: Vec<Vec<u32>>,
}

impl AdjacencyMatrix {
	pub fn new(n: usize) -> Self {
		Self {
			cells: vec![vec![0; n]; n],
		}
	}

	/// Counts every edge of `graph`: distinct endpoints fill both mirrored cells,
	/// a loop fills only its diagonal cell.
	pub fn from_graph(graph: &Graph) -> Result<Self, GraphError> {
		let mut m = Self::new(graph.vertex_count());
		for edge in graph.edges() {
			graph.vertex(edge.from)?;
			graph.vertex(edge.to)?;
			let (a, b) = (edge.from.index(), edge.to.index());
			match edge.kind {
				EdgeKind::Loop => m.cells[a][a] += 1,
				EdgeKind::Line => {
					m.cells[a][b] += 1;
					m.cells[b][a] += 1;
				}
			}
		}
		Ok(m)
	}

	pub fn len(&self) -> usize {
		self.cells.len()
	}

	pub fn get(&self, i: usize, j: usize) -> u32 {
		self.cells
			.get(i)
			.and_then(|row| row.get(j))
			.copied()
			.unwrap_or(0)
	}

	pub fn rows(&self) -> &[Vec<u32>] {
		&self.cells
	}

	#[cfg(test)]
	pub fn is_symmetric(&self) -> bool {
		(0..self.len()).all(|i| (0..i).all(|j| self.cells[i][j] == self.cells[j][i]))
	}

	pub fn degrees(&self) -> Vec<u32> {
		self.cells.iter().map(|row| row.iter().sum()).collect()
	}

	/// 0/1 projection: parallel edges collapse to a single adjacency.
	pub fn simple(&self) -> Self {
		Self {
			cells: self
				.cells
				.iter()
				.map(|row| row.iter().map(|&c| u32::from(c > 0)).collect())
				.collect(),
		}
	}
}

/// Result of the one-time completion analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
	pub adjacency: AdjacencyMatrix,
	pub degrees: Vec<u32>,
}

impl Analysis {
	pub fn of(graph: &Graph) -> Result<Self, GraphError> {
		let adjacency = AdjacencyMatrix::from_graph(graph)?;
		let degrees = adjacency.degrees();
		Ok(Self { adjacency, degrees })
	}

	pub fn report(&self) -> String {
		let mut out = String::new();
		write_section(&mut out, "Drawn Graph", &self.adjacency);
		let simple = self.adjacency.simple();
		for n in 1..=2 {
			write_section(&mut out, &format!("Generated Graph {n}"), &simple);
		}
		out
	}
}

fn write_section(out: &mut String, title: &str, m: &AdjacencyMatrix) {
	let _ = writeln!(out, "\nAdjacency Matrix of {title}:");
	for row in m.rows() {
		let line: Vec<String> = row.iter().map(u32::to_string).collect();
		let _ = writeln!(out, "{}", line.join(" "));
	}
	let _ = writeln!(out, "\nDegree of {title}:");
	for (i, d) in m.degrees().iter().enumerate() {
		let _ = writeln!(out, "Vertex {}: {d}", i + 1);
	}
}
