use thiserror::Error;

use super::config::MIN_COUNT;
use super::types::VertexId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("Input must be a number greater or equal to {min}.", min = MIN_COUNT)]
	NotANumber,
	#[error("Input must be a number greater or equal to {min} (got {0}).", min = MIN_COUNT)]
	BelowMinimum(usize),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
	#[error("vertex {0:?} does not exist")]
	UnknownVertex(VertexId),
	#[error("all {0} vertices are already placed")]
	VertexCapacity(usize),
	#[error("all {0} edges are already drawn")]
	EdgeCapacity(usize),
	#[error("vertex {0:?} still has edges attached")]
	VertexInUse(VertexId),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UndoError {
	#[error("Draw the edge first before undoing an edge.")]
	SelectionInProgress,
	#[error("the graph is complete")]
	GraphComplete,
	#[error("nothing to undo")]
	NothingToUndo,
	#[error("history is out of sync with the graph: {0}")]
	Desync(#[from] GraphError),
	#[error("history expects edge {0} on top of the graph")]
	EdgeMismatch(usize),
	#[error("history expects vertex {0:?} on top of the graph")]
	VertexMismatch(VertexId),
}
