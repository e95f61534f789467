use std::f64::consts::TAU;
use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;

use super::analysis::AdjacencyMatrix;
use super::types::Point;

/// An alternate placement of the drawn graph's vertices. Position `i` stands for
/// vertex `i`, so edges are read straight from the drawn adjacency matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	pub positions: Vec<Point>,
}

impl Layout {
	/// Places `n` points on a circle around `center` in steps of `2π/n`, optionally
	/// pushing each radius by a uniform sample from `jitter`, then shuffles them.
	pub fn circular<R: Rng>(
		n: usize,
		center: Point,
		radius: f64,
		jitter: Option<Range<f64>>,
		rng: &mut R,
	) -> Self {
		let step = if n == 0 { 0.0 } else { TAU / n as f64 };
		let mut positions: Vec<Point> = (0..n)
			.map(|i| {
				let angle = i as f64 * step;
				let r = match &jitter {
					Some(range) if !range.is_empty() => radius + rng.gen_range(range.clone()),
					_ => radius,
				};
				Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
			})
			.collect();
		positions.shuffle(rng);
		Self { positions }
	}

	/// One segment per adjacent pair `i < j`, joining the positions at `i` and `j`.
	pub fn segments(&self, adjacency: &AdjacencyMatrix) -> Vec<(Point, Point)> {
		let n = self.positions.len().min(adjacency.len());
		let mut out = Vec::new();
		for i in 0..n {
			for j in i + 1..n {
				if adjacency.get(i, j) > 0 {
					out.push((self.positions[i], self.positions[j]));
				}
			}
		}
		out
	}
}
