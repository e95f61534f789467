use super::types::Point;

pub fn distance(a: Point, b: Point) -> f64 {
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	(dx * dx + dy * dy).sqrt()
}

/// Center of a circle marker whose bounding box starts at `position`.
pub fn marker_center(position: Point, radius: f64) -> Point {
	Point::new(position.x + radius, position.y + radius)
}

pub fn marker_origin(center: Point, radius: f64) -> Point {
	Point::new(center.x - radius, center.y - radius)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}

	/// Half-open: the right and bottom edges are outside.
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.left
			&& p.x < self.left + self.width
			&& p.y >= self.top
			&& p.y < self.top + self.height
	}
}

/// Samples a quadratic Bezier curve into `samples + 1` points, endpoints included.
pub fn quadratic_bezier(p0: Point, control: Point, p1: Point, samples: usize) -> Vec<Point> {
	let samples = samples.max(1);
	(0..=samples)
		.map(|i| {
			let t = i as f64 / samples as f64;
			let u = 1.0 - t;
			Point::new(
				u * u * p0.x + 2.0 * u * t * control.x + t * t * p1.x,
				u * u * p0.y + 2.0 * u * t * control.y + t * t * p1.y,
			)
		})
		.collect()
}

/// Control point pushed `offset` units off the midpoint of `a -> b`, perpendicular to it.
pub fn curve_control(a: Point, b: Point, offset: f64) -> Point {
	let mid = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
	let len = distance(a, b);
	if len < 0.001 {
		return Point::new(mid.x, mid.y - offset);
	}
	let (nx, ny) = (-(b.y - a.y) / len, (b.x - a.x) / len);
	Point::new(mid.x + nx * offset, mid.y + ny * offset)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn distance_is_euclidean() {
		assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
	}

	#[test]
	fn rect_excludes_far_edges() {
		let r = Rect::new(0.0, 0.0, 400.0, 600.0);
		assert!(r.contains(Point::new(0.0, 0.0)));
		assert!(r.contains(Point::new(399.5, 10.0)));
		assert!(!r.contains(Point::new(400.0, 10.0)));
		assert!(!r.contains(Point::new(10.0, -1.0)));
	}

	#[test]
	fn bezier_hits_both_endpoints() {
		let (a, b) = (Point::new(0.0, 0.0), Point::new(10.0, 0.0));
		let c = curve_control(a, b, 5.0);
		assert_eq!(c, Point::new(5.0, 5.0));

		let pts = quadratic_bezier(a, c, b, 8);
		assert_eq!(pts.len(), 9);
		assert_eq!(pts[0], a);
		assert_eq!(pts[8], b);
		// apex of a symmetric quadratic curve sits halfway to the control point
		assert!((pts[4].y - 2.5).abs() < 1e-9);
	}
}
