use std::ops::Range;

use super::error::ConfigError;
use super::geometry::Rect;
use super::types::Point;

/// Smallest vertex or edge target accepted on the start screen.
pub const MIN_COUNT: usize = 4;

pub const WINDOW_WIDTH: f64 = 1200.0;
pub const WINDOW_HEIGHT: f64 = 600.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SandboxConfig {
	pub vertex_target: usize,
	pub edge_target: usize,
	pub drawing_area: Rect,
	pub layout_area: Rect,
	pub vertex_radius: f64,
	pub layout_vertex_radius: f64,
	/// `None` picks the nearest vertex however far away the click lands.
	pub hit_radius: Option<f64>,
	pub layout_radius: f64,
	pub jitter: Range<f64>,
	pub curve_samples: usize,
	pub curve_offset: f64,
	pub loop_scale_step: f64,
}

impl SandboxConfig {
	pub fn new(vertex_target: usize, edge_target: usize) -> Result<Self, ConfigError> {
		for count in [vertex_target, edge_target] {
			if count < MIN_COUNT {
				return Err(ConfigError::BelowMinimum(count));
			}
		}
		Ok(Self {
			vertex_target,
			edge_target,
			drawing_area: Rect::new(0.0, 0.0, 400.0, WINDOW_HEIGHT),
			layout_area: Rect::new(400.0, 0.0, 800.0, WINDOW_HEIGHT),
			vertex_radius: 10.0,
			layout_vertex_radius: 5.0,
			hit_radius: Some(18.0),
			layout_radius: 100.0,
			jitter: -40.0..60.0,
			curve_samples: 20,
			curve_offset: 24.0,
			loop_scale_step: 0.1,
		})
	}

	pub fn with_hit_radius(mut self, hit_radius: Option<f64>) -> Self {
		self.hit_radius = hit_radius;
		self
	}

	/// Centers of the two auxiliary layouts: the left and right quarters of the layout area.
	pub fn layout_centers(&self) -> (Point, Point) {
		let a = &self.layout_area;
		let y = a.top + a.height / 2.0;
		(
			Point::new(a.left + a.width / 4.0, y),
			Point::new(a.left + a.width * 3.0 / 4.0, y),
		)
	}
}

/// Parses a count typed by the user: ASCII digits only, at least [`MIN_COUNT`].
pub fn parse_count(text: &str) -> Result<usize, ConfigError> {
	let text = text.trim();
	if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
		return Err(ConfigError::NotANumber);
	}
	let n = text.parse::<usize>().map_err(|_| ConfigError::NotANumber)?;
	if n < MIN_COUNT {
		return Err(ConfigError::BelowMinimum(n));
	}
	Ok(n)
}
