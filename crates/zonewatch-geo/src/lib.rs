use serde::{Deserialize, Serialize};

/// Tolerance for the collinearity test in `point_on_segment`. Coordinates
/// are degree-scale, so exact boundary hits produce a cross product of
/// zero and this only absorbs float noise.
const EDGE_EPSILON: f64 = 1e-9;

/// Planar coordinate. Axis order is GIS-standard: `x` is longitude,
/// `y` is latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: Point) -> bool {
        point.y <= self.north
            && point.y >= self.south
            && point.x <= self.east
            && point.x >= self.west
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneShape {
    Circle { center: Point, radius: f64 },
    Polygon { vertices: Vec<Point> },
    Box { bounds: BoundingBox },
}

impl ZoneShape {
    /// Boundary-inclusive containment test. Points exactly on a polygon
    /// edge, circle rim, or box edge are inside.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            ZoneShape::Circle { center, radius } => {
                let dx = point.x - center.x;
                let dy = point.y - center.y;
                dx * dx + dy * dy <= radius * radius
            }
            ZoneShape::Polygon { vertices } => point_in_polygon(point, vertices),
            ZoneShape::Box { bounds } => bounds.contains(point),
        }
    }

    /// Structural validation, run once at zone registration.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            ZoneShape::Circle { center, radius } => {
                if !center.x.is_finite() || !center.y.is_finite() {
                    return Err("circle center must be finite".to_string());
                }
                if !radius.is_finite() || *radius < 0.0 {
                    return Err("circle radius must be non-negative".to_string());
                }
                Ok(())
            }
            ZoneShape::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err("polygon must have at least 3 vertices".to_string());
                }
                if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
                    return Err("polygon vertices must be finite".to_string());
                }
                Ok(())
            }
            ZoneShape::Box { bounds } => {
                let values = [bounds.north, bounds.south, bounds.east, bounds.west];
                if values.iter().any(|v| !v.is_finite()) {
                    return Err("box bounds must be finite".to_string());
                }
                if bounds.south > bounds.north || bounds.west > bounds.east {
                    return Err("box bounds must satisfy south <= north and west <= east".to_string());
                }
                Ok(())
            }
        }
    }
}

/// Even-odd ray casting over the implicitly closed vertex list.
///
/// Each edge is first checked for the point lying exactly on it, which
/// makes the test boundary-inclusive; plain crossing counts leave edge
/// points ambiguous.
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        if point_on_segment(point, a, b) {
            return true;
        }
        // Half-open vertical rule: each vertex counts for exactly one of
        // its two edges, so a ray through a vertex is not double-counted.
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross.abs() > EDGE_EPSILON {
        return false;
    }
    p.x >= a.x.min(b.x) - EDGE_EPSILON
        && p.x <= a.x.max(b.x) + EDGE_EPSILON
        && p.y >= a.y.min(b.y) - EDGE_EPSILON
        && p.y <= a.y.max(b.y) + EDGE_EPSILON
}
