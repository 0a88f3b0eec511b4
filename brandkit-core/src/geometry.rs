use serde::{Deserialize, Serialize};

/// A 2D point in artwork units (SVG user units, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Box spanning `width` × `height` with its top-left corner at `origin`.
    pub fn from_origin(origin: Point, width: f64, height: f64) -> Self {
        Self {
            min: origin,
            max: origin.translate(width, height),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn union(&self, other: &BBox) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// A rectangle with uniformly rounded corners, positioned by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner radius.
    pub rx: f64,
}

impl RoundedRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64, rx: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx,
        }
    }

    pub fn bbox(&self) -> BBox {
        BBox::from_origin(Point::new(self.x, self.y), self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_union() {
        let a = BBox::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = BBox::new(Point::new(5.0, -2.0), Point::new(15.0, 8.0));
        let u = a.union(&b);
        assert_eq!(u.min, Point::new(0.0, -2.0));
        assert_eq!(u.max, Point::new(15.0, 10.0));
        assert!((u.width() - 15.0).abs() < 1e-10);
        assert!((u.height() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_rounded_rect_bbox() {
        let r = RoundedRect::new(8.2, 10.3, 30.2, 8.2, 4.1);
        let b = r.bbox();
        assert!((b.max.x - 38.4).abs() < 1e-10);
        assert!((b.max.y - 18.5).abs() < 1e-10);
    }
}
