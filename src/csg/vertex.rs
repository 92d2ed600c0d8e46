use crate::math::{Point3, Vector3};

/// A polygon corner: position plus interpolable attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3,
    pub normal: Option<Vector3>,
}

impl Vertex {
    #[must_use]
    pub fn new(pos: Point3) -> Self {
        Self { pos, normal: None }
    }

    #[must_use]
    pub fn with_normal(pos: Point3, normal: Vector3) -> Self {
        Self {
            pos,
            normal: Some(normal),
        }
    }

    /// Reverses orientation-dependent attributes in place.
    pub fn flip(&mut self) {
        if let Some(n) = self.normal.as_mut() {
            *n = -*n;
        }
    }

    /// Linear blend towards `other` at parameter `t`.
    ///
    /// Evaluated as `self * (1 - t) + other * t`, so `t = 0` and `t = 1`
    /// return the endpoints exactly. A normal is carried only when both
    /// endpoints have one.
    #[must_use]
    pub fn interpolate(&self, other: &Vertex, t: f64) -> Vertex {
        let s = 1.0 - t;
        let pos = Point3::from(self.pos.coords * s + other.pos.coords * t);
        let normal = match (self.normal, other.normal) {
            (Some(a), Some(b)) => Some(a * s + b * t),
            _ => None,
        };
        Vertex { pos, normal }
    }
}

impl From<Point3> for Vertex {
    fn from(pos: Point3) -> Self {
        Self::new(pos)
    }
}
