use nalgebra::{Point3, Unit, Vector3};

/// A half-line with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Unit<Vector3<f64>>,
}

impl Ray {
    /// Builds a ray, normalizing `direction`.
    ///
    /// Returns `None` if any component is non-finite or the direction has zero length.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Option<Self> {
        if !origin.coords.iter().all(|c| c.is_finite())
            || !direction.iter().all(|c| c.is_finite())
        {
            return None;
        }
        let direction = Unit::try_new(direction, 1e-12)?;
        Some(Self { origin, direction })
    }

    #[inline]
    pub fn point_at(&self, distance: f64) -> Point3<f64> {
        self.origin + self.direction.into_inner() * distance
    }

    /// Distance along the ray to the first intersection with a sphere.
    ///
    /// A ray starting inside the sphere reports the exit point. Intersections
    /// behind the origin are ignored.
    pub fn sphere_hit(&self, center: &Point3<f64>, radius: f64) -> Option<f64> {
        let to_center = *center - self.origin;
        let projection = to_center.dot(&self.direction.into_inner());
        let closest_sq = to_center.norm_squared() - projection * projection;
        let radius_sq = radius * radius;
        if closest_sq > radius_sq {
            return None;
        }

        let half_chord = (radius_sq - closest_sq).sqrt();
        let near = projection - half_chord;
        let far = projection + half_chord;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}
