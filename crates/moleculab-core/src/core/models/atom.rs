use super::ids::AtomId;
use crate::core::catalog::Element;
use nalgebra::{Point3, Vector3};

/// A particle owned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Engine-assigned identifier.
    pub id: AtomId,
    /// Element identity, resolved against the catalog for mass and radius.
    pub element: Element,
    /// Position in Angstroms.
    pub position: Point3<f64>,
    /// Velocity in Angstroms per second of simulated time.
    pub velocity: Vector3<f64>,
    /// Formal charge in elementary charge units. Carried for consumers, ignored by the physics.
    pub charge: f64,
}

impl Atom {
    /// Creates an atom at rest with zero charge.
    pub fn new(id: AtomId, element: Element, position: Point3<f64>) -> Self {
        Self {
            id,
            element,
            position,
            velocity: Vector3::zeros(),
            charge: 0.0,
        }
    }

    #[inline]
    pub fn speed_squared(&self) -> f64 {
        self.velocity.norm_squared()
    }
}
