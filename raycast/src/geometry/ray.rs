use super::errors::GeometryError;
use super::vector3::{Point3, Vector3};

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {

    /// Direction is stored as given, without normalization, but must not be zero.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self, GeometryError> {
        if direction.length_squared() == 0.0 {
            return Err(GeometryError::ZeroLengthDirection);
        }

        Ok(Ray {
            origin,
            direction,
        })
    }

    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
