use crate::geometry::{errors::GeometryError, ray::Ray, vector3::{Point3, Vector3}};
use crate::render::intersection::Intersection;

pub trait SceneObject {

    fn check_intersection(&self, ray: &Ray) -> Option<Intersection>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: &Point3) -> Result<Vector3, GeometryError>;
}
