use crate::geometry::ray::Ray;
use crate::geometry::vector3::Point3;

/// Where along a ray an object was hit. The distance is the ray parameter `t` and
/// may be negative when the hit lies behind the ray origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {

    ray_distance: f64,
}

impl Intersection {

    pub fn new(ray_distance: f64) -> Self {
        Self {
            ray_distance,
        }
    }

    pub fn ray_distance(&self) -> f64 {
        self.ray_distance
    }

    pub fn is_in_front(&self) -> bool {
        self.ray_distance > 0.0
    }

    pub fn point(&self, ray: &Ray) -> Point3 {
        ray.at(self.ray_distance)
    }
}
