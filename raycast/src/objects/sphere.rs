use crate::geometry::{errors::GeometryError, ray::Ray, vector3::{Point3, Vector3}};
use crate::render::intersection::Intersection;
use crate::scene::scene_object::SceneObject;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {

    center: Point3,
    radius: f64,
}

impl Sphere {

    pub fn new(center: Point3, radius: f64) -> Result<Self, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius { radius });
        }

        Ok(Self {
            center,
            radius,
        })
    }

    pub fn center(&self) -> &Point3 {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl SceneObject for Sphere {

    fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        hit_sphere(&self.center, self.radius, ray).map(Intersection::new)
    }

    fn normal_at(&self, point: &Point3) -> Result<Vector3, GeometryError> {
        (point - &self.center).unit_vector()
    }
}

/// Returns the ray parameter of the nearer root of the ray/sphere equation, or `None`
/// when the ray misses. The root is returned even when it is negative; the far root
/// is never considered.
pub fn hit_sphere(center: &Point3, radius: f64, ray: &Ray) -> Option<f64> {
    // |origin + t * direction - center|**2 = radius**2 expands to a quadratic in t with
    // b = -2h, where h = dot(direction, center - origin)
    let oc = center - ray.origin();
    let a = ray.direction().length_squared();
    let h = ray.direction().dot(&oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = h * h - a * c;

    if discriminant < 0.0 {
        return None;
    }

    Some((h - discriminant.sqrt()) / a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_sphere() -> Sphere {
        Sphere::new(Vector3::new(0.0, 0.0, -1.0), 0.5).unwrap()
    }

    #[test]
    fn test_hit_straight_into_center() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0)).unwrap();
        let t = hit_sphere(&Vector3::new(0.0, 0.0, -1.0), 0.5, &ray).unwrap();

        assert!((t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hit_does_not_depend_on_direction_length() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -4.0)).unwrap();
        let intersection = reference_sphere().check_intersection(&ray).unwrap();

        assert!((intersection.ray_distance() - 0.125).abs() < 1e-12);
        assert_eq!(intersection.point(&ray), Vector3::new(0.0, 0.0, -0.5));
    }

    #[test]
    fn test_miss_parallel() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(1.0, 0.0, 0.0)).unwrap();

        assert_eq!(hit_sphere(&Vector3::new(0.0, 0.0, -1.0), 0.5, &ray), None);
        assert!(reference_sphere().check_intersection(&ray).is_none());
    }

    #[test]
    fn test_tangent_ray_hits_once() {
        let ray = Ray::new(Vector3::new(0.5, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0)).unwrap();
        let t = hit_sphere(&Vector3::new(0.0, 0.0, -1.0), 0.5, &ray).unwrap();

        assert!((t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_behind_origin_returns_negative_root() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0)).unwrap();
        let intersection = reference_sphere().check_intersection(&ray).unwrap();

        assert!((intersection.ray_distance() + 1.5).abs() < 1e-12);
        assert!(!intersection.is_in_front());
    }

    #[test]
    fn test_origin_inside_returns_near_root_only() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, -1.0)).unwrap();
        let t = hit_sphere(&Vector3::new(0.0, 0.0, -1.0), 0.5, &ray).unwrap();

        assert!((t + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normal_at() {
        let sphere = reference_sphere();

        assert_eq!(sphere.normal_at(&Vector3::new(0.0, 0.5, -1.0)).unwrap(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(sphere.normal_at(&Vector3::new(0.0, 0.0, -1.0)), Err(GeometryError::ZeroLengthVector));
    }

    #[test]
    fn test_invalid_radius() {
        assert!(Sphere::new(Vector3::zero(), 0.0).is_err());
        assert!(Sphere::new(Vector3::zero(), -1.0).is_err());
        assert!(Sphere::new(Vector3::zero(), f64::NAN).is_err());
    }
}
