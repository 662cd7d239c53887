use crate::geometry::{errors::GeometryError, ray::Ray, vector3::{Color, Vector3}};
use crate::scene::{scene::Scene, scene_object::SceneObject};

/// Resolves the color seen along `ray`: the sphere's surface normal remapped to RGB
/// when the sphere is hit in front of the ray origin, the background gradient otherwise.
pub fn ray_color(ray: &Ray, scene: &Scene) -> Result<Color, GeometryError> {
    let sphere = scene.sphere();

    if let Some(intersection) = sphere.check_intersection(ray) {
        if intersection.is_in_front() {
            let normal = sphere.normal_at(&intersection.point(ray))?;
            return Ok(normal_color(&normal));
        }
    }

    scene.background().color(ray.direction())
}

/// Maps each component of a unit normal from [-1, 1] to [0, 1].
pub fn normal_color(normal: &Vector3) -> Color {
    0.5 * Color::new(normal.x + 1.0, normal.y + 1.0, normal.z + 1.0)
}
