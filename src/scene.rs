
use crate::{
    config::RenderConfig,
    math::{*, transform},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub translate: V3,
    /// Euler angles in radians.
    pub rotate:    V3,
}

impl Camera {
    pub fn view_projection(&self, config: &RenderConfig) -> M4 {
        transform::view_projection(&self.translate, &self.rotate, &config.perspective)
    }
}

/// Everything the operator can edit. Owned by the frame driver and rebuilt
/// into geometry every frame; nothing here is validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub sphere: Sphere,
    pub plane:  Plane,
}

impl Default for Scene {
    fn default() -> Scene {
        Scene {
            camera: Camera {
                translate: V3::new(0., -4., -10.),
                rotate:    V3::new(-0.2, 0., 0.),
            },
            sphere: Sphere::new(P3::new(0., 1., 0.), 1.),
            plane:  Plane::from_point_and_normal(P3::origin(), V3::y()),
        }
    }
}

impl Scene {
    pub fn is_hit(&self) -> bool {
        sphere::is_sphere_plane_collision(&self.sphere, &self.plane)
    }

    /// Signed distance from the plane to the sphere's center.
    pub fn separation(&self) -> f32 {
        self.plane.signed_distance(&self.sphere.center)
    }
}
