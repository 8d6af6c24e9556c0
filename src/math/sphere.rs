
use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: P3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: P3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }

    /// Point on the surface at latitude `lat` (from -pi/2 at the bottom) and
    /// longitude `lon`, with y as the polar axis.
    pub fn surface_point(&self, lat: f32, lon: f32) -> P3 {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        self.center + self.radius * V3::new(cos_lat * cos_lon, sin_lat, cos_lat * sin_lon)
    }
}

/// Contact between a sphere and a plane.
#[derive(Clone, Copy, Debug)]
pub struct Intersection {
    /// Signed distance from the plane to the sphere's center.
    pub distance: f32,
}

impl Intersect<Plane> for Sphere {
    type Intersection = Intersection;

    fn intersect(&self, plane: &Plane) -> Option<Intersection> {
        let distance = plane.signed_distance(&self.center);
        if distance.abs() <= self.radius {
            Some(Intersection { distance })
        }
        else {
            None
        }
    }
}

/// Whether `sphere` touches or crosses the infinite `plane`.
///
/// Tangent contact counts. A negative radius never collides.
pub fn is_sphere_plane_collision(sphere: &Sphere, plane: &Plane) -> bool {
    sphere.intersect(plane).is_some()
}
