
pub mod linear;
pub use linear::Segment;

pub mod planar;
pub use planar::Plane;

pub mod sphere;
pub use sphere::Sphere;

pub mod transform;

pub use nalgebra as na;

pub trait Intersect<With> {
    type Intersection;
    fn intersect(&self, other: &With) -> Option<Self::Intersection>;
}

pub type V2<T = f32> = na::Vector2<T>;
pub type V3<T = f32> = na::Vector3<T>;

pub type P3<T = f32> = na::Point3<T>;

pub type V2i32 = V2<i32>;

pub type M4<T = f32> = na::Matrix4<T>;

pub const PI: f32 = std::f32::consts::PI;

/// Vectors at or below this length are too short to normalize.
pub const NORMALIZE_EPSILON: f32 = 0.0001;

/// Scales `v` to unit length.
///
/// Vectors no longer than [`NORMALIZE_EPSILON`] come back untouched rather
/// than as zero or NaN, so a caller that needs a guaranteed unit vector must
/// not pass in a degenerate one.
pub fn normalize(v: &V3) -> V3 {
    v.try_normalize(NORMALIZE_EPSILON)
        .unwrap_or(*v)
}
