
use super::*;

/// An infinite plane through `point`, facing along `normal`.
///
/// The normal is kept exactly as given, so it may be any length; it is only
/// normalized when a distance is measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point:  P3,
    pub normal: V3,
}

impl Plane {
    pub fn from_point_and_normal(point: P3, normal: V3) -> Plane {
        Plane { point, normal }
    }

    /// Distance from the plane to `p`, positive on the side the normal points
    /// towards.
    pub fn signed_distance(&self, p: &P3) -> f32 {
        let n = normalize(&self.normal);
        (p - self.point).dot(&n)
    }
}
