
//! World-to-screen transforms.
//!
//! Matrices here use the row-vector convention: a point is transformed as
//! `p * M`, so translations live in the bottom row and `A * B` applies `A`
//! first.

use super::*;

pub fn rotation_x(angle: f32) -> M4 {
    let (s, c) = angle.sin_cos();
    M4::new(
        1., 0., 0., 0.,
        0.,  c, -s, 0.,
        0.,  s,  c, 0.,
        0., 0., 0., 1.,
    )
}

pub fn rotation_y(angle: f32) -> M4 {
    let (s, c) = angle.sin_cos();
    M4::new(
         c, 0.,  s, 0.,
        0., 1., 0., 0.,
        -s, 0.,  c, 0.,
        0., 0., 0., 1.,
    )
}

pub fn rotation_z(angle: f32) -> M4 {
    let (s, c) = angle.sin_cos();
    M4::new(
         c, -s, 0., 0.,
         s,  c, 0., 0.,
        0., 0., 1., 0.,
        0., 0., 0., 1.,
    )
}

/// Euler rotation, applied z then x then y.
pub fn rotation(euler: &V3) -> M4 {
    rotation_z(euler.z) * rotation_x(euler.x) * rotation_y(euler.y)
}

pub fn translation(offset: &V3) -> M4 {
    M4::new(
        1.,       0.,       0.,       0.,
        0.,       1.,       0.,       0.,
        0.,       0.,       1.,       0.,
        offset.x, offset.y, offset.z, 1.,
    )
}

/// World-to-view transform for a camera placed at `translate` and turned by
/// `rotate`.
pub fn view(translate: &V3, rotate: &V3) -> M4 {
    translation(&-translate) * rotation(rotate)
}

/// Perspective projection with depth mapped to `[0, 1]` and view-space z
/// carried into w.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    pub fov_y:  f32,
    pub aspect: f32,
    pub near:   f32,
    pub far:    f32,
}

impl Perspective {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Perspective {
        Perspective { fov_y, aspect, near, far }
    }

    pub fn matrix(&self) -> M4 {
        let f = 1. / (self.fov_y / 2.).tan();
        let depth = self.far - self.near;
        let mut m = M4::zeros();
        m[(0, 0)] = f / self.aspect;
        m[(1, 1)] = f;
        m[(2, 2)] = self.far / depth;
        m[(2, 3)] = (-self.near * self.far) / depth;
        m[(3, 2)] = 1.;
        m
    }
}

pub fn view_projection(translate: &V3, rotate: &V3, perspective: &Perspective) -> M4 {
    view(translate, rotate) * perspective.matrix()
}

/// Pixel rectangle and depth range that normalized device coordinates are
/// mapped onto. Screen y grows downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left:      f32,
    pub top:       f32,
    pub width:     f32,
    pub height:    f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32, min_depth: f32, max_depth: f32)
        -> Viewport
    {
        Viewport { left, top, width, height, min_depth, max_depth }
    }

    pub fn matrix(&self) -> M4 {
        let mut m = M4::zeros();
        m[(0, 0)] = self.width * 0.5;
        m[(1, 1)] = -self.height * 0.5;
        m[(2, 2)] = self.max_depth - self.min_depth;
        m[(3, 0)] = self.left + self.width * 0.5;
        m[(3, 1)] = self.top + self.height * 0.5;
        m[(3, 2)] = self.min_depth;
        m[(3, 3)] = 1.;
        m
    }
}

/// Transforms `point` as `(x, y, z, 1) * m`, then divides through by w.
///
/// When w comes out exactly zero the divide is skipped and the raw x, y, z
/// are returned; nothing is culled or clamped.
pub fn transform(point: &P3, m: &M4) -> P3 {
    let h = point.to_homogeneous().transpose() * m;
    let w = h[3];
    if w != 0. {
        P3::new(h[0] / w, h[1] / w, h[2] / w)
    }
    else {
        P3::new(h[0], h[1], h[2])
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        approx::{assert_relative_eq, relative_eq},
    };

    fn standard_perspective() -> Perspective {
        Perspective::new(60. * (PI / 180.), 1280. / 720., 0.1, 100.)
    }

    #[test]
    fn identity_transform() {
        let ps = [P3::new(1., 2., 3.), P3::origin(), P3::new(-4.5, 0.25, -1e3)];
        for p in ps.iter() {
            assert_eq!(transform(p, &M4::identity()), *p);
        }
    }

    #[test]
    fn zero_w_skips_divide() {
        // w' = z, so a point with z = 0 has nothing to divide by
        let mut m = M4::identity();
        m[(2, 3)] = 1.;
        m[(3, 3)] = 0.;
        m[(3, 0)] = 5.;

        let p = transform(&P3::new(2., 3., 0.), &m);
        assert_eq!(p, P3::new(7., 3., 0.));

        let p = transform(&P3::new(2., 3., 2.), &m);
        assert_eq!(p, P3::new(3.5, 1.5, 1.));
    }

    #[test]
    fn translation_moves_points() {
        let m = translation(&V3::new(1., -2., 3.));
        assert_eq!(transform(&P3::new(1., 1., 1.), &m), P3::new(2., -1., 4.));
    }

    #[test]
    fn elementary_rotations() {
        let quarter = PI / 2.;
        assert_relative_eq!(
            transform(&P3::new(0., 1., 0.), &rotation_x(quarter)),
            P3::new(0., 0., -1.), epsilon = 1e-6);
        assert_relative_eq!(
            transform(&P3::new(0., 0., 1.), &rotation_y(quarter)),
            P3::new(-1., 0., 0.), epsilon = 1e-6);
        assert_relative_eq!(
            transform(&P3::new(1., 0., 0.), &rotation_z(quarter)),
            P3::new(0., -1., 0.), epsilon = 1e-6);
    }

    #[test]
    fn rotation_order_is_z_x_y() {
        let euler = V3::new(0.3, -1.1, 0.7);
        let expected = rotation_z(euler.z) * rotation_x(euler.x) * rotation_y(euler.y);
        assert_eq!(rotation(&euler), expected);

        let other = rotation_x(euler.x) * rotation_y(euler.y) * rotation_z(euler.z);
        assert!(!relative_eq!(rotation(&euler), other, epsilon = 1e-3));
    }

    #[test]
    fn view_moves_camera_to_origin() {
        let eye = V3::new(3., -4., 10.);
        let v = view(&eye, &V3::zeros());
        assert_eq!(transform(&P3::from(eye), &v), P3::origin());
    }

    #[test]
    fn perspective_layout() {
        let m = standard_perspective().matrix();
        let f = 1. / (PI / 6.).tan();
        assert_relative_eq!(m[(0, 0)], f / (1280. / 720.), max_relative = 1e-5);
        assert_relative_eq!(m[(1, 1)], f, max_relative = 1e-5);
        assert_relative_eq!(m[(2, 2)], 100. / 99.9, max_relative = 1e-5);
        assert_relative_eq!(m[(2, 3)], -10. / 99.9, max_relative = 1e-5);
        assert_eq!(m[(3, 2)], 1.);
        assert_eq!(m[(3, 3)], 0.);
        assert_eq!(m[(0, 1)], 0.);
    }

    #[test]
    fn perspective_depth_values() {
        // z' = z * far / (far - near) + 1 and w' = -z * near * far / (far - near)
        let p = standard_perspective();
        let m = p.matrix();
        let depth = |z: f32| {
            let span = p.far - p.near;
            (z * p.far / span + 1.) / (-z * p.near * p.far / span)
        };
        let near = transform(&P3::new(0., 0., p.near), &m).z;
        let far  = transform(&P3::new(0., 0., p.far),  &m).z;
        assert_relative_eq!(near, depth(p.near), max_relative = 1e-4);
        assert_relative_eq!(far,  depth(p.far),  max_relative = 1e-4);
        assert_relative_eq!(near, -109.9, max_relative = 1e-4);
        assert_relative_eq!(far,  -10.1,  max_relative = 1e-4);
    }

    #[test]
    fn resting_camera_is_pure_projection() {
        let p = standard_perspective();
        let vp = view_projection(&V3::zeros(), &V3::zeros(), &p);
        assert_relative_eq!(vp, p.matrix(), epsilon = 1e-6);
    }

    #[test]
    fn viewport_corners() {
        let vp = Viewport::new(0., 0., 1280., 720., 0., 1.).matrix();
        assert_eq!(transform(&P3::new(-1.,  1., 0.), &vp), P3::new(0., 0., 0.));
        assert_eq!(transform(&P3::new( 1., -1., 1.), &vp), P3::new(1280., 720., 1.));
        assert_eq!(transform(&P3::new( 0.,  0., 0.5), &vp), P3::new(640., 360., 0.5));

        let vp = Viewport::new(10., 20., 100., 50., 0.25, 0.75).matrix();
        assert_eq!(transform(&P3::new(-1., 1., 0.), &vp), P3::new(10., 20., 0.25));
        assert_eq!(transform(&P3::new( 1., -1., 1.), &vp), P3::new(110., 70., 0.75));
    }
}
