
//! Wireframe line sets for the ground grid, the sphere and the plane.
//!
//! All generators are pure and yield world-space segments; topology never
//! depends on the input, only positions do.

use {
    crate::math::*,
    std::iter,
};

pub const GRID_HALF_WIDTH:     f32 = 2.;
pub const GRID_SUBDIVISIONS:   u32 = 10;
pub const SPHERE_SUBDIVISIONS: u32 = 16;
pub const PLANE_HALF_EXTENT:   f32 = 2.;

/// Square grid on `y = 0`: the lines of constant x, then those of constant z.
pub fn grid() -> impl Iterator<Item = Segment> {
    const H: f32 = GRID_HALF_WIDTH;
    let every = (H * 2.) / GRID_SUBDIVISIONS as f32;
    let offset = move |i: u32| -H + i as f32 * every;

    let along_z = (0 ..= GRID_SUBDIVISIONS)
        .map(move |i| {
            let x = offset(i);
            Segment::new(P3::new(x, 0., -H), P3::new(x, 0., H))
        });

    let along_x = (0 ..= GRID_SUBDIVISIONS)
        .map(move |i| {
            let z = offset(i);
            Segment::new(P3::new(-H, 0., z), P3::new(H, 0., z))
        });

    along_z.chain(along_x)
}

/// Latitude/longitude wireframe of `sphere`.
///
/// Each cell contributes two edges from its first corner, one towards the
/// next latitude and one towards the next longitude. The far edges of a cell
/// are left to its neighbours, so the topmost ring of cells is never closed.
pub fn sphere(sphere: &Sphere) -> impl Iterator<Item = Segment> {
    const N: u32 = SPHERE_SUBDIVISIONS;
    let lat_every = PI / N as f32;
    let lon_every = 2. * PI / N as f32;
    let sphere = *sphere;

    (0 .. N).flat_map(move |lat_index| {
        let lat = -PI / 2. + lat_every * lat_index as f32;
        (0 .. N).flat_map(move |lon_index| {
            let lon = lon_index as f32 * lon_every;
            let a = sphere.surface_point(lat,             lon);
            let b = sphere.surface_point(lat + lat_every, lon);
            let c = sphere.surface_point(lat,             lon + lon_every);
            iter::once(Segment::new(a, b))
                .chain(iter::once(Segment::new(a, c)))
        })
    })
}

/// Closed square outline around `plane.point`.
///
/// The square always lies parallel to the XZ plane; the normal is not
/// consulted.
pub fn plane(plane: &Plane) -> impl Iterator<Item = Segment> {
    const S: f32 = PLANE_HALF_EXTENT;
    let p = plane.point;
    let corners = [
        p + V3::new(-S, 0., -S),
        p + V3::new( S, 0., -S),
        p + V3::new( S, 0.,  S),
        p + V3::new(-S, 0.,  S),
    ];

    (0 .. corners.len())
        .map(move |i| Segment::new(corners[i], corners[(i + 1) % corners.len()]))
}
