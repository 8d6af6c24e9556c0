
//! Per-frame assembly of screen-space lines.

use {
    crate::{
        config::RenderConfig,
        math::{*, transform::transform},
        scene::Scene,
        wireframe,
    },
    rgb::RGBA8,
};

/// Unpacks a `0xRRGGBBAA` color.
pub const fn rgba(packed: u32) -> RGBA8 {
    RGBA8 {
        r: (packed >> 24) as u8,
        g: (packed >> 16) as u8,
        b: (packed >>  8) as u8,
        a:  packed        as u8,
    }
}

pub const GRID_COLOR:  RGBA8 = rgba(0xAAAAAAFF);
pub const HIT_COLOR:   RGBA8 = rgba(0xFF0000FF);
pub const MISS_COLOR:  RGBA8 = rgba(0xFFFFFFFF);
pub const PLANE_COLOR: RGBA8 = rgba(0x0000FFFF);

/// A line in pixel coordinates, ready for the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLine {
    pub from:  V2i32,
    pub to:    V2i32,
    pub color: RGBA8,
}

/// World-to-pixel mapping for one frame.
pub struct Projector {
    view_projection: M4,
    viewport:        M4,
}

impl Projector {
    pub fn new(view_projection: M4, viewport: M4) -> Projector {
        Projector { view_projection, viewport }
    }

    /// Pixel position of `p`, truncated towards zero.
    pub fn project(&self, p: &P3) -> V2i32 {
        let clip = transform(p, &self.view_projection);
        let screen = transform(&clip, &self.viewport);
        V2i32::new(screen.x as i32, screen.y as i32)
    }

    pub fn line(&self, segment: &Segment, color: RGBA8) -> ScreenLine {
        ScreenLine {
            from: self.project(&segment.source()),
            to:   self.project(&segment.destination()),
            color,
        }
    }
}

/// Everything drawn in one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub hit:   bool,
    pub lines: Vec<ScreenLine>,
}

impl Frame {
    /// Runs the whole pipeline for `scene`: camera matrices, the collision
    /// test, then the grid, sphere and plane wireframes in that order.
    pub fn build(scene: &Scene, config: &RenderConfig, viewport: &M4) -> Frame {
        let projector = Projector::new(scene.camera.view_projection(config), *viewport);
        let hit = scene.is_hit();
        let sphere_color = if hit { HIT_COLOR } else { MISS_COLOR };

        let grid   = wireframe::grid().map(|s| projector.line(&s, GRID_COLOR));
        let sphere = wireframe::sphere(&scene.sphere).map(|s| projector.line(&s, sphere_color));
        let plane  = wireframe::plane(&scene.plane).map(|s| projector.line(&s, PLANE_COLOR));

        let lines = grid.chain(sphere).chain(plane).collect();
        Frame { hit, lines }
    }
}
