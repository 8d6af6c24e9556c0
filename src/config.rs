
use {
    crate::{
        math::{*, transform::{Perspective, Viewport}},
        scene::{Camera, Scene},
    },
    structopt::StructOpt,
    thiserror::Error,
};

pub const WINDOW_TITLE: &str = "sphere vs plane";

pub const SCREEN_WIDTH:  u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 720;

pub const FOV_Y_DEGREES: f32 = 60.;
pub const NEAR_Z:        f32 = 0.1;
pub const FAR_Z:         f32 = 100.;

pub const MIN_DEPTH: f32 = 0.;
pub const MAX_DEPTH: f32 = 1.;

/// Fixed projection and screen mapping for the render target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub perspective: Perspective,
    pub viewport:    Viewport,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        let (w, h) = (SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
        RenderConfig {
            perspective: Perspective::new(FOV_Y_DEGREES * (PI / 180.), w / h, NEAR_Z, FAR_Z),
            viewport:    Viewport::new(0., 0., w, h, MIN_DEPTH, MAX_DEPTH),
        }
    }
}

impl RenderConfig {
    /// Size of the render target in pixels.
    pub fn target_dims(&self) -> V2 {
        V2::new(self.viewport.width, self.viewport.height)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseVectorError {
    #[error("expected 3 comma-separated components, got {0}")]
    Components(usize),
    #[error("bad component {0:?}: {1}")]
    Component(String, std::num::ParseFloatError),
}

/// Parses `x,y,z`.
pub fn parse_v3(src: &str) -> Result<V3, ParseVectorError> {
    let parts: Vec<&str> = src.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseVectorError::Components(parts.len()));
    }

    let mut xyz = [0f32; 3];
    for (out, part) in xyz.iter_mut().zip(parts.iter()) {
        *out = part.parse()
            .map_err(|err| ParseVectorError::Component(part.to_string(), err))?;
    }

    Ok(V3::from(xyz))
}

/// Sphere/plane collision viewer.
///
/// Tab or 1-6 picks the parameter to edit; arrow keys and PageUp/PageDown
/// drag its x, y and z (hold Shift to go faster). Escape quits.
#[derive(Debug, StructOpt)]
#[structopt(name = "rk-collide")]
pub struct Opt {
    /// Camera position as x,y,z
    #[structopt(long, default_value = "0,-4,-10", parse(try_from_str = parse_v3), allow_hyphen_values = true)]
    pub camera_translate: V3,

    /// Camera Euler angles in radians as x,y,z
    #[structopt(long, default_value = "-0.2,0,0", parse(try_from_str = parse_v3), allow_hyphen_values = true)]
    pub camera_rotate: V3,

    /// Sphere center as x,y,z
    #[structopt(long, default_value = "0,1,0", parse(try_from_str = parse_v3), allow_hyphen_values = true)]
    pub sphere_center: V3,

    #[structopt(long, default_value = "1", allow_hyphen_values = true)]
    pub sphere_radius: f32,

    /// A point on the plane as x,y,z
    #[structopt(long, default_value = "0,0,0", parse(try_from_str = parse_v3), allow_hyphen_values = true)]
    pub plane_point: V3,

    /// Plane normal as x,y,z; need not be unit length
    #[structopt(long, default_value = "0,1,0", parse(try_from_str = parse_v3), allow_hyphen_values = true)]
    pub plane_normal: V3,
}

impl Opt {
    pub fn scene(&self) -> Scene {
        Scene {
            camera: Camera {
                translate: self.camera_translate,
                rotate:    self.camera_rotate,
            },
            sphere: Sphere::new(P3::from(self.sphere_center), self.sphere_radius),
            plane:  Plane::from_point_and_normal(P3::from(self.plane_point), self.plane_normal),
        }
    }
}
