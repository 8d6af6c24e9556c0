
use {
    crate::{
        config::RenderConfig,
        controls::{Controls, Inputs},
        gl,
        lines::LineBatch,
        math::*,
        render::Frame,
        scene::Scene,
        shader,
    },
};

pub struct Viewer {
    config:   RenderConfig,
    viewport: M4,
    scene:    Scene,
    controls: Controls,
    batch:    LineBatch,
    frame:    Frame,
}

impl Viewer {
    pub fn new(config: RenderConfig, scene: Scene) -> Result<Viewer, shader::Error> {
        let batch = LineBatch::new()?;

        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Disable(gl::DEPTH_TEST);
        }

        // the render target never changes size
        let viewport = config.viewport.matrix();
        let frame = Frame::build(&scene, &config, &viewport);

        let viewer = Viewer {
            config,
            viewport,
            scene,
            controls: Controls::new(),
            batch,
            frame,
        };

        Ok(viewer)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn is_hit(&self) -> bool {
        self.frame.hit
    }

    pub fn tick(&mut self, inputs: &Inputs) {
        self.controls.apply(inputs, &mut self.scene);
        self.frame = Frame::build(&self.scene, &self.config, &self.viewport);
    }

    pub fn draw(&mut self, window_dims: V2) {
        unsafe {
            gl::Viewport(0, 0, window_dims.x as i32, window_dims.y as i32);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        for line in &self.frame.lines {
            self.batch.push(line);
        }
        self.batch.flush(self.config.target_dims());
    }
}
