
mod config;
mod controls;
mod gl;
mod lines;
mod math;
mod render;
mod scene;
mod shader;
mod viewer;
mod wireframe;

use {
    crate::{
        config::{Opt, RenderConfig},
        controls::{Inputs, Parameter},
        gl::types::*,
        math::*,
    },
    std::{
        ffi,
        ptr,
        time::{Duration, Instant},
        slice,
        str,
    },
    anyhow::{Context as _, Result},
    glutin::{
        dpi::PhysicalSize,
        event,
        event_loop::{ControlFlow, EventLoop},
        platform::unix::EventLoopWindowTargetExtUnix,
    },
    structopt::StructOpt,
};

type Event<'w> = event::Event<'w, ()>;

extern "system" fn on_gl_debug(
    _source:   GLenum,
    _type:     GLenum,
    _id:       GLuint,
    _severity: GLenum,
    length:    GLsizei,
    message:   *const GLchar,
    _user:     *mut ffi::c_void)
{
    let msg_slice = unsafe {
        slice::from_raw_parts(message as *const u8, length as usize)
    };

    log::debug!(
        "GL debug: {}",
        str::from_utf8(msg_slice)
            .unwrap_or("<error parsing debug message>")
    );
}

const FRAME_RATE: u64 = 60;

const TICK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE);

type Context = glutin::WindowedContext<glutin::PossiblyCurrent>;

fn title(hit: bool) -> String {
    format!("{} | Collision: {}", config::WINDOW_TITLE, if hit { "YES" } else { "NO" })
}

struct App {
    ctx:         Context,
    window_dims: V2,
    inputs:      Inputs,
    viewer:      viewer::Viewer,
    hit:         bool,
    quit:        bool,
}

impl App {
    fn new(ctx: Context, opt: &Opt) -> Result<App> {
        let config = RenderConfig::default();
        let viewer = viewer::Viewer::new(config, opt.scene())
            .context("setting up line renderer")?;

        let hit = viewer.is_hit();
        ctx.window().set_title(&title(hit));

        let app = App {
            ctx,
            window_dims: config.target_dims(),
            inputs: Inputs::new(),
            viewer,
            hit,
            quit: false,
        };

        Ok(app)
    }

    fn handle_event(&mut self, event: &Event) {
        use event::{Event::*, WindowEvent::*};
        if let WindowEvent { event, .. } = event {
            match event {
                Focused(false) => {
                    self.inputs.release();
                }

                Resized(new_size) => {
                    self.ctx.resize(*new_size);
                    self.window_dims = V2::new(new_size.width as f32, new_size.height as f32);
                }

                KeyboardInput {
                    input: event::KeyboardInput { state, virtual_keycode: Some(vk), ..  },
                    ..
                } => {
                    use event::VirtualKeyCode as VK;
                    let down = *state == event::ElementState::Pressed;
                    match vk {
                        VK::Right    => self.inputs.x_pos = down,
                        VK::Left     => self.inputs.x_neg = down,
                        VK::Up       => self.inputs.y_pos = down,
                        VK::Down     => self.inputs.y_neg = down,
                        VK::PageUp   => self.inputs.z_pos = down,
                        VK::PageDown => self.inputs.z_neg = down,
                        VK::LShift | VK::RShift => self.inputs.fast = down,
                        VK::Tab      => if down { self.inputs.cycle += 1; },
                        VK::Key1 | VK::Key2 | VK::Key3 | VK::Key4 | VK::Key5 | VK::Key6 => if down {
                            let n = *vk as usize - VK::Key1 as usize + 1;
                            self.inputs.select = Parameter::from_number(n);
                        },
                        VK::Escape   => self.quit = true,
                        _ => { }
                    }
                }

                _ => { }
            }
        }
    }

    fn tick(&mut self) {
        let inputs = self.inputs.take();
        self.viewer.tick(&inputs);

        let hit = self.viewer.is_hit();
        if hit != self.hit {
            self.hit = hit;
            log::info!(
                "collision {} (distance {:.3}, radius {:.3})",
                if hit { "started" } else { "ended" },
                self.viewer.scene().separation(),
                self.viewer.scene().sphere.radius
            );
            self.ctx.window().set_title(&title(hit));
        }

        self.viewer.draw(self.window_dims);
        if let Err(err) = self.ctx.swap_buffers() {
            log::error!("swap failed: {}", err);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();

    let event_q = EventLoop::new();
    log::info!(
        "Running on {}",
        if event_q.is_wayland() { "Wayland" } else { "X11" }
    );

    let ctx = {
        let win_builder = glutin::window::WindowBuilder::new()
            .with_title(config::WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(config::SCREEN_WIDTH, config::SCREEN_HEIGHT))
            .with_resizable(false);

        glutin::ContextBuilder::new()
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (4, 5)))
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl_debug_flag(true)
            .with_vsync(true)
            .build_windowed(win_builder, &event_q)
            .context("creating GL window")?
    };

    let ctx = unsafe {
        ctx.make_current()
            .map_err(|(_, err)| err)
            .context("making GL context current")?
    };

    gl::load_with(|sym| { ctx.get_proc_address(sym) as *const _ });

    {   let mut major: GLint = 0;
        let mut minor: GLint = 0;
        unsafe {
            gl::GetIntegerv(gl::MAJOR_VERSION, &mut major);
            gl::GetIntegerv(gl::MINOR_VERSION, &mut minor);
        }
        log::info!("Using OpenGL {}.{} Core profile", major, minor);
    }

    unsafe {
        gl::DebugMessageControl(
            gl::DONT_CARE,
            gl::DONT_CARE,
            gl::DONT_CARE,
            0, ptr::null(),
            gl::TRUE
        );
        gl::DebugMessageCallback(Some(on_gl_debug), ptr::null());
    }

    let mut app = App::new(ctx, &opt)?;
    let mut events = Vec::new();
    let mut next_tick = Instant::now() + TICK_INTERVAL;

    event_q.run(move |event, _, flow| {
        let event = match event.to_static() {
            Some(event) => event,
            None        => { return; }
        };

        use event::Event::*;
        match &event {
            NewEvents(_) => {
                events.clear();
            }

            WindowEvent { event: win_event, .. } => {
                use event::WindowEvent::*;
                if *win_event == CloseRequested {
                    *flow = ControlFlow::Exit;
                }
                else {
                    events.push(event);
                }
            }

            MainEventsCleared => {
                for event in events.iter() {
                    app.handle_event(event);
                }
                events.clear();

                if app.quit {
                    *flow = ControlFlow::Exit;
                    return;
                }

                let now = Instant::now();
                if now >= next_tick {
                    app.tick();
                    next_tick += TICK_INTERVAL;
                    while next_tick <= now {
                        log::warn!("skipping tick");
                        next_tick += TICK_INTERVAL;
                    }
                }

                *flow = ControlFlow::Poll;
            }

            _ => { }
        }
    });
}
