
use {
    crate::{
        gl::{self, types::*},
        math::*,
        render::ScreenLine,
        shader,
    },
    std::mem,
    rgb::RGBA8,
};

pub struct VAO(GLuint);

impl VAO {
    pub fn new() -> VAO {
        let mut name: GLuint = 0;
        unsafe { gl::CreateVertexArrays(1, &mut name); }
        VAO(name)
    }

    pub fn name(&self) -> GLuint {
        self.0
    }
}

impl Drop for VAO {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.0); }
    }
}

struct Buffer(GLuint);

impl Buffer {
    fn new() -> Buffer {
        let mut name: GLuint = 0;
        unsafe { gl::CreateBuffers(1, &mut name); }
        Buffer(name)
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.0); }
    }
}

#[repr(C)]
#[derive(Copy, Clone)]
struct Vertex {
    position: [f32; 2],
    color:    RGBA8,
}

impl Vertex {
    fn new(p: V2i32, color: RGBA8) -> Vertex {
        Vertex { position: [p.x as f32, p.y as f32], color }
    }
}

/// Collects screen-space lines over a frame and draws them in one call.
pub struct LineBatch {
    program:  shader::Program,
    vao:      VAO,
    buffer:   Buffer,
    vertices: Vec<Vertex>,
}

impl LineBatch {
    pub fn new() -> Result<LineBatch, shader::Error> {
        let program = shader::Program::from_sources(
            shader::LINE_VERTEX_SRC,
            shader::LINE_FRAGMENT_SRC
        )?;

        let vao = VAO::new();
        let buffer = Buffer::new();

        unsafe {
            let position_offset = 0;
            let color_offset = mem::size_of::<[f32; 2]>() as GLuint;

            gl::EnableVertexArrayAttrib(vao.name(), 0);
            gl::VertexArrayAttribFormat(vao.name(), 0, 2, gl::FLOAT, gl::FALSE, position_offset);
            gl::VertexArrayAttribBinding(vao.name(), 0, 0);

            gl::EnableVertexArrayAttrib(vao.name(), 1);
            gl::VertexArrayAttribFormat(vao.name(), 1, 4, gl::UNSIGNED_BYTE, gl::TRUE, color_offset);
            gl::VertexArrayAttribBinding(vao.name(), 1, 0);

            gl::VertexArrayVertexBuffer(
                vao.name(), 0,
                buffer.0, 0, mem::size_of::<Vertex>() as i32
            );
        }

        Ok(LineBatch { program, vao, buffer, vertices: Vec::new() })
    }

    pub fn push(&mut self, line: &ScreenLine) {
        self.vertices.push(Vertex::new(line.from, line.color));
        self.vertices.push(Vertex::new(line.to,   line.color));
    }

    /// Draws and clears everything pushed so far. `target_dims` is the pixel
    /// size the line coordinates were computed for.
    pub fn flush(&mut self, target_dims: V2) {
        if self.vertices.is_empty() {
            return;
        }

        unsafe {
            gl::NamedBufferData(
                self.buffer.0,
                (mem::size_of::<Vertex>() * self.vertices.len()) as isize,
                self.vertices.as_ptr() as *const _,
                gl::STREAM_DRAW
            );

            self.program.bind();
            gl::Uniform2f(0, target_dims.x, target_dims.y);
            gl::BindVertexArray(self.vao.name());
            gl::DrawArrays(gl::LINES, 0, self.vertices.len() as i32);
        }

        self.vertices.clear();
    }
}
