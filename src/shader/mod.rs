
use {
    std::ptr,
    crate::gl::{self, types::*},
    thiserror::Error,
};

pub static LINE_VERTEX_SRC:   &str = include_str!("line-v.glsl");
pub static LINE_FRAGMENT_SRC: &str = include_str!("line-f.glsl");

pub enum Stage { Vertex, Fragment }

#[derive(Debug, Error)]
pub enum Error {
    #[error("shader compilation failed: {}", .0.info_log())]
    Compile(Unit),
    #[error("program link failed: {}", .0.info_log())]
    Link(Program),
}

type GetIv  = unsafe fn(GLuint, GLenum, *mut GLint);
type GetLog = unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar);

unsafe fn status(handle: GLuint, get_iv: GetIv, pname: GLenum) -> bool {
    let mut status: GLint = 0;
    get_iv(handle, pname, &mut status);
    status != (gl::FALSE as GLint)
}

fn info_log(handle: GLuint, get_iv: GetIv, get_log: GetLog) -> String {
    let mut log_length: GLint = 0;
    unsafe { get_iv(handle, gl::INFO_LOG_LENGTH, &mut log_length); }

    if log_length <= 0 {
        return "<no info log>".to_string();
    }

    let mut log_buffer = vec![0u8; log_length as usize];
    unsafe {
        get_log(handle, log_length, ptr::null_mut(), log_buffer.as_mut_ptr() as *mut GLchar);
    }

    String::from_utf8_lossy(&log_buffer)
        .trim_end_matches('\0')
        .into()
}

#[derive(Debug)]
pub struct Unit { handle: GLuint }

impl Drop for Unit {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.handle); }
    }
}

impl Unit {
    pub fn info_log(&self) -> String {
        info_log(self.handle, gl::GetShaderiv, gl::GetShaderInfoLog)
    }
}

pub fn compile(stage: Stage, src: &str)
    -> Result<Unit, Error>
{
    let gl_stage = match stage {
        Stage::Vertex   => gl::VERTEX_SHADER,
        Stage::Fragment => gl::FRAGMENT_SHADER,
    };

    let src_ptr = src.as_ptr() as *const GLchar;
    let src_len = src.len() as GLint;

    let shader = unsafe {
        let shader = Unit { handle: gl::CreateShader(gl_stage) };
        gl::ShaderSource(shader.handle, 1, &src_ptr, &src_len);
        gl::CompileShader(shader.handle);
        shader
    };

    if unsafe { status(shader.handle, gl::GetShaderiv, gl::COMPILE_STATUS) } {
        Ok(shader)
    }
    else {
        Err(Error::Compile(shader))
    }
}

#[derive(Debug)]
pub struct Program { handle: GLuint }

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.handle); }
    }
}

pub fn link(stages: &[Unit])
    -> Result<Program, Error>
{
    let program = unsafe {
        let program = Program { handle: gl::CreateProgram() };
        for stage in stages {
            gl::AttachShader(program.handle, stage.handle);
        }
        gl::LinkProgram(program.handle);
        program
    };

    if unsafe { status(program.handle, gl::GetProgramiv, gl::LINK_STATUS) } {
        Ok(program)
    }
    else {
        Err(Error::Link(program))
    }
}

impl Program {
    /// Compiles and links a vertex/fragment pair.
    pub fn from_sources(vertex: &str, fragment: &str) -> Result<Program, Error> {
        let v_shader = compile(Stage::Vertex,   vertex)?;
        let f_shader = compile(Stage::Fragment, fragment)?;
        link(&[v_shader, f_shader])
    }

    pub fn info_log(&self) -> String {
        info_log(self.handle, gl::GetProgramiv, gl::GetProgramInfoLog)
    }

    pub unsafe fn bind(&self) {
        gl::UseProgram(self.handle);
    }
}
