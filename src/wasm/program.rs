use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{
    WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use crate::config::SpiralConfig;
use crate::glsl::{
    fragment_shader, POSITION_ATTRIBUTE, RESOLUTION_UNIFORM, TIME_UNIFORM, VERTEX_SHADER,
};

/// Triangle-strip corners of a quad covering clip space.
const QUAD: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

#[derive(Debug, Error)]
pub enum GlError {
    #[error("WebGL2 not supported")]
    Context,
    #[error("unable to create {0} shader object")]
    CreateShader(&'static str),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: &'static str, log: String },
    #[error("unable to create program object")]
    CreateProgram,
    #[error("program failed to link: {log}")]
    Link { log: String },
    #[error("unable to create buffer")]
    CreateBuffer,
    #[error("unable to create vertex array")]
    CreateVertexArray,
    #[error("attribute `{0}` not found")]
    MissingAttribute(&'static str),
    #[error("uniform `{0}` not found")]
    MissingUniform(&'static str),
}

impl From<GlError> for JsValue {
    fn from(err: GlError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Linked spiral program plus the state needed to draw it.
pub struct SpiralProgram {
    program: WebGlProgram,
    quad: WebGlVertexArrayObject,
    resolution: WebGlUniformLocation,
    time: WebGlUniformLocation,
}

impl SpiralProgram {
    pub fn new(gl: &GL, config: &SpiralConfig) -> Result<Self, GlError> {
        let vert = compile(gl, GL::VERTEX_SHADER, "vertex", VERTEX_SHADER)?;
        let frag = compile(gl, GL::FRAGMENT_SHADER, "fragment", &fragment_shader(config))?;
        let program = link(gl, &vert, &frag)?;
        // Shader objects are no longer needed once linked.
        gl.delete_shader(Some(&vert));
        gl.delete_shader(Some(&frag));
        log::info!("spiral program linked");

        let quad = upload_quad(gl, &program)?;
        let resolution = gl
            .get_uniform_location(&program, RESOLUTION_UNIFORM)
            .ok_or(GlError::MissingUniform(RESOLUTION_UNIFORM))?;
        let time = gl
            .get_uniform_location(&program, TIME_UNIFORM)
            .ok_or(GlError::MissingUniform(TIME_UNIFORM))?;

        Ok(Self {
            program,
            quad,
            resolution,
            time,
        })
    }

    /// Sets the frame uniforms and draws the full-screen quad.
    pub fn draw(&self, gl: &GL, width: f32, height: f32, time: f32) {
        gl.use_program(Some(&self.program));
        gl.bind_vertex_array(Some(&self.quad));
        gl.uniform2f(Some(&self.resolution), width, height);
        gl.uniform1f(Some(&self.time), time);
        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, (QUAD.len() / 2) as i32);
        gl.bind_vertex_array(None);
    }
}

fn compile(
    gl: &GL,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<WebGlShader, GlError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(GlError::CreateShader(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(GlError::Compile { stage, log })
    }
}

fn link(gl: &GL, vert: &WebGlShader, frag: &WebGlShader) -> Result<WebGlProgram, GlError> {
    let program = gl.create_program().ok_or(GlError::CreateProgram)?;
    gl.attach_shader(&program, vert);
    gl.attach_shader(&program, frag);
    gl.link_program(&program);

    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(GlError::Link { log })
    }
}

fn upload_quad(gl: &GL, program: &WebGlProgram) -> Result<WebGlVertexArrayObject, GlError> {
    let location = gl.get_attrib_location(program, POSITION_ATTRIBUTE);
    if location < 0 {
        return Err(GlError::MissingAttribute(POSITION_ATTRIBUTE));
    }
    let location = location as u32;

    let vao = gl
        .create_vertex_array()
        .ok_or(GlError::CreateVertexArray)?;
    gl.bind_vertex_array(Some(&vao));

    let buffer = gl.create_buffer().ok_or(GlError::CreateBuffer)?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let vertices = js_sys::Float32Array::from(&QUAD[..]);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, 2, GL::FLOAT, false, 0, 0);

    gl.bind_vertex_array(None);
    Ok(vao)
}
