use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlContextAttributes, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::material::{ShaderUniforms, UniformName};
use crate::viewport::RenderSurface;
use crate::SceneGraph;

const POSITION_LOCATION: u32 = 0;
const UV_LOCATION: u32 = 1;

/// GPU side of the mesh, created by [`GlRenderer::upload`].
struct GpuMesh {
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    index_count: i32,
    model_view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    uniforms: [Option<WebGlUniformLocation>; 6],
}

/// WebGL2 renderer for a single [`SceneGraph`].
pub struct GlRenderer {
    canvas: HtmlCanvasElement,
    gl: GL,
    pixel_ratio: f64,
    mesh: Option<GpuMesh>,
}

impl GlRenderer {
    /// Grabs an antialiased WebGL2 context from `canvas`.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let attrs = WebGlContextAttributes::new();
        attrs.set_antialias(true);
        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &attrs)?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        gl.enable(GL::DEPTH_TEST);
        gl.enable(GL::CULL_FACE);
        gl.cull_face(GL::BACK);
        gl.clear_color(0.0, 0.0, 0.0, 1.0);

        Ok(Self {
            canvas,
            gl,
            pixel_ratio: 1.0,
            mesh: None,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Takes effect on the next [`RenderSurface::set_drawing_buffer_size`].
    pub fn set_pixel_ratio(&mut self, ratio: f64) {
        self.pixel_ratio = ratio;
    }

    /// Compiles the material and uploads the plane. Shader errors come back
    /// as `Err` with the driver's info log.
    pub fn upload(&mut self, scene: &SceneGraph) -> Result<(), JsValue> {
        let gl = &self.gl;
        let sources = &scene.material.sources;
        let vs = compile_shader(gl, GL::VERTEX_SHADER, &sources.vertex_shader())?;
        let fs = compile_shader(gl, GL::FRAGMENT_SHADER, &sources.fragment_shader())?;
        let program = link_program(gl, &vs, &fs)?;
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let geometry = &scene.mesh.geometry;
        let vao = gl.create_vertex_array().ok_or("create vertex array failed")?;
        gl.bind_vertex_array(Some(&vao));

        upload_attribute(gl, POSITION_LOCATION, 3, &geometry.positions)?;
        upload_attribute(gl, UV_LOCATION, 2, &geometry.uvs)?;

        let index_buffer = gl.create_buffer().ok_or("create index buffer failed")?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));
        let indices = js_sys::Uint16Array::from(geometry.indices.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &indices, GL::STATIC_DRAW);

        gl.bind_vertex_array(None);

        let uniforms = UniformName::ALL.map(|u| gl.get_uniform_location(&program, u.as_str()));
        self.mesh = Some(GpuMesh {
            model_view: gl.get_uniform_location(&program, "modelViewMatrix"),
            projection: gl.get_uniform_location(&program, "projectionMatrix"),
            program,
            vao,
            index_count: geometry.indices.len() as i32,
            uniforms,
        });
        Ok(())
    }

    /// Draws the scene through its camera. Does nothing before [`upload`].
    ///
    /// [`upload`]: Self::upload
    pub fn render(&self, scene: &SceneGraph) {
        let gl = &self.gl;
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let Some(mesh) = &self.mesh else {
            return;
        };
        gl.use_program(Some(&mesh.program));

        let projection = scene.camera.projection_matrix().to_cols_array();
        let model_view = scene.model_view_matrix().to_cols_array();
        gl.uniform_matrix4fv_with_f32_array(mesh.projection.as_ref(), false, &projection);
        gl.uniform_matrix4fv_with_f32_array(mesh.model_view.as_ref(), false, &model_view);
        bind_uniforms(gl, &mesh.uniforms, &scene.material.uniforms);

        gl.bind_vertex_array(Some(&mesh.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, mesh.index_count, GL::UNSIGNED_SHORT, 0);
        gl.bind_vertex_array(None);
    }
}

impl RenderSurface for GlRenderer {
    fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Sets `canvas.width/height` only; the style attribute is left alone.
    fn set_drawing_buffer_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }
}

fn bind_uniforms(gl: &GL, locations: &[Option<WebGlUniformLocation>; 6], u: &ShaderUniforms) {
    for (name, loc) in UniformName::ALL.into_iter().zip(locations) {
        let loc = loc.as_ref();
        match name {
            UniformName::Bg => gl.uniform3f(loc, u.bg.x, u.bg.y, u.bg.z),
            UniformName::BgMain => gl.uniform3f(loc, u.bg_main.x, u.bg_main.y, u.bg_main.z),
            UniformName::Color1 => gl.uniform3f(loc, u.color1.x, u.color1.y, u.color1.z),
            UniformName::Color2 => gl.uniform3f(loc, u.color2.x, u.color2.y, u.color2.z),
            UniformName::Time => gl.uniform1f(loc, u.time),
            UniformName::RandomisePosition => {
                gl.uniform2f(loc, u.randomise_position.x, u.randomise_position.y)
            }
        }
    }
}

fn upload_attribute(gl: &GL, location: u32, size: i32, data: &[f32]) -> Result<(), JsValue> {
    let buffer = gl.create_buffer().ok_or("create vertex buffer failed")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let array = js_sys::Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, 0, 0);
    Ok(())
}

fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(shader_type).ok_or("create shader failed")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        return Err(JsValue::from_str(&format!("shader compile failed: {log}")));
    }
    Ok(shader)
}

/// Binds `position` and `uv` to fixed locations before linking.
fn link_program(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, JsValue> {
    let program = gl.create_program().ok_or("create program failed")?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.bind_attrib_location(&program, POSITION_LOCATION, "position");
    gl.bind_attrib_location(&program, UV_LOCATION, "uv");
    gl.link_program(&program);

    if !gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        return Err(JsValue::from_str(&format!("program link failed: {log}")));
    }
    Ok(program)
}
