//! Shader material: uniform values plus the composed GLSL sources.
//!
//! Stage sources are written against the GLSL ES 1.00 vocabulary
//! (`varying`, `gl_FragColor`) and get a ES 3.00 prelude that declares the
//! built-in attributes and matrices, so a stage body only has to provide
//! `main`.

use glam::{Vec2, Vec3};

use crate::config::UniformDefaults;

const VERTEX_PRELUDE: &str = "#version 300 es
precision highp float;
precision highp int;
#define attribute in
#define varying out
#define texture2D texture
uniform mat4 modelViewMatrix;
uniform mat4 projectionMatrix;
in vec3 position;
in vec2 uv;
";

const FRAGMENT_PRELUDE: &str = "#version 300 es
precision highp float;
precision highp int;
#define varying in
#define texture2D texture
layout(location = 0) out highp vec4 pc_fragColor;
#define gl_FragColor pc_fragColor
";

/// Raw GLSL handed to the material: a shared noise block plus one body per
/// stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderSources {
    pub noise: String,
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn new(
        noise: impl Into<String>,
        vertex: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            noise: noise.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Sources shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(
            include_str!("shaders/noise.glsl"),
            include_str!("shaders/vertex.glsl"),
            include_str!("shaders/fragment.glsl"),
        )
    }

    /// `prelude + noise + vertex`.
    pub fn vertex_shader(&self) -> String {
        [VERTEX_PRELUDE, self.noise.as_str(), "\n", self.vertex.as_str()].concat()
    }

    /// `prelude + noise + fragment`.
    pub fn fragment_shader(&self) -> String {
        [FRAGMENT_PRELUDE, self.noise.as_str(), "\n", self.fragment.as_str()].concat()
    }
}

/// Values bound to the program's uniforms on every draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderUniforms {
    pub bg: Vec3,
    pub bg_main: Vec3,
    pub color1: Vec3,
    pub color2: Vec3,
    pub time: f32,
    pub randomise_position: Vec2,
}

impl ShaderUniforms {
    /// GLSL names, in the order [`UniformName`] enumerates them.
    pub const NAMES: [&'static str; 6] = [
        "u_bg",
        "u_bgMain",
        "u_color1",
        "u_color2",
        "u_time",
        "u_randomisePosition",
    ];
}

impl From<&UniformDefaults> for ShaderUniforms {
    fn from(d: &UniformDefaults) -> Self {
        Self {
            bg: d.bg,
            bg_main: d.bg_main,
            color1: d.color1,
            color2: d.color2,
            time: d.time,
            randomise_position: d.randomise_position,
        }
    }
}

/// Index into [`ShaderUniforms::NAMES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniformName {
    Bg,
    BgMain,
    Color1,
    Color2,
    Time,
    RandomisePosition,
}

impl UniformName {
    pub const ALL: [UniformName; 6] = [
        UniformName::Bg,
        UniformName::BgMain,
        UniformName::Color1,
        UniformName::Color2,
        UniformName::Time,
        UniformName::RandomisePosition,
    ];

    pub fn as_str(self) -> &'static str {
        ShaderUniforms::NAMES[self as usize]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShaderMaterial {
    pub sources: ShaderSources,
    pub uniforms: ShaderUniforms,
}

impl ShaderMaterial {
    pub fn new(sources: ShaderSources, defaults: &UniformDefaults) -> Self {
        Self {
            sources,
            uniforms: ShaderUniforms::from(defaults),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_precedes_stage_body() {
        let s = ShaderSources::new("float snoise(vec2 v);", "void main() {}", "void main() { }");
        let vs = s.vertex_shader();
        assert!(vs.starts_with("#version 300 es\n"));
        let noise_at = vs.find("float snoise").unwrap();
        let main_at = vs.find("void main").unwrap();
        assert!(noise_at < main_at);
        assert!(vs.contains("in vec3 position;"));

        let fs = s.fragment_shader();
        assert!(fs.starts_with("#version 300 es\n"));
        assert!(fs.ends_with("void main() { }"));
        assert!(fs.contains("#define gl_FragColor pc_fragColor"));
    }

    #[test]
    fn builtin_sources_use_every_uniform() {
        let s = ShaderSources::builtin();
        assert!(s.noise.contains("float snoise(vec2 v)"));
        let both = format!("{}{}", s.vertex, s.fragment);
        for name in ShaderUniforms::NAMES {
            assert!(both.contains(name), "{name} missing from built-in shaders");
        }
    }

    #[test]
    fn defaults_are_gray() {
        let m = ShaderMaterial::new(ShaderSources::builtin(), &UniformDefaults::default());
        let gray = Vec3::splat(100.0);
        assert_eq!(m.uniforms.bg, gray);
        assert_eq!(m.uniforms.bg_main, m.uniforms.bg);
        assert_eq!(m.uniforms.color1, gray);
        assert_eq!(m.uniforms.color2, gray);
        assert_eq!(m.uniforms.time, 30.0);
        assert_eq!(m.uniforms.randomise_position, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn uniform_names_line_up() {
        assert_eq!(UniformName::RandomisePosition.as_str(), "u_randomisePosition");
        assert_eq!(UniformName::BgMain.as_str(), "u_bgMain");
    }
}
