//! Per-frame state of the gradient animation.
//!
//! [`AnimationState::tick`] performs one frame's worth of uniform updates and
//! returns the state for the next frame. The browser driver calls it from
//! `requestAnimationFrame`; tests call it in a loop.

use glam::{Vec2, Vec3};

use crate::color;
use crate::config::AnimationConfig;
use crate::material::ShaderUniforms;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Accumulated time.
    pub t: f64,
    /// Phase fed to `u_randomisePosition`.
    pub j: f64,
    /// Sweep coordinate, bounces within `[-1, sweep_max]`. Starting at 0 the
    /// first step goes to -1 before turning around.
    pub x: i32,
    pub y: i32,
    /// `true` while `x` is counting up.
    pub reversing: bool,
    config: AnimationConfig,
}

impl AnimationState {
    pub fn new(x: i32, y: i32, config: AnimationConfig) -> Self {
        Self {
            t: 0.0,
            j: 0.0,
            x,
            y,
            reversing: false,
            config,
        }
    }

    /// Starts at a random `(x, y)` in `[0, sweep_max]`, inclusive.
    pub fn random(rng: &mut fastrand::Rng, config: AnimationConfig) -> Self {
        let max = config.sweep_max;
        Self::new(rng.i32(0..=max), rng.i32(0..=max), config)
    }

    /// One frame: write uniforms, maybe move the sweep, advance `t` and `j`.
    pub fn tick(mut self, uniforms: &mut ShaderUniforms) -> Self {
        let j = self.j as f32;
        uniforms.randomise_position = Vec2::new(j, j);

        let [r, g, b] = color::rgb(self.x, self.y, self.t / 2.0);
        uniforms.color1 = Vec3::new(r as f32, g as f32, b as f32);
        uniforms.time = self.t as f32;

        // Exact float comparison. With a 0.05 step the accumulator only hits a
        // multiple of 0.1 at t = 0, 0.1 and 0.2; after that x stays put.
        if self.sweep_due() {
            self.sweep();
        }

        self.j += self.config.phase_step;
        self.t += self.config.time_step;
        self
    }

    pub fn sweep_due(&self) -> bool {
        self.t % self.config.sweep_period == 0.0
    }

    /// Moves `x` one step along the triangle wave. The turn happens after the
    /// step that reaches 0 or `sweep_max`, so a start at 0 dips to -1.
    pub fn sweep(&mut self) {
        if !self.reversing {
            self.x -= 1;
            if self.x <= 0 {
                self.reversing = true;
            }
        } else {
            self.x += 1;
            if self.x >= self.config.sweep_max {
                self.reversing = false;
            }
        }
    }
}
