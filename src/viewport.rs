//! Keeping the drawing buffer and camera in step with the window size.
//!
//! Only the drawing buffer is resized. The canvas' on-page size comes from its
//! fixed CSS, so a larger buffer never pushes the layout.

use crate::camera::PerspectiveCamera;

/// Window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDimensions {
    pub width: f64,
    pub height: f64,
}

impl ViewportDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        (self.width / self.height) as f32
    }
}

/// `min(device_pixel_ratio, max)`.
pub fn capped_pixel_ratio(device_pixel_ratio: f64, max: f64) -> f64 {
    device_pixel_ratio.min(max)
}

/// Drawing buffer size in device pixels for a viewport at `pixel_ratio`.
pub fn drawing_buffer_size(viewport: ViewportDimensions, pixel_ratio: f64) -> (u32, u32) {
    (
        (viewport.width * pixel_ratio).floor() as u32,
        (viewport.height * pixel_ratio).floor() as u32,
    )
}

/// Something that owns a drawing buffer separate from its displayed size.
pub trait RenderSurface {
    fn pixel_ratio(&self) -> f64;

    /// Resize the backing store to `width x height` device pixels and match
    /// the draw viewport to it. Must not touch the displayed size.
    fn set_drawing_buffer_size(&mut self, width: u32, height: u32);
}

/// Applies a viewport change to the surface and the camera.
pub fn sync<S: RenderSurface + ?Sized>(
    surface: &mut S,
    camera: &mut PerspectiveCamera,
    viewport: ViewportDimensions,
) {
    let (w, h) = drawing_buffer_size(viewport, surface.pixel_ratio());
    surface.set_drawing_buffer_size(w, h);
    camera.aspect = viewport.aspect();
    camera.update_projection_matrix();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_capped() {
        assert_eq!(capped_pixel_ratio(1.0, 2.0), 1.0);
        assert_eq!(capped_pixel_ratio(1.5, 2.0), 1.5);
        assert_eq!(capped_pixel_ratio(3.0, 2.0), 2.0);
    }

    #[test]
    fn buffer_size_is_floored() {
        let v = ViewportDimensions::new(801.0, 601.0);
        assert_eq!(drawing_buffer_size(v, 1.5), (1201, 901));
        assert_eq!(drawing_buffer_size(v, 1.0), (801, 601));
    }
}
