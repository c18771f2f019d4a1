//! Draw-list rendering to supersampled image buffers

use image::{Rgba, RgbaImage};

use crate::draw::{DrawList, DrawStep};
use crate::geometry::SUPER_SIZE;
use crate::shapes::Coverage;

/// Transparent color the canvas starts out with
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A supersampled RGBA drawing surface.
///
/// Every canvas starts fully transparent and is only ever changed by
/// painting coverage sets onto it with source-over alpha compositing.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a transparent `SUPER_SIZE`×`SUPER_SIZE` canvas.
    pub fn new() -> Self {
        Self::with_size(SUPER_SIZE, SUPER_SIZE)
    }

    /// Create a transparent canvas of arbitrary size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, TRANSPARENT) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Composite `color` over every covered pixel. Pixels outside the
    /// canvas are ignored.
    pub fn paint(&mut self, pixels: &Coverage, color: Rgba<u8>) {
        if color[3] == 0 {
            return;
        }

        let (w, h) = (self.image.width() as i32, self.image.height() as i32);
        let src_alpha = color[3] as f32 / 255.0;

        for &(x, y) in pixels {
            if x < 0 || y < 0 || x >= w || y >= h {
                continue;
            }
            let dst = self.image.get_pixel(x as u32, y as u32);
            let blended = blend_pixels(&color, dst, src_alpha);
            self.image.put_pixel(x as u32, y as u32, blended);
        }
    }

    /// Paint a single draw step.
    pub fn draw(&mut self, step: &DrawStep) {
        for (pixels, color) in step.layers() {
            self.paint(&pixels, color);
        }
    }

    /// Paint every step of a draw list, back to front.
    pub fn draw_list(&mut self, list: &DrawList) {
        for layer in list.iter() {
            self.draw(&layer.step);
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a draw list onto a fresh supersampled canvas.
pub fn render_list(list: &DrawList) -> Canvas {
    let mut canvas = Canvas::new();
    canvas.draw_list(list);
    canvas
}

/// Blend source pixel over destination with porter-duff "source over".
pub(crate) fn blend_pixels(src: &Rgba<u8>, dst: &Rgba<u8>, src_alpha: f32) -> Rgba<u8> {
    let dst_alpha = dst[3] as f32 / 255.0;

    // out_alpha = src_alpha + dst_alpha * (1 - src_alpha)
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    if out_alpha == 0.0 {
        return TRANSPARENT;
    }

    // out_color = (src * src_alpha + dst * dst_alpha * (1 - src_alpha)) / out_alpha
    let composite = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let result = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        (result.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        composite(src[0], dst[0]),
        composite(src[1], dst[1]),
        composite(src[2], dst[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new();
        assert_eq!(canvas.width(), SUPER_SIZE);
        assert_eq!(canvas.height(), SUPER_SIZE);
        assert!(canvas.image().pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_paint_opaque_replaces() {
        let mut canvas = Canvas::with_size(4, 4);
        let px: Coverage = [(1, 1), (2, 2)].into_iter().collect();
        canvas.paint(&px, Rgba([10, 20, 30, 255]));
        assert_eq!(*canvas.image().get_pixel(1, 1), Rgba([10, 20, 30, 255]));
        assert_eq!(*canvas.image().get_pixel(0, 0), TRANSPARENT);

        canvas.paint(&px, Rgba([200, 100, 50, 255]));
        assert_eq!(*canvas.image().get_pixel(2, 2), Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_paint_translucent_over_transparent_keeps_color() {
        let mut canvas = Canvas::with_size(2, 2);
        let px: Coverage = [(0, 0)].into_iter().collect();
        canvas.paint(&px, Rgba([240, 240, 255, 230]));
        assert_eq!(*canvas.image().get_pixel(0, 0), Rgba([240, 240, 255, 230]));
    }

    #[test]
    fn test_paint_translucent_over_opaque_blends() {
        let mut canvas = Canvas::with_size(1, 1);
        let px: Coverage = [(0, 0)].into_iter().collect();
        canvas.paint(&px, Rgba([0, 0, 0, 255]));
        canvas.paint(&px, Rgba([255, 255, 255, 128]));
        let p = canvas.image().get_pixel(0, 0);
        assert_eq!(p[3], 255);
        assert!(p[0] > 120 && p[0] < 135, "got {}", p[0]);
    }

    #[test]
    fn test_paint_ignores_out_of_bounds() {
        let mut canvas = Canvas::with_size(2, 2);
        let px: Coverage = [(-1, 0), (0, -1), (2, 0), (0, 2), (1, 1)].into_iter().collect();
        canvas.paint(&px, Rgba([1, 2, 3, 255]));
        assert_eq!(*canvas.image().get_pixel(1, 1), Rgba([1, 2, 3, 255]));
        assert_eq!(*canvas.image().get_pixel(0, 0), TRANSPARENT);
    }

    #[test]
    fn test_paint_fully_transparent_is_noop() {
        let mut canvas = Canvas::with_size(2, 2);
        let px: Coverage = [(0, 0)].into_iter().collect();
        canvas.paint(&px, Rgba([255, 0, 0, 0]));
        assert_eq!(*canvas.image().get_pixel(0, 0), TRANSPARENT);
    }

    #[test]
    fn test_draw_list_later_steps_occlude() {
        let mut list = DrawList::new();
        let bbox = BBox::new(0, 0, 31, 31);
        list.push("under", DrawStep::Ellipse { bbox, fill: Rgba([255, 0, 0, 255]) });
        list.push("over", DrawStep::Ellipse { bbox, fill: Rgba([0, 0, 255, 255]) });
        let canvas = render_list(&list);
        assert_eq!(*canvas.image().get_pixel(16, 16), Rgba([0, 0, 255, 255]));
        assert_eq!(*canvas.image().get_pixel(100, 100), TRANSPARENT);
    }
}
