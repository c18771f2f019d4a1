//! Design-space to drawing-space coordinate mapping.
//!
//! All character layouts and pose offsets are authored in a nominal
//! 128×128 design space. Rasterization happens on a 4× supersampled
//! 512×512 canvas, so every coordinate passes through [`scale`] before it
//! reaches a shape rasterizer.

/// Side length of a finished sprite, in pixels.
pub const FINAL_SIZE: u32 = 128;

/// Supersampling factor between design space and drawing space.
pub const SUPERSAMPLE: i32 = 4;

/// Side length of the supersampled drawing canvas, in pixels.
pub const SUPER_SIZE: u32 = FINAL_SIZE * SUPERSAMPLE as u32;

/// Map a design-space value to drawing space.
///
/// # Examples
///
/// ```
/// use shimeji_sprites::geometry::scale;
///
/// assert_eq!(scale(16), 64);
/// assert_eq!(scale(-3), -12);
/// assert_eq!(scale(0), 0);
/// ```
pub const fn scale(value: i32) -> i32 {
    value * SUPERSAMPLE
}

/// Map a fractional design-space value to drawing space, truncating toward zero.
///
/// ```
/// use shimeji_sprites::geometry::scale_f;
///
/// assert_eq!(scale_f(2.6), 10);
/// assert_eq!(scale_f(-2.6), -10);
/// ```
pub fn scale_f(value: f64) -> i32 {
    (value * SUPERSAMPLE as f64) as i32
}

/// A point in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scale a design-space point into drawing space.
    pub const fn scaled(x: i32, y: i32) -> Self {
        Self { x: scale(x), y: scale(y) }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An inclusive bounding box `[x0, y0, x1, y1]`.
///
/// Both corners belong to the box, so a box from `(0, 0)` to `(3, 3)`
/// covers a 4×4 pixel block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Build a drawing-space box from design-space corners.
    pub const fn scaled(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0: scale(x0), y0: scale(y0), x1: scale(x1), y1: scale(y1) }
    }

    /// Box of half-extent `r` around a drawing-space centre.
    pub const fn around(center: Point, r: i32) -> Self {
        Self { x0: center.x - r, y0: center.y - r, x1: center.x + r, y1: center.y + r }
    }

    pub const fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub const fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// A box with no area (inverted corners) rasterizes to nothing.
    pub const fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub const fn shift_x(self, dx: i32) -> Self {
        Self { x0: self.x0 + dx, y0: self.y0, x1: self.x1 + dx, y1: self.y1 }
    }

    /// Centre of the box in continuous coordinates (pixel centres sit at `n + 0.5`).
    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1 + 1) as f64 / 2.0, (self.y0 + self.y1 + 1) as f64 / 2.0)
    }

    /// Half-extents of the box in continuous coordinates.
    pub fn radii(&self) -> (f64, f64) {
        (self.width() as f64 / 2.0, self.height() as f64 / 2.0)
    }
}
