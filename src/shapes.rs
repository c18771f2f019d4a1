//! Shape rasterization primitives.
//!
//! This module converts geometric shapes into sets of integer pixel
//! coordinates. A pixel is covered when its sample point lies inside the
//! shape; there is no partial coverage here. Smooth edges come from drawing
//! on a supersampled canvas and resampling down afterwards.
//!
//! Bounding boxes are inclusive and sample at pixel centres. Point
//! sequences (polygons, segments) are given in pixel indices and sample at
//! the pixel indices themselves.

use std::collections::HashSet;

use crate::geometry::{BBox, Point};

/// Pixel coverage of a rasterized shape.
pub type Coverage = HashSet<(i32, i32)>;

/// Whether a pixel centre lies inside the ellipse inscribed in `bbox`.
fn inside_ellipse(cx: f64, cy: f64, rx: f64, ry: f64, px: i32, py: i32) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (px as f64 + 0.5 - cx) / rx;
    let dy = (py as f64 + 0.5 - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Rasterize a filled ellipse inscribed in an inclusive bounding box.
///
/// # Examples
///
/// ```
/// use shimeji_sprites::geometry::BBox;
/// use shimeji_sprites::shapes::rasterize_ellipse;
///
/// let pixels = rasterize_ellipse(BBox::new(0, 0, 9, 9));
/// assert!(pixels.contains(&(5, 5)));
/// assert!(!pixels.contains(&(0, 0)));
/// ```
pub fn rasterize_ellipse(bbox: BBox) -> Coverage {
    let mut pixels = HashSet::new();

    if bbox.is_empty() {
        return pixels;
    }

    let (cx, cy) = bbox.center();
    let (rx, ry) = bbox.radii();

    for py in bbox.y0..=bbox.y1 {
        for px in bbox.x0..=bbox.x1 {
            if inside_ellipse(cx, cy, rx, ry, px, py) {
                pixels.insert((px, py));
            }
        }
    }

    pixels
}

/// Rasterize the outline band of an ellipse.
///
/// The band runs inward from the bounding box edge by `thickness` pixels.
/// When the band is thicker than the ellipse the result is the filled
/// ellipse.
pub fn rasterize_ellipse_ring(bbox: BBox, thickness: i32) -> Coverage {
    let mut pixels = HashSet::new();

    if bbox.is_empty() || thickness <= 0 {
        return pixels;
    }

    let (cx, cy) = bbox.center();
    let (rx, ry) = bbox.radii();
    let t = thickness as f64;

    for py in bbox.y0..=bbox.y1 {
        for px in bbox.x0..=bbox.x1 {
            if inside_ellipse(cx, cy, rx, ry, px, py)
                && !inside_ellipse(cx, cy, rx - t, ry - t, px, py)
            {
                pixels.insert((px, py));
            }
        }
    }

    pixels
}

/// Rasterize part of an elliptical outline band.
///
/// Angles are in degrees, measured clockwise from the positive x axis
/// (y grows downward), so `0..180` is the lower half of the ellipse and
/// `200..340` is an upward-bulging cap. The sweep always runs from
/// `start` to `end` in the clockwise direction.
///
/// # Examples
///
/// ```
/// use shimeji_sprites::geometry::BBox;
/// use shimeji_sprites::shapes::rasterize_arc;
///
/// let smile = rasterize_arc(BBox::new(0, 0, 19, 19), 0.0, 180.0, 2);
/// assert!(smile.contains(&(10, 19)));
/// assert!(!smile.contains(&(10, 0)));
/// ```
pub fn rasterize_arc(bbox: BBox, start: f64, end: f64, thickness: i32) -> Coverage {
    let ring = rasterize_ellipse_ring(bbox, thickness);
    let (cx, cy) = bbox.center();
    let (rx, ry) = bbox.radii();
    let sweep = (end - start).rem_euclid(360.0);
    let full = end - start >= 360.0;

    ring.into_iter()
        .filter(|&(px, py)| {
            if full {
                return true;
            }
            let dx = (px as f64 + 0.5 - cx) / rx;
            let dy = (py as f64 + 0.5 - cy) / ry;
            let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            (angle - start).rem_euclid(360.0) <= sweep
        })
        .collect()
}

/// Rasterize a filled rectangle given by an inclusive bounding box.
///
/// # Examples
///
/// ```
/// use shimeji_sprites::geometry::BBox;
/// use shimeji_sprites::shapes::rasterize_rect;
///
/// let pixels = rasterize_rect(BBox::new(0, 0, 2, 1));
/// assert_eq!(pixels.len(), 6);
/// assert!(pixels.contains(&(2, 1)));
/// ```
pub fn rasterize_rect(bbox: BBox) -> Coverage {
    let mut pixels = HashSet::new();

    if bbox.is_empty() {
        return pixels;
    }

    for y in bbox.y0..=bbox.y1 {
        for x in bbox.x0..=bbox.x1 {
            pixels.insert((x, y));
        }
    }

    pixels
}

/// Rasterize a stroked rectangle (outline only).
///
/// The stroke lies inside the bounding box and is `thickness` pixels wide.
pub fn rasterize_stroke(bbox: BBox, thickness: i32) -> Coverage {
    let mut pixels = HashSet::new();

    if bbox.is_empty() || thickness <= 0 {
        return pixels;
    }

    let w = bbox.width();
    let h = bbox.height();

    // Top and bottom edges
    for dx in 0..w {
        for t in 0..thickness.min(h) {
            pixels.insert((bbox.x0 + dx, bbox.y0 + t));
            pixels.insert((bbox.x0 + dx, bbox.y1 - t));
        }
    }

    // Left and right edges
    for dy in 0..h {
        for t in 0..thickness.min(w) {
            pixels.insert((bbox.x0 + t, bbox.y0 + dy));
            pixels.insert((bbox.x1 - t, bbox.y0 + dy));
        }
    }

    pixels
}

/// Rasterize a thick segment with round caps.
///
/// Covers every pixel within `thickness / 2` of the segment from `p0` to
/// `p1`. Round caps let consecutive segments of a polyline join without
/// notches.
///
/// # Examples
///
/// ```
/// use shimeji_sprites::geometry::Point;
/// use shimeji_sprites::shapes::rasterize_segment;
///
/// let pixels = rasterize_segment(Point::new(0, 0), Point::new(10, 0), 4);
/// assert!(pixels.contains(&(5, 2)));
/// assert!(!pixels.contains(&(5, 3)));
/// ```
pub fn rasterize_segment(p0: Point, p1: Point, thickness: i32) -> Coverage {
    let mut pixels = HashSet::new();

    if thickness <= 0 {
        return pixels;
    }

    let half = thickness as f64 / 2.0;
    let reach = (half.ceil() as i32) + 1;

    let min_x = p0.x.min(p1.x) - reach;
    let max_x = p0.x.max(p1.x) + reach;
    let min_y = p0.y.min(p1.y) - reach;
    let max_y = p0.y.max(p1.y) + reach;

    let (ax, ay) = (p0.x as f64, p0.y as f64);
    let (bx, by) = (p1.x as f64, p1.y as f64);
    let (ex, ey) = (bx - ax, by - ay);
    let len_sq = ex * ex + ey * ey;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (x as f64, y as f64);
            // Project onto the segment, clamped to its endpoints
            let t = if len_sq == 0.0 {
                0.0
            } else {
                (((px - ax) * ex + (py - ay) * ey) / len_sq).clamp(0.0, 1.0)
            };
            let dx = px - (ax + t * ex);
            let dy = py - (ay + t * ey);
            if dx * dx + dy * dy <= half * half {
                pixels.insert((x, y));
            }
        }
    }

    pixels
}

/// Rasterize a thick polyline as a chain of round-capped segments.
///
/// A single point draws a dot; an empty slice draws nothing.
pub fn rasterize_polyline(points: &[Point], thickness: i32) -> Coverage {
    match points {
        [] => HashSet::new(),
        [p] => rasterize_segment(*p, *p, thickness),
        _ => {
            let mut pixels = HashSet::new();
            for pair in points.windows(2) {
                pixels.extend(rasterize_segment(pair[0], pair[1], thickness));
            }
            pixels
        }
    }
}

/// Rasterize a filled polygon using scanline fill.
///
/// Uses an even-odd fill rule. Fewer than three vertices cover nothing.
///
/// # Examples
///
/// ```
/// use shimeji_sprites::geometry::Point;
/// use shimeji_sprites::shapes::rasterize_polygon;
///
/// let triangle = [Point::new(0, 0), Point::new(8, 0), Point::new(4, 6)];
/// let pixels = rasterize_polygon(&triangle);
/// assert!(pixels.contains(&(4, 2)));
/// assert!(!pixels.contains(&(0, 5)));
/// ```
pub fn rasterize_polygon(vertices: &[Point]) -> Coverage {
    let mut pixels = HashSet::new();

    if vertices.len() < 3 {
        return pixels;
    }

    let min_y = vertices.iter().map(|p| p.y).min().unwrap_or(0);
    let max_y = vertices.iter().map(|p| p.y).max().unwrap_or(0);

    let mut intersections: Vec<f64> = Vec::new();

    for y in min_y..=max_y {
        intersections.clear();
        let sy = y as f64;

        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];

            // Skip horizontal edges
            if a.y == b.y {
                continue;
            }

            // Half-open on the upper end so shared vertices count once
            let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
            if sy < lo.y as f64 || sy >= hi.y as f64 {
                continue;
            }

            let t = (sy - lo.y as f64) / (hi.y - lo.y) as f64;
            intersections.push(lo.x as f64 + t * (hi.x - lo.x) as f64);
        }

        intersections.sort_by(|a, b| a.total_cmp(b));

        for chunk in intersections.chunks(2) {
            if let [start, end] = chunk {
                for x in (start.ceil() as i32)..=(end.floor() as i32) {
                    pixels.insert((x, y));
                }
            }
        }
    }

    pixels
}
