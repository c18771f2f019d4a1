//! Draw steps: the primitive vocabulary characters are built from.
//!
//! A character pose is described as a [`DrawList`], an ordered sequence of
//! named [`DrawStep`]s. Steps are painted back to front, so the order of
//! the list is the z-order of the figure.
//!
//! Geometry inside a step is already in drawing space (see
//! [`crate::geometry`]). Stroke widths and radii are given in design units
//! and scaled when the step is rasterized.

use image::Rgba;

use crate::geometry::{scale, BBox, Point};
use crate::shapes::{
    rasterize_arc, rasterize_ellipse, rasterize_ellipse_ring, rasterize_polygon,
    rasterize_polyline, rasterize_rect, rasterize_segment, rasterize_stroke, Coverage,
};

/// Opaque black, the default ink for faces.
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// A single primitive drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawStep {
    /// Filled ellipse with an outline band inside its box.
    OutlinedEllipse { bbox: BBox, fill: Rgba<u8>, outline: Rgba<u8>, width: i32 },
    /// Filled rectangle with an outline band inside its box.
    OutlinedRect { bbox: BBox, fill: Rgba<u8>, outline: Rgba<u8>, width: i32 },
    /// Filled polygon whose edges are redrawn as thick segments.
    OutlinedPolygon { points: Vec<Point>, fill: Rgba<u8>, outline: Rgba<u8>, width: i32 },
    /// Filled ellipse without outline.
    Ellipse { bbox: BBox, fill: Rgba<u8> },
    /// Hollow ellipse outline.
    EllipseOutline { bbox: BBox, color: Rgba<u8>, width: i32 },
    /// Filled polygon without outline.
    Polygon { points: Vec<Point>, fill: Rgba<u8> },
    /// Thick polyline.
    ThickLine { points: Vec<Point>, color: Rgba<u8>, width: i32 },
    /// Stroked elliptical arc, angles in degrees clockwise from 3 o'clock.
    Arc { bbox: BBox, start: f64, end: f64, color: Rgba<u8>, width: i32 },
    /// Two filled round eyes centred on `left` and `right`.
    DotEyes { left: Point, right: Point, radius: i32, color: Rgba<u8> },
    /// Small smiling arc centred on `center`.
    SmallMouth { center: Point, width: i32, color: Rgba<u8> },
}

impl DrawStep {
    pub fn outlined_ellipse(bbox: BBox, fill: Rgba<u8>, outline: Rgba<u8>, width: i32) -> Self {
        DrawStep::OutlinedEllipse { bbox, fill, outline, width }
    }

    pub fn outlined_rect(bbox: BBox, fill: Rgba<u8>, outline: Rgba<u8>, width: i32) -> Self {
        DrawStep::OutlinedRect { bbox, fill, outline, width }
    }

    pub fn outlined_polygon(
        points: Vec<Point>,
        fill: Rgba<u8>,
        outline: Rgba<u8>,
        width: i32,
    ) -> Self {
        DrawStep::OutlinedPolygon { points, fill, outline, width }
    }

    pub fn thick_line(points: Vec<Point>, color: Rgba<u8>, width: i32) -> Self {
        DrawStep::ThickLine { points, color, width }
    }

    pub fn dot_eyes(left: Point, right: Point, radius: i32) -> Self {
        DrawStep::DotEyes { left, right, radius, color: INK }
    }

    pub fn small_mouth(center: Point, width: i32) -> Self {
        DrawStep::SmallMouth { center, width, color: INK }
    }

    /// Rasterize the step into coverage layers, painted in order.
    ///
    /// Outlined shapes produce their fill first and their outline second.
    pub fn layers(&self) -> Vec<(Coverage, Rgba<u8>)> {
        match self {
            DrawStep::OutlinedEllipse { bbox, fill, outline, width } => vec![
                (rasterize_ellipse(*bbox), *fill),
                (rasterize_ellipse_ring(*bbox, scale(*width)), *outline),
            ],
            DrawStep::OutlinedRect { bbox, fill, outline, width } => vec![
                (rasterize_rect(*bbox), *fill),
                (rasterize_stroke(*bbox, scale(*width)), *outline),
            ],
            DrawStep::OutlinedPolygon { points, fill, outline, width } => {
                let mut layers = vec![(rasterize_polygon(points), *fill)];
                // A single fill+outline pass leaves the border one pixel wide,
                // so every edge (closing back to the start) is redrawn thick.
                if points.len() >= 2 {
                    let mut outline_px = Coverage::new();
                    let thickness = scale(*width);
                    for i in 0..points.len() {
                        let next = points[(i + 1) % points.len()];
                        outline_px.extend(rasterize_segment(points[i], next, thickness));
                    }
                    layers.push((outline_px, *outline));
                }
                layers
            }
            DrawStep::Ellipse { bbox, fill } => vec![(rasterize_ellipse(*bbox), *fill)],
            DrawStep::EllipseOutline { bbox, color, width } => {
                vec![(rasterize_ellipse_ring(*bbox, scale(*width)), *color)]
            }
            DrawStep::Polygon { points, fill } => vec![(rasterize_polygon(points), *fill)],
            DrawStep::ThickLine { points, color, width } => {
                vec![(rasterize_polyline(points, scale(*width)), *color)]
            }
            DrawStep::Arc { bbox, start, end, color, width } => {
                vec![(rasterize_arc(*bbox, *start, *end, scale(*width)), *color)]
            }
            DrawStep::DotEyes { left, right, radius, color } => {
                let r = scale(*radius);
                let mut eyes = rasterize_ellipse(BBox::around(*left, r));
                eyes.extend(rasterize_ellipse(BBox::around(*right, r)));
                vec![(eyes, *color)]
            }
            DrawStep::SmallMouth { center, width, color } => {
                let w = scale(*width);
                let bbox = BBox::new(center.x - w, center.y - w / 2, center.x + w, center.y + w);
                vec![(rasterize_arc(bbox, 0.0, 180.0, scale(2)), *color)]
            }
        }
    }
}

/// A named step within a [`DrawList`].
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Body part this step draws, e.g. `"tail"` or `"left-ear"`.
    pub part: &'static str,
    pub step: DrawStep,
}

/// An ordered, back-to-front sequence of draw steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    layers: Vec<Layer>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step on top of everything drawn so far.
    pub fn push(&mut self, part: &'static str, step: DrawStep) {
        self.layers.push(Layer { part, step });
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Part names in paint order. Repeated parts appear once per step.
    pub fn parts(&self) -> Vec<&'static str> {
        self.layers.iter().map(|l| l.part).collect()
    }

    /// Index of the first step drawing `part`, if any.
    pub fn position(&self, part: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.part == part)
    }

    /// First step drawing `part`, if any.
    pub fn step(&self, part: &str) -> Option<&DrawStep> {
        self.layers.iter().find(|l| l.part == part).map(|l| &l.step)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }
}
