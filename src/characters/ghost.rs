//! Ghost: a bell-shaped sheet with a wavy hem.
//!
//! Unlike the other characters the ghost body is a single polygon: a
//! semicircular dome, straight sides, and a sine-wave hem sampled at a
//! fixed number of points. Pose parameters squash the bell and change the
//! amplitude and phase of the hem.

use std::f64::consts::PI;

use image::Rgba;

use super::{floor_div, CharacterRenderer, Side};
use crate::draw::{DrawList, DrawStep};
use crate::geometry::{scale, BBox, Point};
use crate::pose::Pose;

/// Segments along the dome arc.
pub const DOME_SEGMENTS: usize = 30;
/// Segments along the wavy hem.
pub const HEM_SEGMENTS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostPalette {
    /// Pale blue-white, slightly transparent.
    pub body: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub blush: Rgba<u8>,
    pub eye: Rgba<u8>,
}

impl Default for GhostPalette {
    fn default() -> Self {
        Self {
            body: Rgba([240, 240, 255, 230]),
            outline: Rgba([136, 136, 170, 255]),
            blush: Rgba([255, 180, 190, 150]),
            eye: Rgba([60, 60, 90, 255]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostLayout {
    pub center: (i32, i32),
    /// Half width of the bell.
    pub width: i32,
    pub height: i32,
    pub wave_amp: i32,
    pub wave_count: i32,
}

impl Default for GhostLayout {
    fn default() -> Self {
        Self { center: (64, 60), width: 26, height: 50, wave_amp: 6, wave_count: 3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GhostMouth {
    /// Round open "o".
    #[default]
    Round,
    /// Flat line.
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostPose {
    pub center: (i32, i32),
    /// Hem phase, in steps of 0.3 wavelengths.
    pub wave_offset: i32,
    pub wave_amp: i32,
    pub squish: (i32, i32),
    pub eye_offset_x: i32,
    /// Reserved; always zero and not applied when drawing.
    pub rotation: i32,
    pub mouth: GhostMouth,
    /// Little arm pushed out while resisting.
    pub arm: Option<Side>,
}

/// Body outline in design units, before scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhostOutline {
    /// Dome from the left edge over the top to the right edge.
    pub dome: Vec<(i32, i32)>,
    /// Bottom of the right side.
    pub right_foot: (i32, i32),
    /// Hem from right to left.
    pub hem: Vec<(i32, i32)>,
    /// Bottom of the left side.
    pub left_foot: (i32, i32),
    /// Y of the straight hem line the wave oscillates around.
    pub bottom_y: i32,
}

impl GhostOutline {
    /// Closed polygon, in order, still in design units.
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.dome
            .iter()
            .copied()
            .chain(std::iter::once(self.right_foot))
            .chain(self.hem.iter().copied())
            .chain(std::iter::once(self.left_foot))
    }

    /// Lowest and highest hem y.
    pub fn hem_extent(&self) -> (i32, i32) {
        let min = self.hem.iter().map(|p| p.1).min().unwrap_or(self.bottom_y);
        let max = self.hem.iter().map(|p| p.1).max().unwrap_or(self.bottom_y);
        (min, max)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ghost {
    pub palette: GhostPalette,
    pub layout: GhostLayout,
}

impl Ghost {
    /// Sample the bell silhouette for a pose.
    pub fn outline(&self, p: &GhostPose) -> GhostOutline {
        let (cx, cy) = p.center;
        let (sx, sy) = p.squish;
        let w = self.layout.width + sx;
        let h = self.layout.height + sy;
        let wf = w as f64;

        let dome_cy = cy - floor_div(h, 2) + floor_div(w, 2);
        let dome = (0..=DOME_SEGMENTS)
            .map(|i| {
                let angle = PI + PI * i as f64 / DOME_SEGMENTS as f64;
                let px = cx + (wf * angle.cos()) as i32;
                let py = dome_cy + (wf * angle.sin()) as i32 - floor_div(sy, 2);
                (px, py)
            })
            .collect();

        let right_x = cx + w;
        let bottom_y = cy + floor_div(h, 2);
        let waves = self.layout.wave_count as f64;
        let amp = p.wave_amp as f64;
        let phase = p.wave_offset as f64 * 0.3;

        let hem = (0..=HEM_SEGMENTS)
            .map(|i| {
                let t = i as f64 / HEM_SEGMENTS as f64;
                let px = right_x - (2.0 * wf * t) as i32;
                let py = bottom_y + (amp * ((t * waves + phase) * 2.0 * PI).sin()) as i32;
                (px, py)
            })
            .collect();

        GhostOutline {
            dome,
            right_foot: (right_x, bottom_y),
            hem,
            left_foot: (cx - w, bottom_y),
            bottom_y,
        }
    }
}

impl CharacterRenderer for Ghost {
    type Params = GhostPose;

    fn params(&self, pose: Pose) -> GhostPose {
        let (cx, cy) = self.layout.center;
        let neutral = GhostPose {
            center: (cx, cy),
            wave_offset: 0,
            wave_amp: self.layout.wave_amp,
            squish: (0, 0),
            eye_offset_x: 0,
            rotation: 0,
            mouth: GhostMouth::Round,
            arm: None,
        };

        match pose {
            Pose::StandNeutral => neutral,
            Pose::WalkStepLeft => GhostPose { center: (cx - 3, cy), wave_offset: 1, ..neutral },
            Pose::WalkStepRight => GhostPose { center: (cx + 3, cy), wave_offset: 2, ..neutral },
            // Stretched, hem streaming
            Pose::Fall => {
                GhostPose { squish: (-5, 10), center: (cx, cy - 3), wave_amp: 8, ..neutral }
            }
            // Compressed, hem calmer
            Pose::BounceSquish => {
                GhostPose { squish: (10, -15), center: (cx, cy + 8), wave_amp: 4, ..neutral }
            }
            Pose::BounceRecover => GhostPose { squish: (-5, 8), center: (cx, cy - 5), ..neutral },
            // Settled, hem almost flat
            Pose::Sit => GhostPose {
                squish: (5, -10),
                center: (cx, cy + 5),
                wave_amp: 2,
                mouth: GhostMouth::Flat,
                ..neutral
            },
            Pose::DraggedTiltLeftLight => {
                GhostPose { center: (cx - 6, cy), eye_offset_x: -3, wave_offset: -1, ..neutral }
            }
            Pose::DraggedTiltRightLight => {
                GhostPose { center: (cx + 6, cy), eye_offset_x: 3, wave_offset: 1, ..neutral }
            }
            Pose::ResistFrame1 => GhostPose { eye_offset_x: -2, arm: Some(Side::Left), ..neutral },
            Pose::ResistFrame2 => GhostPose { eye_offset_x: 2, arm: Some(Side::Right), ..neutral },
        }
    }

    fn draw_list(&self, pose: Pose) -> DrawList {
        let p = self.params(pose);
        let pal = &self.palette;
        let (cx, cy) = p.center;
        let (_, sy) = p.squish;
        let width = self.layout.width;
        let mut list = DrawList::new();

        let arm_y = cy - 5;
        match p.arm {
            Some(Side::Left) => list.push(
                "arm",
                DrawStep::outlined_ellipse(
                    BBox::scaled(cx - width - 10, arm_y - 4, cx - width + 2, arm_y + 6),
                    pal.body,
                    pal.outline,
                    2,
                ),
            ),
            Some(Side::Right) => list.push(
                "arm",
                DrawStep::outlined_ellipse(
                    BBox::scaled(cx + width - 2, arm_y - 4, cx + width + 10, arm_y + 6),
                    pal.body,
                    pal.outline,
                    2,
                ),
            ),
            None => {}
        }

        let body: Vec<Point> =
            self.outline(&p).points().map(|(x, y)| Point::scaled(x, y)).collect();
        list.push("body", DrawStep::outlined_polygon(body, pal.body, pal.outline, 3));

        // Hollow oval eyes
        let eye_y = cy - 10 + floor_div(sy, 4);
        let ex0 = cx + p.eye_offset_x;
        for ex in [ex0 - 10, ex0 + 10] {
            list.push(
                "eyes",
                DrawStep::EllipseOutline {
                    bbox: BBox::scaled(ex - 6, eye_y - 8, ex + 6, eye_y + 8),
                    color: pal.eye,
                    width: 3,
                },
            );
        }

        let blush_y = eye_y + 10;
        for bx in [ex0 - 16, ex0 + 16] {
            list.push(
                "blush",
                DrawStep::Ellipse {
                    bbox: BBox::scaled(bx - 5, blush_y - 3, bx + 5, blush_y + 3),
                    fill: pal.blush,
                },
            );
        }

        let mouth_y = eye_y + 14;
        match p.mouth {
            GhostMouth::Round => list.push(
                "mouth",
                DrawStep::EllipseOutline {
                    bbox: BBox::around(Point::scaled(ex0, mouth_y), scale(4)),
                    color: pal.eye,
                    width: 2,
                },
            ),
            GhostMouth::Flat => list.push(
                "mouth",
                DrawStep::thick_line(
                    vec![Point::scaled(ex0 - 4, mouth_y), Point::scaled(ex0 + 4, mouth_y)],
                    pal.eye,
                    2,
                ),
            ),
        }

        list
    }
}
