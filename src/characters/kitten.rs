//! Kitten: pointed ears, striped body, whiskers and a curling tail.

use image::Rgba;

use super::CharacterRenderer;
use crate::draw::{DrawList, DrawStep};
use crate::geometry::{scale, BBox, Point};
use crate::pose::Pose;

/// Samples along the tail curve.
const TAIL_SAMPLES: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KittenPalette {
    pub body: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub nose: Rgba<u8>,
    pub stripe: Rgba<u8>,
    pub inner_ear: Rgba<u8>,
}

impl Default for KittenPalette {
    fn default() -> Self {
        Self {
            body: Rgba([255, 212, 163, 255]),    // orange-cream
            outline: Rgba([61, 43, 31, 255]),    // dark brown
            nose: Rgba([255, 150, 170, 255]),    // pink
            stripe: Rgba([220, 170, 110, 255]),  // darker stripe
            inner_ear: Rgba([255, 182, 193, 255]),
        }
    }
}

/// Neutral-pose geometry, in design units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KittenLayout {
    pub body_center: (i32, i32),
    pub head_center: (i32, i32),
    pub head_radii: (i32, i32),
    pub body_half: (i32, i32),
    pub ear_size: i32,
}

impl Default for KittenLayout {
    fn default() -> Self {
        Self {
            body_center: (64, 78),
            head_center: (64, 48),
            head_radii: (22, 18),
            body_half: (18, 20),
            ear_size: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KittenPose {
    pub body_center: (i32, i32),
    pub head_center: (i32, i32),
    pub tilt: i32,
    pub body_squish: i32,
    pub tail_curl: i32,
    pub tail_angle: i32,
    pub whisker_tilt: i32,
    pub leg_offset: i32,
    /// Closed happy eyes instead of dots.
    pub eye_squint: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kitten {
    pub palette: KittenPalette,
    pub layout: KittenLayout,
}

/// Sample the tail curve in drawing space.
///
/// The tail rises from its base in a sine hump; `curl` bends the tip
/// sideways and `angle` shifts the whole tail horizontally.
pub fn tail_points(base_x: i32, base_y: i32, curl: i32, angle: i32) -> Vec<Point> {
    let (tx, ty) = (scale(base_x), scale(base_y));
    let r = scale(20) as f64;

    (0..TAIL_SAMPLES)
        .map(|i| {
            let t = i as f64 / (TAIL_SAMPLES - 1) as f64;
            let px = tx + (r * t * 1.2) as i32 + scale(curl) * (t * t * 10.0) as i32 + scale(angle);
            let py = ty - (r * 0.8 * (t * 2.5 + curl as f64 * 0.1).sin()) as i32;
            Point::new(px, py)
        })
        .collect()
}

impl Kitten {
    /// Pointed ear: outlined triangle with a pink inner triangle.
    fn ear(&self, list: &mut DrawList, part: &'static str, cx: i32, cy: i32) {
        let sz = scale(self.layout.ear_size);
        let (cx, cy) = (scale(cx), scale(cy));
        let outer = vec![
            Point::new(cx, cy - sz),
            Point::new(cx - sz, cy + sz / 2),
            Point::new(cx + sz, cy + sz / 2),
        ];
        let pal = &self.palette;
        list.push(part, DrawStep::outlined_polygon(outer, pal.body, pal.outline, 3));

        let inner = vec![
            Point::new(cx, cy - sz + scale(4)),
            Point::new(cx - sz + scale(4), cy + sz / 2 - scale(2)),
            Point::new(cx + sz - scale(4), cy + sz / 2 - scale(2)),
        ];
        list.push(part, DrawStep::Polygon { points: inner, fill: self.palette.inner_ear });
    }

    /// Three whiskers fanning out from `(cx, cy)`; `direction` is -1 for
    /// the left side, 1 for the right.
    fn whiskers(
        &self,
        list: &mut DrawList,
        part: &'static str,
        cx: i32,
        cy: i32,
        direction: i32,
        tilt: i32,
    ) {
        for off in [-6, 0, 6] {
            let from = Point::scaled(cx, cy + off);
            let to = Point::scaled(cx + direction * 20, cy + off * 2 + tilt);
            list.push(part, DrawStep::thick_line(vec![from, to], self.palette.outline, 2));
        }
    }
}

impl CharacterRenderer for Kitten {
    type Params = KittenPose;

    fn params(&self, pose: Pose) -> KittenPose {
        let (bx, by) = self.layout.body_center;
        let (hx, hy) = self.layout.head_center;
        let neutral = KittenPose {
            body_center: (bx, by),
            head_center: (hx, hy),
            tilt: 0,
            body_squish: 0,
            tail_curl: 1,
            tail_angle: 0,
            whisker_tilt: 0,
            leg_offset: 0,
            eye_squint: false,
        };

        match pose {
            Pose::StandNeutral => neutral,
            Pose::WalkStepLeft => KittenPose { tilt: -2, leg_offset: -5, tail_curl: -2, ..neutral },
            Pose::WalkStepRight => KittenPose { tilt: 2, leg_offset: 5, tail_curl: 2, ..neutral },
            Pose::Fall => KittenPose {
                head_center: (hx, hy - 8),
                body_center: (bx, by - 5),
                tail_curl: 3,
                ..neutral
            },
            Pose::BounceSquish => KittenPose {
                body_squish: 6,
                head_center: (hx, hy + 5),
                body_center: (bx, by + 5),
                tail_curl: -1,
                ..neutral
            },
            Pose::BounceRecover => KittenPose {
                body_squish: -4,
                head_center: (hx, hy - 4),
                body_center: (bx, by - 3),
                tail_curl: 2,
                ..neutral
            },
            Pose::Sit => KittenPose {
                body_squish: 8,
                head_center: (hx, hy + 4),
                body_center: (bx, by + 4),
                eye_squint: true,
                tail_angle: -10,
                ..neutral
            },
            Pose::DraggedTiltLeftLight => KittenPose {
                tilt: -8,
                head_center: (hx - 4, hy),
                body_center: (bx - 3, by),
                tail_curl: 3,
                ..neutral
            },
            Pose::DraggedTiltRightLight => KittenPose {
                tilt: 8,
                head_center: (hx + 4, hy),
                body_center: (bx + 3, by),
                tail_curl: -3,
                ..neutral
            },
            Pose::ResistFrame1 => KittenPose { tilt: -3, whisker_tilt: -3, ..neutral },
            Pose::ResistFrame2 => KittenPose { tilt: 3, whisker_tilt: 3, ..neutral },
        }
    }

    fn draw_list(&self, pose: Pose) -> DrawList {
        let p = self.params(pose);
        let pal = &self.palette;
        let (bx, by) = p.body_center;
        let (hx, hy) = p.head_center;
        let (hrx, hry) = self.layout.head_radii;
        let tilt = p.tilt;
        let squish = p.body_squish;
        let mut list = DrawList::new();

        // Tail behind the body: dark stroke with a lighter core
        let tail = tail_points(bx + 16, by + 5, p.tail_curl, p.tail_angle);
        list.push("tail", DrawStep::thick_line(tail.clone(), pal.outline, 5));
        list.push("tail", DrawStep::thick_line(tail, pal.body, 3));

        let bw = self.layout.body_half.0;
        let bh = self.layout.body_half.1 - squish;
        list.push(
            "body",
            DrawStep::outlined_ellipse(
                BBox::scaled(bx - bw, by - bh + squish, bx + bw, by + bh + squish),
                pal.body,
                pal.outline,
                3,
            ),
        );

        for row in -1..=1 {
            let y = by + row * 7;
            list.push(
                "stripes",
                DrawStep::thick_line(
                    vec![Point::scaled(bx - 10, y), Point::scaled(bx + 10, y)],
                    pal.stripe,
                    2,
                ),
            );
        }

        let foot_y = by + bh + squish - 2;
        for (part, off) in [("left-paw", -10), ("right-paw", 10)] {
            let fx = bx + off + p.leg_offset;
            list.push(
                part,
                DrawStep::outlined_ellipse(
                    BBox::scaled(fx - 7, foot_y - 2, fx + 7, foot_y + 4),
                    pal.body,
                    pal.outline,
                    2,
                ),
            );
        }

        let ear_y = hy - hry + 2;
        self.ear(&mut list, "left-ear", hx - 16 + tilt, ear_y);
        self.ear(&mut list, "right-ear", hx + 16 + tilt, ear_y);

        list.push(
            "head",
            DrawStep::outlined_ellipse(
                BBox::scaled(hx - hrx + tilt, hy - hry, hx + hrx + tilt, hy + hry),
                pal.body,
                pal.outline,
                3,
            ),
        );

        let eye_y = hy - 2;
        let (lex, rex) = (hx - 8 + tilt, hx + 8 + tilt);
        if p.eye_squint {
            for ex in [lex, rex] {
                list.push(
                    "eyes",
                    DrawStep::Arc {
                        bbox: BBox::scaled(ex - 4, eye_y - 3, ex + 4, eye_y + 3),
                        start: 200.0,
                        end: 340.0,
                        color: pal.outline,
                        width: 3,
                    },
                );
            }
        } else {
            let (left, right) = (Point::scaled(lex, eye_y), Point::scaled(rex, eye_y));
            list.push("eyes", DrawStep::dot_eyes(left, right, 4));
        }

        // Small inverted triangle nose
        let (nx, ny) = (hx + tilt, hy + 4);
        let nr = scale(3);
        let nose = Point::scaled(nx, ny);
        list.push(
            "nose",
            DrawStep::Polygon {
                points: vec![
                    Point::new(nose.x, nose.y + nr),
                    Point::new(nose.x - nr, nose.y - nr / 2),
                    Point::new(nose.x + nr, nose.y - nr / 2),
                ],
                fill: pal.nose,
            },
        );

        self.whiskers(&mut list, "left-whiskers", hx - hrx + 4 + tilt, hy + 3, -1, p.whisker_tilt);
        self.whiskers(&mut list, "right-whiskers", hx + hrx - 4 + tilt, hy + 3, 1, p.whisker_tilt);

        list.push("mouth", DrawStep::small_mouth(Point::scaled(nx, ny + 4), 4));

        list
    }
}
