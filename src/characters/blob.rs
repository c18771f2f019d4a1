//! Blob: a squishy slime whose whole body is one ellipse.

use image::Rgba;

use super::{floor_div, CharacterRenderer, Side};
use crate::draw::{DrawList, DrawStep, INK};
use crate::geometry::{scale, BBox, Point};
use crate::pose::Pose;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobPalette {
    pub body: Rgba<u8>,
    pub outline: Rgba<u8>,
    /// Translucent specular highlight.
    pub highlight: Rgba<u8>,
    pub eye: Rgba<u8>,
    pub pupil: Rgba<u8>,
}

impl Default for BlobPalette {
    fn default() -> Self {
        Self {
            body: Rgba([127, 232, 127, 255]),
            outline: Rgba([45, 138, 45, 255]),
            highlight: Rgba([200, 255, 200, 180]),
            eye: INK,
            pupil: Rgba([255, 255, 255, 255]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobLayout {
    pub center: (i32, i32),
    pub radii: (i32, i32),
}

impl Default for BlobLayout {
    fn default() -> Self {
        Self { center: (64, 68), radii: (28, 30) }
    }
}

/// Facial expression; each selects a different set of eye and mouth shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EyeMood {
    #[default]
    Normal,
    Happy,
    Surprised,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobPose {
    pub center: (i32, i32),
    pub lean: i32,
    pub squish: (i32, i32),
    pub mood: EyeMood,
    /// Pseudopod pushed out while resisting.
    pub bump: Option<Side>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blob {
    pub palette: BlobPalette,
    pub layout: BlobLayout,
}

impl CharacterRenderer for Blob {
    type Params = BlobPose;

    fn params(&self, pose: Pose) -> BlobPose {
        let (cx, cy) = self.layout.center;
        let neutral = BlobPose {
            center: (cx, cy),
            lean: 0,
            squish: (0, 0),
            mood: EyeMood::Normal,
            bump: None,
        };

        match pose {
            Pose::StandNeutral => neutral,
            Pose::WalkStepLeft => BlobPose { lean: -8, squish: (-4, 3), ..neutral },
            Pose::WalkStepRight => BlobPose { lean: 8, squish: (4, 3), ..neutral },
            // Tall raindrop
            Pose::Fall => BlobPose {
                squish: (-8, -15),
                center: (cx, cy - 5),
                mood: EyeMood::Surprised,
                ..neutral
            },
            // Flat pancake
            Pose::BounceSquish => {
                BlobPose { squish: (15, 15), center: (cx, cy + 8), mood: EyeMood::Happy, ..neutral }
            }
            // Tall narrow rebound
            Pose::BounceRecover => BlobPose { squish: (-8, -10), center: (cx, cy - 5), ..neutral },
            Pose::Sit => {
                BlobPose { squish: (10, 10), center: (cx, cy + 5), mood: EyeMood::Happy, ..neutral }
            }
            Pose::DraggedTiltLeftLight => BlobPose { lean: -12, squish: (-3, 0), ..neutral },
            Pose::DraggedTiltRightLight => BlobPose { lean: 12, squish: (3, 0), ..neutral },
            Pose::ResistFrame1 => BlobPose { lean: -5, bump: Some(Side::Left), ..neutral },
            Pose::ResistFrame2 => BlobPose { lean: 5, bump: Some(Side::Right), ..neutral },
        }
    }

    fn draw_list(&self, pose: Pose) -> DrawList {
        let p = self.params(pose);
        let pal = &self.palette;
        let (cx, cy) = p.center;
        let (rx, ry) = self.layout.radii;
        let (sx, sy) = p.squish;
        let lean = p.lean;
        let mut list = DrawList::new();

        match p.bump {
            Some(Side::Left) => list.push(
                "bump",
                DrawStep::outlined_ellipse(
                    BBox::scaled(cx - rx - 8 + lean, cy - 5, cx - rx + 4 + lean, cy + 8),
                    pal.body,
                    pal.outline,
                    2,
                ),
            ),
            Some(Side::Right) => list.push(
                "bump",
                DrawStep::outlined_ellipse(
                    BBox::scaled(cx + rx - 4 + lean, cy - 5, cx + rx + 8 + lean, cy + 8),
                    pal.body,
                    pal.outline,
                    2,
                ),
            ),
            None => {}
        }

        list.push(
            "body",
            DrawStep::outlined_ellipse(
                BBox::scaled(cx - rx - sx + lean, cy - ry + sy, cx + rx + sx + lean, cy + ry + sy),
                pal.body,
                pal.outline,
                3,
            ),
        );

        // Specular highlight, upper left
        let hl_x = cx + lean - rx / 3;
        let hl_y = cy - ry / 2 + floor_div(sy, 2);
        let hl_r = 8;
        list.push(
            "highlight",
            DrawStep::Ellipse {
                bbox: BBox::scaled(hl_x - hl_r, hl_y - hl_r, hl_x + hl_r - 2, hl_y + hl_r - 4),
                fill: pal.highlight,
            },
        );

        let eye_y = cy + floor_div(sy, 3);
        let (lex, rex) = (cx - 10 + lean, cx + 10 + lean);
        match p.mood {
            EyeMood::Happy => {
                for ex in [lex, rex] {
                    list.push(
                        "eyes",
                        DrawStep::Arc {
                            bbox: BBox::scaled(ex - 5, eye_y - 4, ex + 5, eye_y + 4),
                            start: 200.0,
                            end: 340.0,
                            color: pal.eye,
                            width: 3,
                        },
                    );
                }
            }
            EyeMood::Surprised => {
                for ex in [lex, rex] {
                    let center = Point::scaled(ex, eye_y);
                    let bbox = BBox::around(center, scale(6));
                    list.push("eyes", DrawStep::Ellipse { bbox, fill: pal.eye });
                    // Catchlight up and to the right of centre
                    let pupil = BBox::around(center.offset(scale(2), -scale(1)), scale(2));
                    list.push("eyes", DrawStep::Ellipse { bbox: pupil, fill: pal.pupil });
                }
            }
            EyeMood::Normal => {
                let (left, right) = (Point::scaled(lex, eye_y), Point::scaled(rex, eye_y));
                list.push("eyes", DrawStep::dot_eyes(left, right, 5));
            }
        }

        let mouth_y = eye_y + 10;
        let mx = cx + lean;
        match p.mood {
            EyeMood::Happy => list.push(
                "mouth",
                DrawStep::Arc {
                    bbox: BBox::scaled(mx - 8, mouth_y - 4, mx + 8, mouth_y + 6),
                    start: 0.0,
                    end: 180.0,
                    color: pal.eye,
                    width: 2,
                },
            ),
            EyeMood::Surprised => list.push(
                "mouth",
                DrawStep::EllipseOutline {
                    bbox: BBox::around(Point::scaled(mx, mouth_y), scale(4)),
                    color: pal.eye,
                    width: 2,
                },
            ),
            EyeMood::Normal => {
                list.push("mouth", DrawStep::small_mouth(Point::scaled(mx, mouth_y), 5))
            }
        }

        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moods_by_pose() {
        let blob = Blob::default();
        assert_eq!(blob.params(Pose::Fall).mood, EyeMood::Surprised);
        assert_eq!(blob.params(Pose::BounceSquish).mood, EyeMood::Happy);
        assert_eq!(blob.params(Pose::Sit).mood, EyeMood::Happy);
        assert_eq!(blob.params(Pose::WalkStepLeft).mood, EyeMood::Normal);
    }

    #[test]
    fn test_bump_only_when_resisting() {
        let blob = Blob::default();
        for pose in Pose::ALL {
            let list = blob.draw_list(pose);
            let resisting = matches!(pose, Pose::ResistFrame1 | Pose::ResistFrame2);
            assert_eq!(list.position("bump").is_some(), resisting, "{pose}");
            if resisting {
                assert_eq!(list.position("bump"), Some(0));
            }
        }
    }

    #[test]
    fn test_resist_bumps_on_opposite_sides() {
        let blob = Blob::default();
        let bump_x = |pose| match blob.draw_list(pose).step("bump") {
            Some(DrawStep::OutlinedEllipse { bbox, .. }) => bbox.x0,
            other => panic!("unexpected bump {other:?}"),
        };
        assert!(bump_x(Pose::ResistFrame1) < scale(64));
        assert!(bump_x(Pose::ResistFrame2) > scale(64));
    }

    #[test]
    fn test_surprised_eyes_have_pupils() {
        let list = Blob::default().draw_list(Pose::Fall);
        let eyes = list.iter().filter(|l| l.part == "eyes").count();
        assert_eq!(eyes, 4);
        assert!(matches!(list.step("mouth"), Some(DrawStep::EllipseOutline { .. })));
    }

    #[test]
    fn test_happy_mouth_is_wide_arc() {
        let list = Blob::default().draw_list(Pose::BounceSquish);
        match list.step("mouth") {
            Some(DrawStep::Arc { start, end, .. }) => assert_eq!((*start, *end), (0.0, 180.0)),
            other => panic!("unexpected mouth {other:?}"),
        }
    }

    #[test]
    fn test_eye_height_floors_negative_squish() {
        // Fall: cy 63, squish_y -15 -> eyes at 63 - 5
        let list = Blob::default().draw_list(Pose::Fall);
        match list.step("eyes") {
            Some(DrawStep::Ellipse { bbox, .. }) => {
                assert_eq!(bbox.center().1, (scale(58) as f64) + 0.5);
            }
            other => panic!("unexpected eyes {other:?}"),
        }
        // BounceRecover: cy 63, squish_y -10 -> floor(-10 / 3) = -4
        let list = Blob::default().draw_list(Pose::BounceRecover);
        match list.step("eyes") {
            Some(DrawStep::DotEyes { left, .. }) => assert_eq!(left.y, scale(59)),
            other => panic!("unexpected eyes {other:?}"),
        }
    }
}
