//! Bunny: round body, floppy ears, cotton tail.

use image::Rgba;

use super::CharacterRenderer;
use crate::draw::{DrawList, DrawStep};
use crate::geometry::{scale, BBox, Point};
use crate::pose::Pose;

/// Bunny colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BunnyPalette {
    pub body: Rgba<u8>,
    pub inner_ear: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub nose: Rgba<u8>,
}

impl Default for BunnyPalette {
    fn default() -> Self {
        Self {
            body: Rgba([255, 245, 238, 255]),      // seashell white
            inner_ear: Rgba([255, 182, 193, 255]), // pink
            outline: Rgba([74, 55, 40, 255]),      // warm gray-brown
            nose: Rgba([255, 150, 170, 255]),
        }
    }
}

/// Neutral-pose geometry, in design units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BunnyLayout {
    pub body_center: (i32, i32),
    pub head_center: (i32, i32),
    pub head_radii: (i32, i32),
    pub body_half: (i32, i32),
    pub ear_height: i32,
    pub ear_half_width: i32,
}

impl Default for BunnyLayout {
    fn default() -> Self {
        Self {
            body_center: (64, 80),
            head_center: (64, 52),
            head_radii: (24, 20),
            body_half: (20, 22),
            ear_height: 30,
            ear_half_width: 9,
        }
    }
}

/// Resolved per-pose geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BunnyPose {
    pub body_center: (i32, i32),
    pub head_center: (i32, i32),
    /// Sideways head lean; ears tilt the opposite way.
    pub tilt: i32,
    /// Ear flop amount, left then right.
    pub ear_flop: (i32, i32),
    pub body_squish: (i32, i32),
    pub eye_offset_x: i32,
    pub leg_spread: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bunny {
    pub palette: BunnyPalette,
    pub layout: BunnyLayout,
}

impl Bunny {
    /// One ear: outlined outer ellipse plus a pink inner ellipse.
    fn ear(
        &self,
        list: &mut DrawList,
        part: &'static str,
        cx: i32,
        top: i32,
        tilt: i32,
        flop: i32,
    ) {
        let hw = scale(self.layout.ear_half_width);
        let hh = scale(self.layout.ear_height);
        let mut ear = BBox::new(scale(cx) - hw, scale(top), scale(cx) + hw, scale(top) + hh)
            .shift_x(scale(tilt));
        if flop != 0 {
            ear.x0 += scale(flop * 3);
            ear.x1 += scale(flop * 5);
        }
        let pal = &self.palette;
        list.push(part, DrawStep::outlined_ellipse(ear, pal.body, pal.outline, 3));

        let margin = scale(4);
        let inner = BBox::new(
            ear.x0 + margin,
            ear.y0 + margin + scale(3),
            ear.x1 - margin,
            ear.y1 - margin - scale(3),
        );
        list.push(part, DrawStep::Ellipse { bbox: inner, fill: self.palette.inner_ear });
    }
}

impl CharacterRenderer for Bunny {
    type Params = BunnyPose;

    fn params(&self, pose: Pose) -> BunnyPose {
        let (bx, by) = self.layout.body_center;
        let (hx, hy) = self.layout.head_center;
        let neutral = BunnyPose {
            body_center: (bx, by),
            head_center: (hx, hy),
            tilt: 0,
            ear_flop: (0, 0),
            body_squish: (0, 0),
            eye_offset_x: 0,
            leg_spread: 0,
        };

        match pose {
            Pose::StandNeutral => neutral,
            Pose::WalkStepLeft => {
                BunnyPose { tilt: -3, ear_flop: (-2, 0), leg_spread: -6, ..neutral }
            }
            Pose::WalkStepRight => {
                BunnyPose { tilt: 3, ear_flop: (0, 2), leg_spread: 6, ..neutral }
            }
            Pose::Fall => BunnyPose {
                head_center: (hx, hy - 8),
                body_center: (bx, by - 5),
                ear_flop: (-3, 3),
                ..neutral
            },
            Pose::BounceSquish => BunnyPose {
                body_squish: (0, 8),
                head_center: (hx, hy + 6),
                body_center: (bx, by + 6),
                ear_flop: (-4, 4),
                ..neutral
            },
            Pose::BounceRecover => BunnyPose {
                body_squish: (0, -5),
                head_center: (hx, hy - 5),
                body_center: (bx, by - 3),
                ..neutral
            },
            Pose::Sit => BunnyPose {
                body_squish: (0, 6),
                head_center: (hx, hy + 4),
                body_center: (bx, by + 4),
                ..neutral
            },
            Pose::DraggedTiltLeftLight => BunnyPose {
                tilt: -8,
                head_center: (hx - 5, hy),
                body_center: (bx - 3, by),
                ..neutral
            },
            Pose::DraggedTiltRightLight => BunnyPose {
                tilt: 8,
                head_center: (hx + 5, hy),
                body_center: (bx + 3, by),
                ..neutral
            },
            Pose::ResistFrame1 => BunnyPose { tilt: -4, eye_offset_x: -2, ..neutral },
            Pose::ResistFrame2 => BunnyPose { tilt: 4, eye_offset_x: 2, ..neutral },
        }
    }

    fn draw_list(&self, pose: Pose) -> DrawList {
        let p = self.params(pose);
        let pal = &self.palette;
        let (bx, by) = p.body_center;
        let (hx, hy) = p.head_center;
        let (hrx, hry) = self.layout.head_radii;
        let (sx, sy) = p.body_squish;
        let tilt = p.tilt;
        let mut list = DrawList::new();

        // Cotton tail sits behind the body
        let (tx, ty) = (bx + 18, by + 5);
        list.push(
            "tail",
            DrawStep::outlined_ellipse(
                BBox::scaled(tx - 6, ty - 6, tx + 6, ty + 6),
                pal.body,
                pal.outline,
                2,
            ),
        );

        let bw = self.layout.body_half.0 + sx;
        let bh = self.layout.body_half.1 - sy;
        list.push(
            "body",
            DrawStep::outlined_ellipse(
                BBox::scaled(bx - bw, by - bh + sy, bx + bw, by + bh + sy),
                pal.body,
                pal.outline,
                3,
            ),
        );

        let foot_y = by + bh + sy - 2;
        let feet = [("left-foot", bx - 10 + p.leg_spread), ("right-foot", bx + 10 + p.leg_spread)];
        for (part, fx) in feet {
            list.push(
                part,
                DrawStep::outlined_ellipse(
                    BBox::scaled(fx - 8, foot_y - 3, fx + 8, foot_y + 5),
                    pal.body,
                    pal.outline,
                    2,
                ),
            );
        }

        // Ears go before the head so the head overlaps their base
        let ear_top = hy - hry - self.layout.ear_height + 5;
        self.ear(&mut list, "left-ear", hx - 12, ear_top, -tilt, p.ear_flop.0);
        self.ear(&mut list, "right-ear", hx + 12, ear_top, -tilt, p.ear_flop.1);

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
        let eye_x = hx + tilt + p.eye_offset_x;
        list.push(
            "eyes",
            DrawStep::dot_eyes(Point::scaled(eye_x - 9, eye_y), Point::scaled(eye_x + 9, eye_y), 4),
        );

        let (nx, ny) = (eye_x, hy + 6);
        let nose = BBox::around(Point::scaled(nx, ny), scale(3));
        list.push("nose", DrawStep::Ellipse { bbox: nose, fill: pal.nose });

        list.push("mouth", DrawStep::small_mouth(Point::scaled(nx, ny + 4), 5));

        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sit_lowers_head_and_body() {
        let p = Bunny::default().params(Pose::Sit);
        assert_eq!(p.body_center, (64, 84));
        assert_eq!(p.head_center, (64, 56));
        assert_eq!(p.body_squish, (0, 6));
        assert_eq!(p.tilt, 0);
    }

    #[test]
    fn test_neutral_uses_base_layout() {
        let p = Bunny::default().params(Pose::StandNeutral);
        assert_eq!(p.body_center, (64, 80));
        assert_eq!(p.head_center, (64, 52));
        assert_eq!(p.ear_flop, (0, 0));
    }

    #[test]
    fn test_dragged_poses_mirror() {
        let bunny = Bunny::default();
        let left = bunny.params(Pose::DraggedTiltLeftLight);
        let right = bunny.params(Pose::DraggedTiltRightLight);
        assert_eq!(left.tilt, -right.tilt);
        assert_eq!(64 - left.head_center.0, right.head_center.0 - 64);
        assert_eq!(64 - left.body_center.0, right.body_center.0 - 64);
    }

    #[test]
    fn test_z_order() {
        let list = Bunny::default().draw_list(Pose::StandNeutral);
        let order = [
            "tail", "body", "left-foot", "right-foot", "left-ear", "right-ear", "head", "eyes",
            "nose", "mouth",
        ];
        let positions: Vec<_> = order.iter().map(|p| list.position(p).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", list.parts());
    }

    #[test]
    fn test_sit_head_box() {
        let list = Bunny::default().draw_list(Pose::Sit);
        match list.step("head") {
            Some(DrawStep::OutlinedEllipse { bbox, .. }) => {
                assert_eq!(*bbox, BBox::scaled(64 - 24, 56 - 20, 64 + 24, 56 + 20));
            }
            other => panic!("unexpected head step {other:?}"),
        }
    }

    #[test]
    fn test_tilt_moves_head_not_body() {
        let bunny = Bunny::default();
        let neutral = bunny.draw_list(Pose::StandNeutral);
        let resist = bunny.draw_list(Pose::ResistFrame1);
        assert_eq!(neutral.step("body"), resist.step("body"));
        assert_ne!(neutral.step("head"), resist.step("head"));
    }

    #[test]
    fn test_ear_flop_widens_ear() {
        let bunny = Bunny::default();
        let list = bunny.draw_list(Pose::Fall);
        match list.step("right-ear") {
            Some(DrawStep::OutlinedEllipse { bbox, .. }) => {
                // flop 3: left edge +36, right edge +60 in drawing space
                let hx = 64 + 12;
                assert_eq!(bbox.x0, scale(hx) - scale(9) + scale(9));
                assert_eq!(bbox.x1, scale(hx) + scale(9) + scale(15));
            }
            other => panic!("unexpected ear step {other:?}"),
        }
    }
}
