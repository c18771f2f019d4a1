//! The closed set of poses every character is rendered in.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error when parsing a pose label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoseError {
    /// Label is not one of the eleven known poses
    #[error("unknown pose '{0}'")]
    Unknown(String),
}

/// A named visual state a character can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pose {
    StandNeutral,
    WalkStepLeft,
    WalkStepRight,
    Fall,
    BounceSquish,
    BounceRecover,
    Sit,
    DraggedTiltLeftLight,
    DraggedTiltRightLight,
    ResistFrame1,
    ResistFrame2,
}

impl Pose {
    /// Every pose, in output order.
    pub const ALL: [Pose; 11] = [
        Pose::StandNeutral,
        Pose::WalkStepLeft,
        Pose::WalkStepRight,
        Pose::Fall,
        Pose::BounceSquish,
        Pose::BounceRecover,
        Pose::Sit,
        Pose::DraggedTiltLeftLight,
        Pose::DraggedTiltRightLight,
        Pose::ResistFrame1,
        Pose::ResistFrame2,
    ];

    /// The pose used for character icons.
    pub const ICON: Pose = Pose::StandNeutral;

    /// Kebab-case label, also used as the output file stem.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Pose::StandNeutral => "stand-neutral",
            Pose::WalkStepLeft => "walk-step-left",
            Pose::WalkStepRight => "walk-step-right",
            Pose::Fall => "fall",
            Pose::BounceSquish => "bounce-squish",
            Pose::BounceRecover => "bounce-recover",
            Pose::Sit => "sit",
            Pose::DraggedTiltLeftLight => "dragged-tilt-left-light",
            Pose::DraggedTiltRightLight => "dragged-tilt-right-light",
            Pose::ResistFrame1 => "resist-frame-1",
            Pose::ResistFrame2 => "resist-frame-2",
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pose {
    type Err = PoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pose::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PoseError::Unknown(s.to_string()))
    }
}
