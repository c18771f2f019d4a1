//! The four generated characters.
//!
//! Every character owns an immutable palette and base layout, maps each
//! [`Pose`] to its own parameter record with an exhaustive `match`, and
//! turns those parameters into a [`DrawList`]. Pose offsets move individual
//! parts (head, feet, ears, ...) independently; there is no whole-figure
//! transform.

pub mod blob;
pub mod bunny;
pub mod ghost;
pub mod kitten;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::draw::DrawList;
use crate::pose::Pose;
use crate::renderer::{render_list, Canvas};

pub use blob::Blob;
pub use bunny::Bunny;
pub use ghost::Ghost;
pub use kitten::Kitten;

/// A character that can be drawn in any pose.
pub trait CharacterRenderer {
    /// Per-pose geometry offsets and mode switches.
    type Params;

    /// Resolve the parameter record for a pose.
    fn params(&self, pose: Pose) -> Self::Params;

    /// Build the back-to-front draw list for a pose.
    fn draw_list(&self, pose: Pose) -> DrawList;

    /// Render a pose onto a fresh supersampled canvas.
    fn render(&self, pose: Pose) -> Canvas {
        render_list(&self.draw_list(pose))
    }
}

/// Which side of the figure an extra part sticks out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Error when parsing a character name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharacterError {
    #[error("unknown character '{0}' (expected one of: bunny, kitten, blob, ghost)")]
    Unknown(String),
}

/// The generated characters, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Character {
    Bunny,
    Kitten,
    Blob,
    Ghost,
}

impl Character {
    pub const ALL: [Character; 4] =
        [Character::Bunny, Character::Kitten, Character::Blob, Character::Ghost];

    /// Lowercase name, also the output directory name.
    pub const fn name(&self) -> &'static str {
        match self {
            Character::Bunny => "bunny",
            Character::Kitten => "kitten",
            Character::Blob => "blob",
            Character::Ghost => "ghost",
        }
    }

    /// Capitalized name for status messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Character::Bunny => "Bunny",
            Character::Kitten => "Kitten",
            Character::Blob => "Blob",
            Character::Ghost => "Ghost",
        }
    }

    /// Draw list for this character in the given pose, using the default
    /// palette and layout.
    pub fn draw_list(&self, pose: Pose) -> DrawList {
        match self {
            Character::Bunny => Bunny::default().draw_list(pose),
            Character::Kitten => Kitten::default().draw_list(pose),
            Character::Blob => Blob::default().draw_list(pose),
            Character::Ghost => Ghost::default().draw_list(pose),
        }
    }

    /// Render this character in the given pose at supersampled resolution.
    pub fn render(&self, pose: Pose) -> Canvas {
        render_list(&self.draw_list(pose))
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Character {
    type Err = CharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Character::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CharacterError::Unknown(s.to_string()))
    }
}

/// Floor division, matching how the layouts were authored for negative
/// offsets (`-15 / 2 == -8`).
pub(crate) fn floor_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_names() {
        let names: Vec<_> = Character::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["bunny", "kitten", "blob", "ghost"]);
        assert_eq!(Character::Ghost.display_name(), "Ghost");
    }

    #[test]
    fn test_character_from_str() {
        assert_eq!("kitten".parse::<Character>(), Ok(Character::Kitten));
        assert_eq!("BLOB".parse::<Character>(), Ok(Character::Blob));
        assert!("dragon".parse::<Character>().is_err());
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-15, 2), -8);
        assert_eq!(floor_div(-10, 3), -4);
        assert_eq!(floor_div(-15, 4), -4);
        assert_eq!(floor_div(0, 4), 0);
    }

    #[test]
    fn test_every_pose_draws_something() {
        for character in Character::ALL {
            for pose in Pose::ALL {
                let list = character.draw_list(pose);
                assert!(!list.is_empty(), "{character} {pose} has no steps");
            }
        }
    }

    #[test]
    fn test_draw_lists_are_deterministic() {
        for character in Character::ALL {
            for pose in Pose::ALL {
                assert_eq!(character.draw_list(pose), character.draw_list(pose));
            }
        }
    }
}
