//! Procedural sprite generator for desktop-pet characters
//!
//! This library provides functionality to:
//! - Draw four characters (bunny, kitten, blob, ghost) in eleven poses on a
//!   4x supersampled 512x512 canvas
//! - Downsample each frame to 128x128 with a Lanczos filter
//! - Write `<out>/<character>/<pose>.png` plus an `icon.png` per character
//!
//! # Example
//!
//! ```
//! use shimeji_sprites::build::render_sprite;
//! use shimeji_sprites::characters::Character;
//! use shimeji_sprites::pose::Pose;
//!
//! let sprite = render_sprite(Character::Bunny, Pose::Sit);
//! assert_eq!(sprite.dimensions(), (128, 128));
//! ```

pub mod build;
pub mod characters;
pub mod cli;
pub mod config;
pub mod draw;
pub mod geometry;
pub mod output;
pub mod pose;
pub mod renderer;
pub mod shapes;
