//! Sprite generation runs.
//!
//! A run walks the selected characters in order, renders every pose at the
//! supersampled size, downsamples it and writes `<out>/<character>/<pose>.png`
//! plus `icon.png`.
//!
//! # Example
//!
//! ```no_run
//! use shimeji_sprites::build::{progress::ConsoleProgress, SpriteBuild};
//!
//! let result = SpriteBuild::new("chrome-extension/characters")
//!     .with_reporter(Box::new(ConsoleProgress::new()))
//!     .run()?;
//! println!("Wrote {} files", result.file_count());
//! # Ok::<(), shimeji_sprites::build::BuildError>(())
//! ```

pub mod pipeline;
pub mod progress;
pub mod result;

pub use pipeline::*;
pub use result::*;
