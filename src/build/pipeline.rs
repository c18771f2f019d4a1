//! Sprite generation pipeline.
//!
//! Characters are generated one after another; the poses of a single
//! character are rendered, downsampled and written on a rayon pool of
//! `jobs` workers. Output bytes do not depend on the job count.

use std::path::{Path, PathBuf};
use std::time::Instant;

use image::RgbaImage;
use rayon::prelude::*;
use thiserror::Error;

use crate::build::progress::{duration_ms, NullProgress, ProgressEvent, ProgressReporter};
use crate::build::result::{BuildResult, CharacterResult};
use crate::characters::Character;
use crate::output::{finalize, save_png, sprite_path, OutputError, OutputName};
use crate::pose::Pose;

/// Error that aborts a run.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Default number of parallel jobs (uses available parallelism).
pub fn default_jobs() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Render one character pose and downsample it to the final sprite.
pub fn render_sprite(character: Character, pose: Pose) -> RgbaImage {
    finalize(&character.render(pose))
}

/// A configured generation run.
///
/// ```no_run
/// use shimeji_sprites::build::SpriteBuild;
///
/// let result = SpriteBuild::new("chrome-extension/characters").with_jobs(2).run()?;
/// assert_eq!(result.file_count(), 48);
/// # Ok::<(), shimeji_sprites::build::BuildError>(())
/// ```
pub struct SpriteBuild {
    out_dir: PathBuf,
    jobs: usize,
    characters: Vec<Character>,
    reporter: Box<dyn ProgressReporter>,
}

impl std::fmt::Debug for SpriteBuild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteBuild")
            .field("out_dir", &self.out_dir)
            .field("jobs", &self.jobs)
            .field("characters", &self.characters)
            .finish()
    }
}

impl SpriteBuild {
    /// A run writing every character into `out_dir`, silently.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            jobs: default_jobs(),
            characters: Character::ALL.to_vec(),
            reporter: Box::new(NullProgress::new()),
        }
    }

    /// Set the number of parallel jobs; zero is treated as one.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Restrict the run to a subset of characters, generated in the given order.
    pub fn with_characters(mut self, characters: Vec<Character>) -> Self {
        self.characters = characters;
        self
    }

    pub fn with_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Generate every selected character.
    ///
    /// Stops at the first write failure; files from characters that already
    /// finished stay on disk.
    pub fn run(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build()?;

        self.reporter.report(ProgressEvent::RunStarted { total_characters: self.characters.len() });

        let mut result = BuildResult::new();
        for &character in &self.characters {
            let character_result = pool.install(|| self.generate_character(character))?;
            result.add_result(character_result);
        }

        let result = result.with_duration(start.elapsed());
        self.reporter.report(ProgressEvent::RunCompleted {
            files: result.file_count(),
            duration_ms: duration_ms(result.total_duration),
        });
        Ok(result)
    }

    /// Write the eleven pose frames of one character, then its icon.
    fn generate_character(&self, character: Character) -> Result<CharacterResult, BuildError> {
        let start = Instant::now();
        self.reporter.report(ProgressEvent::CharacterStarted { character });

        let frames = Pose::ALL
            .par_iter()
            .map(|&pose| {
                let image = render_sprite(character, pose);
                let path = self.write(character, OutputName::Pose(pose), &image)?;
                // Keep the icon's source frame to write it without re-rendering
                let icon = (pose == Pose::ICON).then_some(image);
                Ok((path, icon))
            })
            .collect::<Result<Vec<_>, OutputError>>()?;

        let mut outputs = Vec::with_capacity(frames.len() + 1);
        let mut icon = None;
        for (path, frame) in frames {
            outputs.push(path);
            if frame.is_some() {
                icon = frame;
            }
        }

        let icon = match icon {
            Some(image) => image,
            None => render_sprite(character, Pose::ICON),
        };
        outputs.push(self.write(character, OutputName::Icon, &icon)?);

        let duration = start.elapsed();
        self.reporter.report(ProgressEvent::CharacterCompleted {
            character,
            files: outputs.len(),
            duration_ms: duration_ms(duration),
        });
        Ok(CharacterResult { character, outputs, duration })
    }

    fn write(
        &self,
        character: Character,
        name: OutputName,
        image: &RgbaImage,
    ) -> Result<PathBuf, OutputError> {
        let path = sprite_path(&self.out_dir, character.name(), name);
        save_png(image, &path)?;
        self.reporter.report(ProgressEvent::FileWritten { character, path: path.clone() });
        Ok(path)
    }
}
