//! Generation progress reporting.
//!
//! Status lines go through a [`ProgressReporter`] so the pipeline never
//! writes to the terminal directly. [`ConsoleProgress`] prints the
//! human-readable lines; [`NullProgress`] discards everything.
//!
//! # Example
//!
//! ```
//! use shimeji_sprites::build::progress::{ConsoleProgress, ProgressEvent, ProgressReporter};
//! use shimeji_sprites::characters::Character;
//!
//! let reporter = ConsoleProgress::with_output(std::io::sink());
//! reporter.report(ProgressEvent::CharacterStarted { character: Character::Bunny });
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crate::characters::Character;

/// Events reported during a run.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Run started
    RunStarted {
        /// Number of characters to generate
        total_characters: usize,
    },
    /// Rendering of one character set started
    CharacterStarted { character: Character },
    /// One PNG was written
    FileWritten {
        character: Character,
        path: PathBuf,
    },
    /// All files of one character were written
    CharacterCompleted {
        character: Character,
        files: usize,
        duration_ms: u64,
    },
    /// Run finished successfully
    RunCompleted {
        files: usize,
        duration_ms: u64,
    },
}

/// Trait for progress reporters.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event.
    fn report(&self, event: ProgressEvent);

    /// Check if this reporter wants verbose output.
    fn is_verbose(&self) -> bool {
        false
    }
}

/// A progress reporter that discards all events.
#[derive(Debug, Default)]
pub struct NullProgress;

impl NullProgress {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NullProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// How status text is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Ansi,
}

impl Style {
    const GREEN: &'static str = "32";
    const CYAN: &'static str = "36";
    const DIM: &'static str = "2";

    fn paint(self, code: &str, text: &str) -> String {
        match self {
            Style::Plain => text.to_string(),
            Style::Ansi => format!("\x1b[{}m{}\x1b[0m", code, text),
        }
    }
}

/// Output sink plus the run position used for the verbose `[n/total]` prefix.
struct Console {
    out: Box<dyn Write + Send>,
    finished: usize,
    total: usize,
}

/// Prints status lines to stderr (or any writer), optionally colored.
pub struct ConsoleProgress {
    style: Style,
    verbose: bool,
    console: Mutex<Console>,
}

impl std::fmt::Debug for ConsoleProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleProgress")
            .field("style", &self.style)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl ConsoleProgress {
    /// Create a reporter writing to stderr, colored when stderr is a terminal.
    pub fn new() -> Self {
        let colored = atty::is(atty::Stream::Stderr);
        Self::with_output(std::io::stderr()).with_colors(colored)
    }

    /// Create an uncolored reporter writing to `output`.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        let console = Console { out: Box::new(output), finished: 0, total: 0 };
        Self { style: Style::Plain, verbose: false, console: Mutex::new(console) }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.style = if use_colors { Style::Ansi } else { Style::Plain };
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Lines to print for `event`, updating the run position.
    fn lines(&self, event: ProgressEvent, console: &mut Console) -> Vec<String> {
        let style = self.style;
        match event {
            ProgressEvent::RunStarted { total_characters } => {
                console.total = total_characters;
                console.finished = 0;
                Vec::new()
            }
            ProgressEvent::CharacterStarted { character } => {
                let line = format!("Generating {} sprites...", character.display_name());
                if self.verbose {
                    let position = format!("[{}/{}]", console.finished + 1, console.total);
                    vec![format!("{} {}", style.paint(Style::DIM, &position), line)]
                } else {
                    vec![line]
                }
            }
            ProgressEvent::FileWritten { path, .. } if self.verbose => {
                vec![format!("  {} {}", style.paint(Style::CYAN, "wrote"), path.display())]
            }
            ProgressEvent::FileWritten { .. } => Vec::new(),
            ProgressEvent::CharacterCompleted { character, files, duration_ms } => {
                console.finished += 1;
                if !self.verbose {
                    return Vec::new();
                }
                let ok = style.paint(Style::GREEN, "ok");
                let took = format_duration(duration_ms);
                vec![format!("  {} {} ({} files, {})", ok, character, files, took)]
            }
            ProgressEvent::RunCompleted { files, duration_ms } => {
                let mut lines = vec![style.paint(Style::GREEN, "Done! All sprites generated.")];
                if self.verbose {
                    let plural = if files == 1 { "" } else { "s" };
                    let took = format_duration(duration_ms);
                    let summary = format!("{} file{} in {}", files, plural, took);
                    lines.push(style.paint(Style::DIM, &summary));
                }
                lines
            }
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&self, event: ProgressEvent) {
        let Ok(mut console) = self.console.lock() else {
            return;
        };
        for line in self.lines(event, &mut console) {
            let _ = writeln!(console.out, "{}", line);
        }
    }

    fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Format a duration in milliseconds to a human-readable string.
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

/// Milliseconds in a duration, saturating.
pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
