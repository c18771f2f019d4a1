//! shimeji-sprites - Generate the desktop-pet character sprite sets

use std::process::ExitCode;

use shimeji_sprites::cli;

fn main() -> ExitCode {
    cli::run()
}
