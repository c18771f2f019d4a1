//! Integration tests for the shimeji-sprites CLI
//!
//! These tests run the built binary in temporary directories and check exit
//! codes, status output and the files it writes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn sprites_binary() -> &'static str {
    env!("CARGO_BIN_EXE_shimeji-sprites")
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(sprites_binary())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute shimeji-sprites")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_arguments_generates_default_tree() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stderr(&output),
        "Generating Bunny sprites...\n\
         Generating Kitten sprites...\n\
         Generating Blob sprites...\n\
         Generating Ghost sprites...\n\
         Done! All sprites generated.\n"
    );

    let root = temp.path().join("chrome-extension/characters");
    for character in ["bunny", "kitten", "blob", "ghost"] {
        let files = fs::read_dir(root.join(character)).unwrap().count();
        assert_eq!(files, 12, "{}", character);
        assert!(root.join(character).join("icon.png").is_file());
        assert!(root.join(character).join("resist-frame-2.png").is_file());
    }
}

#[test]
fn test_out_and_character_flags() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &["--out", "sprites", "-c", "ghost", "-j", "1"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stderr(&output), "Generating Ghost sprites...\nDone! All sprites generated.\n");
    assert!(temp.path().join("sprites/ghost/stand-neutral.png").is_file());
    assert!(!temp.path().join("sprites/bunny").exists());
    assert!(!temp.path().join("chrome-extension").exists());
}

#[test]
fn test_quiet_flag_prints_nothing() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &["-q", "-o", "out", "-c", "blob"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(output.stdout.is_empty());
    assert!(temp.path().join("out/blob/icon.png").is_file());
}

#[test]
fn test_verbose_lists_written_files() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &["-v", "-o", "out", "-c", "kitten"]);

    assert!(output.status.success());
    let text = stderr(&output);
    assert!(text.contains("Generating Kitten sprites..."));
    assert!(text.contains("kitten/sit.png"));
    assert!(text.contains("kitten/icon.png"));
    assert!(text.contains("Done! All sprites generated."));
}

#[test]
fn test_config_in_working_directory_is_ignored_without_flag() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("sprites.toml"),
        "[output]\ndir = \"assets/pets\"\n\n[build]\ncharacters = [\"bunny\"]\n",
    )
    .unwrap();

    let output = run_in(temp.path(), &["-q"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!temp.path().join("assets").exists());
    let root = temp.path().join("chrome-extension/characters");
    for character in ["bunny", "kitten", "blob", "ghost"] {
        assert!(root.join(character).join("icon.png").is_file(), "{}", character);
    }
}

#[test]
fn test_explicit_config_flag_is_honored() {
    let temp = TempDir::new().unwrap();
    let settings = temp.path().join("settings");
    fs::create_dir_all(&settings).unwrap();
    fs::write(
        settings.join("pets.toml"),
        "[output]\ndir = \"../assets/pets\"\n\n[build]\ncharacters = [\"bunny\"]\n",
    )
    .unwrap();

    let output = run_in(temp.path(), &["-q", "--config", "settings/pets.toml"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    // Relative dir resolves against the config file's directory
    assert!(temp.path().join("settings/../assets/pets/bunny/sit.png").is_file());
    assert!(!temp.path().join("assets/pets/kitten").exists());
    assert!(!temp.path().join("chrome-extension").exists());
}

#[test]
fn test_invalid_config_exits_with_code_2() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sprites.toml"), "[build]\ncharacters = [\"dragon\"]\n").unwrap();

    let output = run_in(temp.path(), &["--config", "sprites.toml"]);

    assert_eq!(output.status.code(), Some(2));
    let text = stderr(&output);
    assert!(text.starts_with("Error:"), "stderr: {}", text);
    assert!(text.contains("dragon"));
    assert!(!temp.path().join("chrome-extension").exists());
}

#[test]
fn test_missing_config_file_exits_with_code_2() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &["--config", "absent.toml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to read config"));
    assert!(!temp.path().join("chrome-extension").exists());
}

#[test]
fn test_unknown_flag_value_exits_with_code_2() {
    let temp = TempDir::new().unwrap();
    let output = run_in(temp.path(), &["--character", "dragon"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unwritable_output_exits_with_code_1() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("blocked"), b"a file, not a directory").unwrap();

    let output = run_in(temp.path(), &["-o", "blocked", "-c", "bunny"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
}
