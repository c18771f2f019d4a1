//! End-to-end generation tests
//!
//! Runs the full pipeline into temporary directories and checks the written
//! sprite sets: layout, image format, icon identity and determinism.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use image::RgbaImage;
use shimeji_sprites::build::SpriteBuild;
use shimeji_sprites::characters::Character;
use shimeji_sprites::geometry::SUPERSAMPLE;
use shimeji_sprites::output::{finalize, OutputName};
use shimeji_sprites::pose::Pose;

/// Generate every character into a fresh temp dir.
fn generate_all(jobs: usize) -> TempDir {
    let temp = TempDir::new().expect("should create temp dir");
    let result = SpriteBuild::new(temp.path())
        .with_jobs(jobs)
        .run()
        .expect("generation should succeed");
    assert_eq!(result.file_count(), 48);
    temp
}

/// SHA-256 of every file under `root`, keyed by relative path.
fn digest_tree(root: &Path) -> BTreeMap<String, String> {
    let mut digests = BTreeMap::new();
    for character in Character::ALL {
        for name in OutputName::all() {
            let rel = format!("{}/{}", character, name.file_name());
            let bytes = fs::read(root.join(&rel)).expect("sprite should exist");
            let hash = Sha256::digest(&bytes);
            let hex: String = hash.iter().map(|b| format!("{:02x}", b)).collect();
            digests.insert(rel, hex);
        }
    }
    digests
}

#[test]
fn test_all_sprites_written_as_rgba_128() {
    let temp = generate_all(2);

    for character in Character::ALL {
        let dir = temp.path().join(character.name());
        let mut files: Vec<String> = fs::read_dir(&dir)
            .expect("character dir should exist")
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        assert_eq!(files.len(), 12, "{}: {:?}", character, files);

        for name in OutputName::all() {
            let path = dir.join(name.file_name());
            let image = image::open(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
            assert_eq!(image.color(), image::ColorType::Rgba8, "{}", path.display());
            assert_eq!((image.width(), image.height()), (128, 128), "{}", path.display());
        }
    }
}

#[test]
fn test_icon_identical_to_stand_neutral() {
    let temp = generate_all(4);

    for character in Character::ALL {
        let dir = temp.path().join(character.name());
        let icon = image::open(dir.join("icon.png")).unwrap().to_rgba8();
        let neutral = image::open(dir.join("stand-neutral.png")).unwrap().to_rgba8();
        assert_eq!(icon, neutral, "{}", character);
    }
}

/// Whether any source pixel within one output pixel of `(ox, oy)` is visible.
fn source_visible_near(source: &RgbaImage, ox: u32, oy: u32) -> bool {
    let k = SUPERSAMPLE as u32;
    let (w, h) = source.dimensions();
    let x_range = ox.saturating_sub(1) * k..((ox + 2) * k).min(w);
    let y_range = oy.saturating_sub(1) * k..((oy + 2) * k).min(h);
    y_range.into_iter().any(|y| x_range.clone().any(|x| source.get_pixel(x, y)[3] != 0))
}

#[test]
fn test_alpha_is_zero_outside_silhouette() {
    for character in Character::ALL {
        for pose in Pose::ALL {
            let canvas = character.render(pose);
            let sprite = finalize(&canvas);

            let mut visible = 0;
            for (x, y, p) in sprite.enumerate_pixels() {
                if source_visible_near(canvas.image(), x, y) {
                    visible += usize::from(p[3] > 200);
                } else {
                    assert_eq!(p.0, [0, 0, 0, 0], "{} {} halo at ({x},{y})", character, pose);
                }
            }
            assert!(visible > 0, "{} {} has no visible figure", character, pose);
        }
    }
}

#[test]
fn test_written_corners_are_transparent() {
    let temp = generate_all(4);

    for character in Character::ALL {
        for name in OutputName::all() {
            let path = temp.path().join(character.name()).join(name.file_name());
            let image = image::open(&path).unwrap().to_rgba8();
            for (x, y) in [(0, 0), (127, 0), (0, 127), (127, 127)] {
                let p = image.get_pixel(x, y).0;
                assert_eq!(p, [0, 0, 0, 0], "{} corner ({x},{y})", path.display());
            }
        }
    }
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let first = generate_all(1);
    let second = generate_all(4);
    assert_eq!(digest_tree(first.path()), digest_tree(second.path()));
}

#[test]
fn test_rerun_overwrites_existing_files() {
    let temp = generate_all(2);
    let before = digest_tree(temp.path());

    let stale = temp.path().join("bunny/sit.png");
    fs::write(&stale, b"stale").unwrap();

    SpriteBuild::new(temp.path()).with_characters(vec![Character::Bunny]).run().unwrap();
    assert_eq!(digest_tree(temp.path()), before);
}

#[test]
fn test_poses_differ_from_each_other() {
    let temp = generate_all(4);
    let digests = digest_tree(temp.path());

    for character in Character::ALL {
        let neutral = &digests[&format!("{}/stand-neutral.png", character)];
        for name in OutputName::all() {
            if matches!(name, OutputName::Icon) || name.file_name() == "stand-neutral.png" {
                continue;
            }
            let rel = format!("{}/{}", character, name.file_name());
            assert_ne!(&digests[&rel], neutral, "{} should differ from stand-neutral", rel);
        }
    }
}
