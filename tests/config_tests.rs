use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use shot_compare::config::{load_config, ComparisonConfig, MatchingBox, Rect};
use shot_compare::format::{resolve, OutputFormat};
use shot_compare::utils::error::FormatError;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_defaults_base_dir_to_config_folder() {
    let file = write_config("threshold = 0.25\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.base_dir, file.path().parent().unwrap().to_path_buf());
    assert_eq!(config.threshold, 0.25);
}

#[test]
fn test_load_config_relative_base_dir() {
    let file = write_config("base_dir = \"screens\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(
        config.base_dir,
        file.path().parent().unwrap().join(PathBuf::from("screens"))
    );
}

#[test]
fn test_legacy_matching_box_normalized_without_error() {
    let file = write_config(
        r#"
        matching_box = [{ x = 0, y = 0, width = 100, height = 20 }]
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.matching_box,
        MatchingBox {
            ignore_rectangles: vec![Rect::new(0, 0, 100, 20)],
            include_rectangles: vec![],
        }
    );
}

#[test]
fn test_builder_and_file_agree() {
    let file = write_config(
        r#"
        base_dir = "/abs/screens"
        threshold = 3.0
        ignore_colors = true

        [matching_box]
        include_rectangles = [{ x = 5, y = 5, width = 10, height = 10 }]
        "#,
    );

    let loaded = load_config(file.path()).unwrap();
    let built = ComparisonConfig::new("/abs/screens")
        .with_threshold(3.0)
        .with_ignore_colors(true)
        .with_matching_box(MatchingBox::including(vec![Rect::new(5, 5, 10, 10)]));

    assert_eq!(loaded, built);
}

#[test]
fn test_out_of_range_threshold_is_accepted() {
    let file = write_config("threshold = -5.0\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.threshold, -5.0);
    assert_eq!(config.warnings().len(), 1);
}

#[test]
fn test_format_resolution_table() {
    let cases = [
        (".png", OutputFormat::Png, 8),
        (".jpg", OutputFormat::Jpeg, 85),
        (".jpeg", OutputFormat::Jpeg, 85),
        (".webp", OutputFormat::Webp, 85),
    ];

    for (ext, format, quality) in cases {
        let settings = resolve(ext, None, None).unwrap();
        assert_eq!(settings.format, format, "format for {}", ext);
        assert_eq!(settings.quality, quality, "quality for {}", ext);
    }

    assert_eq!(
        resolve(".bmp", None, None),
        Err(FormatError::Unsupported("bmp".to_string()))
    );
}
