use std::path::PathBuf;

use shot_compare::commands::{describe_resolution, resolve_path, validate_config, ResolveArgs};
use shot_compare::format::OutputFormat;

#[test]
fn test_resolve_default_args() {
    let resolution = describe_resolution(&ResolveArgs::default()).unwrap();

    assert_eq!(resolution.target.folder, PathBuf::from("."));
    assert_eq!(resolution.target.name, "test");
    assert_eq!(resolution.settings.format, OutputFormat::Png);
    assert_eq!(resolution.settings.quality, 8);
}

#[test]
fn test_resolve_path_prints() {
    let args = ResolveArgs {
        path: PathBuf::from("/out/shot.jpeg"),
        compression: Some(50),
        ..Default::default()
    };

    assert!(resolve_path(&args).is_ok());
}

#[test]
fn test_resolve_forced_unsupported_format() {
    let args = ResolveArgs {
        path: PathBuf::from("/out/shot.png"),
        force_ext: Some("gif".to_string()),
        ..Default::default()
    };

    assert!(resolve_path(&args).is_err());
}

#[test]
fn test_validate_missing_config() {
    assert!(validate_config(&PathBuf::from("/no/such/config.toml"), false).is_err());
}
