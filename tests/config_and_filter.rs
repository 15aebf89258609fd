use std::error::Error;
use std::fs;
use std::path::Path;

use tempfile::tempdir;

use buildwatch::cli::CliArgs;
use buildwatch::config::{load_config, Settings};
use buildwatch::exec::BuildCommand;
use buildwatch::watch::{enumerate_watch_dirs, PathFilter};

type TestResult = Result<(), Box<dyn Error>>;

fn bare_args() -> CliArgs {
    CliArgs {
        root: None,
        command: None,
        ext: None,
        config: None,
        log_level: None,
        build_args: Vec::new(),
    }
}

#[test]
fn settings_default_without_a_config_file() -> TestResult {
    let dir = tempdir()?;
    let cfg = load_config(None, dir.path())?;
    let settings = Settings::resolve(&bare_args(), &cfg);

    assert_eq!(settings.command, "go build");
    assert_eq!(settings.extension, "go");
    assert!(settings.exclude.is_empty());
    assert!(settings.extra_args.is_empty());

    Ok(())
}

#[test]
fn config_file_is_picked_up_and_cli_flags_win() -> TestResult {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("Buildwatch.toml"),
        r#"
command = "make generate"
extension = ".rs"
exclude = ["vendor/**"]
"#,
    )?;

    let cfg = load_config(None, dir.path())?;
    let settings = Settings::resolve(&bare_args(), &cfg);
    assert_eq!(settings.command, "make generate");
    // Leading dot is normalized away.
    assert_eq!(settings.extension, "rs");
    assert_eq!(settings.exclude, vec!["vendor/**".to_string()]);

    let mut args = bare_args();
    args.command = Some("cargo build".to_string());
    args.ext = Some("go".to_string());
    args.build_args = vec!["--release".to_string()];
    let settings = Settings::resolve(&args, &cfg);
    assert_eq!(settings.command, "cargo build");
    assert_eq!(settings.extension, "go");
    assert_eq!(settings.extra_args, vec!["--release".to_string()]);

    Ok(())
}

#[test]
fn explicit_missing_config_path_is_an_error() -> TestResult {
    let dir = tempdir()?;
    let missing = dir.path().join("nope.toml");
    assert!(load_config(Some(missing.as_path()), dir.path()).is_err());
    Ok(())
}

#[test]
fn build_command_splits_and_appends_passthrough_args() -> TestResult {
    let cmd = BuildCommand::new("go build", &["-tags".to_string(), "dev".to_string()])?;
    assert_eq!(cmd.program(), "go");
    assert_eq!(cmd.args(), ["build", "-tags", "dev"]);

    assert!(BuildCommand::new("", &[]).is_err());
    assert!(BuildCommand::new("   ", &[]).is_err());

    Ok(())
}

#[test]
fn filter_drops_hidden_files_and_foreign_extensions() -> TestResult {
    let root = Path::new("/project");
    let filter = PathFilter::new(root, "go", &[])?;

    assert!(filter.wants(Path::new("/project/main.go")));
    assert!(filter.wants(Path::new("/project/sub/deep/util.go")));

    assert!(!filter.wants(Path::new("/project/.main.go.swp")));
    assert!(!filter.wants(Path::new("/project/.hidden.go")));
    assert!(!filter.wants(Path::new("/project/readme.md")));
    assert!(!filter.wants(Path::new("/project/Makefile")));

    Ok(())
}

#[test]
fn filter_applies_exclude_globs_relative_to_root() -> TestResult {
    let root = Path::new("/project");
    let filter = PathFilter::new(root, "go", &["vendor/**".to_string()])?;

    assert!(filter.wants(Path::new("/project/main.go")));
    assert!(!filter.wants(Path::new("/project/vendor/dep/lib.go")));

    Ok(())
}

#[test]
fn enumeration_includes_root_and_skips_hidden_dirs() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    fs::create_dir_all(root.join("pkg/util"))?;
    fs::create_dir_all(root.join(".git/objects"))?;
    fs::write(root.join("pkg/util/a.go"), "x")?;

    let mut dirs = enumerate_watch_dirs(root)?;
    dirs.sort();

    assert_eq!(
        dirs,
        vec![
            root.to_path_buf(),
            root.join("pkg"),
            root.join("pkg/util"),
        ]
    );

    Ok(())
}

#[test]
fn enumeration_fails_on_missing_root() -> TestResult {
    let dir = tempdir()?;
    let gone = dir.path().join("does-not-exist");
    assert!(enumerate_watch_dirs(&gone).is_err());
    Ok(())
}
