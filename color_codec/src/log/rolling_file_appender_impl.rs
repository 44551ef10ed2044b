// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_appender::rolling::RollingFileAppender;

/// Create a file appender that never rolls over, for the log file at `path_str`. A bare
/// file name is created in the current folder.
///
/// # Errors
///
/// Returns an error if the path has no file name, or if the file can't be created.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it.to_path_buf(),
        _ => PathBuf::from("."),
    };

    RollingFileAppender::builder()
        .filename_prefix(file_name.to_string_lossy())
        .build(&parent)
        .map_err(|err| {
            miette::miette!(
                "Can't create log file {} in folder {}: {err}",
                file_name.to_string_lossy(),
                parent.display()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("color_codec_test.log");
        let file_path = file_path.to_str().unwrap().to_string();

        assert!(try_create(&file_path).is_ok());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_without_file_name() {
        assert!(try_create("..").is_err());
    }
}
