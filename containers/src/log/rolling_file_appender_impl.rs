// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Create (or append to) the log file at `path_str`. The file is never rotated.
///
/// Note that if you wrap this up in a non blocking writer, events that are emitted right
/// before the process exits can be lost.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name.
/// - The file or its parent directory can't be created or opened.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path
        .file_name()
        .and_then(|it| it.to_str())
        .ok_or_else(|| {
            miette::miette!(
                "Can't use {} as a log file, it has no file name.",
                path.display()
            )
        })?;

    let parent = path.parent().map(PathBuf::from).unwrap_or_default();

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .into_diagnostic()
}
