// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber, which once set, can't be unset or changed. This is great
/// for apps.
///
/// Logging is **DISABLED** by **default**. Nothing is installed if the level filter is
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber has already
/// been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return crate::ok!();
    }

    let layers = try_create_layers(it)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, which is active until the returned guard is dropped. This is
/// great for tests, since each test thread can have its own.
///
/// Logging is **DISABLED** by **default**. Returns [`None`] if the level filter is
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    let layers = try_create_layers(it)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// Returns the layers. This does not install anything, the caller has to add them to a
/// registry, eg: `tracing_subscriber::registry().with(layers).init()`.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Applies to every layer, including ones that don't have their own filter.
    return_it.push(Box::new(level_filter));

    if let Some(layer) = try_create_display_layer(level_filter, writer_config.clone()) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, writer_config)? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().compact().with_target(false);

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, file_path) | WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path.as_str())?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::{RingBuffer, SinglyLinkedList, assert_eq2};

    fn temp_log_file(dir: &tempfile::TempDir) -> String {
        dir.path()
            .join("containers.log")
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stdout),
            );
        assert!(layer.is_some());

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, WriterConfig::None);
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_both_layers() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let layers = try_create_layers(TracingConfig {
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                file_path.clone(),
            ),
            level_filter: LevelFilter::DEBUG,
        })
        .unwrap();

        // Level filter, display, and file.
        assert_eq2!(layers.len(), 3);
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    #[serial]
    fn test_off_installs_nothing() {
        assert!(matches!(
            try_initialize_logging_thread_local(LevelFilter::OFF),
            Ok(None)
        ));
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }

    #[test]
    #[serial]
    fn test_container_events_are_written_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let guard = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::File(file_path.clone()),
            level_filter: LevelFilter::TRACE,
        })
        .unwrap();
        assert!(guard.is_some());

        let mut ring_buffer = RingBuffer::create(1).unwrap();
        ring_buffer.write(1);
        ring_buffer.write(2);
        let _unused = ring_buffer.read();
        let _unused = ring_buffer.read();

        let mut list = SinglyLinkedList::create();
        let _unused = list.remove_head();

        drop(guard);

        let output = std::fs::read_to_string(&file_path).unwrap();
        assert!(output.contains("write overwrote oldest"));
        assert!(output.contains("read on empty ring buffer"));
        assert!(output.contains("operation on empty list"));
        assert!(output.contains("TRACE"));
    }

    #[test]
    #[serial]
    fn test_level_filter_drops_trace_events() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = temp_log_file(&dir);

        let guard = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::File(file_path.clone()),
            level_filter: LevelFilter::DEBUG,
        })
        .unwrap();

        let mut ring_buffer = RingBuffer::create(1).unwrap();
        ring_buffer.write(1);
        ring_buffer.write(2);

        drop(guard);

        let output = std::fs::read_to_string(&file_path).unwrap();
        assert!(output.contains("write overwrote oldest"));
        assert!(!output.contains("TRACE"));
    }
}
