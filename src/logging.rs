// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{prelude::*, Layer};

/// Controls the log format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Pretty output on a terminal, plain text otherwise.
    #[default]
    Auto,
    /// Compact output with colors.
    Pretty,
    /// Plain text without colors.
    Simplified,
    /// JSON lines.
    Json,
}

/// The logging level
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl Level {
    pub const fn level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
            Self::Off => LevelFilter::OFF,
        }
    }
}

/**
Install the global `tracing` subscriber. Logs always go to stderr so that
stdout only carries results.

Calling this more than once is a no-op.
*/
pub fn init(level: Level, format: LogFormat) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let layer = match (format, console::user_attended_stderr()) {
        (LogFormat::Auto, true) | (LogFormat::Pretty, _) => layer.compact().without_time().boxed(),
        (LogFormat::Auto, false) | (LogFormat::Simplified, _) => layer.with_ansi(false).boxed(),
        (LogFormat::Json, _) => layer
            .json()
            .flatten_event(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
    };

    let _ = tracing_subscriber::registry()
        .with(layer.with_filter(level.level_filter()))
        .try_init();
}

/* -------------------------------------------------------------------------- */
