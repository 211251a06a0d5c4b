// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! JSON line logging on top of `tracing`.
//!
//! ```yaml
//! logger:
//!   level: "debug"          # EnvFilter syntax; RUST_LOG wins when set
//!   output: "stderr"        # stdout | stderr | file
//!   is_show_line: true
//!   file:
//!     path: "logs/scsi-opcodes.log"
//!     rotation_frequency: "daily"
//! ```

use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{
    Event, Subscriber,
    field::{Field, Visit},
};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, FmtContext, FormatEvent, FormatFields, FormattedFields,
        format::{FmtSpan, JsonFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
};

#[derive(Debug, Deserialize)]
struct LoggerFile {
    logger: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct LogConfig {
    level: String,
    output: LogOutput,
    #[serde(default)]
    is_show_line: bool,
    #[serde(default)]
    is_show_module_path: bool,
    #[serde(default)]
    is_show_target: bool,
    file: Option<LogFileConfig>,
}

impl LogConfig {
    fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read logger config {path:?}"))?;
        let parsed: LoggerFile = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse logger config {path:?}"))?;
        Ok(parsed.logger)
    }

    fn filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .with_context(|| format!("invalid log level {:?}", self.level))
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum LogOutput {
    Stdout,
    Stderr,
    File,
}

impl LogOutput {
    fn writer(self, file: Option<&LogFileConfig>) -> Result<(NonBlocking, WorkerGuard)> {
        Ok(match self {
            LogOutput::Stdout => tracing_appender::non_blocking(std::io::stdout()),
            LogOutput::Stderr => tracing_appender::non_blocking(std::io::stderr()),
            LogOutput::File => {
                let Some(file) = file else {
                    bail!("logger output is 'file' but no file section is given");
                };
                tracing_appender::non_blocking(file.appender())
            },
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
struct LogFileConfig {
    path: String,
    rotation_frequency: Option<String>,
}

impl LogFileConfig {
    fn rotation(&self) -> Rotation {
        match self.rotation_frequency.as_deref() {
            Some("minutely") => Rotation::MINUTELY,
            Some("hourly") => Rotation::HOURLY,
            Some("daily") => Rotation::DAILY,
            _ => Rotation::NEVER,
        }
    }

    fn appender(&self) -> RollingFileAppender {
        let path = Path::new(&self.path);
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let name = path.file_name().unwrap_or_default();
        RollingFileAppender::new(self.rotation(), dir, name)
    }
}

#[derive(Serialize)]
struct LogLine<'a> {
    timestamp: String,
    level: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    module_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    fields: Map<String, Value>,
}

/// One JSON object per event; fields of enclosing spans are merged in and
/// their names listed under `span_names`.
struct JsonFormatter {
    config: Arc<LogConfig>,
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);
        let mut fields = visitor.0;

        if let Some(scope) = ctx.event_scope() {
            let mut span_names = Vec::new();
            for span in scope.from_root() {
                span_names.push(span.name());
                if let Some(ext) = span.extensions().get::<FormattedFields<JsonFields>>()
                    && let Ok(Value::Object(span_fields)) =
                        serde_json::from_str::<Value>(&ext.fields)
                {
                    fields.extend(span_fields);
                }
            }
            fields.insert("span_names".into(), json!(span_names));
        }

        let meta = event.metadata();
        let cfg = &self.config;
        let line = LogLine {
            timestamp: chrono::Local::now().to_rfc3339(),
            level: meta.level().as_str(),
            target: cfg.is_show_target.then_some(meta.target()),
            module_path: cfg.is_show_module_path.then_some(meta.module_path()).flatten(),
            line: cfg.is_show_line.then_some(meta.line()).flatten(),
            fields,
        };
        let text = serde_json::to_string(&line).map_err(|_| std::fmt::Error)?;
        writeln!(writer, "{text}")
    }
}

#[derive(Default)]
struct JsonVisitor(Map<String, Value>);

impl Visit for JsonVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().into(), json!(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().into(), json!(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().into(), json!(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().into(), json!(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().into(), json!(format!("{value:?}")));
    }
}

/// Install the global JSON subscriber described by the YAML file at
/// `config_path`.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_logger(config_path: impl AsRef<Path>) -> Result<WorkerGuard> {
    let config = LogConfig::load(config_path.as_ref())?;
    let (writer, guard) = config.output.writer(config.file.as_ref())?;
    let filter = config.filter()?;

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .json()
        .event_format(JsonFormatter {
            config: Arc::new(config),
        })
        .fmt_fields(JsonFields::default());

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry().with(filter).with(layer),
    )
    .context("failed to set global default subscriber")?;

    Ok(guard)
}

/// Write a rendered report to `path`, creating parent directories.
pub fn save_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {dir:?}"))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {path:?}"))?;
    tracing::info!(path = ?path, bytes = content.len(), "report written");
    Ok(())
}
