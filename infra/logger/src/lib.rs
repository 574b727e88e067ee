//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: a compact (or JSON)
//! console layer, an optional non-blocking rolling file layer, and an
//! [`EnvFilter`] seeded from the configured level and `RUST_LOG`.
//!
//! The builder is typestated: [`LoggerBuilder::name`] must be called before
//! [`LoggerBuilder::init`], and file-only knobs (rotation, retention) only
//! exist after [`LoggerBuilder::path`].
//!
//! ```rust
//! # use regscope_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("regscope-docs")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use sealed::Sealed;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct Settings {
    console: bool,
    json: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    path: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            json: false,
            level: LevelFilter::INFO,
            env_filter: None,
            path: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFile;

impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFile {}

/// Configures the global subscriber. Obtain one from [`Logger::builder`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    settings: Settings,
    name: N,
    output: PhantomData<F>,
}

impl<N: Sealed, F: Sealed> LoggerBuilder<N, F> {
    fn with_name<M: Sealed>(self, name: M) -> LoggerBuilder<M, F> {
        LoggerBuilder { settings: self.settings, name, output: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the application; used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        self.with_name(Named(name.into()))
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    /// Minimum level when neither `RUST_LOG` nor [`Self::env_filter`] say otherwise.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives such as `regscope_compliance=debug,hyper=warn`.
    /// Parsed in [`Self::init`]; invalid directives are rejected there.
    #[must_use]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.env_filter = Some(directives.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Emits JSON records on every enabled output.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Adds a rolling file output under `path`.
    pub fn path(mut self, path: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        self.settings.path = Some(path.into());
        LoggerBuilder { settings: self.settings, name: self.name, output: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive: dropping it stops the file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, zero retention,
    ///   bad filter directives or no enabled output.
    /// * [`LoggerError::Appender`] when the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name), .. } = self;
        validate(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            let console = fmt::layer().with_target(true);
            layers.push(if settings.json {
                console.json().boxed()
            } else {
                console.compact().with_ansi(true).boxed()
            });
        }

        let guard = match &settings.path {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Creating log directory {}", dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(settings.rotation.clone())
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(settings.max_files)
                    .build(dir)
                    .context("Building rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = fmt::layer().with_writer(writer).with_ansi(false);
                layers.push(if settings.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled; turn on the console or set a log path".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .context("Installing global subscriber")?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<Named, WithFile> {
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// How many rotated files to keep.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }
}

/// Handle for the installed subscriber; owns the file writer's guard.
#[must_use = "dropping the logger stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, output: PhantomData }
    }

    /// The non-blocking writer guard, present only when file output is on.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logger shutting down, flushing file output");
        }
    }
}

/// Parses a level name (`trace`..`error`, `off`), case-insensitively.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(raw: &str) -> Result<LevelFilter, LoggerError> {
    raw.trim().parse::<LevelFilter>().map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("unknown log level '{raw}'").into(),
        context: None,
    })
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("invalid filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("regscope-test");
        assert!(builder.settings.console);
        assert!(!builder.settings.json);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert!(builder.settings.path.is_none());
        assert_eq!(builder.settings.max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    fn file_options_are_recorded() {
        let builder = Logger::builder()
            .name("regscope-test")
            .env_filter("regscope=debug")
            .json(true)
            .path("/tmp/regscope-logs")
            .max_files(3)
            .rotation(Rotation::HOURLY);

        assert!(builder.settings.json);
        assert_eq!(builder.settings.max_files, 3);
        assert_eq!(builder.settings.env_filter.as_deref(), Some("regscope=debug"));
        assert_eq!(builder.settings.path, Some(PathBuf::from("/tmp/regscope-logs")));
    }

    #[test]
    #[serial]
    fn blank_name_is_rejected() {
        let err = Logger::builder().name("  ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn zero_retention_is_rejected() {
        let err = Logger::builder()
            .name("regscope-test")
            .path(std::env::temp_dir())
            .max_files(0)
            .init()
            .expect_err("zero retention");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn bad_filter_is_rejected() {
        let err = Logger::builder()
            .name("regscope-test")
            .env_filter("regscope=notalevel")
            .init()
            .expect_err("bad directive");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn no_outputs_is_rejected() {
        let err = Logger::builder().name("regscope-test").console(false).init().expect_err("mute");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("debug").ok(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN ").ok(), Some(LevelFilter::WARN));
        assert!(parse_level("loud").is_err());
    }
}
