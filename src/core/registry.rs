//! Logger registry: one shared [`Logger`] per name
//!
//! A [`Registry`] owns the default sink list and the name to logger map.
//! It can be used as an ordinary value, or through the process-wide
//! instance set up once by [`init`]:
//!
//! ```no_run
//! use named_logger::{registry, RegistryConfig};
//!
//! registry::init(RegistryConfig::default())?;
//! let logger = registry::get("Core")?;
//! logger.info("started", &[])?;
//! # Ok::<(), named_logger::LoggerError>(())
//! ```

use super::{
    config::RegistryConfig,
    error::{LoggerError, Result},
    line_format::LineFormat,
    logger::Logger,
    sink::{shared, SharedSink},
};
use crate::sinks::{Colorized, ConsoleSink, FileSink};
use chrono::Local;
use parking_lot::{const_mutex, Mutex, RwLock};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Registry> = OnceLock::new();
static INIT_LOCK: Mutex<()> = const_mutex(());

/// Name to logger map plus the sinks new loggers start with.
///
/// Entries are never removed. Each logger copies the default sink list when
/// it is created, so later changes to the defaults only reach loggers
/// created afterwards.
pub struct Registry {
    format: LineFormat,
    log_directory: Option<PathBuf>,
    default_sinks: RwLock<Vec<SharedSink>>,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    /// Build a registry and its default sinks: console (unless disabled),
    /// `latest.log` truncated, and a file named after the start time.
    ///
    /// Fails if the log directory cannot be created or a file cannot be
    /// opened; nothing falls back to a partial sink list.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        Self::with_console_sink(config, ConsoleSink::stdout())
    }

    /// [`Registry::new`] with `console` standing in for standard output.
    ///
    /// `console` is dropped unused when the configuration disables it.
    pub fn with_console_sink(config: RegistryConfig, console: ConsoleSink) -> Result<Self> {
        config.validate()?;
        // Resolve both file names before anything touches the disk
        let (latest, stamped) = config.file_paths(&Local::now())?;

        let dir = config.log_directory();
        std::fs::create_dir_all(dir).map_err(|e| {
            LoggerError::io_operation("creating log directory", dir.display().to_string(), e)
        })?;

        let mut sinks = Vec::with_capacity(3);
        if config.console {
            if config.colors {
                sinks.push(shared(Colorized::new(console)));
            } else {
                sinks.push(shared(console));
            }
        }
        sinks.push(shared(FileSink::truncate(latest)?));
        sinks.push(shared(FileSink::append(stamped)?));

        let mut registry = Self::with_sinks(config.format.as_str(), sinks);
        registry.log_directory = Some(config.log_directory);
        Ok(registry)
    }

    /// Build a registry around caller-supplied default sinks
    pub fn with_sinks(format: impl Into<LineFormat>, sinks: Vec<SharedSink>) -> Self {
        Self {
            format: format.into(),
            log_directory: None,
            default_sinks: RwLock::new(sinks),
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// The logger called `name`, created on first request.
    ///
    /// Repeated calls return the same instance.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(
                Logger::builder(name)
                    .format(self.format.clone())
                    .sinks(self.default_sinks.read().iter().cloned())
                    .build(),
            )
        });
        Arc::clone(logger)
    }

    /// The logger named after `T`'s simple type name
    pub fn get_by_type<T: ?Sized>(&self) -> Arc<Logger> {
        self.get(simple_type_name::<T>())
    }

    /// Add a sink for loggers created from now on
    pub fn add_default_sink(&self, sink: SharedSink) {
        self.default_sinks.write().push(sink);
    }

    pub fn default_sink_count(&self) -> usize {
        self.default_sinks.read().len()
    }

    /// Names of the default sinks, in dispatch order
    pub fn default_sink_names(&self) -> Vec<String> {
        self.default_sinks
            .read()
            .iter()
            .map(|sink| sink.lock().name().to_string())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Names of every logger created so far, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn format(&self) -> &LineFormat {
        &self.format
    }

    /// Directory holding the log files, if this registry opened them
    pub fn log_directory(&self) -> Option<&Path> {
        self.log_directory.as_deref()
    }
}

/// `T`'s type name without module path or generic arguments
/// (`alloc::vec::Vec<u8>` becomes `Vec`).
///
/// References, pointers, slices and arrays name their element type
/// (`&str` is `str`, `[u8; 4]` is `u8`); tuples take their first field
/// (`(a::B, c::D)` is `B`).
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let mut base = full;
    while let Some(rest) = ["&mut ", "&", "*const ", "*mut ", "(", "["]
        .iter()
        .find_map(|prefix| base.strip_prefix(*prefix))
    {
        base = rest.trim_start();
    }
    let end = base
        .find(|c| matches!(c, '<' | ',' | ';' | ')' | ']'))
        .unwrap_or(base.len());
    let base = &base[..end];
    match base.rsplit("::").next() {
        Some(name) if !name.is_empty() => name,
        _ => full,
    }
}

/// Set up the process-wide registry. Must run before [`get`].
///
/// Calling it a second time returns [`LoggerError::AlreadyInitialized`].
pub fn init(config: RegistryConfig) -> Result<&'static Registry> {
    let _guard = INIT_LOCK.lock();
    if GLOBAL.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let registry = Registry::new(config)?;
    GLOBAL
        .set(registry)
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    global()
}

/// [`init`] with the default configuration
pub fn init_default() -> Result<&'static Registry> {
    init(RegistryConfig::default())
}

pub fn global() -> Result<&'static Registry> {
    GLOBAL.get().ok_or(LoggerError::NotInitialized)
}

pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// The process-wide logger called `name`
pub fn get(name: &str) -> Result<Arc<Logger>> {
    Ok(global()?.get(name))
}

/// The process-wide logger named after `T`
pub fn get_by_type<T: ?Sized>() -> Result<Arc<Logger>> {
    Ok(global()?.get_by_type::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogMessage, Severity, Sink, Value};
    use std::io::{self, Write};
    use std::thread;
    use tempfile::TempDir;

    struct NullSink;

    impl Sink for NullSink {
        fn write_line(&mut self, _message: &LogMessage, _line: &str) -> Result<()> {
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "null"
        }
    }

    struct Connection;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn console_registry(dir: &Path, colors: bool) -> (Registry, Capture) {
        let capture = Capture::default();
        let config = RegistryConfig::default()
            .with_log_directory(dir)
            .with_format("%message%")
            .with_colors(colors);
        let registry = Registry::with_console_sink(config, ConsoleSink::with_writer(capture.clone())).unwrap();
        (registry, capture)
    }

    #[test]
    fn test_same_name_same_instance() {
        let registry = Registry::with_sinks(LineFormat::default(), Vec::new());
        let a = registry.get("Core");
        let b = registry.get("Core");
        let c = registry.get("Net");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["Core", "Net"]);
    }

    #[test]
    fn test_logger_captures_registry_format() {
        let registry = Registry::with_sinks("%message%", vec![shared(NullSink)]);
        let logger = registry.get("Core");
        assert_eq!(logger.format().as_str(), "%message%");
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn test_default_sinks_snapshot_at_creation() {
        let registry = Registry::with_sinks(LineFormat::default(), vec![shared(NullSink)]);
        let early = registry.get("Early");

        registry.add_default_sink(shared(NullSink));
        let late = registry.get("Late");

        assert_eq!(early.sink_count(), 1);
        assert_eq!(late.sink_count(), 2);
        assert_eq!(registry.default_sink_count(), 2);
    }

    #[test]
    fn test_get_by_type_uses_simple_name() {
        let registry = Registry::with_sinks(LineFormat::default(), Vec::new());
        let logger = registry.get_by_type::<Connection>();
        assert_eq!(logger.name(), "Connection");
        assert!(Arc::ptr_eq(&logger, &registry.get("Connection")));
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name::<Connection>(), "Connection");
        assert_eq!(simple_type_name::<Vec<u8>>(), "Vec");
        assert_eq!(simple_type_name::<HashMap<String, u32>>(), "HashMap");
        assert_eq!(simple_type_name::<u32>(), "u32");
    }

    #[test]
    fn test_simple_type_name_compound_types() {
        assert_eq!(simple_type_name::<&str>(), "str");
        assert_eq!(simple_type_name::<&mut Connection>(), "Connection");
        assert_eq!(simple_type_name::<(Connection, String)>(), "Connection");
        assert_eq!(simple_type_name::<[u8]>(), "u8");
        assert_eq!(simple_type_name::<[Vec<u8>; 4]>(), "Vec");
        assert_eq!(simple_type_name::<*const Connection>(), "Connection");
        assert_eq!(simple_type_name::<()>(), "()");
    }

    #[test]
    fn test_console_sink_comes_first() {
        let dir = TempDir::new().unwrap();
        let (registry, capture) = console_registry(dir.path(), false);

        assert_eq!(registry.default_sink_count(), 3);
        assert_eq!(registry.default_sink_names(), vec!["console", "file", "file"]);

        let logger = registry.get("Core");
        assert_eq!(logger.sink_count(), 3);
        logger.warning("disk at {}%", &[Value::from(&91)]).unwrap();

        assert_eq!(capture.text(), "disk at 91%\n");
        let latest = std::fs::read_to_string(dir.path().join("latest.log")).unwrap();
        assert_eq!(latest, "disk at 91%\n");
    }

    #[test]
    fn test_console_colors_follow_config() {
        colored::control::set_override(true);

        let plain_dir = TempDir::new().unwrap();
        let (plain, plain_out) = console_registry(plain_dir.path(), false);
        plain.get("Core").log(Severity::Warning, "careful", &[]).unwrap();
        assert_eq!(plain_out.text(), "careful\n");

        let color_dir = TempDir::new().unwrap();
        let (painted, painted_out) = console_registry(color_dir.path(), true);
        assert_eq!(painted.default_sink_names(), vec!["console", "file", "file"]);
        painted.get("Core").log(Severity::Warning, "careful", &[]).unwrap();
        assert_eq!(painted_out.text(), "\x1b[33mcareful\x1b[0m\n");

        // Files never carry escape sequences
        let latest = std::fs::read_to_string(color_dir.path().join("latest.log")).unwrap();
        assert_eq!(latest, "careful\n");
    }

    #[test]
    fn test_console_disabled_drops_writer() {
        let dir = TempDir::new().unwrap();
        let capture = Capture::default();
        let config = RegistryConfig::default()
            .with_log_directory(dir.path())
            .with_console(false);
        let registry = Registry::with_console_sink(config, ConsoleSink::with_writer(capture.clone())).unwrap();

        assert_eq!(registry.default_sink_names(), vec!["file", "file"]);
        registry.get("Core").info("quiet", &[]).unwrap();
        assert!(capture.text().is_empty());
    }

    #[test]
    fn test_concurrent_first_access_binds_once() {
        let registry = Arc::new(Registry::with_sinks(LineFormat::default(), Vec::new()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.get("Shared"))
            })
            .collect();

        let loggers: Vec<Arc<Logger>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(loggers.iter().all(|l| Arc::ptr_eq(l, &loggers[0])));
        assert_eq!(registry.len(), 1);
    }
}
