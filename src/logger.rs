// Process logger behind the `log` facade. Records pass a per-target RUST_LOG
// filter and go to stderr; warn+ lines and panics are also appended to log.txt.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const LOG_FILE_NAME: &str = "log.txt";

lazy_static! {
    static ref SINK: LogSink = LogSink::open(LOG_FILE_NAME, stderr_enabled());
}

/// Where formatted lines end up.
struct LogSink {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl LogSink {
    fn open(path: &str, mirror_stderr: bool) -> Self {
        let file = OpenOptions::new().create(true).append(true).open(path).ok();
        Self {
            file: Mutex::new(file),
            mirror_stderr,
        }
    }

    fn emit(&self, level: Level, line: &str) {
        if self.mirror_stderr {
            eprintln!("{line}");
        }
        if level <= Level::Warn {
            self.persist(line);
        }
    }

    fn persist(&self, line: &str) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(f) = guard.as_mut() {
                let _ = writeln!(f, "{line}");
                let _ = f.flush();
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(f) = guard.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Directive {
    target: String,
    level: LevelFilter,
}

/// `RUST_LOG` style filter: `info`, `recipe_screen=debug`, `eframe=warn,trace`.
/// The most specific matching target wins; a bare level sets the default.
#[derive(Debug, Clone, PartialEq)]
struct LogFilter {
    default: LevelFilter,
    directives: Vec<Directive>,
}

impl LogFilter {
    fn parse(spec: &str, fallback: LevelFilter) -> Self {
        let mut filter = Self {
            default: fallback,
            directives: Vec::new(),
        };
        for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((target, level)) => match LevelFilter::from_str(level.trim()) {
                    Ok(level) => filter.directives.push(Directive {
                        target: target.trim().to_string(),
                        level,
                    }),
                    Err(_) => eprintln!("ignoring log directive with bad level: {part}"),
                },
                None => match LevelFilter::from_str(part) {
                    Ok(level) => filter.default = level,
                    // A bare module name turns everything on for it.
                    Err(_) => filter.directives.push(Directive {
                        target: part.to_string(),
                        level: LevelFilter::Trace,
                    }),
                },
            }
        }
        filter
    }

    fn level_for(&self, target: &str) -> LevelFilter {
        self.directives
            .iter()
            .filter(|d| target_matches(&d.target, target))
            .max_by_key(|d| d.target.len())
            .map(|d| d.level)
            .unwrap_or(self.default)
    }

    fn max_level(&self) -> LevelFilter {
        self.directives
            .iter()
            .map(|d| d.level)
            .fold(self.default, Ord::max)
    }
}

fn target_matches(prefix: &str, target: &str) -> bool {
    match target.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    }
}

struct ScreenLogger {
    filter: LogFilter,
}

impl Log for ScreenLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:>5}] {}: {}",
            timestamp_millis(),
            record.level(),
            record.target(),
            record.args()
        );
        SINK.emit(record.level(), &line);
    }

    fn flush(&self) {
        SINK.flush();
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn stderr_enabled() -> bool {
    std::env::var("RECIPE_LOG_STDERR")
        .map(|v| is_truthy(&v))
        .unwrap_or(true)
}

/// Installs the logger and the panic hook. Safe to call more than once; only
/// the first call takes effect.
pub fn init() {
    let spec = std::env::var("RUST_LOG").unwrap_or_default();
    let filter = LogFilter::parse(&spec, LevelFilter::Info);
    let max = filter.max_level();
    if log::set_boxed_logger(Box::new(ScreenLogger { filter })).is_err() {
        return;
    }
    log::set_max_level(max);
    install_panic_hook();
    log::info!("logging up to {max} (warn+ persisted to {LOG_FILE_NAME})");
}

fn timestamp_millis() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info.payload();
        let msg = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("Box<Any>");
        let loc = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        SINK.emit(Level::Error, &format!("[{}] [ERROR] panic at {loc}: {msg}", timestamp_millis()));
        let bt = Backtrace::force_capture();
        for line in format!("{bt:?}").lines() {
            SINK.persist(line);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_sets_default() {
        let filter = LogFilter::parse("debug", LevelFilter::Info);
        assert_eq!(filter.level_for("recipe_screen::app"), LevelFilter::Debug);
        assert_eq!(filter.level_for("wgpu_core"), LevelFilter::Debug);
        assert!(filter.directives.is_empty());
    }

    #[test]
    fn most_specific_target_wins() {
        let filter = LogFilter::parse("warn,recipe_screen=debug,recipe_screen::assets=trace", LevelFilter::Info);
        assert_eq!(filter.level_for("recipe_screen"), LevelFilter::Debug);
        assert_eq!(filter.level_for("recipe_screen::app"), LevelFilter::Debug);
        assert_eq!(filter.level_for("recipe_screen::assets"), LevelFilter::Trace);
        assert_eq!(filter.level_for("eframe::native"), LevelFilter::Warn);
        assert_eq!(filter.max_level(), LevelFilter::Trace);
    }

    #[test]
    fn target_prefix_stops_at_module_boundary() {
        let filter = LogFilter::parse("egui=off", LevelFilter::Info);
        assert_eq!(filter.level_for("egui::context"), LevelFilter::Off);
        assert_eq!(filter.level_for("egui_wgpu"), LevelFilter::Info);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let filter = LogFilter::parse(" , eframe=loud, recipe_screen ,ERROR", LevelFilter::Info);
        assert_eq!(filter.default, LevelFilter::Error);
        assert_eq!(
            filter.directives,
            vec![Directive {
                target: "recipe_screen".to_string(),
                level: LevelFilter::Trace,
            }]
        );
        assert_eq!(filter.level_for("eframe"), LevelFilter::Error);
    }

    #[test]
    fn empty_spec_keeps_fallback() {
        let filter = LogFilter::parse("", LevelFilter::Info);
        assert_eq!(filter.max_level(), LevelFilter::Info);
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("Yes"));
        assert!(is_truthy("1"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("off"));
    }
}
