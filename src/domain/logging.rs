//! Logging seam for the dashboard. Call sites use the `log_*!` macros; the
//! sink and the clock are installed once at startup.

use derive_more::Display;
use std::fmt;
use std::sync::OnceLock;

/// Ordered so a sink can drop everything below its minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Parts of the dashboard that write log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "ui:launch")]
    Launch,
    #[display(fmt = "app:cycle")]
    Coordinator,
    #[display(fmt = "app:poller")]
    Poller,
    #[display(fmt = "net:prices")]
    PricesClient,
    #[display(fmt = "dom:cards")]
    Cards,
    #[display(fmt = "dom:chart")]
    Chart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
        }
    }
}

/// `LEVEL component | message`; the sink adds the time prefix
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} | {}", self.level, self.component, self.message)
    }
}

/// Milliseconds since epoch plus a label for them
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;

    /// Label for "now", used on the status line and the chart's time axis
    fn now_label(&self) -> String {
        self.format_timestamp(self.current_timestamp())
    }
}

pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message));
    }
}

type SharedLogger = Box<dyn Logger + Sync + Send>;
type SharedClock = Box<dyn TimeProvider + Sync + Send>;

static LOGGER: OnceLock<SharedLogger> = OnceLock::new();
static CLOCK: OnceLock<SharedClock> = OnceLock::new();

/// First call wins; later calls are ignored
pub fn init_logger(logger: SharedLogger) {
    let _ = LOGGER.set(logger);
}

/// First call wins; later calls are ignored
pub fn init_time_provider(time_provider: SharedClock) {
    let _ = CLOCK.set(time_provider);
}

/// Installed logger, or a silent one before `init_logger`
pub fn get_logger() -> &'static dyn Logger {
    match LOGGER.get() {
        Some(logger) => logger.as_ref(),
        None => &SilentLogger,
    }
}

/// Installed clock, or a monotonic counter before `init_time_provider`
pub fn get_time_provider() -> &'static dyn TimeProvider {
    match CLOCK.get() {
        Some(clock) => clock.as_ref(),
        None => &SequenceClock,
    }
}

struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Native builds have no `Date`; log entries still get ordered stamps
struct SequenceClock;

impl TimeProvider for SequenceClock {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT: AtomicU64 = AtomicU64::new(0);
        NEXT.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{:06}", timestamp)
    }
}

/// Compiled out of release builds
#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        }
    };
}

/// Compiled out of release builds
#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
    };
}
