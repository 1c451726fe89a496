//! Глобальный pluggable logger
//!
//! Симуляция не знает куда пишутся логи (консоль в headless,
//! лог-панель клиента в игре) — хост подключает свой LogPrinter.
//! Timestamp добавляется здесь, не в printer'е.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

/// Уровни логирования (возрастающая серьёзность)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Sink для лог-сообщений (подключается хостом)
pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    *LOGGER.lock().unwrap() = Some(logger);
}

pub fn set_log_level(level: LogLevel) {
    *LOGGER_LEVEL.lock().unwrap() = level;
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    if LOGGER.lock().unwrap().is_none() {
        set_logger(logger);
    }
}

/// Консольный printer по умолчанию (headless прогоны, тесты)
pub fn init_console() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if level < *LOGGER_LEVEL.lock().unwrap() {
        return;
    }
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        logger.log(level, &format!("[{}] {}", timestamp, message));
    }
}

struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}
