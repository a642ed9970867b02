//! BevyLogger: мост simulation logger → bevy `log` (tracing) макросы
//!
//! Уровень фильтруется в `outpost_simulation::logger`, здесь только маппинг.

use bevy::log::{debug, error, info, warn};
use outpost_simulation::logger::{LogLevel, LogPrinter};

pub struct BevyLogger;

impl LogPrinter for BevyLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!("{}", message),
            LogLevel::Info => info!("{}", message),
            LogLevel::Warning => warn!("{}", message),
            LogLevel::Error => error!("{}", message),
        }
    }
}
