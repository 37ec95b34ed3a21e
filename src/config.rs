use log::LevelFilter;
use std::str::FromStr;

use crate::api::config_dto::{EngineConfigDto, LoggingConfigDto};
use crate::domain::assignment::strategy::strategy_type::AssignmentStrategyType;
use crate::error::{ConversionError, Result};
use crate::loader::parser::parse_json_file;

const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_LOG_FILE: &str = "assignment.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub log_file: String,
    /// Used when `RUST_LOG` is not set.
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { log_dir: DEFAULT_LOG_DIR.to_string(), log_file: DEFAULT_LOG_FILE.to_string(), level: LevelFilter::Info }
    }
}

impl TryFrom<LoggingConfigDto> for LoggingConfig {
    type Error = ConversionError;

    fn try_from(dto: LoggingConfigDto) -> std::result::Result<Self, Self::Error> {
        let defaults = LoggingConfig::default();

        let level = match dto.level {
            Some(level) => LevelFilter::from_str(&level).map_err(|_| ConversionError::InvalidLogLevel(level))?,
            None => defaults.level,
        };

        Ok(LoggingConfig { log_dir: dto.log_dir.unwrap_or(defaults.log_dir), log_file: dto.log_file.unwrap_or(defaults.log_file), level })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub strategy: AssignmentStrategyType,
    pub logging: LoggingConfig,
}

impl TryFrom<EngineConfigDto> for EngineConfig {
    type Error = ConversionError;

    fn try_from(dto: EngineConfigDto) -> std::result::Result<Self, Self::Error> {
        let strategy = match dto.strategy {
            Some(name) => AssignmentStrategyType::from_str(&name)?,
            None => AssignmentStrategyType::default(),
        };

        let logging = match dto.logging {
            Some(logging) => LoggingConfig::try_from(logging)?,
            None => LoggingConfig::default(),
        };

        Ok(EngineConfig { strategy, logging })
    }
}

impl EngineConfig {
    pub fn from_file(file_path: &str) -> Result<Self> {
        let dto: EngineConfigDto = parse_json_file(file_path)?;
        Ok(EngineConfig::try_from(dto)?)
    }
}
