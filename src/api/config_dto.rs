use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfigDto {
    pub strategy: Option<String>,
    pub logging: Option<LoggingConfigDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfigDto {
    pub log_dir: Option<String>,
    pub log_file: Option<String>,
    pub level: Option<String>,
}
