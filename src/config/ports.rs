use std::io;
use crate::config::config::OutputMode;

// 應用配置結構體，封裝掃描與輸出參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: String,
    pub output: String,
    pub suffixes: Vec<String>,
    pub max_depth: i32,
    pub mode: OutputMode,
    pub log_level: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
