use std::io;
use chrono::Local;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();
    Ok(())
}

// 預設輸出檔名：paths_yyyyMMdd_HHmmss.txt
pub fn default_output_name() -> String {
    format!("paths_{}.txt", Local::now().format("%Y%m%d_%H%M%S"))
}

pub fn parse_suffix_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
