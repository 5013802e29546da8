use dialoguer::{Input, Select};
use std::io;
use std::path::Path;

use crate::action::cli::run_collection;
use crate::config::config::OutputMode;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::service::config_service::ConfigService;
use crate::utils::utils::{default_output_name, parse_suffix_list, setup_logging};

pub fn process_interactive_mode() -> io::Result<String> {
    println!("=== 歡迎使用互動模式 ===");
    let input = get_input_path()?;

    let service = ConfigService::new(Box::new(InteractiveConfigAdapter::new(input)));
    let config = service.get_config()?;
    setup_logging(&config.log_level)?;
    run_collection(&config)
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入要掃描的目錄路徑（例如：./photos）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_dir() { Ok(()) } else { Err(format!("路徑 '{}' 不是有效目錄", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_suffix_list() -> io::Result<Vec<String>> {
    let raw: String = Input::new()
        .with_prompt("輸入要收集的後綴（例如：.jpg,.png，留空使用內建影像副檔名）")
        .allow_empty(true)
        .default("".to_string())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("後綴輸入失敗: {}", e)))?;
    Ok(parse_suffix_list(&raw))
}

pub fn get_depth() -> io::Result<i32> {
    Input::new()
        .with_prompt("輸入最大深度（-1 表示不限制，0 表示僅根目錄）")
        .default(-1)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("深度輸入失敗: {}", e)))
}

pub fn get_output_mode() -> io::Result<OutputMode> {
    let mode = Select::new()
        .with_prompt("選擇輸出方式（使用方向鍵選擇，按 Enter 確認）")
        .items(&["列印 - 將結果列印至終端機", "儲存 - 將結果寫入純文字檔案"])
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出方式選擇失敗: {}", e)))?;
    Ok(if mode == 1 { OutputMode::Save } else { OutputMode::Print })
}

pub fn get_output_path() -> io::Result<String> {
    Input::new()
        .with_prompt("輸入輸出檔案路徑")
        .default(default_output_name())
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸出路徑輸入失敗: {}", e)))
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    input: String,
}

impl InteractiveConfigAdapter {
    pub fn new(input: String) -> Self {
        InteractiveConfigAdapter { input }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let suffixes = get_suffix_list()?;
        let max_depth = get_depth()?;
        let mode = get_output_mode()?;
        let output = if mode == OutputMode::Save {
            get_output_path()?
        } else {
            default_output_name()
        };

        Ok(AppConfig {
            input: self.input.clone(),
            output,
            suffixes,
            max_depth,
            mode,
            log_level: "info".to_string(),
        })
    }
}
