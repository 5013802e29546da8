use std::io;
use std::path::Path;
use clap::Parser;

use crate::action::interactive::process_interactive_mode;
use crate::config::config::{Cli, OutputMode};
use crate::config::ports::AppConfig;
use crate::scan::collector::PathCollector;
use crate::service::config_service::{CliConfigAdapter, ConfigService};
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<String>) -> io::Result<String> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<String> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = service.get_config()?;
    run_collection(&config)
}

pub fn run_collection(config: &AppConfig) -> io::Result<String> {
    log::info!(
        "開始收集，根目錄：{}，深度：{}，後綴：{:?}",
        config.input, config.max_depth, config.suffixes
    );
    let mut collector = PathCollector::new(config.input.clone(), config.max_depth, &config.suffixes)?;
    log::info!("共收集 {} 筆路徑", collector.collected_paths().len());

    match config.mode {
        OutputMode::Print => {
            collector.print_to_console();
            Ok(format!("已列印 {} 筆路徑", collector.collected_paths().len()))
        }
        OutputMode::Save => {
            if !collector.save_to_file(Path::new(&config.output)) {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("無法寫入輸出檔案 '{}'", config.output)
                ));
            }
            println!("收集完成！結果已儲存至：{}", config.output);
            Ok(format!("已儲存 {} 筆路徑至 {}", collector.collected_paths().len(), config.output))
        }
    }
}
