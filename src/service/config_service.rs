use std::io;
use crate::config::config::{validate_cli_args, Cli};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::utils::utils::default_output_name;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 命令列配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_cli_args(&self.cli)?;
        Ok(AppConfig {
            input: self.cli.input.clone(),
            output: self.cli.output.clone().unwrap_or_else(default_output_name),
            suffixes: self.cli.suffixes.clone(),
            max_depth: self.cli.depth,
            mode: self.cli.mode,
            log_level: self.cli.log_level.clone(),
        })
    }
}
