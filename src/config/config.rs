use clap::{Parser, ValueEnum};
use std::io;
use std::path::Path;

#[derive(Parser, Clone)]
#[command(
    name = "path_collector",
    about = "遞迴掃描目錄並依副檔名收集檔案路徑",
    long_about = "一個掃描目錄樹的工具，依檔名後綴（區分大小寫的位元組比對）收集符合的檔案路徑，可列印至終端機或儲存為純文字清單。\n深度 -1 表示不限制，0 表示僅檢查根目錄的直接檔案。未指定 --suffixes 時使用內建影像副檔名（.jpg,.png,.bmp,.tiff）。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    pub input: String,
    #[arg(short, long)]
    pub output: Option<String>,
    #[arg(long, default_value = "print")]
    pub mode: OutputMode,
    #[arg(long, value_delimiter = ',')]
    pub suffixes: Vec<String>,
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub depth: i32,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
#[derive(PartialEq)]
#[derive(Debug)]
pub enum OutputMode {
    Print,
    Save,
}

pub fn validate_cli_args(cli: &Cli) -> io::Result<()> {
    validate_input_path(&cli.input)?;
    validate_suffix_list(&cli.suffixes)?;
    Ok(())
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.is_dir() {
        log::error!("輸入路徑不存在或不是目錄：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不是有效目錄", input)
        ));
    }
    Ok(path)
}

pub fn is_valid_suffix(suffix: &str) -> bool {
    let invalid_chars = ['/', '\\', '*', '?', ':', '"', '<', '>', '|'];
    !suffix.is_empty() && !suffix.contains(&invalid_chars[..])
}

pub fn validate_suffix_list(suffixes: &[String]) -> io::Result<()> {
    for suffix in suffixes {
        if !is_valid_suffix(suffix) {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("無效的後綴: {}", suffix)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_validation_rejects_separators_and_wildcards() {
        assert!(is_valid_suffix(".jpg"));
        assert!(is_valid_suffix("_mask.png"));
        assert!(!is_valid_suffix(""));
        assert!(!is_valid_suffix("dir/.jpg"));
        assert!(!is_valid_suffix("*.jpg"));
    }

    #[test]
    fn input_path_must_be_a_directory() {
        assert!(validate_input_path("/no/such/dir").is_err());
        assert!(validate_input_path(".").is_ok());
    }
}
