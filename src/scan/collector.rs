use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scan::engine::PathScanner;
use crate::scan::sink::{CollectingSink, ConsolePrinter, FileAppender, PathSink};

/// 建構 PathCollector 失敗：根路徑不存在或不是目錄
#[derive(Debug, Error)]
#[error("初始收集失敗：'{root}' 不是有效目錄")]
pub struct ConstructionError {
    pub root: String,
}

impl From<ConstructionError> for io::Error {
    fn from(e: ConstructionError) -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, e.to_string())
    }
}

/// 掃描設定加結果快取。`collected` 為 true 時保證快取對應目前
/// 設定；任何設定變更都會讓快取失效，直到下一次 collect() 成功。
/// 非執行緒安全，共用時需由呼叫端自行序列化。
pub struct PathCollector {
    root_path: String,
    max_depth: i32,
    suffix_list: Vec<String>,
    collected_paths: Vec<PathBuf>,
    collected: bool,
}

impl PathCollector {
    /// 建構時立即執行一次收集；根路徑不是有效目錄時建構失敗，
    /// 不會留下半初始化的實例。
    pub fn new(
        root_path: impl Into<String>,
        max_depth: i32,
        suffixes: &[String],
    ) -> Result<Self, ConstructionError> {
        let mut collector = PathCollector {
            root_path: root_path.into(),
            max_depth,
            suffix_list: suffixes.to_vec(),
            collected_paths: Vec::new(),
            collected: false,
        };
        if !collector.is_valid_directory() || !collector.collect() {
            return Err(ConstructionError {
                root: collector.root_path,
            });
        }
        Ok(collector)
    }

    pub fn set_suffixes(&mut self, suffixes: &[String]) {
        self.suffix_list = suffixes.to_vec();
        self.clear();
    }

    pub fn set_depth(&mut self, depth: i32) {
        self.max_depth = depth;
        self.clear();
    }

    // 三個設定方法一律重設 collected，失效行為一致（見 DESIGN.md）
    pub fn set_root_path(&mut self, path: impl Into<String>) {
        self.root_path = path.into();
        self.clear();
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    pub fn collected_paths(&self) -> &[PathBuf] {
        &self.collected_paths
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn clear(&mut self) {
        self.collected_paths.clear();
        self.collected = false;
    }

    /// 依目前設定整批重建快取。零筆結果也算成功；只有根路徑為
    /// 空字串時回傳 false。
    pub fn collect(&mut self) -> bool {
        if self.root_path.is_empty() {
            return false;
        }
        let mut paths = Vec::new();
        {
            let mut sink = CollectingSink::new(&mut paths);
            let mut scanner = PathScanner::new(&mut sink);
            scanner.scan(
                Path::new(&self.root_path),
                Some(self.max_depth),
                &self.suffix_list,
            );
        }
        self.collected_paths = paths;
        self.collected = true;
        true
    }

    /// 把快取寫入 `out_path`，不觸發掃描。快取為空時寫入單行
    /// `No Path Collected!`。檔案無法建立時回傳 false。
    pub fn save_to_file(&self, out_path: &Path) -> bool {
        let Ok(file) = File::create(out_path) else {
            log::error!("無法開啟輸出檔案：{}", out_path.display());
            return false;
        };
        let mut writer = BufWriter::new(file);
        if self.collected_paths.is_empty() {
            return writeln!(writer, "No Path Collected!").is_ok() && writer.flush().is_ok();
        }
        let mut appender = FileAppender::new(&mut writer);
        for path in &self.collected_paths {
            appender.consume(path);
        }
        writer.flush().is_ok()
    }

    /// 把快取列印至終端機；快取過期時先重新收集一次。
    pub fn print_to_console(&mut self) -> bool {
        if !self.collected {
            self.collect();
        }
        if self.collected_paths.is_empty() {
            println!("No Path Collected!");
        }
        let mut printer = ConsolePrinter;
        for path in &self.collected_paths {
            printer.consume(path);
        }
        true
    }

    fn is_valid_directory(&self) -> bool {
        Path::new(&self.root_path).is_dir()
    }
}
