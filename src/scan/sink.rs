use std::io::Write;
use std::path::{Path, PathBuf};

// 路徑接收端：每個符合的路徑都會被送到這裡
pub trait PathSink {
    fn consume(&mut self, path: &Path);
}

// 接收端一：逐筆列印至標準輸出，不緩衝、不重排
pub struct ConsolePrinter;

impl PathSink for ConsolePrinter {
    fn consume(&mut self, path: &Path) {
        println!("Found: {}", path.display());
    }
}

// 接收端二：逐行寫入呼叫端已開啟的輸出串流，串流生命週期由呼叫端負責
pub struct FileAppender<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> FileAppender<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        FileAppender { writer }
    }
}

impl<W: Write> PathSink for FileAppender<'_, W> {
    fn consume(&mut self, path: &Path) {
        if let Err(e) = writeln!(self.writer, "{}", path.display()) {
            log::warn!("寫入路徑 {} 失敗：{}", path.display(), e);
        }
    }
}

// 接收端三：依發現順序累積到呼叫端擁有的序列
pub struct CollectingSink<'a> {
    collected: &'a mut Vec<PathBuf>,
}

impl<'a> CollectingSink<'a> {
    pub fn new(collected: &'a mut Vec<PathBuf>) -> Self {
        CollectingSink { collected }
    }
}

impl PathSink for CollectingSink<'_> {
    fn consume(&mut self, path: &Path) {
        self.collected.push(path.to_path_buf());
    }
}
