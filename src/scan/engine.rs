use std::path::Path;

use crate::scan::filter::{FilenameFilter, SuffixFilter};
use crate::scan::lister::{DirectoryLister, OsDirectoryLister};
use crate::scan::sink::PathSink;

/// 遞迴走訪目錄樹，把檔名符合過濾器的路徑送往接收端。
///
/// 深度語意：負數表示不限深度；0 表示只檢查根目錄的直接檔案；
/// k > 0 表示最多往下走 k 層。單執行緒、同步執行，遞迴深度受
/// 目錄樹實際深度或 max_depth 限制。
pub struct PathScanner<'a> {
    sink: &'a mut dyn PathSink,
    filter: Box<dyn FilenameFilter>,
    lister: Box<dyn DirectoryLister>,
    max_depth: i32,
}

impl<'a> PathScanner<'a> {
    pub fn new(sink: &'a mut dyn PathSink) -> Self {
        PathScanner {
            sink,
            filter: Box::new(SuffixFilter::default()),
            lister: Box::new(OsDirectoryLister),
            max_depth: -1,
        }
    }

    pub fn with_filter(sink: &'a mut dyn PathSink, filter: Box<dyn FilenameFilter>) -> Self {
        PathScanner {
            sink,
            filter,
            lister: Box::new(OsDirectoryLister),
            max_depth: -1,
        }
    }

    pub fn set_depth(&mut self, depth: i32) {
        self.max_depth = depth;
    }

    pub fn set_suffix_filter(&mut self, suffixes: &[String]) {
        self.filter = Box::new(SuffixFilter::new(suffixes));
    }

    /// 掃描 `path`。`max_depth` 為 None 時沿用既有設定；`suffixes`
    /// 非空時以其重建後綴過濾器，套用到本次與所有遞迴子呼叫。
    /// 根路徑是一般檔案時直接比對檔名，不受深度限制；路徑不存在
    /// 或無法列舉時視為沒有符合項目，不回報錯誤。
    pub fn scan(&mut self, path: &Path, max_depth: Option<i32>, suffixes: &[String]) {
        if !suffixes.is_empty() {
            self.filter = Box::new(SuffixFilter::new(suffixes));
        }
        if let Some(depth) = max_depth {
            self.max_depth = depth;
        }
        self.traverse(path, self.max_depth);
    }

    fn traverse(&mut self, current: &Path, depth: i32) {
        if self.lister.is_directory(current) {
            self.traverse_directory(current, depth);
        } else if current.is_file() {
            self.process_file(current);
        }
        // 不存在的路徑不算錯誤，貢獻零筆結果
    }

    fn traverse_directory(&mut self, dir: &Path, depth: i32) {
        let Some(entries) = self.lister.list(dir) else {
            return; // 無法列舉的子樹同樣貢獻零筆結果
        };
        for entry in entries {
            if entry.name == "." || entry.name == ".." {
                continue;
            }
            let full = dir.join(&entry.name);
            if entry.is_directory {
                if depth != 0 {
                    self.traverse(&full, if depth > 0 { depth - 1 } else { depth });
                }
            } else {
                self.process_file(&full);
            }
        }
    }

    fn process_file(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.filter.matches(&name) {
            self.sink.consume(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::filter::AcceptAll;
    use crate::scan::sink::CollectingSink;
    use std::fs::{self, File};
    use std::path::PathBuf;
    use tempfile::TempDir;

    // a.jpg, b.png, c.txt, level1/x.jpg, level1/y.png, level1/level2/z.bmp
    fn build_tree(root: &Path) {
        for name in ["a.jpg", "b.png", "c.txt"] {
            File::create(root.join(name)).unwrap();
        }
        let level1 = root.join("level1");
        fs::create_dir(&level1).unwrap();
        for name in ["x.jpg", "y.png"] {
            File::create(level1.join(name)).unwrap();
        }
        let level2 = level1.join("level2");
        fs::create_dir(&level2).unwrap();
        File::create(level2.join("z.bmp")).unwrap();
    }

    fn scan_names(root: &Path, depth: i32, suffixes: &[&str]) -> Vec<String> {
        let suffixes: Vec<String> = suffixes.iter().map(|s| s.to_string()).collect();
        let mut paths: Vec<PathBuf> = Vec::new();
        {
            let mut sink = CollectingSink::new(&mut paths);
            let mut scanner = PathScanner::new(&mut sink);
            scanner.scan(root, Some(depth), &suffixes);
        }
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn unlimited_depth_finds_every_match() {
        let dir = TempDir::new().unwrap();
        build_tree(dir.path());
        let names = scan_names(dir.path(), -1, &[".jpg", ".png"]);
        assert_eq!(names, vec!["a.jpg", "b.png", "x.jpg", "y.png"]);
    }

    #[test]
    fn depth_zero_stays_in_root() {
        let dir = TempDir::new().unwrap();
        build_tree(dir.path());
        let names = scan_names(dir.path(), 0, &[".jpg", ".png", ".bmp"]);
        assert_eq!(names, vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn depth_one_descends_a_single_level() {
        let dir = TempDir::new().unwrap();
        build_tree(dir.path());
        let names = scan_names(dir.path(), 1, &[".jpg", ".png", ".bmp"]);
        assert_eq!(names, vec!["a.jpg", "b.png", "x.jpg", "y.png"]);
    }

    #[test]
    fn any_negative_depth_means_unlimited() {
        let dir = TempDir::new().unwrap();
        build_tree(dir.path());
        let names = scan_names(dir.path(), -5, &[".bmp"]);
        assert_eq!(names, vec!["z.bmp"]);
    }

    #[test]
    fn plain_file_root_is_evaluated_directly() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("single.jpg");
        File::create(&file).unwrap();

        let mut paths = Vec::new();
        {
            let mut sink = CollectingSink::new(&mut paths);
            let mut scanner = PathScanner::new(&mut sink);
            // 深度 0 也不影響單一檔案的比對
            scanner.scan(&file, Some(0), &[".jpg".to_string()]);
        }
        assert_eq!(paths, vec![file]);
    }

    #[test]
    fn missing_root_yields_no_matches() {
        let names = scan_names(Path::new("/no/such/dir"), -1, &[".jpg"]);
        assert!(names.is_empty());
    }

    #[test]
    fn empty_directory_yields_no_matches() {
        let dir = TempDir::new().unwrap();
        let names = scan_names(dir.path(), -1, &[".jpg"]);
        assert!(names.is_empty());
    }

    #[test]
    fn call_time_suffixes_replace_configured_filter() {
        let dir = TempDir::new().unwrap();
        build_tree(dir.path());

        let mut paths = Vec::new();
        {
            let mut sink = CollectingSink::new(&mut paths);
            let mut scanner = PathScanner::with_filter(&mut sink, Box::new(AcceptAll));
            scanner.scan(dir.path(), Some(-1), &[".txt".to_string()]);
        }
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["c.txt"]);
    }

    #[test]
    fn empty_call_time_suffixes_keep_configured_filter() {
        let dir = TempDir::new().unwrap();
        build_tree(dir.path());

        let mut paths = Vec::new();
        {
            let mut sink = CollectingSink::new(&mut paths);
            let mut scanner = PathScanner::with_filter(&mut sink, Box::new(AcceptAll));
            scanner.scan(dir.path(), Some(0), &[]);
        }
        let mut names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.txt"]);
    }
}
