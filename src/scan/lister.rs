use std::fs;
use std::path::Path;

// 單次列舉產生的目錄項目，不跨呼叫保留
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
}

// 目錄列舉能力：回傳直接子項目，或以 None 表示無法存取
pub trait DirectoryLister {
    /// 列出 `path` 的直接子項目。路徑不存在、不是目錄或無法讀取時回傳
    /// `None`，呼叫端視為「沒有符合項目」而不是錯誤。
    fn list(&self, path: &Path) -> Option<Vec<DirEntry>>;

    fn is_directory(&self, path: &Path) -> bool;
}

// 以 std::fs::read_dir 實作的列舉器
pub struct OsDirectoryLister;

impl DirectoryLister for OsDirectoryLister {
    fn list(&self, path: &Path) -> Option<Vec<DirEntry>> {
        let read_dir = fs::read_dir(path).ok()?;
        let mut entries = Vec::new();
        for entry in read_dir.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            // file_type 不跟隨符號連結：指向目錄的連結被視為一般檔案
            let is_directory = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(DirEntry { name, is_directory });
        }
        Some(entries)
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn list_reports_files_and_directories() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let lister = OsDirectoryLister;
        let mut entries = lister.list(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.txt");
        assert!(!entries[0].is_directory);
        assert_eq!(entries[1].name, "sub");
        assert!(entries[1].is_directory);
    }

    #[test]
    fn list_missing_path_is_inaccessible() {
        let lister = OsDirectoryLister;
        assert!(lister.list(Path::new("/no/such/dir")).is_none());
    }

    #[test]
    fn list_plain_file_is_inaccessible() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        File::create(&file).unwrap();

        let lister = OsDirectoryLister;
        assert!(lister.list(&file).is_none());
        assert!(!lister.is_directory(&file));
        assert!(lister.is_directory(dir.path()));
    }
}
