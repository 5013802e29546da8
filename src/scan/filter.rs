// 檔名過濾器：決定某個檔名是否要被收集
pub trait FilenameFilter {
    fn matches(&self, name: &str) -> bool;
}

// 預設過濾器，接受所有檔名
pub struct AcceptAll;

impl FilenameFilter for AcceptAll {
    fn matches(&self, _name: &str) -> bool {
        true
    }
}

// 後綴過濾器：逐位元組比對檔名結尾，區分大小寫，不做任何正規化
#[derive(Debug, Clone)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    pub fn new(suffixes: &[String]) -> Self {
        SuffixFilter {
            suffixes: suffixes.to_vec(),
        }
    }
}

impl Default for SuffixFilter {
    // 內建影像副檔名
    fn default() -> Self {
        SuffixFilter {
            suffixes: [".jpg", ".png", ".bmp", ".tiff"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl FilenameFilter for SuffixFilter {
    fn matches(&self, name: &str) -> bool {
        self.suffixes.iter().any(|suffix| name.ends_with(suffix))
    }
}
