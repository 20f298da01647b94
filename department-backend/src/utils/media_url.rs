// src/utils/media_url.rs

/// 保存されたファイルパスを公開URLに変換する
///
/// ファイル・画像フィールドは保存先からの相対パスで格納されており、
/// 未設定の場合は NULL もしくは空文字列になる。どちらも `None` として扱う。
/// 空白のみの名前は設定済みとみなし、そのままエンコードする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrlResolver {
    base_url: String,
}

impl MediaUrlResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn resolve(&self, path: Option<&str>) -> Option<String> {
        let path = path.filter(|p| !p.is_empty())?;

        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }

        let path = path.replace('\\', "/");
        let encoded = path
            .trim_start_matches('/')
            .split('/')
            .map(encode_segment)
            .collect::<Vec<_>>()
            .join("/");

        Some(format!("{}/{}", self.base_url, encoded))
    }
}

// urlencoding が残す英数字と `-_.~` に加えてエスケープしない文字
const UNESCAPED_MARKS: &[char] = &['!', '*', '(', ')', '\''];

fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    let mut buf = [0u8; 4];

    for c in segment.chars() {
        if UNESCAPED_MARKS.contains(&c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }

    encoded
}

impl Default for MediaUrlResolver {
    fn default() -> Self {
        Self::new("/media/")
    }
}
