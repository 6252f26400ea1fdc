//! ページ遷移
//!
//! URLハッシュとページ列挙の相互変換。作品詳細はidをキーに遷移する。
//! 不明なハッシュはHome扱い（エラーにしない）。

/// アプリ内ページ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Works,
    /// 作品詳細（カタログのidで引く）
    Work(String),
    Contact,
}

impl Page {
    /// location.hash からページを解決する
    pub fn from_hash(hash: &str) -> Page {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let mut parts = path.split('/');
        match parts.next().unwrap_or("") {
            "" | "home" => Page::Home,
            "about" => Page::About,
            "works" => match parts.next() {
                Some(id) if !id.is_empty() => Page::Work(id.to_string()),
                _ => Page::Works,
            },
            "contact" => Page::Contact,
            _ => Page::Home,
        }
    }

    /// このページのURLハッシュ
    pub fn hash(&self) -> String {
        match self {
            Page::Home => "#/".to_string(),
            Page::About => "#/about".to_string(),
            Page::Works => "#/works".to_string(),
            Page::Work(id) => format!("#/works/{}", id),
            Page::Contact => "#/contact".to_string(),
        }
    }

    /// ナビゲーションに並べるページ（詳細ページは含まない）
    pub fn nav_pages() -> [Page; 4] {
        [Page::Home, Page::About, Page::Works, Page::Contact]
    }

    /// ナビゲーション表示名
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Works | Page::Work(_) => "Works",
            Page::Contact => "Contact",
        }
    }

    /// ナビ項目navをアクティブ表示すべきか（詳細ページはWorksを光らせる）
    pub fn nav_matches(&self, nav: &Page) -> bool {
        match (self, nav) {
            (Page::Work(_), Page::Works) => true,
            _ => self == nav,
        }
    }
}
