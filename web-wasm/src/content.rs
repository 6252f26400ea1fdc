//! 静的コンテンツ
//!
//! ビルド時に埋め込むカタログJSONと、経歴・スキル・SNSリンクの固定テーブル。
//! ここはデータだけを持ち、ロジックはcommon側にある。

use portfolio_common::Catalog;

/// 作品カタログ（ビルド時埋め込み、実行中は不変）
const PROJECTS_JSON: &str = r#"[
  {
    "id": "shopline",
    "title": "Shopline Store",
    "shortDescription": "Headless storefront with a Rust/WASM cart",
    "description": "A headless e-commerce storefront. Product browsing, cart and checkout run entirely client-side against a static product feed, with Stripe handling payment off-site.",
    "category": "E-commerce",
    "tags": ["Rust", "WASM", "Leptos", "Stripe"],
    "image": "/images/works/shopline.webp",
    "client": "Shopline GK",
    "url": "https://shopline.example.com",
    "features": ["Instant search", "Offline cart", "Lighthouse 100 performance"],
    "year": "2025"
  },
  {
    "id": "metrics",
    "title": "Analytics Dashboard",
    "shortDescription": "Realtime metrics dashboard over WebSocket",
    "description": "A realtime analytics dashboard. Streams metrics over WebSocket and renders charts at 60fps, with per-widget layouts saved locally.",
    "category": "Web Application",
    "tags": ["Leptos", "WebSocket", "Charts"],
    "image": "/images/works/metrics.webp",
    "client": "Nitori Data Lab",
    "url": "https://metrics.example.com",
    "features": ["Live streaming charts", "Draggable widget grid", "CSV export"],
    "year": "2024"
  },
  {
    "id": "notetaker",
    "title": "Notetaker",
    "shortDescription": "Cross-platform markdown note app",
    "description": "A desktop note-taking app with markdown editing, full-text search and an offline-first SQLite store.",
    "category": "Desktop Application",
    "tags": ["Tauri", "SQLite", "Markdown"],
    "image": "/images/works/notetaker.webp",
    "features": ["Full-text search", "Vim keybindings", "End-to-end sync"],
    "year": "2024"
  },
  {
    "id": "devlog",
    "title": "Devlog",
    "shortDescription": "Static developer blog",
    "description": "A statically generated developer blog. Markdown sources compile to a fully static site with zero client-side JavaScript on article pages.",
    "category": "Blog Page",
    "tags": ["SSG", "Markdown"],
    "image": "/images/works/devlog.webp",
    "url": "https://devlog.example.com",
    "year": "2023"
  },
  {
    "id": "studio-landing",
    "title": "Studio Landing",
    "shortDescription": "Landing page for a design studio",
    "description": "A single-page landing site for a design studio, with scroll-triggered reveal animations and a lightweight contact form.",
    "category": "Web Page",
    "tags": ["CSS", "Animation"],
    "image": "/images/works/studio-landing.webp",
    "client": "Atelier Mado",
    "year": "2023"
  },
  {
    "id": "kanban",
    "title": "Flowboard",
    "shortDescription": "Kanban board for small teams",
    "description": "A kanban-style task board for small teams. Drag-and-drop cards, keyboard navigation, and a local-first data model.",
    "category": "Web Application",
    "tags": ["Leptos", "Drag and drop"],
    "image": "/images/works/kanban.webp",
    "features": ["Drag and drop", "Keyboard friendly"],
    "year": "2025"
  }
]"#;

/// カタログを読み込む
///
/// 埋め込みデータが壊れている場合は空カタログにフォールバックして
/// ログだけ残す（画面はエラーにしない）。
pub fn load_catalog() -> Catalog {
    Catalog::from_json(PROJECTS_JSON).unwrap_or_else(|e| {
        gloo::console::error!(format!("カタログの読込に失敗: {}", e));
        Catalog::default()
    })
}

/// 経歴タイムラインの1項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// 経歴タイムライン（Aboutページのカルーセルに表示）
pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2019",
        title: "First freelance work",
        text: "Started taking freelance web projects while studying.",
    },
    TimelineEntry {
        year: "2020",
        title: "Frontend engineer",
        text: "Joined a Tokyo agency building storefronts and landing pages.",
    },
    TimelineEntry {
        year: "2022",
        title: "Rust + WASM",
        text: "Moved client-side work to Rust and WebAssembly.",
    },
    TimelineEntry {
        year: "2023",
        title: "Independent",
        text: "Went independent, focusing on performance-critical web apps.",
    },
    TimelineEntry {
        year: "2025",
        title: "This site",
        text: "Rebuilt the portfolio itself in Leptos.",
    },
];

/// スキル一覧（分野, 項目）
pub const SKILLS: &[(&str, &[&str])] = &[
    ("Languages", &["Rust", "TypeScript", "SQL"]),
    ("Frontend", &["Leptos", "WASM", "CSS"]),
    ("Tooling", &["Trunk", "GitHub Actions", "Figma"]),
];

/// SNSリンクのアイコン種別
///
/// 動的なルックアップテーブルではなく列挙で固定ディスパッチする。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    Twitter,
    LinkedIn,
    Mail,
}

impl SocialIcon {
    /// 表示用グリフ
    pub fn glyph(&self) -> &'static str {
        match self {
            SocialIcon::GitHub => "\u{2328}",   // ⌨
            SocialIcon::Twitter => "\u{1F426}", // 🐦
            SocialIcon::LinkedIn => "\u{1F4BC}", // 💼
            SocialIcon::Mail => "\u{2709}",     // ✉
        }
    }
}

/// SNSリンク1件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: SocialIcon,
}

/// SNSリンク（Contactページに表示）
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/example",
        icon: SocialIcon::GitHub,
    },
    SocialLink {
        label: "Twitter",
        url: "https://twitter.com/example",
        icon: SocialIcon::Twitter,
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/example",
        icon: SocialIcon::LinkedIn,
    },
    SocialLink {
        label: "Email",
        url: "mailto:hello@example.com",
        icon: SocialIcon::Mail,
    },
];
