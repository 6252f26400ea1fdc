//! カタログの型定義
//!
//! ビルド時に埋め込まれるカタログJSONをデシリアライズする型。
//! ProjectRecordは起動後に変更されない（作成・更新・削除なし）。

use serde::{Deserialize, Serialize};

/// ポートフォリオ作品1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    /// カタログ全体で一意なキー（詳細ページへの遷移に使用）
    pub id: String,

    pub title: String,

    pub description: String,

    pub short_description: String,

    /// 分類ラベル（カテゴリフィルタは完全一致）
    pub category: String,

    /// 使用技術など（部分一致検索の対象）
    pub tags: Vec<String>,

    /// 静的アセットのパス
    pub image: String,

    // 以下は詳細ページ表示用（フィルタには使わない）
    pub client: String,

    pub url: String,

    pub features: Vec<String>,

    pub year: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_record_default() {
        let record = ProjectRecord::default();
        assert_eq!(record.id, "");
        assert_eq!(record.title, "");
        assert!(record.tags.is_empty());
        assert!(record.features.is_empty());
    }

    #[test]
    fn test_project_record_serialize() {
        let record = ProjectRecord {
            id: "shopline".to_string(),
            title: "Shopline Store".to_string(),
            short_description: "Headless storefront".to_string(),
            category: "E-commerce".to_string(),
            tags: vec!["Rust".to_string(), "WASM".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":\"shopline\""));
        assert!(json.contains("\"shortDescription\":\"Headless storefront\""));
        assert!(json.contains("\"category\":\"E-commerce\""));
    }

    #[test]
    fn test_project_record_deserialize() {
        let json = r#"{
            "id": "taskboard",
            "title": "Taskboard",
            "category": "Web Application",
            "tags": ["Leptos"],
            "year": "2024"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, "taskboard");
        assert_eq!(record.category, "Web Application");
        assert_eq!(record.tags, vec!["Leptos".to_string()]);
        assert_eq!(record.year, "2024");
        assert_eq!(record.client, ""); // デフォルト値
    }

    #[test]
    fn test_project_record_deserialize_minimal() {
        // idのみでもデシリアライズできることを確認
        let json = r#"{"id": "minimal"}"#;

        let record: ProjectRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, "minimal");
        assert_eq!(record.title, ""); // デフォルト値
        assert!(record.tags.is_empty()); // デフォルト値
    }

    #[test]
    fn test_project_record_roundtrip() {
        let original = ProjectRecord {
            id: "portfolio".to_string(),
            title: "Portfolio Site".to_string(),
            description: "Personal portfolio".to_string(),
            short_description: "Portfolio".to_string(),
            category: "Web Page".to_string(),
            tags: vec!["Rust".to_string()],
            image: "/images/portfolio.webp".to_string(),
            client: "Self".to_string(),
            url: "https://example.com".to_string(),
            features: vec!["Dark mode".to_string()],
            year: "2025".to_string(),
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: ProjectRecord = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(original, restored);
    }
}
