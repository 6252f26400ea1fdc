//! カタログフィルタ
//!
//! (カタログ, 検索語, カテゴリ) → 部分列 の純関数。
//! I/Oなし、エラーなし。検索語・カテゴリが変わるたびに再計算される。

use crate::types::ProjectRecord;

/// カテゴリ未選択を表すセンチネル
pub const ALL_CATEGORIES: &str = "all";

/// フィルタ状態（ページ表示ごとに生成、遷移で破棄）
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// 自由入力の検索語（大文字小文字を区別しない）
    pub search_term: String,
    /// "all" またはカタログ中のカテゴリ
    pub selected_category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FilterState {
    /// このフィルタ状態でカタログを絞り込む
    pub fn apply<'a>(&self, catalog: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        filter(catalog, &self.search_term, &self.selected_category)
    }
}

/// カタログを検索語とカテゴリで絞り込む
///
/// - カテゴリは完全一致（大文字小文字を区別する）
/// - 検索語はtitle / description / tagsへの部分一致（大文字小文字を区別しない）
/// - 両条件のAND
/// - 元の並び順を保持する安定フィルタ。空の結果も正常値
pub fn filter<'a>(
    catalog: &'a [ProjectRecord],
    search_term: &str,
    category: &str,
) -> Vec<&'a ProjectRecord> {
    let term = search_term.to_lowercase();
    catalog
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .filter(|p| term.is_empty() || matches_term(p, &term))
        .collect()
}

/// 検索語（小文字化済み）がレコードのどこかに部分一致するか
fn matches_term(project: &ProjectRecord, term: &str) -> bool {
    project.title.to_lowercase().contains(term)
        || project.description.to_lowercase().contains(term)
        || project.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// カテゴリ5種のサンプルカタログ
    fn sample_catalog() -> Vec<ProjectRecord> {
        let make = |id: &str, title: &str, desc: &str, category: &str, tags: &[&str]| ProjectRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: desc.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        };

        vec![
            make(
                "shopline",
                "Shopline Store",
                "Headless storefront with cart and checkout",
                "E-commerce",
                &["Rust", "WASM", "Stripe"],
            ),
            make(
                "metrics",
                "Analytics Dashboard",
                "Realtime metrics with charts",
                "Web Application",
                &["Leptos", "WebSocket"],
            ),
            make(
                "notetaker",
                "Notetaker",
                "Cross-platform note taking app",
                "Desktop Application",
                &["Tauri", "SQLite"],
            ),
            make(
                "devlog",
                "Devlog",
                "Static blog with markdown rendering",
                "Blog Page",
                &["Markdown", "SSG"],
            ),
            make(
                "landing",
                "Studio Landing",
                "Landing page for a design studio",
                "Web Page",
                &["CSS", "Animation"],
            ),
        ]
    }

    // =============================================
    // 基本動作
    // =============================================

    #[test]
    fn test_filter_identity() {
        // 検索語もカテゴリも無指定なら全件をそのまま返す
        let catalog = sample_catalog();
        let result = filter(&catalog, "", ALL_CATEGORIES);
        assert_eq!(result.len(), catalog.len());
        for (original, filtered) in catalog.iter().zip(&result) {
            assert_eq!(original.id, filtered.id);
        }
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "", "E-commerce");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "shopline");
    }

    #[test]
    fn test_filter_category_case_sensitive() {
        // カテゴリは完全一致（小文字では一致しない）
        let catalog = sample_catalog();
        let result = filter(&catalog, "", "e-commerce");
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_by_title_case_insensitive() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "dashboard", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Analytics Dashboard");
    }

    #[test]
    fn test_filter_by_description() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "markdown", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "devlog");
    }

    #[test]
    fn test_filter_by_tag() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "stripe", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "shopline");
    }

    #[test]
    fn test_filter_no_match() {
        let catalog = sample_catalog();
        let result = filter(&catalog, "xyz123", ALL_CATEGORIES);
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_conjunctive() {
        // カテゴリと検索語はAND
        let catalog = sample_catalog();
        let result = filter(&catalog, "dashboard", "Web Application");
        assert_eq!(result.len(), 1);

        let result = filter(&catalog, "dashboard", "E-commerce");
        assert!(result.is_empty());
    }

    // =============================================
    // 性質
    // =============================================

    #[test]
    fn test_filter_preserves_order() {
        // "a"は複数件に部分一致する。カタログ順が保たれること
        let catalog = sample_catalog();
        let result = filter(&catalog, "a", ALL_CATEGORIES);
        assert!(result.len() > 1);

        let positions: Vec<usize> = result
            .iter()
            .map(|p| catalog.iter().position(|c| c.id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_idempotent() {
        let catalog = sample_catalog();
        let once: Vec<ProjectRecord> = filter(&catalog, "a", "Web Application")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, "a", "Web Application");

        assert_eq!(once.len(), twice.len());
        for (first, second) in once.iter().zip(&twice) {
            assert_eq!(first.id, second.id);
        }
    }

    #[test]
    fn test_filter_empty_catalog() {
        let result = filter(&[], "anything", ALL_CATEGORIES);
        assert!(result.is_empty());
    }

    // =============================================
    // FilterState
    // =============================================

    #[test]
    fn test_filter_state_default() {
        let state = FilterState::default();
        assert_eq!(state.search_term, "");
        assert_eq!(state.selected_category, ALL_CATEGORIES);
    }

    #[test]
    fn test_filter_state_apply() {
        let catalog = sample_catalog();
        let state = FilterState {
            search_term: "DASHBOARD".to_string(),
            selected_category: ALL_CATEGORIES.to_string(),
        };
        let result = state.apply(&catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "metrics");
    }

    #[test]
    fn test_filter_state_clear_restores_all() {
        let catalog = sample_catalog();
        let result = FilterState::default().apply(&catalog);
        assert_eq!(result.len(), catalog.len());
    }
}
