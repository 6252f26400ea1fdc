//! 作品カタログ
//!
//! ビルド時に埋め込まれたJSONを起動時に一度だけ読み込む読み取り専用データ。
//! 実行中の追加・更新・削除はない。

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::ProjectRecord;

/// 作品カタログ（不変、カタログ順を保持）
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// レコード列からカタログを構築
    ///
    /// idはカタログ全体で一意でなければならない。重複はエラー。
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(Error::Catalog(format!("id重複: {}", project.id)));
            }
        }
        Ok(Self { projects })
    }

    /// JSON文字列（カタログJSON）からカタログを構築
    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// 全レコード（カタログ順）
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// idでレコードを引く（詳細ページ用）
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// カタログ中のカテゴリを初出順で列挙
    ///
    /// アルファベット順にはしない。"all"センチネルは含まない。
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
