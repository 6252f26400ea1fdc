//! ユーザー設定のlocalStorage永続化
//!
//! 起動時に一度読み込み、変更のたびに保存する。
//! 値が無い・壊れている場合は既定値に戻す（エラーにしない）。

use portfolio_common::Preferences;

const STORAGE_KEY: &str = "portfolio:prefs";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// 保存済みの設定を読み込む
pub fn load() -> Preferences {
    let Some(storage) = storage() else {
        return Preferences::default();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            gloo::console::warn!(format!("設定の読込に失敗、既定値を使用: {}", e));
            Preferences::default()
        }),
        _ => Preferences::default(),
    }
}

/// 設定を保存する
pub fn save(prefs: &Preferences) {
    let Some(storage) = storage() else {
        return;
    };
    match serde_json::to_string(prefs) {
        Ok(raw) => {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
        Err(e) => gloo::console::warn!(format!("設定の保存に失敗: {}", e)),
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use portfolio_common::Theme;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_prefs_save_load_roundtrip() {
        let original = Preferences {
            theme: Theme::Light,
            sound_enabled: false,
        };
        save(&original);
        assert_eq!(load(), original);
    }

    #[wasm_bindgen_test]
    fn wasm_prefs_corrupt_value_falls_back_to_default() {
        let storage = storage().expect("localStorageが取得できない");
        storage
            .set_item(STORAGE_KEY, "not json")
            .expect("書き込み失敗");
        assert_eq!(load(), Preferences::default());
    }
}
