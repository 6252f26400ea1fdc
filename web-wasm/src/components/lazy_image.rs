//! 遅延読み込み画像コンポーネント
//!
//! ビューポートに近づくまでsrcを設定しない。初回可視の通知は
//! observer::observe_onceのワンショット発火を使う。
//! loading/errorは見た目用のクラス切り替えのみ。

use leptos::html::Img;
use leptos::prelude::*;
use portfolio_common::RevealConfig;

use crate::observer;

/// 読み込み状態（装飾用）
#[derive(Clone, Copy, PartialEq)]
enum ImageStatus {
    Loading,
    Loaded,
    Error,
}

impl ImageStatus {
    fn as_str(&self) -> &'static str {
        match self {
            ImageStatus::Loading => "loading",
            ImageStatus::Loaded => "loaded",
            ImageStatus::Error => "error",
        }
    }
}

#[component]
pub fn LazyImage(src: String, alt: String) -> impl IntoView {
    let node = NodeRef::<Img>::new();
    let (visible, set_visible) = signal(false);
    let (status, set_status) = signal(ImageStatus::Loading);
    let observed = StoredValue::new(false);

    // マウント後に監視を開始（1要素につき1observer）
    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };
        if observed.get_value() {
            return;
        }
        observed.set_value(true);
        observer::observe_once(&element, RevealConfig::default(), move || {
            set_visible.set(true);
        });
    });

    let src_attr = move || visible.get().then(|| src.clone());

    view! {
        <img
            node_ref=node
            class=move || format!("lazy-image {}", status.get().as_str())
            src=src_attr
            alt=alt
            on:load=move |_| set_status.set(ImageStatus::Loaded)
            on:error=move |_| {
                // 可視化前のsrc未設定ではerrorは発火しない
                if visible.get_untracked() {
                    set_status.set(ImageStatus::Error);
                }
            }
        />
    }
}
