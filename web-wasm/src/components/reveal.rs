//! 出現アニメーション用ラッパー
//!
//! 子要素をdivで包み、初めてビューポートに入ったとき
//! visibleクラスを付ける（一度付いたら外さない）。

use leptos::html::Div;
use leptos::prelude::*;
use portfolio_common::RevealConfig;

use crate::observer;

#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);
    let observed = StoredValue::new(false);

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

    view! {
        <div node_ref=node class="reveal" class:visible=move || visible.get()>
            {children()}
        </div>
    }
}
