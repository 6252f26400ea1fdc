//! ヘッダーコンポーネント
//!
//! ナビゲーションとテーマ・効果音トグル。

use leptos::prelude::*;
use portfolio_common::{Page, Preferences, Theme};

#[component]
pub fn Header<F>(page: ReadSignal<Page>, on_navigate: F) -> impl IntoView
where
    F: Fn(Page) + 'static + Clone,
{
    let prefs = expect_context::<RwSignal<Preferences>>();

    let brand_navigate = on_navigate.clone();

    view! {
        <header class="header">
            <a
                class="brand"
                on:click=move |_| brand_navigate(Page::Home)
            >
                "Yuki Sato"
            </a>

            <nav class="nav">
                {Page::nav_pages()
                    .into_iter()
                    .map(|target| {
                        let on_navigate = on_navigate.clone();
                        let active_target = target.clone();
                        let click_target = target.clone();
                        view! {
                            <button
                                class="nav-link"
                                class:active=move || page.get().nav_matches(&active_target)
                                on:click=move |_| on_navigate(click_target.clone())
                            >
                                {target.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="header-actions">
                <button
                    class="icon-button"
                    title="テーマ切り替え"
                    on:click=move |_| prefs.update(|p| p.theme = p.theme.toggled())
                >
                    {move || match prefs.get().theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀️",
                    }}
                </button>
                <button
                    class="icon-button"
                    title="効果音"
                    on:click=move |_| prefs.update(|p| p.sound_enabled = !p.sound_enabled)
                >
                    {move || if prefs.get().sound_enabled { "🔊" } else { "🔇" }}
                </button>
            </div>
        </header>
    }
}
