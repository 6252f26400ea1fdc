//! メインアプリケーションコンポーネント
//!
//! ページ切り替え（URLハッシュ同期）、ユーザー設定のコンテキスト提供、
//! テーマのルート要素への反映を行う。

use leptos::prelude::*;
use portfolio_common::{Page, Theme};
use wasm_bindgen::prelude::*;

use crate::components::header::Header;
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, work_detail::WorkDetailPage,
    works::WorksPage,
};
use crate::{content, prefs_store};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let catalog = StoredValue::new(content::load_catalog());
    let (page, set_page) = signal(Page::from_hash(&current_hash()));

    // ユーザー設定: 起動時に読み込み、コンテキストで配る
    let prefs = RwSignal::new(prefs_store::load());
    provide_context(prefs);

    // 変更のたびに保存し、テーマをルート要素へ反映
    Effect::new(move |_| {
        let current = prefs.get();
        prefs_store::save(&current);
        apply_theme(current.theme);
    });

    // 戻る/進むに追従
    install_hash_listener(set_page);

    // ページ遷移: ハッシュを書き換えてからシグナルを更新
    let navigate = move |target: Page| {
        set_location_hash(&target.hash());
        set_page.set(target);
    };

    view! {
        <div class="site">
            <Header page=page on_navigate=navigate />
            <main class="page">
                {move || match page.get() {
                    Page::Home => view! { <HomePage catalog=catalog on_navigate=navigate /> }.into_any(),
                    Page::About => view! { <AboutPage /> }.into_any(),
                    Page::Works => view! { <WorksPage catalog=catalog on_navigate=navigate /> }.into_any(),
                    Page::Work(id) => {
                        view! { <WorkDetailPage catalog=catalog id=id on_navigate=navigate /> }
                            .into_any()
                    }
                    Page::Contact => view! { <ContactPage /> }.into_any(),
                }}
            </main>
            <footer class="footer">
                <p>"© 2025 Yuki Sato / built with Rust + Leptos"</p>
            </footer>
        </div>
    }
}

/// テーマをdata-theme属性としてルート要素に反映
fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn set_location_hash(hash: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(hash);
    }
}

/// hashchangeでページシグナルを同期する
fn install_hash_listener(set_page: WriteSignal<Page>) {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        set_page.set(Page::from_hash(&current_hash()));
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
