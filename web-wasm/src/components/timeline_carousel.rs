//! 経歴タイムラインカルーセル
//!
//! 横スクロールのカード列。スクロールのたびにコンテナのジオメトリを読み、
//! common側の計算でindexと前後ボタンの活性を同期する。
//! ブレークポイント跨ぎはリサイズで再計算し、古いピクセル位置は引き継がない。

use leptos::html::Div;
use leptos::prelude::*;
use portfolio_common::carousel::{
    self, CarouselLayout, LayoutMode, ScrollGeometry,
};
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::content::{TimelineEntry, TIMELINE};

#[component]
pub fn TimelineCarousel() -> impl IntoView {
    let layout = CarouselLayout::default();
    let container = NodeRef::<Div>::new();
    let item_count = TIMELINE.len();

    let (current, set_current) = signal(0usize);
    let (mode, set_mode) = signal(LayoutMode::Desktop);
    let (can_left, set_can_left) = signal(false);
    let (can_right, set_can_right) = signal(item_count > 1);

    // コンテナ未マウント時はNone（呼び出し側は何もしない）
    let read_geometry = move || -> Option<ScrollGeometry> {
        let element = container.get_untracked()?;
        Some(ScrollGeometry {
            scroll_left: element.scroll_left() as f64,
            container_width: element.client_width() as f64,
            scroll_width: element.scroll_width() as f64,
            client_width: element.client_width() as f64,
        })
    };

    // スクロール位置からindexとボタン活性を再計算
    let sync = move || {
        let Some(geometry) = read_geometry() else {
            return;
        };
        set_current.set(carousel::current_index(
            &layout,
            mode.get_untracked(),
            &geometry,
            item_count,
        ));
        set_can_left.set(carousel::can_scroll_left(&geometry));
        set_can_right.set(carousel::can_scroll_right(&geometry));
    };

    let update_mode = move || {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(layout.breakpoint);
        set_mode.set(layout.mode(width));
        sync();
    };

    // 初期判定とリサイズ追従
    Effect::new(move |_| {
        update_mode();
        let closure = Closure::wrap(
            Box::new(move |_: web_sys::Event| update_mode()) as Box<dyn FnMut(_)>
        );
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    });

    // index番のカードへスムーズスクロール（同じindexなら実質no-op）
    let scroll_to_index = move |index: usize| {
        let Some(element) = container.get_untracked() else {
            return;
        };
        let Some(geometry) = read_geometry() else {
            return;
        };
        let index = index.min(item_count.saturating_sub(1));
        let left = carousel::target_offset(&layout, mode.get_untracked(), &geometry, index);

        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_to_with_scroll_to_options(&options);
        set_current.set(index);
    };

    view! {
        <div class="timeline-carousel">
            <button
                class="carousel-nav prev"
                disabled=move || !can_left.get()
                on:click=move |_| {
                    let index = current.get_untracked();
                    if index > 0 {
                        scroll_to_index(index - 1);
                    }
                }
            >
                "‹"
            </button>

            <div
                class="carousel-track"
                node_ref=container
                on:scroll=move |_| sync()
            >
                {TIMELINE
                    .iter()
                    .map(|entry| view! { <TimelineCard entry=entry /> })
                    .collect_view()}
            </div>

            <button
                class="carousel-nav next"
                disabled=move || !can_right.get()
                on:click=move |_| {
                    scroll_to_index(current.get_untracked() + 1);
                }
            >
                "›"
            </button>

            <div class="carousel-dots">
                {(0..item_count)
                    .map(|index| {
                        view! {
                            <button
                                class="dot"
                                class:active=move || current.get() == index
                                aria-label=format!("{}へ移動", index + 1)
                                on:click=move |_| scroll_to_index(index)
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TimelineCard(entry: &'static TimelineEntry) -> impl IntoView {
    view! {
        <div class="timeline-card">
            <span class="timeline-year">{entry.year}</span>
            <h4>{entry.title}</h4>
            <p class="text-muted">{entry.text}</p>
        </div>
    }
}
