//! IntersectionObserverラッパー
//!
//! 要素が初めて閾値を超えて可視になったとき一度だけコールバックし、
//! その場でobserverを切断する。再マウント時はもう一度observe_onceを
//! 呼べば新しい監視セッションになる。
//! APIが無い環境では即時可視扱いにフォールバックする（例外は投げない）。

use portfolio_common::{RevealConfig, RevealState};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// 要素を監視して、初回可視のタイミングで一度だけon_revealを呼ぶ
pub fn observe_once<F>(element: &Element, config: RevealConfig, on_reveal: F)
where
    F: Fn() + 'static,
{
    if !supports_intersection_observer() {
        // 未対応環境は即時可視扱い
        on_reveal();
        return;
    }

    let mut state = RevealState::new();
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = effective_ratio(
                    &config,
                    entry.intersection_ratio(),
                    entry.is_intersecting(),
                );
                if state.on_intersection(&config, ratio) {
                    observer.disconnect();
                    on_reveal();
                    break;
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&format!("{}px", config.root_margin_px));
    init.set_threshold(&JsValue::from_f64(config.threshold));

    if let Ok(observer) = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
    {
        observer.observe(element);
        closure.forget();
    }
    // 構築に失敗した場合は何もしない（マウント前と同じ扱いで次の機会に任せる）
}

/// 発火判定に使う実効比率
///
/// intersectionRatioは記録時点の値で、丸め誤差により閾値を僅かに
/// 下回ることがある（0.0999... vs 0.1）。閾値は1件だけ登録するので
/// 取りこぼすと再入まで通知が来ない。isIntersectingが立っていれば
/// 閾値到達として扱う。
fn effective_ratio(config: &RevealConfig, ratio: f64, is_intersecting: bool) -> f64 {
    if is_intersecting {
        ratio.max(config.threshold)
    } else {
        ratio
    }
}

fn supports_intersection_observer() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}
