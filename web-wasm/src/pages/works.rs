//! 作品一覧ページ
//!
//! 検索語とカテゴリでカタログを絞り込む。絞り込みは毎回再計算する
//! 派生値で、ローディング状態はない（0件も正常表示）。

use leptos::prelude::*;
use portfolio_common::{Catalog, FilterState, Page, ProjectRecord, ALL_CATEGORIES};

use crate::components::project_card::ProjectCard;

#[component]
pub fn WorksPage<F>(catalog: StoredValue<Catalog>, on_navigate: F) -> impl IntoView
where
    F: Fn(Page) + 'static + Clone + Send + Sync,
{
    // ページ表示ごとに生成、遷移で破棄
    let filter_state = RwSignal::new(FilterState::default());

    let categories: Vec<String> = catalog.with_value(|c| {
        c.categories().iter().map(|s| s.to_string()).collect()
    });

    let filtered = move || -> Vec<ProjectRecord> {
        filter_state.with(|state| {
            catalog.with_value(|c| {
                state.apply(c.projects()).into_iter().cloned().collect()
            })
        })
    };

    view! {
        <section class="works">
            <h1>"Works"</h1>

            <div class="works-controls">
                <input
                    type="search"
                    class="search-box"
                    placeholder="検索..."
                    prop:value=move || filter_state.with(|s| s.search_term.clone())
                    on:input=move |ev| {
                        filter_state.update(|s| s.search_term = event_target_value(&ev));
                    }
                />

                <select
                    class="category-select"
                    on:change=move |ev| {
                        filter_state.update(|s| s.selected_category = event_target_value(&ev));
                    }
                >
                    <option
                        value=ALL_CATEGORIES
                        selected=move || {
                            filter_state.with(|s| s.selected_category == ALL_CATEGORIES)
                        }
                    >
                        "すべて"
                    </option>
                    {categories
                        .into_iter()
                        .map(|category| {
                            let value = category.clone();
                            let selected_value = category.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || {
                                        filter_state
                                            .with(|s| s.selected_category == selected_value)
                                    }
                                >
                                    {category}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || !filtered().is_empty()
                fallback=|| {
                    view! {
                        <p class="text-muted empty-result">
                            "条件に合う作品がありません"
                        </p>
                    }
                }
            >
                <div class="project-grid">
                    <For
                        each=filtered
                        key=|project| project.id.clone()
                        children={
                            let on_navigate = on_navigate.clone();
                            move |project| {
                                let on_navigate = on_navigate.clone();
                                view! {
                                    <ProjectCard
                                        project=project
                                        on_open=move |id: String| on_navigate(Page::Work(id))
                                    />
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
