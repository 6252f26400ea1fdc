//! 作品詳細ページ
//!
//! カタログからidでレコードを引いて表示する。
//! 見つからない場合はエラーにせず一覧への導線だけを出す。

use leptos::prelude::*;
use portfolio_common::{Catalog, Page};

use crate::components::lazy_image::LazyImage;

#[component]
pub fn WorkDetailPage<F>(
    catalog: StoredValue<Catalog>,
    id: String,
    on_navigate: F,
) -> impl IntoView
where
    F: Fn(Page) + 'static + Clone,
{
    let record = catalog.with_value(|c| c.get(&id).cloned());
    let back_navigate = on_navigate.clone();

    view! {
        <section class="work-detail">
            <button
                class="btn btn-secondary btn-small"
                on:click=move |_| back_navigate(Page::Works)
            >
                "← 一覧へ戻る"
            </button>

            {match record {
                Some(project) => {
                    view! {
                        <article>
                            <LazyImage src=project.image.clone() alt=project.title.clone() />
                            <div class="work-meta">
                                <span class="project-category">{project.category.clone()}</span>
                                <h1>{project.title.clone()}</h1>
                                <p>{project.description.clone()}</p>

                                <dl class="work-facts">
                                    {(!project.client.is_empty())
                                        .then(|| {
                                            view! {
                                                <dt>"Client"</dt>
                                                <dd>{project.client.clone()}</dd>
                                            }
                                        })}
                                    {(!project.year.is_empty())
                                        .then(|| {
                                            view! {
                                                <dt>"Year"</dt>
                                                <dd>{project.year.clone()}</dd>
                                            }
                                        })}
                                </dl>

                                {(!project.features.is_empty())
                                    .then(|| {
                                        view! {
                                            <h2>"Features"</h2>
                                            <ul class="feature-list">
                                                {project
                                                    .features
                                                    .iter()
                                                    .map(|feature| {
                                                        view! { <li>{feature.clone()}</li> }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        }
                                    })}

                                <ul class="tag-list">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| view! { <li class="tag">{tag.clone()}</li> })
                                        .collect_view()}
                                </ul>

                                {(!project.url.is_empty())
                                    .then(|| {
                                        view! {
                                            <a
                                                class="btn btn-primary"
                                                href=project.url.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                "サイトを開く →"
                                            </a>
                                        }
                                    })}
                            </div>
                        </article>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <p class="text-muted">"お探しの作品は見つかりませんでした"</p>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
