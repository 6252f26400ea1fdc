//! ホームページ

use leptos::prelude::*;
use portfolio_common::{Catalog, Page};

use crate::components::project_card::ProjectCard;
use crate::components::reveal::Reveal;

/// トップに出す作品数
const FEATURED_COUNT: usize = 3;

#[component]
pub fn HomePage<F>(catalog: StoredValue<Catalog>, on_navigate: F) -> impl IntoView
where
    F: Fn(Page) + 'static + Clone + Send + Sync,
{
    let featured: Vec<_> = catalog.with_value(|c| {
        c.projects().iter().take(FEATURED_COUNT).cloned().collect()
    });

    let works_navigate = on_navigate.clone();
    let contact_navigate = on_navigate.clone();
    let card_navigate = on_navigate.clone();

    view! {
        <section class="hero">
            <h1>"Yuki Sato"</h1>
            <p class="hero-subtitle">"Web engineer. Rust, WebAssembly, and fast interfaces."</p>
            <div class="hero-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| works_navigate(Page::Works)
                >
                    "作品を見る"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| contact_navigate(Page::Contact)
                >
                    "相談する"
                </button>
            </div>
        </section>

        <Reveal>
            <section class="featured">
                <h2>"Featured works"</h2>
                <div class="project-grid">
                    {featured
                        .into_iter()
                        .map(|project| {
                            let on_navigate = card_navigate.clone();
                            view! {
                                <ProjectCard
                                    project=project
                                    on_open=move |id: String| on_navigate(Page::Work(id))
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </Reveal>
    }
}
