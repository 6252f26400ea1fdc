//! 作品カードコンポーネント

use leptos::prelude::*;
use portfolio_common::ProjectRecord;

use crate::components::lazy_image::LazyImage;

#[component]
pub fn ProjectCard<F>(project: ProjectRecord, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    let project_id = project.id.clone();

    view! {
        <article
            class="project-card"
            on:click=move |_| on_open(project_id.clone())
        >
            <LazyImage src=project.image.clone() alt=project.title.clone() />
            <div class="project-info">
                <span class="project-category">{project.category.clone()}</span>
                <h3>{project.title.clone()}</h3>
                <p class="text-muted">{project.short_description.clone()}</p>
                <ul class="tag-list">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <li class="tag">{tag.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}
