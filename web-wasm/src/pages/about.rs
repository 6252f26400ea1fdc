//! Aboutページ
//!
//! 自己紹介、スキル一覧、経歴タイムラインカルーセル。

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::timeline_carousel::TimelineCarousel;
use crate::content::SKILLS;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About"</h1>
            <p>
                "Independent web engineer based in Tokyo. I build performance-critical "
                "web applications in Rust and WebAssembly, and care about interfaces "
                "that stay fast on slow devices."
            </p>
        </section>

        <Reveal>
            <section class="skills">
                <h2>"Skills"</h2>
                {SKILLS
                    .iter()
                    .map(|(group, items)| {
                        view! {
                            <div class="skill-group">
                                <h3>{*group}</h3>
                                <ul class="tag-list">
                                    {items
                                        .iter()
                                        .map(|item| view! { <li class="tag">{*item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </Reveal>

        <Reveal>
            <section class="timeline">
                <h2>"Timeline"</h2>
                <TimelineCarousel />
            </section>
        </Reveal>
    }
}
