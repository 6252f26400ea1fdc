//! Contactページ

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SOCIAL_LINKS;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="contact">
            <h1>"Contact"</h1>
            <p>
                "お仕事のご相談・お見積もりはメールかSNSからどうぞ。"
                "通常2営業日以内に返信します。"
            </p>

            <Reveal>
                <ul class="social-links">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a
                                        class="social-link"
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        <span class="social-icon">{link.icon.glyph()}</span>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Reveal>
        </section>
    }
}
