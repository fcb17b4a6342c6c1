use leptos::prelude::*;

use crate::content::Profile;
use crate::reveal::SectionLayout;

use super::reveal::use_reveal_on_mount;

const TEXT: usize = 0;
const TITLE: usize = 1;
const SUBTITLE: usize = 2;
const SUMMARY: usize = 3;
const ACTIONS: usize = 4;
const AVATAR: usize = 5;
const SOCIAL: usize = 6;

fn layout() -> SectionLayout {
    // title, subtitle, summary and actions animate with the text block
    SectionLayout::sequence(1).nested(4).then_each(2)
}

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let reveal = use_reveal_on_mount("hero", layout());
    let cv_path = profile.cv_path.clone();

    view! {
        <section id="home" class="relative flex flex-col justify-center min-h-screen w-full">
            <div node_ref=reveal.node_ref class="flex flex-col lg:flex-row items-center gap-12">
                <div class="reveal flex-1" style=move || reveal.style(TEXT)>
                    <h1 class="reveal text-4xl lg:text-5xl font-bold mb-4" style=move || reveal.style(TITLE)>
                        "Hi, I'm " <span class="text-cyan">{profile.name.clone()}</span>
                    </h1>
                    <h2 class="reveal text-2xl text-muted mb-6" style=move || reveal.style(SUBTITLE)>
                        {profile.title.clone()}
                    </h2>
                    <p class="reveal text-base leading-relaxed mb-8 max-w-xl" style=move || reveal.style(SUMMARY)>
                        {profile.summary.clone()}
                    </p>
                    <div class="reveal flex flex-wrap gap-4" style=move || reveal.style(ACTIONS)>
                        <a
                            href=cv_path
                            target="_blank"
                            class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-transform hover:scale-105 border border-cyan/30"
                        >
                            <i class="extra-download mr-2"></i>
                            "Download CV"
                        </a>
                        <a
                            href="#contact"
                            class="px-6 py-3 rounded-md font-medium border border-muted/30 transition-transform hover:scale-105"
                        >
                            "Get In Touch"
                        </a>
                    </div>
                </div>
                <div class="reveal flex-shrink-0" style=move || reveal.style(AVATAR)>
                    <div class="relative">
                        <div class="flex items-center justify-center w-56 h-56 rounded-full bg-brightBlack/30 border border-cyan/30">
                            <span class="text-6xl font-bold text-cyan">{profile.initials.clone()}</span>
                        </div>
                        <div class="absolute -bottom-2 left-1/2 -translate-x-1/2 whitespace-nowrap bg-purple/20 text-purple text-sm px-4 py-1 rounded-full">
                            {profile.badge.clone()}
                        </div>
                    </div>
                </div>
            </div>
            <div class="reveal flex gap-4 mt-12 text-2xl" style=move || reveal.style(SOCIAL)>
                {profile
                    .socials
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                href=social.url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-white hover:text-cyan"
                                aria-label=social.label.clone()
                            >
                                <i class=social.icon.clone()></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-muted">"↓"</div>
        </section>
    }
}
