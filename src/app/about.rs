use leptos::prelude::*;

use crate::content::About as AboutContent;
use crate::reveal::SectionLayout;

use super::reveal::use_reveal;
use super::SectionTitle;

const TITLE: usize = 0;
const TEXT: usize = 1;
const STATS: usize = 2;

fn layout(stats: usize) -> SectionLayout {
    // stat cards share the stats slot
    SectionLayout::sequence(3).nested(stats).then_each(1)
}

fn stat_index(i: usize) -> usize {
    STATS + 1 + i
}

fn highlights_index(stats: usize) -> usize {
    STATS + 1 + stats
}

#[component]
pub fn About(about: &'static AboutContent) -> impl IntoView {
    let stats = about.stats.len();
    let reveal = use_reveal("about", layout(stats));

    view! {
        <section id="about" class="w-full py-16">
            <div node_ref=reveal.node_ref>
                <SectionTitle reveal index=TITLE text="About Me" />
                <div class="flex flex-col lg:flex-row gap-8 lg:gap-12">
                    <div class="reveal w-full lg:max-w-2xl" style=move || reveal.style(TEXT)>
                        <h3 class="text-xl font-bold my-4">{about.heading.clone()}</h3>
                        {about
                            .paragraphs
                            .iter()
                            .map(|p| view! { <p class="text-base mb-4 leading-relaxed">{p.clone()}</p> })
                            .collect_view()}
                    </div>
                    <div class="reveal w-full lg:max-w-md" style=move || reveal.style(STATS)>
                        <div class="grid grid-cols-2 gap-4">
                            {about
                                .stats
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    view! {
                                        <div
                                            class="reveal bg-brightBlack/30 p-4 rounded-lg text-center transition-transform hover:scale-105"
                                            style=move || reveal.style(stat_index(i))
                                        >
                                            <i class=format!("{} text-2xl text-cyan", stat.icon)></i>
                                            <div class="text-3xl font-bold my-2">{stat.number.clone()}</div>
                                            <div class="text-sm text-muted">{stat.label.clone()}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="reveal mt-12" style=move || reveal.style(highlights_index(stats))>
                    <h3 class="text-xl font-bold my-8 text-center">"What I Do Best"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {about
                            .highlights
                            .iter()
                            .map(|h| {
                                view! {
                                    <div class="flex gap-4 bg-brightBlack/30 p-4 rounded-md">
                                        <i class=format!(
                                            "{} text-2xl text-purple",
                                            h.icon.as_deref().unwrap_or_default(),
                                        )></i>
                                        <div>
                                            <h4 class="font-bold mb-1">{h.title.clone()}</h4>
                                            <p class="text-sm">{h.description.clone()}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_layout_indices() {
        let layout = layout(4);
        assert_eq!(layout.len(), 8);
        for i in 0..4 {
            assert_eq!(layout.slot(stat_index(i)), layout.slot(STATS));
        }
        assert_eq!(layout.slot(highlights_index(4)), Some(3));
    }
}
