use leptos::prelude::*;

use crate::content::{Education, ExperienceContent, Position};
use crate::reveal::SectionLayout;

use super::reveal::{use_reveal, RevealHandle};
use super::SectionTitle;

const TITLE: usize = 0;
const POSITION: usize = 1;

fn layout(achievements: usize) -> SectionLayout {
    // achievement cards animate with their position; education and summary follow
    SectionLayout::sequence(2).nested(achievements).then_each(2)
}

#[component]
pub fn Experience(experience: &'static ExperienceContent) -> impl IntoView {
    let achievements = experience.position.achievements.len();
    let reveal = use_reveal("experience", layout(achievements));
    let education_index = POSITION + achievements + 1;
    let summary_index = education_index + 1;

    view! {
        <section id="experience" class="w-full py-16">
            <div node_ref=reveal.node_ref>
                <SectionTitle reveal index=TITLE text="Experience & Education" />
                <div class="relative border-l-2 border-muted/30 ml-4 space-y-12">
                    <PositionEntry reveal index=POSITION position=&experience.position />
                    <EducationEntry reveal index=education_index education=&experience.education />
                </div>
                <div class="reveal mt-12" style=move || reveal.style(summary_index)>
                    <h3 class="text-xl font-bold my-8 text-center">"Key Achievements"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {experience
                            .summary
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="bg-brightBlack/30 p-4 rounded-md">
                                        <i class=format!(
                                            "{} text-2xl text-green",
                                            item.icon.as_deref().unwrap_or_default(),
                                        )></i>
                                        <h4 class="font-bold my-2">{item.title.clone()}</h4>
                                        <p class="text-sm">{item.description.clone()}</p>
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

#[component]
fn PositionEntry(reveal: RevealHandle, index: usize, position: &'static Position) -> impl IntoView {
    view! {
        <div class="reveal pl-8" style=move || reveal.style(index)>
            <div class="flex flex-col md:flex-row md:items-start md:justify-between">
                <div>
                    <h3 class="text-xl font-bold">{position.position.clone()}</h3>
                    <span class="text-cyan">{position.company.clone()}</span>
                </div>
                <div class="shrink-0 text-sm text-muted md:text-right">
                    <div>
                        <i class="extra-calendar mr-1"></i>
                        {position.duration.clone()}
                    </div>
                    <div>
                        <i class="extra-location mr-1"></i>
                        {position.location.clone()}
                    </div>
                </div>
            </div>
            <p class="my-4 leading-relaxed">{position.description.clone()}</p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {position
                    .achievements
                    .iter()
                    .enumerate()
                    .map(|(i, achievement)| {
                        let element = index + 1 + i;
                        view! {
                            <div
                                class="reveal bg-brightBlack/30 p-4 rounded-md transition-transform hover:scale-[1.02]"
                                style=move || reveal.style(element)
                            >
                                <h4 class="font-bold mb-2">{achievement.title.clone()}</h4>
                                <p class="text-sm mb-3">{achievement.description.clone()}</p>
                                <div class="flex flex-wrap gap-2 mb-3">
                                    {achievement
                                        .technologies
                                        .iter()
                                        .map(|tech| {
                                            view! {
                                                <span class="text-xs bg-cyan/20 text-cyan px-2 py-1 rounded">
                                                    {tech.clone()}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="text-sm">
                                    <strong>"Impact: "</strong>
                                    {achievement.impact.clone()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn EducationEntry(
    reveal: RevealHandle,
    index: usize,
    education: &'static Education,
) -> impl IntoView {
    view! {
        <div class="reveal pl-8" style=move || reveal.style(index)>
            <h3 class="text-xl font-bold">{education.degree.clone()}</h3>
            <span class="text-cyan">{education.institution.clone()}</span>
            <div class="text-sm text-muted">
                <i class="extra-calendar mr-1"></i>
                {education.duration.clone()}
                " · "
                <i class="extra-location mr-1"></i>
                {education.location.clone()}
            </div>
        </div>
    }
}
