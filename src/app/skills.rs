use leptos::prelude::*;

use crate::content::{SkillCategory, SkillsContent};
use crate::reveal::{grid_delay, SectionLayout};

use super::reveal::{use_reveal, RevealHandle};
use super::SectionTitle;

const TITLE: usize = 0;

const BAR_BASE_DELAY: f64 = 0.5;
const BAR_CATEGORY_STEP: f64 = 0.1;
const BAR_SKILL_STEP: f64 = 0.05;
const BAR_DURATION: f64 = 1.0;

fn layout(categories: &[SkillCategory]) -> SectionLayout {
    // every category takes a stagger step; its skills animate along with it
    categories
        .iter()
        .fold(SectionLayout::sequence(1), |layout, category| {
            layout.then_each(1).nested(category.skills.len())
        })
        .then_each(1)
}

/// Element index of each category header, plus the index of the summary block.
fn category_indices(categories: &[SkillCategory]) -> (Vec<usize>, usize) {
    let mut next = TITLE + 1;
    let indices = categories
        .iter()
        .map(|category| {
            let index = next;
            next += 1 + category.skills.len();
            index
        })
        .collect();
    (indices, next)
}

fn bar_style(triggered: bool, level: u8, category: usize, skill: usize) -> String {
    if triggered {
        let delay = grid_delay(BAR_BASE_DELAY, BAR_CATEGORY_STEP, BAR_SKILL_STEP, category, skill);
        format!(
            "width: {level}%; transition: width {BAR_DURATION}s ease-out {:.2}s;",
            delay.as_secs_f64()
        )
    } else {
        "width: 0%;".to_string()
    }
}

#[component]
pub fn Skills(skills: &'static SkillsContent) -> impl IntoView {
    let reveal = use_reveal("skills", layout(&skills.categories));
    let (indices, summary_index) = category_indices(&skills.categories);

    view! {
        <section id="skills" class="w-full py-16">
            <div node_ref=reveal.node_ref>
                <SectionTitle reveal index=TITLE text="Skills & Technologies" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {skills
                        .categories
                        .iter()
                        .zip(indices)
                        .enumerate()
                        .map(|(position, (category, index))| {
                            view! { <Category reveal index position category /> }
                        })
                        .collect_view()}
                </div>
                <div class="reveal mt-12" style=move || reveal.style(summary_index)>
                    <h3 class="text-xl font-bold my-8 text-center">"Core Competencies"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {skills
                            .competencies
                            .iter()
                            .map(|c| {
                                view! {
                                    <div class="bg-brightBlack/30 p-4 rounded-md">
                                        <h4 class="font-bold mb-1">{c.title.clone()}</h4>
                                        <p class="text-sm">{c.description.clone()}</p>
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
fn Category(
    reveal: RevealHandle,
    index: usize,
    position: usize,
    category: &'static SkillCategory,
) -> impl IntoView {
    view! {
        <div class="reveal bg-brightBlack/30 p-4 rounded-lg" style=move || reveal.style(index)>
            <h3 class="font-bold mb-4">{category.title.clone()}</h3>
            <div class="space-y-3">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let element = index + 1 + i;
                        let level = skill.level;
                        view! {
                            <div class="reveal transition-transform hover:scale-[1.02]" style=move || reveal.style(element)>
                                <div class="flex items-center gap-2 text-sm mb-1">
                                    <i class=skill.icon.clone()></i>
                                    <span class="flex-grow">{skill.name.clone()}</span>
                                    <span class="text-muted">{format!("{level}%")}</span>
                                </div>
                                <div class="h-2 rounded bg-muted/20 overflow-hidden">
                                    <div
                                        class="h-full bg-cyan rounded"
                                        style=move || bar_style(reveal.triggered(), level, position, i)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
