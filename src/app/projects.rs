use leptos::prelude::*;

use crate::content::{filter_projects, Project, ProjectsContent, ALL_PROJECTS};
use crate::reveal::SectionLayout;

use super::reveal::{use_reveal, RevealHandle};
use super::SectionTitle;

const TITLE: usize = 0;
const FILTERS: usize = 1;

fn card_index(position: usize) -> usize {
    FILTERS + 1 + position
}

#[component]
pub fn Projects(projects: &'static ProjectsContent) -> impl IntoView {
    // each card is its own stagger step, keyed by its position in the full list
    let reveal = use_reveal(
        "projects",
        SectionLayout::sequence(card_index(projects.projects.len())),
    );
    let (active, set_active) = signal(ALL_PROJECTS.to_string());

    let shown = move || {
        let filter = active.get();
        filter_projects(&projects.projects, &filter)
            .into_iter()
            .map(|p| {
                let position = projects
                    .projects
                    .iter()
                    .position(|q| q.id == p.id)
                    .unwrap_or_default();
                (card_index(position), p)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section id="projects" class="w-full py-16">
            <div node_ref=reveal.node_ref>
                <SectionTitle reveal index=TITLE text="Featured Projects" />
                <div class="reveal flex justify-center gap-3 mb-8" style=move || reveal.style(FILTERS)>
                    {projects
                        .filters
                        .iter()
                        .map(|filter| {
                            let id = filter.id.clone();
                            let is_active = {
                                let id = id.clone();
                                move || active.with(|a| *a == id)
                            };
                            view! {
                                <button
                                    class="px-4 py-2 rounded-md border border-cyan/30"
                                    class:bg-cyan=is_active.clone()
                                    class:text-background=is_active
                                    on:click=move |_| set_active.set(id.clone())
                                >
                                    {filter.label.clone()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=shown
                        key=|(_, project)| project.id
                        children=move |(index, project)| view! { <ProjectCard reveal index project /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(reveal: RevealHandle, index: usize, project: &'static Project) -> impl IntoView {
    view! {
        <div
            class="reveal flex flex-col bg-brightBlack/30 rounded-lg overflow-hidden border border-muted/20 transition-transform hover:-translate-y-2"
            style=move || reveal.style(index)
        >
            <div class="relative">
                <img src=project.image.clone() alt=project.title.clone() class="w-full h-40 object-cover" />
                <div class="absolute inset-0 flex items-center justify-center bg-background/40 opacity-0 hover:opacity-100">
                    <i class=format!("{} text-4xl text-cyan", project.icon)></i>
                </div>
            </div>
            <div class="flex flex-col flex-grow p-4">
                <h3 class="text-lg font-bold mb-2">{project.title.clone()}</h3>
                <p class="text-sm mb-4">{project.description.clone()}</p>
                <h4 class="text-sm font-bold mb-1">"Key Features:"</h4>
                <ul class="text-sm list-disc list-inside mb-4 space-y-1">
                    {project
                        .features
                        .iter()
                        .map(|f| view! { <li>{f.clone()}</li> })
                        .collect_view()}
                </ul>
                <div class="text-sm mb-4">
                    <strong>"Impact: "</strong>
                    {project.impact.clone()}
                </div>
                <div class="flex flex-wrap gap-2 mt-auto">
                    {project
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
            </div>
        </div>
    }
}
