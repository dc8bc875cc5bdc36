use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::{PageSection, Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <RevealSection section=PageSection::Projects classes="bg-background py-12 md:py-24 lg:py-32">
            <div class="container">
                <div class="mx-auto max-w-[58rem] text-center">
                    <h2 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl">
                        "My Projects"
                    </h2>
                    <p class="mt-4 text-muted-foreground">
                        "A collection of projects I've worked on throughout my career."
                    </p>
                </div>
                <div class="mt-16 grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="flex flex-col overflow-hidden rounded-lg border border-primary/20 bg-background shadow-sm">
            <div class="relative aspect-video overflow-hidden">
                <img
                    src=project.image_or_placeholder()
                    alt=project.title
                    class="absolute inset-0 h-full w-full object-cover transition-transform duration-300 hover:scale-105"
                />
            </div>
            <div class="p-6 pb-0">
                <h3 class="text-2xl font-semibold text-secondary">{project.title}</h3>
                <p class="text-sm text-muted-foreground">{project.category}</p>
            </div>
            <div class="flex-1 p-6">
                <p class="text-muted-foreground">{project.description}</p>
            </div>
            <div class="p-6 pt-0">
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex w-full items-center justify-center rounded-md border border-accent px-4 py-2 text-accent hover:bg-accent/10"
                >
                    "View Project"
                    <span class="ml-2" aria-hidden="true">"›"</span>
                </a>
            </div>
        </div>
    }
}
