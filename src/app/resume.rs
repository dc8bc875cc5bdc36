use leptos::{either::*, prelude::*};

use super::reveal::RevealSection;
use crate::content::{
    languages_line, skills_line, PageSection, ResumeTab, EDUCATION, EXPERIENCES, PROFILE,
};

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <RevealSection section=PageSection::Resume classes="container py-12 md:py-24 lg:py-32">
            <div class="mx-auto max-w-[58rem] text-center">
                <h2 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl">
                    "My Resume"
                </h2>
                <p class="mt-4 text-muted-foreground">
                    "My professional experience, education, and skills."
                </p>
                <div class="mt-6">
                    <a
                        href=PROFILE.resume_document
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 rounded-md bg-accent px-4 py-2 text-white hover:bg-accent/90"
                    >
                        <span aria-hidden="true">"⬇"</span>
                        "Download CV"
                    </a>
                </div>
            </div>
            <div class="mt-16">
                <ResumeTabs />
            </div>
        </RevealSection>
    }
}

#[component]
fn ResumeTabs() -> impl IntoView {
    let (active, set_active) = signal(ResumeTab::default());

    view! {
        <div class="w-full">
            <div
                role="tablist"
                class="grid w-full grid-cols-3 rounded-md bg-background border border-primary/30 p-1"
            >
                {ResumeTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let is_active = move || active.get() == tab;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                id=format!("tab-{tab}")
                                aria-controls=format!("panel-{tab}")
                                aria-selected=move || is_active().to_string()
                                data-state=move || if is_active() { "active" } else { "inactive" }
                                class="rounded-sm px-3 py-1.5 text-sm font-medium data-[state=active]:bg-primary data-[state=active]:text-primary-foreground"
                                on:click=move |_| set_active.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                role="tabpanel"
                id=move || format!("panel-{}", active.get())
                aria-labelledby=move || format!("tab-{}", active.get())
            >
                {move || match active.get() {
                    ResumeTab::Experience => EitherOf3::A(view! { <ExperienceList /> }),
                    ResumeTab::Education => EitherOf3::B(view! { <EducationList /> }),
                    ResumeTab::Skills => EitherOf3::C(view! { <SkillsPanel /> }),
                }}
            </div>
        </div>
    }
}

#[component]
fn Entry(
    title: &'static str,
    subtitle: &'static str,
    period: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-primary/20 p-6 bg-background">
            <div class="flex flex-col justify-between gap-4 md:flex-row md:items-center">
                <div>
                    <h3 class="text-xl font-bold text-secondary">{title}</h3>
                    <p class="text-muted-foreground">{subtitle}</p>
                </div>
                <div class="rounded-full bg-primary/10 px-4 py-1 text-sm text-primary">
                    {period}
                </div>
            </div>
            <p class="mt-4">{description}</p>
        </div>
    }
}

#[component]
fn ExperienceList() -> impl IntoView {
    view! {
        <div class="mt-6 space-y-8">
            {EXPERIENCES
                .iter()
                .map(|e| {
                    view! {
                        <Entry
                            title=e.position
                            subtitle=e.company
                            period=e.period
                            description=e.description
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn EducationList() -> impl IntoView {
    view! {
        <div class="mt-6 space-y-8">
            {EDUCATION
                .iter()
                .map(|e| {
                    view! {
                        <Entry
                            title=e.degree
                            subtitle=e.institution
                            period=e.period
                            description=e.description
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillsPanel() -> impl IntoView {
    view! {
        <div class="mt-6">
            <div class="rounded-lg border border-primary/20 p-6 bg-background">
                <h3 class="mb-4 text-xl font-bold text-secondary">"Technical Skills"</h3>
                <p class="text-muted-foreground leading-relaxed">{skills_line()}</p>
            </div>
            <div class="mt-8 rounded-lg border border-primary/20 p-6 bg-background">
                <h3 class="mb-4 text-xl font-bold text-secondary">"Languages"</h3>
                <p class="text-muted-foreground leading-relaxed">{languages_line()}</p>
            </div>
        </div>
    }
}
