use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::{PageSection, PROFILE};

const ICON_LINK_CLASS: &str = "inline-flex h-10 w-10 items-center justify-center rounded-md border border-secondary text-secondary hover:bg-secondary/10";

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection section=PageSection::About classes="container py-12 md:py-24 lg:py-32">
            <div class="grid gap-10 lg:grid-cols-1 lg:gap-16">
                <div class="relative w-full h-[400px] overflow-hidden rounded-lg border-4 border-primary">
                    <img
                        src=PROFILE.hero_image
                        alt="Profile photo"
                        class="absolute inset-0 h-full w-full object-cover"
                    />
                </div>
                <div class="flex flex-col justify-center space-y-6">
                    <div>
                        <h1 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl">
                            "Hi, I'm " <span class="text-primary">{PROFILE.name}</span>
                        </h1>
                        <p class="mt-4 text-xl text-muted-foreground">{PROFILE.tagline}</p>
                    </div>
                    <p class="text-muted-foreground">{PROFILE.bio}</p>
                    <div class="flex gap-4">
                        <a
                            href=PROFILE.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            class=ICON_LINK_CLASS
                        >
                            <i class="devicon-linkedin-plain text-xl"></i>
                            <span class="sr-only">"LinkedIn"</span>
                        </a>
                        <a href=PROFILE.mailto() class=ICON_LINK_CLASS>
                            <span aria-hidden="true">"✉"</span>
                            <span class="sr-only">"Email"</span>
                        </a>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
