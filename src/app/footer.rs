use leptos::prelude::*;

use crate::content::PROFILE;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-primary/20 py-6 md:py-0 bg-background">
            <div class="container flex flex-col items-center justify-between gap-4 md:h-24 md:flex-row">
                <p class="text-center text-sm leading-loose text-muted-foreground md:text-left">
                    {format!("© {BUILD_YEAR} {}. All rights reserved.", PROFILE.name)}
                </p>
                <div class="flex gap-4">
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="rounded-md p-2 text-secondary hover:bg-secondary/10"
                    >
                        <i class="devicon-linkedin-plain text-xl"></i>
                        <span class="sr-only">"LinkedIn"</span>
                    </a>
                </div>
            </div>
        </footer>
    }
}
