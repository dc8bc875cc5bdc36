use leptos::prelude::*;

use crate::content::PageSection;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-10 border-b bg-background/95 backdrop-blur">
            <div class="container flex h-16 items-center justify-between">
                <div class="font-semibold">"My Portfolio"</div>
                <nav class="hidden space-x-6 md:flex">
                    {PageSection::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="text-sm font-medium transition-colors hover:text-secondary"
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                // no contact action yet; the links in the about section cover it
                <button
                    type="button"
                    class="rounded-md bg-secondary px-4 py-2 text-sm font-medium text-white hover:bg-secondary/90"
                >
                    "Contact Me"
                </button>
            </div>
        </header>
    }
}
