use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::projects::Projects;
use super::resume::Resume;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <About />
        <Projects />
        <Resume />
    }
}
