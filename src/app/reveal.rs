use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::{html, prelude::*};
use leptos_use::{js, use_intersection_observer, use_supported, UseIntersectionObserverReturn};

use crate::content::PageSection;
use crate::reveal::{
    reveal_style, IntersectCallback, Observation, ObserveError, RevealTracker, ViewportObserver,
};

/// Viewport observer backed by the browser's `IntersectionObserver`.
///
/// Must be used while a reactive owner is active, i.e. from component
/// setup. Observation starts once the section is mounted.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserObserver;

impl ViewportObserver for BrowserObserver {
    type Region = NodeRef<html::Section>;

    fn observe(
        &self,
        region: &Self::Region,
        mut on_intersect: IntersectCallback,
    ) -> Result<Observation, ObserveError> {
        // the server has no viewport; it renders the hidden state like the
        // client's first paint and never needs to degrade
        if cfg!(feature = "hydrate")
            && !use_supported(|| js!("IntersectionObserver" in &window())).get_untracked()
        {
            return Err(ObserveError::Unsupported);
        }

        let UseIntersectionObserverReturn { stop, .. } =
            use_intersection_observer(*region, move |entries, _| {
                on_intersect(entries.iter().any(|entry| entry.is_intersecting()));
            });
        Ok(Observation::new(stop))
    }

    // hydration keeps the server's style attribute, so a change made during
    // setup would never reach the page
    fn defer(&self, task: Box<dyn FnOnce()>) {
        request_animation_frame(task);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollReveal {
    pub node_ref: NodeRef<html::Section>,
    pub is_visible: Signal<bool>,
}

/// Creates a fire-once reveal for a `<section>`: attach `node_ref` to the
/// section and drive its style from `is_visible`.
pub fn use_scroll_reveal() -> ScrollReveal {
    let node_ref = NodeRef::<html::Section>::new();
    let (is_visible, set_is_visible) = signal(false);

    let mut tracker = RevealTracker::new(BrowserObserver)
        .on_change(move |state| set_is_visible.set(state.is_visible()));
    if let Err(err) = tracker.attach(&node_ref) {
        log::warn!("scroll reveal not attached: {err}");
    }

    let tracker = StoredValue::new_local(tracker);
    on_cleanup(move || {
        tracker.try_update_value(|t| t.detach());
    });

    ScrollReveal {
        node_ref,
        is_visible: is_visible.into(),
    }
}

/// A page section that fades and slides in the first time it scrolls into
/// view.
#[component]
pub fn RevealSection(
    section: PageSection,
    #[prop(into)] classes: String,
    children: Children,
) -> impl IntoView {
    let ScrollReveal {
        node_ref,
        is_visible,
    } = use_scroll_reveal();

    view! {
        <section
            id=section.id()
            class=format!("reveal {classes}")
            node_ref=node_ref
            style=move || reveal_style(is_visible.get())
        >
            {children()}
        </section>
    }
}
