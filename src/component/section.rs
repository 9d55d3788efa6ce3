use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_VISIBILITY_THRESHOLD};
use crate::state::scroll_state::ScrollState;

/// A top-level content block. Registers itself for nav highlighting and
/// reveals with a one-shot animation the first time it scrolls into view.
#[component]
pub fn PageSection(id: &'static str, children: Children) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    ScrollState::get().register_section(id, node);

    // latch: sections never un-reveal when scrolled back out
    let revealed = RwSignal::new(false);
    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            let intersecting = entries.first().is_some_and(|e| e.is_intersecting());
            if intersecting && !revealed.get_untracked() {
                revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![REVEAL_VISIBILITY_THRESHOLD])
            .root_margin(REVEAL_ROOT_MARGIN),
    );

    view! {
        <section node_ref=node id=id class="page-section" class:revealed=revealed>
            {children()}
        </section>
    }
}
