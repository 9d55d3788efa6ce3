use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::consts::CARD_PRESS_RESET_MS;

/// Card for a single portfolio project. Clicking gives a brief press-down
/// before returning to the hover lift.
#[component]
pub fn ProjectCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] tags: Vec<&'static str>,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    let UseTimeoutFnReturn { start: release, .. } =
        use_timeout_fn(move |_: ()| pressed.set(false), CARD_PRESS_RESET_MS);

    view! {
        <div
            class="project-card"
            class:pressed=pressed
            on:click=move |_| {
                pressed.set(true);
                release(());
            }
        >
            <h3>{title}</h3>
            <p>{description}</p>
            <div class="tags">
                {tags.into_iter().map(|tag| view! { <span>{tag}</span> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
