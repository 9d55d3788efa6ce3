use leptos::prelude::*;

#[component]
pub fn SkillChip(#[prop(into)] name: String) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <li
            class:hovered=hovered
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {name}
        </li>
    }
}
