use leptos::prelude::*;
use leptos::{ev, logging};
use leptos_icons::Icon;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::state::scroll_state::ScrollState;

#[derive(Clone)]
struct NavItem {
    label: &'static str,
    section_id: &'static str,
    cur_selected: Signal<bool>,
}

fn nav_items() -> Vec<NavItem> {
    let active = ScrollState::get().active_section();

    [
        ("Home", "home"),
        ("About", "about"),
        ("Projects", "projects"),
        ("Skills", "skills"),
        ("Contact", "contact"),
    ]
    .into_iter()
    .map(|(label, section_id)| NavItem {
        label,
        section_id,
        cur_selected: Signal::derive(move || active.get() == Some(section_id)),
    })
    .collect()
}

/// Scrolls the section with `id` into view, suppressing the default anchor
/// jump. A missing target is a no-op.
fn scroll_to_section(evt: ev::MouseEvent, id: &str) {
    evt.prevent_default();
    let Some(target) = document().get_element_by_id(id) else {
        logging::warn!("nav target #{} not found", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn NavBar() -> impl IntoView {
    let items = nav_items();
    let scrolled = ScrollState::get().header_scrolled();
    let menu_open = RwSignal::new(false);

    view! {
        <header class="site-header" class:scrolled=scrolled>
            <span class="brand">"Sam Rivera"</span>
            <button
                class="menu-toggle"
                aria-label="toggle navigation menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                <Icon icon=icondata::ChMenuHamburger />
            </button>
            <nav>
                <ul class:mobile-active=menu_open>
                    {items
                        .into_iter()
                        .map(|item| {
                            let NavItem { label, section_id, cur_selected } = item;
                            view! {
                                <li>
                                    <a
                                        href=format!("#{section_id}")
                                        class:active=cur_selected
                                        on:click=move |evt| {
                                            menu_open.set(false);
                                            scroll_to_section(evt, section_id);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </header>
    }
}
