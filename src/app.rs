use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::consts::VISITOR_ID_STORE;
use crate::error_template::{AppError, ErrorTemplate};
use crate::page::root::PortfolioPage;
use crate::state::input_modality::InputModality;
use crate::state::scroll_state::ScrollState;
use crate::utils::analytics::interactions::track_page_interactions;
use crate::utils::analytics::AnalyticsCtx;
use crate::utils::resource_errors::attach_resource_error_logger;
use crate::utils::visitor_id::visitor_id_get_or_init;

#[component]
fn NotFound() -> impl IntoView {
    let mut outside_errors = Errors::default();
    outside_errors.insert_with_default_key(AppError::NotFound);
    view! { <ErrorTemplate outside_errors /> }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ScrollState::new());

    let modality = InputModality::default();
    provide_context(modality);
    modality.attach();

    let analytics = AnalyticsCtx {
        visitor_id: visitor_id_get_or_init(VISITOR_ID_STORE),
    };
    provide_context(analytics.clone());
    track_page_interactions(analytics);

    attach_resource_error_logger();

    view! {
        <Title text="Sam Rivera - Portfolio" />
        <Meta name="description" content="Portfolio of Sam Rivera, full-stack engineer" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }.into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}
