use gloo::history::{BrowserHistory, History};
use leptos::prelude::*;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

// A basic function to display errors served by the error boundaries.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => RwSignal::new(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };

    let errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    let go_back = move || {
        let history = BrowserHistory::new();
        history.back();
    };

    view! {
        <div class="error-page">
            <h1>"Nothing here"</h1>
            <p>{errors.first().map(ToString::to_string).unwrap_or_default()}</p>
            <button on:click=move |_| go_back()>"Go back"</button>
        </div>
    }
}
