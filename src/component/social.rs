use leptos::prelude::*;
use leptos_icons::Icon;

#[component]
fn SocialAnchor(
    href: &'static str,
    icon: icondata_core::Icon,
    label: &'static str,
) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noreferrer" aria-label=label>
            <Icon icon=icon />
        </a>
    }
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="social-links">
            <SocialAnchor
                href="https://github.com/samrivera"
                icon=icondata::AiGithubOutlined
                label="GitHub"
            />
            <SocialAnchor
                href="https://www.linkedin.com/in/samrivera"
                icon=icondata::AiLinkedinOutlined
                label="LinkedIn"
            />
            <SocialAnchor
                href="mailto:sam@rivera.dev"
                icon=icondata::AiMailOutlined
                label="Email"
            />
        </div>
    }
}
