use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::component::nav::NavBar;
use crate::component::project_card::ProjectCard;
use crate::component::section::PageSection;
use crate::component::skills::SkillChip;
use crate::component::social::SocialLinks;
use crate::consts::PAGE_FADE_IN_DELAY_MS;
use crate::utils::diagnostics::log_startup_diagnostics;

const SKILLS: &[&str] = &[
    "Rust",
    "WebAssembly",
    "TypeScript",
    "PostgreSQL",
    "AWS",
    "Terraform",
    "CI/CD",
    "Linux",
];

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let loaded = RwSignal::new(false);
    let UseTimeoutFnReturn { start: fade_in, .. } =
        use_timeout_fn(move |_: ()| loaded.set(true), PAGE_FADE_IN_DELAY_MS);

    Effect::new(move |_| {
        fade_in(());
        log_startup_diagnostics();
    });

    view! {
        <div class="page-shell" class:loaded=loaded>
            <NavBar />
            <main>
                <PageSection id="home">
                    <h1>"Sam Rivera"</h1>
                    <p>"Full-stack engineer building fast, reliable web services."</p>
                    <a href="#projects">"See my work"</a>
                </PageSection>

                <PageSection id="about">
                    <h2>"About"</h2>
                    <p>
                        "I design and ship backend systems and the interfaces in front of
                        them. Lately that means Rust on both sides of the wire, with a
                        soft spot for infrastructure that stays out of the way."
                    </p>
                </PageSection>

                <PageSection id="projects">
                    <h2>"Projects"</h2>
                    <div class="project-grid">
                        <ProjectCard
                            title="Flightdeck"
                            description="Deployment dashboard aggregating build, release and \
                             incident state across services."
                            tags=vec!["Rust", "Axum", "PostgreSQL"]
                        />
                        <ProjectCard
                            title="Driftless"
                            description="Configuration drift detector for cloud infrastructure, \
                             with scheduled reconciliation reports."
                            tags=vec!["Rust", "Terraform", "AWS"]
                        />
                        <ProjectCard
                            title="Shutterbug"
                            description="Static photo gallery generator with on-device image \
                             processing compiled to WebAssembly."
                            tags=vec!["WASM", "Leptos"]
                        />
                    </div>
                </PageSection>

                <PageSection id="skills">
                    <h2>"Skills"</h2>
                    <ul class="skills">
                        {SKILLS
                            .iter()
                            .map(|name| view! { <SkillChip name=*name /> })
                            .collect::<Vec<_>>()}
                    </ul>
                </PageSection>

                <PageSection id="contact">
                    <h2>"Contact"</h2>
                    <p>"Interested in working together? Reach out on any of these."</p>
                    <SocialLinks />
                </PageSection>
            </main>
            <footer>
                <p>"Served as a static site from an S3 bucket."</p>
            </footer>
        </div>
    }
}
