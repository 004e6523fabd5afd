use yew::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::reveal::Reveal;
use crate::content::PROJECTS;
use crate::viewport::SectionId;

#[function_component]
pub fn Projects() -> Html {
    html! {
        <PageSection section={SectionId::Projects}>
            <div class="container">
                <Reveal id="projects-heading" class="section-heading">
                    <p class="eyebrow">{"INNOVATION SHOWCASE"}</p>
                    <h2>{"Cutting-Edge Projects"}</h2>
                    <p class="lede">
                        {"Explore the revolutionary engineering solutions developed by our members, \
                          pushing the boundaries of what's possible in technology and design."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    { for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                        <Reveal id={format!("project-{}", i)} delay_ms={project.delay_ms} class="card media-card">
                            <div class="card-media">
                                <img src={project.image} alt={project.title} loading="lazy" />
                                <span class="badge">{ project.category }</span>
                                <span class="equalizer"><i></i><i></i><i></i></span>
                            </div>
                            <div class="card-body">
                                <h3>{ project.title }</h3>
                                <p>{ project.description }</p>
                                <a href={format!("#project-{}", i)} class="ghost-link">{"Explore Project →"}</a>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <Reveal id="projects-more" delay_ms={600} class="center">
                    <a href="#all-projects" class="outline-button">{"View All Projects →"}</a>
                </Reveal>
            </div>
        </PageSection>
    }
}
