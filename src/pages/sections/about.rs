use yew::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::reveal::Reveal;
use crate::content::{ABOUT_TAGS, FOCUS_AREAS};
use crate::viewport::SectionId;

#[function_component]
pub fn About() -> Html {
    html! {
        <PageSection section={SectionId::About}>
            <div class="container two-column">
                <div>
                    <Reveal id="about-heading" delay_ms={150}>
                        <p class="eyebrow">{"WHO WE ARE"}</p>
                        <h2>{"Engineering the "}<span class="gradient-text">{"future"}</span></h2>
                    </Reveal>
                    <Reveal id="about-copy" delay_ms={300} class="stack">
                        <p>
                            {"Founded in 1995, the Society of Engineering Students at Jomo Kenyatta University of \
                              Agriculture and Technology is pioneering the next generation of engineering excellence. \
                              We represent students across all engineering disciplines, from Mechanical and Electrical \
                              to Civil and Computer Engineering."}
                        </p>
                        <p>
                            {"Our mission extends beyond traditional education. We're creating a hub where innovation \
                              meets practical application. Through cutting-edge projects, industry partnerships, and a \
                              forward-thinking approach, we're preparing engineers who don't just adapt to the future; \
                              they create it."}
                        </p>
                        <ul class="focus-grid">
                            { for FOCUS_AREAS.iter().map(|area| html! {
                                <li><span class="dot"></span>{ *area }</li>
                            }) }
                        </ul>
                        <a href={SectionId::Objectives.href()} class="ghost-link">{"Our objectives →"}</a>
                    </Reveal>
                </div>
                <Reveal id="about-visual" delay_ms={450} class="about-visual">
                    <div class="frame tall">
                        <img src="/assets/about.jpg" alt="Engineering students at work" loading="lazy" />
                        <div class="frame-overlay">
                            <h3>{"Pushing Boundaries"}</h3>
                            <div class="tag-row">
                                { for ABOUT_TAGS.iter().map(|tag| html! { <span class="tag">{ *tag }</span> }) }
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </PageSection>
    }
}
