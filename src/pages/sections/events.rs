use yew::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::reveal::Reveal;
use crate::content::EVENTS;
use crate::viewport::SectionId;

#[function_component]
pub fn Events() -> Html {
    html! {
        <PageSection section={SectionId::Events} class="tinted">
            <div class="container">
                <Reveal id="events-heading" class="section-heading">
                    <p class="eyebrow">{"UPCOMING EVENTS"}</p>
                    <h2>{"Next-Gen Events"}</h2>
                    <p class="lede">
                        {"Join us for these cutting-edge events designed to expand your engineering horizons \
                          and connect you with the future of technology."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    { for EVENTS.iter().enumerate().map(|(i, event)| html! {
                        <Reveal id={format!("event-{}", i)} delay_ms={event.delay_ms} class="card event-card">
                            <span class="top-line"></span>
                            <div class="event-head">
                                <h3>{ event.title }</h3>
                                <span class="date-badge">{ event.date }</span>
                            </div>
                            <p class="event-location">{"⌖ "}{ event.location }</p>
                            <p>{ event.description }</p>
                            <div class="tag-row">
                                { for event.tags.iter().map(|tag| html! { <span class="tag">{ *tag }</span> }) }
                            </div>
                            <a href="#register" class="ghost-link">{"Register Now →"}</a>
                        </Reveal>
                    }) }
                </div>
                <Reveal id="events-more" delay_ms={600} class="center">
                    <a href="#all-events" class="ghost-link">{"View all upcoming events →"}</a>
                </Reveal>
            </div>
        </PageSection>
    }
}
