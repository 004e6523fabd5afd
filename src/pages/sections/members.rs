use yew::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::reveal::Reveal;
use crate::content::{MEMBERS, MEMBER_SOCIALS};
use crate::viewport::SectionId;

#[function_component]
pub fn Members() -> Html {
    html! {
        <PageSection section={SectionId::Members}>
            <div class="container">
                <Reveal id="members-heading" class="section-heading">
                    <p class="eyebrow">{"OUR TEAM"}</p>
                    <h2>{"Meet Our Members"}</h2>
                    <p class="lede">
                        {"The brilliant minds behind our innovative projects, pushing the boundaries of what's possible in engineering."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    { for MEMBERS.iter().enumerate().map(|(i, member)| html! {
                        <Reveal id={format!("member-{}", i)} delay_ms={member.delay_ms} class="member-card">
                            <img src={member.image} alt={member.name} loading="lazy" />
                            <div class="member-overlay">
                                <span class="readout">{format!("ID::{:03}", i + 1)}</span>
                                <h3>{ member.name }</h3>
                                <p class="member-role">{ member.role }</p>
                                <blockquote>{format!("\"{}\"", member.quote)}</blockquote>
                                <div class="tag-row">
                                    { for MEMBER_SOCIALS.iter().map(|social| html! {
                                        <a
                                            href={format!("#{}-{}", social, i)}
                                            aria-label={format!("{}'s {}", member.name, social)}
                                            class="tag"
                                        >
                                            { *social }
                                        </a>
                                    }) }
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <Reveal id="members-more" delay_ms={600} class="center">
                    <a href="#all-members" class="outline-button">{"Meet All Members →"}</a>
                </Reveal>
            </div>
        </PageSection>
    }
}
