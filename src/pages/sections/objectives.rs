use yew::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::reveal::Reveal;
use crate::content::OBJECTIVES;
use crate::viewport::SectionId;

#[function_component]
pub fn Objectives() -> Html {
    html! {
        <PageSection section={SectionId::Objectives} class="tinted">
            <div class="container">
                <Reveal id="objectives-heading" class="section-heading">
                    <p class="eyebrow">{"OUR OBJECTIVES"}</p>
                    <h2>{"Driving Innovation Forward"}</h2>
                    <p class="lede">
                        {"The Society of Engineering Students at JKUAT is redefining engineering education through \
                          a forward-thinking approach that combines academic excellence with practical innovation."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    { for OBJECTIVES.iter().enumerate().map(|(i, objective)| html! {
                        <Reveal id={format!("objective-{}", i)} delay_ms={objective.delay_ms} class="card">
                            <div class="card-icon">{ objective.icon }</div>
                            <h3>{ objective.title }</h3>
                            <p>{ objective.description }</p>
                            <span class="grow-line"></span>
                        </Reveal>
                    }) }
                </div>
            </div>
        </PageSection>
    }
}
