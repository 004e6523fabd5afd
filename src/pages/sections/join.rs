use yew::prelude::*;

use crate::components::reveal::Reveal;

/// Membership call to action. Linked from the header but not tracked.
#[function_component]
pub fn JoinUs() -> Html {
    html! {
        <section id="join-us" class="page-section join">
            <div class="container">
                <Reveal id="join-panel" class="join-panel">
                    <h2>
                        <span class="gradient-text animated">{"Engineer Your Future"}</span>
                    </h2>
                    <p class="lede">
                        {"Join the Society of Engineering Students at JKUAT and be part of a community \
                          that's creating the technologies of tomorrow, today."}
                    </p>
                    <div class="cta-row center">
                        <a href="#membership-form" class="primary-button">{"Apply for Membership →"}</a>
                        <a href="#learn-more" class="outline-button">{"Learn About Benefits"}</a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
