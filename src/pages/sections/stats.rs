use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::STATS;

/// Figures band between objectives and projects. Not a nav target.
#[function_component]
pub fn Stats() -> Html {
    html! {
        <section class="page-section stats">
            <div class="container">
                <Reveal id="stats-panel" class="stats-panel">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-number" style={format!("background-image: {};", stat.gradient)}>
                                { stat.number }
                            </div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </Reveal>
            </div>
        </section>
    }
}
