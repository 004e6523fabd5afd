use yew::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::reveal::Reveal;
use crate::viewport::SectionId;

#[function_component]
pub fn Hero() -> Html {
    html! {
        <PageSection section={SectionId::Home} class="hero">
            <div class="hero-blob amber"></div>
            <div class="hero-blob sky"></div>
            <div class="container hero-grid">
                <div class="hero-copy">
                    <Reveal id="hero-eyebrow">
                        <span class="accent-line"></span>
                        <p class="eyebrow">{"JOMO KENYATTA UNIVERSITY OF AGRICULTURE AND TECHNOLOGY"}</p>
                    </Reveal>
                    <Reveal id="hero-title" delay_ms={150}>
                        <h1 class="hero-title">
                            <span>{"Society of"}</span>
                            <span class="gradient-text">{"Engineering Students"}</span>
                        </h1>
                    </Reveal>
                    <Reveal id="hero-lede" delay_ms={300}>
                        <p class="lede">
                            {"Bridging the gap between academic learning and industry practice with "}
                            <span class="accent-amber">{"innovative"}</span>
                            {" and "}
                            <span class="accent-sky">{"sustainable"}</span>
                            {" engineering solutions."}
                        </p>
                    </Reveal>
                    <Reveal id="hero-cta" delay_ms={450} class="cta-row">
                        <a href={SectionId::About.href()} class="primary-button">{"Discover More →"}</a>
                        <a href={SectionId::Projects.href()} class="ghost-link">{"▶ Our Projects"}</a>
                    </Reveal>
                </div>
                <Reveal id="hero-visual" delay_ms={600} class="hero-visual">
                    <div class="frame">
                        <img src="/assets/hero.jpg" alt="JKUAT Engineering students" loading="lazy" />
                        <div class="scan-line"></div>
                        <div class="frame-caption">{"ENGINEERING.JKUAT.2025"}</div>
                    </div>
                </Reveal>
            </div>
            <a href={SectionId::About.href()} class="scroll-indicator">
                <span>{"Scroll"}</span>
                <span class="chevron">{"⌄"}</span>
            </a>
        </PageSection>
    }
}
