use yew::prelude::*;

use crate::components::cursor::CursorFollower;
use crate::components::footer::Footer;
use crate::components::nav::Header;
use crate::components::splash::Splash;
use crate::components::viewport_provider::ViewportProvider;
use crate::pages::sections::{
    about::About, contact::Contact, events::Events, hero::Hero, join::JoinUs, members::Members,
    objectives::Objectives, projects::Projects, stats::Stats,
};

const LANDING_STYLE: &str = r#"
html { scroll-behavior: smooth; }
body {
    margin: 0;
    background: #111827;
    color: #fff;
    font-family: "Inter", system-ui, -apple-system, sans-serif;
}
.landing-page { position: relative; min-height: 100vh; overflow: hidden; }
.grid-backdrop {
    position: fixed;
    inset: 0;
    pointer-events: none;
    background-image: radial-gradient(rgba(120, 120, 255, 0.1) 1px, transparent 1px);
    background-size: 40px 40px;
}
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; position: relative; }
.page-section { position: relative; padding: 6rem 0; }
.page-section.tinted { background: rgba(3, 7, 18, 0.5); }
.page-section h2 { font-size: 2.25rem; margin: 0 0 1.5rem; }
.eyebrow { color: #f59e0b; font-family: monospace; letter-spacing: 0.2em; font-size: 0.8rem; }
.lede { color: #9ca3af; font-size: 1.1rem; line-height: 1.7; max-width: 42rem; }
.section-heading { text-align: center; margin-bottom: 4rem; }
.section-heading .lede { margin: 0 auto; }
.center { text-align: center; margin-top: 4rem; }
.gradient-text {
    background: linear-gradient(90deg, #f59e0b, #0ea5e9);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.gradient-text.animated { background-size: 200% 200%; animation: gradient-x 3s infinite linear; }
.accent-amber { color: #f59e0b; }
.accent-sky { color: #0ea5e9; }
.accent-line { display: block; width: 5rem; height: 2px; background: linear-gradient(90deg, #f59e0b, #0ea5e9); }
.two-column { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
.stack > * + * { margin-top: 1.5rem; }
.stack p { color: #d1d5db; line-height: 1.7; }
.card-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.card {
    position: relative;
    padding: 2rem;
    border: 1px solid #1f2937;
    background: rgba(17, 24, 39, 0.3);
    backdrop-filter: blur(4px);
    overflow: hidden;
}
.card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; transition: color 0.2s ease; }
.card:hover h3 { color: #f59e0b; }
.card p { color: #9ca3af; line-height: 1.6; }
.card-icon { font-size: 2rem; margin-bottom: 1.5rem; }
.grow-line, .top-line {
    position: absolute;
    left: 0;
    height: 2px;
    width: 0;
    background: linear-gradient(90deg, #f59e0b, #0ea5e9);
    transition: width 0.5s ease;
}
.grow-line { bottom: 0; }
.top-line { top: 0; }
.card:hover .grow-line, .card:hover .top-line { width: 100%; }
.media-card { padding: 0; }
.card-media { position: relative; height: 12rem; overflow: hidden; }
.card-media img { width: 100%; height: 100%; object-fit: cover; filter: saturate(0.5); transition: transform 0.7s ease, filter 0.7s ease; }
.media-card:hover .card-media img { transform: scale(1.1); filter: saturate(1); }
.card-body { padding: 1.5rem; }
.badge {
    position: absolute;
    top: 1rem;
    left: 1rem;
    padding: 0.25rem 0.6rem;
    font-size: 0.75rem;
    background: rgba(17, 24, 39, 0.8);
    border: 1px solid rgba(245, 158, 11, 0.4);
    color: #f59e0b;
}
.equalizer { position: absolute; bottom: 1rem; right: 1rem; display: flex; gap: 2px; align-items: flex-end; }
.equalizer i { width: 3px; height: 5px; background: #0ea5e9; animation: equalizer 1s infinite ease-in-out; }
.equalizer i:nth-child(2) { animation-delay: 150ms; }
.equalizer i:nth-child(3) { animation-delay: 300ms; }
.tag-row { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; }
.tag {
    font-size: 0.75rem;
    padding: 0.2rem 0.6rem;
    border: 1px solid #374151;
    color: #9ca3af;
    text-decoration: none;
    text-transform: capitalize;
}
.primary-button {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    background: linear-gradient(90deg, #f59e0b, #d97706);
    color: #fff;
    font-weight: 600;
    border: none;
    text-decoration: none;
    cursor: pointer;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.primary-button:hover { transform: translateY(-2px); box-shadow: 0 10px 20px rgba(245, 158, 11, 0.2); }
.primary-button.wide { width: 100%; }
.outline-button {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border: 1px solid #f59e0b;
    color: #f59e0b;
    text-decoration: none;
}
.ghost-link { color: #f59e0b; text-decoration: none; display: inline-block; margin-top: 1rem; }
.cta-row { display: flex; gap: 1.5rem; align-items: center; margin-top: 2rem; }
.cta-row.center { justify-content: center; }

.hero { min-height: 100vh; display: flex; align-items: center; padding-top: 8rem; }
.hero-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.hero-title { font-size: 4rem; line-height: 1.1; margin: 1rem 0 1.5rem; }
.hero-title span { display: block; }
.hero-blob {
    position: absolute;
    width: 24rem;
    height: 24rem;
    border-radius: 9999px;
    filter: blur(64px);
    opacity: 0.2;
    animation: blob 8s infinite ease-in-out;
}
.hero-blob.amber { top: 10%; left: -5%; background: #f59e0b; }
.hero-blob.sky { bottom: 10%; right: -5%; background: #0ea5e9; animation-delay: 2000ms; }
.frame { position: relative; overflow: hidden; border: 1px solid #1f2937; }
.frame img { display: block; width: 100%; height: 100%; object-fit: cover; }
.frame.tall { aspect-ratio: 3 / 4; }
.frame-caption {
    position: absolute;
    bottom: 1rem;
    left: 1rem;
    font-family: monospace;
    font-size: 0.75rem;
    color: #0ea5e9;
}
.frame-overlay {
    position: absolute;
    inset: auto 0 0 0;
    padding: 1.5rem;
    background: linear-gradient(to top, rgba(17, 24, 39, 0.95), transparent);
}
.scan-line {
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, transparent, rgba(14, 165, 233, 0.15), transparent);
    animation: scan 3s infinite linear;
}
.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    align-items: center;
    color: #9ca3af;
    text-decoration: none;
    font-size: 0.8rem;
    animation: bounce 1s infinite;
}
.focus-grid { list-style: none; padding: 0; display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
.focus-grid li { display: flex; align-items: center; gap: 0.6rem; color: #d1d5db; }
.dot { width: 6px; height: 6px; border-radius: 9999px; background: #f59e0b; }

.stats { padding: 3rem 0; }
.stats-panel {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    border: 1px solid #1f2937;
    background: rgba(17, 24, 39, 0.4);
    backdrop-filter: blur(16px);
}
.stat { padding: 2.5rem 1rem; text-align: center; }
.stat + .stat { border-left: 1px solid #1f2937; }
.stat-number {
    font-size: 2.5rem;
    font-weight: 700;
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.stat-label { color: #9ca3af; margin-top: 0.5rem; }

.event-head { display: flex; justify-content: space-between; gap: 1rem; align-items: flex-start; }
.date-badge {
    font-family: monospace;
    font-size: 0.75rem;
    white-space: nowrap;
    padding: 0.25rem 0.5rem;
    border: 1px solid rgba(14, 165, 233, 0.4);
    color: #38bdf8;
}
.event-location { color: #d1d5db; font-size: 0.9rem; }

.join-panel {
    max-width: 56rem;
    margin: 0 auto;
    padding: 3rem;
    text-align: center;
    border: 1px solid #1f2937;
    background: rgba(17, 24, 39, 0.4);
    backdrop-filter: blur(16px);
}
.join-panel h2 { font-size: 3rem; }
.join-panel .lede { margin: 0 auto; }

.member-card { position: relative; overflow: hidden; aspect-ratio: 3 / 4; border: 1px solid #1f2937; }
.member-card img { width: 100%; height: 100%; object-fit: cover; }
.member-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    padding: 1.5rem;
    background: linear-gradient(to top, rgba(17, 24, 39, 0.95) 30%, transparent);
}
.member-role { color: #f59e0b; margin: 0; }
.readout { font-family: monospace; font-size: 0.7rem; color: #0ea5e9; }
.member-overlay blockquote,
.member-overlay .tag-row { opacity: 0; transform: translateY(1rem); transition: all 0.5s ease; }
.member-card:hover blockquote,
.member-card:hover .tag-row { opacity: 1; transform: translateY(0); }
.member-overlay blockquote { color: #9ca3af; font-style: italic; font-size: 0.9rem; margin: 1rem 0 0; }

.channel-list { display: grid; gap: 1.5rem; margin: 2rem 0; }
.channel h3 { margin: 0 0 0.4rem; font-size: 1rem; }
.channel p { margin: 0; color: #9ca3af; line-height: 1.6; }
.channel p.mono { font-family: monospace; color: rgba(245, 158, 11, 0.8); }
.contact-form {
    padding: 2rem;
    border: 1px solid #1f2937;
    background: rgba(17, 24, 39, 0.3);
    display: grid;
    gap: 1.25rem;
}
.field { display: grid; gap: 0.4rem; }
.field label { font-size: 0.85rem; color: #9ca3af; }
.field input, .field select, .field textarea {
    background: rgba(31, 41, 55, 0.5);
    border: 1px solid #374151;
    color: #fff;
    padding: 0.75rem 1rem;
    font: inherit;
}
.field input:focus, .field select:focus, .field textarea:focus { outline: none; border-color: #f59e0b; }

.reveal { opacity: 0; transform: translateY(20px); transition: opacity 0.7s ease-out, transform 0.7s ease-out; }
.reveal.revealed { opacity: 1; transform: translateY(0); }

@keyframes blob {
    0%, 100% { transform: translate(0, 0) scale(1); }
    25% { transform: translate(5%, 5%) scale(1.1); }
    50% { transform: translate(0, 10%) scale(1); }
    75% { transform: translate(-5%, 5%) scale(0.9); }
}
@keyframes scan {
    0% { transform: translateX(-100%); }
    100% { transform: translateX(100%); }
}
@keyframes equalizer {
    0%, 100% { height: 5px; }
    50% { height: 15px; }
}
@keyframes gradient-x {
    0%, 100% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
}
@keyframes bounce {
    0%, 100% { transform: translate(-50%, -25%); }
    50% { transform: translate(-50%, 0); }
}
@media (max-width: 900px) {
    .two-column, .hero-grid { grid-template-columns: 1fr; }
    .card-grid { grid-template-columns: 1fr; }
    .stats-panel { grid-template-columns: 1fr 1fr; }
    .hero-title { font-size: 3rem; }
}
"#;

/// The one-page site: every section inside a single viewport provider.
#[function_component]
pub fn Landing() -> Html {
    html! {
        <ViewportProvider>
            <div class="landing-page">
                <style>{ LANDING_STYLE }</style>
                <CursorFollower />
                <div class="grid-backdrop"></div>
                <Splash />
                <Header />
                <Hero />
                <About />
                <Objectives />
                <Stats />
                <Projects />
                <Events />
                <JoinUs />
                <Members />
                <Contact />
                <Footer />
            </div>
        </ViewportProvider>
    }
}
