use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::viewport_provider::ViewportContext;
use crate::viewport::SectionId;

fn nav_icon(section: SectionId) -> &'static str {
    match section {
        SectionId::Home => "◎",
        SectionId::About => "◈",
        SectionId::Objectives => "◇",
        SectionId::Projects => "⌘",
        SectionId::Events => "▦",
        SectionId::Members => "☰",
        SectionId::Contact => "↗",
    }
}

#[function_component]
pub fn Header() -> Html {
    let viewport = use_context::<ViewportContext>();
    let menu_open = use_bool_toggle(false);

    let (scrolled, active) = viewport
        .as_ref()
        .map(|ctx| (ctx.scrolled, ctx.active_section))
        .unwrap_or((false, SectionId::default()));

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    // Anchor clicks still navigate; only the overlay closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            if *menu_open {
                menu_open.toggle();
            }
        })
    };

    let desktop_link = |section: SectionId| {
        let is_active = section == active;
        html! {
            <a
                href={section.href()}
                class={classes!("nav-link", is_active.then_some("active"))}
            >
                <span class="nav-icon">{ nav_icon(section) }</span>
                { section.label() }
                <span class="nav-underline"></span>
            </a>
        }
    };

    let mobile_link = |section: SectionId| {
        html! {
            <a
                href={section.href()}
                class={classes!("mobile-link", (section == active).then_some("active"))}
                onclick={close_menu.clone()}
            >
                <span class="nav-icon">{ nav_icon(section) }</span>
                { section.label() }
            </a>
        }
    };

    html! {
        <header class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    backdrop-filter: blur(12px);
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(17, 24, 39, 0.8);
                    padding: 0.75rem 0;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-brand { display: flex; align-items: center; gap: 0.75rem; }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #f59e0b, #fcd34d);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    text-decoration: none;
                }
                .nav-divider { width: 2px; height: 1.5rem; background: #0ea5e9; }
                .nav-tagline { font-size: 0.8rem; color: #9ca3af; line-height: 1.2; }
                .nav-tagline .accent { color: #38bdf8; }
                .nav-right { display: flex; align-items: center; gap: 1.5rem; }
                .nav-link {
                    position: relative;
                    overflow: hidden;
                    color: #9ca3af;
                    text-decoration: none;
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    transition: color 0.2s ease;
                }
                .nav-link:hover { color: #fff; }
                .nav-link.active { color: #f59e0b; }
                .nav-underline {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    height: 2px;
                    background: #f59e0b;
                    transform: translateX(-100%);
                    transition: transform 0.3s ease;
                }
                .nav-link:hover .nav-underline,
                .nav-link.active .nav-underline { transform: translateX(0); }
                .join-button {
                    padding: 0.5rem 1rem;
                    background: linear-gradient(90deg, #f59e0b, #d97706);
                    color: #fff;
                    font-weight: 500;
                    border-radius: 2px;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .join-button:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 20px rgba(245, 158, 11, 0.2);
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .burger-menu:hover { color: #f59e0b; }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    padding: 5rem 1.5rem;
                    background: rgba(17, 24, 39, 0.95);
                    backdrop-filter: blur(16px);
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.5s ease-in-out;
                }
                .mobile-menu.open { opacity: 1; pointer-events: auto; }
                .mobile-link {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #9ca3af;
                    text-decoration: none;
                    display: flex;
                    gap: 0.6rem;
                }
                .mobile-link.active { color: #f59e0b; }
                @media (max-width: 768px) {
                    .nav-right { display: none; }
                    .burger-menu { display: block; position: relative; z-index: 60; }
                    .nav-tagline .full { display: none; }
                }
                @media (min-width: 769px) {
                    .mobile-menu { display: none; }
                    .nav-tagline .short { display: none; }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-brand">
                    <a href={SectionId::Home.href()} class="nav-logo">{"SES"}</a>
                    <span class="nav-divider"></span>
                    <div class="nav-tagline">
                        <div class="full">
                            <div>{"SOCIETY OF ENGINEERING STUDENTS"}</div>
                            <div class="accent">{"INNOVATING THE FUTURE"}</div>
                        </div>
                        <div class="short">{"JKUAT"}</div>
                    </div>
                </div>

                <nav class="nav-right">
                    { for SectionId::NAV.into_iter().map(desktop_link) }
                    <a href="#join-us" class="join-button">{"⚡ Join Us"}</a>
                </nav>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <nav class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                { for SectionId::NAV.into_iter().map(mobile_link) }
                <a href="#join-us" class="join-button" onclick={close_menu.clone()}>{"⚡ Join Us"}</a>
            </nav>
        </header>
    }
}
