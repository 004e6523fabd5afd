use yew::prelude::*;

use crate::components::viewport_provider::ViewportContext;

/// Blinking "SES_" overlay that fades once the page reports loaded.
#[function_component]
pub fn Splash() -> Html {
    let loaded = use_context::<ViewportContext>().map_or(false, |ctx| ctx.loaded);

    html! {
        <div class={classes!("splash", loaded.then_some("done"))}>
            <style>
                {r#"
                .splash {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: #111827;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 1;
                    transition: opacity 1s ease;
                }
                .splash.done { opacity: 0; pointer-events: none; }
                .splash-mark {
                    font-size: 2.25rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #f59e0b, #0ea5e9);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .splash-caret {
                    color: #f59e0b;
                    -webkit-text-fill-color: #f59e0b;
                    animation: caret-ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                }
                @keyframes caret-ping {
                    75%, 100% { opacity: 0; }
                }
                "#}
            </style>
            <div class="splash-mark">
                {"SES"}<span class="splash-caret">{"_"}</span>
            </div>
        </div>
    }
}

/// Full-screen placeholder shown while the page wrapper's startup timer runs.
#[function_component]
pub fn Preloader() -> Html {
    html! {
        <div class="preloader">
            <style>
                {r#"
                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 110;
                    background: #030712;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .preloader-ring {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    border: 3px solid rgba(255, 255, 255, 0.1);
                    border-top-color: #f59e0b;
                    border-right-color: #0ea5e9;
                    animation: preloader-spin 1s linear infinite;
                }
                .preloader-label {
                    font-family: monospace;
                    font-size: 0.8rem;
                    letter-spacing: 0.3em;
                    color: #9ca3af;
                }
                @keyframes preloader-spin { to { transform: rotate(360deg); } }
                "#}
            </style>
            <div class="preloader-ring"></div>
            <div class="preloader-label">{"INITIALIZING SES.JKUAT"}</div>
        </div>
    }
}
