use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #111827;
                    color: #fff;
                    font-family: system-ui, sans-serif;
                }
                .not-found code { color: #f59e0b; font-size: 3rem; }
                .not-found a { color: #0ea5e9; }
                "#}
            </style>
            <code>{"404"}</code>
            <p>{"This page drifted out of orbit."}</p>
            <Link<Route> to={Route::Home}>{"Back to SES"}</Link<Route>>
        </div>
    }
}
