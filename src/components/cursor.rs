use yew::prelude::*;

use crate::components::viewport_provider::ViewportContext;
use crate::viewport::Pointer;

/// Ring that trails the mouse. Easing is left to CSS.
#[function_component]
pub fn CursorFollower() -> Html {
    let pointer = use_context::<Pointer>().unwrap_or_default();
    let loaded = use_context::<ViewportContext>().map_or(false, |ctx| ctx.loaded);

    let style = format!(
        "left: {}px; top: {}px; opacity: {};",
        pointer.x,
        pointer.y,
        if loaded { 1 } else { 0 }
    );

    html! {
        <>
            <style>
                {r#"
                .cursor-follower {
                    position: fixed;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    border: 2px solid #f59e0b;
                    pointer-events: none;
                    z-index: 50;
                    transform: translate(-50%, -50%);
                    transition: transform 0.1s ease-out, opacity 0.3s ease;
                }
                @media (max-width: 768px) {
                    .cursor-follower { display: none; }
                }
                "#}
            </style>
            <div class="cursor-follower" style={style}></div>
        </>
    }
}
