use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::viewport_provider::ViewportContext;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Stable across renders; the latch is keyed by it.
    pub id: AttrValue,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let viewport = use_context::<ViewportContext>();

    {
        let node = node.clone();
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |id: &AttrValue| {
                let id = id.to_string();
                let on_unmount = viewport.as_ref().map(|ctx| ctx.on_block_unmount.clone());
                if let (Some(ctx), Some(element)) = (viewport, node.cast::<HtmlElement>()) {
                    ctx.on_block_mount.emit((id.clone(), dom::document_top(&element)));
                }
                move || {
                    if let Some(on_unmount) = on_unmount {
                        on_unmount.emit(id);
                    }
                }
            },
            props.id.clone(),
        );
    }

    // Without a provider there is nothing to wait for.
    let revealed = viewport.map_or(true, |ctx| ctx.is_revealed(&props.id));
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then_some("revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
