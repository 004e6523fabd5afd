use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::viewport_provider::ViewportContext;
use crate::dom;
use crate::viewport::SectionId;

#[derive(Properties, PartialEq)]
pub struct PageSectionProps {
    pub section: SectionId,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A `<section>` that measures itself once mounted and registers with the tracker.
#[function_component]
pub fn PageSection(props: &PageSectionProps) -> Html {
    let node = use_node_ref();
    let viewport = use_context::<ViewportContext>();

    {
        let node = node.clone();
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |section: &SectionId| {
                let section = *section;
                let on_unmount = viewport.as_ref().map(|ctx| ctx.on_section_unmount.clone());
                if let (Some(ctx), Some(element)) = (viewport, node.cast::<HtmlElement>()) {
                    ctx.on_section_mount.emit((section, dom::section_extent(&element)));
                }
                move || {
                    if let Some(on_unmount) = on_unmount {
                        on_unmount.emit(section);
                    }
                }
            },
            props.section,
        );
    }

    html! {
        <section
            id={props.section.anchor()}
            ref={node}
            class={classes!("page-section", props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}
