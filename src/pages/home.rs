use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::splash::Preloader;
use crate::config::{PAGE_TITLE, PRELOADER_MS};
use crate::dom::{self, DomError};
use crate::pages::landing::Landing;
use crate::viewport::SectionId;

/// Sections mount after the browser's own fragment lookup, so a shared
/// `#section` link is followed here.
fn follow_section_link() -> Result<(), DomError> {
    let hash = dom::location_hash()?;
    if hash.is_empty() {
        return Ok(());
    }
    match hash.parse::<SectionId>() {
        Ok(section) => dom::scroll_to_anchor(section.anchor()),
        Err(err) => {
            log::debug!("not following link: {}", err);
            Ok(())
        }
    }
}

#[function_component]
pub fn Home() -> Html {
    let loading = use_state(|| true);

    // Title on mount, preloader for a fixed startup window.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(err) = dom::set_document_title(PAGE_TITLE) {
                    log::warn!("could not set page title: {}", err);
                }
                if let Err(err) = follow_section_link() {
                    log::warn!("could not follow section link: {}", err);
                }
                let timeout = Timeout::new(PRELOADER_MS, move || loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <>
            if *loading {
                <Preloader />
            }
            <Landing />
        </>
    }
}
