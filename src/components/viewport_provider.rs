use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::config::{TrackerConfig, LOADED_DELAY_MS};
use crate::dom::{self, WindowListener};
use crate::viewport::{Extent, Pointer, RevealLatch, SectionId, ViewportTracker};

type Tracker = Rc<RefCell<ViewportTracker<SectionId>>>;
type Reveals = Rc<RefCell<RevealLatch<String>>>;
type RevealedSet = Rc<HashSet<String>>;

/// Scroll-derived page state shared with every section, nav item and reveal block.
///
/// Pointer coordinates travel in a separate `Pointer` context so that mouse
/// movement only re-renders the cursor ring.
#[derive(Clone, PartialEq)]
pub struct ViewportContext {
    pub scrolled: bool,
    pub active_section: SectionId,
    pub loaded: bool,
    pub revealed: RevealedSet,
    pub on_section_mount: Callback<(SectionId, Extent)>,
    pub on_section_unmount: Callback<SectionId>,
    pub on_block_mount: Callback<(String, f64)>,
    pub on_block_unmount: Callback<String>,
}

impl ViewportContext {
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active_section == section
    }

    pub fn is_revealed(&self, block: &str) -> bool {
        self.revealed.contains(block)
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    pub children: Children,
}

#[derive(Clone, Copy, PartialEq)]
struct ScrollView {
    scrolled: bool,
    active_section: SectionId,
}

fn scroll_view(tracker: &ViewportTracker<SectionId>) -> ScrollView {
    let state = tracker.state();
    ScrollView {
        scrolled: state.scrolled,
        active_section: state.active_section,
    }
}

fn attach<F>(event: &'static str, callback: F) -> Option<WindowListener>
where
    F: FnMut(Event) + 'static,
{
    match WindowListener::new(event, callback) {
        Ok(listener) => Some(listener),
        Err(err) => {
            log::warn!("`{}` tracking disabled: {}", event, err);
            None
        }
    }
}

/// Reads the window once and pushes the result through the tracker and the
/// reveal latch. Borrows are released before any state setter runs.
fn sync_scroll(
    tracker: &Tracker,
    reveals: &Reveals,
    view: &UseStateSetter<ScrollView>,
    revealed: &UseStateSetter<RevealedSet>,
) {
    let metrics = match dom::scroll_metrics() {
        Ok(metrics) => metrics,
        Err(err) => {
            log::warn!("could not read scroll position: {}", err);
            return;
        }
    };

    let next_view = {
        let mut tracker = tracker.borrow_mut();
        tracker
            .on_scroll(metrics.scroll_y, metrics.viewport_height)
            .then(|| scroll_view(&tracker))
    };
    let next_revealed = {
        let mut reveals = reveals.borrow_mut();
        let fresh = reveals.on_scroll(metrics.scroll_y, metrics.viewport_height);
        (!fresh.is_empty()).then(|| {
            log::debug!("revealed {} of {} block(s)", fresh.len(), reveals.len());
            revealed_set(&reveals)
        })
    };

    if let Some(next) = next_view {
        view.set(next);
    }
    if let Some(next) = next_revealed {
        revealed.set(next);
    }
}

/// Registration callbacks shared by every render of one provider.
#[derive(Clone, PartialEq)]
struct Handlers {
    on_section_mount: Callback<(SectionId, Extent)>,
    on_section_unmount: Callback<SectionId>,
    on_block_mount: Callback<(String, f64)>,
    on_block_unmount: Callback<String>,
}

impl Handlers {
    fn new(tracker: &Tracker, reveals: &Reveals, publish_revealed: Callback<RevealedSet>) -> Self {
        let on_section_mount = {
            let tracker = tracker.clone();
            Callback::from(move |(section, extent): (SectionId, Extent)| {
                let mut tracker = tracker.borrow_mut();
                let registry = tracker.registry_mut();
                if registry.register(section, extent.top, extent.height) {
                    log::debug!(
                        "registered section {} at {:?} ({} tracked)",
                        section,
                        extent,
                        registry.len()
                    );
                } else if let Some(first) = registry.get(&section) {
                    log::debug!("section {} already measured at {:?}", section, first);
                }
            })
        };

        let on_section_unmount = {
            let tracker = tracker.clone();
            Callback::from(move |section: SectionId| {
                let mut tracker = tracker.borrow_mut();
                tracker.registry_mut().unregister(&section);
                if tracker.registry().is_empty() {
                    log::debug!("no tracked sections left");
                }
            })
        };

        let on_block_mount = {
            let reveals = reveals.clone();
            Callback::from(move |(block, top): (String, f64)| {
                let next = {
                    let mut reveals = reveals.borrow_mut();
                    reveals
                        .register(block, top)
                        .then(|| revealed_set(&reveals))
                };
                if let Some(next) = next {
                    publish_revealed.emit(next);
                }
            })
        };

        let on_block_unmount = {
            let reveals = reveals.clone();
            Callback::from(move |block: String| {
                let mut reveals = reveals.borrow_mut();
                reveals.forget(&block);
                if reveals.is_empty() {
                    log::debug!("no reveal blocks mounted");
                }
            })
        };

        Self {
            on_section_mount,
            on_section_unmount,
            on_block_mount,
            on_block_unmount,
        }
    }

    fn context(&self, view: ScrollView, loaded: bool, revealed: RevealedSet) -> ViewportContext {
        ViewportContext {
            scrolled: view.scrolled,
            active_section: view.active_section,
            loaded,
            revealed,
            on_section_mount: self.on_section_mount.clone(),
            on_section_unmount: self.on_section_unmount.clone(),
            on_block_mount: self.on_block_mount.clone(),
            on_block_unmount: self.on_block_unmount.clone(),
        }
    }
}

fn revealed_set(reveals: &RevealLatch<String>) -> RevealedSet {
    Rc::new(reveals.revealed().cloned().collect())
}

#[function_component]
pub fn ViewportProvider(props: &ViewportProviderProps) -> Html {
    let tracker = use_mut_ref(|| ViewportTracker::new(SectionId::default(), TrackerConfig::default()));
    let reveals = use_mut_ref(RevealLatch::<String>::new);
    let view = use_state_eq(|| ScrollView {
        scrolled: false,
        active_section: SectionId::default(),
    });
    let pointer = use_state_eq(Pointer::default);
    let revealed = use_state_eq(|| Rc::new(HashSet::<String>::new()));
    let loaded = use_state_eq(|| false);

    // Window listeners and the loaded timer live exactly as long as the provider.
    {
        let tracker = tracker.clone();
        let reveals = reveals.clone();
        let view = view.setter();
        let pointer = pointer.setter();
        let revealed = revealed.setter();
        let loaded = loaded.setter();
        use_effect_with_deps(
            move |_| {
                let scroll = {
                    let tracker = tracker.clone();
                    let reveals = reveals.clone();
                    let view = view.clone();
                    let revealed = revealed.clone();
                    attach("scroll", move |_| sync_scroll(&tracker, &reveals, &view, &revealed))
                };
                let mousemove = {
                    let tracker = tracker.clone();
                    attach("mousemove", move |event: Event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            let next = {
                                let mut tracker = tracker.borrow_mut();
                                tracker.on_pointer_move(
                                    f64::from(event.client_x()),
                                    f64::from(event.client_y()),
                                );
                                tracker.state().pointer
                            };
                            pointer.set(next);
                        }
                    })
                };

                // Initial check, the page may be restored mid-scroll.
                sync_scroll(&tracker, &reveals, &view, &revealed);

                let timeout = Timeout::new(LOADED_DELAY_MS, move || loaded.set(true));

                move || {
                    drop(timeout);
                    drop(scroll);
                    drop(mousemove);
                }
            },
            (),
        );
    }

    // Built once so the published context only changes with the snapshot.
    let handlers = {
        let tracker = tracker.clone();
        let reveals = reveals.clone();
        let revealed = revealed.setter();
        use_memo(
            move |_| Handlers::new(&tracker, &reveals, Callback::from(move |set| revealed.set(set))),
            (),
        )
    };

    let context = handlers.context(*view, *loaded, (*revealed).clone());

    html! {
        <ContextProvider<ViewportContext> context={context}>
            <ContextProvider<Pointer> context={*pointer}>
                { for props.children.iter() }
            </ContextProvider<Pointer>>
        </ContextProvider<ViewportContext>>
    }
}

#[cfg(test)]
#[path = "tests/viewport_provider.rs"]
mod tests;
