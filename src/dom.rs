//! Thin wrappers over `web_sys` for the few DOM reads the page needs.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, Window};

use crate::viewport::Extent;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("window.{0} is not a number")]
    NotANumber(&'static str),
    #[error("JS call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

fn number(name: &'static str, value: Option<f64>) -> Result<f64, DomError> {
    value.ok_or(DomError::NotANumber(name))
}

pub fn scroll_metrics() -> Result<ScrollMetrics, DomError> {
    let window = window()?;
    let scroll_y = window.scroll_y()?;
    let viewport_height = number("innerHeight", window.inner_height()?.as_f64())?;
    Ok(ScrollMetrics {
        scroll_y,
        viewport_height,
    })
}

/// Layout box of a section relative to its offset parent (the page root).
pub fn section_extent(element: &HtmlElement) -> Extent {
    Extent::new(
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    )
}

/// Top edge of `element` in document coordinates, from layout offsets so
/// CSS transforms on the element or its ancestors are not counted.
pub fn document_top(element: &HtmlElement) -> f64 {
    layout_top(
        element.clone(),
        |node| f64::from(node.offset_top()),
        |node| {
            node.offset_parent()
                .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
        },
    )
}

fn layout_top<N>(
    start: N,
    offset: impl Fn(&N) -> f64,
    parent: impl Fn(&N) -> Option<N>,
) -> f64 {
    std::iter::successors(Some(start), |node| parent(node))
        .map(|node| offset(&node))
        .sum()
}

/// The URL fragment including its `#`, or empty.
pub fn location_hash() -> Result<String, DomError> {
    Ok(window()?.location().hash()?)
}

/// Scrolls the element with `id` into view. Missing elements are ignored.
pub fn scroll_to_anchor(id: &str) -> Result<(), DomError> {
    if let Some(element) = document()?.get_element_by_id(id) {
        element.scroll_into_view();
    }
    Ok(())
}

pub fn set_document_title(title: &str) -> Result<(), DomError> {
    document()?.set_title(title);
    Ok(())
}

/// A `window` event listener that is removed again when dropped.
pub struct WindowListener {
    target: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, callback: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let target = window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        log::debug!("attached window `{}` listener", event);
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach window `{}` listener: {:?}", self.event, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_top_sums_the_offset_chain() {
        // (offset_top, offset_parent) for body > section > card
        let nodes = [(0.0, None), (1800.0, Some(0)), (240.0, Some(1))];
        let top = layout_top(2, |&i| nodes[i].0, |&i| nodes[i].1);
        assert_eq!(top, 2040.0);
    }

    #[test]
    fn layout_top_of_a_root_is_its_own_offset() {
        let top = layout_top(64.0, |&offset| offset, |_| None);
        assert_eq!(top, 64.0);
    }

    #[test]
    fn missing_viewport_height_is_an_error() {
        assert_eq!(number("innerHeight", Some(900.0)).ok(), Some(900.0));
        let err = number("innerHeight", None).unwrap_err();
        assert!(matches!(err, DomError::NotANumber("innerHeight")));
        assert_eq!(err.to_string(), "window.innerHeight is not a number");
    }
}
