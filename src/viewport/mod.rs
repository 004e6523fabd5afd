//! Scroll-driven page state: which section is active, whether the header is
//! over content, where the pointer is, and which blocks have faded in.
//!
//! Nothing here touches the DOM. Components measure elements and forward raw
//! numbers; see `crate::components::viewport_provider`.

mod registry;
mod reveal;
mod section;
mod tracker;

pub use registry::{Extent, SectionRegistry};
pub use reveal::RevealLatch;
pub use section::{SectionId, UnknownSection};
pub use tracker::{Pointer, ViewportState, ViewportTracker};
