//! Development-only check that the core section anchors rendered.

#[cfg(test)]
#[path = "smoke_test.rs"]
mod smoke_test;

use crate::content::anchors;

/// Anchors the page must always render.
pub const REQUIRED_ANCHORS: [&str; 3] = [anchors::HOME, anchors::PROGRAMS, anchors::CONTACT];

/// Required anchors for which `exists` returns false.
pub fn missing_anchors(exists: impl Fn(&str) -> bool) -> Vec<&'static str> {
    REQUIRED_ANCHORS.into_iter().filter(|id| !exists(id)).collect()
}

/// Warn in the browser console about missing anchors. Debug hydrate builds only.
pub fn run() {
    #[cfg(all(feature = "hydrate", debug_assertions))]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for id in missing_anchors(|id| doc.get_element_by_id(id).is_some()) {
            log::warn!("smoke test: #{id} section should exist");
        }
    }
}
