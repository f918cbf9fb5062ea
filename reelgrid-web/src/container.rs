//! Output container holding the rendered result nodes.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::dom::Element;
use crate::renderer::{CARD_CLASS, CARD_TITLE_CLASS, EMPTY_STATE_CLASS, ERROR_CLASS};

/// Shared handle to the region search results are rendered into.
///
/// Clones refer to the same nodes.
#[derive(Debug, Clone, Default)]
pub struct OutputContainer {
    nodes: Arc<Mutex<Vec<Element>>>,
}

impl OutputContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level nodes currently rendered.
    pub fn len(&self) -> usize {
        self.nodes.lock().len()
    }

    /// Whether nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.nodes.lock().is_empty()
    }

    /// Copy of the rendered nodes.
    pub fn snapshot(&self) -> Vec<Element> {
        self.nodes.lock().clone()
    }

    /// Number of top-level nodes carrying `class`.
    pub fn count_with_class(&self, class: &str) -> usize {
        self.nodes.lock().iter().filter(|n| n.has_class(class)).count()
    }

    /// Number of rendered movie cards.
    pub fn card_count(&self) -> usize {
        self.count_with_class(CARD_CLASS)
    }

    /// Number of "no results" notices.
    pub fn empty_state_count(&self) -> usize {
        self.count_with_class(EMPTY_STATE_CLASS)
    }

    /// Number of search error notices.
    pub fn error_count(&self) -> usize {
        self.count_with_class(ERROR_CLASS)
    }

    /// Titles of the rendered cards, in display order.
    pub fn card_titles(&self) -> Vec<String> {
        self.nodes
            .lock()
            .iter()
            .filter(|n| n.has_class(CARD_CLASS))
            .filter_map(|n| n.find_by_class(CARD_TITLE_CLASS))
            .filter_map(|t| t.text().map(str::to_string))
            .collect()
    }

    /// Serializes the container's children to HTML.
    pub fn inner_html(&self) -> String {
        self.nodes.lock().iter().map(Element::to_html).collect()
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Vec<Element>> {
        self.nodes.lock()
    }
}
