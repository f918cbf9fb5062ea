//! Input controller - turns UI events into search runs.

use std::sync::Arc;

use parking_lot::Mutex;
use reelgrid_search::{SearchPipeline, SearchQuery};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::container::OutputContainer;
use crate::renderer::Renderer;

/// Key that submits the search from the text input.
pub const SUBMIT_KEY: &str = "Enter";

/// Shared value of the search text input.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    value: Arc<Mutex<String>>,
}

impl SearchInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text in the input.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock() = value.into();
    }

    /// Current text in the input.
    pub fn value(&self) -> String {
        self.value.lock().clone()
    }
}

/// The addressable regions of the page the widget is mounted in.
#[derive(Debug, Clone, Default)]
pub struct SearchSurface {
    /// Text input the query is typed into
    pub input: SearchInput,
    /// Region results are rendered into
    pub output: OutputContainer,
}

impl SearchSurface {
    /// Creates a surface with an empty input and container.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Events the widget listens for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search trigger was clicked
    TriggerClicked,
    /// A key went down while the text input had focus
    KeyDown {
        /// Key name, e.g. `"Enter"`
        key: String,
    },
}

impl UiEvent {
    /// Shorthand for a key-down event.
    pub fn key(key: &str) -> Self {
        UiEvent::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Wires the trigger and the text input to the search pipeline.
#[derive(Debug, Clone)]
pub struct InputController {
    input: SearchInput,
    renderer: Renderer,
    pipeline: Arc<SearchPipeline>,
}

impl InputController {
    /// Attaches the controller to a surface once the page is ready.
    pub fn attach(surface: &SearchSurface, pipeline: Arc<SearchPipeline>) -> Self {
        info!("Event handlers attached");
        Self {
            input: surface.input.clone(),
            renderer: Renderer::new(surface.output.clone()),
            pipeline,
        }
    }

    /// Dispatches one UI event.
    ///
    /// Returns the spawned search task when the event started a search. Must
    /// be called from within a Tokio runtime.
    pub fn handle(&self, event: UiEvent) -> Option<JoinHandle<()>> {
        match event {
            UiEvent::TriggerClicked => {
                info!("Search icon clicked");
                self.search_handler()
            }
            UiEvent::KeyDown { key } if key == SUBMIT_KEY => {
                info!("Enter key pressed");
                self.search_handler()
            }
            UiEvent::KeyDown { .. } => None,
        }
    }

    fn search_handler(&self) -> Option<JoinHandle<()>> {
        let raw = self.input.value();
        info!(text = %raw, "Text entered");

        let Ok(query) = SearchQuery::parse(&raw) else {
            debug!("Ignoring empty search");
            return None;
        };

        let token = self.renderer.begin_search();
        let pipeline = Arc::clone(&self.pipeline);
        let renderer = self.renderer.clone();

        Some(tokio::spawn(async move {
            let outcome = pipeline.run(&query).await;
            if let Err(e) = &outcome {
                error!(query = %query, generation = %token, error = %e, "Search failed");
            }
            renderer.commit(token, &outcome);
        }))
    }
}
