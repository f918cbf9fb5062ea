//! Renderer - writes search results into the output container.

use reelgrid_search::{MovieSearchError, SearchOutcome, ValidatedResult};
use tracing::{debug, info};

use crate::container::OutputContainer;
use crate::dom::Element;
use crate::generation::{GenerationToken, SearchGeneration};

/// Class of a movie card `<article>`.
pub const CARD_CLASS: &str = "card";
/// Class of the card title paragraph.
pub const CARD_TITLE_CLASS: &str = "cardTitle";
/// Class of the div wrapping the poster.
pub const CARD_POSTER_DIV_CLASS: &str = "cardPosterDiv";
/// Class of the poster `<img>`.
pub const POSTER_CLASS: &str = "moviePoster";
/// Class of the "no results" notice.
pub const EMPTY_STATE_CLASS: &str = "noresult";
/// Class of the search error notice.
pub const ERROR_CLASS: &str = "searcherror";

/// Text of the "no results" notice.
pub const EMPTY_STATE_MESSAGE: &str = "No movie found!!! Please search for another title.";
/// Text of the search error notice.
pub const ERROR_MESSAGE: &str = "Search is unavailable right now. Please try again later.";
/// Alt text of every poster image.
pub const POSTER_ALT: &str = "Movie poster";

/// The only writer of the output container.
#[derive(Debug, Clone)]
pub struct Renderer {
    container: OutputContainer,
    generation: SearchGeneration,
}

impl Renderer {
    /// Creates a renderer writing into `container`.
    pub fn new(container: OutputContainer) -> Self {
        Self {
            container,
            generation: SearchGeneration::new(),
        }
    }

    /// The container this renderer writes into.
    pub fn container(&self) -> &OutputContainer {
        &self.container
    }

    /// Removes every rendered node. Clearing an empty container is a no-op.
    ///
    /// Returns how many nodes were removed.
    pub fn clear(&self) -> usize {
        clear_nodes(&mut self.container.lock())
    }

    /// Appends the "no results" notice.
    pub fn render_empty_state(&self) {
        self.container.lock().push(empty_state_node());
    }

    /// Appends one card for a validated result.
    pub fn render_card(&self, result: &ValidatedResult) {
        self.container.lock().push(movie_card_node(result));
    }

    /// Appends the notice shown when the catalog could not be searched.
    pub fn render_error(&self) {
        self.container.lock().push(error_node());
    }

    /// Starts a new search: advances the generation and clears prior output.
    ///
    /// Both happen under the container lock so no completion can slip in
    /// between them.
    pub fn begin_search(&self) -> GenerationToken {
        let mut nodes = self.container.lock();
        let token = self.generation.advance();
        clear_nodes(&mut nodes);
        token
    }

    /// Renders a finished search if `token` is still the current generation.
    ///
    /// Returns `false` when the completion was stale and dropped.
    pub fn commit(
        &self,
        token: GenerationToken,
        outcome: &Result<SearchOutcome, MovieSearchError>,
    ) -> bool {
        let mut nodes = self.container.lock();
        if !self.generation.is_current(token) {
            debug!(
                generation = %token,
                current = %self.generation.current(),
                "Discarding stale search completion"
            );
            return false;
        }

        match outcome {
            Ok(SearchOutcome::Empty) => {
                debug!(generation = %token, "Rendering empty view");
                nodes.push(empty_state_node());
            }
            Ok(SearchOutcome::Found(results)) => {
                for result in results {
                    debug!(generation = %token, title = %result.title, "Rendering movie card");
                    nodes.push(movie_card_node(result));
                }
                info!(generation = %token, cards = results.len(), "Rendered movie cards");
            }
            Err(_) => {
                debug!(generation = %token, "Rendering error notice");
                nodes.push(error_node());
            }
        }
        true
    }
}

fn clear_nodes(nodes: &mut Vec<Element>) -> usize {
    let removed = nodes.len();
    if removed > 0 {
        debug!(removed, "Clearing previous results");
    }
    nodes.clear();
    removed
}

/// `<p class="noresult">No movie found!!! ...</p>`
pub fn empty_state_node() -> Element {
    Element::create("p", &[EMPTY_STATE_CLASS], EMPTY_STATE_MESSAGE)
}

/// `<p class="searcherror">...</p>`
pub fn error_node() -> Element {
    Element::create("p", &[ERROR_CLASS], ERROR_MESSAGE)
}

/// Builds the card markup:
///
/// ```html
/// <article class="card">
///     <p class="cardTitle">Title</p>
///     <div class="cardPosterDiv">
///         <img class="moviePoster" src="..." alt="Movie poster">
///     </div>
/// </article>
/// ```
pub fn movie_card_node(result: &ValidatedResult) -> Element {
    let poster = Element::create("img", &[POSTER_CLASS], "")
        .with_attr("src", &result.poster_url)
        .with_attr("alt", POSTER_ALT);

    Element::create("article", &[CARD_CLASS], "")
        .with_child(Element::create("p", &[CARD_TITLE_CLASS], &result.title))
        .with_child(Element::create("div", &[CARD_POSTER_DIV_CLASS], "").with_child(poster))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, poster: &str) -> ValidatedResult {
        ValidatedResult {
            title: title.to_string(),
            poster_url: poster.to_string(),
        }
    }

    fn renderer() -> Renderer {
        Renderer::new(OutputContainer::new())
    }

    #[test]
    fn test_clear_on_empty_container_is_noop() {
        let renderer = renderer();

        assert_eq!(renderer.clear(), 0);
        assert_eq!(renderer.clear(), 0);
        assert!(renderer.container().is_empty());
    }

    #[test]
    fn test_clear_removes_all_nodes() {
        let renderer = renderer();
        renderer.render_card(&result("Batman", "http://img/1.jpg"));
        renderer.render_empty_state();

        assert_eq!(renderer.clear(), 2);
        assert!(renderer.container().is_empty());
    }

    #[test]
    fn test_card_markup() {
        let card = movie_card_node(&result("Batman Begins", "http://img/1.jpg"));

        assert_eq!(
            card.to_html(),
            concat!(
                r#"<article class="card"><p class="cardTitle">Batman Begins</p>"#,
                r#"<div class="cardPosterDiv"><img class="moviePoster" src="http://img/1.jpg" alt="Movie poster"></div>"#,
                "</article>"
            )
        );
    }

    #[test]
    fn test_empty_state_markup() {
        let renderer = renderer();
        renderer.render_empty_state();

        assert_eq!(
            renderer.container().inner_html(),
            r#"<p class="noresult">No movie found!!! Please search for another title.</p>"#
        );
    }

    #[test]
    fn test_commit_renders_cards_in_order() {
        let renderer = renderer();
        let token = renderer.begin_search();
        let outcome = Ok(SearchOutcome::Found(vec![
            result("First", "http://img/1.jpg"),
            result("Second", "http://img/2.jpg"),
        ]));

        assert!(renderer.commit(token, &outcome));
        assert_eq!(renderer.container().card_titles(), vec!["First", "Second"]);
        assert_eq!(renderer.container().empty_state_count(), 0);
    }

    #[test]
    fn test_commit_empty_renders_single_notice() {
        let renderer = renderer();
        let token = renderer.begin_search();

        assert!(renderer.commit(token, &Ok(SearchOutcome::Empty)));
        assert_eq!(renderer.container().len(), 1);
        assert_eq!(renderer.container().empty_state_count(), 1);
        assert_eq!(renderer.container().card_count(), 0);
    }

    #[test]
    fn test_commit_error_renders_distinct_notice() {
        let renderer = renderer();
        let token = renderer.begin_search();
        let outcome = Err(MovieSearchError::UnexpectedStatus { status: 503 });

        assert!(renderer.commit(token, &outcome));
        assert_eq!(renderer.container().error_count(), 1);
        assert_eq!(renderer.container().empty_state_count(), 0);
        assert_eq!(renderer.container().card_count(), 0);
    }

    #[test]
    fn test_stale_commit_is_discarded() {
        let renderer = renderer();
        let stale = renderer.begin_search();
        let fresh = renderer.begin_search();

        assert!(renderer.commit(fresh, &Ok(SearchOutcome::Empty)));
        let stale_outcome = Ok(SearchOutcome::Found(vec![result("Old", "http://img/old.jpg")]));
        assert!(!renderer.commit(stale, &stale_outcome));

        assert_eq!(renderer.container().card_count(), 0);
        assert_eq!(renderer.container().empty_state_count(), 1);
    }

    #[test]
    fn test_begin_search_clears_previous_results() {
        let renderer = renderer();
        renderer.render_card(&result("Batman", "http://img/1.jpg"));

        renderer.begin_search();
        assert!(renderer.container().is_empty());
    }
}
