//! Page shell - serializes the whole widget for display outside a browser.

use crate::container::OutputContainer;
use crate::controller::SearchSurface;
use crate::dom::Element;
use crate::renderer::{CARD_CLASS, CARD_TITLE_CLASS, POSTER_CLASS};

/// Id of the text input.
pub const SEARCH_BAR_ID: &str = "searchBar";
/// Id of the clickable search trigger.
pub const SEARCH_TRIGGER_ID: &str = "searchIconDiv";
/// Id of the output container.
pub const MOVIE_CARDS_ID: &str = "movieCards";

/// Renders a full HTML document containing the widget in its current state.
pub fn render_page(surface: &SearchSurface) -> String {
    let input = Element::create("input", &[], "")
        .with_attr("id", SEARCH_BAR_ID)
        .with_attr("type", "text")
        .with_attr("placeholder", "Search for a movie title...")
        .with_attr("value", &surface.input.value());

    let trigger = Element::create("div", &[], "🔍").with_attr("id", SEARCH_TRIGGER_ID);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Reelgrid - Movie Search</title>
</head>
<body>
    <header class="searchHeader">
        {input}
        {trigger}
    </header>
    <section id="{MOVIE_CARDS_ID}">{cards}</section>
</body>
</html>
"#,
        input = input.to_html(),
        trigger = trigger.to_html(),
        cards = surface.output.inner_html(),
    )
}

/// Renders the container as plain text for terminals.
///
/// Cards become `title` followed by an indented poster URL; notices are
/// printed as-is.
pub fn render_text(container: &OutputContainer) -> String {
    let mut out = String::new();

    for node in container.snapshot() {
        if node.has_class(CARD_CLASS) {
            let title = node
                .find_by_class(CARD_TITLE_CLASS)
                .and_then(Element::text)
                .unwrap_or_default();
            let poster = node
                .find_by_class(POSTER_CLASS)
                .and_then(|img| img.attr("src"))
                .unwrap_or_default();
            out.push_str(&format!("{title}\n    {poster}\n"));
        } else if let Some(text) = node.text() {
            out.push_str(text);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use reelgrid_search::ValidatedResult;

    use super::*;
    use crate::renderer::Renderer;

    #[test]
    fn test_page_contains_widget_regions() {
        let surface = SearchSurface::new();
        surface.input.set_value("batman & robin");

        let html = render_page(&surface);

        assert!(html.contains(r#"id="searchBar""#));
        assert!(html.contains(r#"value="batman &amp; robin""#));
        assert!(html.contains(r#"id="searchIconDiv""#));
        assert!(html.contains(r#"<section id="movieCards"></section>"#));
    }

    #[test]
    fn test_page_embeds_rendered_cards() {
        let surface = SearchSurface::new();
        let renderer = Renderer::new(surface.output.clone());
        renderer.render_card(&ValidatedResult {
            title: "Batman Begins".to_string(),
            poster_url: "http://img/1.jpg".to_string(),
        });

        let html = render_page(&surface);
        assert!(html.contains(r#"<p class="cardTitle">Batman Begins</p>"#));
    }

    #[test]
    fn test_text_rendering() {
        let container = OutputContainer::new();
        let renderer = Renderer::new(container.clone());
        renderer.render_card(&ValidatedResult {
            title: "Batman Begins".to_string(),
            poster_url: "http://img/1.jpg".to_string(),
        });
        renderer.render_empty_state();

        assert_eq!(
            render_text(&container),
            "Batman Begins\n    http://img/1.jpg\nNo movie found!!! Please search for another title.\n"
        );
    }
}
