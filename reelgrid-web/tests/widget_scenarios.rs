//! Search widget scenarios driven through the input controller.

use std::sync::Arc;

use reelgrid_search::providers::{StaticCatalog, StaticProber};
use reelgrid_search::{CandidateResult, ReelgridConfig, SearchPipeline};
use reelgrid_web::{InputController, SearchSurface, UiEvent, render_page};

fn mount(
    catalog: StaticCatalog,
    prober: StaticProber,
) -> (SearchSurface, InputController, Arc<StaticCatalog>) {
    let surface = SearchSurface::new();
    let catalog = Arc::new(catalog);
    let pipeline = SearchPipeline::new(
        &ReelgridConfig::default(),
        catalog.clone(),
        Arc::new(prober),
    );
    let controller = InputController::attach(&surface, Arc::new(pipeline));
    (surface, controller, catalog)
}

async fn search(surface: &SearchSurface, controller: &InputController, text: &str) {
    surface.input.set_value(text);
    if let Some(task) = controller.handle(UiEvent::key("Enter")) {
        task.await.unwrap();
    }
}

#[tokio::test]
async fn test_three_reachable_candidates_render_three_cards() {
    let (surface, controller, _) = mount(
        StaticCatalog::new().with_results(
            "batman",
            vec![
                CandidateResult::new("Batman Begins", "http://img/1.jpg"),
                CandidateResult::new("The Dark Knight", "http://img/2.jpg"),
                CandidateResult::new("The Dark Knight Rises", "http://img/3.jpg"),
            ],
        ),
        StaticProber::reachable(["http://img/1.jpg", "http://img/2.jpg", "http://img/3.jpg"]),
    );

    search(&surface, &controller, "batman").await;

    assert_eq!(
        surface.output.card_titles(),
        vec!["Batman Begins", "The Dark Knight", "The Dark Knight Rises"]
    );
    assert_eq!(surface.output.empty_state_count(), 0);
}

#[tokio::test]
async fn test_no_match_renders_single_empty_state() {
    let (surface, controller, _) = mount(StaticCatalog::new(), StaticProber::default());

    search(&surface, &controller, "zzzznotfound").await;

    assert_eq!(surface.output.len(), 1);
    assert_eq!(surface.output.empty_state_count(), 1);
    assert_eq!(surface.output.card_count(), 0);
}

#[tokio::test]
async fn test_unreachable_poster_drops_its_card() {
    let (surface, controller, _) = mount(
        StaticCatalog::new().with_results(
            "batman",
            vec![
                CandidateResult::new("Batman Forever", "http://img/dead.jpg"),
                CandidateResult::new("Batman Returns", "http://img/2.jpg"),
            ],
        ),
        StaticProber::reachable(["http://img/2.jpg"]),
    );

    search(&surface, &controller, "batman").await;

    assert_eq!(surface.output.card_titles(), vec!["Batman Returns"]);
}

#[tokio::test]
async fn test_empty_query_issues_no_lookup() {
    let (surface, controller, catalog) = mount(StaticCatalog::new(), StaticProber::default());

    search(&surface, &controller, "").await;
    search(&surface, &controller, "   ").await;

    assert_eq!(catalog.calls(), 0);
    assert!(surface.output.is_empty());
}

#[tokio::test]
async fn test_long_title_renders_truncated() {
    let (surface, controller, _) = mount(
        StaticCatalog::new().with_results(
            "long",
            vec![CandidateResult::new(
                "The Extraordinarily Long Movie Title That Exceeds Forty Characters",
                "http://img/1.jpg",
            )],
        ),
        StaticProber::reachable(["http://img/1.jpg"]),
    );

    search(&surface, &controller, "long").await;

    assert_eq!(
        surface.output.card_titles(),
        vec!["The Extraordinarily Long Movie Title Tha..."]
    );
}

#[tokio::test]
async fn test_new_search_replaces_previous_results() {
    let (surface, controller, _) = mount(
        StaticCatalog::new()
            .with_results("batman", vec![CandidateResult::new("Batman", "http://img/1.jpg")])
            .with_results("alien", vec![CandidateResult::new("Alien", "http://img/2.jpg")]),
        StaticProber::reachable(["http://img/1.jpg", "http://img/2.jpg"]),
    );

    search(&surface, &controller, "batman").await;
    search(&surface, &controller, "alien").await;

    assert_eq!(surface.output.card_titles(), vec!["Alien"]);
    assert!(render_page(&surface).contains("Alien"));
}
