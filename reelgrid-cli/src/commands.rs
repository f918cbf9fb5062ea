//! CLI command implementations

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use reelgrid_search::{ReelgridConfig, SearchPipeline};
use reelgrid_web::{InputController, SearchSurface, UiEvent, render_page, render_text};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a single search and print the results
    Search {
        /// Movie title to search for
        query: String,
        /// How to print the rendered results
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Read one query per line from stdin and print results after each
    Interactive {
        /// How to print the rendered results
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run a search and write the whole widget as an HTML page
    Page {
        /// Movie title to search for
        query: String,
        /// Destination HTML file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Rendering used when printing the output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One title per card with its poster URL
    Text,
    /// The container's HTML
    Html,
}

/// Handle the CLI command
///
/// # Errors
/// - Configuration is missing or invalid
/// - Reading stdin or writing the page failed
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = ReelgridConfig::from_env().context("loading configuration")?;
    let pipeline = Arc::new(SearchPipeline::from_config(&config)?);

    let surface = SearchSurface::new();
    let controller = InputController::attach(&surface, pipeline);

    match command {
        Commands::Search { query, format } => {
            if submit(&surface, &controller, &query, UiEvent::TriggerClicked).await? {
                print!("{}", format_output(&surface, format));
            }
            Ok(())
        }
        Commands::Interactive { format } => interactive(&surface, &controller, format).await,
        Commands::Page { query, output } => {
            submit(&surface, &controller, &query, UiEvent::TriggerClicked).await?;
            write_page(&surface, &output).await?;
            println!("Wrote {}", output.display());
            Ok(())
        }
    }
}

/// Types `text` into the input, fires `event` and waits for the search.
///
/// Returns `false` when the event started no search (empty input).
async fn submit(
    surface: &SearchSurface,
    controller: &InputController,
    text: &str,
    event: UiEvent,
) -> anyhow::Result<bool> {
    surface.input.set_value(text);

    match controller.handle(event) {
        Some(task) => {
            task.await.context("search task panicked")?;
            Ok(true)
        }
        None => Ok(false),
    }
}

async fn interactive(
    surface: &SearchSurface,
    controller: &InputController,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if submit(surface, controller, &line, UiEvent::key("Enter")).await? {
            print!("{}", format_output(surface, format));
            println!();
        }
    }

    info!("Input closed");
    Ok(())
}

fn format_output(surface: &SearchSurface, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(&surface.output),
        OutputFormat::Html => format!("{}\n", surface.output.inner_html()),
    }
}

async fn write_page(surface: &SearchSurface, path: &Path) -> anyhow::Result<()> {
    tokio::fs::write(path, render_page(surface))
        .await
        .with_context(|| format!("writing {}", path.display()))
}
