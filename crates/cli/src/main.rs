use anyhow::{Context, Result};
use catalog::{Catalog, MovieId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{FilterCriteria, SortKey, apply_filters_and_sort};
use server::{CatalogSession, CatalogView, InputEvent};
use std::path::PathBuf;
use std::time::Duration;
use tmdb_client::{ClientConfig, ImageSize, TmdbClient, format_release_date, format_runtime};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// CineVerse - Movie Catalog Explorer
#[derive(Parser)]
#[command(name = "cineverse")]
#[command(about = "Browse, search, and filter the movie catalog", long_about = None)]
struct Cli {
    /// API key for the catalog API
    #[arg(long, env = "TMDB_API_KEY", global = true)]
    api_key: Option<String>,

    /// Language tag for catalog responses
    #[arg(long, default_value = "en-US", global = true)]
    language: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse popular movies with client-side filtering and sorting
    Browse {
        /// Page of the popular list to fetch
        #[arg(long, default_value = "1")]
        page: u32,

        /// Free-text query matched against title and overview
        #[arg(long, default_value = "")]
        query: String,

        /// Sort key: popularity, rating, date, or title
        #[arg(long, default_value = "popularity")]
        sort: SortKey,

        /// Load the catalog from a local JSON snapshot instead of the API
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Search the whole remote catalog by title (server-side)
    Search {
        /// Title to search for
        #[arg(long)]
        query: String,

        /// Result page to fetch
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Show the full record for one movie
    Details {
        /// Movie ID to display
        #[arg(long)]
        movie_id: MovieId,
    },

    /// Interactive session: type queries, see debounced results
    Live {
        /// Initial sort key
        #[arg(long, default_value = "popularity")]
        sort: SortKey,

        /// Page of the popular list to load the catalog from
        #[arg(long, default_value = "1")]
        page: u32,

        /// Load the catalog from a local JSON snapshot instead of the API
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Debounce quiet period in milliseconds
        #[arg(long, default_value = "300")]
        debounce_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let client = build_client(cli.api_key.clone(), cli.language.clone());

    match cli.command {
        Commands::Browse {
            page,
            query,
            sort,
            snapshot,
        } => handle_browse(client, page, query, sort, snapshot).await?,
        Commands::Search { query, page } => handle_search(client, query, page).await?,
        Commands::Details { movie_id } => handle_details(client, movie_id).await?,
        Commands::Live {
            sort,
            page,
            snapshot,
            debounce_ms,
        } => handle_live(client, sort, page, snapshot, debounce_ms).await?,
    }

    Ok(())
}

fn build_client(api_key: Option<String>, language: String) -> TmdbClient {
    TmdbClient::with_config(ClientConfig {
        api_key,
        language,
        ..ClientConfig::default()
    })
}

/// Load the catalog from a snapshot file when given, otherwise from the
/// popular-movies endpoint.
async fn load_catalog(
    client: &TmdbClient,
    page: u32,
    snapshot: Option<PathBuf>,
) -> Result<Catalog> {
    match snapshot {
        Some(path) => catalog::load_catalog_json(&path)
            .with_context(|| format!("Failed to load snapshot {}", path.display())),
        None => {
            let listing = client
                .popular_movies(page)
                .await
                .context("Failed to fetch popular movies")?;
            Ok(Catalog::from_movies(listing.results))
        }
    }
}

/// Handle the 'browse' command
async fn handle_browse(
    client: TmdbClient,
    page: u32,
    query: String,
    sort: SortKey,
    snapshot: Option<PathBuf>,
) -> Result<()> {
    let catalog = load_catalog(&client, page, snapshot).await?;

    let criteria = FilterCriteria::new(query, sort);
    let view = apply_filters_and_sort(catalog.movies().to_vec(), &criteria);

    if view.is_empty() {
        println!("{}", "No movies match the current filters.".yellow());
        return Ok(());
    }

    print_movie_list(&view);
    println!("{}", count_line(view.len()).dimmed());
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(client: TmdbClient, query: String, page: u32) -> Result<()> {
    let listing = client
        .search_movies(&query, page)
        .await
        .context("Catalog search failed")?;

    if listing.results.is_empty() {
        println!("{}", format!("No results for '{query}'.").yellow());
        return Ok(());
    }

    print_movie_list(&listing.results);
    println!(
        "{}",
        format!(
            "Page {} of {}, {} results total",
            listing.page, listing.total_pages, listing.total_results
        )
        .dimmed()
    );
    Ok(())
}

/// Handle the 'details' command
async fn handle_details(client: TmdbClient, movie_id: MovieId) -> Result<()> {
    let movie = client
        .movie_details(movie_id)
        .await
        .with_context(|| format!("Failed to fetch details for movie {movie_id}"))?;

    println!("{}", movie.title.bold().blue());
    if !movie.tagline.is_empty() {
        println!("{}", movie.tagline.italic());
    }
    println!();

    println!(
        "{}Released: {}",
        "• ".green(),
        format_release_date(movie.release_date)
    );
    println!("{}Runtime: {}", "• ".green(), format_runtime(movie.runtime));
    if !movie.genres.is_empty() {
        let names: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
        println!("{}Genres: {}", "• ".green(), names.join(", "));
    }
    println!(
        "{}Rating: {:.1} ({} votes)",
        "• ".cyan(),
        movie.vote_average,
        movie.vote_count
    );
    println!(
        "{}Poster: {}",
        "• ".cyan(),
        client.image_url(movie.poster_path.as_deref(), ImageSize::Poster)
    );
    if let Some(homepage) = &movie.homepage {
        println!("{}Homepage: {}", "• ".cyan(), homepage);
    }

    if !movie.overview.is_empty() {
        println!();
        println!("{}", movie.overview);
    }
    Ok(())
}

/// Handle the 'live' command: a stdin-driven filtering session.
///
/// Each typed line becomes the new query; `:sort <key>` switches the
/// ordering immediately; `:quit` (or end of input) ends the session.
async fn handle_live(
    client: TmdbClient,
    sort: SortKey,
    page: u32,
    snapshot: Option<PathBuf>,
    debounce_ms: u64,
) -> Result<()> {
    let catalog = load_catalog(&client, page, snapshot).await?;
    println!(
        "{} Loaded {} movies. Type to filter, ':sort <key>' to reorder, ':quit' to exit.",
        "✓".green(),
        catalog.len()
    );

    let session =
        CatalogSession::new(catalog).with_debounce_delay(Duration::from_millis(debounce_ms));
    let (event_tx, event_rx) = mpsc::channel(16);
    let (view_tx, mut view_rx) = mpsc::unbounded_channel();

    tokio::spawn(session.run(event_rx, view_tx));

    // Render views as the session emits them.
    let printer = tokio::spawn(async move {
        while let Some(view) = view_rx.recv().await {
            print_view(&view);
        }
    });

    let mut query = String::new();
    let mut sort_key = sort;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line == ":quit" {
            break;
        }

        let event = if let Some(key) = line.strip_prefix(":sort ") {
            sort_key = key.parse().unwrap_or_default();
            InputEvent::SortChanged(FilterCriteria::new(query.clone(), sort_key))
        } else {
            query = line;
            InputEvent::QueryChanged(FilterCriteria::new(query.clone(), sort_key))
        };

        if event_tx.send(event).await.is_err() {
            break;
        }
    }

    // Closing the event channel ends the session, which closes the view
    // channel and lets the printer finish.
    drop(event_tx);
    let _ = printer.await;
    Ok(())
}

/// Print one line per movie: title, year, rating, popularity.
fn print_movie_list(movies: &[catalog::Movie]) {
    for movie in movies {
        let year = movie
            .year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        println!(
            "{} ({})  {} {:.1}  popularity {:.0}",
            movie.title.bold(),
            year,
            "★".yellow(),
            movie.vote_average,
            movie.popularity
        );
    }
}

/// Print a view from a live session: the counter plus the top titles.
fn print_view(view: &CatalogView) {
    println!();
    println!("{}", count_line(view.total).bold());
    for movie in view.movies.iter().take(10) {
        println!("  {} {:.1}  {}", "★".yellow(), movie.vote_average, movie.title);
    }
    if view.total > 10 {
        println!("  {}", format!("... and {} more", view.total - 10).dimmed());
    }
}

/// The "N movies found" counter under every listing.
fn count_line(count: usize) -> String {
    if count == 1 {
        "1 movie found".to_string()
    } else {
        format!("{count} movies found")
    }
}
