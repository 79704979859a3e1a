//! CLI driver for shelfsync.
//!
//! A thin stand-in for the real presentation layer: it loads configuration,
//! performs the initial refresh, and renders the canonical collection as
//! text. All interesting behavior lives in the library.

use std::process::ExitCode;

use shelfsync::{observability, Config, Controller, HttpRecordStore, ViewState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("shelfsync: {error}");
            return ExitCode::FAILURE;
        }
    };
    observability::init_tracing(config.trace_level.as_deref());

    tracing::debug!(service_url = %config.service_url, "starting");

    let store = HttpRecordStore::new(config.service_url);
    let mut controller = Controller::new(store);

    if let Err(error) = controller.refresh().await {
        eprintln!("shelfsync: {error}");
        return ExitCode::FAILURE;
    }

    render(controller.view());
    ExitCode::SUCCESS
}

/// Prints the collection one book per line, the way the lending UI lists it.
fn render(view: ViewState<'_>) {
    if view.books.is_empty() {
        println!("no books");
        return;
    }
    for book in view.books {
        let id = book.id.map_or_else(|| "?".to_string(), |id| id.to_string());
        println!(
            "[{id}] {} by {} ({}, rated {})",
            book.title, book.author, book.published_date, book.rating
        );
    }
}
