//! Terminal side of hnview: builds the controller from config, runs a command, prints.

mod render;
mod repl;

use crate::args::{Cli, Commands};
use directories::ProjectDirs;
use hnview::commands::config::ConfigAction;
use hnview::commands::query::QueryAction;
use hnview::commands::{self, CmdResult};
use hnview::config::{HnConfig, CONFIG_KEYS};
use hnview::controller::SearchController;
use hnview::error::{HnError, Result};
use hnview::fetch::HttpFetcher;
use hnview::persisted::PersistedValue;
use hnview::store::fs::FileStore;
use std::path::PathBuf;

pub use render::{render_messages, render_view};

/// Overrides the data directory (store and config) when set.
const HOME_ENV: &str = "HNVIEW_HOME";

type Controller = SearchController<HttpFetcher, FileStore>;

struct AppContext {
    data_dir: PathBuf,
    config: HnConfig,
}

impl AppContext {
    fn init() -> Result<Self> {
        let data_dir = data_dir()?;
        let config = HnConfig::load(&data_dir)?;
        Ok(Self { data_dir, config })
    }

    fn store(&self) -> FileStore {
        FileStore::new(self.data_dir.clone())
    }

    fn controller(&self) -> Result<Controller> {
        let fetcher = HttpFetcher::new(self.config.timeout()).map_err(HnError::HttpClient)?;
        SearchController::new(fetcher, self.store(), &self.config)
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "hnview", "hnview")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HnError::Config("could not determine a data directory".into()))
}

pub async fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::init()?;

    match cli.command {
        Some(Commands::Search { terms }) => handle_search(&ctx, terms).await,
        Some(Commands::Query { set, clear }) => handle_query(&ctx, set, clear),
        Some(Commands::Browse) => handle_browse(&ctx).await,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_search(&ctx, Vec::new()).await,
    }
}

async fn handle_search(ctx: &AppContext, terms: Vec<String>) -> Result<()> {
    let mut ctl = ctx.controller()?;
    let result = commands::search::run(&mut ctl, &terms).await?;
    print_result(&result);
    Ok(())
}

fn handle_query(ctx: &AppContext, set: Option<String>, clear: bool) -> Result<()> {
    let action = match (set, clear) {
        (Some(text), _) => QueryAction::Set(text),
        (None, true) => QueryAction::Clear,
        (None, false) => QueryAction::Show,
    };

    let mut query = PersistedValue::load(
        ctx.store(),
        &ctx.config.query_key,
        &ctx.config.default_query,
    )?;
    let result = commands::query::run(&mut query, action.clone())?;
    if action == QueryAction::Show {
        if let Some(text) = result.query.as_deref().filter(|q| !q.is_empty()) {
            println!("{}", text);
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

async fn handle_browse(ctx: &AppContext) -> Result<()> {
    let mut ctl = ctx.controller()?;
    repl::run(&mut ctl).await
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        for key in CONFIG_KEYS {
            println!("{} = {}", key, config.get(key)?);
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn print_result(result: &CmdResult) {
    if let Some(state) = &result.state {
        print!("{}", render_view(state));
    }
    print!("{}", render_messages(&result.messages));
}
