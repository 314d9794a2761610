use clap::{Parser, Subcommand};

/// "0.3.2" for tagged release builds, "0.3.2@abc1234 2026-01-15" otherwise.
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("HNVIEW_GIT_HASH");
    const GIT_DATE: &str = env!("HNVIEW_GIT_DATE");
    const RELEASE: &str = env!("HNVIEW_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "hnview", version = version())]
#[command(about = "Search Hacker News from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search stories and remember the query
    #[command(alias = "s")]
    Search {
        /// Search terms, joined with spaces
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },

    /// Show or change the remembered query without searching
    #[command(alias = "q")]
    Query {
        /// Remember this query
        #[arg(long, conflicts_with = "clear")]
        set: Option<String>,

        /// Forget the remembered query
        #[arg(long)]
        clear: bool,
    },

    /// Browse results interactively (query, submit, dismiss)
    #[command(alias = "b")]
    Browse,

    /// Get or set configuration
    Config {
        /// Configuration key (endpoint, query-key, default-query, timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
