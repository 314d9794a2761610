//! Interactive browse loop.
//!
//! Reads one command per line from stdin. Editing the query and submitting it are
//! separate commands, so nothing is fetched until `submit`.

use super::render::{render_messages, render_view};
use colored::Colorize;
use hnview::commands::{self, CmdMessage};
use hnview::controller::SearchController;
use hnview::error::{HnError, Result};
use hnview::fetch::StoryFetcher;
use hnview::store::KeyValueStore;
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
query <text>     change the query (remembered, not searched)
submit           search for the current query
dismiss <n>...   hide stories by number
list             show the current results
help             show this help
quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Query(String),
    Submit,
    Dismiss(Vec<usize>),
    List,
    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = HnError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        match word.to_lowercase().as_str() {
            "query" | "q" => Ok(ReplCommand::Query(rest.to_string())),
            "submit" | "s" => Ok(ReplCommand::Submit),
            "dismiss" | "d" => {
                let positions = rest
                    .split_whitespace()
                    .map(|n| n.parse().map_err(|_| HnError::InvalidIndex(n.to_string())))
                    .collect::<Result<Vec<usize>>>()?;
                if positions.is_empty() {
                    return Err(HnError::InvalidIndex("(none given)".into()));
                }
                Ok(ReplCommand::Dismiss(positions))
            }
            "list" | "l" => Ok(ReplCommand::List),
            "help" | "h" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" => Ok(ReplCommand::Quit),
            _ => Err(HnError::UnknownCommand(word.to_string())),
        }
    }
}

/// An empty query is the disabled submit button, not a failure.
fn report(err: &HnError) -> CmdMessage {
    match err {
        HnError::EmptyQuery => CmdMessage::warning(err.to_string()),
        other => CmdMessage::error(other.to_string()),
    }
}

fn prompt(query: &str, can_submit: bool) -> String {
    let submit = if can_submit {
        "submit".green()
    } else {
        "submit disabled".dimmed()
    };
    format!("[{}] ({}) > ", query.bold(), submit)
}

pub async fn run<F: StoryFetcher, S: KeyValueStore>(ctl: &mut SearchController<F, S>) -> Result<()> {
    ctl.refresh().await;
    print!("{}", render_view(ctl.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", prompt(ctl.query(), ctl.can_submit()));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprint!("{}", render_messages(&[report(&e)]));
                continue;
            }
        };

        match command {
            ReplCommand::Query(text) => ctl.set_query(text)?,
            ReplCommand::Submit => match ctl.start_submit() {
                Ok(ticket) => {
                    print!("{}", render_view(ctl.state()));
                    let outcome = ctl.fetcher().fetch(ticket.url()).await;
                    ctl.complete_fetch(ticket, outcome);
                    print!("{}", render_view(ctl.state()));
                }
                Err(e @ HnError::EmptyQuery) => eprint!("{}", render_messages(&[report(&e)])),
                Err(e) => return Err(e),
            },
            ReplCommand::Dismiss(positions) => match commands::dismiss::run(ctl, &positions) {
                Ok(result) => {
                    print!("{}", render_messages(&result.messages));
                    print!("{}", render_view(ctl.state()));
                }
                Err(e) => eprint!("{}", render_messages(&[report(&e)])),
            },
            ReplCommand::List => print!("{}", render_view(ctl.state())),
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Quit => break,
        }
    }
    Ok(())
}
