//! # Commands
//!
//! The operations the CLI offers, as plain functions over the controller, the store or
//! the config. They return a [`CmdResult`] and never print; turning results into text is
//! the CLI's job.

use crate::config::HnConfig;
use crate::state::SearchState;

pub mod config;
pub mod dismiss;
pub mod query;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Snapshot of the view state after the command, for commands that touch it
    pub state: Option<SearchState>,
    pub query: Option<String>,
    pub config: Option<HnConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_state(mut self, state: SearchState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_config(mut self, config: HnConfig) -> Self {
        self.config = Some(config);
        self
    }
}
