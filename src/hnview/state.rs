//! # Search State
//!
//! The view state of the result list and the only way to change it.
//!
//! [`SearchState`] is a plain value. Every change goes through [`SearchState::reduce`],
//! which takes the previous state and an [`Action`] and returns the next state. Nothing
//! here does I/O, so the whole state machine is tested without a network or a store.
//!
//! ```text
//!            FetchStart               FetchSuccess(items)
//!   idle ───────────────▶ loading ───────────────────────▶ idle (items replaced)
//!     ▲                      │
//!     │                      │ FetchFailure
//!     │   FetchStart         ▼
//!     └──────────────────  error (items kept)
//! ```
//!
//! `RemoveStory` may be applied in any of the three states and never touches the flags.
//!
//! Invariant: `is_loading` and `is_error` are never both true.

use crate::model::{Story, StoryId};

/// A transition of the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchStart,
    FetchSuccess(Vec<Story>),
    FetchFailure,
    RemoveStory(StoryId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    stories: Vec<Story>,
    is_loading: bool,
    is_error: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stories in server response order, minus dismissed ones.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Applies one transition and returns the resulting state.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::FetchStart => Self {
                is_loading: true,
                is_error: false,
                ..self
            },
            Action::FetchSuccess(stories) => Self {
                stories,
                is_loading: false,
                is_error: false,
            },
            Action::FetchFailure => Self {
                is_loading: false,
                is_error: true,
                ..self
            },
            Action::RemoveStory(id) => {
                let mut next = self;
                next.stories.retain(|story| story.id != id);
                next
            }
        }
    }
}
