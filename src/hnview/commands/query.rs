use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::persisted::PersistedValue;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    Show,
    Set(String),
    Clear,
}

/// Shows or changes the remembered query. Never fetches.
pub fn run<S: KeyValueStore>(query: &mut PersistedValue<S>, action: QueryAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        QueryAction::Show => {
            if query.get().is_empty() {
                result.add_message(CmdMessage::info("No query remembered."));
            }
        }
        QueryAction::Set(text) => {
            query.set(text)?;
            result.add_message(CmdMessage::success(format!("Query set: {}", query.get())));
        }
        QueryAction::Clear => {
            query.set("")?;
            result.add_message(CmdMessage::success("Query cleared."));
        }
    }
    Ok(result.with_query(query.get()))
}
