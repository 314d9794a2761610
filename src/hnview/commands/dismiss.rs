use crate::commands::{CmdMessage, CmdResult};
use crate::controller::SearchController;
use crate::error::{HnError, Result};
use crate::fetch::StoryFetcher;
use crate::model::StoryId;
use crate::store::KeyValueStore;

/// Dismisses stories by their 1-based position in the current list.
///
/// All positions are resolved against the list as it is before any removal, so
/// `dismiss 1 2` drops the first two stories shown.
pub fn run<F: StoryFetcher, S: KeyValueStore>(
    ctl: &mut SearchController<F, S>,
    positions: &[usize],
) -> Result<CmdResult> {
    let stories = ctl.state().stories();
    let mut resolved: Vec<(usize, StoryId, String)> = Vec::with_capacity(positions.len());
    for &position in positions {
        let story = position
            .checked_sub(1)
            .and_then(|i| stories.get(i))
            .ok_or_else(|| HnError::InvalidIndex(position.to_string()))?;
        resolved.push((position, story.id.clone(), story.title.clone()));
    }

    let mut result = CmdResult::default();
    for (position, id, title) in resolved {
        ctl.remove_story(&id);
        result.add_message(CmdMessage::success(format!(
            "Dismissed ({}): {}",
            position, title
        )));
    }

    Ok(result.with_state(ctl.state().clone()))
}
