use crate::commands::CmdResult;
use crate::controller::SearchController;
use crate::error::Result;
use crate::fetch::StoryFetcher;
use crate::store::KeyValueStore;

/// Searches for `terms`, or reloads the remembered query when `terms` is empty.
///
/// Terms are joined with single spaces and become the new remembered query.
pub async fn run<F: StoryFetcher, S: KeyValueStore>(
    ctl: &mut SearchController<F, S>,
    terms: &[String],
) -> Result<CmdResult> {
    if terms.is_empty() {
        ctl.refresh().await;
    } else {
        ctl.set_query(terms.join(" "))?;
        ctl.submit().await?;
    }

    Ok(CmdResult::default()
        .with_state(ctl.state().clone())
        .with_query(ctl.query()))
}
