use crate::date_range::DateRange;
use crate::error::Error;
use crate::page::{ChartPage, FetchOutcome};
use crate::publish::Publisher;
use log::{error, info};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

#[derive(Debug, PartialEq, Eq)]
pub enum FilterCommand {
    /// Click the filter, optionally typing new dates into the fields first.
    Click(Option<DateRange>),
    Quit,
}

/// `<start> <end>` fills both fields, a blank line re-uses them.
/// Values are not validated; a missing end becomes an empty field.
pub fn parse_line(line: &str) -> FilterCommand {
    let mut words = line.split_whitespace();
    match words.next() {
        None => FilterCommand::Click(None),
        Some("q") | Some("quit") | Some("exit") => FilterCommand::Quit,
        Some(start) => {
            let end = words.next().unwrap_or("");
            FilterCommand::Click(Some(DateRange::new(start, end)))
        }
    }
}

/// Binds lines read from `input` to the page's filter action.
///
/// Each click runs on its own task, so a slow request does not block the next one.
pub async fn run<R>(page: Arc<ChartPage>, publisher: Arc<Publisher>, input: R) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut clicks = JoinSet::new();
    while let Some(line) = lines.next_line().await? {
        let range = match parse_line(&line) {
            FilterCommand::Quit => break,
            FilterCommand::Click(range) => range,
        };
        // Read at click time, a later line may overwrite the fields before the task runs.
        let range = page.click_filter(range).await;
        let page = page.clone();
        let publisher = publisher.clone();
        clicks.spawn(async move {
            let outcome = page.fetch_data(range).await;
            if outcome != FetchOutcome::Stale {
                if let Err(e) = publisher.publish(&page).await {
                    error!("{}", e);
                }
            }
            outcome
        });
    }
    while let Some(joined) = clicks.join_next().await {
        match joined {
            Ok(outcome) => info!("filter finished: {:?}", outcome),
            Err(e) => error!("filter task failed: {}", e),
        }
    }
    Ok(())
}
