use crate::date_range::DateRange;
use crate::fetch::DataFetcher;
use crate::notice::{Notice, Notifier};
use crate::render::{Canvas, SeriesSet, CANVAS_ID};
use crate::templates;
use log::{debug, info, warn};
use maud::Markup;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// What a single fetch ended up doing to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Rendered { points: usize },
    Notified(Notice),
    /// A newer request already rendered; the chart was left alone.
    Stale,
}

#[derive(Debug)]
struct PageState {
    fields: DateRange,
    canvas: Canvas,
    rendered_ticket: u64,
    last_notice: Option<Notice>,
}

/// Date fields, filter action and chart canvas of the exchange-rates page.
pub struct ChartPage {
    fetcher: DataFetcher,
    notifier: Arc<dyn Notifier>,
    state: Mutex<PageState>,
    issued: AtomicU64,
}

impl ChartPage {
    pub fn new(fetcher: DataFetcher, notifier: Arc<dyn Notifier>) -> ChartPage {
        ChartPage {
            fetcher,
            notifier,
            state: Mutex::new(PageState {
                fields: DateRange::new("", ""),
                canvas: Canvas::new(CANVAS_ID),
                rendered_ticket: 0,
                last_notice: None,
            }),
            issued: AtomicU64::new(0),
        }
    }

    /// Populates the date fields with `range` and issues the first fetch.
    pub async fn initialize(&self, range: DateRange) -> FetchOutcome {
        info!("initializing with {} to {}", range.start, range.end);
        self.set_fields(range.clone()).await;
        self.fetch_data(range).await
    }

    pub async fn set_fields(&self, range: DateRange) {
        self.state.lock().await.fields = range;
    }

    pub async fn fields(&self) -> DateRange {
        self.state.lock().await.fields.clone()
    }

    /// Filter click: types `typed` into the fields when given, then reads them back.
    ///
    /// The returned range is what the click fetches, whatever happens to the fields later.
    pub async fn click_filter(&self, typed: Option<DateRange>) -> DateRange {
        let mut state = self.state.lock().await;
        if let Some(range) = typed {
            state.fields = range;
        }
        state.fields.clone()
    }

    pub async fn fetch_data(&self, range: DateRange) -> FetchOutcome {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let records = match self.fetcher.fetch(&range).await {
            Ok(records) => records,
            Err(e) => {
                warn!("request #{} for {} failed: {}", ticket, self.fetcher.data_url(&range), e);
                return self.raise(Notice::TransportFailure).await;
            }
        };
        if records.is_empty() {
            return self.raise(Notice::EmptyResult).await;
        }

        let mut state = self.state.lock().await;
        if ticket < state.rendered_ticket {
            debug!(
                "dropping response #{}, #{} is already on the canvas",
                ticket, state.rendered_ticket
            );
            return FetchOutcome::Stale;
        }
        let points = state.canvas.render_chart(&records).labels().len();
        state.rendered_ticket = ticket;
        state.last_notice = None;
        FetchOutcome::Rendered { points }
    }

    async fn raise(&self, notice: Notice) -> FetchOutcome {
        self.notifier.notify(notice);
        self.state.lock().await.last_notice = Some(notice);
        FetchOutcome::Notified(notice)
    }

    pub async fn series(&self) -> Option<SeriesSet> {
        self.state.lock().await.canvas.series().cloned()
    }

    pub async fn to_html(&self) -> Result<Markup, serde_json::Error> {
        let state = self.state.lock().await;
        templates::chart_page(&state.fields, state.canvas.chart(), state.last_notice)
    }

    /// Tears the chart instance down.
    pub async fn shutdown(&self) {
        self.state.lock().await.canvas.destroy();
    }

    #[cfg(test)]
    async fn destroyed_charts(&self) -> usize {
        self.state.lock().await.canvas.destroyed()
    }
}
