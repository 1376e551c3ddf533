use crate::error::Error;
use crate::page::ChartPage;
use log::info;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Writes the page (and optionally its series) to disk.
pub struct Publisher {
    output: PathBuf,
    series_json: Option<PathBuf>,
    writing: Mutex<()>,
}

impl Publisher {
    pub fn new(output: PathBuf, series_json: Option<PathBuf>) -> Publisher {
        Publisher {
            output,
            series_json,
            writing: Mutex::new(()),
        }
    }

    pub async fn publish(&self, page: &ChartPage) -> Result<(), Error> {
        let _writing = self.writing.lock().await;
        let html = page.to_html().await?.into_string();
        write(&self.output, html.as_bytes()).await?;
        info!("page written to {}", self.output.display());

        if let Some(path) = &self.series_json {
            if let Some(series) = page.series().await {
                let json = serde_json::to_vec_pretty(&series)?;
                write(path, &json).await?;
                info!("series written to {}", path.display());
            }
        }
        Ok(())
    }
}

async fn write(path: &Path, contents: &[u8]) -> Result<(), Error> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| Error::Write {
            path: path.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::date_range::DateRange;
    use crate::fetch::test::ScriptedHttpClient;
    use crate::fetch::{DataFetcher, HttpResponse};
    use crate::notice::test::RecordingNotifier;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_publish_page_and_series() {
        let dir = std::env::temp_dir().join(format!("rates-chart-publish-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let output = dir.join("page.html");
        let series = dir.join("series.json");

        let client = Arc::new(ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_json(
            r#"[{"Date":"2024-01-01","EUR":1.1,"GBP":0.9,"RUB":95.0,"USD":1.0}]"#,
        ))]));
        let fetcher = DataFetcher::new("http://rates.test", Duration::from_secs(1), client);
        let page = ChartPage::new(fetcher, Arc::new(RecordingNotifier::default()));
        page.initialize(DateRange::new("2024-01-01", "2024-01-31")).await;

        let publisher = Publisher::new(output.clone(), Some(series.clone()));
        publisher.publish(&page).await.unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("exchangeRatesChart"));
        assert!(html.contains(r#""label":"USD""#));
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&series).unwrap()).unwrap();
        assert_eq!(json["EUR"][0], 1.1);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_publish_to_missing_dir() {
        let client = Arc::new(ScriptedHttpClient::default());
        let fetcher = DataFetcher::new("http://rates.test", Duration::from_secs(1), client);
        let page = ChartPage::new(fetcher, Arc::new(RecordingNotifier::default()));
        let publisher = Publisher::new(PathBuf::from("/nonexistent/dir/page.html"), None);

        let err = publisher.publish(&page).await.unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
