use crate::config::Config;
use crate::date_range::DateRange;
use crate::error::Error;
use crate::fetch::{DataFetcher, ReqwestHttpClient};
use crate::notice::ConsoleNotifier;
use crate::page::ChartPage;
use crate::publish::Publisher;
use clap::Parser;
use log::{error, info};
use std::sync::Arc;
use tokio::io::BufReader;

mod charts;
mod config;
mod date_range;
mod error;
mod fetch;
mod filter;
mod notice;
mod page;
mod publish;
mod record;
mod render;
mod templates;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    if let Err(e) = run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let client = Arc::new(ReqwestHttpClient::new()?);
    let fetcher = DataFetcher::new(config.server.clone(), config.timeout(), client);
    let page = Arc::new(ChartPage::new(fetcher, Arc::new(ConsoleNotifier)));
    let publisher = Arc::new(Publisher::new(config.output.clone(), config.series_json.clone()));

    let outcome = page
        .initialize(config.initial_range(DateRange::default_for_now()))
        .await;
    info!("initial load: {:?}", outcome);
    publisher.publish(&page).await?;

    if config.interactive {
        println!("enter `<start> <end>` to filter, an empty line to reload, `quit` to exit");
        let stdin = BufReader::new(tokio::io::stdin());
        filter::run(page.clone(), publisher.clone(), stdin).await?;
    }

    page.shutdown().await;
    Ok(())
}

pub fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
