use std::{io, time::Duration};

use log::info;
use quote_watch::{
    api::{Config, LongportApi},
    app::{Poller, QuoteBoard},
};

const WATCHLIST: [&str; 4] = ["BLSH.US", "BMNR.US", "CRWV.US", "DJT.US"];
const POLL_INTERVAL: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();

    let config = Config::from_env()?;
    let api = LongportApi::new(config);

    info!(
        "watching {} every {}s",
        WATCHLIST.join(", "),
        POLL_INTERVAL.as_secs()
    );

    let symbols = WATCHLIST.iter().map(|symbol| symbol.to_string()).collect();
    let mut board = QuoteBoard::new(api, symbols, io::stdout());

    Poller::new(POLL_INTERVAL).run(&mut board).await?;

    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
