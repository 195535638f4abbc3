#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod dedup;
mod error;
mod fetch;
mod output;
mod parse;
mod report;
mod scrape_institutions;

use std::io;

use config::Config;
use scrape_institutions::scrape_institutions;

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::default();
    scrape_institutions(&config, &mut io::stdout().lock(), &mut io::stderr().lock()).await?;
    Ok(())
}
