//! Scrapes the unirank.org A-Z listing of Indian universities into a JSON file.
//! One page, one request: fetch, extract, dedup, report, save.
use std::io::Write;

use crate::{
    config::Config,
    dedup::deduplicated,
    fetch::{listing_page, make_client},
    output,
    parse::{institution_names, InstitutionName},
    report::summarize,
};

pub async fn scrape_institutions(
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> crate::Result<Vec<InstitutionName>> {
    let client = make_client(config)?;
    let page = listing_page(&client, config).await?;

    log::debug!("decoded listing page as {}", page.encoding());
    let names = institution_names(page.body());
    let raw = names.len();
    let names = deduplicated(names);
    log::debug!("extracted {raw} names, {} unique", names.len());
    if let Some(first) = names.first() {
        log::trace!("first institution: {}", first.as_str());
    }

    summarize(names.len(), config.min_expected, out, err)?;
    output::save(&config.output_path, &names).await?;
    log::info!("wrote {}", config.output_path.display());
    Ok(names)
}
