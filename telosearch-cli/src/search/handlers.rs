use std::io::Write;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use telosearch_core::{SearchConfig, TelomereSearcher};

use super::cli::DEFAULT_FORMAT;
use crate::utils::{
    get_dynamic_reader_w_stdin, get_dynamic_writer, read_candidates, write_results_json,
    write_results_tsv,
};

/// Resolve the search config: file values first, then command line overrides.
fn resolve_config(matches: &ArgMatches) -> Result<SearchConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("Failed to load search config from {}", path))?,
        None => SearchConfig::default(),
    };

    if matches.get_flag("no-reverse") {
        config.include_reverse = false;
    }
    if let Some(threads) = matches.get_one::<usize>("threads") {
        config.threads = *threads;
    }

    Ok(config)
}

pub fn run_search(matches: &ArgMatches) -> Result<()> {
    let candidates_path = matches
        .get_one::<String>("candidates")
        .expect("A path to a candidates file is required.");

    let motif = matches
        .get_one::<String>("repeat")
        .expect("A repeat unit is required.");

    let default_format = DEFAULT_FORMAT.to_string();
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&default_format);
    let output = matches.get_one::<String>("output");

    let config = resolve_config(matches)?;

    let reader = get_dynamic_reader_w_stdin(candidates_path)?;
    let candidates = read_candidates(reader)?;
    info!(
        "Read {} candidate sequences from {}",
        candidates.len(),
        candidates_path
    );

    let searcher = TelomereSearcher::from_config(&config)?;
    let results = searcher
        .search(&candidates, motif)
        .with_context(|| format!("Failed to search for telomeres of {}", motif))?;

    let mut writer = get_dynamic_writer(output.map(|s| s.as_str()))?;
    match format.as_str() {
        "json" => write_results_json(&mut writer, &candidates, &results)?,
        "tsv" => write_results_tsv(&mut writer, &candidates, &results)?,
        _ => anyhow::bail!("Unknown output format supplied: {}", format),
    }
    writer.flush()?;

    Ok(())
}
