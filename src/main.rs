//! `thirdparty-notice` — turn build-generated license resources into one notice file.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and load the optional config ([`config::load_config`]).
//! 2. Locate `third_party_license_metadata` and `third_party_licenses` ([`locator`]).
//! 3. Slice every metadata range out of the blob ([`extractor`]).
//! 4. Resolve HTML wrappers and bare URLs, optionally fetching them (`--fetch`, [`resolver`]).
//! 5. Merge identical license bodies ([`grouper`]).
//! 6. Write `THIRDPARTY_NOTICE.txt` ([`report::notice`]) and remove stale copies ([`cleanup`]).
//! 7. Print a summary ([`report::terminal`]).
//! 8. Exit `0`, or `2` when the inputs cannot be located.

mod cleanup;
mod cli;
mod config;
mod extractor;
mod fetch;
mod grouper;
mod license;
mod locator;
mod models;
mod report;
mod resolver;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, ReportFormat};
use config::load_config;
use fetch::HttpFetcher;
use locator::{locate_inputs, LocateRequest};
use report::notice::{render_notice, write_notice, OUTPUT_NAME};
use report::terminal::RunSummary;
use resolver::Resolver;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let project_root = cli
        .project_root
        .canonicalize()
        .unwrap_or_else(|_| cli.project_root.clone());

    let config = load_config(&project_root, cli.config.as_deref())?;

    let request = LocateRequest {
        project_root: &project_root,
        root: cli.root.as_deref(),
        extra_roots: &config.search.roots,
        metadata: cli.metadata.as_deref(),
        licenses: cli.licenses.as_deref(),
        metadata_name: &config.search.metadata_name,
        licenses_name: &config.search.licenses_name,
    };
    let inputs = match locate_inputs(&request) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(2);
        }
    };

    if cli.output != OUTPUT_NAME {
        info!("ignoring requested output name {:?}", cli.output);
    }
    let output = project_root.join(OUTPUT_NAME);
    info!("using metadata: {}", inputs.metadata.display());
    info!("using licenses: {}", inputs.licenses.display());
    info!("output (forced): {}", OUTPUT_NAME);

    let entries = extractor::extract_entries(&inputs.metadata, &inputs.licenses)?;
    let raw_entries = entries.len();

    let fetcher = if cli.fetch {
        let timeout = cli.fetch_timeout.unwrap_or(config.fetch.timeout_secs);
        Some(HttpFetcher::new(timeout, &config.fetch.user_agent)?)
    } else {
        None
    };
    let pb = if cli.fetch && !cli.quiet {
        let pb = ProgressBar::new(raw_entries as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // One entry at a time; a fetch is awaited before the next entry starts.
    let mut resolver = Resolver::new(fetcher, cli.embed_all);
    let mut resolved = Vec::with_capacity(raw_entries);
    for entry in entries {
        resolved.push(resolver.resolve(entry).await);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let groups = grouper::group_entries(resolved);
    let notice = render_notice(&groups, &config.fonts.families);
    write_notice(&output, &notice)?;

    let removed = cleanup::remove_stale_notices(&project_root, OUTPUT_NAME);

    let summary = RunSummary {
        metadata: inputs.metadata,
        licenses: inputs.licenses,
        output,
        raw_entries,
        groups: groups.len(),
        sections: &notice.sections,
        removed: &removed,
    };
    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&summary, cli.quiet),
        ReportFormat::Json => report::terminal::render_json(&summary)?,
    }

    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level picked from the flags.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
