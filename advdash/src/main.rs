//! # advdash
//!
//! A terminal dashboard for browsing ICS-CERT security advisories from a
//! CSV export.
//!
//! ## Overview
//!
//! advdash is built on top of advdashlib and provides a command-line view
//! of the advisory dataset: summary statistics, a top-countries bar chart,
//! and a paginated, filterable table of advisories.
//!
//! ## Usage
//!
//! ```bash
//! # Show the dashboard for a CSV export
//! advdash advisories.csv
//!
//! # Filter by vendor substring and country, show page 2
//! advdash advisories.csv --vendor siemens --country Germany --page 2
//!
//! # Output as JSON or as an HTML table fragment
//! advdash advisories.csv --output json
//! advdash advisories.csv --output html
//!
//! # List the values available to the filter controls
//! advdash advisories.csv --list-vendors
//! advdash advisories.csv --list-countries
//! ```
//!
//! Failing to read the source file is the only fatal error: it prints a
//! single `Error:` line and exits nonzero. Malformed CSV lines are logged
//! as warnings (see `RUST_LOG=warn`) and never abort the run.

use std::process::ExitCode;

use advdashlib::{
    parse_file, summarize, top_by_country, AdvisoryTable, CountryChart, DashboardReport, Dataset,
    FilterCriteria,
};
use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};

mod render;

/// Drawing width of the country chart, in cells.
const CHART_WIDTH: usize = 40;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("advdash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse ICS-CERT security advisories from a CSV export")
        .arg(
            Arg::new("path")
                .help("Path to the advisory CSV file")
                .required(true),
        )
        .arg(
            Arg::new("vendor")
                .short('v')
                .long("vendor")
                .help("Only advisories whose vendor field contains this text (case-insensitive)"),
        )
        .arg(
            Arg::new("advisory")
                .short('a')
                .long("advisory")
                .help("Only advisories whose id contains this text (case-insensitive)"),
        )
        .arg(
            Arg::new("country")
                .short('c')
                .long("country")
                .help("Only advisories headquartered in exactly this country (case-sensitive)"),
        )
        .arg(
            Arg::new("page")
                .short('p')
                .long("page")
                .value_parser(clap::value_parser!(usize))
                .default_value("1")
                .help("Page of results to show"),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .value_parser(clap::value_parser!(usize))
                .default_value("50")
                .help("Records per page"),
        )
        .arg(
            Arg::new("top")
                .long("top")
                .value_parser(clap::value_parser!(usize))
                .default_value("10")
                .help("Number of countries in the breakdown chart"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json", "html"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .action(ArgAction::SetTrue)
                .help("Force plain ASCII chart bars (no color)"),
        )
        .arg(
            Arg::new("list-vendors")
                .long("list-vendors")
                .action(ArgAction::SetTrue)
                .help("List distinct vendor names and exit"),
        )
        .arg(
            Arg::new("list-countries")
                .long("list-countries")
                .action(ArgAction::SetTrue)
                .help("List distinct headquarters countries and exit"),
        )
}

/// Extract filter criteria from matches
fn extract_criteria(matches: &ArgMatches) -> FilterCriteria {
    let get = |name: &str| {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default()
    };

    FilterCriteria {
        vendor: get("vendor"),
        advisory_id: get("advisory"),
        country: get("country"),
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required")
        .as_str();
    let page_size = *matches.get_one::<usize>("page-size").expect("defaulted");
    let page_index = *matches.get_one::<usize>("page").expect("defaulted");
    let top = *matches.get_one::<usize>("top").expect("defaulted");

    let parsed = parse_file(path).with_context(|| format!("could not load '{path}'"))?;
    for warning in &parsed.warnings {
        log::warn!("{path}:{}: {}", warning.line, warning.message);
    }

    let mut store = Dataset::with_page_size(page_size)?;
    store.load(parsed.records);

    if matches.get_flag("list-vendors") {
        return Ok(render::render_list(store.distinct_vendors()));
    }
    if matches.get_flag("list-countries") {
        return Ok(render::render_list(store.distinct_countries()));
    }

    store.apply_filter(extract_criteria(matches));
    store.goto_page(page_index);

    let statistics = summarize(store.filtered());
    let chart = CountryChart::from_counts(&top_by_country(store.filtered(), top), CHART_WIDTH);
    let table = AdvisoryTable::from_page(store.current_page(), &store.page_info());

    let report = DashboardReport {
        statistics,
        chart,
        table,
        page: store.page_info(),
        warnings: parsed.warnings,
    };

    let output = match matches
        .get_one::<String>("output")
        .expect("defaulted")
        .as_str()
    {
        "json" => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        "html" => render::render_html(&report),
        _ => {
            let styled = !matches.get_flag("plain") && render::terminal_supports_color();
            render::render_dashboard(&report, styled)
        }
    };

    Ok(output)
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
