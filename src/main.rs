use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use std::fs;
use tracing_subscriber::EnvFilter;

use u_rental::allocator::{AllocationKpi, Infeasibility};
use u_rental::book::AddOutcome;
use u_rental::models::Activity;
use u_rental::report::ItemReport;
use u_rental::request::CheckRequest;

const USAGE: &str = "usage: u-rental <request.json> [--json]";

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Serialize)]
struct Summary {
    capacity: usize,
    candidate: Activity,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ItemReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kpi: Option<AllocationKpi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<Infeasibility>,
}

fn main() -> Result<()> {
    enable_tracing();

    let mut path: Option<String> = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if arg == "-h" || arg == "--help" {
            println!("{USAGE}");
            return Ok(());
        } else if path.is_none() {
            path = Some(arg);
        } else {
            bail!("unexpected argument '{arg}'\n{USAGE}");
        }
    }
    let Some(path) = path else {
        bail!(USAGE);
    };

    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let request = CheckRequest::from_json(&text).with_context(|| format!("parsing {path}"))?;
    let capacity = request.capacity;
    let (mut book, candidate) = request.into_book().map_err(|errors| {
        let lines: Vec<String> = errors.iter().map(|e| format!("  {e}")).collect();
        anyhow!("invalid request:\n{}", lines.join("\n"))
    })?;

    if !json {
        println!("Number of items: {capacity}");
        let listing: Vec<String> = book.listing().iter().map(|a| a.to_string()).collect();
        println!("Existing rentals: {}", listing.join(" "));
        println!();
    }

    let shown = candidate.clone();
    let summary = match book.try_add(candidate) {
        AddOutcome::Accepted { allocation, .. } => Summary {
            capacity,
            candidate: shown,
            accepted: true,
            report: Some(ItemReport::new(book.rentals(), &allocation)),
            kpi: Some(AllocationKpi::calculate(&allocation, book.rentals())),
            rejection: None,
        },
        AddOutcome::Rejected { candidate, reason } => Summary {
            capacity,
            candidate,
            accepted: false,
            report: None,
            kpi: None,
            rejection: Some(reason),
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.accepted {
        println!("Rental {} can be added", summary.candidate);
    } else {
        println!("Rental {} cannot be added", summary.candidate);
    }
    if let Some(report) = &summary.report {
        println!();
        print!("{report}");
    }
    Ok(())
}
