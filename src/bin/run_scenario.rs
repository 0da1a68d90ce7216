//! Project one what-if scenario and print the resulting KPIs
//!
//! The baseline comes from a local CSV statement, the analysis service's
//! latest record, or the built-in fallback when neither is given.

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use sme_health::snapshot::{local, ServiceConfig};
use sme_health::{
    AnalysisClient, FinancialSnapshot, ProjectionEngine, ScenarioParameters,
};

#[derive(Parser)]
#[command(about = "Project a what-if scenario for one business baseline")]
struct Args {
    /// Monthly growth investment (ad spend) in thousands, 5-100
    #[arg(long, default_value_t = 24)]
    ad_spend: u32,

    /// Operational efficiency in percent, 20-100
    #[arg(long, default_value_t = 82)]
    efficiency: u32,

    /// Analyze a local CSV statement for the baseline
    #[arg(long)]
    statement: Option<PathBuf>,

    /// Send the statement to the analysis service instead of analyzing locally
    #[arg(long, requires = "statement")]
    remote: bool,

    /// Restore the latest analysis from the service for the baseline
    #[arg(long)]
    fetch_latest: bool,

    /// Industry label used by the offline narrative
    #[arg(long, default_value = "services")]
    industry: String,

    /// Print the full projection result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let snapshot: Option<FinancialSnapshot> = if let Some(path) = &args.statement {
        let report = if args.remote {
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("statement.csv");
            let client = AnalysisClient::new(ServiceConfig::from_env());
            client.upload_statement(file_name, bytes).await?
        } else {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            local::analyze_statement(file, &args.industry)
                .map_err(|err| anyhow::anyhow!("analyzing {}: {err}", path.display()))?
        };
        println!(
            "Analyzed {}: revenue=${:.0}, expenses=${:.0}, risk={}",
            path.display(),
            report.metrics.revenue,
            report.metrics.expenses,
            report.insights.risk_level
        );
        Some(report.snapshot())
    } else if args.fetch_latest {
        let client = AnalysisClient::new(ServiceConfig::from_env());
        match client.fetch_latest().await? {
            Some(report) => {
                println!(
                    "Restored analysis from {}: revenue=${:.0}, expenses=${:.0}",
                    report.fetched_at, report.metrics.revenue, report.metrics.expenses
                );
                Some(report.snapshot())
            }
            None => {
                println!("No analysis on record; using the fallback baseline.");
                None
            }
        }
    } else {
        None
    };

    let params = ScenarioParameters::new(args.ad_spend, args.efficiency);
    let engine = ProjectionEngine::default();
    let result = engine.project(snapshot.as_ref(), &params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "\nScenario: ad spend ${}k/mo, efficiency {}%",
        params.ad_spend_level(),
        params.efficiency_level()
    );
    println!("  Growth factor:        {:.3}", result.growth_factor);
    println!("  Projected revenue:    ${:.0}", result.projected_revenue);
    println!("  Projected profit:     ${:.0}", result.projected_profit);
    println!("  Estimated ROI:        {:.1}%", result.roi_percent);
    println!(
        "  Projected runway:     {:.0} months",
        result.projected_runway_months
    );
    println!(
        "  Engine confidence:    {:.0}%",
        result.engine_confidence_pct
    );
    println!(
        "  Next-quarter revenue: ${:.0}",
        result.projected_quarter_revenue
    );

    println!("\nMonth | Projected ($k)");
    for point in &result.monthly_series {
        println!("{:>5} | {:>10.1}", point.month, point.value);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
