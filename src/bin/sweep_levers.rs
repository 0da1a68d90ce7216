//! Sensitivity sweep over the full lever grid
//!
//! Projects every (ad spend, efficiency) combination against the fallback
//! baseline and writes the KPI surface as CSV for spreadsheet comparison.

use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use sme_health::scenario::{AD_SPEND_MAX, AD_SPEND_MIN, EFFICIENCY_MAX, EFFICIENCY_MIN};
use sme_health::{ProjectionEngine, ScenarioParameters};

/// One row of the sweep output
struct SweepRow {
    ad_spend: u32,
    efficiency: u32,
    growth_factor: f64,
    projected_revenue: f64,
    projected_profit: f64,
    roi_percent: f64,
}

fn main() {
    env_logger::init();

    let start = Instant::now();
    let engine = ProjectionEngine::default();

    let grid: Vec<(u32, u32)> = (AD_SPEND_MIN..=AD_SPEND_MAX)
        .flat_map(|ad| (EFFICIENCY_MIN..=EFFICIENCY_MAX).map(move |eff| (ad, eff)))
        .collect();
    println!("Projecting {} scenarios...", grid.len());

    // Run projections in parallel
    let rows: Vec<SweepRow> = grid
        .par_iter()
        .map(|&(ad_spend, efficiency)| {
            let params = ScenarioParameters::new(ad_spend, efficiency);
            let result = engine.project(None, &params);
            SweepRow {
                ad_spend,
                efficiency,
                growth_factor: result.growth_factor,
                projected_revenue: result.projected_revenue,
                projected_profit: result.projected_profit,
                roi_percent: result.roi_percent,
            }
        })
        .collect();

    println!("Projections complete in {:?}", start.elapsed());

    // Write output
    let output_path = "lever_sweep_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "AdSpend,Efficiency,GrowthFactor,ProjectedRevenue,ProjectedProfit,RoiPercent"
    )
    .unwrap();

    for row in &rows {
        writeln!(
            file,
            "{},{},{:.4},{:.2},{:.2},{:.1}",
            row.ad_spend,
            row.efficiency,
            row.growth_factor,
            row.projected_revenue,
            row.projected_profit,
            row.roi_percent,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Print summary stats
    let best_roi = rows
        .iter()
        .max_by(|a, b| a.roi_percent.total_cmp(&b.roi_percent))
        .expect("non-empty grid");
    let best_profit = rows
        .iter()
        .max_by(|a, b| a.projected_profit.total_cmp(&b.projected_profit))
        .expect("non-empty grid");

    println!("\nSweep Summary:");
    println!(
        "  Best ROI:    {:.1}% at ad=${}k, efficiency={}%",
        best_roi.roi_percent, best_roi.ad_spend, best_roi.efficiency
    );
    println!(
        "  Best profit: ${:.0} at ad=${}k, efficiency={}%",
        best_profit.projected_profit, best_profit.ad_spend, best_profit.efficiency
    );

    println!("\nTotal time: {:?}", start.elapsed());
}
