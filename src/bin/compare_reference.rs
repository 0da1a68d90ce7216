//! Compare engine output with values captured from the reference dashboard
//! Test case: fallback baseline (92k revenue / 60.5k expenses)

use sme_health::{ProjectionEngine, ScenarioParameters};

fn main() {
    env_logger::init();

    let engine = ProjectionEngine::default();

    // Reference values (from the dashboard's simulation view)
    let reference = [
        // (ad, efficiency, growth, revenue, profit, roi%)
        (5u32, 20u32, 0.025, 94_300.0, 32_287.5, 31.5),
        (24, 82, 0.492, 137_264.0, 69_504.0, 316.7),
        (50, 50, 0.625, 149_500.0, 73_875.0, 169.5),
        (100, 100, 2.5, 322_000.0, 231_250.0, 399.5),
    ];

    println!("Engine vs reference dashboard (fallback baseline)");
    println!(
        "{:<5} {:<5} {:<10} {:<14} {:<14} {:<10} {:<12}",
        "Ad", "Eff", "Growth", "Revenue", "Profit", "ROI%", "MaxDiff"
    );

    for (ad, efficiency, ref_growth, ref_revenue, ref_profit, ref_roi) in reference {
        let result = engine.project(None, &ScenarioParameters::new(ad, efficiency));

        let diffs = [
            result.growth_factor - ref_growth,
            result.projected_revenue - ref_revenue,
            result.projected_profit - ref_profit,
            result.roi_percent - ref_roi,
        ];
        let max_diff = diffs.iter().fold(0.0f64, |acc, d| acc.max(d.abs()));

        println!(
            "{:<5} {:<5} {:<10.4} {:<14.2} {:<14.2} {:<10.1} {:<12.8}",
            ad,
            efficiency,
            result.growth_factor,
            result.projected_revenue,
            result.projected_profit,
            result.roi_percent,
            max_diff,
        );
    }
}
