//! Offline statement analyzer
//!
//! Mirrors what the analysis service computes for a CSV statement, so the
//! CLI tools work without the service running: metric extraction from
//! `type`/`amount` rows and the deterministic three-tier narrative the
//! service falls back to when no language model is reachable.

use std::error::Error;
use std::io;

use chrono::Utc;

use super::data::{
    AiInsights, AnalysisMetrics, AnalysisReport, ComplianceCheck, FinancialRatios,
};

/// One row of an uploaded financial statement
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    /// Free-text category, e.g. "Revenue", "Operating Expense"
    pub entry_type: String,

    pub amount: f64,
}

/// Parse a CSV statement into ledger entries
///
/// Headers are normalized (lowercased, spaces to underscores) before the
/// `type` and `amount` columns are located. Rows with a non-numeric amount
/// contribute zero.
pub fn parse_statement<R: io::Read>(reader: R) -> Result<Vec<LedgerEntry>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase().replace(' ', "_"))
        .collect();

    let type_idx = headers.iter().position(|h| h == "type");
    let amount_idx = headers.iter().position(|h| h == "amount");
    let (type_idx, amount_idx) = match (type_idx, amount_idx) {
        (Some(t), Some(a)) => (t, a),
        _ => return Err("statement is missing 'type' or 'amount' columns".into()),
    };

    let mut entries = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let entry_type = record.get(type_idx).unwrap_or("").trim().to_string();
        let amount = record
            .get(amount_idx)
            .unwrap_or("")
            .trim()
            .parse::<f64>()
            .unwrap_or(0.0);
        entries.push(LedgerEntry { entry_type, amount });
    }

    log::debug!("parsed {} statement rows", entries.len());
    Ok(entries)
}

/// Derive core metrics from ledger entries
///
/// Revenue rows are those whose type mentions rev/income, expense rows
/// mention exp/cost; everything else is ignored.
pub fn calculate_metrics(entries: &[LedgerEntry]) -> AnalysisMetrics {
    let mut revenue = 0.0;
    let mut expenses = 0.0;

    for entry in entries {
        let kind = entry.entry_type.to_lowercase();
        if kind.contains("rev") || kind.contains("income") {
            revenue += entry.amount;
        } else if kind.contains("exp") || kind.contains("cost") {
            expenses += entry.amount;
        }
    }

    let net_profit = revenue - expenses;
    let profit_margin = if revenue > 0.0 {
        round2(net_profit / revenue * 100.0)
    } else {
        0.0
    };

    AnalysisMetrics {
        revenue,
        expenses,
        net_profit,
        ratios: FinancialRatios {
            // Placeholder pending balance-sheet ingestion
            liquidity_ratio: 1.5,
            profit_margin,
        },
    }
}

/// Deterministic insight narrative for a set of metrics
///
/// Three tiers keyed on profitability: margin above 15% reads as positive,
/// any profit as stable, a net loss as critical.
pub fn mock_insights(metrics: &AnalysisMetrics, industry: &str) -> AiInsights {
    let profit_margin = metrics.ratios.profit_margin;
    let is_profitable = metrics.net_profit > 0.0;

    if is_profitable && profit_margin > 15.0 {
        AiInsights {
            summary: format!(
                "Strong financial performance in the {industry} sector. Your profit margin \
                 of {profit_margin}% is significantly above industry benchmarks."
            ),
            recommendations: vec![
                "Explore reinvestment opportunities for business expansion.".to_string(),
                "Consider building a long-term capital reserve for future growth.".to_string(),
                "Evaluate tax-saving investment options for the current fiscal year.".to_string(),
            ],
            risk_level: "Low".to_string(),
            compliance_score: Some(94.0),
            compliance_checks: Some(vec![
                check("GST Filing", "Compliant", "On Time", "\u{2705}"),
                check("TDS Returns", "Compliant", "Up to date", "\u{2705}"),
                check("Labor Laws", "Compliant", "Verified", "\u{2705}"),
            ]),
        }
    } else if is_profitable {
        AiInsights {
            summary: format!(
                "Your business in the {industry} sector is maintaining stability with a \
                 net profit of ${:.0}.",
                metrics.net_profit
            ),
            recommendations: vec![
                "Focus on reducing operational overhead to improve margins.".to_string(),
                "Optimize inventory turnover to free up working capital.".to_string(),
                "Review customer payment cycles to ensure consistent cash flow.".to_string(),
            ],
            risk_level: "Medium".to_string(),
            compliance_score: Some(82.0),
            compliance_checks: Some(vec![
                check("GST Filing", "Compliant", "On Time", "\u{2705}"),
                check("TDS Returns", "Pending", "Due in 5 days", "\u{26a0}\u{fe0f}"),
                check("Labor Laws", "Action Required", "Renewal Needed", "\u{274c}"),
            ]),
        }
    } else {
        AiInsights {
            summary: format!(
                "Financial stress detected. The current net loss indicates that operating \
                 costs are exceeding revenue in the {industry} segment."
            ),
            recommendations: vec![
                "Immediate audit of all non-essential expenses.".to_string(),
                "Negotiate extended payment terms with key suppliers.".to_string(),
                "Explore short-term working capital financing to bridge cash gaps.".to_string(),
            ],
            risk_level: "High".to_string(),
            compliance_score: Some(45.0),
            compliance_checks: Some(vec![
                check("GST Filing", "Late", "Overdue", "\u{274c}"),
                check("TDS Returns", "Overdue", "Immediate action", "\u{274c}"),
                check("Labor Laws", "Non-compliant", "Warning issued", "\u{26a0}\u{fe0f}"),
            ]),
        }
    }
}

/// Parse, measure, and narrate one statement end-to-end
pub fn analyze_statement<R: io::Read>(
    reader: R,
    industry: &str,
) -> Result<AnalysisReport, Box<dyn Error>> {
    let entries = parse_statement(reader)?;
    let metrics = calculate_metrics(&entries);
    let insights = mock_insights(&metrics, industry);

    Ok(AnalysisReport {
        metrics,
        insights,
        fetched_at: Utc::now(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn check(title: &str, status: &str, date: &str, icon: &str) -> ComplianceCheck {
    ComplianceCheck {
        title: title.to_string(),
        status: status.to_string(),
        date: date.to_string(),
        icon: icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATEMENT: &str = "Type,Amount\n\
                             Revenue,90000\n\
                             Other Income,10000\n\
                             Operating Expense,55000\n\
                             Cost of Goods,15000\n\
                             Note,123\n";

    #[test]
    fn test_parse_statement_normalizes_headers() {
        let entries = parse_statement(STATEMENT.as_bytes()).expect("parses");
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].entry_type, "Revenue");
        assert_eq!(entries[0].amount, 90_000.0);
    }

    #[test]
    fn test_parse_statement_missing_columns() {
        let result = parse_statement("category,value\nrevenue,1\n".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_calculate_metrics() {
        let entries = parse_statement(STATEMENT.as_bytes()).expect("parses");
        let metrics = calculate_metrics(&entries);

        // "Note" rows are neither revenue nor expense
        assert_eq!(metrics.revenue, 100_000.0);
        assert_eq!(metrics.expenses, 70_000.0);
        assert_eq!(metrics.net_profit, 30_000.0);
        assert_eq!(metrics.ratios.profit_margin, 30.0);
        assert_eq!(metrics.ratios.liquidity_ratio, 1.5);
    }

    #[test]
    fn test_margin_rounds_to_two_decimals() {
        let entries = vec![
            LedgerEntry {
                entry_type: "revenue".to_string(),
                amount: 90_000.0,
            },
            LedgerEntry {
                entry_type: "expense".to_string(),
                amount: 60_000.0,
            },
        ];
        let metrics = calculate_metrics(&entries);
        // 30000 / 90000 * 100 = 33.333... -> 33.33
        assert_eq!(metrics.ratios.profit_margin, 33.33);
    }

    #[test]
    fn test_zero_revenue_margin_is_zero() {
        let entries = vec![LedgerEntry {
            entry_type: "expense".to_string(),
            amount: 5_000.0,
        }];
        let metrics = calculate_metrics(&entries);
        assert_eq!(metrics.ratios.profit_margin, 0.0);
        assert_eq!(metrics.net_profit, -5_000.0);
    }

    #[test]
    fn test_insight_tiers() {
        let entries = parse_statement(STATEMENT.as_bytes()).expect("parses");
        let strong = calculate_metrics(&entries);
        let insights = mock_insights(&strong, "retail");
        assert_eq!(insights.risk_level, "Low");
        assert_eq!(insights.compliance_score, Some(94.0));
        assert!(insights.summary.contains("retail"));

        let thin = AnalysisMetrics {
            revenue: 100_000.0,
            expenses: 95_000.0,
            net_profit: 5_000.0,
            ratios: FinancialRatios {
                liquidity_ratio: 1.5,
                profit_margin: 5.0,
            },
        };
        assert_eq!(mock_insights(&thin, "retail").risk_level, "Medium");

        let loss = AnalysisMetrics {
            revenue: 40_000.0,
            expenses: 55_000.0,
            net_profit: -15_000.0,
            ratios: FinancialRatios {
                liquidity_ratio: 1.5,
                profit_margin: -37.5,
            },
        };
        let critical = mock_insights(&loss, "manufacturing");
        assert_eq!(critical.risk_level, "High");
        assert_eq!(critical.recommendations.len(), 3);
    }

    #[test]
    fn test_analyze_statement_end_to_end() {
        let report = analyze_statement(STATEMENT.as_bytes(), "retail").expect("analyzes");
        assert_eq!(report.metrics.revenue, 100_000.0);
        assert_eq!(report.insights.risk_level, "Low");
        assert_eq!(report.snapshot().net_profit(), 30_000.0);
    }
}
