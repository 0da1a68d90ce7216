//! Snapshot and analysis-service data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Fallback Baseline
// ============================================================================
// Used by the projection engine whenever no analyzed statement is available,
// so the forecast view stays operable before the first upload. Keep these in
// sync with the reference dashboard's demo baseline.

/// Fallback baseline revenue when no snapshot is available
pub const FALLBACK_REVENUE: f64 = 92_000.0;

/// Fallback baseline expenses when no snapshot is available
pub const FALLBACK_EXPENSES: f64 = 60_500.0;

/// Baseline figures for one analyzed financial statement
///
/// Immutable once produced; both fields are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Baseline top-line revenue
    pub revenue: f64,

    /// Baseline cost
    pub expenses: f64,
}

impl FinancialSnapshot {
    pub fn new(revenue: f64, expenses: f64) -> Self {
        Self { revenue, expenses }
    }

    /// The documented fallback baseline (92k revenue / 60.5k expenses)
    pub fn fallback() -> Self {
        Self {
            revenue: FALLBACK_REVENUE,
            expenses: FALLBACK_EXPENSES,
        }
    }

    /// Net profit; may be negative when expenses exceed revenue
    pub fn net_profit(&self) -> f64 {
        self.revenue - self.expenses
    }
}

// ============================================================================
// Analysis service wire contract
// ============================================================================

/// Derived ratios carried alongside the core metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatios {
    #[serde(default)]
    pub liquidity_ratio: f64,

    /// Net profit as a percentage of revenue, two decimals
    #[serde(default)]
    pub profit_margin: f64,
}

/// Core metrics computed per analyzed statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    pub revenue: f64,
    pub expenses: f64,
    pub net_profit: f64,
    pub ratios: FinancialRatios,
}

/// One item of the regulatory checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub title: String,
    pub status: String,
    pub date: String,
    pub icon: String,
}

/// AI-generated narrative attached to an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsights {
    pub summary: String,
    pub recommendations: Vec<String>,
    pub risk_level: String,

    /// 0-100, present when the service scored the sector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_checks: Option<Vec<ComplianceCheck>>,
}

/// Raw response envelope from the analysis service
///
/// `status` is `"success"` on a completed analysis, `"no_data"` when nothing
/// has been analyzed yet, anything else is a rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,

    #[serde(default)]
    pub detail: Option<String>,

    #[serde(default)]
    pub statement_id: Option<i64>,

    #[serde(default)]
    pub metrics: Option<AnalysisMetrics>,

    #[serde(default)]
    pub ai_insights: Option<AiInsights>,
}

/// What the application retains from one successful analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metrics: AnalysisMetrics,
    pub insights: AiInsights,

    /// When this report was received from the service
    pub fetched_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Baseline figures for the projection engine
    pub fn snapshot(&self) -> FinancialSnapshot {
        FinancialSnapshot::new(self.metrics.revenue, self.metrics.expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_profit_may_be_negative() {
        let healthy = FinancialSnapshot::new(100_000.0, 60_000.0);
        assert_eq!(healthy.net_profit(), 40_000.0);

        let stressed = FinancialSnapshot::new(40_000.0, 55_000.0);
        assert_eq!(stressed.net_profit(), -15_000.0);
    }

    #[test]
    fn test_fallback_baseline() {
        let fallback = FinancialSnapshot::fallback();
        assert_eq!(fallback.revenue, 92_000.0);
        assert_eq!(fallback.expenses, 60_500.0);
        assert_eq!(fallback.net_profit(), 31_500.0);
    }

    #[test]
    fn test_success_response_deserializes() {
        let body = r#"{
            "status": "success",
            "statement_id": 7,
            "metrics": {
                "revenue": 120000.0,
                "expenses": 80000.0,
                "net_profit": 40000.0,
                "ratios": {"liquidity_ratio": 1.5, "profit_margin": 33.33}
            },
            "ai_insights": {
                "summary": "Strong performance.",
                "recommendations": ["Reinvest.", "Build reserves.", "Review taxes."],
                "risk_level": "Low",
                "compliance_score": 94,
                "compliance_checks": [
                    {"title": "GST Filing", "status": "Compliant", "date": "On Time", "icon": "OK"}
                ]
            }
        }"#;

        let response: AnalysisResponse = serde_json::from_str(body).expect("valid response");
        assert_eq!(response.status, "success");
        assert_eq!(response.statement_id, Some(7));

        let metrics = response.metrics.expect("metrics present");
        assert_eq!(metrics.revenue, 120_000.0);
        assert_eq!(metrics.ratios.profit_margin, 33.33);

        let insights = response.ai_insights.expect("insights present");
        assert_eq!(insights.recommendations.len(), 3);
        assert_eq!(insights.compliance_score, Some(94.0));
        assert_eq!(insights.compliance_checks.map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_no_data_response_deserializes() {
        let response: AnalysisResponse =
            serde_json::from_str(r#"{"status": "no_data"}"#).expect("valid response");
        assert_eq!(response.status, "no_data");
        assert!(response.metrics.is_none());
        assert!(response.ai_insights.is_none());
    }

    #[test]
    fn test_report_snapshot() {
        let report = AnalysisReport {
            metrics: AnalysisMetrics {
                revenue: 95_000.0,
                expenses: 70_000.0,
                net_profit: 25_000.0,
                ratios: FinancialRatios {
                    liquidity_ratio: 1.5,
                    profit_margin: 26.32,
                },
            },
            insights: AiInsights {
                summary: "Stable.".to_string(),
                recommendations: vec![],
                risk_level: "Medium".to_string(),
                compliance_score: None,
                compliance_checks: None,
            },
            fetched_at: Utc::now(),
        };

        let snapshot = report.snapshot();
        assert_eq!(snapshot.revenue, 95_000.0);
        assert_eq!(snapshot.expenses, 70_000.0);
    }
}
