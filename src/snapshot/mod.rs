//! Baseline financial data and its providers
//!
//! A snapshot arrives either from the remote analysis service (statement
//! upload or latest-analysis restore) or from the offline statement analyzer.

mod client;
mod data;
pub mod local;

pub use client::{AnalysisClient, AnalysisError, ServiceConfig};
pub use data::{
    AiInsights, AnalysisMetrics, AnalysisReport, AnalysisResponse, ComplianceCheck,
    FinancialRatios, FinancialSnapshot, FALLBACK_EXPENSES, FALLBACK_REVENUE,
};
