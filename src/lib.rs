//! SME Health - Financial health assessment and scenario projection for small businesses
//!
//! This library provides:
//! - Scenario projection engine (baseline snapshot + levers -> KPIs and monthly series)
//! - Chart geometry builder (series -> normalized plot coordinates and path descriptors)
//! - Analysis service client and offline statement analyzer
//! - Application state for the dashboard composition root

pub mod app;
pub mod chart;
pub mod projection;
pub mod scenario;
pub mod snapshot;

// Re-export commonly used types
pub use chart::{CanvasSpec, ChartGeometry, GeometryError};
pub use projection::{MonthPoint, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioParameters;
pub use snapshot::{AnalysisClient, AnalysisError, AnalysisReport, FinancialSnapshot};
