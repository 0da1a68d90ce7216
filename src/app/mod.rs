//! Application state for the dashboard composition root
//!
//! One owned state object replaces the original's ad hoc process-wide view,
//! language and last-analysis selectors. All mutation happens through the
//! event methods here; views receive the state by reference.

use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::scenario::ScenarioParameters;
use crate::snapshot::{AnalysisClient, AnalysisError, AnalysisReport, FinancialSnapshot};

/// The four dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Analysis,
    Forecast,
    Compliance,
}

/// UI language selector (string content lives with the view layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
        }
    }
}

/// Session state owned by the composition root
#[derive(Debug, Default)]
pub struct AppState {
    active_view: View,
    lang: Language,
    last_analysis: Option<AnalysisReport>,

    /// Levers of the forecast session; exist only while that view is active
    scenario: Option<ScenarioParameters>,

    /// At most one analysis request may be in flight per session
    upload_in_flight: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn set_language(&mut self, lang: Language) {
        self.lang = lang;
    }

    pub fn last_analysis(&self) -> Option<&AnalysisReport> {
        self.last_analysis.as_ref()
    }

    /// Baseline figures from the most recent analysis, if any
    pub fn snapshot(&self) -> Option<FinancialSnapshot> {
        self.last_analysis.as_ref().map(|report| report.snapshot())
    }

    /// Restore the most recent analysis on startup
    ///
    /// A restore failure is logged and leaves the state empty; the dashboard
    /// then renders placeholders until the first upload.
    pub async fn initialize(&mut self, client: &AnalysisClient) {
        match client.fetch_latest().await {
            Ok(Some(report)) => self.last_analysis = Some(report),
            Ok(None) => {}
            Err(err) => log::warn!("could not restore previous analysis: {err}"),
        }
    }

    /// Switch views
    ///
    /// Entering the forecast view starts a fresh scenario session with default
    /// levers; leaving it discards the session.
    pub fn navigate(&mut self, view: View) {
        if self.active_view == view {
            return;
        }
        self.scenario = if view == View::Forecast {
            Some(ScenarioParameters::default())
        } else {
            None
        };
        self.active_view = view;
    }

    /// Levers of the active forecast session
    pub fn scenario(&self) -> Option<&ScenarioParameters> {
        self.scenario.as_ref()
    }

    /// Mutable levers for slider events; `None` outside the forecast view
    pub fn scenario_mut(&mut self) -> Option<&mut ScenarioParameters> {
        self.scenario.as_mut()
    }

    /// Recompute the projection for the current snapshot and levers
    ///
    /// An explicit call rather than implicit re-render coupling; returns
    /// `None` outside the forecast view.
    pub fn project(&self, engine: &ProjectionEngine) -> Option<ProjectionResult> {
        let params = self.scenario.as_ref()?;
        Some(engine.project(self.snapshot().as_ref(), params))
    }

    /// Claim the single in-flight upload slot
    ///
    /// Returns false while a previous analysis request is still pending, so
    /// two completions can never race.
    pub fn begin_upload(&mut self) -> bool {
        if self.upload_in_flight {
            return false;
        }
        self.upload_in_flight = true;
        true
    }

    pub fn upload_in_flight(&self) -> bool {
        self.upload_in_flight
    }

    /// Record the outcome of the in-flight upload
    ///
    /// Success replaces the last analysis; failure is handed back to the
    /// caller for display and the prior analysis is kept.
    pub fn finish_upload(
        &mut self,
        outcome: Result<AnalysisReport, AnalysisError>,
    ) -> Result<(), AnalysisError> {
        self.upload_in_flight = false;
        let report = outcome?;
        self.last_analysis = Some(report);
        Ok(())
    }
}
