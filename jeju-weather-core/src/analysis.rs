//! Abstraction over the remote comparison-report service.
//!
//! Series generation completes synchronously before any analysis request
//! is issued, so a failed request can never disturb the rendered table.
//! The request is a single attempt with no retry; callers cancel by
//! dropping the future.

use std::fmt::Debug;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{Metric, RegionSeries};

pub mod gemini;

pub use gemini::GeminiAnalysisClient;

/// Everything the remote analysis consumes: the raw per-region series
/// plus the selection metadata used for labeling.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub series: Vec<RegionSeries>,
    pub metric: Metric,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisRequest {
    pub fn region_names(&self) -> Vec<&str> {
        self.series.iter().map(|rs| rs.region.as_str()).collect()
    }
}

/// Failure of the single outbound analysis attempt.
///
/// Variants distinguish transport from remote errors for logging, but
/// every one surfaces to the user as the same "analysis unavailable"
/// message via [`AnalysisError::user_message`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to reach the analysis service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Analysis service returned status {status}: {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse the analysis response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Analysis service returned no text")]
    EmptyResponse,
}

impl AnalysisError {
    /// User-facing message, identical for every failure class.
    pub fn user_message(&self) -> &'static str {
        "AI 분석 중 오류가 발생했습니다. API 키 또는 네트워크 연결을 확인해주세요."
    }
}

#[async_trait]
pub trait AnalysisClient: Send + Sync + Debug {
    /// Send one analysis request and return the report prose.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AnalysisError>;
}
