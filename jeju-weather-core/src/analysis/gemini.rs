//! Gemini-backed implementation of [`AnalysisClient`].

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AnalysisClient, AnalysisError, AnalysisRequest};

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Returned without issuing a request when every series is empty.
const NO_DATA_MESSAGE: &str = "분석할 데이터가 없습니다.";

#[derive(Debug, Clone)]
pub struct GeminiAnalysisClient {
    api_key: String,
    model: String,
    http: Client,
}

impl GeminiAnalysisClient {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl AnalysisClient for GeminiAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AnalysisError> {
        if request.series.iter().all(|rs| rs.points.is_empty()) {
            return Ok(NO_DATA_MESSAGE.to_string());
        }

        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let body = GenerateContentRequest::from_prompt(build_prompt(request));

        debug!(model = %self.model, regions = request.series.len(), "issuing analysis request");

        let res = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            return Err(AnalysisError::Remote {
                status,
                body: truncate_body(&text),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        parsed.into_text().ok_or(AnalysisError::EmptyResponse)
    }
}

/// Korean comparison-report prompt: per-region daily listings followed by
/// the requested report structure.
fn build_prompt(request: &AnalysisRequest) -> String {
    let metric = request.metric;

    let data_string = request
        .series
        .iter()
        .map(|rs| {
            let daily = rs
                .points
                .iter()
                .map(|p| format!("  - {}: {}{}", p.date, p.value, metric.unit()))
                .collect::<Vec<_>>()
                .join("\n");
            format!("**{} 데이터:**\n{daily}", rs.region)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let regions = request.region_names().join(", ");
    let label = metric.label();

    format!(
        "당신은 제주도 기상 데이터 비교 분석 전문가입니다.\n\
         다음 여러 지역의 데이터를 비교 분석하여 사용자에게 친절하고 상세한 설명을 제공해주세요. \
         Markdown 형식을 사용해 제목과 목록을 보기 좋게 꾸며주세요.\n\n\
         - **분석 지역**: 제주도 {regions}\n\
         - **분석 항목**: {label}\n\
         - **분석 기간**: {start} ~ {end}\n\n\
         **지역별 상세 데이터:**\n\
         {data_string}\n\n\
         위 데이터를 기반으로 다음 항목들을 포함하여 **비교 분석 리포트**를 작성해주세요:\n\n\
         1.  **종합 분석 및 비교 요약**: 각 지역의 전반적인 {label} 트렌드를 요약하고, \
         지역 간의 주요 차이점과 공통점을 비교 분석해주세요.\n\
         2.  **지역별 주요 특징**: 각 지역별로 최고값과 최저값을 기록한 날짜와 수치를 언급하고, \
         그 의미를 간략히 설명해주세요.\n\
         3.  **결론 및 조언**: 전체적인 비교 분석 결과를 바탕으로 결론을 내리고, \
         여행객 또는 주민을 위한 유용한 조언을 덧붙여주세요.\n\n\
         전문적인 용어를 사용하되, 일반인도 이해하기 쉽게 설명해주세요.",
        start = request.start,
        end = request.end,
    )
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
