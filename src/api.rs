//! Backend API configuration and typed wrappers over the three endpoints.
//!
//! Each wrapper issues a single fetch. JS-side failures are stringified and
//! handled by the calling page; nothing here retries or times out.

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8001";

/// Backend origin, resolved once at startup and provided via context.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Honor the `window.API_BASE` override if the hosting page set one,
    /// otherwise fall back to the local default origin.
    pub fn from_window() -> Self {
        let override_base = web_sys::window()
            .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("API_BASE")).ok())
            .and_then(|value| value.as_string())
            .filter(|base| !base.trim().is_empty());
        match override_base {
            Some(base) => Self::new(&base),
            None => Self::new(DEFAULT_API_BASE),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// -- Wire shapes --

/// Response of `GET /api/generate_tasks`. Every field is optional; the
/// caller decides what a missing prompt means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedTasks {
    #[serde(default)]
    pub task1: Option<String>,
    #[serde(default)]
    pub task2: Option<String>,
    #[serde(default)]
    pub task1_chart_data: Option<String>,
    #[serde(default)]
    pub task1_chart_image: Option<String>,
}

/// Body of `POST /api/grade_batch`.
#[derive(Debug, Clone, Serialize)]
pub struct GradeBatchRequest {
    pub task1_prompt: String,
    pub task1_essay: String,
    pub task2_prompt: String,
    pub task2_essay: String,
}

/// Per-criterion score in a grading report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CriterionScore {
    #[serde(default)]
    pub name: String,
    pub band: f64,
    #[serde(default)]
    pub comment: String,
}

/// One task's grading report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradeReport {
    pub overall_band: f64,
    #[serde(default)]
    pub criteria: Vec<CriterionScore>,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub suggestions: String,
    #[serde(default)]
    pub improved_version: Option<String>,
}

/// Batch grading outcome, with each task's report decoded independently.
#[derive(Debug, Clone)]
pub struct GradeBatchOutcome {
    pub task1: Option<GradeReport>,
    pub task2: Option<GradeReport>,
}

/// Decode one task's sub-object, tolerating anything that is not a
/// conforming report. `None` renders as the panel's no-data placeholder.
pub fn parse_report(value: Option<&serde_json::Value>) -> Option<GradeReport> {
    value.and_then(|value| serde_json::from_value(value.clone()).ok())
}

// -- Fetch plumbing --

fn js_error_message(error: JsValue) -> String {
    if let Some(text) = error.as_string() {
        return text;
    }
    js_sys::Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| "Failed to fetch".to_string())
}

fn get_request(url: &str) -> Result<Request, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    Request::new_with_str_and_init(url, &opts).map_err(js_error_message)
}

/// Run one fetch; non-2xx statuses become `"{status} {statusText}"` errors,
/// matching how the backend reports failures.
async fn fetch_ok(request: Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error_message)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;
    if !response.ok() {
        return Err(format!("{} {}", response.status(), response.status_text()));
    }
    Ok(response)
}

async fn fetch_json<T: serde::de::DeserializeOwned>(request: Request) -> Result<T, String> {
    let response = fetch_ok(request).await?;
    let body = JsFuture::from(response.json().map_err(js_error_message)?)
        .await
        .map_err(js_error_message)?;
    serde_wasm_bindgen::from_value(body).map_err(|error| error.to_string())
}

// -- Typed endpoint wrappers --

/// `GET /api/health`. Only the reachability signal matters.
pub async fn check_health(config: &ApiConfig) -> Result<(), String> {
    fetch_ok(get_request(&config.endpoint("/api/health"))?)
        .await
        .map(|_| ())
}

/// `GET /api/generate_tasks`.
pub async fn generate_tasks(config: &ApiConfig) -> Result<GeneratedTasks, String> {
    fetch_json(get_request(&config.endpoint("/api/generate_tasks"))?).await
}

/// `POST /api/grade_batch` with a JSON body. The response's `task1`/`task2`
/// are decoded independently so one malformed report cannot sink the other.
pub async fn grade_batch(
    config: &ApiConfig,
    body: &GradeBatchRequest,
) -> Result<GradeBatchOutcome, String> {
    let payload = serde_json::to_string(body).map_err(|error| error.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&payload));
    let request = Request::new_with_str_and_init(&config.endpoint("/api/grade_batch"), &opts)
        .map_err(js_error_message)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error_message)?;

    let value: serde_json::Value = fetch_json(request).await?;
    Ok(GradeBatchOutcome {
        task1: parse_report(value.get("task1")),
        task2: parse_report(value.get("task2")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_join() {
        let config = ApiConfig::new("http://127.0.0.1:8001");
        assert_eq!(
            config.endpoint("/api/health"),
            "http://127.0.0.1:8001/api/health"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let config = ApiConfig::new("https://grader.example.com/");
        assert_eq!(
            config.endpoint("/api/grade_batch"),
            "https://grader.example.com/api/grade_batch"
        );
    }

    #[test]
    fn test_grade_request_serializes_all_four_fields() {
        let request = GradeBatchRequest {
            task1_prompt: "p1".to_string(),
            task1_essay: "e1".to_string(),
            task2_prompt: "p2".to_string(),
            task2_essay: "e2".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "task1_prompt": "p1",
                "task1_essay": "e1",
                "task2_prompt": "p2",
                "task2_essay": "e2",
            })
        );
    }

    #[test]
    fn test_parse_report_full() {
        let value = json!({
            "overall_band": 6.5,
            "feedback": "f",
            "suggestions": "s",
            "criteria": [{"name": "TA", "band": 6, "comment": "c"}],
            "improved_version": "better"
        });
        let report = parse_report(Some(&value)).unwrap();
        assert_eq!(report.overall_band, 6.5);
        assert_eq!(report.criteria.len(), 1);
        assert_eq!(report.criteria[0].name, "TA");
        assert_eq!(report.criteria[0].band, 6.0);
        assert_eq!(report.improved_version.as_deref(), Some("better"));
    }

    #[test]
    fn test_parse_report_defaults_optional_fields() {
        let report = parse_report(Some(&json!({"overall_band": 5}))).unwrap();
        assert_eq!(report.overall_band, 5.0);
        assert!(report.criteria.is_empty());
        assert_eq!(report.feedback, "");
        assert_eq!(report.suggestions, "");
        assert_eq!(report.improved_version, None);
    }

    #[test]
    fn test_parse_report_rejects_non_objects() {
        assert_eq!(parse_report(None), None);
        assert_eq!(parse_report(Some(&json!(null))), None);
        assert_eq!(parse_report(Some(&json!(42))), None);
        assert_eq!(parse_report(Some(&json!("x"))), None);
        // An object without a usable band is malformed too.
        assert_eq!(parse_report(Some(&json!({"feedback": "f"}))), None);
    }

    #[test]
    fn test_generated_tasks_fields_all_optional() {
        let tasks: GeneratedTasks = serde_json::from_value(json!({})).unwrap();
        assert_eq!(tasks.task1, None);
        assert_eq!(tasks.task2, None);

        let tasks: GeneratedTasks = serde_json::from_value(json!({
            "task1": "T1",
            "task2": "T2",
            "task1_chart_image": "iVBORw0KG==",
            "task1_chart_data": null
        }))
        .unwrap();
        assert_eq!(tasks.task1.as_deref(), Some("T1"));
        assert_eq!(tasks.task1_chart_image.as_deref(), Some("iVBORw0KG=="));
        assert_eq!(tasks.task1_chart_data, None);
    }
}
