//! Typed UI state for the grading page.
//!
//! The handlers never read display nodes back; everything they need lives
//! in these values, held in signals by the page.

use crate::api::GradeReport;

/// Where writing prompts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Prompts are generated by the backend.
    #[default]
    Auto,
    /// Prompts are typed in by the user.
    Manual,
}

impl Mode {
    pub fn is_manual(self) -> bool {
        self == Mode::Manual
    }
}

/// One prompt slot. Only `Ready` text may be submitted for grading.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PromptState {
    /// Nothing entered or generated yet.
    #[default]
    Unset,
    /// Generation request in flight.
    Loading,
    /// Generation failed; the message is what the slot displays.
    Error(String),
    Ready(String),
}

impl PromptState {
    /// Build from a manually entered, already trimmed field. An empty field
    /// falls back to the unset placeholder rather than blocking the sync.
    pub fn from_manual(text: &str) -> Self {
        if text.is_empty() {
            PromptState::Unset
        } else {
            PromptState::Ready(text.to_string())
        }
    }

    pub fn ready_text(&self) -> Option<&str> {
        match self {
            PromptState::Ready(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PromptState::Loading)
    }

    /// The text the prompt card shows; `unset_hint` names the missing task.
    pub fn display_text(&self, unset_hint: &str) -> String {
        match self {
            PromptState::Unset => unset_hint.to_string(),
            PromptState::Loading => "Đang sinh đề...".to_string(),
            PromptState::Error(message) => message.clone(),
            PromptState::Ready(text) => text.clone(),
        }
    }
}

/// Task 1 chart display. An image always wins over the textual fallback.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartView {
    #[default]
    Hidden,
    /// Base64 PNG bytes, rendered as a data URI.
    Image(String),
    /// Tabular/textual chart description, rendered preformatted.
    Text(String),
}

/// Pick the chart view for a generated-tasks response. Blank or
/// whitespace-only fields count as absent.
pub fn chart_view(image: Option<&str>, data: Option<&str>) -> ChartView {
    let image = image.map(str::trim).unwrap_or_default();
    let data = data.map(str::trim).unwrap_or_default();
    if !image.is_empty() {
        ChartView::Image(image.to_string())
    } else if !data.is_empty() {
        ChartView::Text(data.to_string())
    } else {
        ChartView::Hidden
    }
}

/// What one result panel shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GradePanelState {
    #[default]
    Idle,
    Loading,
    Error(String),
    /// The backend answered but this task's report was missing or malformed.
    NoData,
    Ready(GradeReport),
}

impl GradePanelState {
    pub fn from_parsed(report: Option<GradeReport>) -> Self {
        match report {
            Some(report) => GradePanelState::Ready(report),
            None => GradePanelState::NoData,
        }
    }
}

/// Content of the status line under the prompt controls. `Ok` is rendered
/// in the success color, `Error` in the error color.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Ok(String),
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_auto() {
        assert_eq!(Mode::default(), Mode::Auto);
        assert!(!Mode::default().is_manual());
    }

    #[test]
    fn test_chart_prefers_image_over_text() {
        let view = chart_view(Some("iVBORw0KG=="), Some("Year,Value\n2020,10"));
        assert_eq!(view, ChartView::Image("iVBORw0KG==".to_string()));
    }

    #[test]
    fn test_chart_falls_back_to_text() {
        let view = chart_view(None, Some("Year,Value\n2020,10"));
        assert_eq!(view, ChartView::Text("Year,Value\n2020,10".to_string()));

        let view = chart_view(Some("   "), Some("Year,Value"));
        assert_eq!(view, ChartView::Text("Year,Value".to_string()));
    }

    #[test]
    fn test_chart_hidden_without_material() {
        assert_eq!(chart_view(None, None), ChartView::Hidden);
        assert_eq!(chart_view(Some(""), Some("  ")), ChartView::Hidden);
    }

    #[test]
    fn test_only_ready_prompts_submit() {
        assert_eq!(PromptState::Unset.ready_text(), None);
        assert_eq!(PromptState::Loading.ready_text(), None);
        assert_eq!(PromptState::Error("Lỗi khi lấy đề Task 1".to_string()).ready_text(), None);
        assert_eq!(
            PromptState::Ready("Describe the chart.".to_string()).ready_text(),
            Some("Describe the chart.")
        );
    }

    #[test]
    fn test_manual_prompt_sync() {
        assert_eq!(PromptState::from_manual(""), PromptState::Unset);
        assert_eq!(
            PromptState::from_manual("Some people think..."),
            PromptState::Ready("Some people think...".to_string())
        );
    }

    #[test]
    fn test_prompt_display_text() {
        assert_eq!(
            PromptState::Unset.display_text("Chưa nhập đề Task 1."),
            "Chưa nhập đề Task 1."
        );
        assert_eq!(PromptState::Loading.display_text(""), "Đang sinh đề...");
        assert_eq!(
            PromptState::Error("Không lấy được đề Task 2.".to_string()).display_text(""),
            "Không lấy được đề Task 2."
        );
    }

    #[test]
    fn test_panel_state_from_parsed() {
        assert_eq!(GradePanelState::from_parsed(None), GradePanelState::NoData);
        let report = GradeReport {
            overall_band: 6.5,
            criteria: vec![],
            feedback: "f".to_string(),
            suggestions: "s".to_string(),
            improved_version: None,
        };
        assert_eq!(
            GradePanelState::from_parsed(Some(report.clone())),
            GradePanelState::Ready(report)
        );
    }
}
