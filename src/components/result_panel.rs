//! Result panel for one graded task.
//!
//! Shows the overall band, feedback, suggestions, one card per criterion
//! and, when present, the improved version of the essay.

use leptos::prelude::*;

use crate::api::{CriterionScore, GradeReport};
use crate::markup::{format_band, text_to_html};
use crate::state::GradePanelState;

/// One task's result panel. Every free-text field coming from the backend
/// is escaped by `text_to_html` before being inserted as markup.
#[component]
pub fn ResultPanel(
    /// Panel heading, e.g. "Task 1"
    #[prop(into)]
    label: String,
    state: ReadSignal<GradePanelState>,
) -> impl IntoView {
    let heading = format!("Kết quả {}", label);

    view! {
        <section class="result-panel">
            <h3>{heading}</h3>
            {move || match state.get() {
                GradePanelState::Idle => view! {
                    <p class="small muted">"Kết quả chấm sẽ hiển thị ở đây."</p>
                }.into_any(),
                GradePanelState::Loading => view! {
                    <p class="small">{format!("Đang chấm {}...", label)}</p>
                }.into_any(),
                GradePanelState::Error(message) => view! {
                    <p class="small status-error">{format!("Lỗi: {}", message)}</p>
                }.into_any(),
                GradePanelState::NoData => view! {
                    <p class="small">"Không có dữ liệu."</p>
                }.into_any(),
                GradePanelState::Ready(report) => view! {
                    <ReportView report=report />
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ReportView(report: GradeReport) -> impl IntoView {
    let improved = report
        .improved_version
        .clone()
        .filter(|text| !text.trim().is_empty());

    view! {
        <div class="band">{format!("Overall Band: {}", format_band(report.overall_band))}</div>
        <div class="card">
            <h4>"Tóm tắt"</h4>
            <div inner_html=text_to_html(&report.feedback)></div>
        </div>
        <div class="card">
            <h4>"Gợi ý cải thiện"</h4>
            <div inner_html=text_to_html(&report.suggestions)></div>
        </div>
        <div class="criteria">
            {report.criteria.iter().map(|criterion| view! {
                <CriterionCard criterion=criterion.clone() />
            }).collect::<Vec<_>>()}
        </div>
        {improved.map(|text| view! {
            <div class="card">
                <h4>"Bản viết mượt hơn"</h4>
                <div class="small" inner_html=text_to_html(&text)></div>
            </div>
        })}
    }
}

#[component]
fn CriterionCard(criterion: CriterionScore) -> impl IntoView {
    view! {
        <div class="card criterion-card">
            <h4>{criterion.name.clone()}</h4>
            <div>
                <strong>"Band: "</strong>
                {format_band(criterion.band)}
            </div>
            <div class="small" inner_html=text_to_html(&criterion.comment)></div>
        </div>
    }
}
