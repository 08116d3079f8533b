//! The grading page: prompt generation, essay entry, batch submission.
//!
//! All state lives in signals; the handlers never read anything back from
//! the DOM. Each of the three backend operations disables its own trigger
//! while in flight and re-enables it on every exit path.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiConfig, GradeBatchRequest};
use crate::components::chart_panel::ChartPanel;
use crate::components::result_panel::ResultPanel;
use crate::components::status_line::StatusLine;
use crate::state::{chart_view, ChartView, GradePanelState, Mode, Notice, PromptState};

const PROMPT1_UNSET: &str = "Chưa nhập đề Task 1.";
const PROMPT2_UNSET: &str = "Chưa nhập đề Task 2.";

#[component]
pub fn GradingPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    let (mode, set_mode) = signal(Mode::default());
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    let (prompt1, set_prompt1) = signal(PromptState::Unset);
    let (prompt2, set_prompt2) = signal(PromptState::Unset);
    let (chart, set_chart) = signal(ChartView::Hidden);

    let (manual1, set_manual1) = signal(String::new());
    let (manual2, set_manual2) = signal(String::new());
    let (essay1, set_essay1) = signal(String::new());
    let (essay2, set_essay2) = signal(String::new());

    let (checking, set_checking) = signal(false);
    let (generating, set_generating) = signal(false);
    let (grading, set_grading) = signal(false);

    let (result1, set_result1) = signal(GradePanelState::Idle);
    let (result2, set_result2) = signal(GradePanelState::Idle);

    // Single diagnostic ping against /api/health.
    let health_config = config.clone();
    let on_check_health = move |_| {
        let config = health_config.clone();
        set_notice.set(None);
        set_checking.set(true);
        spawn_local(async move {
            match api::check_health(&config).await {
                Ok(()) => {
                    set_notice.set(Some(Notice::Ok("Kết nối OK.".to_string())));
                }
                Err(error) => {
                    set_notice.set(Some(Notice::Error(format!(
                        "Không kết nối được backend: {}",
                        error
                    ))));
                }
            }
            set_checking.set(false);
        });
    };

    let generate_config = config.clone();
    let on_generate = move |_| {
        set_notice.set(None);

        if mode.get().is_manual() {
            // Manual mode only syncs the entry fields into the prompt slots.
            let task1 = manual1.get().trim().to_string();
            let task2 = manual2.get().trim().to_string();
            if task1.is_empty() || task2.is_empty() {
                set_notice.set(Some(Notice::Error(
                    "Hãy nhập đủ đề Task 1 và Task 2.".to_string(),
                )));
            }
            set_prompt1.set(PromptState::from_manual(&task1));
            set_prompt2.set(PromptState::from_manual(&task2));
            return;
        }

        let config = generate_config.clone();
        set_generating.set(true);
        set_prompt1.set(PromptState::Loading);
        set_prompt2.set(PromptState::Loading);
        spawn_local(async move {
            match api::generate_tasks(&config).await {
                Ok(tasks) => {
                    let task1 = tasks.task1.as_deref().map(str::trim).unwrap_or_default();
                    let task2 = tasks.task2.as_deref().map(str::trim).unwrap_or_default();
                    // A missing prompt is a soft failure: report it, keep going.
                    if task1.is_empty() || task2.is_empty() {
                        set_notice.set(Some(Notice::Error(
                            "Không lấy được đề từ máy chủ. Hãy kiểm tra API key hoặc log server."
                                .to_string(),
                        )));
                    }
                    set_prompt1.set(if task1.is_empty() {
                        PromptState::Error("Không lấy được đề Task 1.".to_string())
                    } else {
                        PromptState::Ready(task1.to_string())
                    });
                    set_prompt2.set(if task2.is_empty() {
                        PromptState::Error("Không lấy được đề Task 2.".to_string())
                    } else {
                        PromptState::Ready(task2.to_string())
                    });
                    set_chart.set(chart_view(
                        tasks.task1_chart_image.as_deref(),
                        tasks.task1_chart_data.as_deref(),
                    ));
                }
                Err(error) => {
                    set_notice.set(Some(Notice::Error(format!("Lỗi sinh đề: {}", error))));
                    set_prompt1.set(PromptState::Error("Lỗi khi lấy đề Task 1".to_string()));
                    set_prompt2.set(PromptState::Error("Lỗi khi lấy đề Task 2".to_string()));
                }
            }
            set_generating.set(false);
        });
    };

    let submit_config = config.clone();
    let on_submit = move |_| {
        let slot1 = prompt1.get();
        let Some(task1_prompt) = slot1.ready_text() else {
            alert("Task 1 chưa sẵn sàng. Hãy sinh đề trước.");
            return;
        };
        let slot2 = prompt2.get();
        let Some(task2_prompt) = slot2.ready_text() else {
            alert("Task 2 chưa sẵn sàng. Hãy sinh đề trước.");
            return;
        };

        let task1_essay = essay1.get().trim().to_string();
        let task2_essay = essay2.get().trim().to_string();
        if task1_essay.is_empty() || task2_essay.is_empty() {
            alert("Hãy nhập cả bài Task 1 và Task 2 trước khi nộp.");
            return;
        }

        let request = GradeBatchRequest {
            task1_prompt: task1_prompt.to_string(),
            task1_essay,
            task2_prompt: task2_prompt.to_string(),
            task2_essay,
        };

        let config = submit_config.clone();
        set_grading.set(true);
        set_result1.set(GradePanelState::Loading);
        set_result2.set(GradePanelState::Loading);
        spawn_local(async move {
            match api::grade_batch(&config, &request).await {
                Ok(outcome) => {
                    set_result1.set(GradePanelState::from_parsed(outcome.task1));
                    set_result2.set(GradePanelState::from_parsed(outcome.task2));
                }
                Err(error) => {
                    // One request serves both tasks, so failure hits both panels.
                    set_result1.set(GradePanelState::Error(error.clone()));
                    set_result2.set(GradePanelState::Error(error));
                }
            }
            set_grading.set(false);
        });
    };

    view! {
        <div class="page grading-page">
            <header class="page-header">
                <h2>"IELTS Writing Assistant"</h2>
                <p class="page-description">
                    "Sinh đề Task 1 và Task 2, nộp cả hai bài viết và nhận kết quả chấm chi tiết."
                </p>
            </header>

            <section class="prompt-section">
                <div class="controls-row">
                    <button
                        class="btn btn-secondary"
                        on:click=on_check_health
                        disabled=move || checking.get()
                    >
                        {move || if checking.get() { "Đang kiểm tra..." } else { "Kiểm tra kết nối" }}
                    </button>
                    <label class="mode-option">
                        <input
                            type="radio"
                            name="prompt-mode"
                            prop:checked=move || !mode.get().is_manual()
                            on:change=move |_| set_mode.set(Mode::Auto)
                        />
                        "Tự động sinh đề"
                    </label>
                    <label class="mode-option">
                        <input
                            type="radio"
                            name="prompt-mode"
                            prop:checked=move || mode.get().is_manual()
                            on:change=move |_| set_mode.set(Mode::Manual)
                        />
                        "Nhập đề thủ công"
                    </label>
                    <button
                        class="btn btn-primary"
                        on:click=on_generate
                        disabled=move || generating.get()
                    >
                        {move || {
                            if generating.get() {
                                "Đang sinh đề..."
                            } else if mode.get().is_manual() {
                                "Dùng đề đã nhập"
                            } else {
                                "Sinh đề mới"
                            }
                        }}
                    </button>
                </div>

                <StatusLine notice=notice />

                <Show when=move || mode.get().is_manual()>
                    <div class="manual-prompts">
                        <div class="form-group">
                            <label>"Đề Task 1"</label>
                            <textarea
                                class="input"
                                rows="3"
                                placeholder="Nhập đề Task 1..."
                                prop:value=move || manual1.get()
                                on:input=move |ev| set_manual1.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="form-group">
                            <label>"Đề Task 2"</label>
                            <textarea
                                class="input"
                                rows="3"
                                placeholder="Nhập đề Task 2..."
                                prop:value=move || manual2.get()
                                on:input=move |ev| set_manual2.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                    </div>
                </Show>

                <div class="prompt-cards">
                    <div class="card prompt-card">
                        <h3>"Đề Task 1"</h3>
                        <p class="prompt-text" class:loading=move || prompt1.get().is_loading()>
                            {move || prompt1.get().display_text(PROMPT1_UNSET)}
                        </p>
                    </div>
                    <div class="card prompt-card">
                        <h3>"Đề Task 2"</h3>
                        <p class="prompt-text" class:loading=move || prompt2.get().is_loading()>
                            {move || prompt2.get().display_text(PROMPT2_UNSET)}
                        </p>
                    </div>
                </div>

                <ChartPanel chart=chart />
            </section>

            <section class="essay-section">
                <div class="form-group">
                    <label>"Bài viết Task 1"</label>
                    <textarea
                        class="input essay-input"
                        rows="10"
                        placeholder="Dán hoặc viết bài Task 1 tại đây..."
                        prop:value=move || essay1.get()
                        on:input=move |ev| set_essay1.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label>"Bài viết Task 2"</label>
                    <textarea
                        class="input essay-input"
                        rows="10"
                        placeholder="Dán hoặc viết bài Task 2 tại đây..."
                        prop:value=move || essay2.get()
                        on:input=move |ev| set_essay2.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    class="btn btn-primary btn-submit"
                    on:click=on_submit
                    disabled=move || grading.get()
                >
                    {move || if grading.get() { "Đang chấm..." } else { "Nộp & chấm cả hai bài" }}
                </button>
            </section>

            <section class="results">
                <ResultPanel label="Task 1" state=result1 />
                <ResultPanel label="Task 2" state=result2 />
            </section>
        </div>
    }
}

/// Blocking notification for validation failures.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
