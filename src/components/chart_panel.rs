use leptos::prelude::*;

use crate::state::ChartView;

/// Chart block under the Task 1 prompt. Hidden entirely unless the
/// generated tasks carried chart material; an image always wins over the
/// textual fallback.
#[component]
pub fn ChartPanel(chart: ReadSignal<ChartView>) -> impl IntoView {
    view! {
        {move || match chart.get() {
            ChartView::Hidden => None,
            ChartView::Image(base64) => Some(view! {
                <div class="card chart-panel">
                    <h4>"Biểu đồ Task 1"</h4>
                    <img
                        class="chart-image"
                        alt="Biểu đồ Task 1"
                        src=format!("data:image/png;base64,{}", base64)
                    />
                </div>
            }.into_any()),
            ChartView::Text(data) => Some(view! {
                <div class="card chart-panel">
                    <h4>"Dữ liệu biểu đồ Task 1"</h4>
                    <pre class="chart-data">{data}</pre>
                </div>
            }.into_any()),
        }}
    }
}
