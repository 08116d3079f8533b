use leptos::prelude::*;

use crate::api::ApiConfig;
use crate::pages::grading::GradingPage;

#[component]
pub fn App() -> impl IntoView {
    // Resolve the backend origin once; everything below reads it from context.
    provide_context(ApiConfig::from_window());

    view! {
        <div class="app-layout">
            <main class="content">
                <GradingPage />
            </main>
        </div>
    }
}
