use leptos::prelude::*;

use crate::state::Notice;

/// The advisory line under the prompt controls. A confirmed health check is
/// the only message rendered in the success color; everything else is an
/// error.
#[component]
pub fn StatusLine(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    view! {
        <div class="status-row">
            {move || notice.get().map(|notice| match notice {
                Notice::Ok(text) => view! {
                    <span class="status-text status-ok">{text}</span>
                }.into_any(),
                Notice::Error(text) => view! {
                    <span class="status-text status-error">{text}</span>
                }.into_any(),
            })}
        </div>
    }
}
