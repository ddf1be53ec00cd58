use leptos::*;

use crate::state::Notice;

/// Output area for one operation's pending/success/error message
#[component]
pub fn NoticeView(output_id: &'static str, #[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    view! {
        <div id=output_id class="output" aria-live="polite">
            {move || notice.get().map(|n| view! {
                <p class=n.class()>{n.text().to_string()}</p>
            })}
        </div>
    }
}
