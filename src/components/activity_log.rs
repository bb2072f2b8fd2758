//! Activity Log
//!
//! The newest lines from the in-memory log ring, read when the panel opens
//! and on refresh.

use leptos::prelude::*;
use ring_logger::RingLogger;

/// Lines shown in the panel
const SHOWN_LINES: usize = 20;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let logger = use_context::<&'static RingLogger>();
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move || {
        if let Some(logger) = logger {
            set_lines.set(logger.tail(SHOWN_LINES));
        }
    };
    refresh();

    view! {
        <section class="panel-section">
            <div class="section-header">
                <h4 class="section-title">"📜 Activity"</h4>
                <button class="add-btn" title="Refresh" on:click=move |_| refresh()>
                    "↻"
                </button>
            </div>
            <pre class="activity-log">
                {move || match logger {
                    Some(_) => lines.get().join("\n"),
                    None => "Logging unavailable".to_string(),
                }}
            </pre>
        </section>
    }
}
