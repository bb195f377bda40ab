//! Dialog Box Component
//!
//! Modal for mutation outcomes. Closes only through its OK button.
//! Error dialogs carry the most recent log lines for bug reports.

use leptos::prelude::*;

use crate::feedback::DialogState;

const ERROR_LOG_LINES: usize = 20;

#[component]
pub fn DialogBox(
    #[prop(into)] dialog: Signal<DialogState>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || dialog.with(|d| d.is_open)>
            <div class="dialog-backdrop">
                <div class="dialog" role="dialog" aria-modal="true">
                    <h2 class="dialog-title">{move || dialog.with(|d| d.title.clone())}</h2>
                    <p class="dialog-message">{move || dialog.with(|d| d.message.clone())}</p>
                    <Show when=move || dialog.with(DialogState::is_error)>
                        <details class="dialog-log">
                            <summary>"Details"</summary>
                            <pre>{move || console_logger::recent_tail(ERROR_LOG_LINES).join("\n")}</pre>
                        </details>
                    </Show>
                    <button class="dialog-ok" on:click=move |_| on_close.run(())>
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}
