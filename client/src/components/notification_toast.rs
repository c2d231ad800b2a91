//! Transient status message with a manual dismiss.

use leptos::prelude::*;

use crate::controller::Controller;
use crate::state::leaderboard::LeaderboardState;

#[component]
pub fn NotificationToast() -> impl IntoView {
    let state = expect_context::<RwSignal<LeaderboardState>>();
    let controller = expect_context::<Controller>();
    let message = move || state.with(|s| s.notification.message().map(ToOwned::to_owned));

    view! {
        <Show when=move || message().is_some()>
            <div class="toast" role="status">
                <span class="toast__message">{move || message().unwrap_or_default()}</span>
                <button
                    class="toast__dismiss"
                    on:click={
                        let controller = controller.clone();
                        move |_| controller.dismiss_notification()
                    }
                    aria-label="Dismiss"
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
