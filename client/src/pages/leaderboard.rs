//! Leaderboard page: podium, ranked table, claim action and admin actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only screen of the app. State arrives through the controller's
//! snapshot signal; every button calls a controller method.

use leptos::prelude::*;

use crate::app::dispatch;
use crate::components::actions_menu::ActionsMenu;
use crate::components::dialogs::DialogHost;
use crate::components::notification_toast::NotificationToast;
use crate::components::player_table::PlayerTable;
use crate::components::podium::Podium;
use crate::controller::Controller;
use crate::state::leaderboard::LeaderboardState;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<LeaderboardState>>();
    let controller = expect_context::<Controller>();

    let refresh = {
        let controller = controller.clone();
        move |_| dispatch(&controller, |c| async move { c.refresh().await })
    };
    let claim = move |_| {
        dispatch(&controller, |c| async move {
            c.claim_points().await;
        });
    };

    let selected_name = move || state.with(|s| s.selected_player().map(|p| p.name.clone()));
    let loading = move || state.with(|s| s.list.loading());
    let empty = move || state.with(|s| s.list.players.is_empty());

    view! {
        <div class="leaderboard-page">
            <header class="leaderboard-page__header toolbar">
                <span class="toolbar__title">"Leaderboard"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn" on:click=refresh disabled=loading title="Reload the player list">
                    "Refresh"
                </button>
                <ActionsMenu/>
            </header>

            <Show when=move || state.with(|s| s.list.error.is_some())>
                <p class="leaderboard-page__error">
                    {move || state.with(|s| s.list.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <Show when=loading>
                <p class="leaderboard-page__loading">"Loading players..."</p>
            </Show>

            <Show
                when=move || !empty()
                fallback=move || view! { <p class="leaderboard-page__empty">"No players yet."</p> }
            >
                <Podium/>
                <section class="leaderboard-page__claim">
                    <span class="leaderboard-page__selected">
                        {move || match selected_name() {
                            Some(name) => format!("Selected: {name}"),
                            None => "No player selected".to_owned(),
                        }}
                    </span>
                    <button class="btn btn--primary" on:click=claim.clone() disabled=loading>
                        "Claim Points"
                    </button>
                </section>
                <PlayerTable/>
            </Show>

            <NotificationToast/>
            <DialogHost/>
        </div>
    }
}
