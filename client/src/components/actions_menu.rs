//! Admin actions dropdown: add, generate, reset, delete all.

use leptos::prelude::*;

use crate::app::{UiSettings, dispatch};
use crate::controller::Controller;
use crate::state::leaderboard::LeaderboardState;

#[component]
pub fn ActionsMenu() -> impl IntoView {
    let state = expect_context::<RwSignal<LeaderboardState>>();
    let controller = expect_context::<Controller>();
    let settings = expect_context::<UiSettings>();
    let open = move || state.with(|s| s.dialog.actions_menu_open);
    let busy = move || state.with(|s| s.list.loading());
    let modal = move || state.with(|s| s.dialog.is_open());

    let toggle = {
        let controller = controller.clone();
        move |_| controller.toggle_actions_menu()
    };

    view! {
        <div class="actions-menu">
            <button class="btn actions-menu__toggle" on:click=toggle disabled=modal aria-haspopup="true">
                "Actions ▾"
            </button>
            <Show when=open>
                <ul class="actions-menu__items" role="menu">
                    <li>
                        <button
                            class="actions-menu__item"
                            on:click={
                                let controller = controller.clone();
                                move |_| controller.open_add_player()
                            }
                        >
                            "Add Player"
                        </button>
                    </li>
                    <li>
                        <button
                            class="actions-menu__item"
                            disabled=busy
                            on:click={
                                let controller = controller.clone();
                                move |_| {
                                    controller.close_actions_menu();
                                    let count = settings.batch_size;
                                    dispatch(&controller, move |c| async move {
                                        c.generate_players(count).await;
                                    });
                                }
                            }
                        >
                            {format!("Generate {} Test Players", settings.batch_size)}
                        </button>
                    </li>
                    <li>
                        <button
                            class="actions-menu__item"
                            on:click={
                                let controller = controller.clone();
                                move |_| controller.open_reset_scores()
                            }
                        >
                            "Reset Scores"
                        </button>
                    </li>
                    <li>
                        <button
                            class="actions-menu__item actions-menu__item--danger"
                            on:click={
                                let controller = controller.clone();
                                move |_| controller.open_delete_all_players()
                            }
                        >
                            "Delete All Players"
                        </button>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
