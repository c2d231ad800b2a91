//! Top-three podium, second place on the left and third on the right.

use leptos::prelude::*;

use crate::controller::Controller;
use crate::state::leaderboard::LeaderboardState;
use crate::util::podium::podium;

#[component]
pub fn Podium() -> impl IntoView {
    let state = expect_context::<RwSignal<LeaderboardState>>();
    let controller = expect_context::<Controller>();

    let steps = move || {
        let (players, selected) = state.with(|s| (s.list.players.clone(), s.selection.player_id().map(ToOwned::to_owned)));
        podium(&players)
            .into_iter()
            .map(|slot| {
                let id = slot.player.id.clone();
                let is_selected = selected.as_deref() == Some(id.as_str());
                let select = {
                    let controller = controller.clone();
                    let id = id.clone();
                    move |_| {
                        controller.select_player(&id);
                    }
                };
                let controller = controller.clone();
                let delete = move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    controller.open_delete_player(&id);
                };
                view! {
                    <div
                        role="button"
                        tabindex="0"
                        class=format!("podium__step podium__step--{}", slot.place)
                        class:podium__step--selected=is_selected
                        on:click=select
                    >
                        <span class="podium__place">{slot.place}</span>
                        <span class="podium__name">{slot.player.name.clone()}</span>
                        <span class="podium__points">{format!("{} pts", slot.player.points)}</span>
                        <button class="podium__delete" on:click=delete title="Delete player" aria-label="Delete player">
                            "✕"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! { <section class="podium">{steps}</section> }
}
