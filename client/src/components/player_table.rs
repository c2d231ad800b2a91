//! Ranked table of the players below the podium.

use leptos::prelude::*;

use crate::controller::Controller;
use crate::net::types::Player;
use crate::state::leaderboard::LeaderboardState;
use crate::util::podium::runners_up;

#[component]
pub fn PlayerTable() -> impl IntoView {
    let state = expect_context::<RwSignal<LeaderboardState>>();

    let rows = move || {
        let (players, selected) = state.with(|s| (s.list.players.clone(), s.selection.player_id().map(ToOwned::to_owned)));
        runners_up(&players)
            .iter()
            .map(|player| {
                let is_selected = selected.as_deref() == Some(player.id.as_str());
                view! { <PlayerRow player=player.clone() selected=is_selected/> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <table class="player-table">
            <thead>
                <tr>
                    <th>"Rank"</th>
                    <th>"Name"</th>
                    <th>"Points"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn PlayerRow(player: Player, selected: bool) -> impl IntoView {
    let controller = expect_context::<Controller>();
    let select = {
        let controller = controller.clone();
        let id = player.id.clone();
        move |_| {
            controller.select_player(&id);
        }
    };
    let id = player.id.clone();
    let delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        controller.open_delete_player(&id);
    };

    view! {
        <tr class="player-table__row" class:player-table__row--selected=selected on:click=select>
            <td class="player-table__rank">{player.rank}</td>
            <td class="player-table__name">{player.name}</td>
            <td class="player-table__points">{player.points}</td>
            <td>
                <button class="player-table__delete" on:click=delete title="Delete player" aria-label="Delete player">
                    "✕"
                </button>
            </td>
        </tr>
    }
}
