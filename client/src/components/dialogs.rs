//! Modal dialogs driven by `DialogState::active`.
//!
//! DESIGN
//! ======
//! Exactly one dialog renders at a time because the host matches on the
//! single active variant. Cancel and backdrop clicks only close; confirm
//! buttons hand off to the controller, which closes the dialog itself once
//! the request resolves.

use leptos::prelude::*;

use crate::app::dispatch;
use crate::controller::Controller;
use crate::state::dialog::{Dialog, PlayerDraft};
use crate::state::leaderboard::LeaderboardState;

#[component]
pub fn DialogHost() -> impl IntoView {
    let state = expect_context::<RwSignal<LeaderboardState>>();
    let active = Memo::new(move |_| state.with(|s| s.dialog.active.clone()));

    move || match active.get() {
        Dialog::Closed => ().into_any(),
        Dialog::AddPlayer => view! { <AddPlayerDialog/> }.into_any(),
        Dialog::ConfirmDeletePlayer(player) => view! {
            <ConfirmDialog
                title="Delete Player"
                message=format!("Delete {} from the leaderboard? This cannot be undone.", player.name)
                confirm_label="Delete"
                on_confirm=Callback::new(|c: Controller| {
                    dispatch(&c, |c| async move {
                        c.confirm_delete_player().await;
                    });
                })
            />
        }
        .into_any(),
        Dialog::ConfirmResetScores => view! {
            <ConfirmDialog
                title="Reset Scores"
                message="Reset every player's points to zero?".to_owned()
                confirm_label="Reset"
                on_confirm=Callback::new(|c: Controller| {
                    dispatch(&c, |c| async move {
                        c.confirm_reset_scores().await;
                    });
                })
            />
        }
        .into_any(),
        Dialog::ConfirmDeleteAllPlayers => view! {
            <ConfirmDialog
                title="Delete All Players"
                message="Permanently delete every player?".to_owned()
                confirm_label="Delete All"
                on_confirm=Callback::new(|c: Controller| {
                    dispatch(&c, |c| async move {
                        c.confirm_delete_all_players().await;
                    });
                })
            />
        }
        .into_any(),
    }
}

/// Two-phase confirmation for destructive actions.
#[component]
fn ConfirmDialog(
    title: &'static str,
    message: String,
    confirm_label: &'static str,
    on_confirm: Callback<Controller>,
) -> impl IntoView {
    let state = expect_context::<RwSignal<LeaderboardState>>();
    let controller = expect_context::<Controller>();
    let submitting = move || state.with(|s| s.dialog.submitting);

    let cancel = {
        let controller = controller.clone();
        move || controller.cancel_dialog()
    };
    let backdrop_cancel = cancel.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| backdrop_cancel()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=submitting
                        on:click=move |_| on_confirm.run(controller.clone())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Name plus optional starting points. Invalid input keeps the dialog open
/// and sends nothing.
#[component]
fn AddPlayerDialog() -> impl IntoView {
    let state = expect_context::<RwSignal<LeaderboardState>>();
    let controller = expect_context::<Controller>();
    let name = RwSignal::new(String::new());
    let points = RwSignal::new(String::new());
    let submitting = move || state.with(|s| s.dialog.submitting);
    let valid = move || PlayerDraft::new(name.get(), points.get()).to_request().is_some();

    let submit = Callback::new({
        let controller = controller.clone();
        move |()| {
            let draft = PlayerDraft::new(name.get_untracked(), points.get_untracked());
            if draft.to_request().is_none() {
                return;
            }
            dispatch(&controller, move |c| async move {
                c.submit_add_player(&draft).await;
            });
        }
    });
    let cancel = Callback::new(move |()| controller.cancel_dialog());

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Player"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Starting points (optional)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=move || points.get()
                        on:input=move |ev| points.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting() || !valid()
                        on:click=move |_| submit.run(())
                    >
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
