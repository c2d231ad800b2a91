//! Root application component and controller wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the HTTP-backed `Controller`, mirrors its snapshots into an
//! `RwSignal<LeaderboardState>`, and provides both as Leptos context. Views
//! read the signal and call controller methods; they never mutate state
//! directly.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::{ClientConfig, ConfigError};
use crate::controller::Controller;
use crate::net::api::HttpApi;
use crate::net::error::ApiError;
use crate::pages::leaderboard::LeaderboardPage;
use crate::state::leaderboard::LeaderboardState;

/// Why the app could not build its service connection.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Settings the UI reads besides the controller itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiSettings {
    pub batch_size: usize,
}

/// Root application component.
///
/// Provides `RwSignal<LeaderboardState>`, `Controller` and `UiSettings`
/// contexts, then loads the list once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(LeaderboardState::default());

    let started = build_config().and_then(|config| {
        let api = HttpApi::new(&config)?;
        Ok((config, api))
    });

    let body = match started {
        Ok((config, api)) => {
            log::info!("leaderboard client using {}", api.base_url());
            let controller = Controller::new(Arc::new(api)).with_listener(move |snapshot| {
                let _ = state.try_set(snapshot.clone());
            });
            provide_context(state);
            provide_context(controller.clone());
            provide_context(UiSettings { batch_size: config.batch_size });

            dispatch(&controller, |c| async move { c.refresh().await });
            on_cleanup(move || controller.shutdown());

            view! { <LeaderboardPage/> }.into_any()
        }
        Err(error) => {
            log::error!("leaderboard client failed to start: {error}");
            view! {
                <div class="leaderboard-page">
                    <p class="leaderboard-page__error">{format!("Cannot start: {error}")}</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Title text="Leaderboard"/>
        {body}
    }
}

/// Run a controller action in the background. Outside the browser build
/// there is no event loop to drive it, so the action is dropped.
pub fn dispatch<F, Fut>(controller: &Controller, action: F)
where
    F: FnOnce(Controller) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(action(controller.clone()));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (controller, action);
    }
}

/// The browser talks to the service on its own origin; other builds read
/// the environment.
fn build_config() -> Result<ClientConfig, StartupError> {
    #[cfg(feature = "csr")]
    {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| crate::config::DEFAULT_API_URL.to_owned());
        Ok(ClientConfig::with_api_url(&origin)?)
    }
    #[cfg(not(feature = "csr"))]
    {
        Ok(ClientConfig::from_env()?)
    }
}
