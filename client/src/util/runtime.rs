//! Task spawning and timers for the current target.
//!
//! Browser builds run on the JS event loop via `wasm-bindgen-futures` and
//! `gloo-timers`; native builds (CLI, tests) use the ambient tokio runtime.

use std::future::Future;
use std::time::Duration;

/// Run `future` in the background. Native callers must be inside a tokio runtime.
#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Run `future` in the background. Native callers must be inside a tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    drop(tokio::spawn(future));
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}
