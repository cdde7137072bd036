//! Hooks that drive a [`ListState`] from a gateway call.

use std::future::Future;

use api::GatewayError;
use dioxus::prelude::*;

use crate::list_state::ListState;

/// Issue a load into `state` and settle it when the request finishes.
///
/// The ticket is taken synchronously, so the most recently issued call wins
/// even if an earlier one resolves later. The request runs in a task owned
/// by the calling component and is dropped with it.
pub fn load_into<T, Fut>(mut state: Signal<ListState<T>>, request: Fut)
where
    T: 'static,
    Fut: Future<Output = Result<Vec<T>, GatewayError>> + 'static,
{
    let ticket = state.write().begin();
    spawn(async move {
        let result = request.await;
        if let Err(e) = &result {
            tracing::error!("Failed to load list: {e}");
        }
        if !state.write().settle(ticket, result) {
            tracing::debug!(?ticket, "Discarded stale list response");
        }
    });
}

/// A list loaded once when the component mounts.
pub fn use_list<T, F, Fut>(load: F) -> Signal<ListState<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, GatewayError>> + 'static,
{
    let state = use_signal(ListState::new);
    use_effect(move || load_into(state, load()));
    state
}

/// A list loaded on mount and again whenever `refresh` changes.
pub fn use_refreshed_list<T, F, Fut>(refresh: u32, load: F) -> Signal<ListState<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, GatewayError>> + 'static,
{
    let state = use_signal(ListState::new);
    use_effect(use_reactive!(|refresh| {
        tracing::debug!(refresh, "Loading list");
        load_into(state, load());
    }));
    state
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use super::*;

    static LOADS: AtomicUsize = AtomicUsize::new(0);

    #[component]
    fn CountedList(refresh: u32) -> Element {
        let list = use_refreshed_list(refresh, move || async move {
            LOADS.fetch_add(1, Ordering::SeqCst);
            Ok::<_, GatewayError>(vec![refresh])
        });
        let shown = list.read().items().len();
        rsx! { p { "{shown}" } }
    }

    fn bump_once_app() -> Element {
        let mut round = use_signal(|| 0u32);
        use_future(move || async move {
            round += 1;
        });
        rsx! {
            div {
                CountedList { refresh: round() }
            }
        }
    }

    #[tokio::test]
    async fn test_changing_refresh_loads_again() {
        let mut dom = VirtualDom::new(bump_once_app);
        dom.rebuild_in_place();
        for _ in 0..6 {
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
        assert_eq!(LOADS.load(Ordering::SeqCst), 2);
    }
}
