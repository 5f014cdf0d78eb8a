//! Cancellable fetch orchestration. A component binds one logical data fetch
//! to a set of dependency values with [`use_fetch`]; the binding re-issues the
//! request whenever the dependency snapshot changes, cancels the transport of
//! the superseded attempt, and guarantees that only the most recently issued
//! request may ever write to the bound state. Responses may arrive out of
//! order; issuance order wins.

use super::errors::AppError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use web_sys::AbortSignal;

/// Readable slots a fetch binding publishes into. `Copy`, so closures and
/// views can capture it freely.
pub struct FetchState<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub error: RwSignal<Option<AppError>>,
    pub loading: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> FetchState<T> {
    fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }
}

impl<T: Send + Sync + 'static> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchState<T> {}

/// Opaque handle bound to one in-flight request. At most one token per
/// binding is current; issuing a new one supersedes (and aborts) the previous.
pub struct LifecycleToken {
    seq: u64,
    active: Rc<Cell<u64>>,
    controller: Option<web_sys::AbortController>,
}

impl LifecycleToken {
    /// True while no newer token has been issued and the binding is mounted.
    pub fn is_current(&self) -> bool {
        self.active.get() == self.seq
    }

    /// Abort signal for transport propagation, where the platform supports it.
    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|controller| controller.signal())
    }

    /// Cancels this attempt: aborts the transport and, if the token is still
    /// current, retires it so a late response cannot be applied.
    pub fn cancel(&self) {
        if self.is_current() {
            self.active.set(0);
        }
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// Issues lifecycle tokens for a single binding. Sequence numbers start at 1;
/// 0 means nothing is active (initial state, or invalidated on unmount).
pub(crate) struct FetchCoordinator {
    active: Rc<Cell<u64>>,
    next: Cell<u64>,
    aborter: RefCell<Option<web_sys::AbortController>>,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(0)),
            next: Cell::new(0),
            aborter: RefCell::new(None),
        }
    }

    /// Supersedes any active token and returns a fresh one.
    pub fn issue(&self) -> LifecycleToken {
        if let Some(controller) = self.aborter.borrow_mut().take() {
            controller.abort();
        }

        let seq = self.next.get() + 1;
        self.next.set(seq);
        self.active.set(seq);

        let controller = new_abort_controller();
        *self.aborter.borrow_mut() = controller.clone();

        LifecycleToken {
            seq,
            active: Rc::clone(&self.active),
            controller,
        }
    }

    /// Retires the binding entirely; late responses are dropped.
    pub fn invalidate(&self) {
        self.active.set(0);
        if let Some(controller) = self.aborter.borrow_mut().take() {
            controller.abort();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn new_abort_controller() -> Option<web_sys::AbortController> {
    web_sys::AbortController::new().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn new_abort_controller() -> Option<web_sys::AbortController> {
    None
}

/// Compares dependency snapshots by value so re-fetches are driven by data
/// changes, not by incidental re-render timing.
pub(crate) struct DependencyTracker<D> {
    last: RefCell<Option<D>>,
}

impl<D: Clone + PartialEq> DependencyTracker<D> {
    pub fn new() -> Self {
        Self {
            last: RefCell::new(None),
        }
    }

    /// Records the snapshot and reports whether it differs from the last one.
    pub fn changed(&self, snapshot: &D) -> bool {
        let mut last = self.last.borrow_mut();
        if last.as_ref() == Some(snapshot) {
            return false;
        }
        *last = Some(snapshot.clone());
        true
    }
}

/// Edge-triggered re-fetch signal. Each `trigger()` bumps a generation
/// counter; bindings that include the generation in their dependency snapshot
/// re-fetch exactly once per trigger. There is no flag to reset, so a trigger
/// can never loop.
#[derive(Clone, Copy)]
pub struct RefreshSignal(RwSignal<u64>);

impl RefreshSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn trigger(&self) {
        self.0.update(|generation| *generation += 1);
    }

    /// Reactive read, for inclusion in dependency snapshots.
    pub fn generation(&self) -> u64 {
        self.0.get()
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies one attempt's outcome to the binding's state, unless the attempt
/// was superseded, cancelled, or the binding unmounted. Cancellation is
/// expected, not exceptional: it leaves an empty state with no error.
pub(crate) fn apply_result<T: Send + Sync + 'static>(
    state: FetchState<T>,
    token: &LifecycleToken,
    result: Result<T, AppError>,
) {
    if !token.is_current() {
        return;
    }

    match result {
        Ok(value) => {
            state.data.set(Some(value));
            state.error.set(None);
        }
        Err(AppError::Cancelled) => {
            state.data.set(None);
            state.error.set(None);
        }
        Err(err) => {
            state.data.set(None);
            state.error.set(Some(err));
        }
    }
    state.loading.set(false);
}

/// Binds a fetch to the calling component's lifetime and to `deps`. The
/// loader runs on mount and on every dependency change; superseded attempts
/// are cancelled and their results discarded.
pub fn use_fetch<D, T, Fut>(
    deps: impl Fn() -> D + 'static,
    loader: impl Fn(D, Option<AbortSignal>) -> Fut + 'static,
) -> FetchState<T>
where
    D: Clone + PartialEq + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = FetchState::new();
    let coordinator = StoredValue::new_local(FetchCoordinator::new());
    let tracker = DependencyTracker::new();

    Effect::new(move |_| {
        let snapshot = deps();
        if !tracker.changed(&snapshot) {
            return;
        }

        let token = coordinator.with_value(FetchCoordinator::issue);
        state.loading.set(true);
        state.error.set(None);

        let future = loader(snapshot, token.signal());
        spawn_local(async move {
            let result = future.await;
            apply_result(state, &token, result);
        });
    });

    on_cleanup(move || {
        let _ = coordinator.try_with_value(FetchCoordinator::invalidate);
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FetchState<u32> {
        FetchState::new()
    }

    #[test]
    fn last_issued_request_wins_over_arrival_order() {
        let state = state();
        let coordinator = FetchCoordinator::new();

        let first = coordinator.issue();
        let second = coordinator.issue();

        // Second response lands first, then the stale one trickles in.
        apply_result(state, &second, Ok(2));
        apply_result(state, &first, Ok(1));

        assert_eq!(state.data.get_untracked(), Some(2));
        assert_eq!(state.error.get_untracked(), None);
    }

    #[test]
    fn superseded_error_cannot_clobber_fresh_data() {
        let state = state();
        let coordinator = FetchCoordinator::new();

        let first = coordinator.issue();
        let second = coordinator.issue();

        apply_result(state, &second, Ok(7));
        apply_result(
            state,
            &first,
            Err(AppError::Network("too late".to_string())),
        );

        assert_eq!(state.data.get_untracked(), Some(7));
        assert_eq!(state.error.get_untracked(), None);
    }

    #[test]
    fn cancelled_token_suppresses_the_write() {
        let state = state();
        let coordinator = FetchCoordinator::new();

        let token = coordinator.issue();
        token.cancel();

        // The response resolves successfully after cancellation.
        apply_result(state, &token, Ok(42));

        assert_eq!(state.data.get_untracked(), None);
        assert_eq!(state.error.get_untracked(), None);
    }

    #[test]
    fn invalidated_binding_drops_late_responses() {
        let state = state();
        let coordinator = FetchCoordinator::new();

        let token = coordinator.issue();
        coordinator.invalidate();

        apply_result(state, &token, Ok(9));

        assert_eq!(state.data.get_untracked(), None);
    }

    #[test]
    fn cancelled_failure_leaves_empty_state_without_error() {
        let state = state();
        let coordinator = FetchCoordinator::new();

        state.loading.set(true);
        let token = coordinator.issue();
        apply_result(state, &token, Err(AppError::Cancelled));

        assert_eq!(state.data.get_untracked(), None);
        assert_eq!(state.error.get_untracked(), None);
        assert!(!state.loading.get_untracked());
    }

    #[test]
    fn failures_clear_loading_and_surface_the_error() {
        let state = state();
        let coordinator = FetchCoordinator::new();

        state.loading.set(true);
        let token = coordinator.issue();
        apply_result(state, &token, Err(AppError::Auth("expired".to_string())));

        assert_eq!(state.data.get_untracked(), None);
        assert_eq!(
            state.error.get_untracked(),
            Some(AppError::Auth("expired".to_string()))
        );
        assert!(!state.loading.get_untracked());
    }

    #[test]
    fn dependency_tracker_fires_once_per_value_change() {
        let tracker = DependencyTracker::new();

        assert!(tracker.changed(&(1u64, "a".to_string())));
        assert!(!tracker.changed(&(1u64, "a".to_string())));
        assert!(tracker.changed(&(2u64, "a".to_string())));
        assert!(!tracker.changed(&(2u64, "a".to_string())));
    }

    #[test]
    fn refresh_generation_is_edge_triggered() {
        let refresh = RefreshSignal::new();
        let tracker = DependencyTracker::new();

        // Mount: the initial snapshot always fetches.
        assert!(tracker.changed(&refresh.0.get_untracked()));

        // One trigger, exactly one re-fetch; re-evaluating without a new
        // trigger does not loop.
        refresh.trigger();
        assert!(tracker.changed(&refresh.0.get_untracked()));
        assert!(!tracker.changed(&refresh.0.get_untracked()));
    }
}
