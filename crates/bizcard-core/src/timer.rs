//! One-shot delayed actions.

use std::time::Duration;

/// Sleep for `delay`, then run `action`.
///
/// Dropping the returned future before the delay elapses discards the
/// action, which is how a view teardown cancels its pending transitions.
pub async fn after_delay<T>(delay: Duration, action: impl FnOnce() -> T) -> T {
    tokio::time::sleep(delay).await;
    action()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let start = tokio::time::Instant::now();

        after_delay(Duration::from_millis(600), move || flag.set(true)).await;

        assert!(fired.get());
        assert!(start.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_future_never_fires() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let pending = after_delay(Duration::from_millis(600), move || flag.set(true));
        let timed_out =
            tokio::time::timeout(Duration::from_millis(100), pending).await.is_err();

        assert!(timed_out);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!fired.get());
    }
}
