//! Card interaction tests
//!
//! Drive `CardState` the way the desktop view does: clicks go straight in,
//! timed transitions run through `after_delay` on a paused tokio clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bizcard_core::{
    after_delay, CardConfig, CardError, CardState, ClickOrigin, ClipboardWriter, Profile,
    SealState, TiltTracker,
};

// ============================================================================
// Helpers
// ============================================================================

#[derive(Default)]
struct FakeClipboard {
    contents: Option<String>,
    broken: bool,
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&mut self, text: &str) -> bizcard_core::Result<()> {
        if self.broken {
            return Err(CardError::Clipboard("clipboard unavailable".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

fn shared_card() -> Arc<Mutex<CardState>> {
    Arc::new(Mutex::new(CardState::default()))
}

// ============================================================================
// Flip
// ============================================================================

#[test]
fn test_surface_click_toggles_flip() {
    let mut card = CardState::default();
    assert!(card.handle_click(ClickOrigin::Surface));
    assert!(card.flip().is_flipped());
    assert!(card.handle_click(ClickOrigin::Surface));
    assert!(!card.flip().is_flipped());
}

#[test]
fn test_child_clicks_never_toggle_flip() {
    let mut card = CardState::default();
    card.handle_click(ClickOrigin::Surface);

    for origin in [ClickOrigin::Link, ClickOrigin::Copyable, ClickOrigin::Seal] {
        assert!(!card.handle_click(origin));
        assert!(card.flip().is_flipped(), "{origin:?} must not flip the card");
    }
}

// ============================================================================
// Copy
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_copy_phone_acknowledges_then_reverts() {
    let profile = Profile::default();
    let card = shared_card();
    let mut clipboard = FakeClipboard::default();

    let (ticket, delay) = card.lock().unwrap().copy(&mut clipboard, &profile.phone).unwrap();
    assert_eq!(clipboard.contents.as_deref(), Some("+84902881467"));
    assert_eq!(delay, Duration::from_millis(1500));

    let c = card.clone();
    let revert = tokio::spawn(after_delay(delay, move || {
        c.lock().unwrap().revert_copy(ticket)
    }));

    tokio::time::sleep(Duration::from_millis(1499)).await;
    {
        let state = card.lock().unwrap();
        assert_eq!(state.copy_feedback().copied(), Some("+84 902 881 467"));
        assert_eq!(state.copy_feedback().label("+84 902 881 467"), "Copied!");
    }

    assert!(revert.await.unwrap());
    let state = card.lock().unwrap();
    assert_eq!(state.copy_feedback().copied(), None);
    assert_eq!(
        state.copy_feedback().label("+84 902 881 467"),
        "+84 902 881 467"
    );
}

#[tokio::test(start_paused = true)]
async fn test_rapid_copies_keep_latest_acknowledgement() {
    let profile = Profile::default();
    let card = shared_card();
    let mut clipboard = FakeClipboard::default();

    let (first, delay) = card.lock().unwrap().copy(&mut clipboard, &profile.phone).unwrap();
    let c = card.clone();
    let first_revert = tokio::spawn(after_delay(delay, move || {
        c.lock().unwrap().revert_copy(first)
    }));

    tokio::time::sleep(Duration::from_millis(500)).await;

    let (second, delay) = card.lock().unwrap().copy(&mut clipboard, &profile.email).unwrap();
    let c = card.clone();
    let second_revert = tokio::spawn(after_delay(delay, move || {
        c.lock().unwrap().revert_copy(second)
    }));

    // The first revert fires at 1500ms but is stale
    assert!(!first_revert.await.unwrap());
    assert_eq!(
        card.lock().unwrap().copy_feedback().copied(),
        Some("quangdo1206@gmail.com")
    );
    assert_eq!(clipboard.contents.as_deref(), Some("quangdo1206@gmail.com"));

    // The second revert clears it at 2000ms
    assert!(second_revert.await.unwrap());
    assert_eq!(card.lock().unwrap().copy_feedback().copied(), None);
}

#[test]
fn test_clipboard_failure_changes_nothing() {
    let profile = Profile::default();
    let mut card = CardState::default();
    card.handle_click(ClickOrigin::Surface);
    let before = card.clone();

    let mut clipboard = FakeClipboard {
        broken: true,
        ..Default::default()
    };
    assert!(card.copy(&mut clipboard, &profile.phone).is_none());
    assert_eq!(card, before);
}

// ============================================================================
// Seal
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_seal_scratch_sequence() {
    let card = shared_card();

    let delay = card.lock().unwrap().scratch().unwrap();
    assert_eq!(card.lock().unwrap().seal(), SealState::Scratching);

    let c = card.clone();
    let finish = tokio::spawn(after_delay(delay, move || {
        c.lock().unwrap().finish_scratch()
    }));

    // Clicking mid-scratch does nothing
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(card.lock().unwrap().scratch(), None);
    assert_eq!(card.lock().unwrap().seal(), SealState::Scratching);

    assert!(finish.await.unwrap());
    let mut state = card.lock().unwrap();
    assert_eq!(state.seal(), SealState::Scratched);
    assert!(!state.seal().is_visible());

    // And after it is gone
    assert_eq!(state.scratch(), None);
    assert_eq!(state.seal(), SealState::Scratched);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_discards_pending_scratch() {
    let card = shared_card();
    let delay = card.lock().unwrap().scratch().unwrap();

    let c = card.clone();
    let finish = tokio::spawn(after_delay(delay, move || {
        c.lock().unwrap().finish_scratch()
    }));

    tokio::time::sleep(Duration::from_millis(100)).await;
    finish.abort();
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(card.lock().unwrap().seal(), SealState::Scratching);
}

// ============================================================================
// Tilt spring-back
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_second_exit_keeps_slow_transition() {
    let config = CardConfig::default();
    let tilt = Arc::new(Mutex::new(TiltTracker::new(&config)));

    // Leave, re-enter and leave again 200ms later
    tilt.lock().unwrap().enter();
    let first = tilt.lock().unwrap().leave();
    let t = tilt.clone();
    let first_restore = tokio::spawn(after_delay(config.reset_transition, move || {
        t.lock().unwrap().finish_spring_back(first)
    }));

    tokio::time::sleep(Duration::from_millis(200)).await;
    tilt.lock().unwrap().enter();
    let second = tilt.lock().unwrap().leave();
    let t = tilt.clone();
    let second_restore = tokio::spawn(after_delay(config.reset_transition, move || {
        t.lock().unwrap().finish_spring_back(second)
    }));

    // The first timer fires at 500ms, mid second spring-back, and is ignored
    assert!(!first_restore.await.unwrap());
    assert!(tilt.lock().unwrap().is_springing_back());

    // The second restores tracking at 700ms
    assert!(second_restore.await.unwrap());
    assert!(!tilt.lock().unwrap().is_springing_back());
}
