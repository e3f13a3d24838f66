//! Tests for the content host: load state derivation, the unlock
//! handshake, and channel lifetime.

use std::sync::Arc;

use serde_json::{json, Value};

use super::*;
use crate::bridge::ScriptChannel;
use crate::orientation::{ImmediateScheduler, TaskQueue};
use crate::testing::{FlagReachability, RecordingEngine, RecordingWindows};

struct Fixture {
    engine: Arc<RecordingEngine>,
    windows: Arc<RecordingWindows>,
    lock: Arc<OrientationLock>,
    host: ContentHost,
}

fn fixture() -> Fixture {
    let engine = RecordingEngine::new();
    let windows = RecordingWindows::with_windows(1);
    let lock = OrientationLock::new(Arc::new(ImmediateScheduler), windows.clone());
    let host = ContentHost::new(engine.clone(), lock.clone(), HostOptions::default());
    Fixture {
        engine,
        windows,
        lock,
        host,
    }
}

/// Host whose lock writes wait in a queue, so posted updates can be counted.
fn queued_fixture() -> (Arc<RecordingEngine>, Arc<TaskQueue>, ContentHost) {
    let engine = RecordingEngine::new();
    let queue = Arc::new(TaskQueue::new());
    let lock = OrientationLock::new(queue.clone(), RecordingWindows::with_windows(1));
    let host = ContentHost::new(engine.clone(), lock, HostOptions::default());
    // Flush the default seeding.
    queue.run_pending();
    (engine, queue, host)
}

// -- Setup --

#[test]
fn creation_configures_surface_once() {
    let f = fixture();
    assert_eq!(f.engine.configured(), vec![SurfaceSettings::default()]);
}

#[test]
fn creation_registers_both_channels() {
    let f = fixture();
    for channel in ScriptChannel::ALL {
        assert!(f.engine.is_registered(channel.name()));
    }
}

#[test]
fn creation_seeds_default_mask() {
    let f = fixture();
    assert_eq!(f.lock.current_mask(), OrientationMask::PORTRAIT);
    assert_eq!(f.host.supported_orientations(), OrientationMask::PORTRAIT);
    assert!(!f.host.is_orientation_unlocked());
}

#[test]
fn custom_default_orientations_are_applied() {
    let engine = RecordingEngine::new();
    let lock = OrientationLock::new(Arc::new(ImmediateScheduler), RecordingWindows::with_windows(0));
    let options = HostOptions {
        default_orientations: OrientationMask::LANDSCAPE,
        ..HostOptions::default()
    };
    let host = ContentHost::new(engine, lock, options);
    assert_eq!(host.supported_orientations(), OrientationMask::LANDSCAPE);
}

#[test]
fn initial_state_is_idle() {
    let f = fixture();
    assert_eq!(f.host.load_state(), LoadState::Idle);
}

// -- Load state derivation --

#[test]
fn successful_navigation_walks_progress_to_success() {
    let f = fixture();

    f.host.handle_navigation(NavigationEvent::Started);
    assert_eq!(f.host.load_state(), LoadState::progress(0.0));

    f.host.handle_navigation(NavigationEvent::Progress(0.5));
    assert_eq!(f.host.load_state(), LoadState::progress(0.5));

    f.host.handle_navigation(NavigationEvent::Finished);
    assert_eq!(f.host.load_state(), LoadState::Success);
}

#[test]
fn unreachable_failure_is_offline_not_error() {
    let f = fixture();
    f.host.handle_navigation(NavigationEvent::Started);
    f.host.handle_navigation(NavigationEvent::offline());
    assert_eq!(f.host.load_state(), LoadState::Offline);
    assert!(!f.host.load_state().has_error());
}

#[test]
fn other_failure_carries_description() {
    let f = fixture();
    f.host.handle_navigation(NavigationEvent::failed("timed out"));
    assert_eq!(f.host.load_state(), LoadState::error("timed out"));
}

#[test]
fn finish_without_reachability_is_offline() {
    let engine = RecordingEngine::new();
    let lock = OrientationLock::new(Arc::new(ImmediateScheduler), RecordingWindows::with_windows(0));
    let reachability = FlagReachability::new(false);
    let host = ContentHost::with_reachability(
        engine,
        lock,
        HostOptions::default(),
        reachability.clone(),
    );

    host.handle_navigation(NavigationEvent::Finished);
    assert_eq!(host.load_state(), LoadState::Offline);

    reachability.set(true);
    host.handle_navigation(NavigationEvent::Finished);
    assert_eq!(host.load_state(), LoadState::Success);
}

#[test]
fn progress_is_clamped() {
    let f = fixture();
    f.host.handle_navigation(NavigationEvent::Progress(1.7));
    assert_eq!(f.host.load_state(), LoadState::progress(1.0));
    f.host.handle_navigation(NavigationEvent::Progress(-0.2));
    assert_eq!(f.host.load_state(), LoadState::progress(0.0));
    f.host.handle_navigation(NavigationEvent::Progress(f64::NAN));
    assert_eq!(f.host.load_state(), LoadState::progress(0.0));
}

#[test]
fn navigation_sink_delivers_from_other_threads() {
    let f = fixture();
    let sink = f.host.navigation_sink();
    std::thread::spawn(move || sink.dispatch(NavigationEvent::Progress(0.25)))
        .join()
        .unwrap();
    assert_eq!(f.host.load_state(), LoadState::progress(0.25));
}

#[test]
fn hung_navigation_keeps_last_progress() {
    let f = fixture();
    f.host.handle_navigation(NavigationEvent::Started);
    f.host.handle_navigation(NavigationEvent::Progress(0.4));
    assert_eq!(f.host.load_state(), LoadState::progress(0.4));
}

#[tokio::test]
async fn subscriber_observes_latest_state() {
    let f = fixture();
    let mut rx = f.host.subscribe();
    assert_eq!(*rx.borrow(), LoadState::Idle);

    f.host.handle_navigation(NavigationEvent::Started);
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), LoadState::progress(0.0));

    f.host.handle_navigation(NavigationEvent::Progress(0.3));
    f.host.handle_navigation(NavigationEvent::Finished);
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), LoadState::Success);
}

#[tokio::test]
async fn repeated_identical_state_still_notifies() {
    let f = fixture();
    let mut rx = f.host.subscribe();

    f.host.handle_navigation(NavigationEvent::Finished);
    rx.changed().await.unwrap();
    rx.borrow_and_update();

    f.host.handle_navigation(NavigationEvent::Finished);
    assert!(rx.has_changed().unwrap());
}

// -- Orientation unlock --

#[test]
fn orientation_token_unlocks_all_orientations() {
    let f = fixture();
    let rotations = f.windows.rotations();

    assert!(f.engine.post("orientation", json!("OK")));

    assert_eq!(f.lock.current_mask(), OrientationMask::ALL);
    assert!(f.host.is_orientation_unlocked());
    assert_eq!(f.windows.rotations(), rotations + 1);
}

#[test]
fn second_token_changes_nothing() {
    let f = fixture();
    f.engine.post("orientation", json!("OK"));
    let refreshes = f.windows.refreshes();
    let rotations = f.windows.rotations();

    f.engine.post("orientation", json!("OK"));

    assert_eq!(f.lock.current_mask(), OrientationMask::ALL);
    assert_eq!(f.windows.refreshes(), refreshes);
    assert_eq!(f.windows.rotations(), rotations);
}

#[test]
fn repeated_tokens_post_one_lock_update() {
    let (engine, queue, host) = queued_fixture();

    engine.post("orientation", json!("ok"));
    engine.post("orientation", json!("ok"));
    engine.post("jsHandler", json!({"status": "ok"}));

    assert_eq!(queue.run_pending(), 1);
    assert_eq!(host.supported_orientations(), OrientationMask::ALL);
}

#[test]
fn concurrent_tokens_post_one_lock_update() {
    let (engine, queue, host) = queued_fixture();

    std::thread::scope(|s| {
        for i in 0..8 {
            let engine = Arc::clone(&engine);
            let channel = if i % 2 == 0 { "orientation" } else { "jsHandler" };
            s.spawn(move || engine.post(channel, json!("ok")));
        }
    });

    assert_eq!(queue.run_pending(), 1);
    assert!(host.is_orientation_unlocked());
}

#[test]
fn callback_channel_status_unlocks_like_orientation_channel() {
    let a = fixture();
    let b = fixture();
    let (rot_a, rot_b) = (a.windows.rotations(), b.windows.rotations());

    a.engine.post("orientation", json!("ok"));
    b.engine.post("jsHandler", json!({"status": "OK"}));

    assert_eq!(a.lock.current_mask(), b.lock.current_mask());
    assert_eq!(b.lock.current_mask(), OrientationMask::ALL);
    assert_eq!(a.windows.rotations() - rot_a, b.windows.rotations() - rot_b);
    assert!(b.host.is_orientation_unlocked());
}

#[test]
fn token_casing_variants_unlock() {
    for token in ["OK", "Ok", "ok"] {
        let f = fixture();
        f.engine.post("orientation", json!(token));
        assert_eq!(f.lock.current_mask(), OrientationMask::ALL, "token {token}");
    }
}

#[test]
fn near_miss_token_does_not_unlock() {
    let f = fixture();
    f.engine.post("orientation", json!("okay"));
    f.engine.post("jsHandler", json!({"status": "okay"}));
    assert_eq!(f.lock.current_mask(), OrientationMask::PORTRAIT);
    assert!(!f.host.is_orientation_unlocked());
}

#[test]
fn malformed_payloads_change_nothing() {
    let f = fixture();
    f.host.handle_navigation(NavigationEvent::Progress(0.6));
    let refreshes = f.windows.refreshes();

    let payloads: [Value; 4] = [json!(42), Value::Null, json!({"level": 3}), json!(["ok"])];
    for body in payloads {
        f.engine.post("orientation", body.clone());
        f.engine.post("jsHandler", body);
    }

    assert_eq!(f.lock.current_mask(), OrientationMask::PORTRAIT);
    assert_eq!(f.windows.refreshes(), refreshes);
    assert_eq!(f.host.load_state(), LoadState::progress(0.6));
    assert!(!f.host.is_orientation_unlocked());
}

#[test]
fn diagnostic_payload_has_no_other_effect() {
    let f = fixture();
    f.engine.post("jsHandler", json!({"event": "round_started", "round": 2}));
    f.engine.post("jsHandler", json!("hello from the page"));
    assert_eq!(f.lock.current_mask(), OrientationMask::PORTRAIT);
    assert_eq!(f.host.load_state(), LoadState::Idle);
}

#[test]
fn explicit_unlock_is_idempotent() {
    let f = fixture();
    let rotations = f.windows.rotations();
    f.host.unlock_orientation_if_needed();
    f.host.unlock_orientation_if_needed();
    assert_eq!(f.windows.rotations(), rotations + 1);
}

#[test]
fn new_host_after_unlock_sees_wider_mask() {
    let engine = RecordingEngine::new();
    let windows = RecordingWindows::with_windows(1);
    let lock = OrientationLock::new(Arc::new(ImmediateScheduler), windows.clone());

    let first = ContentHost::new(engine.clone(), lock.clone(), HostOptions::default());
    engine.post("orientation", json!("ok"));
    drop(first);

    let second = ContentHost::new(engine.clone(), lock.clone(), HostOptions::default());
    assert!(!second.is_orientation_unlocked());
    assert_eq!(second.supported_orientations(), OrientationMask::ALL);

    // The second host's own token still passes its local gate, but the
    // shared lock is already wide so no window is notified again.
    let rotations = windows.rotations();
    engine.post("orientation", json!("ok"));
    assert!(second.is_orientation_unlocked());
    assert_eq!(windows.rotations(), rotations);
}

// -- Teardown --

#[test]
fn drop_unregisters_both_channels() {
    let f = fixture();
    let engine = Arc::clone(&f.engine);
    drop(f);

    let mut removed = engine.removed();
    removed.sort();
    assert_eq!(removed, vec!["jsHandler".to_string(), "orientation".to_string()]);
    for channel in ScriptChannel::ALL {
        assert!(!engine.is_registered(channel.name()));
    }
}

#[test]
fn replacing_host_keeps_new_host_channels() {
    let engine = RecordingEngine::new();
    let windows = RecordingWindows::with_windows(1);
    let lock = OrientationLock::new(Arc::new(ImmediateScheduler), windows.clone());

    let mut slot = Some(ContentHost::new(
        engine.clone(),
        lock.clone(),
        HostOptions::default(),
    ));
    assert!(slot.as_ref().is_some_and(|h| !h.is_orientation_unlocked()));
    // The replacement is built before the old host is dropped.
    slot = Some(ContentHost::new(
        engine.clone(),
        lock.clone(),
        HostOptions::default(),
    ));

    for channel in ScriptChannel::ALL {
        assert!(engine.is_registered(channel.name()));
    }

    assert!(engine.post("orientation", json!("ok")));
    let host = slot.as_ref().unwrap();
    assert!(host.is_orientation_unlocked());
    assert_eq!(lock.current_mask(), OrientationMask::ALL);
}

#[test]
fn replacement_host_unlocks_over_callback_channel() {
    let engine = RecordingEngine::new();
    let lock = OrientationLock::new(
        Arc::new(ImmediateScheduler),
        RecordingWindows::with_windows(1),
    );

    let old = ContentHost::new(engine.clone(), lock.clone(), HostOptions::default());
    let new = ContentHost::new(engine.clone(), lock.clone(), HostOptions::default());
    drop(old);

    assert!(engine.post("jsHandler", json!({"status": "ok"})));
    assert!(new.is_orientation_unlocked());
}

#[test]
fn messages_after_drop_are_not_delivered() {
    let f = fixture();
    let engine = Arc::clone(&f.engine);
    let lock = Arc::clone(&f.lock);
    drop(f);

    assert!(!engine.post("orientation", json!("ok")));
    assert_eq!(lock.current_mask(), OrientationMask::PORTRAIT);
}

#[test]
fn navigation_sink_detaches_on_drop() {
    let f = fixture();
    let sink = f.host.navigation_sink();
    assert!(sink.is_attached());
    drop(f);

    assert!(!sink.is_attached());
    sink.dispatch(NavigationEvent::Finished);
}
