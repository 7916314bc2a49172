//! Delivery-ordering tests for the coordinator.
//!
//! These cover the cold-start races: a push arriving before any listener,
//! listeners arriving before any push, pull-style draining, teardown reset,
//! and concurrent native publishes against listener registration.

use std::sync::{Arc, Mutex};
use std::thread;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use super::{DeliveryCoordinator, DrainMode, EventSink, PushKind};
use crate::sdk::DeliveryHandler;

struct RecordingSink {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingSink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
        })
    }

    fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit_event(&self, event: &str, payload: &Value) -> Result<(), String> {
        self.events
            .lock()
            .unwrap()
            .push((event.to_string(), payload.clone()));
        Ok(())
    }
}

fn collector() -> (Arc<Mutex<Vec<Value>>>, impl Fn(&Value) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |payload: &Value| {
        sink.lock().unwrap().push(payload.clone())
    })
}

fn subscribe_collecting(
    coordinator: &DeliveryCoordinator,
    kind: PushKind,
) -> Arc<Mutex<Vec<Value>>> {
    let (seen, callback) = collector();
    coordinator.subscribe_or_drain(kind, callback);
    seen
}

fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn publish_before_subscribe_delivers_buffered_payload_once() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Received, r#"{"msg":"hi"}"#);

    let seen = subscribe_collecting(&coordinator, PushKind::Received);

    assert_eq!(*seen.lock().unwrap(), vec![json!({"msg": "hi"})]);
    // The buffered value was consumed; a pump must not see it again.
    assert!(coordinator.drain_on_demand(DrainMode::Collect).is_empty());
}

#[test]
fn subscribe_before_publish_delivers_via_dispatch() {
    let coordinator = DeliveryCoordinator::new();
    let seen = subscribe_collecting(&coordinator, PushKind::Opened);
    assert!(seen.lock().unwrap().is_empty());

    coordinator.publish(PushKind::Opened, r#"{"msg":"hi"}"#);

    assert_eq!(*seen.lock().unwrap(), vec![json!({"msg": "hi"})]);
}

#[test]
fn worked_example_redelivers_each_payload_separately() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Received, r#"{"msg":"hi"}"#);

    let seen = subscribe_collecting(&coordinator, PushKind::Received);
    coordinator.publish(PushKind::Received, r#"{"msg":"bye"}"#);

    // One invocation per payload, never both in one call.
    assert_eq!(
        *seen.lock().unwrap(),
        vec![json!({"msg": "hi"}), json!({"msg": "bye"})]
    );
}

#[test]
fn each_kind_buffers_independently() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Opened, r#"{"kind":"opened"}"#);
    coordinator.publish(PushKind::Received, r#"{"kind":"received"}"#);

    let opened = subscribe_collecting(&coordinator, PushKind::Opened);
    let received = subscribe_collecting(&coordinator, PushKind::Received);

    assert_eq!(*opened.lock().unwrap(), vec![json!({"kind": "opened"})]);
    assert_eq!(*received.lock().unwrap(), vec![json!({"kind": "received"})]);
}

#[test]
fn newer_publish_overwrites_undelivered_payload() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Opened, r#"{"n":1}"#);
    coordinator.publish(PushKind::Opened, r#"{"n":2}"#);

    let seen = subscribe_collecting(&coordinator, PushKind::Opened);

    // Last write wins; the overwritten payload is gone.
    assert_eq!(*seen.lock().unwrap(), vec![json!({"n": 2})]);
}

#[test]
fn later_subscribers_only_share_future_publishes() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Received, r#"{"msg":"hi"}"#);

    let first = subscribe_collecting(&coordinator, PushKind::Received);
    let second = subscribe_collecting(&coordinator, PushKind::Received);
    assert!(second.lock().unwrap().is_empty());

    coordinator.publish(PushKind::Received, r#"{"msg":"bye"}"#);

    assert_eq!(
        *first.lock().unwrap(),
        vec![json!({"msg": "hi"}), json!({"msg": "bye"})]
    );
    assert_eq!(*second.lock().unwrap(), vec![json!({"msg": "bye"})]);
}

#[test]
fn pump_never_returns_the_same_payload_twice() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Opened, r#"{"n":1}"#);
    coordinator.publish(PushKind::Received, r#"{"n":2}"#);

    let first = coordinator.drain_on_demand(DrainMode::Collect);
    assert_eq!(first.opened, Some(json!({"n": 1})));
    assert_eq!(first.received, Some(json!({"n": 2})));

    let second = coordinator.drain_on_demand(DrainMode::Collect);
    assert!(second.is_empty());
}

#[test]
fn teardown_resets_to_cold_start() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Opened, r#"{"stale":true}"#);
    let seen = subscribe_collecting(&coordinator, PushKind::Opened);

    coordinator.teardown();

    // A fresh publish then a fresh first subscription behaves exactly like
    // the cold-start case.
    coordinator.publish(PushKind::Opened, r#"{"fresh":true}"#);
    let seen_after = subscribe_collecting(&coordinator, PushKind::Opened);

    assert_eq!(*seen_after.lock().unwrap(), vec![json!({"fresh": true})]);
    assert_eq!(*seen.lock().unwrap(), vec![json!({"stale": true})]);
}

#[test]
fn teardown_discards_undelivered_payloads() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Received, r#"{"n":1}"#);

    coordinator.teardown();

    assert!(coordinator.drain_on_demand(DrainMode::Collect).is_empty());
}

#[test]
fn undecodable_payload_is_kept_for_a_later_drain() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Opened, "not json");

    // The drain refuses to drop what it cannot decode.
    assert!(coordinator.drain_on_demand(DrainMode::Collect).is_empty());

    // A newer decodable publish overwrites and drains normally.
    coordinator.publish(PushKind::Opened, r#"{"ok":true}"#);
    let drained = coordinator.drain_on_demand(DrainMode::Collect);
    assert_eq!(drained.opened, Some(json!({"ok": true})));
}

#[test]
fn undecodable_buffered_payload_does_not_break_subscription() {
    init_test_logging();
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Opened, "not json");

    let seen = subscribe_collecting(&coordinator, PushKind::Opened);
    assert!(seen.lock().unwrap().is_empty());

    // The subscription still took effect for future publishes.
    coordinator.publish(PushKind::Opened, r#"{"ok":true}"#);
    assert_eq!(*seen.lock().unwrap(), vec![json!({"ok": true})]);
}

#[test]
fn stream_emission_waits_for_initialization() {
    let coordinator = DeliveryCoordinator::new();
    let sink = RecordingSink::new();
    coordinator.attach_session(sink.clone());

    coordinator.publish(PushKind::Received, r#"{"n":1}"#);
    assert!(sink.events().is_empty());

    coordinator.mark_initialized();
    coordinator.publish(PushKind::Received, r#"{"n":2}"#);
    assert_eq!(
        sink.events(),
        vec![("pushReceived".to_string(), json!({"n": 2}))]
    );
}

#[test]
fn broadcast_drain_emits_public_names() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Opened, r#"{"n":1}"#);
    coordinator.publish(PushKind::Received, r#"{"n":2}"#);

    let sink = RecordingSink::new();
    coordinator.attach_session(sink.clone());

    let drained = coordinator.drain_on_demand(DrainMode::Broadcast);
    assert!(drained.is_empty());
    assert_eq!(
        sink.events(),
        vec![
            ("pushOpened".to_string(), json!({"n": 1})),
            ("pushReceived".to_string(), json!({"n": 2})),
        ]
    );

    // Broadcast also consumed the slots.
    assert!(coordinator.drain_on_demand(DrainMode::Collect).is_empty());
}

#[test]
fn broadcast_drain_without_session_keeps_payloads() {
    let coordinator = DeliveryCoordinator::new();
    coordinator.publish(PushKind::Opened, r#"{"n":1}"#);

    assert!(coordinator.drain_on_demand(DrainMode::Broadcast).is_empty());

    // Still buffered: a later collect pulls it.
    let drained = coordinator.drain_on_demand(DrainMode::Collect);
    assert_eq!(drained.opened, Some(json!({"n": 1})));
}

#[test]
fn native_delivery_handler_routes_into_the_coordinator() {
    let coordinator = Arc::new(DeliveryCoordinator::new());
    let handler: Arc<dyn DeliveryHandler> = coordinator.clone();

    handler.push_opened(r#"{"via":"handler"}"#);
    handler.push_received(r#"{"n":1}"#);

    let drained = coordinator.drain_on_demand(DrainMode::Collect);
    assert_eq!(drained.opened, Some(json!({"via": "handler"})));
    assert_eq!(drained.received, Some(json!({"n": 1})));
}

#[test]
fn concurrent_publishes_never_lose_or_reorder_the_latest_payload() {
    init_test_logging();
    let coordinator = Arc::new(DeliveryCoordinator::new());

    let mut handles = Vec::new();
    for kind in [PushKind::Opened, PushKind::Received] {
        let coordinator = Arc::clone(&coordinator);
        handles.push(thread::spawn(move || {
            for n in 0..100 {
                coordinator.publish(kind, &json!({ "seq": n }).to_string());
            }
        }));
    }

    let opened = subscribe_collecting(&coordinator, PushKind::Opened);
    let received = subscribe_collecting(&coordinator, PushKind::Received);

    for handle in handles {
        handle.join().unwrap();
    }

    for (kind, seen) in [(PushKind::Opened, opened), (PushKind::Received, received)] {
        let seqs: Vec<i64> = seen
            .lock()
            .unwrap()
            .iter()
            .map(|v| v["seq"].as_i64().unwrap())
            .collect();
        assert!(!seqs.is_empty(), "no {kind} delivery at all");
        // Strictly increasing: no duplicate delivery, and never a stale
        // payload after a newer one overwrote it pre-consumption.
        assert!(
            seqs.windows(2).all(|w| w[0] < w[1]),
            "{kind} deliveries out of order: {seqs:?}"
        );
        // The final publish always reaches the registered consumer.
        assert_eq!(*seqs.last().unwrap(), 99);
    }
}
