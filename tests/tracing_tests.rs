//! Tests for tracing instrumentation.
//!
//! These tests verify that tracing events are emitted correctly
//! when the tracing feature is enabled.

#![cfg(feature = "tracing")]

use kmergen::alphabet::BaseSet;
use kmergen::run::{count_kmers, count_kmers_parallel};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

/// A simple layer that counts events at INFO level or above.
struct EventCounter {
    count: Arc<AtomicUsize>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if event.metadata().level() <= &Level::INFO {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn events_during<F: FnOnce()>(f: F) -> usize {
    let event_count = Arc::new(AtomicUsize::new(0));
    let layer = EventCounter {
        count: Arc::clone(&event_count),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    event_count.load(Ordering::SeqCst)
}

#[test]
fn count_kmers_emits_tracing_events() {
    let events = events_during(|| {
        let _counts = count_kmers("GATTACA", 2, BaseSet::Pure).expect("should count k-mers");
    });
    // start and completion
    assert_eq!(events, 2);
}

#[test]
fn parallel_count_emits_tracing_events() {
    let events = events_during(|| {
        let _counts =
            count_kmers_parallel("GATTACA", 2, BaseSet::Full).expect("should count k-mers");
    });
    assert!(events > 0, "should emit tracing events");
}

#[test]
fn short_sequence_skips_completion_event() {
    let events = events_during(|| {
        let _counts = count_kmers("AC", 3, BaseSet::Pure).expect("should count k-mers");
    });
    assert_eq!(events, 1);
}
