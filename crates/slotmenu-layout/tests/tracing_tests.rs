#![forbid(unsafe_code)]

//! Tracing instrumentation tests.
//!
//! Spans enabled:
//!   cargo test -p slotmenu-layout --features tracing --test tracing_tests
//!
//! Without the feature, only the no-span check runs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use slotmenu_core::geometry::Size;
use slotmenu_layout::{Menu, MenuConfiguration, MenuKind, RecordingAdapter, RegistryHandle};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    message: String,
}

struct Capture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let message = visitor
            .0
            .into_iter()
            .find(|(name, _)| name == "message")
            .map(|(_, value)| value)
            .unwrap_or_default();
        self.events.lock().unwrap().push(CapturedEvent { message });
    }
}

fn with_captured<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        spans: spans.clone(),
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

fn scrolling_menu() -> Menu {
    let config = MenuConfiguration::builder()
        .kind(MenuKind::Vertical)
        .navigation_buttons(true)
        .build()
        .unwrap();
    Menu::new(config, RegistryHandle::default())
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn fill_emits_span_with_option_count() {
    let handle = with_captured(|| {
        let mut menu = scrolling_menu();
        let mut adapter = RecordingAdapter::new(Size::new(100.0, 20.0));
        menu.fill(["A", "B", "C"], &mut adapter).unwrap();
    });

    let spans = handle.spans();
    let fill = spans
        .iter()
        .find(|s| s.name == "menu_fill")
        .expect("menu_fill span");
    assert_eq!(fill.fields.get("options").map(String::as_str), Some("3"));
    assert_eq!(fill.fields.get("kind").map(String::as_str), Some("Vertical"));

    let events = handle.events();
    assert!(
        events.iter().any(|e| e.message.contains("exceeds visible slot limit")),
        "expected slot-limit event, got {events:?}"
    );
}

#[test]
#[cfg(feature = "tracing")]
fn bump_emits_span_and_clamp_event() {
    let handle = with_captured(|| {
        let mut menu = scrolling_menu();
        let mut adapter = RecordingAdapter::new(Size::new(100.0, 20.0));
        menu.fill(["A", "B"], &mut adapter).unwrap();
        // Everything fits; the bump is clamped.
        menu.bump_forward().unwrap();
    });

    let spans = handle.spans();
    let bump = spans
        .iter()
        .find(|s| s.name == "menu_bump")
        .expect("menu_bump span");
    assert_eq!(bump.fields.get("direction").map(String::as_str), Some("Forward"));
    assert_eq!(bump.fields.get("offset").map(String::as_str), Some("0"));

    assert!(handle.events().iter().any(|e| e.message == "bump clamped"));
}

#[test]
#[cfg(feature = "tracing")]
fn registry_configure_emits_event() {
    let handle = with_captured(|| {
        let registry = RegistryHandle::default();
        registry.configure(slotmenu_layout::SizeProfile::Large, 140.0);
    });
    assert!(
        handle
            .events()
            .iter()
            .any(|e| e.message == "slot size profile configured")
    );
}

#[test]
#[cfg(not(feature = "tracing"))]
fn no_spans_without_feature() {
    let handle = with_captured(|| {
        let mut menu = scrolling_menu();
        let mut adapter = RecordingAdapter::new(Size::new(100.0, 20.0));
        menu.fill(["A", "B", "C"], &mut adapter).unwrap();
        menu.bump_forward().unwrap();
    });
    assert!(handle.spans().is_empty());
}
