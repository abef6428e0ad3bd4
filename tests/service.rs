// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;

use toast_rack::diagnostics::{
    EventCapacity, DiagnosticEventKind, DiagnosticsCollector, DismissReason,
};
use toast_rack::domain::toast::{DismissAfter, Phase, Position};
use toast_rack::service::ToastService;
use toast_rack::ui::notifications::{Message, ToastApi, ToastId, ToastOptions};
use toast_rack::ui::surface::HeadlessDocument;

fn options(default_ms: u64) -> ToastOptions {
    ToastOptions::default()
        .with_position(Position::TopCenter)
        .with_default_duration(DismissAfter::from_millis(default_ms))
}

#[tokio::test(start_paused = true)]
async fn auto_dismissed_toasts_drain_before_run_returns() {
    let service = ToastService::new(HeadlessDocument::new(), &options(1000));
    let mut toaster = service.toaster();
    toaster.success("Saved", None);
    toaster.info("Synced", Some(DismissAfter::from_millis(50)));
    drop(toaster);

    let started = tokio::time::Instant::now();
    let manager = service.run().await;

    assert!(!manager.has_toasts());
    assert!(started.elapsed() >= Duration::from_millis(1300));
}

#[tokio::test(start_paused = true)]
async fn persistent_toast_is_left_visible() {
    let service = ToastService::new(HeadlessDocument::new(), &options(0));
    let mut toaster = service.toaster();
    toaster.error("Failed", None);
    drop(toaster);

    let manager = service.run().await;
    let toast = manager.active().next().expect("persistent toast");
    assert_eq!(manager.phase(toast.id()), Some(Phase::Visible));
}

#[tokio::test(start_paused = true)]
async fn dismiss_all_clears_persistent_toasts() {
    let service = ToastService::new(HeadlessDocument::new(), &options(0));
    let mut toaster = service.toaster();
    toaster.warning("one", None);
    toaster.error("two", None);
    toaster.dismiss_all();
    drop(toaster);

    let manager = service.run().await;
    assert_eq!(manager.active_count(), 0);
    assert_eq!(manager.rendered_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn clicks_dispatched_from_another_task_dismiss() {
    let mut collector = DiagnosticsCollector::new(EventCapacity::default());
    let mut service = ToastService::new(HeadlessDocument::new(), &options(0));
    service.set_diagnostics(collector.handle());
    let mut toaster = service.toaster();
    toaster.error("Failed", None);

    let host = tokio::spawn(service.run());

    tokio::time::sleep(Duration::from_millis(100)).await;
    collector.process_pending();
    let shown = collector
        .iter()
        .find_map(|event| match &event.kind {
            DiagnosticEventKind::ToastShown { id, .. } => Some(id.clone()),
            _ => None,
        })
        .expect("toast shown");

    // Outside the service task, ids are only observable through diagnostics
    let id: ToastId = shown.parse().expect("valid toast id");
    toaster.dispatch(Message::Clicked(id));
    drop(toaster);

    let manager = host.await.expect("service task");
    assert!(!manager.has_toasts());

    collector.process_pending();
    assert!(collector.iter().any(|event| matches!(
        event.kind,
        DiagnosticEventKind::ToastDismissed {
            reason: DismissReason::Clicked,
            ..
        }
    )));
}
