// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the registry of active toasts and their rendered
//! elements. It renders into a [`Surface`] and defers every continuation
//! (entry frames, auto-dismiss, exit completion) through a [`Scheduler`].

use super::{Message, Toast, ToastApi, ToastId, ToastOptions};
use crate::config::EXIT_TRANSITION_MS;
use crate::diagnostics::{DiagnosticsHandle, DismissReason, WarningEvent, WarningType};
use crate::domain::toast::{Category, DismissAfter, Phase, Position};
use crate::scheduler::{ManualScheduler, Scheduler};
use crate::ui::surface::styles::{self, class};
use crate::ui::surface::{icons, ElementHandle, Surface};
use std::collections::HashMap;
use std::time::Duration;

/// A toast element still attached to the container.
#[derive(Debug, Clone, Copy)]
struct Rendered {
    element: ElementHandle,
    phase: Phase,
}

/// Owns the active toasts and the container they render into.
///
/// The registry drops a toast as soon as it is dismissed; its element stays
/// attached, fading out, until [`Message::ExitComplete`] arrives.
/// [`is_displayed`](Self::is_displayed) covers that window.
#[derive(Debug)]
pub struct Manager<S: Surface, K: Scheduler> {
    surface: S,
    scheduler: K,
    container: ElementHandle,
    position: Position,
    default_duration: DismissAfter,
    /// Active toasts in insertion order.
    registry: Vec<Toast>,
    rendered: HashMap<ToastId, Rendered>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Surface, K: Scheduler> Manager<S, K> {
    /// Installs the manager on `surface`.
    ///
    /// Injects the shared style sheet and mounts the container unless the
    /// surface already has them, so installing on the same document twice
    /// never duplicates either.
    ///
    /// Toasts left in a reused container by an earlier installation are
    /// detached: no manager tracks them any more, so nothing else would.
    pub fn install(mut surface: S, scheduler: K, options: &ToastOptions) -> Self {
        styles::inject(&mut surface);
        let container = mount_container(&mut surface, options.position());
        for orphan in surface.children(container) {
            surface.detach(orphan);
        }

        Self {
            surface,
            scheduler,
            container,
            position: options.position(),
            default_duration: options.default_duration(),
            registry: Vec::new(),
            rendered: HashMap::new(),
            diagnostics: None,
        }
    }

    /// Applies new options to the existing installation.
    ///
    /// Only the container's position class changes; toasts already shown
    /// keep their elements and timers.
    pub fn reinstall(&mut self, options: &ToastOptions) {
        styles::inject(&mut self.surface);
        self.container = mount_container(&mut self.surface, options.position());
        self.position = options.position();
        self.default_duration = options.default_duration();

        if let Some(handle) = &self.diagnostics {
            handle.log_installed(self.position, self.default_duration, true);
        }
    }

    /// Sets the diagnostics handle for logging lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        handle.log_installed(self.position, self.default_duration, false);
        self.diagnostics = Some(handle);
    }

    /// Shows a toast and returns its id.
    ///
    /// `None` uses the installation default duration. The element is attached
    /// in its pre-animation state and becomes visible two frames later.
    pub fn add(
        &mut self,
        message: impl Into<String>,
        category: Category,
        duration: Option<DismissAfter>,
    ) -> ToastId {
        let mut id = ToastId::generate();
        while self.rendered.contains_key(&id) {
            id = ToastId::generate();
        }
        let toast = Toast::new(
            id.clone(),
            message,
            category,
            duration.unwrap_or(self.default_duration),
        );

        let element = self.render(&toast);
        // Newest toast sits closest to the anchored edge
        if self.position.is_top() {
            self.surface.prepend_child(self.container, element);
        } else {
            self.surface.append_child(self.container, element);
        }
        self.rendered.insert(
            id.clone(),
            Rendered {
                element,
                phase: Phase::Pending,
            },
        );

        self.scheduler.request_frame(Message::EnterFrame(id.clone()));
        if let Some(delay) = toast.duration().as_duration() {
            self.scheduler.set_timeout(delay, Message::Expired(id.clone()));
        }

        if let Some(handle) = &self.diagnostics {
            handle.log_shown(&toast);
        }
        self.registry.push(toast);
        id
    }

    /// Shows a toast whose category is given by name.
    ///
    /// Unknown names degrade to [`Category::Info`] and log a warning.
    pub fn add_kind(
        &mut self,
        message: impl Into<String>,
        kind: &str,
        duration: Option<DismissAfter>,
    ) -> ToastId {
        let category = match Category::parse(kind) {
            Some(category) => category,
            None => {
                if let Some(handle) = &self.diagnostics {
                    handle.log_warning(WarningEvent::new(
                        WarningType::UnknownCategory,
                        format!("unknown toast category '{kind}', using info"),
                    ));
                }
                Category::Info
            }
        };
        self.add(message, category, duration)
    }

    pub fn success(&mut self, message: impl Into<String>, duration: Option<DismissAfter>) -> ToastId {
        self.add(message, Category::Success, duration)
    }

    pub fn error(&mut self, message: impl Into<String>, duration: Option<DismissAfter>) -> ToastId {
        self.add(message, Category::Error, duration)
    }

    pub fn warning(&mut self, message: impl Into<String>, duration: Option<DismissAfter>) -> ToastId {
        self.add(message, Category::Warning, duration)
    }

    pub fn info(&mut self, message: impl Into<String>, duration: Option<DismissAfter>) -> ToastId {
        self.add(message, Category::Info, duration)
    }

    /// Dismisses a toast.
    ///
    /// Returns `false`, changing nothing, if `id` is not in the registry
    /// (unknown, or already dismissed and fading out).
    pub fn remove(&mut self, id: &ToastId) -> bool {
        self.dismiss(id, DismissReason::Programmatic)
    }

    /// Dismisses every active toast. Returns how many were dismissed.
    pub fn dismiss_all(&mut self) -> usize {
        let ids: Vec<ToastId> = self.registry.iter().map(|t| t.id().clone()).collect();
        ids.iter()
            .filter(|id| self.dismiss(id, DismissReason::Programmatic))
            .count()
    }

    /// Handles a scheduled continuation or an interaction.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::EnterFrame(id) => {
                // The first paint may coalesce with attachment; wait for a second one
                if self.phase(&id) == Some(Phase::Pending) {
                    self.scheduler.request_frame(Message::EnterCommit(id));
                }
            }
            Message::EnterCommit(id) => {
                if let Some(rendered) = self.rendered.get_mut(&id) {
                    if rendered.phase.advance_to(Phase::Visible) {
                        self.surface.add_class(rendered.element, class::VISIBLE);
                    }
                }
            }
            Message::Expired(id) => {
                self.dismiss(&id, DismissReason::Expired);
            }
            Message::Clicked(id) => {
                self.dismiss(&id, DismissReason::Clicked);
            }
            Message::ExitComplete(id) => {
                if self.phase(&id) == Some(Phase::Dismissing) {
                    if let Some(rendered) = self.rendered.remove(&id) {
                        self.surface.detach(rendered.element);
                    }
                }
            }
        }
    }

    fn dismiss(&mut self, id: &ToastId, reason: DismissReason) -> bool {
        let Some(index) = self.registry.iter().position(|t| t.id() == id) else {
            return false;
        };
        self.registry.remove(index);

        if let Some(rendered) = self.rendered.get_mut(id) {
            if rendered.phase.advance_to(Phase::Dismissing) {
                self.surface.remove_class(rendered.element, class::VISIBLE);
                self.scheduler.set_timeout(
                    Duration::from_millis(EXIT_TRANSITION_MS),
                    Message::ExitComplete(id.clone()),
                );
            }
        }

        if let Some(handle) = &self.diagnostics {
            handle.log_dismissed(id.as_str(), reason);
        }
        true
    }

    fn render(&mut self, toast: &Toast) -> ElementHandle {
        let element = self.surface.create_element("div");
        self.surface.set_class_name(
            element,
            &format!("{} {}", class::TOAST, toast.category().css_class()),
        );

        let icon = self.surface.create_element("div");
        self.surface.set_class_name(icon, class::ICON);
        self.surface
            .set_inner_markup(icon, icons::for_category(toast.category()));
        self.surface.append_child(element, icon);

        let text = self.surface.create_element("div");
        self.surface.set_class_name(text, class::MESSAGE);
        self.surface.set_text(text, toast.message());
        self.surface.append_child(element, text);

        self.surface
            .on_click(element, Message::Clicked(toast.id().clone()));
        element
    }

    /// Active toasts in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.registry.iter()
    }

    /// Looks up an active toast.
    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.registry.iter().find(|t| t.id() == id)
    }

    /// Number of toasts in the registry.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of toast elements attached, including those fading out.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.rendered.is_empty()
    }

    /// Returns whether the toast's element is still attached.
    ///
    /// Stays true during the exit transition, after the registry entry is gone.
    #[must_use]
    pub fn is_displayed(&self, id: &ToastId) -> bool {
        self.rendered.contains_key(id)
    }

    /// Lifecycle phase of a rendered toast; `None` once detached.
    #[must_use]
    pub fn phase(&self, id: &ToastId) -> Option<Phase> {
        self.rendered.get(id).map(|r| r.phase)
    }

    /// Element rendering the toast, while attached.
    #[must_use]
    pub fn element(&self, id: &ToastId) -> Option<ElementHandle> {
        self.rendered.get(id).map(|r| r.element)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn default_duration(&self) -> DismissAfter {
        self.default_duration
    }

    /// The container every toast is rendered into.
    #[must_use]
    pub fn container(&self) -> ElementHandle {
        self.container
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for hosts that render more than toasts.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler_mut(&mut self) -> &mut K {
        &mut self.scheduler
    }

    /// Consumes the manager, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: Surface> Manager<S, ManualScheduler> {
    /// Delivers every frame request pending before this paint.
    pub fn paint(&mut self) {
        for message in self.scheduler.paint() {
            self.update(message);
        }
    }

    /// Advances the virtual clock by `by`, firing timers in due order.
    ///
    /// Timers scheduled by fired messages also fire if they fall due
    /// within the window.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.scheduler.now() + by;
        while let Some(message) = self.scheduler.pop_due(deadline) {
            self.update(message);
        }
        self.scheduler.advance_to(deadline);
    }
}

impl<S: Surface, K: Scheduler> ToastApi for Manager<S, K> {
    fn add(&mut self, message: impl Into<String>, category: Category, duration: Option<DismissAfter>) {
        Manager::add(self, message, category, duration);
    }
}

/// Finds or creates the container and applies the position class.
fn mount_container<S: Surface>(surface: &mut S, position: Position) -> ElementHandle {
    let container = match surface.first_by_class(class::CONTAINER) {
        Some(existing) => existing,
        None => {
            let created = surface.create_element("div");
            surface.append_to_body(created);
            created
        }
    };
    surface.set_class_name(
        container,
        &format!("{} {}", class::CONTAINER, position.css_class()),
    );
    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{EventCapacity, DiagnosticEventKind, DiagnosticsCollector};
    use crate::ui::surface::HeadlessDocument;

    type TestManager = Manager<HeadlessDocument, ManualScheduler>;

    fn install(position: Position, default_ms: u64) -> TestManager {
        let options = ToastOptions::default()
            .with_position(position)
            .with_default_duration(DismissAfter::from_millis(default_ms));
        Manager::install(HeadlessDocument::new(), ManualScheduler::new(), &options)
    }

    fn children(manager: &TestManager) -> Vec<ElementHandle> {
        manager.surface().children(manager.container())
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn install_mounts_positioned_container() {
        let manager = install(Position::TopCenter, 3000);
        let doc = manager.surface();

        assert_eq!(
            doc.class_name(manager.container()),
            "toast-container toast-pos-top-center"
        );
        assert_eq!(doc.count_by_id(styles::STYLE_BLOCK_ID), 1);
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn add_renders_pending_element_with_category_class() {
        let mut manager = install(Position::BottomRight, 3000);
        let id = manager.success("Saved", None);

        let element = manager.element(&id).expect("element");
        let doc = manager.surface();
        assert_eq!(doc.class_name(element), "toast toast-success");
        assert_eq!(doc.text_content(element), "Saved");
        assert!(!doc.has_class(element, class::VISIBLE));
        assert_eq!(manager.phase(&id), Some(Phase::Pending));
        assert_eq!(manager.get(&id).map(Toast::message), Some("Saved"));
    }

    #[test]
    fn visible_marker_needs_two_paints() {
        let mut manager = install(Position::BottomRight, 3000);
        let id = manager.info("hello", None);
        let element = manager.element(&id).expect("element");

        manager.paint();
        assert!(!manager.surface().has_class(element, class::VISIBLE));
        assert_eq!(manager.phase(&id), Some(Phase::Pending));

        manager.paint();
        assert!(manager.surface().has_class(element, class::VISIBLE));
        assert_eq!(manager.phase(&id), Some(Phase::Visible));
    }

    #[test]
    fn expiry_removes_registry_entry_then_element() {
        let mut manager = install(Position::BottomRight, 1000);
        let id = manager.warning("careful", None);
        manager.paint();
        manager.paint();

        manager.advance(ms(999));
        assert_eq!(manager.active_count(), 1);

        manager.advance(ms(1));
        assert_eq!(manager.active_count(), 0);
        assert!(manager.is_displayed(&id));
        assert_eq!(manager.phase(&id), Some(Phase::Dismissing));
        let element = manager.element(&id).expect("still attached");
        assert!(!manager.surface().has_class(element, class::VISIBLE));

        manager.advance(ms(EXIT_TRANSITION_MS));
        assert!(!manager.is_displayed(&id));
        assert!(children(&manager).is_empty());
    }

    #[test]
    fn explicit_duration_overrides_default() {
        let mut manager = install(Position::BottomRight, 5000);
        manager.info("quick", Some(DismissAfter::from_millis(200)));

        manager.advance(ms(200));
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn zero_default_duration_disables_auto_dismiss() {
        let mut manager = install(Position::BottomRight, 0);
        manager.info("sticky", None);

        manager.advance(Duration::from_secs(3600));
        assert_eq!(manager.active_count(), 1);
        assert_eq!(manager.scheduler_mut().pending_timers(), 0);
    }

    #[test]
    fn click_dismisses_persistent_toast() {
        let mut manager = install(Position::BottomRight, 3000);
        let id = manager.error("Failed", Some(DismissAfter::never()));
        manager.paint();
        manager.paint();
        manager.advance(Duration::from_secs(60));
        assert_eq!(manager.active_count(), 1);

        let element = manager.element(&id).expect("element");
        let message = manager.surface().click(element).expect("listener");
        manager.update(message);
        manager.advance(ms(EXIT_TRANSITION_MS));

        assert_eq!(manager.active_count(), 0);
        assert_eq!(manager.rendered_count(), 0);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut manager = install(Position::BottomRight, 3000);
        manager.info("stay", None);

        assert!(!manager.remove(&ToastId::generate()));
        assert_eq!(manager.active_count(), 1);
        assert_eq!(children(&manager).len(), 1);
    }

    #[test]
    fn second_remove_during_exit_is_noop() {
        let mut manager = install(Position::BottomRight, 3000);
        let id = manager.info("bye", None);

        assert!(manager.remove(&id));
        assert!(!manager.remove(&id));
        assert_eq!(manager.scheduler_mut().pending_timers(), 2); // expiry + one exit

        manager.advance(ms(EXIT_TRANSITION_MS));
        assert_eq!(manager.rendered_count(), 0);
    }

    #[test]
    fn expiry_after_click_is_noop() {
        let mut manager = install(Position::BottomRight, 1000);
        let id = manager.success("done", None);
        manager.update(Message::Clicked(id.clone()));
        manager.advance(ms(EXIT_TRANSITION_MS));
        assert_eq!(manager.rendered_count(), 0);

        // The expiry timer still fires later and must change nothing
        manager.advance(ms(1000));
        assert_eq!(manager.active_count(), 0);
        assert_eq!(manager.rendered_count(), 0);
    }

    #[test]
    fn dismiss_before_paint_never_becomes_visible() {
        let mut manager = install(Position::BottomRight, 3000);
        let id = manager.info("blink", None);
        let element = manager.element(&id).expect("element");

        manager.remove(&id);
        manager.paint();
        manager.paint();

        assert!(!manager.surface().has_class(element, class::VISIBLE));
        assert_eq!(manager.phase(&id), Some(Phase::Dismissing));
    }

    #[test]
    fn top_positions_prepend_bottom_positions_append() {
        for position in Position::ALL {
            let mut manager = install(position, 3000);
            let a = manager.info("A", None);
            let b = manager.info("B", None);
            let a_el = manager.element(&a).expect("a");
            let b_el = manager.element(&b).expect("b");

            let expected = if position.is_top() {
                vec![b_el, a_el]
            } else {
                vec![a_el, b_el]
            };
            assert_eq!(children(&manager), expected, "position {position}");
        }
    }

    #[test]
    fn element_count_tracks_registry_plus_fading() {
        let mut manager = install(Position::BottomLeft, 500);
        let first = manager.info("1", None);
        manager.advance(ms(100));
        manager.info("2", None);
        manager.info("3", Some(DismissAfter::never()));
        manager.remove(&first);

        assert_eq!(manager.active_count(), 2);
        assert_eq!(children(&manager).len(), manager.rendered_count());
        assert_eq!(manager.rendered_count(), 3);

        manager.advance(ms(EXIT_TRANSITION_MS));
        assert_eq!(children(&manager).len(), 2);

        manager.advance(ms(500));
        assert_eq!(manager.active_count(), 1);
        assert_eq!(children(&manager).len(), manager.rendered_count());
    }

    #[test]
    fn dismiss_all_empties_registry() {
        let mut manager = install(Position::TopRight, 3000);
        manager.info("a", None);
        manager.error("b", Some(DismissAfter::never()));

        assert_eq!(manager.dismiss_all(), 2);
        assert_eq!(manager.active_count(), 0);
        assert_eq!(manager.rendered_count(), 2);

        manager.advance(ms(EXIT_TRANSITION_MS));
        assert!(!manager.has_toasts());
    }

    #[test]
    fn add_kind_falls_back_to_info() {
        let mut manager = install(Position::BottomRight, 3000);
        let id = manager.add_kind("hmm", "fatal", None);

        assert_eq!(manager.get(&id).map(Toast::category), Some(Category::Info));
        let element = manager.element(&id).expect("element");
        assert_eq!(manager.surface().class_name(element), "toast toast-info");
    }

    #[test]
    fn message_text_is_not_markup() {
        let mut manager = install(Position::BottomRight, 3000);
        manager.info("<img src=x onerror=alert(1)>", None);

        let markup = manager.surface().body_markup();
        assert!(markup.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!markup.contains("<img"));
    }

    #[test]
    fn reinstall_updates_position_without_duplicating() {
        let mut manager = install(Position::BottomRight, 3000);
        let container = manager.container();
        manager.reinstall(
            &ToastOptions::default()
                .with_position(Position::TopLeft)
                .with_default_duration(DismissAfter::never()),
        );

        let doc = manager.surface();
        assert_eq!(manager.container(), container);
        assert_eq!(doc.count_by_class(class::CONTAINER), 1);
        assert_eq!(doc.count_by_id(styles::STYLE_BLOCK_ID), 1);
        assert!(doc.has_class(container, "toast-pos-top-left"));
        assert!(!doc.has_class(container, "toast-pos-bottom-right"));
        assert!(manager.default_duration().is_never());
        assert_eq!(manager.position(), Position::TopLeft);
    }

    #[test]
    fn install_on_used_surface_reuses_container() {
        let manager = install(Position::BottomRight, 3000);
        let doc = manager.into_surface();

        let again = Manager::install(doc, ManualScheduler::new(), &ToastOptions::default());
        assert_eq!(again.surface().count_by_class(class::CONTAINER), 1);
        assert_eq!(again.surface().count_by_id(styles::STYLE_BLOCK_ID), 1);
    }

    #[test]
    fn install_on_used_surface_drops_untracked_toasts() {
        let mut manager = install(Position::BottomRight, 1000);
        let stale = manager.info("from the first install", None);
        let stale_element = manager.element(&stale).expect("element");
        let doc = manager.into_surface();

        let mut again = Manager::install(doc, ManualScheduler::new(), &ToastOptions::default());
        assert!(children(&again).is_empty());
        assert!(!again.surface().is_attached(stale_element));

        let fresh = again.success("from the second install", None);
        assert_eq!(children(&again), vec![again.element(&fresh).expect("element")]);

        again.advance(Duration::from_secs(3600));
        assert_eq!(children(&again).len(), again.rendered_count());
        assert_eq!(again.rendered_count(), 0);
    }

    #[test]
    fn toast_api_trait_routes_to_manager() {
        fn notify(api: &mut impl ToastApi) {
            api.success("one", None);
            api.error("two", None);
            api.warning("three", None);
            api.info("four", None);
        }

        let mut manager = install(Position::BottomRight, 3000);
        notify(&mut manager);

        let categories: Vec<_> = manager.active().map(Toast::category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn diagnostics_keep_every_event_of_a_large_burst() {
        let mut collector = DiagnosticsCollector::new(EventCapacity::default());
        let mut manager = install(Position::BottomRight, 1000);
        manager.set_diagnostics(collector.handle());

        for i in 0..60 {
            manager.info(format!("toast {i}"), None);
        }
        manager.advance(Duration::from_secs(10));
        collector.process_pending();

        // Installed, then shown and dismissed for each toast
        assert_eq!(collector.len(), 121);
        assert_eq!(collector.dropped(), 0);
        assert_eq!(collector.report().evicted_count, 0);
    }

    #[test]
    fn diagnostics_record_lifecycle() {
        let mut collector = DiagnosticsCollector::new(EventCapacity::default());
        let mut manager = install(Position::TopLeft, 1000);
        manager.set_diagnostics(collector.handle());

        let id = manager.add_kind("Saved", "SUCCESS", None);
        manager.add_kind("odd", "nope", None);
        manager.update(Message::Clicked(id.clone()));
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::Installed { reinstall: false, .. }));
        assert!(matches!(
            &kinds[1],
            DiagnosticEventKind::ToastShown { category, duration_ms: 1000, .. } if category == "success"
        ));
        assert!(matches!(kinds[2], DiagnosticEventKind::Warning { .. }));
        assert!(matches!(
            &kinds[4],
            DiagnosticEventKind::ToastDismissed { id: dismissed, reason: DismissReason::Clicked }
                if dismissed == id.as_str()
        ));
    }
}
