use tracing::warn;

use crate::error::{RulerError, RulerResult};
use crate::extensions::{ViewStateObserver, WidgetContext, WidgetEvent};
use crate::render::Renderer;

use super::RulerWidget;

impl<R: Renderer> RulerWidget<R> {
    /// Registers an observer with a unique, non-empty identifier.
    pub fn register_observer(&mut self, observer: Box<dyn ViewStateObserver>) -> RulerResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(RulerError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.contains_key(&observer_id) {
            warn!(%observer_id, "observer already registered");
            return Err(RulerError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.insert(observer_id, observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.observers.shift_remove(observer_id).is_some()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers.contains_key(observer_id)
    }

    #[must_use]
    pub fn widget_context(&self) -> WidgetContext {
        WidgetContext {
            viewport: self.container,
            view: self.view,
            interaction_mode: self.drag.mode(),
            cursor: self.drag.cursor(),
        }
    }

    /// Delivers `event` to observers in registration order.
    pub(super) fn emit_event(&mut self, event: WidgetEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.widget_context();
        for observer in self.observers.values_mut() {
            observer.on_event(event, context);
        }
    }
}
