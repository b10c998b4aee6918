//! Change notification between forms and list views.
//!
//! # Responsibility
//! - Keep an ordered list of listeners owned by one form controller.
//! - Fire them synchronously after a successful mutation.
//!
//! # Invariants
//! - Listeners fire in registration order on the caller's thread.
//! - Subscribing the same listener twice makes it fire twice.
//! - The first listener error stops the fan-out and is returned as is.
//! - There is no unsubscribe; listeners live as long as the notifier.

use log::debug;
use std::error::Error;
use std::rc::Rc;

pub type ListenerResult = Result<(), Box<dyn Error>>;

/// Reacts to data changes, typically by re-querying a list.
pub trait DataChangeListener {
    fn on_data_changed(&self) -> ListenerResult;
}

impl<F> DataChangeListener for F
where
    F: Fn() -> ListenerResult,
{
    fn on_data_changed(&self) -> ListenerResult {
        self()
    }
}

#[derive(Default)]
pub struct ChangeNotifier<'a> {
    listeners: Vec<Rc<dyn DataChangeListener + 'a>>,
}

impl<'a> ChangeNotifier<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener. No duplicate check is performed.
    pub fn subscribe(&mut self, listener: Rc<dyn DataChangeListener + 'a>) {
        self.listeners.push(listener);
    }

    /// Invokes every listener in registration order.
    pub fn notify_all(&self) -> ListenerResult {
        debug!(
            "event=data_changed module=notify status=start listeners={}",
            self.listeners.len()
        );
        for listener in &self.listeners {
            listener.on_data_changed()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
