//! Reference lifecycle model for model-based testing.
//!
//! [`LifecycleModel`] applies the same operation sequence the host framework
//! would drive and predicts the exact controller call log: which contexts
//! must be pushed, in what order, and how many dispose calls the controller
//! must have seen. Tests run the real adapter and the model side by side and
//! compare after every step.

use waybind_core::{RouteContext, shallow_differs};

/// One host-driven lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// First mount after construction.
    Mount,
    /// Prop update carrying a (possibly absent) context.
    Update(Option<RouteContext>),
    /// Final teardown.
    Unmount,
}

/// Reference model of the adapter's controller interactions.
#[derive(Debug, Clone)]
pub struct LifecycleModel {
    adopted: bool,
    current: Option<RouteContext>,
    expected_contexts: Vec<RouteContext>,
    expected_disposes: usize,
}

impl LifecycleModel {
    /// Model for an adapter that creates its own controller.
    ///
    /// `initial` is the context prop at construction; the engine receives it
    /// inside the create request, so mounting pushes nothing.
    pub fn owned(initial: Option<RouteContext>) -> Self {
        Self { adopted: false, current: initial, expected_contexts: Vec::new(), expected_disposes: 0 }
    }

    /// Model for an adapter adopting a caller-supplied controller.
    ///
    /// Mounting seeds the controller with `initial` when present.
    pub fn adopted(initial: Option<RouteContext>) -> Self {
        Self { adopted: true, current: initial, expected_contexts: Vec::new(), expected_disposes: 0 }
    }

    /// Apply one operation and update the predicted call log.
    pub fn apply(&mut self, operation: &Operation) {
        match operation {
            Operation::Mount => {
                if self.adopted
                    && let Some(context) = &self.current
                {
                    self.expected_contexts.push(context.clone());
                }
            },
            Operation::Update(next) => {
                let empty = RouteContext::new();
                let previous = self.current.as_ref().unwrap_or(&empty);
                let upcoming = next.as_ref().unwrap_or(&empty);
                if shallow_differs(previous, upcoming) {
                    self.expected_contexts.push(upcoming.clone());
                }
                self.current = next.clone();
            },
            Operation::Unmount => {
                if !self.adopted {
                    self.expected_disposes += 1;
                }
            },
        }
    }

    /// Contexts the controller must have received, in order.
    pub fn expected_contexts(&self) -> &[RouteContext] {
        &self.expected_contexts
    }

    /// Dispose calls the controller must have seen.
    pub fn expected_disposes(&self) -> usize {
        self.expected_disposes
    }
}
