//! Recording doubles for the navigation engine seam.
//!
//! [`RecordingEngine`] and [`RecordingController`] implement the engine
//! traits while logging every interaction into shared, observable state, so
//! tests can assert on the exact controller call sequence the adapter
//! produced. The engine can also be armed to fail, to exercise error
//! propagation through adapter construction.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use thiserror::Error;
use waybind_core::{Controller, ControllerRequest, NavigationEngine, RouteContext, SharedController};

/// Observable log of one controller's lifetime.
#[derive(Debug, Default, Clone)]
pub struct ControllerLog {
    /// Every context pushed through `set_context`, in call order.
    pub contexts: Vec<RouteContext>,
    /// Number of `dispose` calls received.
    pub dispose_count: usize,
}

/// Shared handle to a [`ControllerLog`].
pub type SharedLog = Rc<RefCell<ControllerLog>>;

/// Controller double that records every call.
#[derive(Debug)]
pub struct RecordingController {
    log: SharedLog,
}

impl RecordingController {
    /// A standalone controller plus its log, for adoption scenarios where
    /// the caller (not the engine) constructs the controller.
    pub fn standalone() -> (SharedController<Self>, SharedLog) {
        let log: SharedLog = Rc::default();
        let controller = SharedController::new(Self { log: Rc::clone(&log) });
        (controller, log)
    }

    /// Handle to this controller's log.
    pub fn log(&self) -> SharedLog {
        Rc::clone(&self.log)
    }
}

impl Controller for RecordingController {
    fn set_context(&mut self, context: RouteContext) {
        self.log.borrow_mut().contexts.push(context);
    }

    fn dispose(&mut self) {
        self.log.borrow_mut().dispose_count += 1;
    }
}

/// Opaque history backend stand-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStub;

/// Opaque route table stand-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    /// Route patterns; only used for request assertions.
    pub patterns: Vec<String>,
}

impl RouteTable {
    /// Route table with the given patterns.
    pub fn with_patterns(patterns: &[&str]) -> Self {
        Self { patterns: patterns.iter().map(ToString::to_string).collect() }
    }
}

/// Engine construction failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("engine refused to create a controller: {reason}")]
pub struct EngineError {
    /// Failure description.
    pub reason: String,
}

/// Record of one `create` call.
#[derive(Debug)]
struct CreateRecord {
    basename: Option<String>,
    context: RouteContext,
    log: SharedLog,
}

/// Engine double that records construction requests.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    created: RefCell<Vec<CreateRecord>>,
    fail_next: Cell<bool>,
}

impl RecordingEngine {
    /// New engine double.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the next `create` call to fail with [`EngineError`].
    pub fn fail_next_create(&self) {
        self.fail_next.set(true);
    }

    /// Number of controllers created so far.
    pub fn created_count(&self) -> usize {
        self.created.borrow().len()
    }

    /// Log of the `index`-th created controller.
    pub fn created_log(&self, index: usize) -> Option<SharedLog> {
        self.created.borrow().get(index).map(|record| Rc::clone(&record.log))
    }

    /// Basename and initial context of the `index`-th create request.
    pub fn created_request(&self, index: usize) -> Option<(Option<String>, RouteContext)> {
        self.created
            .borrow()
            .get(index)
            .map(|record| (record.basename.clone(), record.context.clone()))
    }
}

impl NavigationEngine for RecordingEngine {
    type Controller = RecordingController;
    type History = HistoryStub;
    type Routes = RouteTable;
    type Error = EngineError;

    fn create(
        &self,
        request: ControllerRequest<HistoryStub, RouteTable>,
    ) -> Result<RecordingController, EngineError> {
        if self.fail_next.take() {
            return Err(EngineError { reason: "armed to fail".to_string() });
        }

        tracing::debug!(basename = ?request.basename, "recording engine created controller");
        let log: SharedLog = Rc::default();
        self.created.borrow_mut().push(CreateRecord {
            basename: request.basename,
            context: request.context,
            log: Rc::clone(&log),
        });
        Ok(RecordingController { log })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_records_calls_in_order() {
        let (controller, log) = RecordingController::standalone();

        let mut first = RouteContext::new();
        first.insert("user", "a");
        controller.with_mut(|c| c.set_context(first.clone()));
        controller.with_mut(Controller::dispose);

        let log = log.borrow();
        assert_eq!(log.contexts, vec![first]);
        assert_eq!(log.dispose_count, 1);
    }

    #[test]
    fn engine_records_create_requests() {
        let engine = RecordingEngine::new();
        let request = ControllerRequest {
            basename: Some("/app".to_string()),
            context: RouteContext::new(),
            history: None,
            routes: Some(RouteTable::with_patterns(&["/", "/about"])),
        };

        let controller = engine.create(request).expect("create");
        assert_eq!(engine.created_count(), 1);
        assert_eq!(
            engine.created_request(0),
            Some((Some("/app".to_string()), RouteContext::new()))
        );

        drop(controller);
        // Logs stay observable after the controller itself is gone.
        assert!(engine.created_log(0).is_some());
    }

    #[test]
    fn armed_engine_fails_exactly_once() {
        let engine = RecordingEngine::new();
        engine.fail_next_create();

        let request = ControllerRequest {
            basename: None,
            context: RouteContext::new(),
            history: None,
            routes: None,
        };
        assert!(engine.create(request).is_err());

        let retry = ControllerRequest {
            basename: None,
            context: RouteContext::new(),
            history: None,
            routes: None,
        };
        assert!(engine.create(retry).is_ok());
    }
}
