//! Deterministic test harness for the waybind adapter.
//!
//! Recording doubles stand in for the external navigation engine so tests
//! can observe every `set_context` and `dispose` call the adapter makes.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation of the lifecycle
//! contract. Operation sequences are applied to both the model and the real
//! adapter, and the predicted controller call log is compared against the
//! recorded one after every step.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod recording;

pub use model::{LifecycleModel, Operation};
pub use recording::{
    ControllerLog, EngineError, HistoryStub, RecordingController, RecordingEngine, RouteTable,
    SharedLog,
};
