//! Lifecycle adapter for navigation engines.
//!
//! Waybind binds an externally supplied navigation/routing engine to a
//! component-tree UI framework's mount/update/unmount cycle: it constructs
//! or adopts a navigation controller, provides it to descendant UI through a
//! context-provision scope, keeps the controller's external context
//! synchronized with props, and disposes the controller exactly when this
//! adapter created it.
//!
//! # Components
//!
//! - [`RouterAdapter`]: lifecycle state machine (ownership resolution,
//!   context synchronization, disposal, provider boundary)
//! - [`NavigationEngine`] / [`Controller`]: seam to the external engine
//! - [`RouterScope`]: context-provision value for descendant consumers
//! - [`Diagnostics`]: injected build-mode warning sink
//!
//! Everything is synchronous and single-threaded; the host framework
//! serializes lifecycle callbacks per instance.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod adapter;
mod context;
mod controller;
mod diagnostics;
mod engine;
mod error;
mod ownership;
mod props;
mod provider;
mod view;

pub use adapter::{Phase, RouterAdapter};
pub use context::{ContextValue, RouteContext, shallow_differs};
pub use controller::{Controller, SharedController};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use engine::{ControllerRequest, NavigationEngine};
pub use error::LifecycleError;
pub use ownership::Ownership;
pub use props::RouterProps;
pub use provider::{Provided, RouterScope};
pub use view::ViewNode;
