//! Adapter configuration surface.
//!
//! [`RouterProps`] is the immutable input record the host framework hands to
//! the adapter at construction and on every update. All fields are optional.
//! Supplying a pre-built `navigation` controller makes `basename`, `history`
//! and `routes` meaningless; they are ignored with a diagnostic rather than
//! an error.

use crate::{
    context::RouteContext, controller::SharedController, engine::NavigationEngine, view::ViewNode,
};

/// Configuration for a [`RouterAdapter`](crate::RouterAdapter).
pub struct RouterProps<E: NavigationEngine> {
    /// Base path for a newly created controller.
    pub basename: Option<String>,
    /// Subtree body. Defaults to the standard matched-view consumer.
    pub children: Option<ViewNode>,
    /// External context pushed into the controller.
    pub context: Option<RouteContext>,
    /// Fallback content provided to descendants. Defaults to `None`.
    pub fallback: Option<ViewNode>,
    /// History backend for a newly created controller.
    pub history: Option<E::History>,
    /// Pre-built controller to adopt. The adapter never disposes it.
    pub navigation: Option<SharedController<E::Controller>>,
    /// Route table for a newly created controller.
    pub routes: Option<E::Routes>,
}

impl<E: NavigationEngine> Default for RouterProps<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: NavigationEngine> RouterProps<E> {
    /// Props with every field absent.
    pub fn new() -> Self {
        Self {
            basename: None,
            children: None,
            context: None,
            fallback: None,
            history: None,
            navigation: None,
            routes: None,
        }
    }

    /// Set the base path.
    pub fn with_basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }

    /// Set explicit child content.
    pub fn with_children(mut self, children: ViewNode) -> Self {
        self.children = Some(children);
        self
    }

    /// Set the external context.
    pub fn with_context(mut self, context: RouteContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the fallback content.
    pub fn with_fallback(mut self, fallback: ViewNode) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Set the history backend.
    pub fn with_history(mut self, history: E::History) -> Self {
        self.history = Some(history);
        self
    }

    /// Set a pre-built controller to adopt.
    pub fn with_navigation(mut self, navigation: SharedController<E::Controller>) -> Self {
        self.navigation = Some(navigation);
        self
    }

    /// Set the route table.
    pub fn with_routes(mut self, routes: E::Routes) -> Self {
        self.routes = Some(routes);
        self
    }
}
