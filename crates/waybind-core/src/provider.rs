//! Context-provision boundary for descendant consumers.
//!
//! Rendering the adapter produces a [`Provided`] value: the scope every
//! descendant can look up, plus the wrapper body. Providing the scope has no
//! side effects beyond making the controller and fallback reachable.

use std::fmt;

use crate::{controller::SharedController, view::ViewNode};

/// Value made reachable to every descendant of the adapter.
pub struct RouterScope<C> {
    controller: SharedController<C>,
    fallback: Option<ViewNode>,
}

impl<C> RouterScope<C> {
    pub(crate) fn new(controller: SharedController<C>, fallback: Option<ViewNode>) -> Self {
        Self { controller, fallback }
    }

    /// Handle to the provided controller.
    pub fn controller(&self) -> &SharedController<C> {
        &self.controller
    }

    /// Fallback content, when the caller supplied one.
    pub fn fallback(&self) -> Option<&ViewNode> {
        self.fallback.as_ref()
    }
}

impl<C> Clone for RouterScope<C> {
    fn clone(&self) -> Self {
        Self { controller: self.controller.clone(), fallback: self.fallback.clone() }
    }
}

impl<C> fmt::Debug for RouterScope<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterScope").field("fallback", &self.fallback).finish_non_exhaustive()
    }
}

/// Output of [`RouterAdapter::render`](crate::RouterAdapter::render).
#[derive(Debug)]
pub struct Provided<C> {
    /// Scope supplied to descendant lookups.
    pub scope: RouterScope<C>,
    /// Wrapper body: explicit children, or the default matched-view consumer.
    pub body: ViewNode,
}
