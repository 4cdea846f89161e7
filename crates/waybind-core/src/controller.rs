//! Navigation controller capabilities and the shared handle.
//!
//! The controller is the external engine instance responsible for matching
//! routes; the adapter consumes it only through the two capabilities of
//! [`Controller`] and never touches its matching state directly.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::context::RouteContext;

/// Capabilities the adapter requires from a navigation controller.
///
/// Everything else about the controller (route matching, history, matched
/// route state) is opaque to the adapter and belongs to the engine and the
/// descendant renderer.
pub trait Controller {
    /// Replace the controller's external context.
    fn set_context(&mut self, context: RouteContext);

    /// Release the controller's resources.
    ///
    /// Called at most once, and only by the controller's owner.
    fn dispose(&mut self);
}

/// Cloneable single-threaded handle to a navigation controller.
///
/// The adapter, the caller (for adopted controllers), and descendant
/// consumers reached through [`RouterScope`](crate::RouterScope) all share
/// one controller through clones of this handle. Lifecycle callbacks are
/// serialized by the host framework, so interior mutability via [`RefCell`]
/// is sufficient.
pub struct SharedController<C> {
    inner: Rc<RefCell<C>>,
}

impl<C> Clone for SharedController<C> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<C> fmt::Debug for SharedController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedController").finish_non_exhaustive()
    }
}

impl<C> SharedController<C> {
    /// Wrap a controller in a shared handle.
    pub fn new(controller: C) -> Self {
        Self { inner: Rc::new(RefCell::new(controller)) }
    }

    /// True if both handles refer to the same controller.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Inspect the controller.
    pub fn with<T>(&self, f: impl FnOnce(&C) -> T) -> T {
        f(&self.inner.borrow())
    }

    /// Mutate the controller.
    ///
    /// Descendant consumers use this for engine-specific operations; the
    /// adapter itself only writes through `set_context`.
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut C) -> T) -> T {
        f(&mut self.inner.borrow_mut())
    }
}

impl<C: Controller> SharedController<C> {
    pub(crate) fn set_context(&self, context: RouteContext) {
        self.inner.borrow_mut().set_context(context);
    }

    pub(crate) fn dispose(&self) {
        self.inner.borrow_mut().dispose();
    }
}
