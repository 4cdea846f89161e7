//! One-shot controller ownership resolution.
//!
//! Ownership is decided exactly once, at adapter construction, and stored
//! immutably for the instance's lifetime. Later prop changes never revisit
//! the decision.

use std::fmt;

use crate::{
    controller::SharedController,
    diagnostics::Diagnostics,
    engine::{ControllerRequest, NavigationEngine},
    props::RouterProps,
};

/// Who owns the navigation controller.
pub enum Ownership<C> {
    /// Created by the adapter; the adapter disposes it at teardown.
    Owned(SharedController<C>),
    /// Supplied by the caller; never disposed by the adapter.
    Adopted(SharedController<C>),
}

impl<C> Ownership<C> {
    /// Handle to the controller, regardless of owner.
    pub fn controller(&self) -> &SharedController<C> {
        match self {
            Self::Owned(controller) | Self::Adopted(controller) => controller,
        }
    }

    /// True when the adapter created the controller.
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl<C> fmt::Debug for Ownership<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owned(_) => f.write_str("Owned"),
            Self::Adopted(_) => f.write_str("Adopted"),
        }
    }
}

/// Resolve the controller reference for a new adapter instance.
///
/// A supplied `navigation` prop always wins: it is adopted verbatim and any
/// `basename`/`routes`/`history` props are ignored, each with one diagnostic.
/// Otherwise a controller is created through the engine, consuming the
/// construction props. Engine errors propagate unmodified.
pub(crate) fn resolve<E: NavigationEngine>(
    engine: &E,
    props: &mut RouterProps<E>,
    diagnostics: &Diagnostics,
) -> Result<Ownership<E::Controller>, E::Error> {
    if let Some(navigation) = props.navigation.clone() {
        if props.basename.is_some() {
            diagnostics.ignored_prop("basename");
        }
        if props.routes.is_some() {
            diagnostics.ignored_prop("routes");
        }
        if props.history.is_some() {
            diagnostics.ignored_prop("history");
        }
        return Ok(Ownership::Adopted(navigation));
    }

    let request = ControllerRequest {
        basename: props.basename.clone(),
        context: props.context.clone().unwrap_or_default(),
        history: props.history.take(),
        routes: props.routes.take(),
    };
    let controller = engine.create(request)?;
    Ok(Ownership::Owned(SharedController::new(controller)))
}
