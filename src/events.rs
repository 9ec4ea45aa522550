//! Events.

use cgmath::Point2;
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// A unique identifier for a control instance.
///
/// (this is just a UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(u32, u16, u16, [u8; 8]);

impl ControlId {
    pub fn new() -> ControlId {
        let uuid = Uuid::new_v4();
        let (a, b, c, d) = uuid.as_fields();
        ControlId(a, b, c, *d)
    }
}

impl Default for ControlId {
    fn default() -> Self {
        ControlId::new()
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// One phase of a drag-style pointer gesture, as reported by the host.
///
/// Locations are in the control’s local coordinate system: the origin is at the top left corner of
/// the control’s own bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPhase {
    /// The pointer was pressed.
    Began(Point2<f64>),

    /// The pointer moved while pressed.
    Moved(Point2<f64>),

    /// The pointer was released.
    Ended(Point2<f64>),

    /// The gesture was taken away from the control, e.g. because it was disabled.
    ///
    /// Hosts must deliver this synchronously before the control is considered idle again.
    CancelledExternally,
}

impl PointerPhase {
    /// Returns the pointer location, if this phase has one.
    pub fn location(&self) -> Option<Point2<f64>> {
        match self {
            PointerPhase::Began(loc) | PointerPhase::Moved(loc) | PointerPhase::Ended(loc) => {
                Some(*loc)
            }
            PointerPhase::CancelledExternally => None,
        }
    }
}

/// A shared callback invoked when a control is activated.
pub struct ActionHandler<T>(Arc<Mutex<dyn FnMut(T) + Send>>);

impl<T> Clone for ActionHandler<T> {
    fn clone(&self) -> Self {
        ActionHandler(Arc::clone(&self.0))
    }
}

impl<T> ActionHandler<T> {
    pub fn new<F: 'static + FnMut(T) + Send>(handler: F) -> Self {
        ActionHandler(Arc::new(Mutex::new(handler)))
    }

    /// Invokes the handler synchronously.
    ///
    /// The handler must not call itself (the lock is not reentrant).
    pub fn call(&self, value: T) {
        let mut handler = self.0.lock();
        (&mut *handler)(value);
    }
}

impl<T> fmt::Debug for ActionHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ActionHandler<{}>", core::any::type_name::<T>())
    }
}
