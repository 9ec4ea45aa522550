//! Pointer interaction for toggle controls.
//!
//! Menu-bar windows intercept clicks in unusual ways, so toggles don’t rely on native click
//! recognition. Instead, the host feeds every phase of a drag-style gesture into a
//! [`ToggleInteraction`], which hit-tests against the control’s own bounds and decides when the
//! control looks pressed and when a release commits.

use crate::events::{ActionHandler, ControlId, PointerPhase};
use crate::rect::Rect;
use crate::style::{ColorScheme, StyleInputs};
use cgmath::Point2;
use parking_lot::Mutex;
use std::sync::Arc;

/// A handle to a value owned by the host application.
///
/// Controls never keep a copy of the value; they read it through the handle and only ever write
/// it with an explicit [`Binding::propose`].
#[derive(Debug, Default)]
pub struct Binding<T>(Arc<Mutex<T>>);

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Binding(Arc::clone(&self.0))
    }
}

impl<T: Copy> Binding<T> {
    pub fn new(value: T) -> Binding<T> {
        Binding(Arc::new(Mutex::new(value)))
    }

    pub fn get(&self) -> T {
        *self.0.lock()
    }

    /// Replaces the value.
    pub fn propose(&self, value: T) {
        *self.0.lock() = value;
    }
}

/// Gesture tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracking {
    Idle,
    /// A gesture is live; `pressed` is true while the pointer is inside the bounds.
    Tracking { pressed: bool },
}

/// What handling a pointer phase did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// The gesture is live and the pressed visual is now as given.
    Pressed(bool),
    /// The gesture was released inside the bounds; contains the new value.
    Committed(bool),
    /// The gesture ended without committing.
    Cancelled,
}

/// The pointer interaction state machine of a toggle.
#[derive(Debug)]
pub struct ToggleInteraction {
    id: ControlId,
    bounds: Rect,
    enabled: bool,
    tracking: Tracking,
    is_on: Binding<bool>,
    action: Option<ActionHandler<bool>>,
}

impl ToggleInteraction {
    /// Creates a new, enabled toggle with the given local bounds.
    pub fn new(is_on: Binding<bool>, bounds: Rect) -> ToggleInteraction {
        ToggleInteraction {
            id: ControlId::new(),
            bounds,
            enabled: true,
            tracking: Tracking::Idle,
            is_on,
            action: None,
        }
    }

    /// Sets the handler invoked with the new value whenever a gesture commits.
    pub fn on_activate(mut self, action: ActionHandler<bool>) -> ToggleInteraction {
        self.action = Some(action);
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Updates the control’s bounds (e.g. after layout). Takes effect at the next phase.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn tracking(&self) -> Tracking {
        self.tracking
    }

    /// If true, the control should be drawn pressed.
    pub fn is_pressed(&self) -> bool {
        match self.tracking {
            Tracking::Tracking { pressed } => pressed,
            Tracking::Idle => false,
        }
    }

    /// Reads the current value from the host.
    pub fn is_on(&self) -> bool {
        self.is_on.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the control.
    ///
    /// Disabling during a gesture cancels it immediately; the returned outcome is that of the
    /// cancellation.
    pub fn set_enabled(&mut self, enabled: bool) -> Outcome {
        if self.enabled == enabled {
            return Outcome::Ignored;
        }
        self.enabled = enabled;
        log::debug!("[toggle {}] enabled = {}", self.id, enabled);

        if enabled {
            Outcome::Ignored
        } else {
            self.handle(PointerPhase::CancelledExternally)
        }
    }

    /// Tests a location against the control’s own bounds.
    pub fn hit_test(&self, location: Point2<f64>) -> bool {
        self.bounds.contains(location)
    }

    /// Handles one phase of a pointer gesture.
    pub fn handle(&mut self, phase: PointerPhase) -> Outcome {
        match (self.tracking, phase) {
            (Tracking::Idle, PointerPhase::Began(_)) if !self.enabled => {
                log::trace!("[toggle {}] ignoring press while disabled", self.id);
                Outcome::Ignored
            }
            (_, PointerPhase::Began(location))
            | (Tracking::Tracking { .. }, PointerPhase::Moved(location)) => {
                let pressed = self.hit_test(location);
                self.tracking = Tracking::Tracking { pressed };
                Outcome::Pressed(pressed)
            }
            (Tracking::Tracking { pressed }, PointerPhase::Ended(_)) => {
                self.tracking = Tracking::Idle;
                if pressed {
                    self.commit()
                } else {
                    log::trace!(
                        "[toggle {}] released outside at {:?}",
                        self.id,
                        phase.location()
                    );
                    Outcome::Cancelled
                }
            }
            (Tracking::Tracking { .. }, PointerPhase::CancelledExternally) => {
                log::debug!("[toggle {}] gesture cancelled externally", self.id);
                self.tracking = Tracking::Idle;
                Outcome::Cancelled
            }
            (Tracking::Idle, _) => Outcome::Ignored,
        }
    }

    fn commit(&mut self) -> Outcome {
        let value = !self.is_on.get();
        self.is_on.propose(value);
        log::debug!("[toggle {}] committed; is on = {}", self.id, value);

        if let Some(action) = &self.action {
            action.call(value);
        }
        Outcome::Committed(value)
    }

    /// Collects the inputs for [`crate::style::resolve`] from the current state.
    pub fn style_inputs(&self, color_scheme: ColorScheme, is_hovered: bool) -> StyleInputs {
        StyleInputs {
            is_on: self.is_on(),
            is_pressed: self.is_pressed(),
            is_hovered,
            is_enabled: self.enabled,
            color_scheme,
        }
    }
}

/// Tracks whether the pointer hovers over a menu item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: bool,
}

impl HoverTracker {
    pub fn new() -> HoverTracker {
        HoverTracker::default()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Records the hover state; returns true only if it actually changed.
    pub fn update(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }
}
