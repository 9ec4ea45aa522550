//! Control Center-style menu-bar controls.
//!
//! # Conceptual overview
//! This library decides *what* the sliders and circle toggles of a Control Center-style menu
//! should look like; drawing them is left to the host’s UI framework. Everything here is
//! synchronous and single-threaded: the host feeds in values and pointer events as they arrive,
//! and asks for the resulting state whenever it redraws.
//!
//! ## Sliders
//! A slider shows an icon that depends on its value, such as a speaker with more waves the louder
//! the volume. The value range is partitioned into [`Zone`]s, and the icon only changes when the
//! value crosses into a different zone—dragging within a zone never swaps the image. A redraw can
//! always be forced, e.g. when the view is created or the theme changes.
//!
//! ## Toggles
//! Menu-bar windows swallow or misattribute regular clicks, so toggles do their own hit testing.
//! The host reports every phase of a drag gesture; the toggle looks pressed while the pointer is
//! inside its bounds, and a release inside its bounds commits, flipping the host-owned value
//! exactly once. Dragging out and releasing cancels, as does disabling the control mid-gesture.
//!
//! ## Styles
//! The appearance of a toggle is derived from its style and the current flags (on, pressed,
//! hovered, enabled, color scheme) by [`style::resolve`], a pure function. It should be called on
//! every redraw rather than cached.
//!
//! ## Coordinate System
//! Pointer locations are in the control’s local coordinate system: the origin is at the top left
//! corner of its bounds and positive y points down.
//!
//! ## Threads
//! Controls must receive their events in order on a single thread. Hosts that get input elsewhere
//! can funnel it through an [`EventQueue`].

pub mod color;
pub mod config;
pub mod control;
pub mod events;
mod host;
pub mod interaction;
mod rect;
pub mod style;
pub mod zone;

pub use color::Color;
pub use config::{Config, ConfigError};
pub use control::{IconUpdate, SliderIcon, Toggle, ToggleEvent};
pub use events::{ActionHandler, ControlId, PointerPhase};
pub use host::{EventQueue, EventSender};
pub use interaction::{Binding, HoverTracker, Outcome, ToggleInteraction, Tracking};
pub use rect::Rect;
pub use style::{ColorScheme, ControlStyle, StyleInputs, StyleOutputs, Tint};
pub use zone::{classify, transition, VolumeLevel, Zone, ZoneTracker, ZoneTransition};

/// The icon state of a volume slider.
pub type VolumeSlider = SliderIcon<VolumeLevel>;
