//! Controls: the decision engines bundled with the state a view needs to draw them.

use crate::events::PointerPhase;
use crate::host::EventQueue;
use crate::interaction::{HoverTracker, Outcome, ToggleInteraction};
use crate::style::{self, ColorScheme, ControlStyle, StyleOutputs};
use crate::zone::{CapabilityTier, ControlValue, IconAsset, LayoutHints, Zone, ZoneTracker};

/// Input delivered to a [`Toggle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToggleEvent {
    Pointer(PointerPhase),
    Enabled(bool),
    Hover(bool),
    ColorScheme(ColorScheme),
}

/// A circle toggle.
#[derive(Debug)]
pub struct Toggle {
    pub interaction: ToggleInteraction,
    pub style: ControlStyle,
    hover: HoverTracker,
    color_scheme: ColorScheme,
}

impl Toggle {
    pub fn new(interaction: ToggleInteraction, style: ControlStyle) -> Toggle {
        Toggle {
            interaction,
            style,
            hover: HoverTracker::new(),
            color_scheme: ColorScheme::default(),
        }
    }

    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Toggle {
        self.color_scheme = color_scheme;
        self
    }

    /// Applies one event. Returns the interaction outcome, and whether the toggle must be redrawn.
    pub fn apply(&mut self, event: ToggleEvent) -> (Outcome, bool) {
        match event {
            ToggleEvent::Pointer(phase) => {
                let outcome = self.interaction.handle(phase);
                (outcome, outcome != Outcome::Ignored)
            }
            ToggleEvent::Enabled(enabled) => {
                let was_enabled = self.interaction.is_enabled();
                let outcome = self.interaction.set_enabled(enabled);
                (outcome, was_enabled != enabled)
            }
            ToggleEvent::Hover(hovered) => (Outcome::Ignored, self.hover.update(hovered)),
            ToggleEvent::ColorScheme(scheme) => {
                let changed = self.color_scheme != scheme;
                self.color_scheme = scheme;
                (Outcome::Ignored, changed)
            }
        }
    }

    /// Applies all queued events in order. Returns every non-ignored outcome, and whether the
    /// toggle must be redrawn.
    pub fn drain(&mut self, queue: &EventQueue<ToggleEvent>) -> (Vec<Outcome>, bool) {
        let mut outcomes = Vec::new();
        let mut redraw = false;
        queue.poll(|event| {
            let (outcome, changed) = self.apply(event);
            if outcome != Outcome::Ignored {
                outcomes.push(outcome);
            }
            redraw |= changed;
        });
        (outcomes, redraw)
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    /// Resolves the current appearance. Call on every redraw.
    pub fn appearance(&self) -> StyleOutputs {
        let inputs = self
            .interaction
            .style_inputs(self.color_scheme, self.hover.is_hovered());
        style::resolve(&self.style, &inputs)
    }
}

/// A new icon for a slider to display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconUpdate<Z> {
    pub zone: Z,
    pub asset: IconAsset,
    pub layout: LayoutHints,
}

/// The icon state of a slider.
#[derive(Debug, Clone)]
pub struct SliderIcon<Z> {
    tracker: ZoneTracker<Z>,
    tier: CapabilityTier,
}

impl<Z: Zone> SliderIcon<Z> {
    pub fn new(tier: CapabilityTier) -> SliderIcon<Z> {
        SliderIcon {
            tracker: ZoneTracker::new(),
            tier,
        }
    }

    /// Feeds a new slider value; returns an icon to display if the value entered a new zone.
    pub fn set_value(&mut self, value: impl Into<ControlValue>) -> Option<IconUpdate<Z>> {
        let zone = self.tracker.update(value).zone()?;
        Some(IconUpdate {
            zone,
            asset: zone.asset(self.tier),
            layout: zone.layout(self.tier),
        })
    }

    /// Changes the tier; the next value update always yields an icon.
    pub fn set_tier(&mut self, tier: CapabilityTier) {
        if self.tier != tier {
            self.tier = tier;
            self.tracker.invalidate();
        }
    }

    /// Forces the next value update to yield an icon.
    pub fn invalidate(&mut self) {
        self.tracker.invalidate();
    }

    pub fn zone(&self) -> Option<Z> {
        self.tracker.zone()
    }

    /// Layout of the current icon, or the default layout before the first update.
    pub fn layout(&self) -> LayoutHints {
        self.zone()
            .map(|zone| zone.layout(self.tier))
            .unwrap_or_default()
    }
}
