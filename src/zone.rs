//! Mapping continuous control values to discrete icon zones.
//!
//! A slider shows a different icon depending on where its value lies (e.g. a speaker with zero to
//! three waves for a volume slider). Swapping the icon on every fractional value change flickers,
//! so the slider only swaps when the value crosses into a different [`Zone`]: see [`transition`]
//! and [`ZoneTracker`].

use core::fmt;
use serde::Deserialize;

/// A control value, normalized to the 0–1 range.
///
/// Producers may overshoot while dragging; out-of-range values are clamped silently and NaN is
/// treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ControlValue(f64);

impl ControlValue {
    pub const MIN: ControlValue = ControlValue(0.);
    pub const MAX: ControlValue = ControlValue(1.);

    pub fn new(value: f64) -> ControlValue {
        if value.is_nan() {
            ControlValue(0.)
        } else {
            ControlValue(value.clamp(0., 1.))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for ControlValue {
    fn from(value: f64) -> Self {
        ControlValue::new(value)
    }
}

/// The sub-range of [0, 1] covered by a zone.
///
/// The upper end is always inclusive. The lower end may be exclusive so that adjacent zones can
/// share a boundary without overlapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRange {
    pub start: f64,
    pub end: f64,
    pub start_exclusive: bool,
}

impl ZoneRange {
    /// `start ..= end`
    pub const fn closed(start: f64, end: f64) -> ZoneRange {
        ZoneRange {
            start,
            end,
            start_exclusive: false,
        }
    }

    /// `start < x <= end`
    pub const fn open_closed(start: f64, end: f64) -> ZoneRange {
        ZoneRange {
            start,
            end,
            start_exclusive: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_start = if self.start_exclusive {
            value > self.start
        } else {
            value >= self.start
        };
        above_start && value <= self.end
    }
}

/// Platform capability tier; selects assets and layout hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityTier {
    /// Platforms without symbol images (before macOS 11).
    Legacy,
    /// Platforms with symbol images.
    Modern,
}

impl Default for CapabilityTier {
    fn default() -> Self {
        CapabilityTier::Modern
    }
}

/// A reference to a display asset, resolved by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconAsset {
    /// A system symbol name.
    Symbol(&'static str),
    /// A named template image.
    Named(&'static str),
}

/// Side length of the square frame icons are laid out in.
pub const ICON_FRAME: f64 = 22.;

/// Horizontal offset applied to icons that are not centered in their frame.
pub const ICON_LEADING_OFFSET: f64 = 4.;

/// How to lay out a zone’s icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutHints {
    /// Icon width; the height is always [`ICON_FRAME`].
    pub width: f64,

    /// If true, the icon is centered in its frame. Otherwise it’s leading-aligned and offset by
    /// [`ICON_LEADING_OFFSET`].
    pub centered: bool,
}

impl LayoutHints {
    /// Horizontal offset of the icon within its frame.
    pub fn offset_x(&self) -> f64 {
        if self.centered {
            0.
        } else {
            ICON_LEADING_OFFSET
        }
    }
}

impl Default for LayoutHints {
    fn default() -> Self {
        LayoutHints {
            width: ICON_FRAME,
            centered: false,
        }
    }
}

/// A closed set of zones partitioning [0, 1].
///
/// Zones are matched in declaration order ([`Zone::ALL`]); the first zone whose range contains a
/// value wins, so a boundary value shared by two closed ranges belongs to the earlier zone.
pub trait Zone: Copy + Eq + fmt::Debug + 'static {
    /// All zones, in declaration order. Must not be empty.
    const ALL: &'static [Self];

    /// The range of values covered by this zone.
    fn range(self) -> ZoneRange;

    /// The icon shown while the value is in this zone.
    fn asset(self, tier: CapabilityTier) -> IconAsset;

    /// Layout hints for this zone’s icon.
    fn layout(self, _tier: CapabilityTier) -> LayoutHints {
        LayoutHints::default()
    }
}

/// Classifies a value into exactly one zone.
///
/// Total over all inputs: values are clamped first, and a value that falls into a gap of a
/// malformed zone set resolves to the closest zone below it.
///
/// # Panics
/// Panics if `Z::ALL` is empty.
pub fn classify<Z: Zone>(value: impl Into<ControlValue>) -> Z {
    let value = value.into().get();

    if let Some(zone) = Z::ALL.iter().find(|zone| zone.range().contains(value)) {
        return *zone;
    }

    let fallback = Z::ALL
        .iter()
        .rev()
        .find(|zone| zone.range().start <= value)
        .or_else(|| Z::ALL.first())
        .copied()
        .expect("zone set is empty");

    log::trace!("[zone] {} is in no zone; using {:?}", value, fallback);
    fallback
}

/// Result of comparing a new value against the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneTransition<Z> {
    /// The value stayed within its zone; nothing needs to be redrawn.
    NoChange,
    /// The value entered a zone; its icon should be (re)displayed.
    EnterZone(Z),
}

impl<Z: Copy> ZoneTransition<Z> {
    /// Returns the entered zone, if any.
    pub fn zone(&self) -> Option<Z> {
        match self {
            ZoneTransition::NoChange => None,
            ZoneTransition::EnterZone(zone) => Some(*zone),
        }
    }

    /// If true, the host should redraw the icon.
    pub fn should_redraw(&self) -> bool {
        self.zone().is_some()
    }
}

/// Decides whether moving from `old` to `new` crosses a zone boundary.
///
/// - `force` always yields `EnterZone` (first render, explicit redraw).
/// - without an old value, the new zone is always entered.
/// - otherwise the new zone is entered only if it differs from the old one.
pub fn transition<Z: Zone>(
    old: Option<ControlValue>,
    new: ControlValue,
    force: bool,
) -> ZoneTransition<Z> {
    let new_zone = classify::<Z>(new);

    if force {
        return ZoneTransition::EnterZone(new_zone);
    }

    match old {
        None => ZoneTransition::EnterZone(new_zone),
        Some(old) if classify::<Z>(old) != new_zone => ZoneTransition::EnterZone(new_zone),
        Some(_) => ZoneTransition::NoChange,
    }
}

/// Remembers the last observed value of a slider and reports zone transitions.
#[derive(Debug, Clone)]
pub struct ZoneTracker<Z> {
    last: Option<ControlValue>,
    needs_refresh: bool,
    zone: Option<Z>,
}

impl<Z: Zone> ZoneTracker<Z> {
    pub fn new() -> ZoneTracker<Z> {
        ZoneTracker {
            last: None,
            needs_refresh: false,
            zone: None,
        }
    }

    /// Feeds a new value and returns the resulting transition.
    pub fn update(&mut self, value: impl Into<ControlValue>) -> ZoneTransition<Z> {
        let value = value.into();
        let force = self.needs_refresh;
        let transition = transition::<Z>(self.last, value, force);

        self.last = Some(value);
        self.needs_refresh = false;
        if let ZoneTransition::EnterZone(zone) = transition {
            log::trace!("[zone] {:?} -> {:?}", self.zone, zone);
            self.zone = Some(zone);
        }

        transition
    }

    /// Forces the next update to enter its zone, e.g. after a theme change.
    pub fn invalidate(&mut self) {
        self.needs_refresh = true;
    }

    /// The last observed value.
    pub fn value(&self) -> Option<ControlValue> {
        self.last
    }

    /// The zone whose icon is currently displayed.
    pub fn zone(&self) -> Option<Z> {
        self.zone
    }
}

impl<Z: Zone> Default for ZoneTracker<Z> {
    fn default() -> Self {
        ZoneTracker::new()
    }
}

/// Zones of a volume slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeLevel {
    Off,
    Low,
    Medium,
    High,
}

impl Zone for VolumeLevel {
    const ALL: &'static [VolumeLevel] = &[
        VolumeLevel::Off,
        VolumeLevel::Low,
        VolumeLevel::Medium,
        VolumeLevel::High,
    ];

    fn range(self) -> ZoneRange {
        match self {
            VolumeLevel::Off => ZoneRange::closed(0., 0.),
            VolumeLevel::Low => ZoneRange::open_closed(0., 0.33),
            VolumeLevel::Medium => ZoneRange::closed(0.33, 0.66),
            VolumeLevel::High => ZoneRange::closed(0.66, 1.),
        }
    }

    fn asset(self, tier: CapabilityTier) -> IconAsset {
        match tier {
            CapabilityTier::Modern => IconAsset::Symbol(match self {
                VolumeLevel::Off => "speaker.slash.fill",
                VolumeLevel::Low => "speaker.wave.1.fill",
                VolumeLevel::Medium => "speaker.wave.2.fill",
                VolumeLevel::High => "speaker.wave.3.fill",
            }),
            CapabilityTier::Legacy => IconAsset::Named(match self {
                VolumeLevel::Off => "NSTouchBarAudioOutputMuteTemplate",
                VolumeLevel::Low => "NSTouchBarAudioOutputVolumeLowTemplate",
                VolumeLevel::Medium => "NSTouchBarAudioOutputVolumeMediumTemplate",
                VolumeLevel::High => "NSTouchBarAudioOutputVolumeHighTemplate",
            }),
        }
    }

    fn layout(self, tier: CapabilityTier) -> LayoutHints {
        match tier {
            CapabilityTier::Legacy => LayoutHints::default(),
            CapabilityTier::Modern => match self {
                VolumeLevel::Off => LayoutHints {
                    width: 10.,
                    centered: true,
                },
                VolumeLevel::Low => LayoutHints {
                    width: 9.,
                    centered: false,
                },
                VolumeLevel::Medium => LayoutHints {
                    width: 11.,
                    centered: false,
                },
                VolumeLevel::High => LayoutHints {
                    width: 14.,
                    centered: false,
                },
            },
        }
    }
}
