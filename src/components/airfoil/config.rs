use bevy::log::warn;
use serde::{Deserialize, Serialize};

use super::loader::ConfigError;
use crate::utils::{deg_to_rad, rad_to_deg, MAX_FLAP_FRACTION, MIN_CHORD};

/// Airfoil profile as authored in config files. Angles are in degrees so the
/// records stay human-editable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirfoilParams {
    /// 2D lift curve slope [1/rad]
    pub lift_slope: f64,
    pub skin_friction: f64,
    pub zero_lift_aoa_deg: f64,
    pub stall_angle_positive_deg: f64,
    pub stall_angle_negative_deg: f64,
    /// Chord length [m]
    pub chord: f64,
    /// Flap chord as a fraction of the full chord
    pub flap_fraction: f64,
    /// Span [m]
    pub span: f64,
    pub aspect_ratio: f64,
    /// Width of the band around each stall angle where the two regimes are blended
    pub transition_width_deg: f64,
}

impl Default for AirfoilParams {
    fn default() -> Self {
        Self {
            lift_slope: 6.28,
            skin_friction: 0.02,
            zero_lift_aoa_deg: 0.0,
            stall_angle_positive_deg: 10.0,
            stall_angle_negative_deg: -10.0,
            chord: 1.0,
            flap_fraction: 0.4,
            span: 2.0,
            aspect_ratio: 2.0,
            transition_width_deg: 5.0,
        }
    }
}

impl AirfoilParams {
    /// Applies the clamping rules and rejects values the model cannot use.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let fields = [
            ("lift_slope", self.lift_slope),
            ("skin_friction", self.skin_friction),
            ("zero_lift_aoa_deg", self.zero_lift_aoa_deg),
            ("stall_angle_positive_deg", self.stall_angle_positive_deg),
            ("stall_angle_negative_deg", self.stall_angle_negative_deg),
            ("chord", self.chord),
            ("flap_fraction", self.flap_fraction),
            ("span", self.span),
            ("aspect_ratio", self.aspect_ratio),
            ("transition_width_deg", self.transition_width_deg),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.lift_slope <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "lift_slope must be positive, got {}",
                self.lift_slope
            )));
        }
        if self.span <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "span must be positive, got {}",
                self.span
            )));
        }
        if self.aspect_ratio <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "aspect_ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }

        self.flap_fraction = clamp_field("flap_fraction", self.flap_fraction, 0.0, MAX_FLAP_FRACTION);
        self.stall_angle_positive_deg = clamp_field(
            "stall_angle_positive_deg",
            self.stall_angle_positive_deg,
            0.0,
            f64::INFINITY,
        );
        self.stall_angle_negative_deg = clamp_field(
            "stall_angle_negative_deg",
            self.stall_angle_negative_deg,
            f64::NEG_INFINITY,
            0.0,
        );
        self.chord = clamp_field("chord", self.chord, MIN_CHORD, f64::INFINITY);
        self.skin_friction = clamp_field("skin_friction", self.skin_friction, 0.0, f64::INFINITY);
        self.transition_width_deg = clamp_field(
            "transition_width_deg",
            self.transition_width_deg,
            0.0,
            f64::INFINITY,
        );

        Ok(self)
    }
}

fn clamp_field(name: &str, value: f64, min: f64, max: f64) -> f64 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("Airfoil {} {} out of range, clamped to {}", name, value, clamped);
    }
    clamped
}

/// Finite-aspect-ratio correction of the 2D lift slope.
pub fn corrected_lift_slope(lift_slope: f64, aspect_ratio: f64) -> f64 {
    lift_slope * aspect_ratio / (aspect_ratio + 2.0 * (aspect_ratio + 4.0) / (aspect_ratio + 2.0))
}

/// Validated aerodynamic parameters of one lifting surface profile, in radians.
///
/// Only constructible through validation, either from [`AirfoilParams`] or by
/// deserializing (which goes through the same path), so evaluation code never
/// sees unclamped values. Shared between surfaces behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AirfoilParams", into = "AirfoilParams")]
pub struct AirfoilConfig {
    lift_slope: f64,
    skin_friction: f64,
    zero_lift_aoa: f64,
    stall_angle_positive: f64,
    stall_angle_negative: f64,
    chord: f64,
    flap_fraction: f64,
    span: f64,
    aspect_ratio: f64,
    transition_width: f64,
    corrected_lift_slope: f64,
}

impl AirfoilConfig {
    pub fn new(params: AirfoilParams) -> Result<Self, ConfigError> {
        params.validated().map(Self::from_validated)
    }

    fn from_validated(params: AirfoilParams) -> Self {
        Self {
            lift_slope: params.lift_slope,
            skin_friction: params.skin_friction,
            zero_lift_aoa: deg_to_rad(params.zero_lift_aoa_deg),
            stall_angle_positive: deg_to_rad(params.stall_angle_positive_deg),
            stall_angle_negative: deg_to_rad(params.stall_angle_negative_deg),
            chord: params.chord,
            flap_fraction: params.flap_fraction,
            span: params.span,
            aspect_ratio: params.aspect_ratio,
            transition_width: deg_to_rad(params.transition_width_deg),
            corrected_lift_slope: corrected_lift_slope(params.lift_slope, params.aspect_ratio),
        }
    }

    /// Returns a copy with `edit` applied to the raw parameters, re-validated and
    /// with derived values recomputed.
    pub fn edit<F>(&self, edit: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&mut AirfoilParams),
    {
        let mut params = self.params();
        edit(&mut params);
        Self::new(params)
    }

    pub fn params(&self) -> AirfoilParams {
        AirfoilParams::from(self.clone())
    }

    pub fn lift_slope(&self) -> f64 {
        self.lift_slope
    }

    pub fn skin_friction(&self) -> f64 {
        self.skin_friction
    }

    pub fn zero_lift_aoa(&self) -> f64 {
        self.zero_lift_aoa
    }

    pub fn stall_angle_positive(&self) -> f64 {
        self.stall_angle_positive
    }

    pub fn stall_angle_negative(&self) -> f64 {
        self.stall_angle_negative
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    pub fn flap_fraction(&self) -> f64 {
        self.flap_fraction
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn transition_width(&self) -> f64 {
        self.transition_width
    }

    pub fn corrected_lift_slope(&self) -> f64 {
        self.corrected_lift_slope
    }

    /// Reference area [m^2]
    pub fn area(&self) -> f64 {
        self.chord * self.span
    }
}

impl Default for AirfoilConfig {
    fn default() -> Self {
        Self::from_validated(AirfoilParams::default())
    }
}

impl TryFrom<AirfoilParams> for AirfoilConfig {
    type Error = ConfigError;

    fn try_from(params: AirfoilParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl From<AirfoilConfig> for AirfoilParams {
    fn from(config: AirfoilConfig) -> Self {
        Self {
            lift_slope: config.lift_slope,
            skin_friction: config.skin_friction,
            zero_lift_aoa_deg: rad_to_deg(config.zero_lift_aoa),
            stall_angle_positive_deg: rad_to_deg(config.stall_angle_positive),
            stall_angle_negative_deg: rad_to_deg(config.stall_angle_negative),
            chord: config.chord,
            flap_fraction: config.flap_fraction,
            span: config.span,
            aspect_ratio: config.aspect_ratio,
            transition_width_deg: rad_to_deg(config.transition_width),
        }
    }
}
