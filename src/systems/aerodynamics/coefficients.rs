//! Lift, drag and pitching moment coefficients of a lifting surface over the whole
//! angle of attack range.
//!
//! Below stall a thin-airfoil linear lift law with a finite-wing induced angle
//! correction is used. Past stall the surface behaves like a flat plate whose normal
//! force peaks at 90°. Around each stall angle the two regimes are linearly blended
//! over `transition_width` so the curves stay continuous.
//!
//! Every function here is pure and may be called off the simulation tick with
//! arbitrary arguments.

use bevy::log::warn;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::components::{AeroIntermediates, AirfoilConfig, FlightCoefficients};
use crate::utils::{
    inverse_lerp, inverse_lerp_clamped, lerp, rad_to_deg, MIN_EFFECTIVE_AOA_COS,
};

/// Empirical viscous correction to flap effectiveness. Extrapolates past [0.4, 0.8]
/// for large flap angles.
#[inline]
fn viscosity_factor(flap_angle: f64) -> f64 {
    lerp(0.8, 0.4, (rad_to_deg(flap_angle).abs() - 10.0) / 50.0)
}

#[inline]
fn lift_coefficient_max_fraction(flap_fraction: f64) -> f64 {
    (1.0 - 0.5 * (flap_fraction - 0.1) / 0.3).clamp(0.0, 1.0)
}

/// Chordwise position of the center of pressure as a fraction of chord.
#[inline]
pub fn torque_coefficient_proportion(effective_aoa: f64) -> f64 {
    0.25 - 0.175 * (1.0 - 2.0 * effective_aoa.abs() / PI)
}

/// Normal-force coefficient of a flat plate at 90°, fitted against flap angle [rad].
#[inline]
pub fn drag_coefficient_at_90(flap_angle: f64) -> f64 {
    -4.26e-2 * flap_angle * flap_angle + 2.1e-1 * flap_angle + 1.98
}

/// Flap-corrected zero-lift angle and stall bounds for `flap_angle` [rad].
pub fn calculate_intermediates(config: &AirfoilConfig, flap_angle: f64) -> AeroIntermediates {
    let corrected_lift_slope = config.corrected_lift_slope();
    let theta = (2.0 * config.flap_fraction() - 1.0).acos();
    let flap_effectiveness = 1.0 - (theta - theta.sin()) / PI;
    let delta_lift =
        corrected_lift_slope * flap_effectiveness * viscosity_factor(flap_angle) * flap_angle;
    let zero_lift_aoa = config.zero_lift_aoa() - delta_lift / corrected_lift_slope;

    let max_fraction = lift_coefficient_max_fraction(config.flap_fraction());
    let cl_max_high = corrected_lift_slope
        * (config.stall_angle_positive() - config.zero_lift_aoa())
        + delta_lift * max_fraction;
    let cl_max_low = corrected_lift_slope
        * (config.stall_angle_negative() - config.zero_lift_aoa())
        + delta_lift * max_fraction;

    AeroIntermediates {
        flap_angle,
        corrected_lift_slope,
        flap_effectiveness,
        delta_lift,
        zero_lift_aoa,
        stall_angle_positive: zero_lift_aoa + cl_max_high / corrected_lift_slope,
        stall_angle_negative: zero_lift_aoa + cl_max_low / corrected_lift_slope,
    }
}

/// Attached-flow coefficients, valid between the corrected stall bounds.
pub fn calculate_low_angle_coefficients(
    config: &AirfoilConfig,
    aoa: f64,
    intermediates: &AeroIntermediates,
) -> FlightCoefficients {
    let zero_lift_aoa = intermediates.zero_lift_aoa;
    let lift = intermediates.corrected_lift_slope * (aoa - zero_lift_aoa);
    let effective_aoa = aoa - zero_lift_aoa - lift / (PI * config.aspect_ratio());
    let (sin_aoa, cos_aoa) = effective_aoa.sin_cos();

    let tangent = config.skin_friction() * cos_aoa;
    let normal = (lift + tangent * sin_aoa) / guard_cosine(cos_aoa, effective_aoa);
    let drag = normal * sin_aoa + tangent * cos_aoa;
    let moment = -normal * torque_coefficient_proportion(effective_aoa);

    FlightCoefficients { lift, drag, moment }
}

/// Floors the magnitude of `cos(effective_aoa)` before it is used as a divisor. The
/// low-angle law is only meant to run well inside ±90°, so hitting the floor means
/// the caller left the model's domain.
#[inline]
fn guard_cosine(cos_aoa: f64, effective_aoa: f64) -> f64 {
    if cos_aoa.abs() >= MIN_EFFECTIVE_AOA_COS {
        return cos_aoa;
    }
    warn!(
        "Low angle coefficients evaluated at effective aoa {:.3} rad, cosine floored",
        effective_aoa
    );
    if cos_aoa < 0.0 {
        -MIN_EFFECTIVE_AOA_COS
    } else {
        MIN_EFFECTIVE_AOA_COS
    }
}

/// Separated-flow coefficients, valid past stall up to ±180°.
///
/// The stall angle the induced angle decays from is picked by the sign of `aoa`. A
/// large negative flap can push the corrected negative stall above zero, in which
/// case this law jumps at `aoa = 0`.
pub fn calculate_high_angle_coefficients(
    config: &AirfoilConfig,
    aoa: f64,
    intermediates: &AeroIntermediates,
) -> FlightCoefficients {
    let zero_lift_aoa = intermediates.zero_lift_aoa;
    let aspect_ratio = config.aspect_ratio();

    // Induced angle decays from its value at the stall boundary to zero at ±90°.
    let (stall_angle, limit) = if aoa > 0.0 {
        (intermediates.stall_angle_positive, FRAC_PI_2)
    } else {
        (intermediates.stall_angle_negative, -FRAC_PI_2)
    };
    let lift_at_stall = intermediates.corrected_lift_slope * (stall_angle - zero_lift_aoa);
    let induced_aoa_at_stall = lift_at_stall / (PI * aspect_ratio);
    let induced_aoa = lerp(
        induced_aoa_at_stall,
        0.0,
        inverse_lerp(stall_angle, limit, aoa),
    );

    let drag_at_90 = drag_coefficient_at_90(intermediates.flap_angle);
    let effective_aoa = aoa - zero_lift_aoa - induced_aoa;
    let (sin_aoa, cos_aoa) = effective_aoa.sin_cos();

    let normal = drag_at_90
        * sin_aoa
        * (1.0 / (0.56 + 0.44 * sin_aoa.abs()) - 0.41 * (1.0 - (-17.0 / aspect_ratio).exp()));
    let tangent = 0.5 * config.skin_friction() * cos_aoa;

    FlightCoefficients {
        lift: normal * cos_aoa - tangent * sin_aoa,
        drag: normal * sin_aoa + tangent * cos_aoa,
        moment: -normal * torque_coefficient_proportion(effective_aoa),
    }
}

/// Coefficients at `aoa` [rad] with the flap deflected by `flap_angle` [rad].
///
/// Inside `transition_width / 2` of either corrected stall angle the low and high
/// angle results are blended, moving toward the high angle model as |aoa| grows.
/// The blend radius never exceeds half the gap between the two stall angles.
pub fn calculate_coefficients(
    config: &AirfoilConfig,
    aoa: f64,
    flap_angle: f64,
) -> FlightCoefficients {
    let intermediates = calculate_intermediates(config, flap_angle);
    coefficients_with_intermediates(config, aoa, &intermediates)
}

/// Same as [`calculate_coefficients`] for callers that already hold the
/// intermediates for the current flap angle.
pub fn coefficients_with_intermediates(
    config: &AirfoilConfig,
    aoa: f64,
    intermediates: &AeroIntermediates,
) -> FlightCoefficients {
    let stall_positive = intermediates.stall_angle_positive;
    let stall_negative = intermediates.stall_angle_negative;
    // Bands may touch at the midpoint but never overlap
    let transition_radius = (config.transition_width() / 2.0)
        .min((stall_positive - stall_negative) / 2.0)
        .max(0.0);

    if (aoa - stall_positive).abs() <= transition_radius {
        let low = calculate_low_angle_coefficients(config, aoa, intermediates);
        let high = calculate_high_angle_coefficients(config, aoa, intermediates);
        let t = inverse_lerp_clamped(
            stall_positive - transition_radius,
            stall_positive + transition_radius,
            aoa,
        );
        FlightCoefficients::lerp(&low, &high, t)
    } else if (aoa - stall_negative).abs() <= transition_radius {
        let low = calculate_low_angle_coefficients(config, aoa, intermediates);
        let high = calculate_high_angle_coefficients(config, aoa, intermediates);
        let t = inverse_lerp_clamped(
            stall_negative - transition_radius,
            stall_negative + transition_radius,
            aoa,
        );
        // The more negative side of the band is the stalled one.
        FlightCoefficients::lerp(&high, &low, t)
    } else if aoa <= stall_positive && aoa >= stall_negative {
        calculate_low_angle_coefficients(config, aoa, intermediates)
    } else {
        calculate_high_angle_coefficients(config, aoa, intermediates)
    }
}

/// One sample of a coefficient sweep.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CoefficientSample {
    pub aoa: f64,
    pub coefficients: FlightCoefficients,
}

/// Evaluates `samples` evenly spaced angles over [-180°, 180°). Used by plotting and
/// offline tooling.
pub fn sweep_coefficients(
    config: &AirfoilConfig,
    flap_angle: f64,
    samples: usize,
) -> Vec<CoefficientSample> {
    let intermediates = calculate_intermediates(config, flap_angle);
    (0..samples)
        .map(|i| {
            let aoa = i as f64 / samples as f64 * 2.0 * PI - PI;
            CoefficientSample {
                aoa,
                coefficients: coefficients_with_intermediates(config, aoa, &intermediates),
            }
        })
        .collect()
}
