//! Sunrise/sunset computation.
//!
//! Iterative algorithm based on standard spherical astronomy formulas.
//! Computes the time when the Sun's geocentric altitude equals the target
//! depression angle, for a given observer location and date.
//!
//! Sources: Meeus ch. 15, USNO. Sun position from [`crate::sun`].

use std::f64::consts::{PI, TAU};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::SolarError;
use crate::julian::{date_to_jd_0h, jd_to_instant};
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarTimes};
use crate::sidereal::{SIDEREAL_RATE, gmst_rad, local_sidereal_time_rad};
use crate::sun::{solar_semidiameter_arcmin, sun_position};

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Largest final correction accepted once the iteration cap is hit (~8.6 s).
const SETTLED_DAYS: f64 = 1.0e-4;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Normalize an angle to [-π, π].
fn wrap_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

/// Cosine of the hour angle at which the Sun reaches altitude `h0`.
fn cos_hour_angle(h0_rad: f64, phi: f64, dec: f64) -> f64 {
    (h0_rad.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Compute a single rise/set event for the Sun.
///
/// `jd_utc_noon` is the approximate local noon of the desired date; use
/// [`approximate_local_noon_jd`] to derive it from a calendar date.
///
/// Returns `NeverRises`/`NeverSets` when the Sun does not cross the target
/// altitude during that solar day.
pub fn compute_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, SolarError> {
    refine_rise_set(location, event, jd_utc_noon, config, MAX_ITERATIONS)
}

fn refine_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
    max_iterations: usize,
) -> Result<RiseSetResult, SolarError> {
    location.validate()?;
    let phi = location.latitude_rad();
    let lon = location.longitude_rad();

    let sun = sun_position(jd_utc_noon);
    let h0 = config
        .target_altitude_deg(solar_semidiameter_arcmin(sun.distance_km), location.altitude_m)
        .to_radians();

    let cos_h0 = cos_hour_angle(h0, phi, sun.dec_rad);
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    let sidereal_rate = TAU * SIDEREAL_RATE; // rad/day

    // Transit: correct noon by the hour angle offset
    let ha_noon = wrap_pi(local_sidereal_time_rad(gmst_rad(jd_utc_noon), lon) - sun.ra_rad);
    let jd_transit = jd_utc_noon - ha_noon / sidereal_rate;

    let semi_arc_days = cos_h0.acos() / sidereal_rate;
    let mut jd_event = if event.is_rising() {
        jd_transit - semi_arc_days
    } else {
        jd_transit + semi_arc_days
    };

    let mut last_correction = f64::INFINITY;
    for _ in 0..max_iterations {
        let sun_i = sun_position(jd_event);
        let h0_i = config
            .target_altitude_deg(solar_semidiameter_arcmin(sun_i.distance_km), location.altitude_m)
            .to_radians();

        let cos_h_i = cos_hour_angle(h0_i, phi, sun_i.dec_rad);
        if cos_h_i > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h_i < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h_i.acos();
        let ha_target = if event.is_rising() { -h_target } else { h_target };

        let ha_actual = wrap_pi(local_sidereal_time_rad(gmst_rad(jd_event), lon) - sun_i.ra_rad);
        let correction = wrap_pi(ha_target - ha_actual) / sidereal_rate;
        jd_event += correction;
        last_correction = correction.abs();

        if last_correction < CONVERGENCE_DAYS {
            break;
        }
    }

    if last_correction >= CONVERGENCE_DAYS {
        if last_correction >= SETTLED_DAYS {
            return Err(SolarError::NoConvergence("rise/set refinement did not settle"));
        }
        debug!(?event, jd_event, last_correction, "rise/set refinement hit the iteration cap");
    }

    Ok(RiseSetResult::Event {
        jd_utc: jd_event,
        event,
    })
}

/// Sunrise and sunset for a calendar date at a location.
///
/// The date is interpreted as the solar day around local noon, so the
/// result does not depend on any timezone.
pub fn solar_times_for_date(
    date: NaiveDate,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> Result<SolarTimes, SolarError> {
    let jd_noon = approximate_local_noon_jd(date_to_jd_0h(date), location.longitude_deg);

    let sunrise = event_jd(compute_rise_set(location, RiseSetEvent::Sunrise, jd_noon, config)?)?;
    let sunset = event_jd(compute_rise_set(location, RiseSetEvent::Sunset, jd_noon, config)?)?;

    let times = SolarTimes::new(jd_to_instant(sunrise)?, jd_to_instant(sunset)?)?;
    debug!(%date, sunrise = %times.sunrise, sunset = %times.sunset, "solar times");
    Ok(times)
}

fn event_jd(result: RiseSetResult) -> Result<f64, SolarError> {
    match result {
        RiseSetResult::Event { jd_utc, .. } => Ok(jd_utc),
        RiseSetResult::NeverRises => Err(SolarError::NeverRises),
        RiseSetResult::NeverSets => Err(SolarError::NeverSets),
    }
}
