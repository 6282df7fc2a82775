//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! UT1 is taken equal to UTC; the sub-second difference is far below the
//! precision of the analytic solar coordinates.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Sidereal rotations per solar day.
pub const SIDEREAL_RATE: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle at a Julian Date, radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + SIDEREAL_RATE * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a Julian Date, radians in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / 36525.0;
    let t2 = t * t;
    let poly_arcsec =
        0.014506 + 4612.156534 * t + 1.3915817 * t2 - 0.00000044 * t2 * t - 0.000029956 * t2 * t2;
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
