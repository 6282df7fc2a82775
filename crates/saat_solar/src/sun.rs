//! Low-precision analytic solar coordinates.
//!
//! Mean anomaly, mean longitude and equation of centre give the Sun's
//! apparent ecliptic longitude; obliquity then yields RA/Dec. Accurate to
//! about 0.01 deg over 1950..2050, ample for rise/set to the minute.
//!
//! Source: USNO "Approximate Solar Coordinates"; Meeus ch. 25.

use crate::julian::J2000_JD;

/// Astronomical unit in km (IAU 2012).
const AU_KM: f64 = 149_597_870.7;

/// IAU 2015 nominal solar radius in km.
const SUN_RADIUS_KM: f64 = 696_000.0;

/// Geocentric equatorial position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Right ascension in radians, [0, 2π).
    pub ra_rad: f64,
    /// Declination in radians.
    pub dec_rad: f64,
    /// Earth–Sun distance in km.
    pub distance_km: f64,
}

/// Sun RA, Dec and distance at a Julian Date.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000_JD;
    let g = (357.529 + 0.985_600_28 * d).to_radians();
    let q = 280.459 + 0.985_647_36 * d;
    let lambda = (q + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();
    let r_au = 1.000_14 - 0.016_71 * g.cos() - 0.000_14 * (2.0 * g).cos();
    let eps = (23.439 - 0.000_000_36 * d).to_radians();

    let ra = (eps.cos() * lambda.sin())
        .atan2(lambda.cos())
        .rem_euclid(std::f64::consts::TAU);
    let dec = (eps.sin() * lambda.sin()).asin();

    SunPosition {
        ra_rad: ra,
        dec_rad: dec,
        distance_km: r_au * AU_KM,
    }
}

/// Solar angular semidiameter in arcminutes for an Earth–Sun distance.
///
/// Varies ~15.7' (aphelion) to ~16.3' (perihelion).
pub fn solar_semidiameter_arcmin(distance_km: f64) -> f64 {
    (SUN_RADIUS_KM / distance_km).asin().to_degrees() * 60.0
}
