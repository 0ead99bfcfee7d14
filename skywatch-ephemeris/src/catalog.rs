//! Built-in planet and star catalogs.
//!
//! Catalog lookup sits at the boundary of the engine: an absent body is an
//! explicit `None` here, never a null-like sentinel the models would have to
//! guard against. The name-resolving entry points in [`crate::planets`] and
//! [`crate::stars`] turn a `None` into
//! [`EphemError::UnresolvableBody`](skywatch_core::EphemError) for callers
//! that skip the check.
//!
//! # Planet elements
//!
//! Keplerian elements with per-day linear rates, from Schlyter's
//! low-precision element set. The epoch is `d = 0` at 1999-12-31 00:00 UT
//! (JD 2451543.5); see [`crate::planets`] for the propagation.
//!
//! # Star entries
//!
//! J2000 coordinates and proper motions for a selection of bright stars,
//! keyed by name and constellation.

use skywatch_core::Angle;

/// Keplerian orbital elements at the model epoch, with linear per-day rates.
///
/// Angles in degrees (the propagation wraps them), semi-major axis in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrbitalElements {
    /// Longitude of the ascending node at epoch, degrees.
    pub ascending_node: f64,
    pub ascending_node_rate: f64,
    /// Inclination to the ecliptic at epoch, degrees.
    pub inclination: f64,
    pub inclination_rate: f64,
    /// Argument of perihelion at epoch, degrees.
    pub perihelion_argument: f64,
    pub perihelion_argument_rate: f64,
    /// Semi-major axis at epoch, AU.
    pub semi_major_axis: f64,
    pub semi_major_axis_rate: f64,
    /// Eccentricity at epoch.
    pub eccentricity: f64,
    pub eccentricity_rate: f64,
    /// Mean anomaly at epoch, degrees.
    pub mean_anomaly: f64,
    pub mean_anomaly_rate: f64,
}

/// A planet catalog entry: name plus orbital elements. Immutable once
/// looked up.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Planet {
    name: &'static str,
    elements: OrbitalElements,
}

impl Planet {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }
}

/// A star catalog entry: identifier, constellation, J2000 coordinates, and
/// proper motion. Immutable once looked up.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Star {
    id: &'static str,
    constellation: &'static str,
    ra_j2000_hours: f64,
    dec_j2000_degrees: f64,
    /// Proper motion in right ascension, mas/yr (already including cos δ).
    pm_ra_mas_yr: f64,
    /// Proper motion in declination, mas/yr.
    pm_dec_mas_yr: f64,
}

impl Star {
    pub fn id(&self) -> &str {
        self.id
    }

    pub fn constellation(&self) -> &str {
        self.constellation
    }

    pub fn ra_j2000(&self) -> Angle {
        Angle::from_hours(self.ra_j2000_hours)
    }

    pub fn dec_j2000(&self) -> Angle {
        Angle::from_degrees(self.dec_j2000_degrees)
    }

    pub fn pm_ra_mas_yr(&self) -> f64 {
        self.pm_ra_mas_yr
    }

    pub fn pm_dec_mas_yr(&self) -> f64 {
        self.pm_dec_mas_yr
    }
}

// Schlyter element set, epoch d = 0 at 1999-12-31 00:00 UT.
const PLANETS: [Planet; 7] = [
    Planet {
        name: "Mercury",
        elements: OrbitalElements {
            ascending_node: 48.3313,
            ascending_node_rate: 3.24587e-5,
            inclination: 7.0047,
            inclination_rate: 5.00e-8,
            perihelion_argument: 29.1241,
            perihelion_argument_rate: 1.01444e-5,
            semi_major_axis: 0.387098,
            semi_major_axis_rate: 0.0,
            eccentricity: 0.205635,
            eccentricity_rate: 5.59e-10,
            mean_anomaly: 168.6562,
            mean_anomaly_rate: 4.0923344368,
        },
    },
    Planet {
        name: "Venus",
        elements: OrbitalElements {
            ascending_node: 76.6799,
            ascending_node_rate: 2.46590e-5,
            inclination: 3.3946,
            inclination_rate: 2.75e-8,
            perihelion_argument: 54.8910,
            perihelion_argument_rate: 1.38374e-5,
            semi_major_axis: 0.723330,
            semi_major_axis_rate: 0.0,
            eccentricity: 0.006773,
            eccentricity_rate: -1.302e-9,
            mean_anomaly: 48.0052,
            mean_anomaly_rate: 1.6021302244,
        },
    },
    Planet {
        name: "Mars",
        elements: OrbitalElements {
            ascending_node: 49.5574,
            ascending_node_rate: 2.11081e-5,
            inclination: 1.8497,
            inclination_rate: -1.78e-8,
            perihelion_argument: 286.5016,
            perihelion_argument_rate: 2.92961e-5,
            semi_major_axis: 1.523688,
            semi_major_axis_rate: 0.0,
            eccentricity: 0.093405,
            eccentricity_rate: 2.516e-9,
            mean_anomaly: 18.6021,
            mean_anomaly_rate: 0.5240207766,
        },
    },
    Planet {
        name: "Jupiter",
        elements: OrbitalElements {
            ascending_node: 100.4542,
            ascending_node_rate: 2.76854e-5,
            inclination: 1.3030,
            inclination_rate: -1.557e-7,
            perihelion_argument: 273.8777,
            perihelion_argument_rate: 1.64505e-5,
            semi_major_axis: 5.20256,
            semi_major_axis_rate: 0.0,
            eccentricity: 0.048498,
            eccentricity_rate: 4.469e-9,
            mean_anomaly: 19.8950,
            mean_anomaly_rate: 0.0830853001,
        },
    },
    Planet {
        name: "Saturn",
        elements: OrbitalElements {
            ascending_node: 113.6634,
            ascending_node_rate: 2.38980e-5,
            inclination: 2.4886,
            inclination_rate: -1.081e-7,
            perihelion_argument: 339.3939,
            perihelion_argument_rate: 2.97661e-5,
            semi_major_axis: 9.55475,
            semi_major_axis_rate: 0.0,
            eccentricity: 0.055546,
            eccentricity_rate: -9.499e-9,
            mean_anomaly: 316.9670,
            mean_anomaly_rate: 0.0334442282,
        },
    },
    Planet {
        name: "Uranus",
        elements: OrbitalElements {
            ascending_node: 74.0005,
            ascending_node_rate: 1.3978e-5,
            inclination: 0.7733,
            inclination_rate: 1.9e-8,
            perihelion_argument: 96.6612,
            perihelion_argument_rate: 3.0565e-5,
            semi_major_axis: 19.18171,
            semi_major_axis_rate: -1.55e-8,
            eccentricity: 0.047318,
            eccentricity_rate: 7.45e-9,
            mean_anomaly: 142.5905,
            mean_anomaly_rate: 0.011725806,
        },
    },
    Planet {
        name: "Neptune",
        elements: OrbitalElements {
            ascending_node: 131.7806,
            ascending_node_rate: 3.0173e-5,
            inclination: 1.7700,
            inclination_rate: -2.55e-7,
            perihelion_argument: 272.8461,
            perihelion_argument_rate: -6.027e-6,
            semi_major_axis: 30.05826,
            semi_major_axis_rate: 3.313e-8,
            eccentricity: 0.008606,
            eccentricity_rate: 2.15e-9,
            mean_anomaly: 260.2471,
            mean_anomaly_rate: 0.005995147,
        },
    },
];

const STARS: [Star; 10] = [
    Star {
        id: "Sirius",
        constellation: "Canis Major",
        ra_j2000_hours: 6.752481,
        dec_j2000_degrees: -16.716116,
        pm_ra_mas_yr: -546.01,
        pm_dec_mas_yr: -1223.07,
    },
    Star {
        id: "Canopus",
        constellation: "Carina",
        ra_j2000_hours: 6.399197,
        dec_j2000_degrees: -52.695661,
        pm_ra_mas_yr: 19.93,
        pm_dec_mas_yr: 23.24,
    },
    Star {
        id: "Arcturus",
        constellation: "Bootes",
        ra_j2000_hours: 14.261030,
        dec_j2000_degrees: 19.182409,
        pm_ra_mas_yr: -1093.39,
        pm_dec_mas_yr: -2000.06,
    },
    Star {
        id: "Vega",
        constellation: "Lyra",
        ra_j2000_hours: 18.615649,
        dec_j2000_degrees: 38.783689,
        pm_ra_mas_yr: 200.94,
        pm_dec_mas_yr: 286.23,
    },
    Star {
        id: "Capella",
        constellation: "Auriga",
        ra_j2000_hours: 5.278155,
        dec_j2000_degrees: 45.997991,
        pm_ra_mas_yr: 75.52,
        pm_dec_mas_yr: -427.11,
    },
    Star {
        id: "Rigel",
        constellation: "Orion",
        ra_j2000_hours: 5.242298,
        dec_j2000_degrees: -8.201638,
        pm_ra_mas_yr: 1.31,
        pm_dec_mas_yr: 0.5,
    },
    Star {
        id: "Betelgeuse",
        constellation: "Orion",
        ra_j2000_hours: 5.919529,
        dec_j2000_degrees: 7.407064,
        pm_ra_mas_yr: 26.42,
        pm_dec_mas_yr: 9.6,
    },
    Star {
        id: "Altair",
        constellation: "Aquila",
        ra_j2000_hours: 19.846388,
        dec_j2000_degrees: 8.868322,
        pm_ra_mas_yr: 536.23,
        pm_dec_mas_yr: 385.29,
    },
    Star {
        id: "Aldebaran",
        constellation: "Taurus",
        ra_j2000_hours: 4.598677,
        dec_j2000_degrees: 16.509302,
        pm_ra_mas_yr: 62.78,
        pm_dec_mas_yr: -189.36,
    },
    Star {
        id: "Polaris",
        constellation: "Ursa Minor",
        ra_j2000_hours: 2.530193,
        dec_j2000_degrees: 89.264109,
        pm_ra_mas_yr: 44.48,
        pm_dec_mas_yr: -11.85,
    },
];

/// Looks up a planet by name, case-insensitively.
pub fn planet_by_name(name: &str) -> Option<Planet> {
    PLANETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .cloned()
}

/// Looks up a star by identifier and constellation, case-insensitively.
pub fn star_by_id(id: &str, constellation: &str) -> Option<Star> {
    STARS
        .iter()
        .find(|s| {
            s.id.eq_ignore_ascii_case(id) && s.constellation.eq_ignore_ascii_case(constellation)
        })
        .cloned()
}

/// All catalogued planets, in order of increasing semi-major axis.
pub fn planets() -> &'static [Planet] {
    &PLANETS
}

/// All catalogued stars.
pub fn stars() -> &'static [Star] {
    &STARS
}
