//! Built-in catalog used when no backend is configured.
//!
//! A handful of well-known planets with representative light curves and
//! radial-velocity curves. Proxima Centauri b deliberately lacks a mass to
//! exercise the "not detected" paths.

use crate::domain::{DiscoveryMethod, ExoplanetRecord, Sample};

struct Physical {
    radius: f64,
    mass: Option<f64>,
    distance: f64,
    orbital_period: f64,
    temperature: f64,
}

#[allow(clippy::too_many_arguments)]
fn planet(
    id: &str,
    name: &str,
    method: DiscoveryMethod,
    year: i32,
    host_star: &str,
    description: &str,
    physical: Physical,
    graph_data: Vec<Sample>,
) -> ExoplanetRecord {
    let mut r = ExoplanetRecord::new(id, name, method, year);
    r.radius = Some(physical.radius);
    r.mass = physical.mass;
    r.distance = Some(physical.distance);
    r.orbital_period = Some(physical.orbital_period);
    r.temperature = Some(physical.temperature);
    r.host_star = Some(host_star.to_string());
    r.description = Some(description.to_string());
    r.graph_data = Some(graph_data);
    r
}

fn light_curve(points: &[(f64, f64)]) -> Vec<Sample> {
    points.iter().map(|&(t, b)| Sample::brightness(t, b)).collect()
}

fn rv_curve(points: &[(f64, f64)]) -> Vec<Sample> {
    points.iter().map(|&(t, v)| Sample::velocity(t, v)).collect()
}

/// The mock catalog, in display order.
pub fn mock_catalog() -> Vec<ExoplanetRecord> {
    let mut kepler_452b = planet(
        "kepler-452b",
        "Kepler-452b",
        DiscoveryMethod::Transit,
        2015,
        "Kepler-452",
        "Earth's older, bigger cousin in the habitable zone of a Sun-like star.",
        Physical {
            radius: 1.63,
            mass: Some(5.0),
            distance: 1400.0,
            orbital_period: 384.8,
            temperature: 265.0,
        },
        light_curve(&[
            (0.0, 1.000),
            (0.5, 0.999),
            (1.0, 0.998),
            (1.5, 0.996),
            (2.0, 0.994),
            (2.5, 0.992),
            (3.0, 0.994),
            (3.5, 0.996),
            (4.0, 0.998),
            (4.5, 0.999),
            (5.0, 1.000),
        ]),
    );
    kepler_452b.radius_confidence = Some(0.92);
    kepler_452b.mass_confidence = Some(0.88);
    kepler_452b.distance_confidence = Some(0.95);
    kepler_452b.ai_model_version = Some("1.0.0".to_string());
    kepler_452b.detection_confidence = Some(0.90);
    kepler_452b.last_updated = Some("2024-01-15T10:30:00Z".to_string());

    let mut proxima_b = planet(
        "proxima-centauri-b",
        "Proxima Centauri b",
        DiscoveryMethod::RadialVelocity,
        2016,
        "Proxima Centauri",
        "The closest known exoplanet to Earth, potentially habitable.",
        Physical {
            radius: 1.17,
            mass: None,
            distance: 4.24,
            orbital_period: 11.2,
            temperature: 234.0,
        },
        rv_curve(&[
            (0.0, 5.2),
            (1.0, 3.1),
            (2.0, -2.4),
            (3.0, -5.8),
            (4.0, -3.2),
            (5.0, 1.9),
            (6.0, 5.2),
        ]),
    );
    proxima_b.radius_confidence = Some(0.85);
    proxima_b.distance_confidence = Some(0.98);
    proxima_b.ai_model_version = Some("1.0.0".to_string());
    proxima_b.detection_confidence = Some(0.75);
    proxima_b.last_updated = Some("2024-01-15T10:30:00Z".to_string());

    vec![
        kepler_452b,
        proxima_b,
        planet(
            "trappist-1e",
            "TRAPPIST-1e",
            DiscoveryMethod::Transit,
            2017,
            "TRAPPIST-1",
            "One of seven Earth-sized planets in the TRAPPIST-1 system.",
            Physical {
                radius: 0.92,
                mass: Some(0.69),
                distance: 39.5,
                orbital_period: 6.1,
                temperature: 251.0,
            },
            light_curve(&[
                (0.0, 1.000),
                (1.0, 0.999),
                (2.0, 0.997),
                (3.0, 0.995),
                (4.0, 0.997),
                (5.0, 0.999),
                (6.0, 1.000),
            ]),
        ),
        planet(
            "k2-18b",
            "K2-18b",
            DiscoveryMethod::Transit,
            2015,
            "K2-18",
            "A sub-Neptune with water vapor detected in its atmosphere.",
            Physical {
                radius: 2.23,
                mass: Some(8.63),
                distance: 124.0,
                orbital_period: 33.0,
                temperature: 265.0,
            },
            light_curve(&[
                (0.0, 1.000),
                (2.0, 0.999),
                (4.0, 0.997),
                (6.0, 0.994),
                (8.0, 0.991),
                (10.0, 0.994),
                (12.0, 0.997),
                (14.0, 0.999),
                (16.0, 1.000),
            ]),
        ),
        planet(
            "hd-209458b",
            "HD 209458b",
            DiscoveryMethod::Transit,
            1999,
            "HD 209458",
            "First exoplanet discovered transiting its star, nicknamed 'Osiris'.",
            Physical {
                radius: 1.38,
                mass: Some(0.69),
                distance: 159.0,
                orbital_period: 3.5,
                temperature: 1130.0,
            },
            light_curve(&[
                (0.0, 1.000),
                (0.5, 0.998),
                (1.0, 0.995),
                (1.5, 0.992),
                (2.0, 0.995),
                (2.5, 0.998),
                (3.0, 1.000),
            ]),
        ),
        planet(
            "gliese-667cc",
            "Gliese 667Cc",
            DiscoveryMethod::RadialVelocity,
            2011,
            "Gliese 667C",
            "A super-Earth in the habitable zone of a red dwarf star.",
            Physical {
                radius: 1.54,
                mass: Some(3.8),
                distance: 23.6,
                orbital_period: 28.1,
                temperature: 277.0,
            },
            rv_curve(&[
                (0.0, 2.1),
                (3.0, 4.2),
                (6.0, 1.8),
                (9.0, -2.5),
                (12.0, -4.1),
                (15.0, -1.9),
                (18.0, 2.1),
            ]),
        ),
        planet(
            "toi-715b",
            "TOI-715b",
            DiscoveryMethod::Transit,
            2024,
            "TOI-715",
            "A recently discovered super-Earth in the habitable zone.",
            Physical {
                radius: 1.55,
                mass: Some(3.02),
                distance: 137.0,
                orbital_period: 19.3,
                temperature: 280.0,
            },
            light_curve(&[
                (0.0, 1.000),
                (3.0, 0.999),
                (6.0, 0.997),
                (9.0, 0.994),
                (12.0, 0.991),
                (15.0, 0.994),
                (18.0, 0.997),
                (21.0, 0.999),
                (24.0, 1.000),
            ]),
        ),
        planet(
            "wasp-96b",
            "WASP-96b",
            DiscoveryMethod::Transit,
            2013,
            "WASP-96",
            "A hot gas giant with a clear atmosphere, studied by JWST.",
            Physical {
                radius: 1.2,
                mass: Some(0.48),
                distance: 1150.0,
                orbital_period: 3.4,
                temperature: 1300.0,
            },
            light_curve(&[
                (0.0, 1.000),
                (0.8, 0.999),
                (1.6, 0.996),
                (2.4, 0.992),
                (3.2, 0.996),
                (4.0, 0.999),
                (4.8, 1.000),
            ]),
        ),
    ]
}
