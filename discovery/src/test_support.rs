//! Shared fixtures and doubles for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use seed_catalogue::Catalogue;

use crate::domain::Coordinates;
use crate::domain::ports::{CountryRecord, PhotoHit, RandomSource};

/// The bundled catalogue, shared.
pub(crate) fn bundled_catalogue() -> Arc<Catalogue> {
    Arc::new(Catalogue::bundled().expect("bundled catalogue is valid"))
}

/// A photo hit with placeholder attribution.
pub(crate) fn photo_hit(id: &str, regular_url: &str) -> PhotoHit {
    PhotoHit {
        id: id.to_owned(),
        regular_url: regular_url.to_owned(),
        alt_description: None,
        photographer_name: "Test Photographer".to_owned(),
        photographer_url: "https://photos.example/test".to_owned(),
        color: Some("#112233".to_owned()),
    }
}

/// A country record with coordinates and descriptive facts.
pub(crate) fn country(name: &str, latitude: f64, longitude: f64) -> CountryRecord {
    CountryRecord {
        coordinates: Some(Coordinates::new(latitude, longitude)),
        population: Some(1_000_000),
        currency: Some(format!("{name} currency")),
        language: Some(format!("{name} language")),
        ..CountryRecord::named(name)
    }
}

/// Replays a fixed script of samples, repeating the last one forever.
pub(crate) struct ScriptedRandom {
    samples: Mutex<VecDeque<f64>>,
    last: f64,
}

impl ScriptedRandom {
    pub(crate) fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        let samples: VecDeque<f64> = samples.into_iter().collect();
        let last = samples.back().copied().unwrap_or(0.0);
        Self {
            samples: Mutex::new(samples),
            last,
        }
    }

    pub(crate) fn constant(sample: f64) -> Self {
        Self::new([sample])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&self) -> f64 {
        let mut samples = self.samples.lock().expect("random script lock");
        samples.pop_front().unwrap_or(self.last)
    }
}
