use tokio::time::Instant;

use crate::constants::coordinates::{
    CENTER_LAT, CENTER_LNG, PRECISION, SPREAD_LAT, SPREAD_LNG,
};
use crate::models::{Category, Coordinates, Request};
use crate::random::RandomSource;

pub const NEIGHBORHOODS: [&str; 14] = [
    "Marais",
    "Montmartre",
    "Saint-Germain",
    "Bastille",
    "Oberkampf",
    "République",
    "Nation",
    "Belleville",
    "Pigalle",
    "Châtelet",
    "Opéra",
    "Batignolles",
    "Canal St-Martin",
    "Buttes-Chaumont",
];

pub const VENUES: [&str; 14] = [
    "Le Perchoir Marais",
    "Café de Flore",
    "Les Deux Magots",
    "Brasserie Lipp",
    "Chez Janou",
    "Le Baron Rouge",
    "Café Charlot",
    "Le Progrès",
    "Rosa Bonheur",
    "Pavillon Puebla",
    "La Rotonde",
    "Terminus Nord",
    "L'Entrepôt",
    "Le Select",
];

/// Produces one synthetic request per call. Ids are supplied by the caller.
#[derive(Debug, Clone)]
pub struct RequestGenerator {
    min_score: u8,
    max_score: u8,
}

impl RequestGenerator {
    pub fn new(min_score: u8, max_score: u8) -> Self {
        debug_assert!(min_score <= max_score);
        Self {
            min_score,
            max_score,
        }
    }

    pub fn generate(&self, id: u64, created_at: Instant, rng: &mut dyn RandomSource) -> Request {
        let category = Category::ALL[rng.pick(Category::ALL.len())];
        let neighborhood = NEIGHBORHOODS[rng.pick(NEIGHBORHOODS.len())];
        let score = rng.between(self.min_score as u64, self.max_score as u64) as u8;
        let venue = category
            .names_venue()
            .then(|| VENUES[rng.pick(VENUES.len())]);
        let coordinates = Coordinates {
            lat: jitter(CENTER_LAT, SPREAD_LAT, rng.unit()),
            lng: jitter(CENTER_LNG, SPREAD_LNG, rng.unit()),
        };

        Request {
            id,
            category,
            neighborhood,
            venue,
            score,
            coordinates,
            created_at,
        }
    }
}

/// Offset `center` by `(unit - 0.5) * spread`, rounded to the coordinate precision.
fn jitter(center: f64, spread: f64, unit: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    ((center + (unit - 0.5) * spread) * scale).round() / scale
}
