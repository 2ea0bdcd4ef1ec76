//! Real Munich-area locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. The default depot sits in
//! Planegg, south-west of Munich, so the groups below cover the nearby
//! suburbs, the city proper, and outlying towns.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Western Suburbs (close to the Planegg depot)
// ============================================================================

pub const WESTERN_SUBURBS: &[Location] = &[
    Location::new("Martinsried Campus", 48.1098, 11.4585),
    Location::new("Graefelfing Bahnhof", 48.1189, 11.4289),
    Location::new("Krailling Ort", 48.0997, 11.4037),
    Location::new("Gauting Bahnhof", 48.0689, 11.3774),
    Location::new("Germering Stadthalle", 48.1339, 11.3764),
    Location::new("Pasing Arcaden", 48.1494, 11.4612),
    Location::new("Lochham", 48.1263, 11.4460),
    Location::new("Neuried Ortsmitte", 48.0921, 11.4672),
];

// ============================================================================
// Munich City
// ============================================================================

pub const CITY_CENTER: &[Location] = &[
    Location::new("Marienplatz", 48.1374, 11.5755),
    Location::new("Sendlinger Tor", 48.1336, 11.5668),
    Location::new("Deutsches Museum", 48.1299, 11.5834),
    Location::new("Hauptbahnhof", 48.1402, 11.5600),
    Location::new("Theresienwiese", 48.1316, 11.5494),
    Location::new("Schwabing Muenchner Freiheit", 48.1622, 11.5862),
    Location::new("Olympiapark", 48.1755, 11.5518),
    Location::new("BMW Welt", 48.1771, 11.5560),
    Location::new("Nymphenburg Schloss", 48.1583, 11.5033),
    Location::new("Tierpark Hellabrunn", 48.0921, 11.5550),
];

// ============================================================================
// Outlying Towns (longer legs, test the distance cap and refills)
// ============================================================================

pub const OUTLYING_TOWNS: &[Location] = &[
    Location::new("Starnberg See", 47.9983, 11.3405),
    Location::new("Fuerstenfeldbruck Zentrum", 48.1778, 11.2556),
    Location::new("Dachau Altstadt", 48.2599, 11.4342),
    Location::new("Freising Domberg", 48.4028, 11.7489),
    Location::new("Erding Lange Zeile", 48.3064, 11.9068),
    Location::new("Wolfratshausen Markt", 47.9131, 11.4274),
];
