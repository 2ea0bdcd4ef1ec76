//! Delivery tour solver (greedy construction with clustering look-ahead).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::haversine;
use crate::traits::Delivery;

/// Fixed origin and terminus of every tour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Depot {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Default for Depot {
    fn default() -> Self {
        Self {
            name: "HQ".to_string(),
            address: "Planegg, Deutschland".to_string(),
            lat: 48.1067,
            lng: 11.4247,
        }
    }
}

impl Depot {
    pub fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Weights and thresholds for candidate scoring.
///
/// The defaults are tuned reference values, not derived quantities; treat
/// them as adjustable parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringParams {
    /// Weight of the travel distance term.
    pub distance_weight: f64,
    /// Weight of the priority tier term.
    pub priority_weight: f64,
    /// Weight of the demand-efficiency term.
    pub efficiency_weight: f64,
    /// Weight of the clustering look-ahead term.
    pub clustering_weight: f64,
    /// Cap on the distance term, bounding the influence of far outliers.
    pub distance_cap_km: f64,
    /// Radius within which another candidate counts as "nearby".
    pub nearby_radius_km: f64,
    /// Clustering score for a candidate with no nearby deliverable neighbor.
    pub isolation_penalty: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            distance_weight: 0.40,
            priority_weight: 0.35,
            efficiency_weight: 0.15,
            clustering_weight: 0.10,
            distance_cap_km: 100.0,
            nearby_radius_km: 10.0,
            isolation_penalty: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOptions {
    /// Maximum total bottles a vehicle carries per tour.
    pub capacity_per_trip: u32,
    /// Assumed average driving speed in km/h.
    pub average_speed_kmh: f64,
    /// Service time spent at each stop, in minutes.
    pub service_minutes_per_stop: u32,
    /// Duration of a depot refill between tours, in minutes.
    pub refill_minutes: u32,
    pub scoring: ScoringParams,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            capacity_per_trip: 80,
            average_speed_kmh: 50.0,
            service_minutes_per_stop: 5,
            refill_minutes: 15,
            scoring: ScoringParams::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourKind {
    Delivery,
    Refill,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedStop<Id> {
    pub delivery_id: Id,
    /// 1-based position within the tour.
    pub stop_order: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tour<Id> {
    pub id: u32,
    pub kind: TourKind,
    pub stops: Vec<PlannedStop<Id>>,
    pub total_bottles: u32,
    /// Round trip distance in kilometers, rounded to 2 decimals.
    pub total_distance_km: f64,
    pub estimated_minutes: u32,
    pub depot_returns: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnplacedReason {
    /// Geocoding produced no coordinates for the stop.
    MissingLocation,
    /// The stop's demand exceeds the per-trip capacity of an empty vehicle.
    ExceedsVehicleCapacity,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnplacedStop<Id> {
    pub delivery_id: Id,
    pub reason: UnplacedReason,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResult<Id> {
    /// Delivery tours interleaved with depot refill tours.
    pub tours: Vec<Tour<Id>>,
    pub unplaced: Vec<UnplacedStop<Id>>,
}

impl<Id> PlanResult<Id> {
    pub fn total_distance_km(&self) -> f64 {
        self.tours.iter().map(|tour| tour.total_distance_km).sum()
    }

    pub fn estimated_total_minutes(&self) -> u32 {
        self.tours.iter().map(|tour| tour.estimated_minutes).sum()
    }

    pub fn placed_count(&self) -> usize {
        self.tours.iter().map(|tour| tour.stops.len()).sum()
    }
}

/// Build capacity-bounded delivery tours for a set of stops.
///
/// Stops are ranked by priority tier and depot distance, then consumed by a
/// greedy next-stop selection until the pool is exhausted. A refill tour is
/// inserted after every delivery tour that leaves stops remaining. Stops
/// that can never be placed are reported in `unplaced` instead of silently
/// starving in the pool.
pub fn plan<D: Delivery>(stops: &[D], depot: &Depot, options: &PlanOptions) -> PlanResult<D::Id> {
    let mut pool: Vec<&D> = Vec::new();
    let mut unplaced: Vec<UnplacedStop<D::Id>> = Vec::new();

    for stop in stops {
        if stop.location().is_none() {
            unplaced.push(UnplacedStop {
                delivery_id: stop.id().clone(),
                reason: UnplacedReason::MissingLocation,
            });
            continue;
        }
        if stop.bottles() > options.capacity_per_trip {
            unplaced.push(UnplacedStop {
                delivery_id: stop.id().clone(),
                reason: UnplacedReason::ExceedsVehicleCapacity,
            });
            continue;
        }
        pool.push(stop);
    }

    info!(stops = pool.len(), rejected = unplaced.len(), "optimizing delivery tours");

    rank_by_priority_and_distance(&mut pool, depot);

    let mut tours: Vec<Tour<D::Id>> = Vec::new();
    let mut tour_id: u32 = 1;

    while !pool.is_empty() {
        let tour = build_tour(tour_id, &mut pool, depot, options);

        if tour.stops.is_empty() {
            // Safety check: the builder made no progress, so another pass
            // over the same pool cannot either.
            warn!(tour_id, remaining = pool.len(), "no stops placed, halting tour construction");
            for stop in pool.drain(..) {
                unplaced.push(UnplacedStop {
                    delivery_id: stop.id().clone(),
                    reason: UnplacedReason::ExceedsVehicleCapacity,
                });
            }
            break;
        }

        tours.push(tour);

        // Refuel at the depot before the next delivery tour.
        if !pool.is_empty() {
            tours.push(refill_tour(tour_id, options));
        }

        tour_id += 1;
    }

    info!(tours = tours.len(), unplaced = unplaced.len(), "tour construction finished");

    PlanResult { tours, unplaced }
}

/// Order the pool by priority tier, then by distance from the depot.
///
/// This establishes the processing sequence only; the tour builder may still
/// defer a high-ranked stop that does not fit remaining capacity.
fn rank_by_priority_and_distance<D: Delivery>(pool: &mut [&D], depot: &Depot) {
    let origin = depot.location();
    pool.sort_by(|a, b| {
        a.priority()
            .rank()
            .cmp(&b.priority().rank())
            .then_with(|| {
                let da = haversine::distance_km(origin, resolved_location(*a));
                let db = haversine::distance_km(origin, resolved_location(*b));
                da.total_cmp(&db)
            })
    });
}

/// Grow a single tour from the pool until capacity is exhausted or no
/// remaining candidate fits.
fn build_tour<'a, D: Delivery>(
    tour_id: u32,
    pool: &mut Vec<&'a D>,
    depot: &Depot,
    options: &PlanOptions,
) -> Tour<D::Id> {
    let mut stops: Vec<PlannedStop<D::Id>> = Vec::new();
    let mut path: Vec<(f64, f64)> = Vec::new();
    let mut load: u32 = 0;
    let mut position = depot.location();

    while load < options.capacity_per_trip && !pool.is_empty() {
        let remaining = options.capacity_per_trip - load;
        let Some(index) = next_best_stop(position, pool, remaining, &options.scoring) else {
            break;
        };

        let stop = pool.remove(index);
        let location = resolved_location(stop);

        load += stop.bottles();
        stops.push(PlannedStop {
            delivery_id: stop.id().clone(),
            stop_order: stops.len() as u32 + 1,
        });
        path.push(location);
        position = location;

        debug!(tour_id, stop_order = stops.len(), bottles = load, "stop placed");
    }

    let distance = tour_distance(depot.location(), &path);
    let estimated_minutes = tour_minutes(distance, stops.len(), options);
    let depot_returns = u32::from(load > 0);

    Tour {
        id: tour_id,
        kind: TourKind::Delivery,
        stops,
        total_bottles: load,
        total_distance_km: round2(distance),
        estimated_minutes,
        depot_returns,
    }
}

/// Synthetic depot visit between two delivery tours, reusing the id of the
/// tour it follows.
fn refill_tour<Id>(tour_id: u32, options: &PlanOptions) -> Tour<Id> {
    Tour {
        id: tour_id,
        kind: TourKind::Refill,
        stops: Vec::new(),
        total_bottles: 0,
        total_distance_km: 0.0,
        estimated_minutes: options.refill_minutes,
        depot_returns: 1,
    }
}

/// Pick the best next stop from the pool, or `None` when nothing fits the
/// remaining capacity. Returns an index into the pool.
fn next_best_stop<D: Delivery>(
    position: (f64, f64),
    pool: &[&D],
    remaining_capacity: u32,
    scoring: &ScoringParams,
) -> Option<usize> {
    let feasible: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, stop)| stop.bottles() <= remaining_capacity)
        .map(|(index, _)| index)
        .collect();

    match feasible.len() {
        0 => return None,
        1 => return Some(feasible[0]),
        _ => {}
    }

    let mut best_index: Option<usize> = None;
    let mut best_score = f64::INFINITY;

    for &index in &feasible {
        let stop = pool[index];
        let location = resolved_location(stop);

        let distance_score =
            haversine::distance_km(position, location).min(scoring.distance_cap_km);
        let priority_score = stop.priority().score();
        // Larger deliveries improve (lower) this term.
        let efficiency_score = (10.0 - stop.bottles() as f64 * 0.125).max(0.0);
        let clustering_score =
            cluster_score(index, &feasible, pool, remaining_capacity, scoring);

        let total = distance_score * scoring.distance_weight
            + priority_score * scoring.priority_weight
            + efficiency_score * scoring.efficiency_weight
            + clustering_score * scoring.clustering_weight;

        // Strict comparison keeps ties on the first candidate encountered.
        if total < best_score {
            best_score = total;
            best_index = Some(index);
        }
    }

    best_index
}

/// Look-ahead estimate of how isolated a candidate is.
///
/// Counts feasible neighbors within the nearby radius whose demand still
/// fits after placing the target. Up to the 3 nearest contribute a proximity
/// bonus; a candidate with no such neighbor takes the full isolation penalty.
fn cluster_score<D: Delivery>(
    target_index: usize,
    feasible: &[usize],
    pool: &[&D],
    remaining_capacity: u32,
    scoring: &ScoringParams,
) -> f64 {
    let target = pool[target_index];
    let target_location = resolved_location(target);
    let capacity_after = remaining_capacity - target.bottles();

    let mut nearby: Vec<f64> = Vec::new();
    for &index in feasible {
        if index == target_index {
            continue;
        }
        let candidate = pool[index];
        if candidate.bottles() > capacity_after {
            continue;
        }
        let distance = haversine::distance_km(target_location, resolved_location(candidate));
        if distance <= scoring.nearby_radius_km {
            nearby.push(distance);
        }
    }

    if nearby.is_empty() {
        return scoring.isolation_penalty;
    }

    nearby.sort_by(f64::total_cmp);
    let bonus: f64 = nearby
        .iter()
        .take(3)
        .map(|distance| (scoring.isolation_penalty - distance).max(0.0))
        .sum();

    (scoring.isolation_penalty - bonus).max(0.0)
}

/// Round trip distance: depot to first stop, consecutive legs, last stop
/// back to the depot.
fn tour_distance(depot: (f64, f64), path: &[(f64, f64)]) -> f64 {
    let Some(first) = path.first() else {
        return 0.0;
    };

    let mut total = haversine::distance_km(depot, *first);
    for leg in path.windows(2) {
        total += haversine::distance_km(leg[0], leg[1]);
    }
    if let Some(last) = path.last() {
        total += haversine::distance_km(*last, depot);
    }

    total
}

/// Estimated tour duration in whole minutes: travel at the assumed average
/// speed plus fixed service time per stop.
fn tour_minutes(distance_km: f64, stop_count: usize, options: &PlanOptions) -> u32 {
    let travel = (distance_km / options.average_speed_kmh) * 60.0;
    travel as u32 + stop_count as u32 * options.service_minutes_per_stop
}

fn resolved_location<D: Delivery>(stop: &D) -> (f64, f64) {
    stop.location().unwrap_or((0.0, 0.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
