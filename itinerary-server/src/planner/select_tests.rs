//! Unit and property tests for category mix selection and full planning.

use super::*;
use crate::domain::{Category, Coordinate, Itinerary, PointOfInterest, Rating, TransportMode};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashSet;

/// Degrees of latitude (or longitude on the equator) per kilometer.
const DEG_PER_KM: f64 = 1.0 / 111.194_93;

fn nine_am() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

fn origin() -> Coordinate {
    coord(0.0, 0.0)
}

/// A place `km_north` kilometers north of the origin.
fn poi_north(id: &str, category: Category, rating: f64, km_north: f64) -> PointOfInterest {
    poi_at(id, category, rating, km_north * DEG_PER_KM, 0.0)
}

fn poi_at(id: &str, category: Category, rating: f64, lat: f64, lon: f64) -> PointOfInterest {
    PointOfInterest::new(id, format!("Place {id}"), coord(lat, lon), category)
        .unwrap()
        .with_rating(Rating::new(rating).unwrap())
}

fn select_ids(
    candidates: &[PointOfInterest],
    start: Coordinate,
    budget: Duration,
    mode: TransportMode,
) -> Vec<String> {
    let (durations, travel) = (DurationEstimator::default(), TravelTimeEstimator::default());
    CategoryMixSelector::new(&durations, &travel, 0.5)
        .select(candidates, start, budget, mode)
        .unwrap()
        .iter()
        .map(|p| p.id().to_string())
        .collect()
}

fn plan(
    candidates: Vec<PointOfInterest>,
    start: Coordinate,
    budget: Duration,
    mode: TransportMode,
) -> Result<Itinerary, PlanError> {
    let request = PlanRequest::new(candidates, start, budget, mode, nine_am());
    Planner::default().plan(&request)
}

#[test]
fn three_categories_one_km_apart() {
    // Equilateral triangle with 1 km sides; start on the cafe
    let d = DEG_PER_KM;
    let restaurant = poi_at("restaurant", Category::Restaurant, 4.5, 0.0, d);
    let museum = poi_at("museum", Category::Museum, 4.0, d * 3f64.sqrt() / 2.0, d / 2.0);
    let cafe = poi_at("cafe", Category::Cafe, 4.8, 0.0, 0.0);

    let itinerary = plan(
        vec![restaurant, museum, cafe],
        origin(),
        Duration::hours(6),
        TransportMode::Walking,
    )
    .unwrap();

    assert_eq!(itinerary.len(), 3);

    let first = &itinerary.stops()[0];
    assert_eq!(first.poi().id(), "cafe");
    assert_eq!(first.distance_from_previous_m(), 0.0);
    assert_eq!(first.arrival(), nine_am());

    // 45 + 90 + 120 minutes of visits plus two ~19.5 minute walks
    let visits = Duration::minutes(255);
    assert!(itinerary.total_duration() > visits);
    assert!(itinerary.total_duration() <= Duration::hours(6));
    assert_eq!(
        itinerary.total_duration(),
        visits + itinerary.total_travel_time()
    );
    assert!((itinerary.total_distance_m() - 2000.0).abs() < 20.0);
}

#[test]
fn nothing_fits_gives_empty_itinerary() {
    let zoo = poi_north("zoo", Category::Zoo, 4.0, 0.0);

    let itinerary = plan(
        vec![zoo],
        origin(),
        Duration::hours(1),
        TransportMode::Walking,
    )
    .unwrap();

    assert!(itinerary.is_empty());
    assert_eq!(itinerary.total_duration(), Duration::zero());
    assert_eq!(itinerary.total_distance_m(), 0.0);
}

#[test]
fn zero_budget_is_rejected() {
    let cafe = poi_north("cafe", Category::Cafe, 4.0, 0.0);

    let err = plan(vec![cafe], origin(), Duration::zero(), TransportMode::Walking).unwrap_err();
    assert_eq!(err, PlanError::InvalidBudget { seconds: 0 });
    assert_eq!(err.to_string(), "invalid budget: 0s (must be positive)");
}

#[test]
fn negative_budget_is_rejected() {
    let err = plan(vec![], origin(), Duration::minutes(-5), TransportMode::Driving).unwrap_err();
    assert_eq!(err, PlanError::InvalidBudget { seconds: -300 });
}

#[test]
fn empty_candidates_give_empty_itinerary() {
    let itinerary = plan(vec![], origin(), Duration::hours(4), TransportMode::Cycling).unwrap();
    assert!(itinerary.is_empty());
}

#[test]
fn lower_rated_same_category_is_dropped() {
    let weak = poi_north("weak", Category::Museum, 3.0, 0.2);
    let strong = poi_north("strong", Category::Museum, 4.9, 0.3);

    let ids = select_ids(
        &[weak, strong],
        origin(),
        Duration::hours(8),
        TransportMode::Walking,
    );

    assert_eq!(ids, ["strong"]);
}

#[test]
fn near_equal_ratings_prefer_closer() {
    let far = poi_north("far", Category::Restaurant, 4.0, 5.0);
    let near = poi_north("near", Category::Restaurant, 4.2, 1.0);

    let ids = select_ids(
        &[far, near],
        origin(),
        Duration::hours(8),
        TransportMode::Walking,
    );
    assert_eq!(ids, ["near"]);

    // Proximity wins even when the closer place is the slightly worse one
    let far_better = poi_north("far", Category::Restaurant, 4.2, 5.0);
    let near_worse = poi_north("near", Category::Restaurant, 4.0, 1.0);
    let ids = select_ids(
        &[far_better, near_worse],
        origin(),
        Duration::hours(8),
        TransportMode::Walking,
    );
    assert_eq!(ids, ["near"]);
}

#[test]
fn clear_rating_gap_beats_proximity() {
    let near = poi_north("near", Category::Restaurant, 3.0, 1.0);
    let far = poi_north("far", Category::Restaurant, 4.5, 5.0);

    let ids = select_ids(
        &[near, far],
        origin(),
        Duration::hours(8),
        TransportMode::Walking,
    );
    assert_eq!(ids, ["far"]);
}

#[test]
fn skipped_category_refilled_once() {
    // The best park is 10 km away and cannot fit in two hours on foot,
    // so the category stays open and the nearest decent park takes the slot.
    let best = poi_north("best", Category::Park, 5.0, 10.0);
    let close = poi_north("close", Category::Park, 3.0, 0.5);
    let closer_worse = poi_north("closer", Category::Park, 2.9, 0.6);

    let ids = select_ids(
        &[best, close, closer_worse],
        origin(),
        Duration::hours(2),
        TransportMode::Walking,
    );
    assert_eq!(ids, ["close"]);
}

#[test]
fn route_is_resequenced_after_acceptance() {
    // Museum appears first but is further away than the cafe
    let museum = poi_north("museum", Category::Museum, 4.0, 2.0);
    let cafe = poi_north("cafe", Category::Cafe, 4.0, 0.5);

    let ids = select_ids(
        &[museum, cafe],
        origin(),
        Duration::hours(5),
        TransportMode::Walking,
    );
    assert_eq!(ids, ["cafe", "museum"]);
}

#[test]
fn exact_fit_is_accepted() {
    let cafe = poi_north("cafe", Category::Cafe, 4.0, 0.0);

    let ids = select_ids(
        std::slice::from_ref(&cafe),
        origin(),
        Duration::minutes(45),
        TransportMode::Walking,
    );
    assert_eq!(ids, ["cafe"]);

    let ids = select_ids(
        &[cafe],
        origin(),
        Duration::minutes(44),
        TransportMode::Walking,
    );
    assert!(ids.is_empty());
}

#[test]
fn fill_prefers_rating_minus_distance() {
    // The best park and the best landmark are out of reach, so both
    // categories stay open after the cafe. Spare time fits either runner-up
    // but not both: landmark scores 4.0 - 0.4 km = 3.6, park 4.4 - 2.0 km = 2.4.
    let best_park = poi_north("best_park", Category::Park, 5.0, 20.0);
    let best_landmark = poi_north("best_landmark", Category::Landmark, 5.0, 20.0);
    let cafe = poi_north("cafe", Category::Cafe, 4.0, 0.0);
    let park = poi_north("park", Category::Park, 4.4, 2.0);
    let landmark = poi_north("landmark", Category::Landmark, 4.0, 0.4);

    // 45 minute cafe leaves 6000 s: landmark needs 468 + 1800 s,
    // the park alone would need 2340 + 3600 s
    let ids = select_ids(
        &[best_park, best_landmark, cafe, park, landmark],
        origin(),
        Duration::seconds(2700 + 6000),
        TransportMode::Walking,
    );

    assert_eq!(ids, ["cafe", "landmark"]);
}

#[test]
fn overrunning_nearest_order_keeps_construction_order() {
    // Landmark behind the start, park and cafe ahead. Visiting in input
    // order walks 6 km; nearest-first goes park, cafe, then all the way
    // back to the landmark, 7.5 km, which no longer fits.
    let landmark = poi_north("landmark", Category::Landmark, 4.0, -1.5);
    let park = poi_north("park", Category::Park, 4.0, 1.0);
    let cafe = poi_north("cafe", Category::Cafe, 4.0, 3.0);
    let budget = Duration::seconds(15_500);

    let candidates = vec![landmark, park, cafe];
    let ids = select_ids(&candidates, origin(), budget, TransportMode::Walking);
    assert_eq!(ids, ["landmark", "park", "cafe"]);

    // 8100 s of visits plus 6 km at 1170 s/km
    let itinerary = plan(candidates, origin(), budget, TransportMode::Walking).unwrap();
    let total = itinerary.total_duration().num_seconds();
    assert!((total - 15_120).abs() <= 2, "got {total}");
    assert!(itinerary.total_duration() <= budget);
}

#[test]
fn unrated_places_count_as_zero() {
    let unrated = PointOfInterest::new("unrated", "Unrated", origin(), Category::Shopping).unwrap();
    let rated = poi_north("rated", Category::Shopping, 1.0, 3.0);

    let ids = select_ids(
        &[unrated, rated],
        origin(),
        Duration::hours(6),
        TransportMode::Driving,
    );
    assert_eq!(ids, ["rated"]);
}

#[test]
fn itinerary_is_deterministic() {
    let candidates: Vec<PointOfInterest> = (0..12)
        .map(|i| {
            let category = Category::ALL[i % Category::ALL.len()];
            poi_at(
                &format!("p{i}"),
                category,
                (i % 5) as f64,
                (i as f64 * 0.37).sin() * 0.02,
                (i as f64 * 0.91).cos() * 0.02,
            )
        })
        .collect();

    let a = plan(
        candidates.clone(),
        origin(),
        Duration::hours(7),
        TransportMode::PublicTransport,
    )
    .unwrap();
    let b = plan(
        candidates,
        origin(),
        Duration::hours(7),
        TransportMode::PublicTransport,
    )
    .unwrap();

    assert_eq!(a, b);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn candidate_strategy() -> impl Strategy<Value = Vec<PointOfInterest>> {
        prop::collection::vec(
            (
                prop::sample::select(Category::ALL.to_vec()),
                prop::option::of(0.0f64..=5.0),
                -0.05f64..0.05,
                -0.05f64..0.05,
            ),
            0..30,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (category, rating, lat, lon))| {
                    let poi = PointOfInterest::new(
                        format!("p{i}"),
                        format!("Place {i}"),
                        Coordinate::new(lat, lon).unwrap(),
                        category,
                    )
                    .unwrap();
                    match rating {
                        Some(r) => poi.with_rating(Rating::new(r).unwrap()),
                        None => poi,
                    }
                })
                .collect()
        })
    }

    fn mode_strategy() -> impl Strategy<Value = TransportMode> {
        prop::sample::select(TransportMode::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn budget_respected(
            candidates in candidate_strategy(),
            budget_mins in 1i64..720,
            mode in mode_strategy(),
        ) {
            let budget = Duration::minutes(budget_mins);
            let itinerary = plan(candidates, origin(), budget, mode).unwrap();
            prop_assert!(
                itinerary.total_duration() <= budget,
                "{:?} exceeds {:?}",
                itinerary.total_duration(),
                budget
            );
        }

        #[test]
        fn categories_unique(
            candidates in candidate_strategy(),
            budget_mins in 1i64..720,
            mode in mode_strategy(),
        ) {
            let budget = Duration::minutes(budget_mins);
            let itinerary = plan(candidates, origin(), budget, mode).unwrap();
            let mut seen = HashSet::new();
            for stop in itinerary.stops() {
                let category = stop.poi().category();
                prop_assert!(seen.insert(category), "duplicate {}", category);
            }
        }

        #[test]
        fn timeline_consistent(
            candidates in candidate_strategy(),
            budget_mins in 1i64..720,
            mode in mode_strategy(),
        ) {
            let budget = Duration::minutes(budget_mins);
            let itinerary = plan(candidates, origin(), budget, mode).unwrap();
            let durations = DurationEstimator::default();
            let stops = itinerary.stops();

            for (idx, stop) in stops.iter().enumerate() {
                prop_assert_eq!(stop.order(), idx + 1);
                prop_assert_eq!(
                    stop.departure(),
                    stop.arrival() + durations.visit_duration(stop.poi().category())
                );
            }
            if let Some(first) = stops.first() {
                prop_assert_eq!(first.arrival(), nine_am() + first.travel_from_previous());
            }
            for pair in stops.windows(2) {
                prop_assert_eq!(
                    pair[1].arrival(),
                    pair[0].departure() + pair[1].travel_from_previous()
                );
            }

            let distance: f64 = stops.iter().map(|s| s.distance_from_previous_m()).sum();
            prop_assert!((itinerary.total_distance_m() - distance).abs() < 1e-6);
        }

        #[test]
        fn selection_is_subset_of_candidates(
            candidates in candidate_strategy(),
            budget_mins in 1i64..720,
            mode in mode_strategy(),
        ) {
            let ids: HashSet<String> = candidates.iter().map(|p| p.id().to_string()).collect();
            let budget = Duration::minutes(budget_mins);
            let itinerary = plan(candidates, origin(), budget, mode).unwrap();
            for stop in itinerary.stops() {
                prop_assert!(ids.contains(stop.poi().id()));
            }
        }

        #[test]
        fn deterministic(
            candidates in candidate_strategy(),
            budget_mins in 1i64..720,
            mode in mode_strategy(),
        ) {
            let budget = Duration::minutes(budget_mins);
            let a = plan(candidates.clone(), origin(), budget, mode).unwrap();
            let b = plan(candidates, origin(), budget, mode).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
