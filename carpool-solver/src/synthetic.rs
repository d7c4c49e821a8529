//! Seeded synthetic instances for measuring search cost and for tests.
//!
//! Every generated trip can walk and drive, carries one passenger, has a
//! ten-seat vehicle and a random benefit in `[0, 100)`. Ride edges are added
//! for ordered pairs `(i, j)`, `i != j`, in row-major order until the edge
//! budget is spent. Trip ids are `"0"`, `"1"`, ...

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::{Trip, TripId, TripIndex, Trips};

const SEATS: i64 = 10;
const MAX_BENEFIT: f64 = 100.0;

/// Generate `num_trips` trips with up to `num_edges` ride edges.
pub fn generate(num_trips: usize, num_edges: usize, seed: u64) -> Trips {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut trips = Trips::new();

    for i in 0..num_trips {
        let id = TripId::parse(&i.to_string()).expect("decimal ids are valid");
        let benefit = rng.random_range(0.0..MAX_BENEFIT);
        let trip = Trip::new(id, true, true, 1, SEATS, benefit).expect("generated trip is valid");
        trips.push(trip).expect("generated ids are unique");
    }

    let pairs = (0..num_trips)
        .flat_map(|i| (0..num_trips).map(move |j| (i, j)))
        .filter(|(i, j)| i != j)
        .take(num_edges);
    for (i, j) in pairs {
        trips.add_sharing(TripIndex(i), TripIndex(j));
    }

    trips
}
