//! Deterministic seat map synthesis.
//!
//! The flights source only reports how many seats a flight has and how many
//! are still free. This module turns that summary into a concrete row-major
//! seat grid and marks exactly `total - remaining` seats as occupied. Which
//! seats are occupied looks random per flight but is fully reproducible: the
//! choice is driven by a PRNG seeded from a stable key (the flight id).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use skybook_shared::TicketSummary;

use crate::{CoreError, CoreResult};

/// Default layout width used by the booking service.
pub const DEFAULT_MAX_COLS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub occupied: bool,
}

pub type SeatGrid = Vec<Vec<Seat>>;

/// Snapshot produced by [`generate`]. `total` and `remaining` are the
/// normalized counts the grid was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatGridResult {
    pub grid: SeatGrid,
    pub rows: usize,
    pub cols: usize,
    pub total: usize,
    pub remaining: usize,
}

impl SeatGridResult {
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.grid.iter().flatten()
    }

    pub fn seat_count(&self) -> usize {
        self.seats().count()
    }

    pub fn occupied_count(&self) -> usize {
        self.seats().filter(|s| s.occupied).count()
    }

    pub fn find(&self, seat_id: &str) -> Option<&Seat> {
        self.seats().find(|s| s.id == seat_id)
    }

    /// Returns a copy of the grid with `picked` seats marked occupied on top
    /// of the generated occupancy. The generated layout is left untouched.
    pub fn overlay<S: AsRef<str>>(&self, picked: &[S]) -> SeatGrid {
        let picked: HashSet<&str> = picked.iter().map(AsRef::as_ref).collect();
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|seat| Seat {
                        id: seat.id.clone(),
                        occupied: seat.occupied || picked.contains(seat.id.as_str()),
                    })
                    .collect()
            })
            .collect()
    }

    /// A seat can be picked when it exists and is free after the overlay.
    pub fn check_pickable<S: AsRef<str>>(
        &self,
        flight_id: &str,
        seat_id: &str,
        picked: &[S],
    ) -> CoreResult<()> {
        let seat = self.find(seat_id).ok_or_else(|| CoreError::InvalidSeat {
            flight_id: flight_id.to_string(),
            seat: seat_id.to_string(),
        })?;
        if seat.occupied || picked.iter().any(|p| p.as_ref() == seat_id) {
            return Err(CoreError::SeatUnavailable {
                flight_id: flight_id.to_string(),
                seat: seat_id.to_string(),
            });
        }
        Ok(())
    }
}

/// Builds a seat grid for `tickets` at most `max_cols` wide, seeded by
/// `seed_key`. Never fails: counts are clamped instead of rejected.
pub fn generate(tickets: Option<&TicketSummary>, max_cols: usize, seed_key: &str) -> SeatGridResult {
    let summary = tickets.copied().unwrap_or_default();
    let total = summary.clamped_total() as usize;
    let remaining = summary.clamped_remaining() as usize;

    let total_or_one = total.max(1);
    let cols = max_cols.min(total_or_one).max(1);
    let rows = total_or_one.div_ceil(cols).max(1);

    let mut grid: SeatGrid = Vec::with_capacity(rows);
    let mut count = 0;
    for r in 0..rows {
        let mut row = Vec::with_capacity(cols);
        for c in 0..cols {
            if count >= total {
                break;
            }
            row.push(Seat {
                id: format!("{}{}", r + 1, column_label(c)),
                occupied: false,
            });
            count += 1;
        }
        grid.push(row);
    }

    let need_occupied = total - remaining;
    let mut rng = Mulberry32::new(hash_seed(seed_key));
    let mut order: Vec<usize> = (0..count).collect();
    shuffle(&mut order, &mut rng);
    let occupied: HashSet<usize> = order.into_iter().take(need_occupied.min(count)).collect();

    for (idx, seat) in grid.iter_mut().flatten().enumerate() {
        if occupied.contains(&idx) {
            seat.occupied = true;
        }
    }

    tracing::trace!(seed_key, total, remaining, rows, cols, "Seat map generated");

    SeatGridResult {
        grid,
        rows,
        cols,
        total,
        remaining,
    }
}

/// Spreadsheet-style column label: 0 -> A, 25 -> Z, 26 -> AA.
pub fn column_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// 32-bit FNV-1a over the UTF-16 code units of `key`.
pub fn hash_seed(key: &str) -> u32 {
    key.encode_utf16().fold(2_166_136_261u32, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(16_777_619)
    })
}

/// Mulberry32 generator yielding floats in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct Mulberry32(u32);

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(0x6D2B_79F5);
        let t = self.0;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        r ^ (r >> 14)
    }

    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Fisher-Yates, walking from the back.
fn shuffle<T>(items: &mut [T], rng: &mut Mulberry32) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_f64() * (i + 1) as f64) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied_ids(result: &SeatGridResult) -> Vec<String> {
        result
            .seats()
            .filter(|s| s.occupied)
            .map(|s| s.id.clone())
            .collect()
    }

    #[test]
    fn test_creates_total_seats_and_marks_occupied() {
        let res = generate(Some(&TicketSummary::new(10, 4)), 7, "FL001");
        assert_eq!(res.seat_count(), 10);
        assert_eq!(res.occupied_count(), 6);
        assert_eq!(res.rows, 2);
        assert_eq!(res.cols, 7);
        assert_eq!(res.grid[0].len(), 7);
        assert_eq!(res.grid[1].len(), 3);
        assert_eq!(res.grid[1][2].id, "2C");
    }

    #[test]
    fn test_same_key_gives_same_layout() {
        let a = generate(Some(&TicketSummary::new(8, 4)), 7, "FLX");
        let b = generate(Some(&TicketSummary::new(8, 4)), 7, "FLX");
        let ids_a: Vec<_> = a.seats().map(|s| s.id.clone()).collect();
        let ids_b: Vec<_> = b.seats().map(|s| s.id.clone()).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(occupied_ids(&a), occupied_ids(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_occupancy_is_stable_across_platforms() {
        // Reference sequences; any change here breaks seat maps users already saw.
        let res = generate(Some(&TicketSummary::new(10, 4)), 7, "FL001");
        assert_eq!(occupied_ids(&res), ["1A", "1B", "1C", "1G", "2A", "2B"]);

        let res = generate(Some(&TicketSummary::new(8, 4)), 7, "FLX");
        assert_eq!(occupied_ids(&res), ["1D", "1E", "1G", "2A"]);
    }

    #[test]
    fn test_different_keys_pick_different_seats() {
        let a = generate(Some(&TicketSummary::new(10, 4)), 7, "FL001");
        let b = generate(Some(&TicketSummary::new(10, 4)), 7, "FL002");
        assert_eq!(a.occupied_count(), b.occupied_count());
        assert_ne!(occupied_ids(&a), occupied_ids(&b));
    }

    #[test]
    fn test_boundaries() {
        let full = generate(Some(&TicketSummary::new(12, 0)), 7, "FULL");
        assert!(full.seats().all(|s| s.occupied));

        let empty = generate(Some(&TicketSummary::new(12, 12)), 7, "EMPTY");
        assert!(empty.seats().all(|s| !s.occupied));

        let none = generate(Some(&TicketSummary::new(0, 5)), 7, "ZERO");
        assert_eq!(none.seat_count(), 0);
        assert_eq!(none.rows, 1);
        assert_eq!(none.cols, 1);
        assert_eq!(none.remaining, 0);
    }

    #[test]
    fn test_missing_and_negative_counts_are_clamped() {
        let missing = generate(None, 7, "FL001");
        assert_eq!(missing.seat_count(), 0);
        assert_eq!(missing.occupied_count(), 0);

        let no_remaining = TicketSummary {
            total: Some(9),
            remaining: None,
        };
        let res = generate(Some(&no_remaining), 7, "FL001");
        assert_eq!(res.seat_count(), 9);
        assert_eq!(res.occupied_count(), 0);

        let negative = generate(Some(&TicketSummary::new(-3, -1)), 7, "FL001");
        assert_eq!(negative.seat_count(), 0);

        let overflow = generate(Some(&TicketSummary::new(6, 99)), 7, "FL001");
        assert_eq!(overflow.remaining, 6);
        assert_eq!(overflow.occupied_count(), 0);
    }

    #[test]
    fn test_column_clamp() {
        assert_eq!(generate(Some(&TicketSummary::new(5, 5)), 7, "A").cols, 5);
        assert_eq!(generate(Some(&TicketSummary::new(30, 5)), 7, "A").cols, 7);
        assert_eq!(generate(Some(&TicketSummary::new(30, 5)), 7, "A").rows, 5);
        assert_eq!(generate(Some(&TicketSummary::new(3, 1)), 0, "A").cols, 1);
    }

    #[test]
    fn test_occupied_count_for_every_remaining() {
        for total in 0..=30i64 {
            for remaining in 0..=total {
                let res = generate(Some(&TicketSummary::new(total, remaining)), 7, "SWEEP");
                assert_eq!(res.seat_count() as i64, total);
                assert_eq!(res.occupied_count() as i64, total - remaining);
            }
        }
    }

    #[test]
    fn test_column_labels() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(25), "Z");
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(27), "AB");
        assert_eq!(column_label(701), "ZZ");
        assert_eq!(column_label(702), "AAA");

        let wide = generate(Some(&TicketSummary::new(300, 300)), 30, "WIDE");
        assert_eq!(wide.grid[9][27].id, "10AB");
    }

    #[test]
    fn test_hash_seed() {
        assert_eq!(hash_seed(""), 2_166_136_261);
        assert_eq!(hash_seed("FL001"), 106_635_458);
        assert_eq!(hash_seed("é✈"), 1_640_466_596);
    }

    #[test]
    fn test_overlay_marks_picked_without_mutating() {
        let res = generate(Some(&TicketSummary::new(10, 10)), 7, "FL001");
        let grid = res.overlay(&["1A", "2C"]);
        assert!(grid[0][0].occupied);
        assert!(grid[1][2].occupied);
        assert!(!grid[0][1].occupied);
        assert_eq!(res.occupied_count(), 0);
    }

    #[test]
    fn test_check_pickable() {
        let res = generate(Some(&TicketSummary::new(10, 4)), 7, "FL001");
        let picked = vec!["1D".to_string()];

        assert!(res.check_pickable("FL001", "1E", &picked).is_ok());
        assert!(matches!(
            res.check_pickable("FL001", "1A", &picked),
            Err(CoreError::SeatUnavailable { .. })
        ));
        assert!(matches!(
            res.check_pickable("FL001", "1D", &picked),
            Err(CoreError::SeatUnavailable { .. })
        ));
        assert!(matches!(
            res.check_pickable("FL001", "2D", &picked),
            Err(CoreError::InvalidSeat { .. })
        ));
    }
}
