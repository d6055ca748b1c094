use serde::{Deserialize, Serialize};
use skybook_shared::{Flight, TicketSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSort {
    PriceAsc,
    PriceDesc,
}

impl PriceSort {
    /// Unknown values mean "keep source order".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "price_asc" => Some(Self::PriceAsc),
            "price_desc" => Some(Self::PriceDesc),
            _ => None,
        }
    }
}

/// Filter and ordering for the flights list, as sent in the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightQuery {
    pub airline: Option<String>,
    pub sort: Option<String>,
}

impl FlightQuery {
    pub fn apply(&self, flights: &[Flight]) -> Vec<Flight> {
        let airline = self.airline.as_deref().filter(|a| !a.is_empty());
        let mut list: Vec<Flight> = flights
            .iter()
            .filter(|f| airline.map_or(true, |a| f.airline == a))
            .cloned()
            .collect();

        // sort_by is stable, equal prices keep source order
        match self.sort.as_deref().and_then(PriceSort::parse) {
            Some(PriceSort::PriceAsc) => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Some(PriceSort::PriceDesc) => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
            None => {}
        }
        list
    }
}

/// Distinct, sorted airline names for the filter drop-down.
pub fn airlines(flights: &[Flight]) -> Vec<String> {
    let mut names: Vec<String> = flights
        .iter()
        .filter(|f| !f.airline.is_empty())
        .map(|f| f.airline.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Free seats left once the locally picked ones are taken out.
pub fn remaining_after_picks(tickets: &TicketSummary, picked: usize) -> i64 {
    (tickets.clamped_remaining() - picked as i64).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: &str, airline: &str, price: f64) -> Flight {
        Flight {
            id: id.to_string(),
            airline: airline.to_string(),
            from: "Kyiv".to_string(),
            to: "Lisbon".to_string(),
            departure_time: None,
            arrival_time: None,
            price,
            terminal: None,
            gate: None,
            tickets: None,
        }
    }

    fn ids(list: &[Flight]) -> Vec<&str> {
        list.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_filter_and_sort() {
        let flights = vec![
            flight("A", "SkyUp", 300.0),
            flight("B", "Wizz", 120.0),
            flight("C", "SkyUp", 90.0),
            flight("D", "SkyUp", 300.0),
        ];

        let all = FlightQuery::default().apply(&flights);
        assert_eq!(ids(&all), ["A", "B", "C", "D"]);

        let q = FlightQuery { airline: Some("SkyUp".into()), sort: Some("price_asc".into()) };
        assert_eq!(ids(&q.apply(&flights)), ["C", "A", "D"]);

        let q = FlightQuery { airline: Some(String::new()), sort: Some("price_desc".into()) };
        assert_eq!(ids(&q.apply(&flights)), ["A", "D", "B", "C"]);

        let q = FlightQuery { airline: None, sort: Some("cheapest".into()) };
        assert_eq!(ids(&q.apply(&flights)), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_airlines_are_sorted_and_unique() {
        let flights = vec![
            flight("A", "Wizz", 1.0),
            flight("B", "SkyUp", 1.0),
            flight("C", "", 1.0),
            flight("D", "Wizz", 1.0),
        ];
        assert_eq!(airlines(&flights), vec!["SkyUp", "Wizz"]);
    }

    #[test]
    fn test_remaining_after_picks() {
        assert_eq!(remaining_after_picks(&TicketSummary::new(10, 4), 1), 3);
        assert_eq!(remaining_after_picks(&TicketSummary::new(10, 1), 3), 0);
        let no_remaining = TicketSummary { total: Some(8), remaining: None };
        assert_eq!(remaining_after_picks(&no_remaining, 2), 6);
        assert_eq!(remaining_after_picks(&TicketSummary::new(6, 99), 0), 6);
        assert_eq!(remaining_after_picks(&TicketSummary::new(6, 99), 2), 4);
        assert_eq!(remaining_after_picks(&TicketSummary::new(-3, 5), 0), 0);
    }
}
