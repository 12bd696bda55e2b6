//! Exercise 5: Pre-sized Sequences
//!
//! Reserve room for 51 entries up front, append the 50 states in one call,
//! and confirm the store never had to grow.

use basics_chapter3::{Result, Sequence};

pub const STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// Reserved capacity for the state list.
pub const STATE_CAPACITY: usize = 51;

/// An empty sequence with room for every state, and the same after appending.
pub fn states() -> Result<(Sequence<String>, Sequence<String>)> {
    let empty = Sequence::<String>::make(0, STATE_CAPACITY)?;
    let filled = empty.append(STATES.iter().map(|s| s.to_string()));
    tracing::debug!(
        len = filled.len(),
        cap = filled.cap(),
        "appended states into reserved sequence"
    );
    Ok((empty, filled))
}

/// One row per state: value, type and position, tab separated.
pub fn state_rows(states: &Sequence<String>) -> Vec<String> {
    states
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{v}\t{}\t{i}", std::any::type_name::<String>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_fit_reserved_capacity() {
        let (empty, filled) = states().unwrap();
        assert_eq!((empty.len(), empty.cap()), (0, 51));
        assert_eq!((filled.len(), filled.cap()), (50, 51));
        assert!(filled.shares_storage(&empty));
    }

    #[test]
    fn test_state_rows() {
        let (_, filled) = states().unwrap();
        let rows = state_rows(&filled);
        assert_eq!(rows.len(), 50);
        assert!(rows[0].starts_with("Alabama\t"));
        assert!(rows[0].ends_with("String\t0"));
        assert!(rows[49].starts_with("Wyoming\t"));
    }
}
