//! Section 2.3: Select - First Answer Wins
//!
//! Two producers each sleep for a while and then send one value on their own
//! one-shot channel. `tokio::select!` waits on both receivers and continues
//! with whichever answers first. The slower producer is simply abandoned: its
//! receiver is dropped and its late send fails quietly.
//!
//! ```text
//!   producer 1 ── sleep(d1) ── send 41 ──▶ rx1 ─┐
//!                                               ├─ select! ─▶ first value
//!   producer 2 ── sleep(d2) ── send 42 ──▶ rx2 ─┘
//! ```

use std::fmt;
use std::time::Duration;

use basics_common::DemoRng;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::time::sleep;

/// Value sent by the first producer.
pub const FIRST_VALUE: i32 = 41;
/// Value sent by the second producer.
pub const SECOND_VALUE: i32 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RaceError {
    #[error("both producers stopped without sending a value")]
    ProducersGone,
}

/// Which channel answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    First,
    Second,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::First => f.write_str("ch1"),
            Channel::Second => f.write_str("ch2"),
        }
    }
}

/// The value that won the race and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceOutcome {
    pub channel: Channel,
    pub value: i32,
}

impl fmt::Display for RaceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Received {} from {}", self.value, self.channel)
    }
}

fn spawn_producer(delay: Duration, value: i32) -> oneshot::Receiver<i32> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        sleep(delay).await;
        // The receiver is gone once the other producer has won.
        let _ = tx.send(value);
    });
    rx
}

/// Races two producers delayed by `d1` and `d2` and returns the first answer.
///
/// Must be called from within a Tokio runtime.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use basics_chapter2::section_2_3::{Channel, race};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let outcome = race(Duration::from_millis(1), Duration::from_millis(500))
///     .await
///     .unwrap();
/// assert_eq!(outcome.channel, Channel::First);
/// assert_eq!(outcome.to_string(), "Received 41 from ch1");
/// # }
/// ```
pub async fn race(d1: Duration, d2: Duration) -> Result<RaceOutcome, RaceError> {
    tracing::debug!(?d1, ?d2, "starting producers");
    let rx1 = spawn_producer(d1, FIRST_VALUE);
    let rx2 = spawn_producer(d2, SECOND_VALUE);

    tokio::select! {
        Ok(value) = rx1 => Ok(RaceOutcome { channel: Channel::First, value }),
        Ok(value) = rx2 => Ok(RaceOutcome { channel: Channel::Second, value }),
        else => Err(RaceError::ProducersGone),
    }
}

/// Draws both delays uniformly from `[0, max)`, at millisecond resolution.
pub fn random_delays(rng: &mut DemoRng, max: Duration) -> (Duration, Duration) {
    let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
    (
        Duration::from_millis(rng.int_n(max_ms)),
        Duration::from_millis(rng.int_n(max_ms)),
    )
}

/// Races two producers with random delays below `max`.
pub async fn race_random(rng: &mut DemoRng, max: Duration) -> Result<RaceOutcome, RaceError> {
    let (d1, d2) = random_delays(rng, max);
    race(d1, d2).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_faster_first_producer_wins() {
        let outcome = race(Duration::from_millis(5), Duration::from_millis(300))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            RaceOutcome {
                channel: Channel::First,
                value: FIRST_VALUE
            }
        );
    }

    #[tokio::test]
    async fn test_faster_second_producer_wins() {
        let outcome = race(Duration::from_millis(300), Duration::from_millis(5))
            .await
            .unwrap();
        assert_eq!(outcome.channel, Channel::Second);
        assert_eq!(outcome.to_string(), "Received 42 from ch2");
    }

    #[tokio::test]
    async fn test_random_race_returns_one_of_the_values() {
        let mut rng = DemoRng::seeded(5);
        let outcome = race_random(&mut rng, Duration::from_millis(20))
            .await
            .unwrap();
        assert!(outcome.value == FIRST_VALUE || outcome.value == SECOND_VALUE);
    }

    #[test]
    fn test_random_delays_within_bound() {
        let mut rng = DemoRng::seeded(1);
        for _ in 0..100 {
            let (d1, d2) = random_delays(&mut rng, Duration::from_millis(250));
            assert!(d1 < Duration::from_millis(250));
            assert!(d2 < Duration::from_millis(250));
        }
    }
}
