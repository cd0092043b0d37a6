//! Seconds-denominated sleep

use std::thread;
use std::time::Duration;

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Negative requests have no duration.
#[must_use]
pub fn duration_for(seconds: i32) -> Option<Duration> {
    let seconds = u64::try_from(seconds).ok()?;
    Some(Duration::from_micros(seconds * MICROS_PER_SECOND))
}

/// Blocks the calling thread for at least `seconds`. Other threads keep running.
pub fn delay(seconds: i32) {
    let Some(duration) = duration_for(seconds) else {
        tracing::debug!(seconds, "negative delay ignored");
        return;
    };
    tracing::trace!(seconds, "sleeping");
    thread::sleep(duration);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn converts_whole_seconds() {
        assert_eq!(duration_for(0), Some(Duration::ZERO));
        assert_eq!(duration_for(3), Some(Duration::from_secs(3)));
        assert_eq!(duration_for(i32::MAX), Some(Duration::from_secs(i32::MAX as u64)));
    }

    #[test]
    fn negative_is_none() {
        assert_eq!(duration_for(-1), None);
        assert_eq!(duration_for(i32::MIN), None);
    }

    #[test]
    fn one_second_lower_bound() {
        let start = Instant::now();
        delay(1);
        assert!(start.elapsed() >= Duration::from_millis(950));
    }

    #[test]
    fn zero_and_negative_return_promptly() {
        let start = Instant::now();
        delay(0);
        delay(-3);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn blocks_only_the_caller() {
        let sleeper = thread::spawn(|| delay(1));
        let start = Instant::now();
        let mut spins = 0u32;
        while !sleeper.is_finished() && start.elapsed() < Duration::from_millis(200) {
            spins += 1;
            thread::yield_now();
        }
        assert!(spins > 0);
        assert!(!sleeper.is_finished());
        sleeper.join().unwrap();
    }
}
