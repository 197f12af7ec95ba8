//! Clock

use jiff::Zoned;
use mockall::automock;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the human-readable timestamps stamped on records.
///
/// The text is opaque: nothing parses it back.
#[automock]
pub trait Clock: Send + Sync {
    /// Returns the current moment as display text.
    fn now(&self) -> String;
}

/// Wall clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Zoned::now().strftime(DISPLAY_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_renders_date_and_time() {
        let now = SystemClock.now();

        assert_eq!(now.len(), "2024-01-01 00:00:00".len(), "got {now}");
        assert!(now.contains(' '));
    }
}
