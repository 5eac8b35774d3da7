//! Conversion from wall-clock time to hand rotations

use chrono::{NaiveTime, Timelike};

/// Hand rotations in degrees, clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandRotations {
    pub hours: f64,
    pub minutes: f64,
}

impl HandRotations {
    /// Rotations for `time`; the hour hand moves continuously with the minutes,
    /// the minute hand with the seconds
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        let seconds = time.second() as f64;
        let minutes = time.minute() as f64 + seconds / 60.0;
        let hours = (time.hour() % 12) as f64 + minutes / 60.0;

        Self {
            hours: hours * 30.0,
            minutes: minutes * 6.0,
        }
    }
}

/// Parse `HH:MM` or `HH:MM:SS`
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("Expected HH:MM or HH:MM:SS, got {}: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotations(h: u32, m: u32, s: u32) -> HandRotations {
        HandRotations::from_time(&NaiveTime::from_hms_opt(h, m, s).unwrap())
    }

    #[test]
    fn test_rotations_on_the_hour() {
        assert_eq!(rotations(3, 0, 0), HandRotations { hours: 90.0, minutes: 0.0 });
        assert_eq!(rotations(12, 0, 0), HandRotations { hours: 0.0, minutes: 0.0 });
        assert_eq!(rotations(15, 0, 0), HandRotations { hours: 90.0, minutes: 0.0 });
    }

    #[test]
    fn test_rotations_are_continuous() {
        assert_eq!(rotations(6, 30, 0), HandRotations { hours: 195.0, minutes: 180.0 });
        assert_eq!(rotations(0, 0, 30).minutes, 3.0);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("10:08").unwrap(), NaiveTime::from_hms_opt(10, 8, 0).unwrap());
        assert_eq!(
            parse_time("23:59:30").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 30).unwrap()
        );
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }
}
