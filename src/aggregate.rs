use crate::db::models::Reading;

/// Mean temperature and humidity over a set of readings.
///
/// An empty input has no mean, so it is its own variant instead of a
/// `0.0 / 0.0` NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregate {
    Empty,
    Computed {
        mean_temperature: f32,
        mean_humidity: f32,
        count: usize,
    },
}

impl Aggregate {
    /// Sums in slice order using `f32` accumulators.
    pub fn from_readings(readings: &[Reading]) -> Self {
        if readings.is_empty() {
            return Self::Empty;
        }

        let (sum_temperature, sum_humidity) = readings
            .iter()
            .fold((0.0_f32, 0.0_f32), |(t, h), r| (t + r.temperature, h + r.humidity));
        let n = readings.len() as f32;

        Self::Computed {
            mean_temperature: sum_temperature / n,
            mean_humidity: sum_humidity / n,
            count: readings.len(),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Computed { count, .. } => *count,
        }
    }

    pub fn mean_temperature(&self) -> Option<f32> {
        match self {
            Self::Empty => None,
            Self::Computed { mean_temperature, .. } => Some(*mean_temperature),
        }
    }

    pub fn mean_humidity(&self) -> Option<f32> {
        match self {
            Self::Empty => None,
            Self::Computed { mean_humidity, .. } => Some(*mean_humidity),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn reading(offset_secs: i64, temperature: f32, humidity: f32) -> Reading {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Reading::new(base + Duration::seconds(offset_secs), "kitchen", temperature, humidity)
    }

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() <= f32::EPSILON * a.abs().max(b.abs()).max(1.0) * 4.0
    }

    #[test]
    fn empty_input_is_empty_variant() {
        let agg = Aggregate::from_readings(&[]);
        assert_eq!(agg, Aggregate::Empty);
        assert_eq!(agg.count(), 0);
        assert!(agg.mean_temperature().is_none());
        assert!(agg.mean_humidity().is_none());
    }

    #[test]
    fn single_reading_means_are_its_own_values() {
        let agg = Aggregate::from_readings(&[reading(0, 19.3, 47.1)]);
        assert_eq!(
            agg,
            Aggregate::Computed {
                mean_temperature: 19.3,
                mean_humidity: 47.1,
                count: 1,
            }
        );
    }

    #[test]
    fn two_kitchen_readings() {
        let agg = Aggregate::from_readings(&[reading(0, 20.0, 50.0), reading(60, 22.0, 60.0)]);
        assert_eq!(agg.mean_temperature(), Some(21.0));
        assert_eq!(agg.mean_humidity(), Some(55.0));
        assert_eq!(agg.count(), 2);
    }

    #[test]
    fn means_match_sum_over_count() {
        let readings: Vec<Reading> = (0..50)
            .map(|i| reading(i, 15.0 + i as f32 * 0.25, 30.0 + (i % 7) as f32))
            .collect();

        let expected_t = readings.iter().map(|r| r.temperature).sum::<f32>() / 50.0;
        let expected_h = readings.iter().map(|r| r.humidity).sum::<f32>() / 50.0;

        let agg = Aggregate::from_readings(&readings);
        assert_eq!(agg.count(), 50);
        assert!(approx_eq(agg.mean_temperature().unwrap(), expected_t));
        assert!(approx_eq(agg.mean_humidity().unwrap(), expected_h));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let readings = vec![reading(0, 21.7, 40.3), reading(1, 18.9, 55.5), reading(2, 23.1, 61.2)];

        let a = Aggregate::from_readings(&readings);
        let b = Aggregate::from_readings(&readings);
        assert_eq!(
            a.mean_temperature().unwrap().to_bits(),
            b.mean_temperature().unwrap().to_bits()
        );
        assert_eq!(
            a.mean_humidity().unwrap().to_bits(),
            b.mean_humidity().unwrap().to_bits()
        );
    }

    #[test]
    fn permutation_does_not_change_mean_beyond_rounding() {
        let mut readings = vec![
            reading(0, 21.7, 40.3),
            reading(1, 18.9, 55.5),
            reading(2, 23.1, 61.2),
            reading(3, 0.1, 99.9),
            reading(4, -4.4, 12.0),
        ];
        let forward = Aggregate::from_readings(&readings);
        readings.reverse();
        let backward = Aggregate::from_readings(&readings);

        assert_eq!(forward.count(), backward.count());
        assert!(approx_eq(
            forward.mean_temperature().unwrap(),
            backward.mean_temperature().unwrap()
        ));
        assert!(approx_eq(
            forward.mean_humidity().unwrap(),
            backward.mean_humidity().unwrap()
        ));
    }
}
