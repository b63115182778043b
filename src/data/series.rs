use chrono::{Days, NaiveDate};
use rand::Rng;

/// Daily values starting at `start`.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub start: NaiveDate,
    pub values: Vec<f64>,
}

impl TimeSeries {
    /// Random walk around 100 with one standard-normal step per day,
    /// `start` and `end` both included.
    pub fn random_walk<R: Rng + ?Sized>(start: NaiveDate, end: NaiveDate, rng: &mut R) -> Self {
        let days = (end - start).num_days().max(-1) + 1;
        let mut level = 100.0;
        let values = (0..days)
            .map(|_| {
                level += standard_normal(rng);
                level
            })
            .collect();
        TimeSeries { start, values }
    }

    /// The dashboard's sample: every day of 2024.
    pub fn sample_2024<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default();
        Self::random_walk(start, end, rng)
    }

    /// Calendar date of a (possibly fractional) day offset, for axis labels.
    /// `None` outside the representable calendar range.
    pub fn date_at(&self, offset: f64) -> Option<NaiveDate> {
        offset_date(self.start, offset)
    }

    /// `[day offset, value]` pairs for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }
}

/// `start` shifted by `offset` days, rounded to the nearest day.
pub fn offset_date(start: NaiveDate, offset: f64) -> Option<NaiveDate> {
    let days = offset.round();
    if !days.is_finite() {
        return None;
    }
    if days >= 0.0 {
        start.checked_add_days(Days::new(days as u64))
    } else {
        start.checked_sub_days(Days::new(-days as u64))
    }
}

/// Box-Muller transform for a standard normal draw.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_covers_leap_year() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = TimeSeries::sample_2024(&mut rng);

        assert_eq!(series.values.len(), 366);
        assert_eq!(series.date_at(0.0), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(series.date_at(365.0), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(series.date_at(-1.0), NaiveDate::from_ymd_opt(2023, 12, 31));
        assert_eq!(series.date_at(1e18), None);
    }

    #[test]
    fn test_random_walk_is_seed_deterministic() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let a = TimeSeries::random_walk(start, end, &mut StdRng::seed_from_u64(1));
        let b = TimeSeries::random_walk(start, end, &mut StdRng::seed_from_u64(1));
        assert_eq!(a.values, b.values);
        assert_eq!(a.points().len(), 10);
        assert!(a.values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let s = TimeSeries::random_walk(start, end, &mut StdRng::seed_from_u64(1));
        assert!(s.values.is_empty());
    }
}
