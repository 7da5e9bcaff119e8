//! Synthetic record generator. Randomness is injected so runs can be
//! reproduced from a seed.

use std::ops::Range;

use chrono::{Duration, NaiveDateTime};
use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use insights_core::config::{RestaurantConfig, SupermarketConfig};
use insights_core::types::{
    parse_timestamp, AreaOfInterest, MealPreference, RestaurantVisit, SupermarketVisit, VisitTime,
};
use insights_core::{InsightsError, InsightsResult};

use crate::distribution::CategoricalDistribution;

// ─── Parameters ─────────────────────────────────────────────────────────────

/// Arrival window and visit-length range shared by both venues.
#[derive(Debug, Clone)]
pub struct VisitWindow {
    pub base_time: NaiveDateTime,
    pub window_minutes: u32,
    pub durations: Range<u32>,
}

impl VisitWindow {
    pub fn new(
        base_time: NaiveDateTime,
        window_minutes: u32,
        durations: Range<u32>,
    ) -> InsightsResult<Self> {
        if window_minutes == 0 {
            return Err(InsightsError::InvalidParameters(
                "arrival window must be at least one minute".into(),
            ));
        }
        if durations.is_empty() {
            return Err(InsightsError::InvalidParameters(format!(
                "duration range {}..{} is empty",
                durations.start, durations.end
            )));
        }
        if base_time
            .checked_add_signed(Duration::minutes(i64::from(window_minutes)))
            .is_none()
        {
            return Err(InsightsError::InvalidParameters(format!(
                "arrival window of {window_minutes} minutes from {base_time} runs past the calendar"
            )));
        }
        Ok(Self {
            base_time,
            window_minutes,
            durations,
        })
    }

    /// Exclusive upper bound on arrival timestamps.
    pub fn end_time(&self) -> NaiveDateTime {
        self.base_time + Duration::minutes(i64::from(self.window_minutes))
    }
}

#[derive(Debug, Clone)]
pub struct RestaurantParams {
    pub visitors: usize,
    pub window: VisitWindow,
    pub frequent: Bernoulli,
    pub meal_preference: CategoricalDistribution<MealPreference>,
    pub time_of_visit: CategoricalDistribution<VisitTime>,
}

#[derive(Debug, Clone)]
pub struct SupermarketParams {
    pub visitors: usize,
    pub window: VisitWindow,
    pub frequent: Bernoulli,
    pub area_of_interest: CategoricalDistribution<AreaOfInterest>,
}

fn check_visitors(visitors: usize) -> InsightsResult<usize> {
    if u32::try_from(visitors).is_err() {
        return Err(InsightsError::InvalidParameters(format!(
            "visitor count {visitors} exceeds the identifier range"
        )));
    }
    Ok(visitors)
}

fn frequent_flag(probability: f64) -> InsightsResult<Bernoulli> {
    Bernoulli::new(probability)
        .map_err(|e| InsightsError::distribution("frequent_visitor", format!("{probability}: {e}")))
}

impl TryFrom<&RestaurantConfig> for RestaurantParams {
    type Error = InsightsError;

    fn try_from(config: &RestaurantConfig) -> InsightsResult<Self> {
        Ok(Self {
            visitors: check_visitors(config.visitors)?,
            window: VisitWindow::new(
                parse_timestamp(&config.base_time)?,
                config.window_minutes,
                config.duration_min..config.duration_max,
            )?,
            frequent: frequent_flag(config.frequent_probability)?,
            meal_preference: CategoricalDistribution::new(
                "meal_preference",
                MealPreference::ALL,
                &config.meal_preference_weights,
            )?,
            time_of_visit: CategoricalDistribution::new(
                "time_of_visit",
                VisitTime::ALL,
                &config.time_of_visit_weights,
            )?,
        })
    }
}

impl TryFrom<&SupermarketConfig> for SupermarketParams {
    type Error = InsightsError;

    fn try_from(config: &SupermarketConfig) -> InsightsResult<Self> {
        Ok(Self {
            visitors: check_visitors(config.visitors)?,
            window: VisitWindow::new(
                parse_timestamp(&config.base_time)?,
                config.window_minutes,
                config.duration_min..config.duration_max,
            )?,
            frequent: frequent_flag(config.frequent_probability)?,
            area_of_interest: CategoricalDistribution::new(
                "area_of_interest",
                AreaOfInterest::ALL,
                &config.area_of_interest_weights,
            )?,
        })
    }
}

// ─── Generator ──────────────────────────────────────────────────────────────

pub struct SyntheticGenerator<R> {
    rng: R,
}

impl SyntheticGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SyntheticGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce `params.visitors` restaurant visits with ids `1..=visitors`.
    pub fn restaurant(&mut self, params: &RestaurantParams) -> Vec<RestaurantVisit> {
        let visits: Vec<RestaurantVisit> = (1..=params.visitors as u32)
            .map(|visitor_id| {
                let (arrival_time, duration_minutes) = self.visit(&params.window);
                RestaurantVisit {
                    visitor_id,
                    arrival_time,
                    duration_minutes,
                    frequent_visitor: params.frequent.sample(&mut self.rng),
                    meal_preference: params.meal_preference.sample(&mut self.rng),
                    time_of_visit: params.time_of_visit.sample(&mut self.rng),
                }
            })
            .collect();

        debug!(count = visits.len(), "Generated restaurant visits");
        visits
    }

    /// Produce `params.visitors` supermarket visits with ids `1..=visitors`.
    pub fn supermarket(&mut self, params: &SupermarketParams) -> Vec<SupermarketVisit> {
        let visits: Vec<SupermarketVisit> = (1..=params.visitors as u32)
            .map(|visitor_id| {
                let (arrival_time, duration_minutes) = self.visit(&params.window);
                SupermarketVisit {
                    visitor_id,
                    arrival_time,
                    duration_minutes,
                    frequent_visitor: params.frequent.sample(&mut self.rng),
                    area_of_interest: params.area_of_interest.sample(&mut self.rng),
                }
            })
            .collect();

        debug!(count = visits.len(), "Generated supermarket visits");
        visits
    }

    fn visit(&mut self, window: &VisitWindow) -> (NaiveDateTime, u32) {
        let offset = self.rng.gen_range(0..window.window_minutes);
        let arrival = window.base_time + Duration::minutes(i64::from(offset));
        let duration = self.rng.gen_range(window.durations.clone());
        (arrival, duration)
    }
}
