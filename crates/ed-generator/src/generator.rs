//! Main generator for producing ED visit records.

use crate::config::{ConfigError, GeneratorConfig};
use crate::generators::{numeric, timestamp, Categorical};
use ed_core::{AcuityLevel, AgeGroup, ChiefComplaint, EdVisit};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Generator that produces deterministic ED visit records.
///
/// The generator uses a seeded random number generator so the same seed and
/// configuration always yield the same records in the same order.
pub struct VisitGenerator {
    /// Validated configuration
    config: GeneratorConfig,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Number of records generated so far
    index: u64,
    acuity: Categorical<AcuityLevel>,
    age_group: Categorical<AgeGroup>,
    chief_complaint: Categorical<ChiefComplaint>,
}

impl VisitGenerator {
    /// Create a new generator, validating the configuration first.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let acuity = Categorical::weighted(&AcuityLevel::ALL, &config.acuity_weights).map_err(
            |e| ConfigError::InvalidWeights {
                table: "acuity_weights",
                reason: e.to_string(),
            },
        )?;
        let age_group = Categorical::weighted(&AgeGroup::ALL, &config.age_group_weights)
            .map_err(|e| ConfigError::InvalidWeights {
                table: "age_group_weights",
                reason: e.to_string(),
            })?;
        let chief_complaint =
            Categorical::uniform(&ChiefComplaint::ALL).map_err(|e| ConfigError::InvalidWeights {
                table: "chief_complaint",
                reason: e.to_string(),
            })?;

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            index: 0,
            acuity,
            age_group,
            chief_complaint,
        })
    }

    /// Get the number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next visit.
    ///
    /// Patient ids follow generation order starting at `PT0001`; fields are
    /// drawn in column order.
    pub fn next_visit(&mut self) -> EdVisit {
        self.index += 1;

        let arrival_time = timestamp::generate_arrival(
            &mut self.rng,
            self.config.base_date,
            self.config.window_days,
        );
        let acuity_level = self.acuity.draw(&mut self.rng);
        let age_group = self.age_group.draw(&mut self.rng);
        let chief_complaint = self.chief_complaint.draw(&mut self.rng);
        let wait = self.config.wait_time_minutes;
        let wait_time_minutes = numeric::generate_int_range(&mut self.rng, wait.min, wait.max);
        let stay = self.config.length_of_stay_hours;
        let length_of_stay_hours =
            numeric::generate_hundredths_range(&mut self.rng, stay.min, stay.max);

        EdVisit {
            patient_id: EdVisit::patient_id_for(self.index),
            arrival_time,
            acuity_level,
            age_group,
            chief_complaint,
            wait_time_minutes,
            length_of_stay_hours,
        }
    }

    /// Generate multiple visits lazily.
    pub fn visits(&mut self, count: u64) -> VisitIterator<'_> {
        VisitIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate the configured number of visits, sorted by arrival time.
    ///
    /// The sort is stable, so visits sharing an arrival minute keep their
    /// generation order.
    pub fn generate_sorted(&mut self) -> Vec<EdVisit> {
        let count = self.config.row_count;
        let mut visits: Vec<EdVisit> = self.visits(count).collect();
        visits.sort_by_key(|v| v.arrival_time);
        debug!("Generated and sorted {} visits", visits.len());
        visits
    }
}

/// Iterator that lazily generates visits.
pub struct VisitIterator<'a> {
    generator: &'a mut VisitGenerator,
    remaining: u64,
}

impl Iterator for VisitIterator<'_> {
    type Item = EdVisit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_visit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VisitIterator<'_> {}
