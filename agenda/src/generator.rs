//! Random municipality records for filling a register

use ord_table::OrdTable;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};
use thiserror::Error;

use crate::Municipality;

pub const REGION_MIN: u32 = 1;
pub const REGION_MAX: u32 = 15;
/// Generated names are the prefix followed by a number below this
pub const NAME_NUMBER_MAX: u32 = 1000;
/// Male and female counts are below this
pub const POPULATION_MAX: u32 = 1000;
pub const POSTAL_CODE_PATTERN: &str = "XXX XX";
/// Attempts at finding an unused name for a single record
pub const MAX_ATTEMPTS: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error(
        "could not find an unused name after {} attempts, inserted {inserted} of {requested} \
         records",
        MAX_ATTEMPTS
    )]
    Exhausted { inserted: usize, requested: usize },
}

/// Seeded source of municipality records
pub struct Generator {
    rng: Xoshiro128StarStar,
    name_prefix: String,
}

impl Generator {
    pub fn new(seed: u64, name_prefix: impl Into<String>) -> Self {
        Self {
            rng: Xoshiro128StarStar::seed_from_u64(seed),
            name_prefix: name_prefix.into(),
        }
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    fn below(&mut self, max: u32) -> u32 {
        self.rng.next_u32() % max
    }

    /// Makes one record. Names repeat after enough calls, [Generator::populate]
    /// deals with that.
    pub fn generate(&mut self) -> Municipality {
        let region_number = REGION_MIN + self.below(REGION_MAX - REGION_MIN + 1);
        let number = self.below(NAME_NUMBER_MAX);
        let name = format!("{}{number}", self.name_prefix);
        let postal_code: String = POSTAL_CODE_PATTERN
            .chars()
            .map(|c| match c {
                'X' => char::from(b'0' + (self.below(10) as u8)),
                c => c,
            })
            .collect();
        let male = self.below(POPULATION_MAX);
        let female = self.below(POPULATION_MAX);
        Municipality::new(
            region_number,
            format!("Region {region_number}"),
            postal_code,
            name,
            male,
            female,
            male + female,
        )
    }

    /// Inserts `count` new records into `table`. Records whose name is already
    /// present are thrown away and generated again, up to [MAX_ATTEMPTS]
    /// times per record. The records inserted before a failure stay in the
    /// table.
    pub fn populate(
        &mut self,
        table: &mut OrdTable<String, Municipality>,
        count: usize,
    ) -> Result<usize, GeneratorError> {
        for inserted in 0..count {
            let mut attempts = 0;
            loop {
                if attempts == MAX_ATTEMPTS {
                    tracing::warn!(inserted, requested = count, "generator ran out of names");
                    return Err(GeneratorError::Exhausted {
                        inserted,
                        requested: count,
                    })
                }
                attempts += 1;
                let m = self.generate();
                let name = m.name().to_owned();
                if table.contains(&name) {
                    continue
                }
                if table.insert(name, m).is_ok() {
                    break
                }
            }
        }
        tracing::debug!(count, len = table.len(), "generated records");
        Ok(count)
    }
}
