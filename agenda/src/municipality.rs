use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// Population record of a single municipality. The name is the key of the
/// register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    region_number: u32,
    region_name: String,
    postal_code: String,
    name: String,
    male: u32,
    female: u32,
    total: u32,
}

impl Municipality {
    pub fn new(
        region_number: u32,
        region_name: impl Into<String>,
        postal_code: impl Into<String>,
        name: impl Into<String>,
        male: u32,
        female: u32,
        total: u32,
    ) -> Self {
        Self {
            region_number,
            region_name: region_name.into(),
            postal_code: postal_code.into(),
            name: name.into(),
            male,
            female,
            total,
        }
    }

    pub fn region_number(&self) -> u32 {
        self.region_number
    }

    pub fn region_name(&self) -> &str {
        &self.region_name
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn male(&self) -> u32 {
        self.male
    }

    pub fn female(&self) -> u32 {
        self.female
    }

    /// The total as recorded, which is not checked against `male + female`
    pub fn total(&self) -> u32 {
        self.total
    }
}

impl fmt::Display for Municipality {
    /// The same semicolon separated row that `persistence` reads and writes.
    /// Text fields holding `;` do not read back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{};{};{};{}",
            self.region_number,
            self.region_name,
            self.postal_code,
            self.name,
            self.male,
            self.female,
            self.total
        )
    }
}
