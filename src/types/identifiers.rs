use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Expected {expected} digits, got {got}: {value:?}")]
    WrongLength {
        expected: usize,
        got: usize,
        value: String,
    },
    #[error("Identifier contains a non-digit character: {0:?}")]
    NonDigit(String),
    #[error("Region identifier must not be empty")]
    EmptyRegionId,
}

fn check_digits(value: &str, expected: usize) -> Result<(), IdentifierError> {
    if value.len() != expected {
        return Err(IdentifierError::WrongLength {
            expected,
            got: value.len(),
            value: value.to_string(),
        });
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentifierError::NonDigit(value.to_string()));
    }
    Ok(())
}

/// Full tract identifier: 2-digit state FIPS + 3-digit county FIPS +
/// 6-digit tract FIPS, 11 ASCII digits total.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TractId(String);

impl TractId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        check_digits(&value, 11)?;
        Ok(TractId(value))
    }

    /// Assemble a TractId from its FIPS components.
    pub fn from_parts(state: &str, county: &str, tract: &str) -> Result<Self, IdentifierError> {
        check_digits(state, 2)?;
        check_digits(county, 3)?;
        check_digits(tract, 6)?;
        Ok(TractId(format!("{state}{county}{tract}")))
    }

    /// The containing county: the leading 5 digits (state + county FIPS).
    pub fn county(&self) -> CountyId {
        CountyId(self.0[..5].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// County identifier: 2-digit state FIPS + 3-digit county FIPS.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountyId(String);

impl CountyId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        check_digits(&value, 5)?;
        Ok(CountyId(value))
    }

    pub fn from_parts(state: &str, county: &str) -> Result<Self, IdentifierError> {
        check_digits(state, 2)?;
        check_digits(county, 3)?;
        Ok(CountyId(format!("{state}{county}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 5-digit ZIP code, the key space of the fair-market-rent table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        check_digits(&value, 5)?;
        Ok(ZipCode(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque metropolitan-region (MSA/CBSA) identifier assigned by the
/// upstream dataset builder. Non-empty, otherwise uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdentifierError::EmptyRegionId);
        }
        Ok(RegionId(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
