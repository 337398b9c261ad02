//! Process input validation. Turns a raw [`ProcessRecordInput`] into a typed
//! [`NewProcess`], failing on the first offending field in form order.

use crate::domain::entities::{NewProcess, ProcessRecordInput, ProcessType};
use crate::domain::errors::DomainError;
use chrono::NaiveDate;
use std::fmt;

/// Minimum description length, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Accepted date layouts: ISO first, then day-first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Fields of a process form, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessField {
    ProcessNumber,
    ProtocolDate,
    ProcessType,
    Description,
    ClientName,
    Location,
    LicenseExpiryDate,
}

impl ProcessField {
    pub fn name(self) -> &'static str {
        match self {
            ProcessField::ProcessNumber => "process_number",
            ProcessField::ProtocolDate => "protocol_date",
            ProcessField::ProcessType => "process_type",
            ProcessField::Description => "description",
            ProcessField::ClientName => "client_name",
            ProcessField::Location => "location",
            ProcessField::LicenseExpiryDate => "license_expiry_date",
        }
    }
}

impl fmt::Display for ProcessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn invalid(field: ProcessField, reason: impl Into<String>) -> DomainError {
    DomainError::Validation {
        field,
        reason: reason.into(),
    }
}

fn required(field: ProcessField, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, "is required"));
    }
    Ok(trimmed.to_string())
}

/// Empty or whitespace-only optional text counts as absent.
fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Parse a calendar date in any of the accepted layouts.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn required_date(field: ProcessField, raw: &str) -> Result<NaiveDate, DomainError> {
    let raw = required(field, raw)?;
    parse_date(&raw).ok_or_else(|| invalid(field, format!("`{raw}` is not a valid date")))
}

impl ProcessRecordInput {
    /// Validate and normalize. Required text is trimmed.
    pub fn validate(&self) -> Result<NewProcess, DomainError> {
        let process_number = required(ProcessField::ProcessNumber, &self.process_number)?;
        let protocol_date = required_date(ProcessField::ProtocolDate, &self.protocol_date)?;
        let process_type = required(ProcessField::ProcessType, &self.process_type)?
            .parse::<ProcessType>()
            .map_err(|e| invalid(ProcessField::ProcessType, e.to_string()))?;

        let description = self.description.trim();
        let description_len = description.chars().count();
        if description_len < MIN_DESCRIPTION_CHARS {
            return Err(invalid(
                ProcessField::Description,
                format!(
                    "must have at least {MIN_DESCRIPTION_CHARS} characters (got {description_len})"
                ),
            ));
        }

        let client_name = required(ProcessField::ClientName, &self.client_name)?;
        let location = required(ProcessField::Location, &self.location)?;

        let license_expiry_date = match optional(self.license_expiry_date.as_deref()) {
            Some(raw) => Some(parse_date(&raw).ok_or_else(|| {
                invalid(
                    ProcessField::LicenseExpiryDate,
                    format!("`{raw}` is not a valid date"),
                )
            })?),
            None => None,
        };

        Ok(NewProcess {
            process_number,
            protocol_date,
            process_type,
            description: description.to_string(),
            client_name,
            location,
            license_expiry_date,
            observations: optional(self.observations.as_deref()),
        })
    }
}
