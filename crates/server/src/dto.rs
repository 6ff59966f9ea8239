//! Request bodies and their boundary validation.

use chrono::{DateTime, NaiveDate};
use models::errors::{validate_not_empty, ModelError};
use models::airline::validate_web_page;
use serde::{Deserialize, Serialize};
use service::airline::domain::AirlineInput;
use service::airport::domain::AirportInput;
use utoipa::ToSchema;

/// Missing fields deserialize as empty strings so `validate` can name them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AirlineDto {
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub foundation_date: String,
    pub web_page: String,
}

impl AirlineDto {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_not_empty("name", &self.name)?;
        validate_not_empty("description", &self.description)?;
        validate_not_empty("foundationDate", &self.foundation_date)?;
        parse_foundation_date(&self.foundation_date)?;
        validate_not_empty("webPage", &self.web_page)?;
        validate_web_page(&self.web_page)?;
        Ok(())
    }

    pub fn into_input(self) -> Result<AirlineInput, ModelError> {
        self.validate()?;
        Ok(AirlineInput {
            foundation_date: parse_foundation_date(&self.foundation_date)?,
            name: self.name,
            description: self.description,
            web_page: self.web_page,
        })
    }
}

fn parse_foundation_date(raw: &str) -> Result<NaiveDate, ModelError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.naive_utc().date())
        .map_err(|_| ModelError::Validation("foundationDate must be a valid ISO 8601 date string".into()))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AirportDto {
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

impl AirportDto {
    /// Only presence is checked here; the code length rule belongs to the service.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_not_empty("name", &self.name)?;
        validate_not_empty("code", &self.code)?;
        validate_not_empty("country", &self.country)?;
        validate_not_empty("city", &self.city)?;
        Ok(())
    }

    pub fn into_input(self) -> Result<AirportInput, ModelError> {
        self.validate()?;
        Ok(AirportInput { name: self.name, code: self.code, country: self.country, city: self.city })
    }
}

/// Element of the replacement list for an airline's airports.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirportRefDto {
    pub id: String,
}
