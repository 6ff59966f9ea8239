use chrono::{DateTime, NaiveTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{airline_airport, airport, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "airlines")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub foundation_date: Date,
    pub web_page: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { AirlineAirport }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::AirlineAirport => Entity::has_many(airline_airport::Entity).into(),
        }
    }
}

impl Related<airline_airport::Entity> for Entity {
    fn to() -> RelationDef { Relation::AirlineAirport.def() }
}

impl Related<airport::Entity> for Entity {
    fn to() -> RelationDef { airline_airport::Relation::Airport.def() }

    fn via() -> Option<RelationDef> { Some(airline_airport::Relation::Airline.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// The foundation date, taken at midnight UTC, must lie strictly before `now`.
pub fn validate_foundation_date(foundation_date: Date, now: DateTime<Utc>) -> Result<(), errors::ModelError> {
    let founded = foundation_date.and_time(NaiveTime::MIN).and_utc();
    if founded >= now {
        return Err(errors::ModelError::Validation(errors::AIRLINE_FOUNDATION_DATE.into()));
    }
    Ok(())
}

/// Accepts absolute http(s) URLs; a bare host such as `www.example.com` is read as http.
pub fn validate_web_page(web_page: &str) -> Result<(), errors::ModelError> {
    let invalid = || errors::ModelError::Validation("webPage must be a URL address".into());
    let trimmed = web_page.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(invalid());
    }
    let parsed = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{trimmed}")).map_err(|_| invalid())?,
        Err(_) => return Err(invalid()),
    };
    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid()),
    }
    match parsed.host_str() {
        Some(host) if host.contains('.') || host == "localhost" => Ok(()),
        _ => Err(invalid()),
    }
}
