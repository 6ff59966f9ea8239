use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{airline, airline_airport, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "airports")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
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

impl Related<airline::Entity> for Entity {
    fn to() -> RelationDef { airline_airport::Relation::Airline.def() }

    fn via() -> Option<RelationDef> { Some(airline_airport::Relation::Airport.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// IATA-style codes are exactly three characters.
pub fn validate_code(code: &str) -> Result<(), errors::ModelError> {
    if code.chars().count() != 3 {
        return Err(errors::ModelError::Validation(errors::AIRPORT_CODE_LENGTH.into()));
    }
    Ok(())
}
