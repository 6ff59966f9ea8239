//! The single relation between airlines and airports.
//!
//! Both navigable views (airline -> airports, airport -> airlines) are read
//! from these rows. A row has its own id, so a pair may be linked twice.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{airline, airport};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "airline_airports")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub airline_id: Uuid,
    pub airport_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Airline, Airport }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Airline => Entity::belongs_to(airline::Entity)
                .from(Column::AirlineId)
                .to(airline::Column::Id)
                .into(),
            Relation::Airport => Entity::belongs_to(airport::Entity)
                .from(Column::AirportId)
                .to(airport::Column::Id)
                .into(),
        }
    }
}

impl Related<airline::Entity> for Entity {
    fn to() -> RelationDef { Relation::Airline.def() }
}

impl Related<airport::Entity> for Entity {
    fn to() -> RelationDef { Relation::Airport.def() }
}

impl ActiveModelBehavior for ActiveModel {}
