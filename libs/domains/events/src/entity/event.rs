use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the events table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub game: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to the transport Event. The message field is
// a response-only channel and starts empty.
impl From<Model> for crate::models::Event {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            game: model.game,
            description: model.description,
            date: model.date.map(Into::into),
            message: None,
        }
    }
}

// Conversion from the transport Event to an ActiveModel. The id stays NotSet
// for creates so the database assigns it; message is never persisted.
impl From<crate::models::Event> for ActiveModel {
    fn from(event: crate::models::Event) -> Self {
        ActiveModel {
            id: event.id.map_or(NotSet, Set),
            name: Set(event.name),
            game: Set(event.game),
            description: Set(event.description),
            date: Set(event.date.map(Into::into)),
        }
    }
}
