use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the viewers table. `(email, event_id)` is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "viewers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub event_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Viewer {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            email: model.email,
            event_id: model.event_id,
            message: None,
        }
    }
}

impl From<crate::models::Viewer> for ActiveModel {
    fn from(viewer: crate::models::Viewer) -> Self {
        ActiveModel {
            id: viewer.id.map_or(NotSet, Set),
            email: Set(viewer.email),
            event_id: Set(viewer.event_id),
        }
    }
}
