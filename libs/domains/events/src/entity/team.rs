use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the teams table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub game: String,
    pub captain_email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Team {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            game: model.game,
            captain_email: model.captain_email,
            message: None,
        }
    }
}

impl From<crate::models::Team> for ActiveModel {
    fn from(team: crate::models::Team) -> Self {
        ActiveModel {
            id: team.id.map_or(NotSet, Set),
            name: Set(team.name),
            game: Set(team.game),
            captain_email: Set(team.captain_email),
        }
    }
}
