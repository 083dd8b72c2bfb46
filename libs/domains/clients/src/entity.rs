use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the client_comments table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub replied: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to the transport comment. The id travels as
// a proper field; message starts empty.
impl From<Model> for crate::models::ClientComment {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            email: model.email,
            comment: model.comment,
            replied: model.replied,
            message: None,
        }
    }
}

// Conversion from the transport comment to an ActiveModel. The id stays
// NotSet for creates; message is never persisted.
impl From<crate::models::ClientComment> for ActiveModel {
    fn from(comment: crate::models::ClientComment) -> Self {
        ActiveModel {
            id: comment.id.map_or(NotSet, Set),
            email: Set(comment.email),
            comment: Set(comment.comment),
            replied: Set(comment.replied),
        }
    }
}
