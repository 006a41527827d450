//! Item repository functions, generic over ConnectionTrait so they run
//! against either a pooled connection or a request-scoped transaction.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use crate::entities::items;
use crate::error::AppError;

/// Item domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Fields required to create an item; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Insert a new item and return the fully populated row, including the
/// id the store assigned.
pub async fn create_item<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: NewItem,
) -> Result<Item, AppError> {
    let item_active = items::ActiveModel {
        id: NotSet,
        name: Set(input.name),
        description: Set(input.description),
        price: Set(input.price),
    };

    let model = item_active
        .insert(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to insert item: {e}")))?;

    Ok(Item::from(model))
}

/// Primary-key lookup. Absence is `Ok(None)`, never an error; the routing
/// layer decides what absence means for the caller.
pub async fn find_item_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_id: i64,
) -> Result<Option<Item>, AppError> {
    let model = items::Entity::find_by_id(item_id)
        .one(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to query item: {e}")))?;

    Ok(model.map(Item::from))
}

// Conversion between the SeaORM model and the domain model

impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}
