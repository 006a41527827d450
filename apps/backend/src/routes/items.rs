//! Item HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::items::{self as items_repo, Item, NewItem};
use crate::state::app_state::AppState;

/// Create view: the fields a caller supplies. The id is never accepted
/// from the outside; the store assigns it.
#[derive(Debug, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Read view: the full representation returned to clients.
#[derive(Debug, Serialize)]
pub struct ItemRead {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<Item> for ItemRead {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
        }
    }
}

/// POST /items/
///
/// Inserts a row with the supplied fields and returns the read view,
/// including the newly assigned id.
async fn create_item(
    payload: web::Json<ItemCreate>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let input = payload.into_inner();

    let item = with_txn(&app_state, |txn| {
        Box::pin(async move {
            items_repo::create_item(
                txn,
                NewItem {
                    name: input.name,
                    description: input.description,
                    price: input.price,
                },
            )
            .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(ItemRead::from(item)))
}

/// GET /items/{item_id}
///
/// Primary-key lookup; absence surfaces as 404 with a fixed detail message.
async fn read_item(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();

    let item = with_txn(&app_state, |txn| {
        Box::pin(async move { items_repo::find_item_by_id(txn, item_id).await })
    })
    .await?
    .ok_or_else(|| AppError::not_found("Item not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ItemRead::from(item)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/items/").route(web::post().to(create_item)));
    cfg.service(web::resource("/items/{item_id}").route(web::get().to(read_item)));
}
