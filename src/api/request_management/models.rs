use std::collections::HashMap;

use crate::api::item_management::models::{Item, ItemOut};
use crate::api::not_blank;
use crate::error::ServiceError;
use crate::schema::{items, requests};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = requests)]
pub struct ItemRequest {
    pub id: i64,
    pub description: String,
    pub requestor_id: i64,
    pub created: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = requests)]
pub(crate) struct NewItemRequest {
    pub description: String,
    pub requestor_id: i64,
    pub created: NaiveDateTime,
}

#[derive(Deserialize, Validate, Debug)]
pub struct ItemRequestIn {
    #[validate(length(max = 512), custom(function = "not_blank"))]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemRequestOut {
    pub id: i64,
    pub description: String,
    pub created: NaiveDateTime,
    pub items: Vec<ItemOut>,
}

impl ItemRequestOut {
    pub(crate) fn new(request: ItemRequest, items: Vec<ItemOut>) -> Self {
        ItemRequestOut {
            id: request.id,
            description: request.description,
            created: request.created,
            items,
        }
    }
}

/// Pairs each request with the items created in answer to it.
pub(crate) fn with_answers(
    c: &mut PgConnection,
    request_list: Vec<ItemRequest>,
) -> Result<Vec<ItemRequestOut>, ServiceError> {
    let ids: Vec<i64> = request_list.iter().map(|r| r.id).collect();

    let answers = items::table
        .filter(items::request_id.eq_any(&ids))
        .order(items::id.asc())
        .select(Item::as_select())
        .load(c)?;

    let mut by_request: HashMap<i64, Vec<ItemOut>> = HashMap::new();
    for item in answers {
        if let Some(request_id) = item.request_id {
            by_request
                .entry(request_id)
                .or_default()
                .push(ItemOut::from(item));
        }
    }

    Ok(request_list
        .into_iter()
        .map(|request| {
            let answered = by_request.remove(&request.id).unwrap_or_default();
            ItemRequestOut::new(request, answered)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_description_is_required() {
        assert!(ItemRequestIn {
            description: "Need a ladder".to_string()
        }
        .validate()
        .is_ok());
        assert!(ItemRequestIn {
            description: "  ".to_string()
        }
        .validate()
        .is_err());
        assert!(ItemRequestIn {
            description: "x".repeat(513)
        }
        .validate()
        .is_err());
    }
}
