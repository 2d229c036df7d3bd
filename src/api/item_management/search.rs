use crate::api::item_management::models::{Item, ItemOut};
use crate::api::user_management::sharer::Sharer;
use crate::api::Page;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::items;
use diesel::prelude::*;
use rocket::serde::json::Json;

/// `ILIKE` pattern matching `text` anywhere, with wildcards in `text` taken literally.
pub(crate) fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[get("/items/search?<text>&<page..>")]
pub(crate) async fn search_items(
    text: Option<String>,
    page: Page,
    _sharer: Sharer,
    conn: DbConn,
) -> Result<Json<Vec<ItemOut>>, ErrorResponse> {
    let page = page.checked()?;
    let text = match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Ok(Json(Vec::new())),
    };
    let pattern = contains_pattern(&text);

    let found = conn
        .run(move |c| {
            items::table
                .filter(items::is_available.eq(true))
                .filter(
                    items::name
                        .ilike(pattern.clone())
                        .or(items::description.ilike(pattern)),
                )
                .order(items::id.asc())
                .offset(page.from)
                .limit(page.size)
                .select(Item::as_select())
                .load(c)
                .map_err(ServiceError::from)
        })
        .await?;

    Ok(Json(found.into_iter().map(ItemOut::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_text() {
        assert_eq!(contains_pattern("drill"), "%drill%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("100%_off"), "%100\\%\\_off%");
    }
}
