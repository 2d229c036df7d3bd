use crate::api::item_management::models::{find_item, Comment, CommentIn, CommentOut, NewComment};
use crate::api::now;
use crate::api::user_management::models::find_user;
use crate::api::user_management::sharer::Sharer;
use crate::db::DbConn;
use crate::error::{ErrorResponse, ServiceError};
use crate::schema::{bookings, comments};
use diesel::dsl::exists;
use diesel::prelude::*;
use rocket::serde::json::Json;
use validator::Validate;

#[post("/items/<item_id>/comment", data = "<comment_in>")]
pub(crate) async fn add_comment(
    item_id: i64,
    comment_in: Json<CommentIn>,
    sharer: Sharer,
    conn: DbConn,
) -> Result<Json<CommentOut>, ErrorResponse> {
    comment_in.validate().map_err(ServiceError::from)?;
    let text = comment_in.into_inner().text.trim().to_string();

    let comment = conn
        .run(move |c| {
            c.transaction::<_, ServiceError, _>(|c| {
                let author = find_user(c, sharer.0)?;
                let item = find_item(c, item_id)?;
                let created = now();

                let has_finished_booking = diesel::select(exists(
                    bookings::table
                        .filter(bookings::item_id.eq(item.id))
                        .filter(bookings::booker_id.eq(author.id))
                        .filter(bookings::end_date.lt(created)),
                ))
                .get_result::<bool>(c)?;
                if !has_finished_booking {
                    return Err(ServiceError::BadRequest(format!(
                        "User {} has no finished booking of item {}",
                        author.id, item.id
                    )));
                }

                let comment = diesel::insert_into(comments::table)
                    .values(&NewComment {
                        text,
                        item_id: item.id,
                        author_id: author.id,
                        created,
                    })
                    .returning(Comment::as_returning())
                    .get_result(c)?;

                Ok(CommentOut::new(comment, author.name))
            })
        })
        .await?;

    tracing::info!(comment_id = comment.id, item_id, "added comment");
    Ok(Json(comment))
}
