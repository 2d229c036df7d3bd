pub mod add_comment;
pub mod create;
pub mod edit;
pub mod get_item;
pub mod list;
pub mod models;
pub mod search;

pub(crate) fn routes() -> Vec<rocket::Route> {
    routes![
        create::create_item,
        edit::edit_item,
        get_item::get_item,
        list::get_items,
        search::search_items,
        add_comment::add_comment,
    ]
}
