pub mod create;
pub mod delete;
pub mod edit;
pub mod get_user;
pub mod list;
pub mod models;
pub mod sharer;

pub(crate) fn routes() -> Vec<rocket::Route> {
    routes![
        create::create_user,
        get_user::get_user,
        list::get_users,
        edit::edit_user,
        delete::delete_user,
    ]
}
