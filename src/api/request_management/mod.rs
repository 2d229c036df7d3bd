pub mod create;
pub mod get_request;
pub mod list;
pub mod models;

pub(crate) fn routes() -> Vec<rocket::Route> {
    routes![
        create::create_request,
        get_request::get_request,
        list::get_own_requests,
        list::get_all_requests,
    ]
}
