#[macro_use]
extern crate rocket;

pub mod api;
pub mod db;
pub mod error;
pub mod schema;
pub mod settings;

use db::DbConn;
use rocket::{Build, Rocket};
use settings::Settings;

/// Assembles the service. Rocket's own `ROCKET_*` settings still apply on top.
pub fn build(settings: &Settings) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("databases.shareit.url", settings.database_url.clone()))
        .merge(("databases.shareit.pool_size", settings.pool_size));

    let rocket = rocket::custom(figment)
        .attach(DbConn::fairing())
        .mount("/", api::user_management::routes())
        .mount("/", api::item_management::routes())
        .mount("/", api::booking_management::routes())
        .mount("/", api::request_management::routes())
        .register("/", catchers![error::default_catcher]);

    if settings.run_migrations {
        rocket.attach(db::migrations())
    } else {
        rocket
    }
}
