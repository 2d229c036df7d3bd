use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_sync_db_pools::{database, diesel};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[database("shareit")]
pub struct DbConn(diesel::PgConnection);

async fn run_db_migrations(rocket: Rocket<Build>) -> Result<Rocket<Build>, Rocket<Build>> {
    let conn = match DbConn::get_one(&rocket).await {
        Some(conn) => conn,
        None => {
            tracing::error!("no database connection available for migrations");
            return Err(rocket);
        }
    };

    let applied = conn
        .run(|c| {
            c.run_pending_migrations(MIGRATIONS)
                .map(|versions| versions.len())
                .map_err(|err| err.to_string())
        })
        .await;

    match applied {
        Ok(count) => {
            tracing::info!(count, "database migrations applied");
            Ok(rocket)
        }
        Err(err) => {
            tracing::error!(error = %err, "couldn't run database migrations");
            Err(rocket)
        }
    }
}

pub(crate) fn migrations() -> AdHoc {
    AdHoc::try_on_ignite("Database Migrations", run_db_migrations)
}
