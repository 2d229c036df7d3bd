use crate::error::{ApiError, GuardFailure};
use rocket::http::Status;
use rocket::request::{self, FromRequest, Outcome};
use rocket::Request;

pub const SHARER_HEADER: &str = "X-Sharer-User-Id";

/// Id of the calling user, taken from the trusted `X-Sharer-User-Id` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sharer(pub i64);

fn reject(req: &Request<'_>, message: String) -> request::Outcome<Sharer, ApiError> {
    req.local_cache(|| GuardFailure(Some(message.clone())));
    Outcome::Error((Status::BadRequest, ApiError::new(message)))
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Sharer {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let raw = match req.headers().get_one(SHARER_HEADER) {
            Some(raw) => raw,
            None => return reject(req, format!("Missing header {}", SHARER_HEADER)),
        };

        match raw.trim().parse::<i64>() {
            Ok(id) => Outcome::Success(Sharer(id)),
            Err(_) => reject(req, format!("Header {} is not a user id: {}", SHARER_HEADER, raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Header;
    use rocket::local::blocking::Client;

    #[get("/whoami")]
    fn whoami(sharer: Sharer) -> String {
        sharer.0.to_string()
    }

    fn client() -> Client {
        let rocket = rocket::build()
            .mount("/", routes![whoami])
            .register("/", catchers![crate::error::default_catcher]);
        Client::tracked(rocket).unwrap()
    }

    #[test]
    fn header_value_becomes_the_caller() {
        let client = client();
        let response = client
            .get("/whoami")
            .header(Header::new(SHARER_HEADER, "7"))
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_string().unwrap(), "7");
    }

    #[test]
    fn missing_header_is_a_bad_request() {
        let client = client();
        let response = client.get("/whoami").dispatch();

        assert_eq!(response.status(), Status::BadRequest);
        let body: serde_json::Value = response.into_json().unwrap();
        assert_eq!(body["message"], "Missing header X-Sharer-User-Id");
    }

    #[test]
    fn malformed_header_is_a_bad_request() {
        let client = client();
        let response = client
            .get("/whoami")
            .header(Header::new(SHARER_HEADER, "seven"))
            .dispatch();

        assert_eq!(response.status(), Status::BadRequest);
        let body: serde_json::Value = response.into_json().unwrap();
        assert!(body["message"].as_str().unwrap().contains("seven"));
    }
}
