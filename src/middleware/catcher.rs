use rocket::{http::Status, response::status};
use crate::util::message;

#[catch(404)]
pub fn not_found() -> status::Custom<&'static str> {
    status::Custom(Status::NotFound, message::MESSAGE_NOT_FOUND)
}

#[catch(500)]
pub fn internal_server_error() -> status::Custom<&'static str> {
    status::Custom(Status::InternalServerError, message::MESSAGE_INTERNAL_SERVER_ERROR)
}
