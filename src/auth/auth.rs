use actix_web::{
    FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized, web::Data,
};
use futures::future::{Ready, ready};
use std::ops::Deref;

use crate::model::session::Session;
use crate::session::SessionStore;

/// The logged-in session, as seen by a protected handler.
pub struct CurrentSession(pub Session);

impl Deref for CurrentSession {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.0
    }
}

impl FromRequest for CurrentSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // the session guard already put it there
        if let Some(session) = req.extensions().get::<Session>() {
            return ready(Ok(CurrentSession(session.clone())));
        }

        let session = req
            .app_data::<Data<SessionStore>>()
            .and_then(|store| store.current());

        match session {
            Some(s) => ready(Ok(CurrentSession(s))),
            None => ready(Err(ErrorUnauthorized("Not logged in"))),
        }
    }
}
