use crate::api::error::ActionError;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejection is the generic action error.
///
/// A malformed or incomplete action payload is answered like any other
/// action failure.
pub struct ActionJson<T>(pub T);

impl<T, S> FromRequest<S> for ActionJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ActionError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ActionJson(value)),
            Err(rejection) => Err(ActionError::invalid_request(rejection.body_text())),
        }
    }
}
