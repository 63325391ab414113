//! JSON REST handlers for authors.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use chrono::NaiveDate;
use serde::Deserialize;

use bookhub_app::ports::{AuthorRepository, ProductRepository};
use bookhub_domain::author::{Author, NewAuthor};
use bookhub_domain::error::BookHubError;
use bookhub_domain::id::AuthorId;

use super::id_segment;
use crate::envelope::{Created, Envelope, Operation};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating an author.
#[derive(Debug, Deserialize)]
pub struct AuthorRequest {
    #[serde(default)]
    pub name: String,
    /// `YYYY-MM-DD`; any other layout fails decoding.
    pub date_of_birth: Option<NaiveDate>,
}

impl AuthorRequest {
    fn into_new_author(self) -> Result<NewAuthor, BookHubError> {
        let mut builder = NewAuthor::builder().name(self.name);
        if let Some(date_of_birth) = self.date_of_birth {
            builder = builder.date_of_birth(date_of_birth);
        }
        builder.build()
    }
}

/// `GET /author`
pub async fn list<AR, PR>(
    State(state): State<AppState<AR, PR>>,
) -> Result<Envelope<Vec<Author>>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    let authors = state.author_service.fetch().await?;
    Ok(Envelope::new(Operation::List, authors))
}

/// `POST /author`
pub async fn create<AR, PR>(
    State(state): State<AppState<AR, PR>>,
    payload: Result<Json<AuthorRequest>, JsonRejection>,
) -> Result<Envelope<Created<AuthorId>>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let author = req.into_new_author()?;
    let id = state.author_service.store(author).await?;
    Ok(Envelope::new(Operation::Create, Created { id }))
}

/// `GET /author/{authorId}`
pub async fn get<AR, PR>(
    State(state): State<AppState<AR, PR>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Envelope<Author>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    let author = state
        .author_service
        .get_by_id(AuthorId::from_path_lenient(&id_segment(id)))
        .await?;
    Ok(Envelope::new(Operation::Read, author))
}

/// `PUT /author/{authorId}`
pub async fn update<AR, PR>(
    State(state): State<AppState<AR, PR>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<AuthorRequest>, JsonRejection>,
) -> Result<Envelope<()>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let author = req.into_new_author()?;
    state
        .author_service
        .update(AuthorId::from_path_lenient(&id_segment(id)), author)
        .await?;
    Ok(Envelope::empty(Operation::Update))
}

/// `DELETE /author/{authorId}`
pub async fn delete<AR, PR>(
    State(state): State<AppState<AR, PR>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Envelope<()>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    state
        .author_service
        .delete(AuthorId::from_path_lenient(&id_segment(id)))
        .await?;
    Ok(Envelope::empty(Operation::Delete))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookhub_domain::error::ValidationError;

    #[test]
    fn should_convert_complete_request() {
        let req: AuthorRequest =
            serde_json::from_str(r#"{"name":"Frank Herbert","date_of_birth":"1920-10-08"}"#)
                .unwrap();
        let author = req.into_new_author().unwrap();
        assert_eq!(
            author.date_of_birth,
            NaiveDate::from_ymd_opt(1920, 10, 8).unwrap()
        );
    }

    #[test]
    fn should_reject_missing_date_of_birth() {
        let req: AuthorRequest = serde_json::from_str(r#"{"name":"Frank Herbert"}"#).unwrap();
        assert!(matches!(
            req.into_new_author(),
            Err(BookHubError::Validation(ValidationError::MissingDateOfBirth))
        ));
    }

    #[test]
    fn should_fail_to_decode_malformed_date() {
        let result: Result<AuthorRequest, _> =
            serde_json::from_str(r#"{"name":"Frank Herbert","date_of_birth":"08/10/1920"}"#);
        assert!(result.is_err());
    }
}
