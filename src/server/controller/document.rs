use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::document::DocumentSource;
use validator::Validate;

use crate::{
    model::{
        api::{CountMessageDto, ErrorDto},
        document::{CreateDocumentDto, DocumentDto, DriveImportDto, ShareDocumentDto},
    },
    server::{
        controller::extract::{JsonBody, PathParam, QueryParams},
        controller::param::{DocumentListParam, PageParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            document::{CreateDocumentParams, Document, DocumentFilter, DriveImportParams},
            page::Page,
        },
        service::document::DocumentService,
        state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "documents";

fn into_dtos(documents: Vec<Document>) -> Vec<DocumentDto> {
    documents.into_iter().map(|d| d.into_dto()).collect()
}

/// List documents, newest first.
#[utoipa::path(
    get,
    path = "/",
    tag = DOCUMENT_TAG,
    security(("bearer_auth" = [])),
    params(DocumentListParam),
    responses(
        (status = 200, description = "Documents", body = Vec<DocumentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(params): QueryParams<DocumentListParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    params.validate()?;

    let documents = DocumentService::new(&state.db)
        .get_all(DocumentFilter {
            category: params.category,
            search: params.search,
            page: Page::new(params.skip, params.limit),
        })
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(documents))))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = DOCUMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document", body = DocumentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(document) = DocumentService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound("Document not found".to_string()));
    };

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Register an uploaded file. The caller becomes the uploader.
#[utoipa::path(
    post,
    path = "/",
    tag = DOCUMENT_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Document created", body = DocumentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    payload.validate()?;

    let document = DocumentService::new(&state.db)
        .create(
            &user,
            CreateDocumentParams {
                title: payload.title,
                category: payload.category,
                description: payload.description,
                file_url: payload.file_url,
                file_size: payload.file_size,
                uploaded_by: user.id,
                source: DocumentSource::Upload,
                drive_file_id: None,
                mime_type: None,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = DOCUMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !DocumentService::new(&state.db).delete(&user, id).await? {
        return Err(AppError::NotFound("Document not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Import a file picked from the caller's Google Drive.
///
/// Only the metadata sent by the client is stored; the file is never downloaded. Users in
/// `share_with` get the document shared with them right away.
///
/// # Returns
/// - `201 Created` - Imported document
/// - `400 Bad Request` - Caller already imported this Drive file
/// - `404 Not Found` - A user in `share_with` does not exist
#[utoipa::path(
    post,
    path = "/from-drive",
    tag = DOCUMENT_TAG,
    security(("bearer_auth" = [])),
    request_body = DriveImportDto,
    responses(
        (status = 201, description = "Document imported", body = DocumentDto),
        (status = 400, description = "Drive file already imported", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_from_drive(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<DriveImportDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    payload.validate()?;

    let document = DocumentService::new(&state.db)
        .import_from_drive(
            &user,
            DriveImportParams {
                drive_file_id: payload.drive_file_id,
                title: payload.title,
                category: payload.category,
                description: payload.description,
                web_view_link: payload.web_view_link,
                mime_type: payload.mime_type,
                file_size: payload.file_size,
                share_with: payload.share_with,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// Documents other users shared with the caller, most recent share first.
#[utoipa::path(
    get,
    path = "/shared-with-me",
    tag = DOCUMENT_TAG,
    security(("bearer_auth" = [])),
    params(PageParam),
    responses(
        (status = 200, description = "Shared documents", body = Vec<DocumentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shared_with_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(params): QueryParams<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    params.validate()?;

    let documents = DocumentService::new(&state.db)
        .get_shared_with(user.id, params.page())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(documents))))
}

/// Share a document with other users.
///
/// # Access Control
/// - Uploader of the document, or `Admin`
///
/// # Returns
/// - `200 OK` - Number of users the document was newly shared with
/// - `403 Forbidden` - Caller is neither uploader nor admin
/// - `404 Not Found` - Document or a target user does not exist
#[utoipa::path(
    post,
    path = "/{id}/share",
    tag = DOCUMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Document ID")),
    request_body = ShareDocumentDto,
    responses(
        (status = 200, description = "Document shared", body = CountMessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the uploader", body = ErrorDto),
        (status = 404, description = "Document or user not found", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn share_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<ShareDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    payload.validate()?;

    let count = DocumentService::new(&state.db)
        .share(&user, id, &payload.user_ids)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CountMessageDto {
            message: format!("Document shared with {} user(s)", count),
            count,
        }),
    ))
}
