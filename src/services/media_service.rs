use axum::extract::Multipart;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Media, NewMedia},
    state::AppState,
};

/// Fields of a media upload form.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub name: Option<String>,
    pub file: Option<UploadedFile>,
}

#[derive(Debug)]
pub struct UploadedFile {
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Collect the `file` part and optional `name` part; other parts are skipped.
pub async fn read_upload_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart.next_field().await? {
        let part = field.name().map(str::to_owned);
        match part.as_deref() {
            Some("file") => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await?.to_vec();
                form.file = Some(UploadedFile {
                    original_name,
                    mime_type,
                    bytes,
                });
            }
            Some("name") => {
                let name = field.text().await?;
                form.name = Some(name.trim().to_string()).filter(|n| !n.is_empty());
            }
            _ => {}
        }
    }
    Ok(form)
}

pub async fn list_media(state: &AppState) -> AppResult<Vec<Media>> {
    state.storage.get_all_media().await
}

pub async fn upload_media(state: &AppState, user: &AuthUser, form: UploadForm) -> AppResult<Media> {
    let file = form
        .file
        .ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;

    let stored = state
        .uploads
        .save(&file.original_name, &file.mime_type, &file.bytes)
        .await?;

    let record = NewMedia {
        name: form.name.unwrap_or_else(|| stored.original_name.clone()),
        filename: stored.filename.clone(),
        original_name: stored.original_name,
        mime_type: stored.mime_type,
        size: stored.size,
        url: stored.url,
    };

    match state.storage.create_media(record).await {
        Ok(media) => {
            tracing::info!(admin = %user.username, media_id = media.id, filename = %media.filename, "media uploaded");
            Ok(media)
        }
        Err(err) => {
            // Do not leave an orphaned file behind a failed insert.
            if let Err(cleanup) = state.uploads.remove(&stored.filename).await {
                tracing::warn!(error = %cleanup, filename = %stored.filename, "orphaned upload left on disk");
            }
            Err(err)
        }
    }
}

pub async fn delete_media(state: &AppState, user: &AuthUser, id: i32) -> AppResult<()> {
    let media = state
        .storage
        .get_media(id)
        .await?
        .ok_or(AppError::NotFound("Media"))?;

    state.uploads.remove(&media.filename).await?;

    if !state.storage.delete_media(id).await? {
        return Err(AppError::Internal(anyhow::anyhow!(
            "media {id} passed the existence check but was not deleted"
        )));
    }
    tracing::info!(admin = %user.username, media_id = id, filename = %media.filename, "media deleted");
    Ok(())
}
