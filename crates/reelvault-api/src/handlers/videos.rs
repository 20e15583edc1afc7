//! Video API handlers.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use reelvault_models::{MediaType, VideoId, VideoRecord};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Create video request.
#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create a draft video record owned by the caller.
pub async fn create_video(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateVideoRequest>,
) -> ApiResult<Json<VideoRecord>> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(ApiError::bad_request("Title cannot be empty"));
    }
    if title.len() > 500 {
        return Err(ApiError::bad_request("Title too long (max 500 characters)"));
    }

    let record = VideoRecord::new(user.id, title, request.description);
    state.videos.create_video(&record).await?;

    info!(video_id = %record.id, user_id = %user.id, "created video record");

    Ok(Json(record))
}

/// Get a video record (owner only).
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    user: AuthUser,
) -> ApiResult<Json<VideoRecord>> {
    let video_id = parse_video_id(&video_id)?;
    let record = fetch_owned(&state, &video_id, &user).await?;
    Ok(Json(record))
}

// ============================================================================
// Video Upload
// ============================================================================

/// Upload a video file for an existing record.
///
/// Multipart part `video` must be `video/mp4`. The file is staged
/// locally, classified, remuxed for progressive playback, uploaded to
/// the object store and the record's URL updated. Both temp files are
/// gone by the time this returns, success or not.
pub async fn upload_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    user: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<VideoRecord>> {
    let video_id = parse_video_id(&video_id)?;
    let mut record = fetch_owned(&state, &video_id, &user).await?;

    // Validate the part's media type before creating any temp file.
    let mut staged: Option<(TempPath, MediaType)> = None;
    while let Some(mut field) = next_field(&mut multipart).await? {
        if field.name() != Some("video") {
            continue;
        }

        let media_type = field_media_type(&field)?;
        if !media_type.is_allowed_video() {
            return Err(ApiError::unsupported_media_type(format!(
                "File must be an MP4 video, got {media_type}"
            )));
        }

        let path = stage_field(&state.config.spool_dir, &mut field).await?;
        staged = Some((path, media_type));
        break;
    }
    let (staged, media_type) =
        staged.ok_or_else(|| ApiError::bad_request("Missing video field"))?;

    info!(video_id = %video_id, user_id = %user.id, "ingesting video upload");

    let published = state.ingest.publish_video(staged, &media_type).await?;

    record.video_url = Some(published.url.clone());
    record.updated_at = Utc::now();
    if let Err(err) = state.videos.update_video(&record).await {
        // The object is already durable; delete it rather than leave an
        // orphan nothing references.
        warn!(
            video_id = %video_id,
            key = %published.key,
            "metadata update failed after upload: {}", err
        );
        state.ingest.discard(&published.key).await;
        return Err(err.into());
    }

    info!(
        video_id = %video_id,
        user_id = %user.id,
        key = %published.key,
        "video published"
    );

    Ok(Json(record))
}

// ============================================================================
// Thumbnail Upload
// ============================================================================

/// Upload a thumbnail image for an existing record.
///
/// Multipart part `thumbnail` must be JPEG or PNG. Thumbnails go to the
/// object store under the `thumbnails/` prefix, same as videos.
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    user: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<VideoRecord>> {
    let video_id = parse_video_id(&video_id)?;
    let mut record = fetch_owned(&state, &video_id, &user).await?;

    let mut payload: Option<(Vec<u8>, MediaType)> = None;
    while let Some(field) = next_field(&mut multipart).await? {
        if field.name() != Some("thumbnail") {
            continue;
        }

        let media_type = field_media_type(&field)?;
        if !media_type.is_allowed_image() {
            return Err(ApiError::unsupported_media_type(format!(
                "Thumbnail must be a JPEG or PNG image, got {media_type}"
            )));
        }

        let data = field
            .bytes()
            .await
            .map_err(|_| ApiError::bad_request("Failed to read upload stream"))?;
        payload = Some((data.to_vec(), media_type));
        break;
    }
    let (data, media_type) =
        payload.ok_or_else(|| ApiError::bad_request("Missing thumbnail field"))?;

    let published = state.ingest.publish_thumbnail(data, &media_type).await?;

    record.thumbnail_url = Some(published.url.clone());
    record.updated_at = Utc::now();
    if let Err(err) = state.videos.update_video(&record).await {
        warn!(
            video_id = %video_id,
            key = %published.key,
            "metadata update failed after thumbnail upload: {}", err
        );
        state.ingest.discard(&published.key).await;
        return Err(err.into());
    }

    info!(video_id = %video_id, user_id = %user.id, "thumbnail published");

    Ok(Json(record))
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_video_id(raw: &str) -> ApiResult<VideoId> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid video ID"))
}

/// Fetch a record and require that the caller owns it.
async fn fetch_owned(
    state: &AppState,
    video_id: &VideoId,
    user: &AuthUser,
) -> ApiResult<VideoRecord> {
    let record = state
        .videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Video not found"))?;

    if record.user_id != user.id {
        return Err(ApiError::unauthorized("You do not own this video"));
    }

    Ok(record)
}

async fn next_field<'a>(multipart: &'a mut Multipart) -> ApiResult<Option<Field<'a>>> {
    multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("Malformed multipart form"))
}

fn field_media_type(field: &Field<'_>) -> ApiResult<MediaType> {
    let raw = field
        .content_type()
        .ok_or_else(|| ApiError::bad_request("Missing content type"))?;
    MediaType::parse(raw).map_err(|_| ApiError::bad_request("Invalid content type"))
}

/// Stream a multipart part into a spool-directory temp file.
///
/// The returned `TempPath` removes the file on drop, so whoever holds
/// it last cleans up no matter how the request ends.
async fn stage_field(spool_dir: &std::path::Path, field: &mut Field<'_>) -> ApiResult<TempPath> {
    let staged = tempfile::Builder::new()
        .prefix("reelvault-upload-")
        .suffix(".mp4")
        .tempfile_in(spool_dir)
        .map_err(|e| ApiError::internal(format!("Failed to create staging file: {e}")))?
        .into_temp_path();

    let mut out = tokio::fs::File::create(&staged)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to open staging file: {e}")))?;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|_| ApiError::bad_request("Failed to read upload stream"))?
    {
        out.write_all(&chunk)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to stage upload: {e}")))?;
    }

    out.flush()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to flush staging file: {e}")))?;

    Ok(staged)
}
