//! Multipart form parsing for blog create/update requests.
//!
//! The browser submits `title`, `content` and an optional `image` file as
//! `multipart/form-data`. Text fields land in a [`BlogPatch`]; the image is
//! persisted through the file store and only its generated filename is kept.

use actix_multipart::{Field, Multipart};
use futures_util::StreamExt;

use scribe_core::domain::BlogPatch;
use scribe_core::ports::FileStorage;

use crate::middleware::error::AppError;

/// Drain the multipart payload into a patch. Unknown fields are ignored.
pub async fn parse_blog_form(
    mut payload: Multipart,
    files: &dyn FileStorage,
) -> Result<BlogPatch, AppError> {
    let mut form = BlogPatch::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("malformed multipart payload: {e}")))?;

        let (name, filename) = {
            let Some(cd) = field.content_disposition() else {
                continue;
            };
            (
                cd.get_name().map(str::to_owned),
                cd.get_filename().map(str::to_owned),
            )
        };
        let Some(name) = name else {
            continue;
        };

        match name.as_str() {
            "title" => form.title = Some(read_text(&mut field).await?),
            "content" => form.content = Some(read_text(&mut field).await?),
            "image" => {
                let data = read_bytes(&mut field).await?;
                // Browsers submit an empty part when no file was selected.
                if data.is_empty() {
                    continue;
                }
                let original = filename.unwrap_or_else(|| "upload".to_owned());
                form.image = Some(files.save(&original, data).await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_bytes(field: &mut Field) -> Result<Vec<u8>, AppError> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk =
            chunk.map_err(|e| AppError::BadRequest(format!("error reading form field: {e}")))?;
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

async fn read_text(field: &mut Field) -> Result<String, AppError> {
    let data = read_bytes(field).await?;
    String::from_utf8(data)
        .map_err(|_| AppError::BadRequest("form fields must be valid UTF-8".to_owned()))
}
