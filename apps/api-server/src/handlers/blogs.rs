//! Blog resource handlers.
//!
//! Each handler validates its input, makes at most one repository call and
//! wraps the outcome in the uniform JSON envelope.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};

use scribe_core::domain::{Blog, NewBlog};
use scribe_shared::dto::BlogResponse;
use scribe_shared::response::{ApiResponse, ListResponse};

use crate::forms;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Matches the varchar(255) column behind it.
const TITLE_MAX_CHARS: usize = 255;

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("invalid blog id '{raw}'")))
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_owned()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(AppError::BadRequest(format!(
            "title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("content must not be empty".to_owned()));
    }
    Ok(())
}

fn to_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        content: blog.content,
        image: blog.image,
        created_at: blog.created_at,
        updated_at: blog.updated_at,
    }
}

/// POST /api/blogs
pub async fn create_blog(state: web::Data<AppState>, payload: Multipart) -> AppResult<HttpResponse> {
    let form = forms::parse_blog_form(payload, state.files.as_ref()).await?;

    let (Some(title), Some(content)) = (form.title, form.content) else {
        return Err(AppError::BadRequest(
            "title and content are required".to_owned(),
        ));
    };
    validate_title(&title)?;
    validate_content(&content)?;

    let blog = state
        .blogs
        .insert(NewBlog {
            title,
            content,
            image: form.image,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(blog))))
}

/// GET /api/blogs
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.list_all().await?;
    let data: Vec<BlogResponse> = blogs.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(ListResponse::ok(data)))
}

/// GET /api/blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("blog {id} not found")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(blog))))
}

/// PUT /api/blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let patch = forms::parse_blog_form(payload, state.files.as_ref()).await?;
    if patch.is_empty() {
        return Err(AppError::BadRequest("no data to update".to_owned()));
    }
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }
    if let Some(content) = &patch.content {
        validate_content(content)?;
    }

    let blog = state
        .blogs
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("blog {id} not found")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(blog))))
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let blog = state
        .blogs
        .delete_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("blog {id} not found")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(blog))))
}
