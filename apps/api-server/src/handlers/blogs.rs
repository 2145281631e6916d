//! Blog CRUD and summary handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use quill_core::domain::{BlogDraft, BlogPatch, BlogPost, Page};
use quill_shared::ResponseWrapper;
use quill_shared::dto::{BlogResponse, CreateBlogRequest, PageResponse, UpdateBlogRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: BlogPost) -> BlogResponse {
    BlogResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn to_page_response(page: Page<BlogPost>) -> PageResponse<BlogResponse> {
    let total_pages = page.total_pages();
    PageResponse {
        total: page.total,
        page: page.page,
        size: page.size,
        total_pages,
        items: page.items.into_iter().map(to_response).collect(),
    }
}

fn require_non_blank(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required.")));
    }
    Ok(())
}

/// POST /api/blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    require_non_blank(&req.title, "Title")?;
    require_non_blank(&req.content, "Content")?;
    require_non_blank(&req.author, "Author")?;

    let created = state
        .blogs
        .create(BlogDraft {
            title: req.title,
            content: req.content,
            author: req.author,
        })
        .await?;

    tracing::info!(id = %created.id, "Blog created successfully");

    Ok(HttpResponse::Created().json(ResponseWrapper::created(
        "Your blog has been created successfully!",
        to_response(created),
    )))
}

/// GET /api/blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state.blogs.get_by_id(id).await?;

    Ok(HttpResponse::Ok().json(ResponseWrapper::success(
        "We found your blog!",
        to_response(post),
    )))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    page: Option<u64>,
    size: Option<u64>,
}

/// GET /api/blogs?page=&size=
pub async fn list_blogs(
    state: web::Data<AppState>,
    query: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let page = query.page.unwrap_or(0);
    let size = query.size.unwrap_or(10);

    if size == 0 {
        return Err(AppError::BadRequest("Page size must be at least 1.".into()));
    }

    let result = state.blogs.get_page(page, size).await?;
    tracing::info!(count = result.items.len(), total = result.total, "Fetched blogs");

    Ok(HttpResponse::Ok().json(ResponseWrapper::success(
        "Here are all the blogs!",
        to_page_response(result),
    )))
}

/// PUT /api/blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    // Fields may be omitted, but a supplied field must not be blank:
    // required text fields stay non-empty for the life of the post.
    if let Some(title) = &req.title {
        require_non_blank(title, "Title")?;
    }
    if let Some(content) = &req.content {
        require_non_blank(content, "Content")?;
    }
    if let Some(author) = &req.author {
        require_non_blank(author, "Author")?;
    }

    let updated = state
        .blogs
        .update(
            id,
            BlogPatch {
                title: req.title,
                content: req.content,
                author: req.author,
            },
        )
        .await?;

    tracing::info!(id = %id, "Blog updated successfully");

    Ok(HttpResponse::Ok().json(ResponseWrapper::success(
        "Your blog has been updated successfully!",
        to_response(updated),
    )))
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.blogs.delete(id).await?;
    tracing::info!(id = %id, "Blog deleted successfully");

    Ok(HttpResponse::Ok().json(ResponseWrapper::success(
        "Your blog has been deleted successfully!",
        format!("Deleted blog with ID: {id}"),
    )))
}

/// GET /api/blogs/{id}/summary
pub async fn get_blog_summary(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let summary = state.blogs.summarize(id).await?;

    Ok(HttpResponse::Ok().json(ResponseWrapper::success(
        "Here's the summary of your blog",
        summary,
    )))
}
