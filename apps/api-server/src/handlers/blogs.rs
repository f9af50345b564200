//! Blog CRUD handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Blog, BlogId, BlogPatch, NewBlog, last_updated};
use blog_shared::{
    ApiResponse, BlogResponse, CountResponse, CreateBlogRequest, DeletedBlog, ListResponse,
    UpdateBlogRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn blog_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        content: blog.content,
        created_at: blog.created_at,
        updated_at: blog.updated_at,
    }
}

/// GET /blogs
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.list().await?;
    let updated_at = last_updated(&blogs);
    let data = blogs.into_iter().map(blog_response).collect();

    Ok(HttpResponse::Ok().json(ListResponse::ok(data, updated_at)))
}

/// GET /blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<BlogId>,
) -> AppResult<HttpResponse> {
    let blog = state.blogs.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(blog_response(blog))))
}

/// POST /blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_blog = NewBlog::new(req.title, req.content)?;

    let blog = state.blogs.insert(new_blog).await?;
    tracing::info!(blog_id = blog.id, "Blog created");

    Ok(HttpResponse::Created().json(ApiResponse::created(blog_response(blog), "Blog created")))
}

/// PATCH /blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<BlogId>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let patch = BlogPatch::new(req.title, req.content)?;

    let blog = state.blogs.update(id, patch).await?;
    tracing::info!(blog_id = id, "Blog updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        blog_response(blog),
        "Blog updated",
    )))
}

/// DELETE /blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<BlogId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.blogs.delete_by_id(id).await?;
    tracing::info!(blog_id = id, "Blog deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        DeletedBlog { id },
        "Blog deleted",
    )))
}

/// DELETE /blogs
///
/// Unguarded: confirmation is the caller's responsibility.
pub async fn delete_all_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let count = state.blogs.delete_all().await?;
    tracing::warn!(count, "All blogs deleted");

    Ok(HttpResponse::Ok().json(CountResponse::ok(count, "All blogs deleted")))
}
