use blogdesk_shared::{
    error::ApiError,
    list_query::{encode_params, ListConfig, ListQuery, ListResponse, Page},
    session::Session,
    submit::ArticleGateway,
    Article, ArticlePayload, Category, CategoryPayload, LoginRequest, LoginResponse, Profile,
    RegisterRequest, UploadResponse,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{browser, config::API_BASE};

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn url_with(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        url(path)
    } else {
        format!("{}?{}", url(path), encode_params(params))
    }
}

/// Attach `Authorization: Bearer <token>` when a session cookie exists.
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match browser::read_session().token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn with_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    authorized(builder)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::InvalidResponse(format!("Serialize error: {:?}", e)))
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    checked(response).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = authorized(Request::get(url))
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    checked(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))
}

/// 获取文章列表，支持搜索、分类过滤与分页
pub async fn fetch_articles(query: &ListQuery, config: &ListConfig) -> Result<Page<Article>, ApiError> {
    let reply: ListResponse<Article> =
        get_json(&url_with("/articles", &query.api_params(config))).await?;
    Ok(reply.into_page())
}

/// 获取文章详情
pub async fn fetch_article(id: &str) -> Result<Article, ApiError> {
    get_json(&url(&format!("/articles/{}", urlencoding::encode(id)))).await
}

/// Up to `limit` other articles from the same category as `article`.
pub async fn fetch_related(
    article: &Article,
    pool: usize,
    limit: usize,
) -> Result<Vec<Article>, ApiError> {
    let mut params = vec![("page", "1".to_string()), ("limit", pool.to_string())];
    if let Some(category) = article.resolved_category_id() {
        params.push(("category", category.to_string()));
    }
    let reply: ListResponse<Article> = get_json(&url_with("/articles", &params)).await?;
    Ok(article.related(&reply.data, limit))
}

pub async fn create_article(payload: &ArticlePayload) -> Result<(), ApiError> {
    send(with_json(Request::post(&url("/articles")), payload)?).await?;
    Ok(())
}

pub async fn update_article(id: &str, payload: &ArticlePayload) -> Result<(), ApiError> {
    let target = url(&format!("/articles/{}", urlencoding::encode(id)));
    send(with_json(Request::put(&target), payload)?).await?;
    Ok(())
}

pub async fn delete_article(id: &str) -> Result<(), ApiError> {
    let target = url(&format!("/articles/{}", urlencoding::encode(id)));
    let request = authorized(Request::delete(&target))
        .build()
        .map_err(|e| ApiError::InvalidResponse(format!("{:?}", e)))?;
    send(request).await?;
    Ok(())
}

/// Upload a thumbnail as multipart field `image`; returns its public URL.
pub async fn upload_image(file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::InvalidResponse(format!("FormData error: {:?}", e)))?;
    form.append_with_blob("image", file)
        .map_err(|e| ApiError::InvalidResponse(format!("FormData error: {:?}", e)))?;
    // The browser sets the multipart boundary itself.
    let request = authorized(Request::post(&url("/upload")))
        .body(form)
        .map_err(|e| ApiError::InvalidResponse(format!("{:?}", e)))?;
    let reply: UploadResponse = send(request)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    if reply.image_url.trim().is_empty() {
        return Err(ApiError::InvalidResponse("upload returned no imageUrl".to_string()));
    }
    Ok(reply.image_url)
}

/// 获取分类列表（分页）
pub async fn fetch_categories(
    query: &ListQuery,
    config: &ListConfig,
) -> Result<Page<Category>, ApiError> {
    let reply: ListResponse<Category> =
        get_json(&url_with("/categories", &query.api_params(config))).await?;
    Ok(reply.into_page())
}

/// Every category for dropdowns, in one large page.
pub async fn fetch_category_options(limit: usize) -> Result<Vec<Category>, ApiError> {
    let params = [("page", "1".to_string()), ("limit", limit.to_string())];
    let reply: ListResponse<Category> = get_json(&url_with("/categories", &params)).await?;
    Ok(reply.data)
}

pub async fn create_category(payload: &CategoryPayload) -> Result<(), ApiError> {
    send(with_json(Request::post(&url("/categories")), payload)?).await?;
    Ok(())
}

pub async fn update_category(id: &str, payload: &CategoryPayload) -> Result<(), ApiError> {
    let target = url(&format!("/categories/{}", urlencoding::encode(id)));
    send(with_json(Request::put(&target), payload)?).await?;
    Ok(())
}

pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    let target = url(&format!("/categories/{}", urlencoding::encode(id)));
    let request = authorized(Request::delete(&target))
        .build()
        .map_err(|e| ApiError::InvalidResponse(format!("{:?}", e)))?;
    send(request).await?;
    Ok(())
}

/// Exchange credentials for a session. A reply without token or role is
/// rejected.
pub async fn login(request: &LoginRequest) -> Result<Session, ApiError> {
    let reply: LoginResponse = send(with_json(Request::post(&url("/auth/login")), request)?)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    Session::from_login(reply)
        .ok_or_else(|| ApiError::InvalidResponse("login reply lacks token or role".to_string()))
}

pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    send(with_json(Request::post(&url("/auth/register")), request)?).await?;
    Ok(())
}

pub async fn fetch_profile() -> Result<Profile, ApiError> {
    get_json(&url("/auth/profile")).await
}

/// Submit-pipeline gateway over the REST API.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpGateway;

impl ArticleGateway for HttpGateway {
    type File = web_sys::File;

    async fn upload_image(&self, file: &Self::File) -> Result<String, ApiError> {
        upload_image(file).await
    }

    async fn create_article(&self, payload: &ArticlePayload) -> Result<(), ApiError> {
        create_article(payload).await
    }

    async fn update_article(&self, id: &str, payload: &ArticlePayload) -> Result<(), ApiError> {
        update_article(id, payload).await
    }
}
