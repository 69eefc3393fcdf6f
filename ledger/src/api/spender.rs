use crate::api::context::RequestContext;
use crate::api::error::{error_response, parse_id, RequestError};
use crate::domain::models::SpenderBody;
use crate::domain::pagination::PageRequest;
use crate::service::spender::SpenderService;
use crate::service::AppError;
use actix_web::{get, post, routes, web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct PageQuery {
    page: Option<String>,
    per_page: Option<String>,
}

#[post("/spenders")]
pub async fn create_spender(
    ctx: RequestContext,
    req_body: String,
    service: web::Data<SpenderService>,
) -> impl Responder {
    // Ahead of body parsing: a disabled create is 403 whatever the payload.
    // SpenderService::create repeats the check for callers outside HTTP.
    if !service.create_enabled() {
        return error_response(&ctx, AppError::FeatureDisabled.into(), "create spender rejected");
    }

    let body = match serde_json::from_str::<SpenderBody>(req_body.as_str()) {
        Ok(body) => body,
        Err(err) => return error_response(&ctx, RequestError::from(err).into(), "bad request body"),
    };

    match service.create(body).await {
        Ok(spender) => {
            log::info!(request_id:% = ctx.request_id, id = spender.id; "create successfully");
            HttpResponse::Created().json(spender)
        }
        Err(err) => error_response(&ctx, err, "create spender failed"),
    }
}

#[get("/spenders")]
pub async fn get_spenders(ctx: RequestContext, service: web::Data<SpenderService>) -> impl Responder {
    match service.all().await {
        Ok(spenders) => HttpResponse::Ok().json(spenders),
        Err(err) => error_response(&ctx, err, "list spenders failed"),
    }
}

#[get("/spenders/{id}")]
pub async fn get_spender(
    ctx: RequestContext,
    id: web::Path<String>,
    service: web::Data<SpenderService>,
) -> impl Responder {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return error_response(&ctx, err.into(), "id parameter is invalid"),
    };

    match service.find(id).await {
        Ok(spender) => HttpResponse::Ok().json(spender),
        Err(err) => error_response(&ctx, err, "get spender failed"),
    }
}

#[routes]
#[get("/spenders/{id}/summary")]
#[get("/spenders/{id}/transactions/summary")]
pub async fn get_spender_summary(
    ctx: RequestContext,
    id: web::Path<String>,
    service: web::Data<SpenderService>,
) -> impl Responder {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return error_response(&ctx, err.into(), "id parameter is invalid"),
    };

    match service.summary(id).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => error_response(&ctx, err, "get transaction summary failed"),
    }
}

#[get("/spenders/{id}/transactions")]
pub async fn get_spender_transactions(
    ctx: RequestContext,
    id: web::Path<String>,
    query: web::Query<PageQuery>,
    service: web::Data<SpenderService>,
) -> impl Responder {
    let page = match PageRequest::parse(query.page.as_deref(), query.per_page.as_deref()) {
        Ok(page) => page,
        Err(err) => return error_response(&ctx, err, "page query is invalid"),
    };
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return error_response(&ctx, err.into(), "id parameter is invalid"),
    };

    match service.transactions(id, page).await {
        Ok(resp) => HttpResponse::Ok().json(resp),
        Err(err) => error_response(&ctx, err, "list spender transactions failed"),
    }
}
