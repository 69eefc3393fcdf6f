use crate::api::context::RequestContext;
use crate::api::error::{error_response, parse_id, RequestError};
use crate::domain::models::TransactionBody;
use crate::service::transaction::TransactionService;
use actix_web::{get, post, put, web, HttpResponse, Responder};

fn parse_body(req_body: &str) -> Result<TransactionBody, RequestError> {
    Ok(serde_json::from_str::<TransactionBody>(req_body)?)
}

#[post("/transactions")]
pub async fn create_transaction(
    ctx: RequestContext,
    req_body: String,
    service: web::Data<TransactionService>,
) -> impl Responder {
    let body = match parse_body(&req_body) {
        Ok(body) => body,
        Err(err) => return error_response(&ctx, err.into(), "bad request body"),
    };

    match service.create(body).await {
        Ok(tx) => {
            log::info!(request_id:% = ctx.request_id, id = tx.id, spender_id = tx.spender_id; "create successfully");
            HttpResponse::Created().json(tx)
        }
        Err(err) => error_response(&ctx, err, "create transaction failed"),
    }
}

#[put("/transactions/{id}")]
pub async fn update_transaction(
    ctx: RequestContext,
    id: web::Path<String>,
    req_body: String,
    service: web::Data<TransactionService>,
) -> impl Responder {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return error_response(&ctx, err.into(), "id parameter is invalid"),
    };
    let body = match parse_body(&req_body) {
        Ok(body) => body,
        Err(err) => return error_response(&ctx, err.into(), "bad request body"),
    };

    match service.update(id, body).await {
        Ok(tx) => {
            log::info!(request_id:% = ctx.request_id, id = tx.id; "update successfully");
            HttpResponse::Ok().json(tx)
        }
        Err(err) => error_response(&ctx, err, "update transaction failed"),
    }
}

#[get("/transactions")]
pub async fn get_transactions(
    ctx: RequestContext,
    service: web::Data<TransactionService>,
) -> impl Responder {
    match service.all().await {
        Ok(transactions) => HttpResponse::Ok().json(transactions),
        Err(err) => error_response(&ctx, err, "list transactions failed"),
    }
}
