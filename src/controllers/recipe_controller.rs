use actix_web::{post, web, HttpResponse};

use crate::error::Result;
use crate::model::{GenerateRequest, GenerateResponse};
use crate::pipelines::generate_recipes;
use crate::server::AppState;

/// A missing or unparseable body counts as an empty ingredient list.
#[post("/generate")]
pub async fn generate(
    state: web::Data<AppState>,
    payload: Option<web::Json<GenerateRequest>>,
) -> Result<HttpResponse> {
    let request = payload.map(web::Json::into_inner).unwrap_or_default();
    let recipes = generate_recipes(
        state.provider.as_ref(),
        state.store.as_ref(),
        &request.ingredients,
    )
    .await?;

    Ok(HttpResponse::Ok().json(GenerateResponse { recipes }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(generate);
}
