use actix_web::{get, HttpResponse};

pub const LIVENESS_MESSAGE: &str = "HealCoord server is running!";

#[get("/")]
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}
