use actix_web::{post, web, HttpResponse};
use tokio::sync::Mutex;

use crate::{routes::index_route::render_page, services::Controller};

#[post("/compare")]
async fn compare(controller: web::Data<Mutex<Controller>>) -> HttpResponse {
    let mut controller = controller.lock().await;
    if let Err(e) = controller.fetch_comparison().await {
        log::info!("Price comparison surfaced an error: {}", e);
    }

    render_page(&controller)
}
