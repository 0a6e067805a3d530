use actix_web::{post, web, HttpResponse};
use tokio::sync::Mutex;

use crate::{routes::index_route::render_page, services::Controller};

#[post("/reset")]
async fn reset(controller: web::Data<Mutex<Controller>>) -> HttpResponse {
    let mut controller = controller.lock().await;
    controller.reset_search();
    render_page(&controller)
}
