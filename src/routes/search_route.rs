use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{routes::index_route::render_page, services::Controller};

#[derive(Deserialize)]
pub struct SearchForm {
    pub query: String,
}

#[post("/search")]
async fn search(
    controller: web::Data<Mutex<Controller>>,
    form: web::Form<SearchForm>,
) -> HttpResponse {
    let mut controller = controller.lock().await;
    if let Err(e) = controller.submit_search(&form.query).await {
        log::info!("Search surfaced an error: {}", e);
    }

    render_page(&controller)
}

#[derive(Deserialize)]
pub struct SelectForm {
    pub id: String,
}

#[post("/select")]
async fn select(
    controller: web::Data<Mutex<Controller>>,
    form: web::Form<SelectForm>,
) -> HttpResponse {
    let delay = {
        let mut controller = controller.lock().await;
        match controller.select_candidate(&form.id) {
            true => Some(controller.detail_delay()),
            false => None,
        }
    };

    // The lock is released during the cosmetic pause; if another selection
    // lands in the meantime, commit_selection promotes that one instead.
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
        controller.lock().await.commit_selection();
    }

    let controller = controller.lock().await;
    render_page(&controller)
}
