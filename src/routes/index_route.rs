use actix_web::{get, web, HttpResponse};
use askama::Template;
use tokio::sync::Mutex;

use crate::{
    render::{page_view, PageView},
    services::Controller,
};

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub view: PageView,
}

pub fn render_page(controller: &Controller) -> HttpResponse {
    let template = PageTemplate {
        view: page_view(controller),
    };

    HttpResponse::Ok().body(template.render().unwrap())
}

#[get("/")]
async fn index(controller: web::Data<Mutex<Controller>>) -> HttpResponse {
    let controller = controller.lock().await;
    render_page(&controller)
}
