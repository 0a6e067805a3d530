use std::net::TcpListener;

use actix_web::{
    dev::Server,
    middleware::Logger,
    web::Data,
    App, HttpServer,
};
use tokio::sync::Mutex;

use crate::{
    routes::{compare_route, index_route, reset_route, search_route},
    services::Controller,
};

pub fn run(listener: TcpListener, controller: Controller) -> Result<Server, std::io::Error> {
    // One UI session per process; route handlers serialize on the mutex.
    let controller = Data::new(Mutex::new(controller));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(index_route::index)
            .service(search_route::search)
            .service(search_route::select)
            .service(compare_route::compare)
            .service(reset_route::reset)
            .app_data(controller.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
