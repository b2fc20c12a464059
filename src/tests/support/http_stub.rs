use actix_web::{web, App, HttpServer};

/// Starts a throwaway HTTP server on an ephemeral port for adapter tests
/// and returns its base URL. Must be called inside an actix runtime.
pub fn spawn_stub(configure: fn(&mut web::ServiceConfig)) -> String {
    let server = HttpServer::new(move || App::new().configure(configure))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind stub server");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}
