use rusty_rounds::args;
use rusty_rounds::controller::{AppState, entry, stats};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    let bind_addr = (args.bind.clone(), args.port);
    let state = Data::new(AppState::new());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(entry::entry_page))
            .route("/round", web::post().to(entry::begin_round))
            .route("/hole", web::post().to(entry::begin_hole))
            .route("/hole/discard", web::post().to(entry::discard_hole))
            .route("/shot", web::post().to(entry::add_shot))
            .route("/stats", web::get().to(stats::stats))
            .route("/export", web::get().to(stats::export))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", args.static_dir.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await?;
    Ok(())
}
