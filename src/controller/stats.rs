use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use super::AppState;
use crate::score::{RoundStats, export_rows};
use crate::view::stats::{render_export_page, render_stats_page};

fn want_json(query: &HashMap<String, String>) -> bool {
    match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}

pub async fn stats(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let json_wanted = want_json(&query);
    let session = match state.session.lock() {
        Ok(session) => session,
        Err(_) => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": "entry session lock poisoned"}));
        }
    };
    match session.round() {
        Some(round) => {
            let stats = RoundStats::compute(round);
            if json_wanted {
                HttpResponse::Ok().json(stats)
            } else {
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(render_stats_page(round, &stats).into_string())
            }
        }
        None => HttpResponse::NotFound().json(json!({"error": "no round has been started"})),
    }
}

pub async fn export(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let json_wanted = want_json(&query);
    let session = match state.session.lock() {
        Ok(session) => session,
        Err(_) => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": "entry session lock poisoned"}));
        }
    };
    match session.round() {
        Some(round) => {
            let rows = export_rows(round);
            if json_wanted {
                HttpResponse::Ok().json(rows)
            } else {
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(render_export_page(round, &rows).into_string())
            }
        }
        None => HttpResponse::NotFound().json(json!({"error": "no round has been started"})),
    }
}
