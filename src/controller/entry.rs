use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use super::AppState;
use crate::entry::EntrySession;
use crate::error::{EntryError, ValidationError};
use crate::view::entry::render_entry_page;

// Helper to get a trimmed form parameter with a default of ""
fn get_param_str<'a>(form: &'a HashMap<String, String>, key: &str) -> &'a str {
    form.get(key).map(|s| s.as_str()).unwrap_or("").trim()
}

/// Required whole-number field. A blank field and an unparseable one get
/// distinct messages, each echoing what was entered.
fn parse_param_u32(
    form: &HashMap<String, String>,
    key: &str,
    field: &'static str,
) -> Result<u32, ValidationError> {
    let raw = get_param_str(form, key);
    if raw.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Optional numeric field: blank means not supplied, anything else has to
/// parse.
fn parse_param_f64(
    form: &HashMap<String, String>,
    key: &str,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    let raw = get_param_str(form, key);
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

fn with_session<F>(state: &AppState, f: F) -> HttpResponse
where
    F: FnOnce(&mut EntrySession) -> HttpResponse,
{
    match state.session.lock() {
        Ok(mut session) => f(&mut session),
        Err(_) => HttpResponse::InternalServerError()
            .json(json!({"error": "entry session lock poisoned"})),
    }
}

fn html_page(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Validation failures re-render the form so the actor can resupply the
/// field. Sequence failures mean the posted form no longer matches the
/// session state (stale tab, double submit); those are surfaced as a
/// conflict, not retried.
fn entry_error_response(session: &EntrySession, err: &EntryError) -> HttpResponse {
    match err {
        EntryError::Validation(e) => HttpResponse::BadRequest()
            .content_type("text/html; charset=utf-8")
            .body(render_entry_page(session, Some(&e.to_string())).into_string()),
        EntryError::Sequence(e) => {
            HttpResponse::Conflict().json(json!({"error": e.to_string()}))
        }
    }
}

pub async fn entry_page(state: Data<AppState>) -> impl Responder {
    with_session(&state, |session| html_page(render_entry_page(session, None)))
}

pub async fn begin_round(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let player = get_param_str(&form, "player");
    let course = get_param_str(&form, "course");

    with_session(&state, |session| {
        let holes_played = match parse_param_u32(&form, "holes_played", "holes played") {
            Ok(v) => v,
            Err(e) => return entry_error_response(session, &e.into()),
        };
        let course_par = match parse_param_u32(&form, "course_par", "course par") {
            Ok(v) => v,
            Err(e) => return entry_error_response(session, &e.into()),
        };
        match session.begin_round(player, course, holes_played, course_par) {
            Ok(()) => see_other("/"),
            Err(e) => entry_error_response(session, &e),
        }
    })
}

pub async fn begin_hole(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    with_session(&state, |session| {
        let hole_number = match parse_param_u32(&form, "hole_number", "hole number") {
            Ok(v) => v,
            Err(e) => return entry_error_response(session, &e.into()),
        };
        let par = match parse_param_u32(&form, "par", "par") {
            Ok(v) => v,
            Err(e) => return entry_error_response(session, &e.into()),
        };
        let yardage = match parse_param_u32(&form, "yardage", "yardage") {
            Ok(v) => v,
            Err(e) => return entry_error_response(session, &e.into()),
        };
        match session.begin_hole(hole_number, par, yardage) {
            Ok(()) => see_other("/"),
            Err(e) => entry_error_response(session, &e),
        }
    })
}

pub async fn add_shot(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let end_lie = get_param_str(&form, "end_lie").to_string();

    with_session(&state, |session| {
        let distance = match parse_param_f64(&form, "distance", "shot distance") {
            Ok(v) => v,
            Err(e) => return entry_error_response(session, &e.into()),
        };
        let distance_to_hole = match parse_param_f64(&form, "distance_to_hole", "distance to hole")
        {
            Ok(v) => v,
            Err(e) => return entry_error_response(session, &e.into()),
        };
        match session.record_shot(&end_lie, distance, distance_to_hole) {
            Ok(_) => see_other("/"),
            Err(e) => entry_error_response(session, &e),
        }
    })
}

pub async fn discard_hole(state: Data<AppState>) -> impl Responder {
    with_session(&state, |session| {
        session.discard_hole();
        see_other("/")
    })
}
