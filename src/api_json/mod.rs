use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;

use crate::error::{QueryError, RenderError};
use crate::models::FilterSelection;

pub mod handlers;

/// Builds the selector state from raw query pairs.
///
/// # Accepted parameters
/// - `student`: single username
/// - `tests`, `countries`, `versions`: repeatable, one value per key
///   (`tests=EST I&tests=ACT`); values are taken whole, commas included
///
/// Blank values and unknown parameters are ignored.
pub fn selection_from_pairs(pairs: &[(String, String)]) -> FilterSelection {
    let mut selection = FilterSelection::default();
    for (key, value) in pairs {
        match key.as_str() {
            "student" => {
                let v = value.trim();
                selection.student = if v.is_empty() { None } else { Some(v.to_string()) };
            }
            "tests" | "test" => push_value(&mut selection.tests, value),
            "countries" | "country" => push_value(&mut selection.countries, value),
            "versions" | "version" => push_value(&mut selection.versions, value),
            _ => {}
        }
    }
    selection
}

fn push_value(list: &mut Vec<String>, value: &str) {
    let v = value.trim();
    if !v.is_empty() {
        list.push(v.to_string());
    }
}

/// Last value of `name`, if present and non-blank.
pub fn query_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

pub fn parse_number<T: std::str::FromStr>(pairs: &[(String, String)], name: &str) -> Result<Option<T>, QueryError> {
    match query_value(pairs, name) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| QueryError::InvalidNumber {
            param: name.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub rows: usize,
    pub source: Option<String>,
}

impl ResponseError for QueryError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(json!({"error": self.to_string()}))
    }
}

impl ResponseError for RenderError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({"error": self.to_string()}))
    }
}
