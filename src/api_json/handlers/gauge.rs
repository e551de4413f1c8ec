use actix_web::{web, HttpResponse};

use crate::algorithm::{display_label, gauge_color};
use crate::api_json::{parse_number, query_value};
use crate::error::QueryError;
use crate::render::{gauge_svg, GaugeSpec, SKILL_GAUGE_SIZE};
use crate::server::AppState;

const MAX_GAUGE_SIZE: u32 = 1024;

/// GET /gauge.svg?value=72.5&label=A-SK-Reading&size=250
/// Single gauge image. `value` is a percentage; `label` goes through the same
/// normalization as the dashboard titles.
pub async fn gauge_svg_handler(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, actix_web::Error> {
    let value: f64 = parse_number(&query, "value")?.unwrap_or(0.0);
    if !value.is_finite() {
        return Err(QueryError::InvalidNumber {
            param: "value".to_string(),
            value: value.to_string(),
        }
        .into());
    }
    let size = parse_number::<u32>(&query, "size")?
        .unwrap_or(SKILL_GAUGE_SIZE)
        .min(MAX_GAUGE_SIZE);
    let title = display_label(query_value(&query, "label").unwrap_or(""), state.variant.strip_bare_prefixes);

    let svg = gauge_svg(&GaugeSpec {
        value,
        title: &title,
        color: gauge_color(value, state.variant.color_coded),
        size,
    })?;
    Ok(HttpResponse::Ok().content_type("image/svg+xml").body(svg))
}
