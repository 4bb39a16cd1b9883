//! HTML rendering of a route response into the results region.
//!
//! Sections appear in a fixed order (overview, category tags, places, tips) and
//! each one is skipped when its data is absent or empty. Every externally
//! supplied string goes through [`escape_html`] before interpolation.

use std::fmt::Write as _;

use shared::{domain::Place, protocol::RouteResponse};

const MINUTES_UNKNOWN: &str = "не указано";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_opt(text: Option<&str>) -> String {
    text.map(escape_html).unwrap_or_default()
}

pub fn render_route(route: &RouteResponse) -> String {
    let mut html = String::new();

    if let Some(overview) = route.overview() {
        render_overview(&mut html, route, overview);
    }

    let categories = route.interest_categories();
    if !categories.is_empty() {
        let tags = categories
            .iter()
            .map(|category| {
                format!(
                    r#"<span class="interest-tag">{}</span>"#,
                    escape_html(category)
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            html,
            r#"<div style="margin-bottom: 24px;"><strong style="display: block; margin-bottom: 12px;">🏷️ Подобрано по категориям:</strong><div class="interest-tags">{tags}</div></div>"#
        );
    }

    let places = route.places();
    if !places.is_empty() {
        html.push_str(
            r#"<h3 style="margin-top: 24px; margin-bottom: 16px;">🗺️ Маршрут</h3>"#,
        );
        for place in places {
            render_place(&mut html, place);
        }
    }

    let tips = route.tips();
    if !tips.is_empty() {
        html.push_str(r#"<div class="tips-section"><h4>💡 Полезные советы</h4><ul>"#);
        for tip in tips {
            let _ = write!(html, "<li>{}</li>", escape_html(tip));
        }
        html.push_str("</ul></div>");
    }

    html
}

fn render_overview(html: &mut String, route: &RouteResponse, overview: &str) {
    let minutes = route
        .total_minutes()
        .map(|m| escape_html(&m.to_string()))
        .unwrap_or_else(|| MINUTES_UNKNOWN.to_string());
    let _ = write!(
        html,
        concat!(
            r#"<div class="route-overview"><h3>🎯 Описание маршрута</h3><p>{overview}</p>"#,
            r#"<div class="route-stats">"#,
            r#"<div class="stat-item"><span>⏱️</span><span><strong>Общее время:</strong> {minutes} минут</span></div>"#,
            r#"<div class="stat-item"><span>📍</span><span><strong>Мест:</strong> {count}</span></div>"#,
            "</div></div>"
        ),
        overview = escape_html(overview),
        minutes = minutes,
        count = route.places().len(),
    );
}

fn render_place(html: &mut String, place: &Place) {
    let order = place
        .order
        .as_ref()
        .map(|o| escape_html(&o.to_string()))
        .unwrap_or_default();
    let _ = write!(
        html,
        concat!(
            r#"<div class="route-place"><div class="place-header">"#,
            r#"<div class="place-number">{order}</div>"#,
            r#"<div class="place-info"><h4>{name}</h4><div class="place-address">📍 {address}</div>"#
        ),
        order = order,
        name = escape_opt(place.name.as_deref()),
        address = escape_opt(place.address.as_deref()),
    );
    if let Some(minutes) = place.visit_minutes() {
        let _ = write!(
            html,
            r#"<span class="place-time">⏱️ {} минут</span>"#,
            escape_html(&minutes.to_string())
        );
    }
    html.push_str("</div></div>");

    if let Some(reason) = place.why_chosen() {
        let _ = write!(
            html,
            r#"<div class="place-reason"><strong>🎯 Почему это место:</strong><p>{}</p></div>"#,
            escape_html(reason)
        );
    }
    if let Some(todo) = place.what_to_see() {
        let _ = write!(
            html,
            r#"<div class="place-todo"><strong>👀 Что посмотреть:</strong><p>{}</p></div>"#,
            escape_html(todo)
        );
    }
    html.push_str("</div>");
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
