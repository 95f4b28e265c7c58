//! Server-side HTML for the form and result page
//!
//! Every value that came from the user or the knowledge API goes through
//! [`escape`] before it is written into the page.

use std::fmt::Write;

use crate::models::PlaceRecord;
use crate::planner::Recommendation;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem;color:#222}\
form{display:flex;gap:.5rem;flex-wrap:wrap;margin-bottom:2rem}\
input{padding:.4rem}\
.scores{display:flex;gap:1rem}\
.score{background:#f2f5f9;border-radius:8px;padding:.75rem 1rem}\
.place{border-bottom:1px solid #ddd;padding:.75rem 0}\
.free{color:#1b7f3b;font-weight:600}\
.error{color:#b00020}";

/// Escape text for use in element content and quoted attributes
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Full page: the search form, followed by the result when there is one
#[must_use]
pub fn page(selected_city: Option<&str>, result: Option<&Recommendation>) -> String {
    let mut html = String::new();
    let city_value = selected_city.map(escape).unwrap_or_default();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Best Time to Travel</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>\n</head>\n<body>");
    html.push_str("<h1>Best Time to Travel</h1>\n");
    let _ = writeln!(
        html,
        "<form method=\"post\" action=\"/\">\
<input name=\"city\" placeholder=\"City\" value=\"{city_value}\">\
<input name=\"lat\" placeholder=\"Latitude\">\
<input name=\"lon\" placeholder=\"Longitude\">\
<button type=\"submit\">Find the best month</button></form>"
    );

    if let Some(result) = result {
        write_result(&mut html, &city_value, result);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn write_result(html: &mut String, city: &str, result: &Recommendation) {
    let analysis = &result.analysis;
    let _ = writeln!(
        html,
        "<section id=\"result\">\n<h2>Best month to visit {city}: {}</h2>\n<p>Location: {:.2}, {:.2}</p>",
        analysis.best_month.name(),
        analysis.lat,
        analysis.lon
    );

    let _ = writeln!(
        html,
        "<div class=\"scores\">\
<div class=\"score\">Weather <strong>{}</strong>/100</div>\
<div class=\"score\">Crowds <strong>{}</strong>/100</div>\
<div class=\"score\">Cost <strong>{}</strong>/100</div></div>",
        analysis.scores.weather, analysis.scores.crowd, analysis.scores.cost
    );

    html.push_str("<h3>Travel tips</h3>\n<ul class=\"tips\">\n");
    for tip in &result.tips {
        let _ = writeln!(html, "<li>{}</li>", escape(tip));
    }
    html.push_str("</ul>\n");

    html.push_str("<h3>Nearby attractions</h3>\n");
    for place in &result.attractions {
        write_place(html, place);
    }

    html.push_str("<h3>Where to stay</h3>\n<ul class=\"hotels\">\n");
    for (label, url) in result.hotels.entries() {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{label}</a></li>",
            escape(url)
        );
    }
    html.push_str("</ul>\n</section>\n");
}

fn write_place(html: &mut String, place: &PlaceRecord) {
    let class = if place.is_error() { "place error" } else { "place" };
    let _ = write!(
        html,
        "<article class=\"{class}\">\n<h4>{}</h4>\n<p class=\"distance\">{}</p>\n<p>{}</p>\n",
        escape(&place.title),
        place.format_distance(),
        escape(&place.description)
    );

    if place.wiki_url != "#" {
        let _ = writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">Read more</a>",
            escape(&place.wiki_url)
        );
    }

    if place.is_free {
        html.push_str("<span class=\"free\">Free</span>\n");
    }

    let _ = writeln!(
        html,
        "<a class=\"ticket\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>\n</article>",
        escape(&place.ticket_link),
        escape(&place.ticket_text)
    );
}
