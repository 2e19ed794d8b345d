//! Standalone Leaflet page formatter
//!
//! Produces a single HTML document that draws the scene with Leaflet: the
//! tile layer from `[map]`, every feature in drawing order, and the fitted
//! (or initial) view. Notices and the dev panel are rendered next to the map.

use crate::config::Config;
use crate::error::Result;
use crate::format::{OutputFormatter, Report};
use crate::map::render::escape_html as escape;
use crate::map::Viewport;
use crate::page::MapRegion;
use serde_json::json;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const STYLE: &str = "#map { height: 600px; } .notice { color: #b00; } \
    .dev-response { white-space: pre; font-family: monospace; }";

const DRAW_SCRIPT: &str = r#"
const scene = JSON.parse(document.getElementById("scene").textContent);
const map = L.map("map");
L.tileLayer(scene.tiles.url, {
  attribution: scene.tiles.attribution, subdomains: "abcd", maxZoom: 19,
}).addTo(map);
for (const f of scene.features) {
  const s = f.style;
  const opts = {
    color: s.color, fillColor: s.fill_color, fillOpacity: s.fill_opacity, weight: s.weight,
  };
  let layer;
  if (f.shape.kind === "circle") {
    const c = f.shape.center;
    layer = L.circle([c.lat, c.lng], Object.assign({radius: f.shape.radius_meters}, opts));
  } else if (f.shape.kind === "polygon") {
    layer = L.polygon(f.shape.rings.map(r => r.map(c => [c.lat, c.lng])), opts);
  } else {
    layer = L.circleMarker([f.shape.position.lat, f.shape.position.lng], opts);
  }
  layer.addTo(map);
  if (f.popup) { layer.bindPopup(f.popup); }
}
if (scene.viewport.mode === "fitted") {
  const b = scene.viewport.bounds;
  map.fitBounds([[b.south, b.west], [b.north, b.east]]);
} else {
  map.setView([scene.viewport.center.lat, scene.viewport.center.lng], scene.viewport.zoom);
}
"#;

/// HTML formatter - outputs a self-contained Leaflet map page
pub struct HtmlFormatter;

impl OutputFormatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Standalone Leaflet map page"
    }

    fn format(&self, report: &Report, config: &Config) -> Result<String> {
        let page = &report.page;
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"he\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "  <title>{} {}</title>\n",
            escape(&report.query.street),
            escape(&report.query.house_number)
        ));
        html.push_str(&format!("  <link rel=\"stylesheet\" href=\"{}\">\n", LEAFLET_CSS));
        html.push_str(&format!("  <style>{}</style>\n", STYLE));
        html.push_str("</head>\n<body>\n");

        html.push_str(&format!(
            "  <h1>{} {} &middot; {}m</h1>\n",
            escape(&report.query.street),
            escape(&report.query.house_number),
            escape(&report.query.radius)
        ));

        for notice in &page.notices {
            html.push_str(&format!("  <p class=\"notice\">{}</p>\n", escape(notice)));
        }

        match &page.map_region {
            MapRegion::Map { map } => {
                let viewport = match map.viewport() {
                    Viewport::Centered { center, zoom } => {
                        json!({"mode": "centered", "center": center, "zoom": zoom})
                    }
                    Viewport::Fitted { bounds } => json!({"mode": "fitted", "bounds": bounds}),
                };
                let scene = json!({
                    "tiles": {"url": config.map.tile_url, "attribution": config.map.attribution},
                    "features": map.features(),
                    "viewport": viewport,
                });
                // Keep the payload from closing the script element early
                let scene = serde_json::to_string(&scene)?.replace("</", "<\\/");

                html.push_str("  <div id=\"map\"></div>\n");
                html.push_str(&format!(
                    "  <script id=\"scene\" type=\"application/json\">{}</script>\n",
                    scene
                ));
                html.push_str(&format!("  <script src=\"{}\"></script>\n", LEAFLET_JS));
                html.push_str(&format!("  <script>{}</script>\n", DRAW_SCRIPT));
            }
            MapRegion::Message { text } => {
                html.push_str(&format!("  <p style=\"color: red;\">{}</p>\n", escape(text)));
            }
            MapRegion::Empty => {}
        }

        let open = if page.dev_panel.is_visible() { " open" } else { "" };
        html.push_str(&format!(
            "  <details{}>\n    <summary>{}</summary>\n",
            open,
            page.dev_panel.toggle_label()
        ));
        html.push_str(&format!(
            "    <div class=\"dev-response\">{}</div>\n  </details>\n",
            escape(page.dev_panel.content())
        ));

        html.push_str(&format!(
            "  <footer>Generated {}</footer>\n",
            report.generated_at.to_rfc3339()
        ));
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}
