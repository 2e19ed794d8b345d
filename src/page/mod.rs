//! The address analysis page
//!
//! [`Page`] owns every UI component of one session and drives the two
//! pipelines:
//!
//! - **Street loading**: `/api/streets/` fills the [`StreetSelect`]
//! - **Submission**: `/api/analyze/` is rendered onto a fresh map, mirrored
//!   into the [`DevPanel`], and failures go through one shared error path
//!
//! A submission is split in two so that concurrent submissions can be
//! modelled: [`Page::begin_submit`] performs the immediate UI transitions and
//! hands out a [`Ticket`]; [`Page::complete_submit`] applies the response.

pub mod dev_panel;
pub mod map_region;
pub mod street_select;

pub use dev_panel::{DevPanel, Visibility};
pub use map_region::MapRegion;
pub use street_select::{SelectOption, StreetSelect};

use crate::api::AnalysisApi;
use crate::config::Config;
use crate::constants::text::{GENERIC_FAILURE, NO_RESULTS, NO_VALID_FEATURES};
use crate::error::{Error, Result};
use crate::map::{render_analysis, Map, RenderOutcome};
use crate::model::{Coordinates, SearchQuery, StreetName};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

/// Handle of one in-flight submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    radius_meters: Option<u64>,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Result of applying a submission's response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Response was rendered (or reported as empty)
    Applied(RenderOutcome),
    /// Request failed; the error went to the dev panel
    Failed(String),
    /// A newer submission exists; the response was dropped
    Stale,
}

/// All UI state of one page session
///
/// Serialized for reports only; session settings are not part of the output.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub street_select: StreetSelect,
    pub dev_panel: DevPanel,
    pub map_region: MapRegion,
    /// Blocking notices, in the order they were raised
    pub notices: Vec<String>,
    #[serde(skip)]
    last_issued: u64,
    #[serde(skip)]
    discard_stale: bool,
    #[serde(skip)]
    default_center: Coordinates,
    #[serde(skip)]
    zoom: u8,
}

fn default_center() -> Coordinates {
    Coordinates::new(
        crate::constants::geo::DEFAULT_CENTER_LAT,
        crate::constants::geo::DEFAULT_CENTER_LNG,
    )
}

fn default_zoom() -> u8 {
    crate::constants::geo::DEFAULT_ZOOM
}

impl Default for Page {
    fn default() -> Self {
        Self::new(default_center(), default_zoom(), true)
    }
}

impl Page {
    pub fn new(default_center: Coordinates, zoom: u8, discard_stale: bool) -> Self {
        Self {
            street_select: StreetSelect::new(),
            dev_panel: DevPanel::new(),
            map_region: MapRegion::default(),
            notices: Vec::new(),
            last_issued: 0,
            discard_stale,
            default_center,
            zoom,
        }
    }

    /// Page configured from the `[map]` and `[session]` sections
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.map.default_center(),
            config.map.zoom,
            config.session.discard_stale,
        )
    }

    pub fn default_center(&self) -> Coordinates {
        self.default_center
    }

    /// The map of the most recently applied submission
    pub fn map(&self) -> Option<&Map> {
        self.map_region.map()
    }

    fn notify(&mut self, text: &str) {
        info!(notice = text, "Notice");
        self.notices.push(text.to_string());
    }

    /// Shared failure path
    ///
    /// The dev panel always shows the error; when `user_message` is given
    /// the map region is replaced with it.
    pub fn handle_error(&mut self, err: &Error, user_message: Option<&str>) {
        error!("{}", err);
        self.dev_panel.show_error(err);
        if let Some(message) = user_message {
            self.map_region.show_message(message);
        }
    }

    /// Apply the outcome of a street list request
    pub fn apply_streets(&mut self, result: Result<Vec<StreetName>>) {
        match result {
            Ok(streets) => {
                info!(count = streets.len(), "Loaded streets");
                self.street_select.replace(&streets);
            }
            // The list can be reloaded; keep the current options
            Err(e) => self.handle_error(&e, None),
        }
    }

    /// Fetch the street list and populate the selection control
    pub async fn load_streets<A: AnalysisApi>(&mut self, api: &A) {
        let result = api.streets().await;
        self.apply_streets(result);
    }

    /// Immediate UI transitions of a submission
    pub fn begin_submit(&mut self, query: &SearchQuery) -> Ticket {
        self.last_issued += 1;
        info!(
            seq = self.last_issued,
            street = %query.street,
            house_number = %query.house_number,
            radius = %query.radius,
            "Submitting address"
        );

        self.dev_panel.reset();
        self.map_region
            .reset_with(Map::new(self.default_center, self.zoom));

        Ticket {
            seq: self.last_issued,
            radius_meters: query.radius_meters(),
        }
    }

    /// Apply the response of the submission identified by `ticket`
    pub fn complete_submit(&mut self, ticket: Ticket, result: Result<Value>) -> SubmitOutcome {
        if self.discard_stale && ticket.seq < self.last_issued {
            debug!(
                seq = ticket.seq,
                latest = self.last_issued,
                "Dropping response of superseded submission"
            );
            return SubmitOutcome::Stale;
        }

        let payload = match result {
            Ok(payload) => payload,
            Err(e) => {
                let message = e.to_string();
                self.handle_error(&e, Some(GENERIC_FAILURE));
                return SubmitOutcome::Failed(message);
            }
        };

        match serde_json::to_string_pretty(&payload) {
            Ok(pretty) => self.dev_panel.set_content(pretty),
            Err(e) => self.dev_panel.set_content(format!("Error: {}", e)),
        }

        let mut map = Map::new(self.default_center, self.zoom);
        let outcome = render_analysis(
            &mut map,
            &payload,
            ticket.radius_meters,
            self.default_center,
        );
        self.map_region.reset_with(map);

        match &outcome {
            RenderOutcome::NoResults => self.notify(NO_RESULTS),
            RenderOutcome::NoValidFeatures { .. } => self.notify(NO_VALID_FEATURES),
            RenderOutcome::Rendered { features, .. } => {
                info!(seq = ticket.seq, features, "Rendered analysis");
            }
        }

        SubmitOutcome::Applied(outcome)
    }

    /// Run one full submission against `api`
    pub async fn submit<A: AnalysisApi>(&mut self, api: &A, query: &SearchQuery) -> SubmitOutcome {
        let ticket = self.begin_submit(query);
        let result = api.analyze(query).await;
        self.complete_submit(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::status_error;
    use crate::map::Shape;
    use serde_json::json;
    use std::sync::Mutex;

    /// In-process backend answering from canned responses
    struct FakeApi {
        streets: Mutex<Option<Result<Vec<StreetName>>>>,
        analysis: Mutex<Option<Result<Value>>>,
    }

    impl FakeApi {
        fn with_streets(result: Result<Vec<StreetName>>) -> Self {
            Self {
                streets: Mutex::new(Some(result)),
                analysis: Mutex::new(None),
            }
        }

        fn with_analysis(result: Result<Value>) -> Self {
            Self {
                streets: Mutex::new(None),
                analysis: Mutex::new(Some(result)),
            }
        }
    }

    impl AnalysisApi for FakeApi {
        async fn streets(&self) -> Result<Vec<StreetName>> {
            self.streets.lock().unwrap().take().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn analyze(&self, _query: &SearchQuery) -> Result<Value> {
            self.analysis.lock().unwrap().take().unwrap_or_else(|| Ok(json!([])))
        }
    }

    fn query() -> SearchQuery {
        SearchQuery::new("הרצל", "7", "100")
    }

    fn polygon_at(lat: f64, lng: f64, flag: &str) -> Value {
        json!({
            "attributes": {"addresses": "הרצל 7", "sw_tama_38": flag},
            "geometry": {"rings": [[[lat, lng], [lat + 0.001, lng], [lat, lng + 0.001]]]}
        })
    }

    #[tokio::test]
    async fn test_load_streets_populates_select() {
        let mut page = Page::default();
        let api = FakeApi::with_streets(Ok(vec!["הרצל".into(), "אלנבי".into()]));

        page.load_streets(&api).await;

        assert_eq!(page.street_select.options().len(), 3);
        assert!(!page.dev_panel.is_visible());
    }

    #[tokio::test]
    async fn test_load_streets_failure_goes_to_dev_panel_only() {
        let mut page = Page::default();
        page.street_select.replace(&["הרצל".to_string()]);
        let api = FakeApi::with_streets(Err(status_error(500, "")));

        page.load_streets(&api).await;

        assert_eq!(page.street_select.options().len(), 2);
        assert!(page.dev_panel.is_visible());
        assert!(page.dev_panel.content().contains("500"));
        assert_eq!(page.map_region, MapRegion::Empty);
        assert!(page.notices.is_empty());
    }

    #[tokio::test]
    async fn test_submit_renders_and_mirrors_payload() {
        let mut page = Page::default();
        let payload = json!([polygon_at(32.06, 34.77, "כן")]);
        let api = FakeApi::with_analysis(Ok(payload.clone()));

        let outcome = page.submit(&api, &query()).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Applied(RenderOutcome::Rendered { features: 1, .. })
        ));
        assert_eq!(
            page.dev_panel.content(),
            serde_json::to_string_pretty(&payload).unwrap()
        );
        assert!(!page.dev_panel.is_visible());
        assert_eq!(page.map().unwrap().features().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_empty_result_notice() {
        let mut page = Page::default();
        let api = FakeApi::with_analysis(Ok(json!([])));

        let outcome = page.submit(&api, &query()).await;

        assert_eq!(outcome, SubmitOutcome::Applied(RenderOutcome::NoResults));
        assert_eq!(page.notices, vec![NO_RESULTS.to_string()]);
        assert!(page.map().unwrap().features().is_empty());
    }

    #[tokio::test]
    async fn test_submit_no_valid_features_notice() {
        let mut page = Page::default();
        let api = FakeApi::with_analysis(Ok(json!([{"bogus": true}])));

        page.submit(&api, &query()).await;

        assert_eq!(page.notices, vec![NO_VALID_FEATURES.to_string()]);
    }

    #[tokio::test]
    async fn test_submit_http_error() {
        let mut page = Page::default();
        let api = FakeApi::with_analysis(Err(status_error(400, r#"{"error": "bad radius"}"#)));

        let outcome = page.submit(&api, &query()).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(page.dev_panel.is_visible());
        assert!(page.dev_panel.content().contains("400"));
        assert!(page.dev_panel.content().contains("bad radius"));
        assert_eq!(page.map_region.message(), Some(GENERIC_FAILURE));
        assert!(page.notices.is_empty());
    }

    #[test]
    fn test_begin_submit_resets_panel_and_map() {
        let mut page = Page::default();
        page.dev_panel.show_error("old failure");
        page.map_region.show_message("old message");

        page.begin_submit(&query());

        assert!(!page.dev_panel.is_visible());
        assert_eq!(page.dev_panel.toggle_label(), "Expand Dev View");
        let map = page.map().unwrap();
        assert!(map.features().is_empty());
    }

    #[test]
    fn test_invalid_radius_is_tolerated() {
        let mut page = Page::default();
        let ticket = page.begin_submit(&SearchQuery::new("הרצל", "7", "abc"));

        let outcome = page.complete_submit(ticket, Ok(json!([polygon_at(32.0, 34.0, "לא")])));

        assert!(matches!(
            outcome,
            SubmitOutcome::Applied(RenderOutcome::Rendered { radius_indicator: None, .. })
        ));
        assert!(page.map().unwrap().radius_indicator().is_none());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut page = Page::default();
        let first = page.begin_submit(&query());
        let second = page.begin_submit(&query());

        let newer = page.complete_submit(second, Ok(json!([polygon_at(32.1, 34.1, "כן")])));
        let older = page.complete_submit(first, Ok(json!([polygon_at(31.0, 35.0, "לא")])));

        assert!(matches!(newer, SubmitOutcome::Applied(_)));
        assert_eq!(older, SubmitOutcome::Stale);

        let map = page.map().unwrap();
        let items: Vec<_> = map.item_features().collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].style.color, "red");
    }

    #[test]
    fn test_last_write_wins_without_guard() {
        let mut page = Page::new(default_center(), 16, false);
        let first = page.begin_submit(&query());
        let second = page.begin_submit(&query());

        page.complete_submit(second, Ok(json!([polygon_at(32.1, 34.1, "כן")])));
        let older = page.complete_submit(first, Ok(json!([polygon_at(31.0, 35.0, "לא")])));

        assert!(matches!(older, SubmitOutcome::Applied(_)));
        let map = page.map().unwrap();
        let items: Vec<_> = map.item_features().collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].style.color, "yellow");
        assert_eq!(map.features().iter().filter(|f| f.is_radius_indicator()).count(), 1);
    }

    #[test]
    fn test_sequential_submissions_do_not_accumulate() {
        let mut page = Page::default();

        let ticket = page.begin_submit(&query());
        page.complete_submit(
            ticket,
            Ok(json!([polygon_at(32.0, 34.0, "לא"), polygon_at(32.1, 34.1, "לא")])),
        );
        assert_eq!(page.map().unwrap().item_features().count(), 2);

        let ticket = page.begin_submit(&query());
        page.complete_submit(ticket, Ok(json!([{"attributes": {"lat": 32.2, "lng": 34.2}}])));

        let map = page.map().unwrap();
        assert_eq!(map.item_features().count(), 1);
        assert!(matches!(
            map.item_features().next().unwrap().shape,
            Shape::Marker { .. }
        ));
    }

    #[test]
    fn test_default_page_guards_stale_responses() {
        let page = Page::default();
        assert!(page.discard_stale);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 4);
        assert!(json.get("discard_stale").is_none());
        assert!(json.get("last_issued").is_none());
    }

    #[test]
    fn test_huge_radius_still_draws_indicator() {
        let mut page = Page::default();
        let ticket = page.begin_submit(&SearchQuery::new("הרצל", "7", "5000000000"));

        page.complete_submit(ticket, Ok(json!([polygon_at(32.0, 34.0, "לא")])));

        let indicator = page.map().unwrap().radius_indicator().unwrap();
        assert!(matches!(
            indicator.shape,
            Shape::Circle { radius_meters, .. } if radius_meters == 7_500_000_000.0
        ));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.map.center_lat = 31.0;
        config.map.center_lng = 35.0;
        config.session.discard_stale = false;

        let page = Page::from_config(&config);
        assert_eq!(page.default_center(), Coordinates::new(31.0, 35.0));
        assert!(!page.discard_stale);
    }
}
