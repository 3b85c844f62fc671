use axum::{
    Router,
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    clock::{self, TimeSnapshot},
    crowd::{self, TimelinePoint},
    fare::{self, FareEstimate},
    geo,
    models::{DayPlan, Place, PlaceCategory, PlannedStop},
    places, planner, weather,
};

#[derive(Serialize, Deserialize)]
pub struct ApiPlace {
    pub id: u32,
    pub name: String,
    pub name_km: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub description: String,
    pub description_km: String,
    pub duration: String,
    pub best_time: String,
    pub budget: String,
    pub highlight: String,
    pub highlight_km: String,
    pub mood: String,
    pub mood_km: String,
    pub mood_icon: String,
    pub rating: Option<f32>,
    pub photo_tip: String,
    pub photo_tip_km: String,
}

impl From<&Place> for ApiPlace {
    fn from(place: &Place) -> Self {
        let mood = place.mood();
        Self {
            id: place.id,
            name: place.name.clone(),
            name_km: place.name_km.clone(),
            latitude: place.latitude,
            longitude: place.longitude,
            category: place.category.as_str().to_string(),
            description: place.description.clone(),
            description_km: place.description_km.clone(),
            duration: place.duration.clone(),
            best_time: place.best_time.clone(),
            budget: place.budget.clone(),
            highlight: place.highlight.clone(),
            highlight_km: place.highlight_km.clone(),
            mood: mood.label(crate::Language::En).to_string(),
            mood_km: mood.label(crate::Language::Km).to_string(),
            mood_icon: mood.icon().to_string(),
            rating: place.rating,
            photo_tip: place.photo_tip(crate::Language::En).to_string(),
            photo_tip_km: place.photo_tip(crate::Language::Km).to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiStop {
    pub place: ApiPlace,
    pub travel_km: f64,
    pub travel_minutes: u32,
    pub visit_minutes: u32,
    /// e.g. "1.25km"
    pub travel_distance_label: String,
    /// e.g. "2h 5m"
    pub visit_label: String,
}

impl From<&PlannedStop> for ApiStop {
    fn from(stop: &PlannedStop) -> Self {
        Self {
            place: ApiPlace::from(&stop.place),
            travel_km: stop.travel_km,
            travel_minutes: stop.travel_minutes,
            visit_minutes: stop.visit_minutes,
            travel_distance_label: geo::format_distance_km(stop.travel_km),
            visit_label: clock::format_minutes(stop.visit_minutes),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiDayPlan {
    pub stops: Vec<ApiStop>,
    pub total_travel_km: f64,
    pub total_travel_minutes: u32,
    pub total_visit_minutes: u32,
    /// e.g. "12.40km • 5h 20m"
    pub total_label: String,
}

impl From<&DayPlan> for ApiDayPlan {
    fn from(plan: &DayPlan) -> Self {
        Self {
            stops: plan.stops.iter().map(ApiStop::from).collect(),
            total_travel_km: plan.total_travel_km,
            total_travel_minutes: plan.total_travel_minutes,
            total_visit_minutes: plan.total_visit_minutes,
            total_label: format!(
                "{} • {}",
                geo::format_distance_km(plan.total_travel_km),
                clock::format_minutes(plan.total_minutes())
            ),
        }
    }
}

#[derive(Deserialize)]
pub struct PlacesQuery {
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct PlanQuery {
    pub lat: f64,
    pub lng: f64,
    /// Minutes since midnight; defaults to the current Cambodia clock
    pub minutes: Option<u32>,
    pub max_stops: Option<usize>,
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct FareQuery {
    pub lat: f64,
    pub lng: f64,
    /// Destination place id
    pub to: u32,
}

pub fn router() -> Router {
    Router::new()
        .route("/places", get(get_places))
        .route("/places/{id}", get(get_place))
        .route("/places/{id}/crowd", get(get_crowd))
        .route("/plan", get(get_plan))
        .route("/fare", get(get_fare))
        .route("/weather", get(get_weather))
        .route("/time", get(get_time))
}

fn parse_category(name: &str) -> Result<PlaceCategory, StatusCode> {
    PlaceCategory::parse(name).ok_or(StatusCode::BAD_REQUEST)
}

async fn get_places(
    Query(query): Query<PlacesQuery>,
) -> Result<Json<Vec<ApiPlace>>, StatusCode> {
    let selection: Vec<&Place> = match query.category.as_deref() {
        Some(name) => places::by_category(parse_category(name)?),
        None => places::all().iter().collect(),
    };

    Ok(Json(selection.into_iter().map(ApiPlace::from).collect()))
}

async fn get_place(Path(id): Path<u32>) -> Result<Json<ApiPlace>, StatusCode> {
    places::find(id)
        .map(|place| Json(ApiPlace::from(place)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_crowd(Path(id): Path<u32>) -> Result<Json<Vec<TimelinePoint>>, StatusCode> {
    places::find(id)
        .map(|place| Json(crowd::crowd_heat_timeline(place)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_plan(Query(query): Query<PlanQuery>) -> Result<Json<ApiDayPlan>, StatusCode> {
    if !(-90.0..=90.0).contains(&query.lat) || !(-180.0..=180.0).contains(&query.lng) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let candidates: Vec<Place> = match query.category.as_deref() {
        Some(name) => places::by_category(parse_category(name)?)
            .into_iter()
            .cloned()
            .collect(),
        None => places::all().to_vec(),
    };

    let minutes = query
        .minutes
        .unwrap_or_else(|| TimeSnapshot::now().total_minutes);
    let max_stops = query.max_stops.unwrap_or(planner::DEFAULT_MAX_STOPS);

    let plan = planner::build_day_plan(&candidates, minutes, query.lat, query.lng, max_stops);
    Ok(Json(ApiDayPlan::from(&plan)))
}

async fn get_fare(Query(query): Query<FareQuery>) -> Result<Json<FareEstimate>, StatusCode> {
    let destination = places::find(query.to).ok_or(StatusCode::NOT_FOUND)?;
    if !(-90.0..=90.0).contains(&query.lat) || !(-180.0..=180.0).contains(&query.lng) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let distance_km = geo::distance_km(
        query.lat,
        query.lng,
        destination.latitude,
        destination.longitude,
    );
    Ok(Json(fare::estimate_fare(distance_km)))
}

async fn get_weather() -> Result<Json<weather::WeatherSnapshot>, StatusCode> {
    let snapshot = weather::fetch_current(weather::OPEN_METEO_BASE_URL)
        .await
        .map_err(|error| {
            tracing::warn!("weather fetch failed: {error:#}");
            StatusCode::BAD_GATEWAY
        })?;
    Ok(Json(snapshot))
}

async fn get_time() -> Json<TimeSnapshot> {
    Json(TimeSnapshot::now())
}
