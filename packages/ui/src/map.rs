//! # Recipe map
//!
//! Public recipes that carry a location are drawn as pins on a flat
//! viewport. The viewport is the bounding box of the pins, widened by
//! [`PADDING_RATIO`] on every side, and points are placed with an
//! equirectangular projection: longitude maps linearly to `x`, latitude to
//! `y` (north up). Both come out as percentages of the viewport so the pins
//! can be positioned with plain CSS.

use api::{GeoPoint, Recipe};
use dioxus::prelude::*;

/// Fraction of the bounding box added on each side.
pub const PADDING_RATIO: f64 = 0.1;

/// Smallest span, in degrees, of either axis. Keeps a single pin centered.
pub const MIN_SPAN_DEGREES: f64 = 0.02;

/// Where the map is centered when no recipe has a location.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    latitude: 37.8277754,
    longitude: -122.2662917,
};

/// Pin position in percent of the viewport, `(0, 0)` being the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Viewport {
    /// Smallest padded viewport containing every point.
    pub fn fit(points: impl IntoIterator<Item = GeoPoint>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::around(DEFAULT_CENTER);
        };

        let (mut south, mut north) = (first.latitude, first.latitude);
        let (mut west, mut east) = (first.longitude, first.longitude);
        for p in points {
            south = south.min(p.latitude);
            north = north.max(p.latitude);
            west = west.min(p.longitude);
            east = east.max(p.longitude);
        }

        let (south, north) = pad(south, north);
        let (west, east) = pad(west, east);
        Self {
            south,
            north,
            west,
            east,
        }
    }

    fn around(center: GeoPoint) -> Self {
        let (south, north) = pad(center.latitude, center.latitude);
        let (west, east) = pad(center.longitude, center.longitude);
        Self {
            south,
            north,
            west,
            east,
        }
    }

    pub fn project(&self, point: GeoPoint) -> MapPosition {
        MapPosition {
            x: (point.longitude - self.west) / (self.east - self.west) * 100.0,
            y: (self.north - point.latitude) / (self.north - self.south) * 100.0,
        }
    }
}

fn pad(min: f64, max: f64) -> (f64, f64) {
    let span = (max - min).max(MIN_SPAN_DEGREES);
    let center = (min + max) / 2.0;
    let half = span / 2.0 * (1.0 + 2.0 * PADDING_RATIO);
    (center - half, center + half)
}

/// Link to the point on openstreetmap.org.
pub fn osm_link(point: GeoPoint) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat:.5}&mlon={lon:.5}#map=13/{lat:.5}/{lon:.5}",
        lat = point.latitude,
        lon = point.longitude
    )
}

/// Recipes that can be placed on the map, paired with their location.
pub fn located(recipes: &[Recipe]) -> Vec<(&Recipe, GeoPoint)> {
    recipes
        .iter()
        .filter_map(|recipe| recipe.location.map(|point| (recipe, point)))
        .collect()
}

#[component]
pub fn RecipeMap(recipes: Vec<Recipe>, on_select: EventHandler<Recipe>) -> Element {
    let pins = located(&recipes);
    let viewport = Viewport::fit(pins.iter().map(|(_, point)| *point));

    rsx! {
        div {
            class: "recipe-map",
            for (recipe, point) in pins {
                MapPin {
                    key: "{recipe.id}",
                    recipe: recipe.clone(),
                    position: viewport.project(point),
                    link: osm_link(point),
                    on_select,
                }
            }
            div {
                class: "recipe-map-attribution",
                "© "
                a { href: "https://www.openstreetmap.org/copyright", target: "_blank", "OpenStreetMap" }
                " contributors"
            }
        }
    }
}

#[component]
fn MapPin(
    recipe: Recipe,
    position: MapPosition,
    link: String,
    on_select: EventHandler<Recipe>,
) -> Element {
    let style = format!("left: {:.3}%; top: {:.3}%;", position.x, position.y);
    let title = recipe.title.clone();

    rsx! {
        div {
            class: "map-pin",
            style,
            button {
                class: "map-pin-marker",
                r#type: "button",
                title: "{title}",
                onclick: move |_| on_select.call(recipe.clone()),
            }
            div {
                class: "map-pin-label",
                span { "{title}" }
                a {
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener",
                    "Open map"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_points_land_inside_viewport() {
        let points = [
            GeoPoint::new(37.80, -122.30),
            GeoPoint::new(37.90, -122.20),
            GeoPoint::new(37.85, -122.25),
        ];
        let viewport = Viewport::fit(points);
        for p in points {
            let pos = viewport.project(p);
            assert!((0.0..=100.0).contains(&pos.x), "x = {}", pos.x);
            assert!((0.0..=100.0).contains(&pos.y), "y = {}", pos.y);
        }
    }

    #[test]
    fn test_north_is_up_and_east_is_right() {
        let viewport = Viewport::fit([GeoPoint::new(10.0, 10.0), GeoPoint::new(20.0, 20.0)]);
        let south_west = viewport.project(GeoPoint::new(10.0, 10.0));
        let north_east = viewport.project(GeoPoint::new(20.0, 20.0));
        assert!(north_east.x > south_west.x);
        assert!(north_east.y < south_west.y);
    }

    #[test]
    fn test_padding_keeps_corners_off_the_edge() {
        let viewport = Viewport::fit([GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 10.0)]);
        let corner = viewport.project(GeoPoint::new(10.0, 0.0));
        let inset = PADDING_RATIO / (1.0 + 2.0 * PADDING_RATIO) * 100.0;
        assert!(close(corner.x, inset));
        assert!(close(corner.y, inset));
    }

    #[test]
    fn test_single_point_is_centered() {
        let point = GeoPoint::new(51.5, -0.12);
        let pos = Viewport::fit([point]).project(point);
        assert!(close(pos.x, 50.0));
        assert!(close(pos.y, 50.0));
    }

    #[test]
    fn test_empty_map_centers_on_default() {
        let pos = Viewport::fit(std::iter::empty()).project(DEFAULT_CENTER);
        assert!(close(pos.x, 50.0));
        assert!(close(pos.y, 50.0));
    }

    #[test]
    fn test_only_located_recipes_get_pins() {
        let recipes: Vec<Recipe> = serde_json::from_value(serde_json::json!([
            {"_id": "a", "author": "j", "title": "Here", "latitude": 1.0, "longitude": 2.0,
             "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"},
            {"_id": "b", "author": "j", "title": "Nowhere",
             "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"}
        ]))
        .unwrap();
        let pins = located(&recipes);
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].0.id, "a");
        assert_eq!(pins[0].1, GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_osm_link() {
        assert_eq!(
            osm_link(GeoPoint::new(37.8, -122.25)),
            "https://www.openstreetmap.org/?mlat=37.80000&mlon=-122.25000#map=13/37.80000/-122.25000"
        );
    }
}
