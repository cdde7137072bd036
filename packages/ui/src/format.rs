//! Date labels for cards and dialogs.

use std::fmt::Display;

use api::Recipe;
use chrono::{DateTime, Local, TimeZone, Utc};

/// `May 1, 2023, 2:05 PM` in the given time zone.
pub fn format_date<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%b %-d, %Y, %-I:%M %p").to_string()
}

pub fn created_label<Tz>(recipe: &Recipe, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("Created: {}", format_date(&recipe.created_at, tz))
}

pub fn updated_label<Tz>(recipe: &Recipe, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("Updated: {}", format_date(&recipe.updated_at, tz))
}

/// The single timestamp a card shows: the update time if the recipe was
/// edited, otherwise the creation time.
pub fn card_label<Tz>(recipe: &Recipe, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if recipe.was_updated() {
        updated_label(recipe, tz)
    } else {
        created_label(recipe, tz)
    }
}

/// Shorthand for labels in the viewer's time zone.
pub struct LocalLabels;

impl LocalLabels {
    pub fn card(recipe: &Recipe) -> String {
        card_label(recipe, &Local)
    }

    pub fn created(recipe: &Recipe) -> String {
        created_label(recipe, &Local)
    }

    pub fn updated(recipe: &Recipe) -> String {
        updated_label(recipe, &Local)
    }

    pub fn date(at: &DateTime<Utc>) -> String {
        format_date(at, &Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn recipe(created: &str, updated: &str) -> Recipe {
        serde_json::from_value(serde_json::json!({
            "_id": "r1",
            "author": "julia",
            "title": "Soup",
            "createdAt": created,
            "updatedAt": updated,
        }))
        .unwrap()
    }

    #[test]
    fn test_format_date() {
        let at: DateTime<Utc> = "2023-05-01T14:05:00Z".parse().unwrap();
        assert_eq!(format_date(&at, &Utc), "May 1, 2023, 2:05 PM");

        let cet = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_date(&at, &cet), "May 1, 2023, 4:05 PM");
    }

    #[test]
    fn test_card_prefers_update_time() {
        let r = recipe("2023-05-01T09:00:00Z", "2023-05-03T09:30:00Z");
        assert_eq!(card_label(&r, &Utc), "Updated: May 3, 2023, 9:30 AM");
    }

    #[test]
    fn test_card_shows_creation_when_never_edited() {
        let r = recipe("2023-05-01T09:00:00Z", "2023-05-01T09:00:00Z");
        assert_eq!(card_label(&r, &Utc), "Created: May 1, 2023, 9:00 AM");
        assert_eq!(updated_label(&r, &Utc), "Updated: May 1, 2023, 9:00 AM");
    }
}
