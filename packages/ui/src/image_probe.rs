//! Choosing between the image and text-only presentations of a recipe.
//!
//! A card starts by trying to load the recipe image. The first load or
//! error event settles the probe; a failed image switches the card and its
//! detail dialog to the text-only variant for good.

use api::Recipe;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageProbe {
    #[default]
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailVariant {
    WithImage,
    WithoutImage,
}

impl ImageProbe {
    /// Record the outcome of the image request. Later events are ignored.
    pub fn settle(&mut self, loaded: bool) {
        if *self == Self::Pending {
            *self = if loaded { Self::Loaded } else { Self::Failed };
        }
    }

    /// Pending renders the image variant so the `<img>` exists to be probed.
    pub fn variant(self) -> DetailVariant {
        match self {
            Self::Pending | Self::Loaded => DetailVariant::WithImage,
            Self::Failed => DetailVariant::WithoutImage,
        }
    }
}

impl DetailVariant {
    /// For views that never probe the image, trust the stored flag.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        if recipe.has_image {
            Self::WithImage
        } else {
            Self::WithoutImage
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_shows_image() {
        assert_eq!(ImageProbe::default().variant(), DetailVariant::WithImage);
    }

    #[test]
    fn test_failed_image_falls_back_to_text() {
        let mut probe = ImageProbe::default();
        probe.settle(false);
        assert_eq!(probe, ImageProbe::Failed);
        assert_eq!(probe.variant(), DetailVariant::WithoutImage);
    }

    #[test]
    fn test_first_outcome_wins() {
        let mut probe = ImageProbe::default();
        probe.settle(true);
        probe.settle(false);
        assert_eq!(probe.variant(), DetailVariant::WithImage);

        let mut probe = ImageProbe::default();
        probe.settle(false);
        probe.settle(true);
        assert_eq!(probe.variant(), DetailVariant::WithoutImage);
    }

    #[test]
    fn test_variant_from_stored_flag() {
        let mut recipe: Recipe = serde_json::from_value(serde_json::json!({
            "_id": "r1",
            "author": "julia",
            "title": "Soup",
            "hasImage": true,
            "createdAt": "2023-05-01T09:00:00Z",
            "updatedAt": "2023-05-01T09:00:00Z",
        }))
        .unwrap();
        assert_eq!(DetailVariant::from_recipe(&recipe), DetailVariant::WithImage);
        recipe.has_image = false;
        assert_eq!(DetailVariant::from_recipe(&recipe), DetailVariant::WithoutImage);
    }
}
