// Copyright 2026 the Driftdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rand::Rng;
use rand::seq::SliceRandom;

/// One entry of the static project catalog.
///
/// Catalogs are ordered lists supplied by the site; the deck builder never
/// reorders the catalog itself, only the deck built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardTemplate {
    /// Grid media file name, resolved against the host's asset prefix.
    pub filename: String,
    /// Overlay title shown while the card is focused.
    pub title: String,
    /// Overlay description shown while the card is focused.
    pub description: String,
    /// Optional high-resolution companion video attached on focus.
    pub video_filename: Option<String>,
}

impl CardTemplate {
    /// Creates a template with no companion video.
    #[must_use]
    pub fn image(
        filename: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            description: description.into(),
            video_filename: None,
        }
    }

    /// Creates a template with a high-resolution companion video.
    #[must_use]
    pub fn with_video(
        filename: impl Into<String>,
        video_filename: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            description: description.into(),
            video_filename: Some(video_filename.into()),
        }
    }

    /// How the grid should present this template's base media.
    #[must_use]
    pub fn media_kind(&self) -> MediaKind {
        let lower = self.filename.to_ascii_lowercase();
        if lower.ends_with(".mp4") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// Resolves the grid media path against the host's asset prefix.
    #[must_use]
    pub fn asset_path(&self, prefix: &str) -> String {
        let mut path = String::with_capacity(prefix.len() + self.filename.len());
        path.push_str(prefix);
        path.push_str(&self.filename);
        path
    }

    /// Resolves the companion video path, when the template has one.
    #[must_use]
    pub fn video_path(&self, prefix: &str) -> Option<String> {
        self.video_filename.as_ref().map(|name| {
            let mut path = String::with_capacity(prefix.len() + name.len());
            path.push_str(prefix);
            path.push_str(name);
            path
        })
    }
}

/// Presentation of a card's base media in the grid.
///
/// Videos in the grid loop muted; sound only enters with the focus overlay's
/// companion video.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    /// A static image element.
    Image,
    /// A looping, muted, autoplaying video element.
    Video,
}

/// Identity of a card within one built deck: its index in deck order.
///
/// Identities are only meaningful against the deck they came from; a rebuild
/// invalidates all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

/// One card of a built deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Position of this card in the deck.
    pub id: CardId,
    /// The catalog template this card displays.
    pub template: CardTemplate,
}

/// Deterministic fallback image for a card whose base media failed to load.
///
/// Keyed by deck index so a given slot always falls back to the same image
/// within a page visit.
#[must_use]
pub fn placeholder_url(id: CardId) -> String {
    format!("https://picsum.photos/seed/{}/500/600", id.0 + 100)
}

/// Builds a deck of exactly `total` cards from `catalog`.
///
/// The catalog is repeated round-robin until `total` entries exist, truncated
/// to exactly `total`, and then shuffled in place with Fisher–Yates. The
/// result is a uniform random permutation of that repeated pool, so each
/// catalog entry appears either `total.div_ceil(n)` or `total / n` times for
/// a catalog of size `n`.
///
/// An empty catalog yields an empty deck.
pub fn build_deck<R: Rng + ?Sized>(
    catalog: &[CardTemplate],
    total: usize,
    rng: &mut R,
) -> Vec<Card> {
    if catalog.is_empty() {
        return Vec::new();
    }

    let mut pool: Vec<CardTemplate> = Vec::with_capacity(total);
    while pool.len() < total {
        let remaining = total - pool.len();
        pool.extend(catalog.iter().take(remaining).cloned());
    }

    pool.shuffle(rng);

    pool.into_iter()
        .enumerate()
        .map(|(index, template)| Card {
            id: CardId(index),
            template,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeMap;

    fn catalog(n: usize) -> Vec<CardTemplate> {
        (0..n)
            .map(|i| CardTemplate::image(format!("p{i}.png"), format!("T{i}"), format!("D{i}")))
            .collect()
    }

    fn title_counts(deck: &[Card]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for card in deck {
            *counts.entry(card.template.title.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn deck_length_is_exact_for_any_catalog_size() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in [1, 2, 3, 9, 13, 104, 200] {
            let deck = build_deck(&catalog(n), 104, &mut rng);
            assert_eq!(deck.len(), 104, "catalog of {n} must fill to 104");
        }
    }

    #[test]
    fn ids_are_deck_positions() {
        let mut rng = StdRng::seed_from_u64(2);
        let deck = build_deck(&catalog(9), 104, &mut rng);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id, CardId(i));
        }
    }

    #[test]
    fn repeats_are_balanced_round_robin() {
        // Catalog of 9 into 104: 104 = 9 * 11 + 5, so five titles appear 12
        // times and four appear 11 times.
        let mut rng = StdRng::seed_from_u64(3);
        let deck = build_deck(&catalog(9), 104, &mut rng);
        let counts = title_counts(&deck);

        assert_eq!(counts.len(), 9);
        let twelves = counts.values().filter(|&&c| c == 12).count();
        let elevens = counts.values().filter(|&&c| c == 11).count();
        assert_eq!((twelves, elevens), (5, 4));

        // The extra copies go to the catalog's first entries.
        for i in 0..5 {
            assert_eq!(counts[&format!("T{i}")], 12);
        }
    }

    #[test]
    fn three_into_five_gives_two_two_one() {
        let mut rng = StdRng::seed_from_u64(4);
        let deck = build_deck(&catalog(3), 5, &mut rng);
        let counts = title_counts(&deck);
        assert_eq!(counts[&"T0".to_string()], 2);
        assert_eq!(counts[&"T1".to_string()], 2);
        assert_eq!(counts[&"T2".to_string()], 1);
    }

    #[test]
    fn shuffle_is_a_permutation_of_the_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        let templates = catalog(9);
        let deck = build_deck(&templates, 104, &mut rng);

        // Every deck entry is a catalog entry; counts already checked above.
        for card in &deck {
            assert!(templates.contains(&card.template));
        }
    }

    #[test]
    fn shuffles_differ_across_rng_states() {
        let templates = catalog(9);
        let mut rng_a = StdRng::seed_from_u64(6);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a: Vec<String> = build_deck(&templates, 104, &mut rng_a)
            .into_iter()
            .map(|c| c.template.title)
            .collect();
        let b: Vec<String> = build_deck(&templates, 104, &mut rng_b)
            .into_iter()
            .map(|c| c.template.title)
            .collect();
        assert_ne!(a, b, "different seeds should almost surely reorder 104 cards");
    }

    #[test]
    fn catalog_larger_than_deck_is_truncated_before_shuffling() {
        let mut rng = StdRng::seed_from_u64(8);
        let deck = build_deck(&catalog(10), 4, &mut rng);
        assert_eq!(deck.len(), 4);
        // Only the first four catalog entries can appear.
        for card in &deck {
            let index: usize = card.template.title[1..].parse().unwrap();
            assert!(index < 4, "title {} is outside the truncated pool", card.template.title);
        }
    }

    #[test]
    fn empty_catalog_yields_empty_deck() {
        let mut rng = StdRng::seed_from_u64(9);
        assert!(build_deck(&[], 104, &mut rng).is_empty());
    }

    #[test]
    fn media_kind_keys_off_extension_case_insensitively() {
        assert_eq!(
            CardTemplate::image("clip.mp4", "t", "d").media_kind(),
            MediaKind::Video
        );
        assert_eq!(
            CardTemplate::image("CLIP.MP4", "t", "d").media_kind(),
            MediaKind::Video
        );
        assert_eq!(
            CardTemplate::image("still.png", "t", "d").media_kind(),
            MediaKind::Image
        );
        // The companion video does not affect the grid media kind.
        assert_eq!(
            CardTemplate::with_video("still.png", "clip.mov", "t", "d").media_kind(),
            MediaKind::Image
        );
    }

    #[test]
    fn asset_paths_concatenate_prefix() {
        let template = CardTemplate::with_video("still.png", "clip.mov", "t", "d");
        assert_eq!(
            template.asset_path("../playgroundassets/"),
            "../playgroundassets/still.png"
        );
        assert_eq!(
            template.video_path("playgroundassets/").as_deref(),
            Some("playgroundassets/clip.mov")
        );
        assert_eq!(CardTemplate::image("x.png", "t", "d").video_path("p/"), None);
    }

    #[test]
    fn placeholder_is_keyed_by_deck_index() {
        assert_eq!(
            placeholder_url(CardId(0)),
            "https://picsum.photos/seed/100/500/600"
        );
        assert_eq!(
            placeholder_url(CardId(41)),
            "https://picsum.photos/seed/141/500/600"
        );
    }
}
