// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static lookup from pet variant keys to image and clip asset paths.

use strum::{Display, EnumIter};

/// Variant used when a pet has no variant or an unknown one.
pub const DEFAULT_VARIANT: &str = "dog_1";

/// Action clips shipped per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Clip {
    Feed,
    Treat,
    Bath,
    Sleep,
    PlayDead,
    PlayFetch,
    PlayRollover,
}

static IMAGES: &[(&str, &str)] = &[
    ("dog_1", "assets/PawPal_Options/dog_1.png"),
    ("dog_2", "assets/PawPal_Options/dog_2.png"),
    ("cat_1", "assets/PawPal_Options/cat_1.jpg"),
    ("cat_2", "assets/PawPal_Options/cat.png"),
    ("hamster_1", "assets/PawPal_Options/hamster.png"),
    ("hamster_2", "assets/PawPal_Options/hamster.png"),
    ("guinea_pig_1", "assets/PawPal_Options/guinea_pig.png"),
    ("guinea_pig_2", "assets/PawPal_Options/guinea_pig.png"),
    ("rabbit_1", "assets/PawPal_Options/rabbit.png"),
    ("rabbit_2", "assets/PawPal_Options/rabbit.png"),
];

static CLIPS: &[(&str, [(Clip, &str); 7])] = &[
    (
        "dog_1",
        [
            (Clip::Feed, "assets/dog_1/feed.mp4"),
            (Clip::Treat, "assets/dog_1/treat.mp4"),
            (Clip::Bath, "assets/dog_1/bath.mp4"),
            (Clip::Sleep, "assets/dog_1/sleep.mp4"),
            (Clip::PlayDead, "assets/dog_1/play/play_dead.mp4"),
            (Clip::PlayFetch, "assets/dog_1/play/play_fetch.mp4"),
            (Clip::PlayRollover, "assets/dog_1/play/play_rollover.mp4"),
        ],
    ),
    (
        "dog_2",
        [
            (Clip::Feed, "assets/dog_2/feed.mp4"),
            (Clip::Treat, "assets/dog_2/treat.mp4"),
            (Clip::Bath, "assets/dog_2/bath.mp4"),
            (Clip::Sleep, "assets/dog_2/sleep.mp4"),
            (Clip::PlayDead, "assets/dog_2/play/play_dead.mp4"),
            (Clip::PlayFetch, "assets/dog_2/play/play_fetch.mp4"),
            (Clip::PlayRollover, "assets/dog_2/play/play_rollover.mp4"),
        ],
    ),
    (
        "cat_1",
        [
            (Clip::Feed, "assets/cat_1/feed.mp4"),
            (Clip::Treat, "assets/cat_1/treat.mp4"),
            (Clip::Bath, "assets/cat_1/bath.mp4"),
            (Clip::Sleep, "assets/cat_1/sleep.mp4"),
            (Clip::PlayDead, "assets/cat_1/play/play_liedown.mp4"),
            (Clip::PlayFetch, "assets/cat_1/play/play_chase.mp4"),
            (Clip::PlayRollover, "assets/cat_1/play/play_pounce.mp4"),
        ],
    ),
];

/// Picture for a variant. Unknown variants have no picture.
pub fn image_for(variant: &str) -> Option<&'static str> {
    IMAGES
        .iter()
        .find(|(key, _)| *key == variant)
        .map(|(_, path)| *path)
}

/// Clip for a variant, falling back to the default variant's clips.
pub fn clip_for(variant: Option<&str>, clip: Clip) -> Option<&'static str> {
    let clips = variant
        .and_then(|v| CLIPS.iter().find(|(key, _)| *key == v))
        .or_else(|| CLIPS.iter().find(|(key, _)| *key == DEFAULT_VARIANT))
        .map(|(_, clips)| clips);

    clips
        .and_then(|clips| clips.iter().find(|(c, _)| *c == clip))
        .map(|(_, path)| *path)
}

/// All known variant keys, in display order.
pub fn variants() -> impl Iterator<Item = &'static str> {
    IMAGES.iter().map(|(key, _)| *key)
}
