// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static dog breed table used for walk wording and mood reports.

use pawpal_core::RandomSource;
use strum::Display;

/// Coarse energy rating for a breed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
    #[strum(serialize = "Very High")]
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breed {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub traits: [&'static str; 3],
    pub energy_level: EnergyLevel,
    /// 0 to 100.
    pub playfulness: u8,
    pub description: &'static str,
    pub feed_time: &'static str,
    pub play_style: &'static str,
    pub walk_preference: &'static str,
}

/// Walk preference used when the pet has no known breed.
pub const DEFAULT_WALK_PREFERENCE: &str = "Exploring";

/// Looks up a breed by its key, e.g. `"beagle"`.
pub fn by_id(id: &str) -> Option<&'static Breed> {
    BREEDS.iter().find(|b| b.id.eq_ignore_ascii_case(id.trim()))
}

pub fn all() -> &'static [Breed] {
    BREEDS
}

/// Picks a breed uniformly.
pub fn random(rng: &dyn RandomSource) -> &'static Breed {
    &BREEDS[rng.next_index(BREEDS.len()).min(BREEDS.len() - 1)]
}

static BREEDS: &[Breed] = &[
    Breed {
        id: "labrador",
        name: "Labrador Retriever",
        emoji: "🦮",
        traits: ["Friendly", "Loyal", "Energetic"],
        energy_level: EnergyLevel::High,
        playfulness: 95,
        description: "Friendly and outgoing, Labs play well with others.",
        feed_time: "Loves mealtime!",
        play_style: "Fetch enthusiast",
        walk_preference: "Long walks by the water",
    },
    Breed {
        id: "golden",
        name: "Golden Retriever",
        emoji: "🐕",
        traits: ["Gentle", "Intelligent", "Devoted"],
        energy_level: EnergyLevel::High,
        playfulness: 90,
        description: "Intelligent and friendly, perfect family companions.",
        feed_time: "Always hungry!",
        play_style: "Loves fetch and swimming",
        walk_preference: "Park adventures",
    },
    Breed {
        id: "german",
        name: "German Shepherd",
        emoji: "🐕‍🦺",
        traits: ["Confident", "Courageous", "Smart"],
        energy_level: EnergyLevel::VeryHigh,
        playfulness: 85,
        description: "Confident, courageous and smart guardians.",
        feed_time: "Disciplined eater",
        play_style: "Training exercises",
        walk_preference: "Patrol the neighborhood",
    },
    Breed {
        id: "beagle",
        name: "Beagle",
        emoji: "🐕",
        traits: ["Curious", "Merry", "Friendly"],
        energy_level: EnergyLevel::High,
        playfulness: 88,
        description: "Curious and merry, always following their nose.",
        feed_time: "Food motivated!",
        play_style: "Sniff and explore",
        walk_preference: "Trail sniffing",
    },
    Breed {
        id: "pug",
        name: "Pug",
        emoji: "🐶",
        traits: ["Charming", "Mischievous", "Loving"],
        energy_level: EnergyLevel::Low,
        playfulness: 70,
        description: "Charming and mischievous little companions.",
        feed_time: "Snorts excitedly",
        play_style: "Short play sessions",
        walk_preference: "Leisurely strolls",
    },
    Breed {
        id: "yorkie",
        name: "Yorkshire Terrier",
        emoji: "🐕",
        traits: ["Brave", "Determined", "Spirited"],
        energy_level: EnergyLevel::Medium,
        playfulness: 75,
        description: "Big personality in a small package.",
        feed_time: "Dainty eater",
        play_style: "Toy play",
        walk_preference: "Short walks",
    },
    Breed {
        id: "corgi",
        name: "Corgi",
        emoji: "🐕",
        traits: ["Bold", "Friendly", "Active"],
        energy_level: EnergyLevel::High,
        playfulness: 92,
        description: "Bold and friendly herders with short legs.",
        feed_time: "Eager eater",
        play_style: "Herding games",
        walk_preference: "Energetic walks",
    },
    Breed {
        id: "dachshund",
        name: "Dachshund",
        emoji: "🌭",
        traits: ["Clever", "Stubborn", "Devoted"],
        energy_level: EnergyLevel::Medium,
        playfulness: 78,
        description: "Clever little hot dogs with big personalities.",
        feed_time: "Watch the portions!",
        play_style: "Digging and burrowing",
        walk_preference: "Moderate walks",
    },
    Breed {
        id: "shihtzu",
        name: "Shih Tzu",
        emoji: "🐕",
        traits: ["Affectionate", "Playful", "Outgoing"],
        energy_level: EnergyLevel::Low,
        playfulness: 72,
        description: "Affectionate lap dogs who love companionship.",
        feed_time: "Delicate eater",
        play_style: "Indoor play",
        walk_preference: "Short gentle walks",
    },
    Breed {
        id: "pomeranian",
        name: "Pomeranian",
        emoji: "🦊",
        traits: ["Bold", "Lively", "Inquisitive"],
        energy_level: EnergyLevel::High,
        playfulness: 85,
        description: "Bold and lively little fluff balls.",
        feed_time: "Small portions",
        play_style: "Active play",
        walk_preference: "Prancing walks",
    },
    Breed {
        id: "frenchie",
        name: "French Bulldog",
        emoji: "🐶",
        traits: ["Adaptable", "Playful", "Smart"],
        energy_level: EnergyLevel::Low,
        playfulness: 75,
        description: "Adaptable and playful city companions.",
        feed_time: "Loves snacks",
        play_style: "Moderate play",
        walk_preference: "Short walks",
    },
    Breed {
        id: "husky",
        name: "Siberian Husky",
        emoji: "🐺",
        traits: ["Outgoing", "Mischievous", "Loyal"],
        energy_level: EnergyLevel::VeryHigh,
        playfulness: 95,
        description: "Outgoing and mischievous snow lovers.",
        feed_time: "Big appetite",
        play_style: "Running and pulling",
        walk_preference: "Long adventures",
    },
    Breed {
        id: "chihuahua",
        name: "Chihuahua",
        emoji: "🐕",
        traits: ["Sassy", "Charming", "Loyal"],
        energy_level: EnergyLevel::Medium,
        playfulness: 70,
        description: "Sassy and charming pocket-sized companions.",
        feed_time: "Tiny portions",
        play_style: "Indoor games",
        walk_preference: "Short walks",
    },
    Breed {
        id: "collie",
        name: "Border Collie",
        emoji: "🐕",
        traits: ["Smart", "Energetic", "Responsive"],
        energy_level: EnergyLevel::VeryHigh,
        playfulness: 98,
        description: "Smartest breed, needs mental stimulation.",
        feed_time: "Quick eater",
        play_style: "Agility training",
        walk_preference: "Active exercise",
    },
    Breed {
        id: "boxer",
        name: "Boxer",
        emoji: "🥊",
        traits: ["Fun-loving", "Bright", "Active"],
        energy_level: EnergyLevel::High,
        playfulness: 90,
        description: "Fun-loving and full of energy.",
        feed_time: "Enthusiastic eater",
        play_style: "Rough play",
        walk_preference: "Energetic walks",
    },
    Breed {
        id: "dalmatian",
        name: "Dalmatian",
        emoji: "🐕",
        traits: ["Outgoing", "Dignified", "Smart"],
        energy_level: EnergyLevel::VeryHigh,
        playfulness: 88,
        description: "Outgoing and dignified spotted companions.",
        feed_time: "Regular meals",
        play_style: "Running games",
        walk_preference: "Long runs",
    },
    Breed {
        id: "aussie",
        name: "Australian Shepherd",
        emoji: "🐕",
        traits: ["Smart", "Work-oriented", "Exuberant"],
        energy_level: EnergyLevel::VeryHigh,
        playfulness: 95,
        description: "Smart herders who love having a job.",
        feed_time: "Earned meals",
        play_style: "Herding activities",
        walk_preference: "Active adventures",
    },
    Breed {
        id: "maltese",
        name: "Maltese",
        emoji: "🐕",
        traits: ["Gentle", "Playful", "Charming"],
        energy_level: EnergyLevel::Low,
        playfulness: 68,
        description: "Gentle and fearless little white clouds.",
        feed_time: "Small portions",
        play_style: "Gentle play",
        walk_preference: "Light walks",
    },
    Breed {
        id: "shiba",
        name: "Shiba Inu",
        emoji: "🐕",
        traits: ["Alert", "Active", "Spirited"],
        energy_level: EnergyLevel::High,
        playfulness: 80,
        description: "Alert and spirited Japanese companions.",
        feed_time: "Independent eater",
        play_style: "Chase games",
        walk_preference: "Exploration walks",
    },
    Breed {
        id: "cavalier",
        name: "Cavalier King Charles",
        emoji: "🐕",
        traits: ["Affectionate", "Gentle", "Graceful"],
        energy_level: EnergyLevel::Medium,
        playfulness: 75,
        description: "Affectionate and gentle lap warmers.",
        feed_time: "Polite eater",
        play_style: "Gentle games",
        walk_preference: "Leisurely walks",
    },
    Breed {
        id: "rottweiler",
        name: "Rottweiler",
        emoji: "🐕",
        traits: ["Loyal", "Loving", "Guardian"],
        energy_level: EnergyLevel::Medium,
        playfulness: 75,
        description: "Loyal guardians with a soft heart.",
        feed_time: "Hearty appetite",
        play_style: "Tug of war",
        walk_preference: "Steady walks",
    },
    Breed {
        id: "schnauzer",
        name: "Miniature Schnauzer",
        emoji: "🐕",
        traits: ["Friendly", "Obedient", "Smart"],
        energy_level: EnergyLevel::High,
        playfulness: 82,
        description: "Friendly and obedient little bearded companions.",
        feed_time: "Regular schedule",
        play_style: "Interactive play",
        walk_preference: "Daily walks",
    },
    Breed {
        id: "bichon",
        name: "Bichon Frise",
        emoji: "🐕",
        traits: ["Playful", "Curious", "Peppy"],
        energy_level: EnergyLevel::Medium,
        playfulness: 85,
        description: "Playful white puffballs full of personality.",
        feed_time: "Small meals",
        play_style: "Chase and fetch",
        walk_preference: "Happy walks",
    },
    Breed {
        id: "boston",
        name: "Boston Terrier",
        emoji: "🐕",
        traits: ["Friendly", "Bright", "Amusing"],
        energy_level: EnergyLevel::Medium,
        playfulness: 80,
        description: "Friendly little gentlemen in tuxedos.",
        feed_time: "Moderate portions",
        play_style: "Ball games",
        walk_preference: "City walks",
    },
    Breed {
        id: "sheltie",
        name: "Sheltie",
        emoji: "🐕",
        traits: ["Playful", "Energetic", "Bright"],
        energy_level: EnergyLevel::High,
        playfulness: 88,
        description: "Playful and energetic mini collies.",
        feed_time: "Active appetite",
        play_style: "Agility fun",
        walk_preference: "Active walks",
    },
    Breed {
        id: "doberman",
        name: "Doberman",
        emoji: "🐕",
        traits: ["Loyal", "Fearless", "Alert"],
        energy_level: EnergyLevel::High,
        playfulness: 78,
        description: "Loyal and fearless protectors.",
        feed_time: "Large portions",
        play_style: "Training games",
        walk_preference: "Brisk walks",
    },
    Breed {
        id: "cocker",
        name: "Cocker Spaniel",
        emoji: "🐕",
        traits: ["Gentle", "Smart", "Happy"],
        energy_level: EnergyLevel::Medium,
        playfulness: 82,
        description: "Gentle and happy sporting dogs.",
        feed_time: "Loves food",
        play_style: "Fetching",
        walk_preference: "Nature walks",
    },
    Breed {
        id: "pitbull",
        name: "Pit Bull",
        emoji: "🐕",
        traits: ["Confident", "Smart", "Good-natured"],
        energy_level: EnergyLevel::High,
        playfulness: 85,
        description: "Confident and good-natured companions.",
        feed_time: "Big appetite",
        play_style: "Strong play",
        walk_preference: "Active walks",
    },
    Breed {
        id: "dane",
        name: "Great Dane",
        emoji: "🐕",
        traits: ["Friendly", "Patient", "Dependable"],
        energy_level: EnergyLevel::Medium,
        playfulness: 70,
        description: "Gentle giants with big hearts.",
        feed_time: "Large portions",
        play_style: "Gentle giant games",
        walk_preference: "Moderate walks",
    },
    Breed {
        id: "poodle",
        name: "Poodle",
        emoji: "🐩",
        traits: ["Intelligent", "Active", "Elegant"],
        energy_level: EnergyLevel::High,
        playfulness: 88,
        description: "Intelligent and elegant water dogs.",
        feed_time: "Proper portions",
        play_style: "Water games",
        walk_preference: "Daily exercise",
    },
    Breed {
        id: "chow",
        name: "Chow Chow",
        emoji: "🐕",
        traits: ["Dignified", "Bright", "Independent"],
        energy_level: EnergyLevel::Low,
        playfulness: 60,
        description: "Dignified and independent lion dogs.",
        feed_time: "Independent eater",
        play_style: "Calm activities",
        walk_preference: "Short walks",
    },
    Breed {
        id: "bernese",
        name: "Bernese Mountain Dog",
        emoji: "🐕",
        traits: ["Good-natured", "Calm", "Strong"],
        energy_level: EnergyLevel::Medium,
        playfulness: 75,
        description: "Good-natured gentle giants.",
        feed_time: "Large meals",
        play_style: "Gentle play",
        walk_preference: "Mountain walks",
    },
    Breed {
        id: "jack",
        name: "Jack Russell",
        emoji: "🐕",
        traits: ["Energetic", "Clever", "Fearless"],
        energy_level: EnergyLevel::VeryHigh,
        playfulness: 95,
        description: "Energetic and clever little athletes.",
        feed_time: "Quick eater",
        play_style: "High-energy play",
        walk_preference: "Adventure walks",
    },
];
