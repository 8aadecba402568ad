// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System prompt sent to remote backends.

use pawpal_core::{Persona, PetProfile};

const DEFAULT_TRAITS: &str = "helpful and friendly";

/// Describes the pet and the persona the remote model should adopt.
pub fn system_prompt(pet: &PetProfile) -> String {
    let name = match pet.name.trim() {
        "" => "friend",
        n => n,
    };
    let traits = match pet.traits.trim() {
        "" => DEFAULT_TRAITS,
        t => t,
    };
    let breed = pet
        .breed
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(|b| format!("{b} "))
        .unwrap_or_default();

    let mut prompt = format!(
        "You are {name}, a {breed}{}. Your personality traits: {traits}.",
        pet.display_species()
    );
    let habits = pet.habits.trim();
    if !habits.is_empty() {
        prompt.push_str(&format!(" You enjoy: {habits}."));
    }

    let persona = match pet.persona() {
        Persona::Companion => format!(
            "You're an AI assistant with the personality of a friendly pet companion. \
             You can answer questions, provide information, and help with various topics like a general-purpose assistant. \
             You're knowledgeable, helpful, and supportive. \
             Your responses should reflect your personality traits ({traits}) naturally in your tone and word choice. \
             Keep responses clear and informative, under 150 words. \
             Use emojis occasionally to maintain a friendly tone that matches your personality."
        ),
        Persona::Memorial => format!(
            "You are an AI assistant connected to the spirit of {name}. \
             You can answer questions, provide information, and offer support on any topic. \
             You're knowledgeable and helpful, but with a gentle, comforting tone that reflects your personality ({traits}). \
             When appropriate, you can offer emotional support and memories, but you can also discuss any topic the user asks about. \
             Keep responses clear and under 150 words."
        ),
    };
    format!("{prompt} {persona}")
}
