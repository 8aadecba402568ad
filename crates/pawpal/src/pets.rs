// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pawpal pet` and `pawpal memory` command implementations.

use colored::Colorize;
use pawpal_agent::PawpalApp;
use pawpal_core::{PawpalError, PetId, PetProfile};
use pawpal_sim::breeds;
use tracing::warn;

/// Fields collected by `pawpal pet create`.
#[derive(Debug, Clone, Default)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub traits: String,
    pub habits: String,
    pub memorial: bool,
    pub variant: Option<String>,
}

impl NewPet {
    pub fn into_profile(self) -> PetProfile {
        let breed = self.breed.filter(|b| {
            let known = breeds::by_id(b).is_some();
            if !known {
                warn!(breed = %b, "unknown breed, ignoring");
            }
            known
        });
        PetProfile {
            breed,
            traits: self.traits,
            habits: self.habits,
            variant: self.variant,
            ..PetProfile::new(self.name.trim(), self.species.trim(), !self.memorial)
        }
    }
}

pub async fn create(app: &PawpalApp, new: NewPet) -> Result<(), PawpalError> {
    let pet = app.state().create_pet(new.into_profile()).await?;
    println!(
        "Created {} ({}) and made them your current pet.",
        pet.name.bold(),
        pet.persona()
    );
    println!("{}", format!("id: {}", pet.id).dimmed());
    Ok(())
}

pub async fn list(app: &PawpalApp) -> Result<(), PawpalError> {
    let pets = app.state().list_pets().await?;
    if pets.is_empty() {
        println!("No pets yet. Create one with `pawpal pet create <name>`.");
        return Ok(());
    }
    let current = app.state().current_pet().await?.map(|p| p.id);
    for pet in pets {
        let marker = if current.as_ref() == Some(&pet.id) { "*" } else { " " };
        println!(
            "{marker} {}  {} the {} ({})",
            pet.id.to_string().dimmed(),
            pet.display_name(),
            pet.display_species(),
            pet.persona()
        );
    }
    Ok(())
}

pub async fn switch(app: &PawpalApp, id: &str) -> Result<(), PawpalError> {
    let pet = app.state().switch_pet(&PetId(id.to_string())).await?;
    println!("Switched to {}.", pet.display_name().bold());
    Ok(())
}

pub async fn delete(app: &PawpalApp, id: &str) -> Result<(), PawpalError> {
    app.state().delete_pet(&PetId(id.to_string())).await?;
    println!("Deleted pet {id}.");
    Ok(())
}

pub async fn add_memory(
    app: &PawpalApp,
    text: &str,
    photo: Option<String>,
    video: Option<String>,
) -> Result<(), PawpalError> {
    let pet = app.state().require_current_pet().await?;
    let memory = app.state().add_memory(&pet.id, text, photo, video).await?;
    println!("Saved memory {} for {}.", memory.id.dimmed(), pet.display_name());
    Ok(())
}

pub async fn list_memories(app: &PawpalApp) -> Result<(), PawpalError> {
    let pet = app.state().require_current_pet().await?;
    let memories = app.state().memories(&pet.id).await?;
    if memories.is_empty() {
        println!("No memories of {} yet.", pet.display_name());
    }
    for m in memories {
        let source = if m.is_chat_message { " 💬" } else { "" };
        println!(
            "{}  {}{source}",
            m.date.format("%Y-%m-%d").to_string().dimmed(),
            m.text
        );
        for media in [m.photo.as_deref(), m.video.as_deref()].into_iter().flatten() {
            println!("            📎 {media}");
        }
        println!("            {}", format!("id: {}", m.id).dimmed());
    }
    Ok(())
}

pub async fn delete_memory(app: &PawpalApp, id: &str) -> Result<(), PawpalError> {
    app.state().delete_memory(id).await?;
    println!("Memory deleted.");
    Ok(())
}

/// Saves a turn from the current pet's conversation as a memory.
pub async fn promote(app: &PawpalApp, turn_id: &str) -> Result<(), PawpalError> {
    let chat = app.chat().await?;
    let memory = chat.promote(turn_id).await?;
    println!("Saved \"{}\" to memories.", memory.text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawpal_core::Persona;

    #[test]
    fn memorial_flag_flips_persona() {
        let pet = NewPet {
            name: " Shadow ".into(),
            species: "cat".into(),
            memorial: true,
            ..NewPet::default()
        }
        .into_profile();
        assert_eq!(pet.name, "Shadow");
        assert_eq!(pet.persona(), Persona::Memorial);
    }

    #[test]
    fn unknown_breed_is_dropped() {
        let pet = NewPet {
            name: "Rex".into(),
            species: "dog".into(),
            breed: Some("not-a-breed".into()),
            ..NewPet::default()
        }
        .into_profile();
        assert_eq!(pet.breed, None);
        assert_eq!(pet.persona(), Persona::Companion);
    }
}
