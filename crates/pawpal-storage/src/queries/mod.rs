// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules. Each takes a `&Database` and runs on its writer thread.

pub mod care;
pub mod memories;
pub mod pets;
pub mod settings;
pub mod turns;

#[cfg(test)]
pub(crate) mod test_support {
    use pawpal_core::PetProfile;
    use tempfile::TempDir;

    use crate::database::Database;

    pub async fn db_with_pet() -> (Database, PetProfile, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("test.db").to_str().unwrap())
            .await
            .unwrap();
        let pet = PetProfile::new("Rex", "dog", true);
        super::pets::upsert_pet(&db, &pet).await.unwrap();
        (db, pet, dir)
    }
}
