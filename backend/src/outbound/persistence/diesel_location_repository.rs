//! SQLite-backed headquarters and branch repositories.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::{Branch, BranchDraft, Headquarters, HeadquartersDraft};

use super::crud_macros::impl_crud_repository;
use super::models::{BranchChanges, BranchRow, HeadquartersChanges, HeadquartersRow};
use super::schema::{branches, headquarters};

impl_crud_repository!(
    /// Diesel-backed headquarters repository.
    DieselHeadquartersRepository {
        label: "Headquarters",
        entity: Headquarters,
        draft: HeadquartersDraft,
        row: HeadquartersRow,
        changes: HeadquartersChanges,
        table: headquarters,
        id: headquarters_id,
    }
);

impl_crud_repository!(
    /// Diesel-backed branch repository.
    DieselBranchRepository {
        label: "Branch",
        entity: Branch,
        draft: BranchDraft,
        row: BranchRow,
        changes: BranchChanges,
        table: branches,
        id: branch_id,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::CrudRepository;
    use crate::outbound::persistence::{Database, DatabaseConfig};
    use rstest::rstest;

    fn office() -> HeadquartersDraft {
        HeadquartersDraft {
            name: "OctoCAT HQ".to_owned(),
            description: None,
            address: "1 Market Street".to_owned(),
            contact_person: None,
            email: None,
            phone: None,
            city: Some("Lisbon".to_owned()),
            country: Some("Portugal".to_owned()),
            floor_count: Some(3),
            capacity: Some(120),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn headquarters_round_trip_optional_counts() {
        let database = Database::open(DatabaseConfig::in_memory())
            .await
            .expect("in-memory database opens");
        let repo = DieselHeadquartersRepository::new(database);

        let created = repo.create(office()).await.expect("create headquarters");
        let fetched = repo
            .find_by_id(created.headquarters_id)
            .await
            .expect("lookup")
            .expect("headquarters stored");

        assert_eq!(fetched, created);
        assert_eq!(fetched.floor_count, Some(3));
        assert_eq!(fetched.capacity, Some(120));
    }

    #[rstest]
    #[tokio::test]
    async fn branch_needs_existing_headquarters() {
        let database = Database::open(DatabaseConfig::in_memory())
            .await
            .expect("in-memory database opens");
        let repo = DieselBranchRepository::new(database);

        let err = repo
            .create(BranchDraft {
                headquarters_id: 12,
                name: "Porto Branch".to_owned(),
                description: None,
                address: None,
                contact_person: None,
                email: None,
                phone: None,
            })
            .await
            .expect_err("dangling headquarters");

        assert_eq!(err.code(), ErrorCode::ValidationError);
    }
}
