//! SQLite-backed supplier and product repositories.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::{Product, ProductDraft, Supplier, SupplierDraft};

use super::crud_macros::impl_crud_repository;
use super::models::{ProductChanges, ProductRow, SupplierChanges, SupplierRow};
use super::schema::{products, suppliers};

impl_crud_repository!(
    /// Diesel-backed supplier repository.
    DieselSupplierRepository {
        label: "Supplier",
        entity: Supplier,
        draft: SupplierDraft,
        row: SupplierRow,
        changes: SupplierChanges,
        table: suppliers,
        id: supplier_id,
    }
);

impl_crud_repository!(
    /// Diesel-backed product repository.
    ///
    /// A duplicate `sku` is reported as a conflict and an unknown
    /// `supplierId` as a validation error.
    DieselProductRepository {
        label: "Product",
        entity: Product,
        draft: ProductDraft,
        row: ProductRow,
        changes: ProductChanges,
        table: products,
        id: product_id,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::CrudRepository;
    use crate::outbound::persistence::{Database, DatabaseConfig};
    use rstest::rstest;

    async fn open() -> Database {
        Database::open(DatabaseConfig::in_memory())
            .await
            .expect("in-memory database opens")
    }

    fn supplier(name: &str) -> SupplierDraft {
        SupplierDraft {
            name: name.to_owned(),
            description: None,
            contact_person: None,
            email: Some("orders@catnip.example".to_owned()),
            phone: None,
        }
    }

    fn product(supplier_id: i64, sku: &str) -> ProductDraft {
        ProductDraft {
            supplier_id,
            name: "SmartFeeder One".to_owned(),
            description: None,
            price: 129.99,
            sku: sku.to_owned(),
            unit: None,
            img_name: None,
            discount: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn supplier_lifecycle() {
        let repo = DieselSupplierRepository::new(open().await);

        let created = repo
            .create(supplier("Catnip Logistics"))
            .await
            .expect("create supplier");
        assert_eq!(created.supplier_id, 1);

        let mut replacement = supplier("Catnip Logistics Ltd");
        replacement.email = None;
        let updated = repo
            .update(created.supplier_id, replacement)
            .await
            .expect("update supplier");
        assert_eq!(updated.name, "Catnip Logistics Ltd");
        assert!(updated.email.is_none());

        repo.delete(created.supplier_id).await.expect("delete supplier");
        assert!(
            repo.find_by_id(created.supplier_id)
                .await
                .expect("lookup")
                .is_none()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn find_all_orders_by_identifier() {
        let repo = DieselSupplierRepository::new(open().await);
        for name in ["Alpha", "Beta", "Gamma"] {
            repo.create(supplier(name)).await.expect("create supplier");
        }
        let names: Vec<String> = repo
            .find_all()
            .await
            .expect("list")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let repo = DieselSupplierRepository::new(open().await);

        let err = repo.delete(99).await.expect_err("nothing to delete");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "Supplier with ID 99 not found");

        let err = repo
            .update(99, supplier("Ghost"))
            .await
            .expect_err("nothing to update");
        assert_eq!(err.message(), "Supplier with ID 99 not found");
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_sku_is_a_conflict() {
        let database = open().await;
        let suppliers = DieselSupplierRepository::new(database.clone());
        let products = DieselProductRepository::new(database);
        let owner = suppliers
            .create(supplier("Catnip Logistics"))
            .await
            .expect("create supplier");

        products
            .create(product(owner.supplier_id, "CAT-FEED-001"))
            .await
            .expect("first product");
        let err = products
            .create(product(owner.supplier_id, "CAT-FEED-001"))
            .await
            .expect_err("duplicate sku");

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "Conflict: Resource already exists");
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_supplier_is_a_validation_error() {
        let products = DieselProductRepository::new(open().await);
        let err = products
            .create(product(404, "CAT-FEED-002"))
            .await
            .expect_err("dangling supplier");
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(
            err.message(),
            "Validation error: Invalid reference to related entity"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn referenced_supplier_cannot_be_deleted() {
        let database = open().await;
        let suppliers = DieselSupplierRepository::new(database.clone());
        let products = DieselProductRepository::new(database);
        let owner = suppliers
            .create(supplier("Catnip Logistics"))
            .await
            .expect("create supplier");
        products
            .create(product(owner.supplier_id, "CAT-FEED-003"))
            .await
            .expect("create product");

        let err = suppliers
            .delete(owner.supplier_id)
            .await
            .expect_err("supplier still referenced");
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[rstest]
    #[tokio::test]
    async fn closed_database_reports_database_error() {
        let database = open().await;
        let repo = DieselSupplierRepository::new(database.clone());
        database.close().await;

        let err = repo.find_all().await.expect_err("closed handle");
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[rstest]
    #[tokio::test]
    async fn locked_database_reports_busy() {
        use diesel::Connection;
        use diesel::connection::SimpleConnection;
        use std::time::Duration;

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("storefront.db");
        let url = path.to_str().expect("utf-8 path").to_owned();
        let database = Database::open(
            DatabaseConfig::new(url.clone()).with_busy_timeout(Duration::from_millis(50)),
        )
        .await
        .expect("file database opens");
        let repo = DieselSupplierRepository::new(database.clone());

        let mut holder = diesel::SqliteConnection::establish(&url).expect("second connection");
        holder.batch_execute("BEGIN EXCLUSIVE").expect("exclusive lock taken");

        let err = repo
            .create(supplier("Catnip Logistics"))
            .await
            .expect_err("writer is locked out");
        assert_eq!(err.code(), ErrorCode::DatabaseBusy);
        assert_eq!(err.message(), "Database is temporarily unavailable");

        holder.batch_execute("ROLLBACK").expect("lock released");
        repo.create(supplier("Catnip Logistics"))
            .await
            .expect("write succeeds once the lock is gone");
        database.close().await;
    }
}
