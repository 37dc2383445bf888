//! Shared macro generating Diesel-backed CRUD repositories.

/// Generate a repository struct and its `CrudRepository` implementation.
///
/// The generated methods:
/// - check out the shared connection, failing with a database error once the
///   handle is closed
/// - convert drafts to Diesel changesets via `From`
/// - read rows back through `RETURNING` so callers see stored values
/// - report zero affected rows on `update`/`delete` as not-found for `label`
///
/// Call sites must have `diesel::prelude::*` and `diesel_async::RunQueryDsl`
/// in scope.
macro_rules! impl_crud_repository {
    (
        $(#[$meta:meta])*
        $repo:ident {
            label: $label:literal,
            entity: $entity:ty,
            draft: $draft:ty,
            row: $row:ty,
            changes: $changes:ty,
            table: $table:ident,
            id: $id:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $repo {
            database: $crate::outbound::persistence::Database,
        }

        impl $repo {
            /// Create a repository over the shared connection.
            pub fn new(database: $crate::outbound::persistence::Database) -> Self {
                Self { database }
            }
        }

        #[async_trait::async_trait]
        impl $crate::domain::ports::CrudRepository for $repo {
            type Entity = $entity;
            type Draft = $draft;

            async fn find_all(&self) -> Result<Vec<$entity>, $crate::domain::Error> {
                use $crate::outbound::persistence::error_mapping::translate;

                let mut conn = self
                    .database
                    .connection()
                    .await
                    .map_err(|err| translate(err, None))?;
                let rows = $table::table
                    .order($table::$id.asc())
                    .select(<$row>::as_select())
                    .load(&mut *conn)
                    .await
                    .map_err(|err| translate(err, None))?;
                Ok(rows.into_iter().map(<$entity>::from).collect())
            }

            async fn find_by_id(&self, id: i64) -> Result<Option<$entity>, $crate::domain::Error> {
                use $crate::outbound::persistence::error_mapping::translate;

                let mut conn = self
                    .database
                    .connection()
                    .await
                    .map_err(|err| translate(err, None))?;
                let row = $table::table
                    .find(id)
                    .select(<$row>::as_select())
                    .first(&mut *conn)
                    .await
                    .optional()
                    .map_err(|err| translate(err, None))?;
                Ok(row.map(<$entity>::from))
            }

            async fn create(&self, draft: $draft) -> Result<$entity, $crate::domain::Error> {
                use $crate::outbound::persistence::error_mapping::translate;

                let changes = <$changes>::from(draft);
                let mut conn = self
                    .database
                    .connection()
                    .await
                    .map_err(|err| translate(err, None))?;
                let row = diesel::insert_into($table::table)
                    .values(&changes)
                    .returning(<$row>::as_returning())
                    .get_result(&mut *conn)
                    .await
                    .map_err(|err| translate(err, None))?;
                tracing::debug!(entity = $label, id = row.$id, "created");
                Ok(<$entity>::from(row))
            }

            async fn update(&self, id: i64, draft: $draft) -> Result<$entity, $crate::domain::Error> {
                use $crate::outbound::persistence::error_mapping::{
                    FailureContext, StorageFailure, translate,
                };

                let context = Some(FailureContext::new($label, id));
                let changes = <$changes>::from(draft);
                let mut conn = self
                    .database
                    .connection()
                    .await
                    .map_err(|err| translate(err, context))?;
                let row = diesel::update($table::table.find(id))
                    .set(&changes)
                    .returning(<$row>::as_returning())
                    .get_result(&mut *conn)
                    .await
                    .optional()
                    .map_err(|err| translate(err, context))?;
                row.map(<$entity>::from)
                    .ok_or_else(|| translate(StorageFailure::no_rows_affected(), context))
            }

            async fn delete(&self, id: i64) -> Result<(), $crate::domain::Error> {
                use $crate::outbound::persistence::error_mapping::{
                    FailureContext, StorageFailure, translate,
                };

                let context = Some(FailureContext::new($label, id));
                let mut conn = self
                    .database
                    .connection()
                    .await
                    .map_err(|err| translate(err, context))?;
                let affected = diesel::delete($table::table.find(id))
                    .execute(&mut *conn)
                    .await
                    .map_err(|err| translate(err, context))?;
                if affected == 0 {
                    return Err(translate(StorageFailure::no_rows_affected(), context));
                }
                tracing::debug!(entity = $label, id, "deleted");
                Ok(())
            }
        }
    };
}

pub(super) use impl_crud_repository;
