use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use visadesk_core::invoices::{Invoice, InvoiceRepositoryTrait, NewInvoice};
use visadesk_core::Result;

use super::model::InvoiceDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::invoices;
use crate::schema::invoices::dsl::*;

/// Repository for managing invoice data in the database.
pub struct InvoiceRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl InvoiceRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn insert_invoice(new_invoice: NewInvoice, conn: &mut SqliteConnection) -> Result<Invoice> {
    new_invoice.validate()?;

    let mut invoice_db: InvoiceDB = new_invoice.into();
    if invoice_db.id.is_empty() {
        invoice_db.id = Uuid::new_v4().to_string();
    }

    let inserted = diesel::insert_into(invoices::table)
        .values(&invoice_db)
        .returning(InvoiceDB::as_returning())
        .get_result(conn)
        .map_err(StorageError::from)?;

    Ok(Invoice::from(inserted))
}

#[async_trait]
impl InvoiceRepositoryTrait for InvoiceRepository {
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Invoice> {
                insert_invoice(new_invoice, conn)
            })
            .await
    }

    fn create_in_transaction(
        &self,
        new_invoice: NewInvoice,
        conn: &mut SqliteConnection,
    ) -> Result<Invoice> {
        insert_invoice(new_invoice, conn)
    }

    fn list_by_tracking_code(&self, code: &str) -> Result<Vec<Invoice>> {
        let mut conn = get_connection(&self.pool)?;

        let results = invoices
            .filter(tracking_code.eq(code))
            .select(InvoiceDB::as_select())
            .order(created_at.asc())
            .load::<InvoiceDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Invoice::from).collect())
    }
}

// ================================
// Tests
// ================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use rust_decimal_macros::dec;
    use tempfile::{tempdir, TempDir};
    use visadesk_core::errors::{Error, ValidationError};
    use visadesk_core::invoices::InvoiceStatus;

    async fn create_test_repository() -> (InvoiceRepository, TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        let repository = InvoiceRepository::new(Arc::clone(&pool), writer);
        (repository, temp_dir)
    }

    fn invoice_for(code: &str, amount_value: rust_decimal::Decimal) -> NewInvoice {
        NewInvoice {
            id: None,
            tracking_code: code.to_string(),
            amount: amount_value,
            currency: "USD".to_string(),
            description: "Tourist visa processing fee".to_string(),
            status: InvoiceStatus::Issued,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_round_trips_the_amount() {
        let (repository, _temp_dir) = create_test_repository().await;

        let created = repository
            .create(invoice_for("AAAA1111", dec!(150.00)))
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.amount, dec!(150.00));
        assert_eq!(created.status, InvoiceStatus::Issued);

        let listed = repository.list_by_tracking_code("AAAA1111").unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_list_filters_by_tracking_code() {
        let (repository, _temp_dir) = create_test_repository().await;

        let first = repository
            .create(invoice_for("AAAA1111", dec!(150.00)))
            .await
            .unwrap();
        let second = repository
            .create(invoice_for("AAAA1111", dec!(35.50)))
            .await
            .unwrap();
        repository
            .create(invoice_for("BBBB2222", dec!(99.99)))
            .await
            .unwrap();

        let listed = repository.list_by_tracking_code("AAAA1111").unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains(&first));
        assert!(listed.contains(&second));

        assert!(repository.list_by_tracking_code("CCCC3333").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_amount() {
        let (repository, _temp_dir) = create_test_repository().await;

        let err = repository
            .create(invoice_for("AAAA1111", dec!(0)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
        assert!(repository.list_by_tracking_code("AAAA1111").unwrap().is_empty());
    }
}
