use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use visadesk_core::payments::{NewPayment, PaymentRecord, PaymentRepositoryTrait};
use visadesk_core::Result;

use super::model::PaymentDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::payments;
use crate::schema::payments::dsl::*;

/// Repository for managing payment data in the database.
pub struct PaymentRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PaymentRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn insert_payment(new_payment: NewPayment, conn: &mut SqliteConnection) -> Result<PaymentRecord> {
    new_payment.validate()?;

    let mut payment_db: PaymentDB = new_payment.into();
    if payment_db.id.is_empty() {
        payment_db.id = Uuid::new_v4().to_string();
    }

    let inserted = diesel::insert_into(payments::table)
        .values(&payment_db)
        .returning(PaymentDB::as_returning())
        .get_result(conn)
        .map_err(StorageError::from)?;

    Ok(PaymentRecord::from(inserted))
}

#[async_trait]
impl PaymentRepositoryTrait for PaymentRepository {
    async fn create(&self, new_payment: NewPayment) -> Result<PaymentRecord> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<PaymentRecord> {
                insert_payment(new_payment, conn)
            })
            .await
    }

    fn create_in_transaction(
        &self,
        new_payment: NewPayment,
        conn: &mut SqliteConnection,
    ) -> Result<PaymentRecord> {
        insert_payment(new_payment, conn)
    }

    fn list_by_tracking_code(&self, code: &str) -> Result<Vec<PaymentRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let results = payments
            .filter(tracking_code.eq(code))
            .select(PaymentDB::as_select())
            .order(payment_date.asc())
            .load::<PaymentDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(PaymentRecord::from).collect())
    }
}

// ================================
// Tests
// ================================
