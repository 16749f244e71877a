use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use visadesk_core::customers::{
    generate_tracking_code, Customer, CustomerRepositoryTrait, NewCustomer,
};
use visadesk_core::Result;

use super::model::CustomerDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::customers;
use crate::schema::customers::dsl::*;

/// Repository for managing customer data in the database.
pub struct CustomerRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl CustomerRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Replaces the stored row with `customer`, keyed by id.
///
/// `created_at` never changes after insert; the stored value is carried over
/// regardless of what the caller passes in. Fails when no row with that id
/// exists.
fn replace_customer(customer: Customer, conn: &mut SqliteConnection) -> Result<Customer> {
    let mut customer_db: CustomerDB = customer.into();

    let existing = customers
        .find(&customer_db.id)
        .select(CustomerDB::as_select())
        .first::<CustomerDB>(conn)
        .map_err(StorageError::from)?;
    customer_db.created_at = existing.created_at;

    diesel::update(customers.find(&customer_db.id))
        .set(&customer_db)
        .execute(conn)
        .map_err(StorageError::from)?;

    Ok(customer_db.into())
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer> {
        new_customer.validate()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Customer> {
                let mut customer_db: CustomerDB = new_customer.into();
                if customer_db.id.is_empty() {
                    customer_db.id = Uuid::new_v4().to_string();
                }
                if customer_db.tracking_code.is_empty() {
                    customer_db.tracking_code = generate_tracking_code();
                }

                diesel::insert_into(customers::table)
                    .values(&customer_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(customer_db.into())
            })
            .await
    }

    async fn update(&self, customer: Customer) -> Result<Customer> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Customer> {
                replace_customer(customer, conn)
            })
            .await
    }

    fn find_by_tracking_code(&self, code: &str) -> Result<Option<Customer>> {
        let mut conn = get_connection(&self.pool)?;

        let result = customers
            .filter(tracking_code.eq(code))
            .select(CustomerDB::as_select())
            .first::<CustomerDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(result.map(Customer::from))
    }

    fn list(&self) -> Result<Vec<Customer>> {
        let mut conn = get_connection(&self.pool)?;

        let results = customers
            .select(CustomerDB::as_select())
            .order(created_at.asc())
            .load::<CustomerDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Customer::from).collect())
    }

    fn find_by_tracking_code_in_transaction(
        &self,
        code: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Customer>> {
        let result = customers
            .filter(tracking_code.eq(code))
            .select(CustomerDB::as_select())
            .first::<CustomerDB>(conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(result.map(Customer::from))
    }

    fn update_in_transaction(
        &self,
        customer: Customer,
        conn: &mut SqliteConnection,
    ) -> Result<Customer> {
        replace_customer(customer, conn)
    }
}

// ================================
// Tests
// ================================
