//! Tests for CustomerService behavior over a mock repository.

#[cfg(test)]
mod tests {
    use crate::customers::customers_model::{Customer, CustomerStatus, NewCustomer};
    use crate::customers::customers_service::CustomerService;
    use crate::customers::customers_traits::{CustomerRepositoryTrait, CustomerServiceTrait};
    use crate::customers::tracking_code::{generate_tracking_code, is_valid_tracking_code};
    use crate::errors::{DatabaseError, Error, Result};
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use diesel::sqlite::SqliteConnection;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock CustomerRepository
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockCustomerRepository {
        customers: Arc<Mutex<Vec<Customer>>>,
    }

    impl MockCustomerRepository {
        fn new() -> Self {
            Self::default()
        }

        fn with_customers(customers: Vec<Customer>) -> Self {
            Self {
                customers: Arc::new(Mutex::new(customers)),
            }
        }

        fn stored(&self) -> Vec<Customer> {
            self.customers.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CustomerRepositoryTrait for MockCustomerRepository {
        async fn create(&self, new_customer: NewCustomer) -> Result<Customer> {
            new_customer.validate()?;
            let mut customers = self.customers.lock().unwrap();

            let tracking_code = new_customer
                .tracking_code
                .unwrap_or_else(generate_tracking_code);
            if customers.iter().any(|c| c.email == new_customer.email) {
                return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                    "customers.email: {}",
                    new_customer.email
                ))));
            }
            if customers.iter().any(|c| c.tracking_code == tracking_code) {
                return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                    "customers.tracking_code: {}",
                    tracking_code
                ))));
            }

            let customer = Customer {
                id: new_customer
                    .id
                    .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                tracking_code,
                full_name: new_customer.full_name,
                email: new_customer.email,
                phone: new_customer.phone,
                passport_number: new_customer.passport_number,
                consulate: new_customer.consulate,
                visa_type: new_customer.visa_type,
                status: CustomerStatus::Registered,
                appointment_date: None,
                appointment_time: None,
                invoice_id: None,
                notes: new_customer.notes,
                created_at: Utc::now(),
            };
            customers.push(customer.clone());
            Ok(customer)
        }

        async fn update(&self, customer: Customer) -> Result<Customer> {
            let mut customers = self.customers.lock().unwrap();
            let existing = customers
                .iter_mut()
                .find(|c| c.id == customer.id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!(
                        "Customer {} not found",
                        customer.id
                    )))
                })?;
            let mut replacement = customer;
            replacement.created_at = existing.created_at;
            *existing = replacement.clone();
            Ok(replacement)
        }

        fn find_by_tracking_code(&self, tracking_code: &str) -> Result<Option<Customer>> {
            let customers = self.customers.lock().unwrap();
            Ok(customers
                .iter()
                .find(|c| c.tracking_code == tracking_code)
                .cloned())
        }

        fn list(&self) -> Result<Vec<Customer>> {
            Ok(self.customers.lock().unwrap().clone())
        }

        fn find_by_tracking_code_in_transaction(
            &self,
            tracking_code: &str,
            _conn: &mut SqliteConnection,
        ) -> Result<Option<Customer>> {
            self.find_by_tracking_code(tracking_code)
        }

        fn update_in_transaction(
            &self,
            customer: Customer,
            _conn: &mut SqliteConnection,
        ) -> Result<Customer> {
            let mut customers = self.customers.lock().unwrap();
            let existing = customers
                .iter_mut()
                .find(|c| c.id == customer.id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!(
                        "Customer {} not found",
                        customer.id
                    )))
                })?;
            *existing = customer.clone();
            Ok(customer)
        }
    }

    // =========================================================================
    // Test Helpers
    // =========================================================================

    fn registration(email: &str) -> NewCustomer {
        NewCustomer {
            id: None,
            tracking_code: None,
            full_name: "Ada Lovelace".to_string(),
            email: email.to_string(),
            phone: "+90 555 000 0000".to_string(),
            passport_number: "U1234567".to_string(),
            consulate: "Istanbul".to_string(),
            visa_type: "Tourist Visa".to_string(),
            notes: None,
        }
    }

    fn customer_on_file(
        code: &str,
        status: CustomerStatus,
        appointment: Option<(NaiveDate, &str)>,
    ) -> Customer {
        Customer {
            id: format!("id-{}", code),
            tracking_code: code.to_string(),
            full_name: format!("Customer {}", code),
            email: format!("{}@example.com", code.to_lowercase()),
            phone: "+90 555 000 0000".to_string(),
            passport_number: format!("P{}", code),
            consulate: "Ankara".to_string(),
            visa_type: "Business Visa".to_string(),
            status,
            appointment_date: appointment.map(|(d, _)| d),
            appointment_time: appointment.map(|(_, t)| t.to_string()),
            invoice_id: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn customer_service(repository: &MockCustomerRepository) -> CustomerService {
        CustomerService::new(Arc::new(repository.clone()))
    }

    // =========================================================================
    // Registration
    // =========================================================================

    #[tokio::test]
    async fn test_register_assigns_identity_fields() {
        let repository = MockCustomerRepository::new();
        let service = customer_service(&repository);

        let customer = service
            .register_customer(registration("ada@example.com"))
            .await
            .unwrap();

        assert!(!customer.id.is_empty());
        assert!(is_valid_tracking_code(&customer.tracking_code));
        assert_eq!(customer.status, CustomerStatus::Registered);
        assert!(customer.appointment_date.is_none());
        assert!(customer.invoice_id.is_none());
    }

    #[tokio::test]
    async fn test_register_preserves_explicit_tracking_code() {
        let repository = MockCustomerRepository::new();
        let service = customer_service(&repository);

        let mut new_customer = registration("ada@example.com");
        new_customer.tracking_code = Some("AAAA1111".to_string());

        let customer = service.register_customer(new_customer).await.unwrap();
        assert_eq!(customer.tracking_code, "AAAA1111");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_rejected() {
        let repository = MockCustomerRepository::new();
        let service = customer_service(&repository);

        service
            .register_customer(registration("ada@example.com"))
            .await
            .unwrap();
        let err = service
            .register_customer(registration("ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
        assert_eq!(repository.stored().len(), 1);
    }

    // =========================================================================
    // Lookups and Filters
    // =========================================================================

    #[test]
    fn test_lookup_miss_returns_none() {
        let repository = MockCustomerRepository::new();
        let service = customer_service(&repository);

        let found = service.get_customer_by_tracking_code("ZZZZ9999").unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_customers_with_appointments_excludes_unscheduled_and_paid() {
        let repository = MockCustomerRepository::with_customers(vec![
            customer_on_file("AAAA1111", CustomerStatus::Registered, None),
            customer_on_file(
                "BBBB2222",
                CustomerStatus::AppointmentScheduled,
                Some((date(2025, 9, 10), "10:00")),
            ),
            customer_on_file(
                "CCCC3333",
                CustomerStatus::Invoiced,
                Some((date(2025, 9, 12), "11:30")),
            ),
            customer_on_file(
                "DDDD4444",
                CustomerStatus::Paid,
                Some((date(2025, 9, 14), "09:00")),
            ),
        ]);
        let service = customer_service(&repository);

        let with_appointments = service.get_customers_with_appointments().unwrap();
        let codes: Vec<_> = with_appointments
            .iter()
            .map(|c| c.tracking_code.as_str())
            .collect();

        assert_eq!(codes.len(), 2);
        assert!(codes.contains(&"BBBB2222"));
        assert!(codes.contains(&"CCCC3333"));
    }

    #[test]
    fn test_upcoming_appointments_sorted_and_limited() {
        let repository = MockCustomerRepository::with_customers(vec![
            customer_on_file(
                "AAAA1111",
                CustomerStatus::AppointmentScheduled,
                Some((date(2025, 9, 20), "14:00")),
            ),
            customer_on_file(
                "BBBB2222",
                CustomerStatus::AppointmentScheduled,
                Some((date(2025, 9, 10), "10:00")),
            ),
            customer_on_file("CCCC3333", CustomerStatus::Registered, None),
            customer_on_file(
                "DDDD4444",
                CustomerStatus::AppointmentScheduled,
                Some((date(2025, 9, 10), "09:00")),
            ),
        ]);
        let service = customer_service(&repository);

        let upcoming = service.get_upcoming_appointments(2).unwrap();
        let codes: Vec<_> = upcoming.iter().map(|c| c.tracking_code.as_str()).collect();

        // Same-day entries order by time; the third appointment is cut off.
        assert_eq!(codes, vec!["DDDD4444", "BBBB2222"]);
    }

    #[test]
    fn test_status_summary_counts_by_status() {
        let repository = MockCustomerRepository::with_customers(vec![
            customer_on_file("AAAA1111", CustomerStatus::Registered, None),
            customer_on_file("BBBB2222", CustomerStatus::Registered, None),
            customer_on_file(
                "CCCC3333",
                CustomerStatus::AppointmentScheduled,
                Some((date(2025, 9, 10), "10:00")),
            ),
            customer_on_file("DDDD4444", CustomerStatus::Paid, None),
        ]);
        let service = customer_service(&repository);

        let summary = service.get_status_summary().unwrap();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.registered, 2);
        assert_eq!(summary.scheduled, 1);
        assert_eq!(summary.invoiced, 0);
        assert_eq!(summary.paid, 1);
    }

    // =========================================================================
    // Updates
    // =========================================================================

    #[tokio::test]
    async fn test_update_missing_customer_is_rejected() {
        let repository = MockCustomerRepository::new();
        let service = customer_service(&repository);

        let ghost = customer_on_file("AAAA1111", CustomerStatus::Registered, None);
        let err = service.update_customer(ghost).await.unwrap_err();

        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_stored_record() {
        let repository = MockCustomerRepository::new();
        let service = customer_service(&repository);

        let registered = service
            .register_customer(registration("ada@example.com"))
            .await
            .unwrap();

        let mut changed = registered.clone();
        changed.notes = Some("called to confirm documents".to_string());
        changed.status = CustomerStatus::AppointmentScheduled;
        service.update_customer(changed.clone()).await.unwrap();

        let stored = service
            .get_customer_by_tracking_code(&registered.tracking_code)
            .unwrap()
            .unwrap();
        assert_eq!(stored, changed);
    }
}
