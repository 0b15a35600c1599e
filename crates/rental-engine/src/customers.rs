//! # Customer Registry
//!
//! Append-only set of walk-in customers.
//!
//! Ids are `CUS1`, `CUS2`, ... drawn from a monotonic counter, so an id is
//! never reused even if registration ever stops being the only writer.

use std::collections::HashMap;

use rental_core::validation::{validate_new_customer, ValidationResult};
use rental_core::{Customer, CustomerId, NewCustomer, CUSTOMER_ID_PREFIX};

#[derive(Debug, Clone)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
    index: HashMap<CustomerId, usize>,
    prefix: String,
    next_seq: u64,
}

impl CustomerRegistry {
    /// Creates an empty registry issuing ids with the given prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        CustomerRegistry {
            customers: Vec::new(),
            index: HashMap::new(),
            prefix: prefix.into(),
            next_seq: 1,
        }
    }

    /// Registers a customer.
    ///
    /// ## Errors
    /// `ValidationError` if any field is blank after trimming. Nothing is
    /// registered and no id is consumed.
    pub fn register(&mut self, details: &NewCustomer) -> ValidationResult<Customer> {
        let valid = validate_new_customer(details)?;
        Ok(self.insert_validated(valid))
    }

    /// Registers details that already went through
    /// [`validate_new_customer`].
    pub(crate) fn insert_validated(&mut self, valid: NewCustomer) -> Customer {
        let id = CustomerId::sequential(&self.prefix, self.next_seq);
        self.next_seq += 1;

        let customer = Customer::new(id, valid);
        self.index.insert(customer.id.clone(), self.customers.len());
        self.customers.push(customer.clone());
        customer
    }

    pub fn find_by_id(&self, id: &CustomerId) -> Option<&Customer> {
        self.index.get(id).map(|&i| &self.customers[i])
    }

    /// All customers in registration order.
    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl Default for CustomerRegistry {
    fn default() -> Self {
        CustomerRegistry::with_prefix(CUSTOMER_ID_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::ValidationError;

    #[test]
    fn test_sequential_ids() {
        let mut registry = CustomerRegistry::default();
        let first = registry
            .register(&NewCustomer::new("Asha", "555-0101", "DL-1"))
            .unwrap();
        let second = registry
            .register(&NewCustomer::new("Ben", "555-0102", "DL-2"))
            .unwrap();

        assert_eq!(first.id.as_str(), "CUS1");
        assert_eq!(second.id.as_str(), "CUS2");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_id(&second.id), Some(&second));
    }

    #[test]
    fn test_blank_name_rejected_without_side_effects() {
        let mut registry = CustomerRegistry::default();
        let err = registry
            .register(&NewCustomer::new("   ", "555-0101", "DL-1"))
            .unwrap_err();

        assert!(matches!(err, ValidationError::Required { .. }));
        assert!(registry.is_empty());

        // The failed attempt did not burn an id
        let customer = registry
            .register(&NewCustomer::new("Asha", "555-0101", "DL-1"))
            .unwrap();
        assert_eq!(customer.id.as_str(), "CUS1");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut registry = CustomerRegistry::default();
        let customer = registry
            .register(&NewCustomer::new(" Asha ", " 555-0101", "DL-1 "))
            .unwrap();
        assert_eq!(customer.name, "Asha");
        assert_eq!(customer.contact_number, "555-0101");
        assert_eq!(customer.license_number, "DL-1");
    }

    #[test]
    fn test_custom_prefix() {
        let mut registry = CustomerRegistry::with_prefix("WALK");
        let customer = registry
            .register(&NewCustomer::new("Asha", "555-0101", "DL-1"))
            .unwrap();
        assert_eq!(customer.id.as_str(), "WALK1");
        assert_eq!(registry.list().len(), 1);
    }
}
