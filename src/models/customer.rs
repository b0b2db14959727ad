//! Customer data models and API request/response types.

use serde::{Deserialize, Serialize};

/// Represents a customer record from the database.
///
/// # Database Table
///
/// Maps to the `customers` table. `dni` is unique and exactly 8 characters.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub email: String,
}

impl Customer {
    /// Replace every mutable field with the values from `request`.
    pub fn apply(&mut self, request: CustomerRequest) {
        self.name = request.name;
        self.surname = request.surname;
        self.dni = request.dni;
        self.email = request.email;
    }
}

/// A customer about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub email: String,
}

impl From<CustomerRequest> for NewCustomer {
    fn from(request: CustomerRequest) -> Self {
        Self {
            name: request.name,
            surname: request.surname,
            dni: request.dni,
            email: request.email,
        }
    }
}

/// Request body for creating or updating a customer.
///
/// Missing fields deserialize as empty strings so that the service can
/// report which field is required instead of failing JSON extraction.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Justin",
///   "surname": "Najarro",
///   "dni": "12345678",
///   "email": "justin@gmail.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CustomerRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub surname: String,

    #[serde(default)]
    pub dni: String,

    #[serde(default)]
    pub email: String,
}

/// Response body for customer endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub dni: String,
    pub email: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            surname: customer.surname,
            dni: customer.dni,
            email: customer.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_request_fields_become_empty() {
        let request: CustomerRequest = serde_json::from_str(r#"{"name": "Justin"}"#).unwrap();

        assert_eq!(request.name, "Justin");
        assert!(request.surname.is_empty());
        assert!(request.dni.is_empty());
        assert!(request.email.is_empty());
    }

    #[test]
    fn apply_replaces_all_mutable_fields_and_keeps_id() {
        let mut customer = Customer {
            id: 1,
            name: "Justin".into(),
            surname: "Najarro".into(),
            dni: "12345678".into(),
            email: "justin@gmail.com".into(),
        };

        customer.apply(CustomerRequest {
            name: "Justin".into(),
            surname: "Villagaray".into(),
            dni: "12345679".into(),
            email: "justin.v@gmail.com".into(),
        });

        assert_eq!(customer.id, 1);
        assert_eq!(customer.surname, "Villagaray");
        assert_eq!(customer.dni, "12345679");
        assert_eq!(customer.email, "justin.v@gmail.com");
    }
}
