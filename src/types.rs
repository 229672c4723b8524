//! Common datatypes supporting functions throughout the Customer360 core

use serde::Deserialize;

/// One row of the customer profile dataset.
///
/// Every field is kept as a string; numeric fields such as `annual_income`
/// and `credit_score` are interpreted on demand by whoever renders them.
/// Missing columns deserialize to empty strings rather than failing the load.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerProfile {
    /// Unique identifier joining the profile to holdings and transactions
    pub customer_id: String,
    /// The customer's first name
    pub first_name: String,
    /// The customer's last name
    pub last_name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Mailing address
    pub address: String,
    /// Date of birth, as recorded in the source dataset
    pub date_of_birth: String,
    /// Stated occupation
    pub occupation: String,
    /// Stated employer
    pub employer: String,
    /// Annual income, stored as a string
    pub annual_income: String,
    /// Credit score, stored as a string
    pub credit_score: String,
    /// Risk classification assigned to the customer
    pub risk_level: String,
    /// Date the customer relationship began
    pub join_date: String,
}

impl CustomerProfile {
    /// Returns the customer's display name as `"first last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One portfolio line item belonging to a customer.
///
/// `product_type` is the allocation category (e.g. `FUNDING`, `LENDING`,
/// `WEALTH`); `product_category` is the finer-grained bucket within it
/// (e.g. `CASA`, `SECURED`, `MUTUAL_FUNDS`). All numeric fields are strings
/// and may hold dirty values; aggregation treats unparseable values as zero.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Holding {
    /// Owning customer's identifier
    pub customer_id: String,
    /// Allocation category for this holding
    pub product_type: String,
    /// Product bucket within the allocation category
    pub product_category: String,
    /// Human-readable product name
    pub product_name: String,
    /// Account or contract number backing the holding
    pub account_number: String,
    /// Current balance, stored as a string
    pub balance: String,
    /// Interest rate, stored as a string
    pub interest_rate: String,
    /// Maturity date, where applicable
    pub maturity_date: String,
    /// Number of units held, stored as a string
    pub units: String,
    /// Purchase price per unit, stored as a string
    pub purchase_price: String,
    /// Current market value of the position, stored as a string
    pub current_value: String,
}

/// One row of the transaction dataset.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Transaction {
    /// Owning customer's identifier
    pub customer_id: String,
    /// Transaction date, as recorded in the source dataset
    pub date: String,
    /// Free-text description
    pub description: String,
    /// Spending category; may be empty
    pub category: String,
    /// Kind of transaction: `credit`, `debit` or `transfer`
    pub transaction_type: String,
    /// Signed amount, stored as a string
    pub amount: String,
    /// Running account balance after the transaction, stored as a string
    pub balance: String,
}

/// Restrictions applied to a customer's transaction list.
///
/// A `None` transaction type means "all" (no restriction); a `None` or empty
/// search term applies no text restriction. When both are present they
/// compose by intersection.
#[derive(Debug, Default, Clone)]
pub struct TransactionFilters {
    /// Restrict to a single `transaction_type` value, compared exactly
    pub transaction_type: Option<String>,
    /// Case-insensitive substring matched against description and type
    pub search_term: Option<String>,
}

impl TransactionFilters {
    /// Filters that match every transaction.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to a single transaction type.
    #[must_use]
    pub fn of_type(transaction_type: impl Into<String>) -> Self {
        Self {
            transaction_type: Some(transaction_type.into()),
            search_term: None,
        }
    }

    /// Adds a search term restriction.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }
}

/// Types that belong to a single customer, joined by `customer_id` equality.
pub trait CustomerScoped {
    /// Returns the identifier of the customer this record belongs to.
    fn customer_id(&self) -> &str;
}

impl CustomerScoped for CustomerProfile {
    fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

impl CustomerScoped for Holding {
    fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

impl CustomerScoped for Transaction {
    fn customer_id(&self) -> &str {
        &self.customer_id
    }
}
