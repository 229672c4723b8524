//! The view coordinator: owns the loaded record sets and serves the
//! read-only surface the presentation layer renders from.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    directory::CustomerDirectory,
    errors::Error,
    io::{self, DataSources},
    ops::{self, PortfolioSummary},
    types::{CustomerProfile, Holding, Transaction, TransactionFilters},
};

/// Which of the three views is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Customer profile details
    #[default]
    Profile,
    /// Portfolio holdings and allocation
    Portfolio,
    /// Transaction history and spending
    Transactions,
}

/// One dashboard session: three record sets loaded once, plus the transient
/// view state (selection, active tab, transaction filters).
///
/// The record sets never change after construction, so every derived view is
/// recomputed on demand from immutable inputs. Callers may memoize results
/// keyed by customer id, but correctness never depends on it.
#[derive(Debug, Default)]
pub struct Dashboard {
    directory: CustomerDirectory,
    holdings: Vec<Holding>,
    transactions: Vec<Transaction>,
    active_tab: Tab,
    filters: TransactionFilters,
}

impl Dashboard {
    /// Loads all three datasets and selects the first customer.
    ///
    /// # Errors
    /// [`Error::Load`] if any dataset fails to fetch or parse; the dashboard
    /// is never constructed from a partial load.
    pub fn load(sources: &DataSources) -> Result<Self, Error> {
        let (profiles, holdings, transactions) = io::load_datasets(sources)?;
        Ok(Self::from_records(profiles, holdings, transactions))
    }

    /// Builds a dashboard from already-parsed records.
    #[must_use]
    pub fn from_records(
        profiles: Vec<CustomerProfile>,
        holdings: Vec<Holding>,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            directory: CustomerDirectory::new(profiles),
            holdings,
            transactions,
            active_tab: Tab::default(),
            filters: TransactionFilters::default(),
        }
    }

    /// Returns the full customer list in load order.
    #[must_use]
    pub fn customer_list(&self) -> &[CustomerProfile] {
        self.directory.customers()
    }

    /// Searches the customer directory; see [`CustomerDirectory::search`].
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&CustomerProfile> {
        self.directory.search(term)
    }

    /// Selects a customer by id, without validating that it exists.
    pub fn select(&mut self, customer_id: impl Into<String>) {
        self.directory.select(customer_id);
    }

    /// Returns the currently selected customer's profile, if it exists.
    #[must_use]
    pub fn current_customer(&self) -> Option<&CustomerProfile> {
        self.directory.current()
    }

    /// Returns the active view.
    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switches the active view.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Returns the current transaction filters.
    #[must_use]
    pub fn filters(&self) -> &TransactionFilters {
        &self.filters
    }

    /// Replaces the current transaction filters.
    pub fn set_filters(&mut self, filters: TransactionFilters) {
        self.filters = filters;
    }

    /// Builds the portfolio view model for a customer.
    ///
    /// An unknown id yields an empty summary with zero totals, never an
    /// error.
    #[must_use]
    pub fn aggregated_portfolio(&self, customer_id: &str) -> PortfolioSummary<'_> {
        ops::portfolio_summary(&self.holdings, customer_id)
    }

    /// Returns a customer's transactions with the given filters applied,
    /// in original order.
    #[must_use]
    pub fn filtered_transactions(
        &self,
        customer_id: &str,
        filters: &TransactionFilters,
    ) -> Vec<&Transaction> {
        let owned = ops::filter_by_customer(&self.transactions, customer_id);
        ops::apply_filters(&owned, filters)
    }

    /// Returns a customer's debit spending totals per category, the feed for
    /// the spending chart.
    ///
    /// Spending ignores the transaction filters: the chart always shows the
    /// full debit history for the customer.
    #[must_use]
    pub fn spending_summary(&self, customer_id: &str) -> BTreeMap<String, Decimal> {
        ops::spending_by_category(ops::filter_by_customer(&self.transactions, customer_id))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn dashboard() -> Dashboard {
        let profiles = vec![
            CustomerProfile {
                customer_id: "CUST001".to_owned(),
                first_name: "Maria".to_owned(),
                last_name: "Tan".to_owned(),
                ..CustomerProfile::default()
            },
            CustomerProfile {
                customer_id: "CUST002".to_owned(),
                first_name: "Budi".to_owned(),
                last_name: "Santoso".to_owned(),
                ..CustomerProfile::default()
            },
        ];
        let holdings = vec![
            Holding {
                customer_id: "CUST001".to_owned(),
                product_type: "FUNDING".to_owned(),
                balance: "100".to_owned(),
                ..Holding::default()
            },
            Holding {
                customer_id: "CUST001".to_owned(),
                product_type: "LENDING".to_owned(),
                balance: "200".to_owned(),
                ..Holding::default()
            },
            Holding {
                customer_id: "CUST002".to_owned(),
                product_type: "WEALTH".to_owned(),
                balance: "5000".to_owned(),
                ..Holding::default()
            },
        ];
        let transactions = vec![
            Transaction {
                customer_id: "CUST001".to_owned(),
                transaction_type: "debit".to_owned(),
                category: "Food".to_owned(),
                amount: "-4.50".to_owned(),
                description: "Coffee Corner".to_owned(),
                ..Transaction::default()
            },
            Transaction {
                customer_id: "CUST001".to_owned(),
                transaction_type: "credit".to_owned(),
                category: "Salary".to_owned(),
                amount: "3200".to_owned(),
                description: "Payday".to_owned(),
                ..Transaction::default()
            },
            Transaction {
                customer_id: "CUST002".to_owned(),
                transaction_type: "debit".to_owned(),
                category: "Travel".to_owned(),
                amount: "-80".to_owned(),
                description: "Train ticket".to_owned(),
                ..Transaction::default()
            },
        ];
        Dashboard::from_records(profiles, holdings, transactions)
    }

    #[test]
    fn test_default_selection_and_tab() {
        let dashboard = dashboard();
        assert_eq!(dashboard.current_customer().unwrap().customer_id, "CUST001");
        assert_eq!(dashboard.active_tab(), Tab::Profile);
    }

    #[test]
    fn test_aggregated_portfolio_wiring() {
        let dashboard = dashboard();
        let summary = dashboard.aggregated_portfolio("CUST001");
        assert_eq!(summary.positions.len(), 2);
        assert_eq!(summary.totals.grand_total, dec!(300));
        assert_eq!(summary.allocation["FUNDING"], dec!(33.33));
        assert_eq!(summary.allocation["LENDING"], dec!(66.67));
    }

    #[test]
    fn test_filtered_transactions_scoped_to_customer() {
        let dashboard = dashboard();
        let all = dashboard.filtered_transactions("CUST001", &TransactionFilters::all());
        assert_eq!(all.len(), 2);
        let debits = dashboard.filtered_transactions("CUST001", &TransactionFilters::of_type("debit"));
        assert_eq!(debits.len(), 1);
        assert_eq!(debits[0].description, "Coffee Corner");
    }

    #[test]
    fn test_spending_summary() {
        let dashboard = dashboard();
        let spending = dashboard.spending_summary("CUST002");
        assert_eq!(spending["Travel"], dec!(80));
        assert!(spending.get("Salary").is_none());
    }

    #[test]
    fn test_unknown_customer_yields_empty_views() {
        let mut dashboard = dashboard();
        dashboard.select("CUST999");
        assert!(dashboard.current_customer().is_none());
        let summary = dashboard.aggregated_portfolio("CUST999");
        assert!(summary.positions.is_empty());
        assert_eq!(summary.totals.grand_total, dec!(0));
        assert!(dashboard
            .filtered_transactions("CUST999", &TransactionFilters::all())
            .is_empty());
        assert!(dashboard.spending_summary("CUST999").is_empty());
    }

    #[test]
    fn test_tab_and_filter_state() {
        let mut dashboard = dashboard();
        dashboard.set_active_tab(Tab::Transactions);
        assert_eq!(dashboard.active_tab(), Tab::Transactions);
        dashboard.set_filters(TransactionFilters::of_type("debit"));
        assert_eq!(dashboard.filters().transaction_type.as_deref(), Some("debit"));
    }
}
