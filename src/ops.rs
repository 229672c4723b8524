//! The aggregation engine: pure derived-view computation over immutable
//! record sets.
//!
//! Every function here is deterministic and reentrant, recomputed on each
//! call. The load-bearing policy throughout is that bad numeric input
//! degrades to zero and never aborts an aggregate: dirty tabular data is
//! expected and must not crash the view.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::types::{CustomerScoped, Holding, Transaction, TransactionFilters};

/// Category assigned to debit transactions with no category of their own.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Parses a numeric string field, degrading to zero on failure.
///
/// Empty strings, `"N/A"`, and any other unparseable value all yield
/// [`Decimal::ZERO`]; no aggregate ever sees an error or a NaN from a dirty
/// field.
#[must_use]
pub fn parse_number(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO)
}

/// Returns the records belonging to `customer_id`, preserving their original
/// relative order.
///
/// The join is exact string equality with no normalization. An unknown id
/// simply yields an empty result.
pub fn filter_by_customer<'a, T: CustomerScoped>(
    records: &'a [T],
    customer_id: &str,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| record.customer_id() == customer_id)
        .collect()
}

/// Per-category value totals plus the grand total across all categories.
///
/// The grand total is accumulated alongside the per-category sums, so the
/// two always agree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryTotals {
    /// Total value per category, in deterministic key order
    pub by_category: BTreeMap<String, Decimal>,
    /// Sum across all categories
    pub grand_total: Decimal,
}

/// Groups records by a category field and sums a numeric value field per
/// group.
///
/// A value that fails numeric parse contributes zero to its group's sum;
/// the group still appears in the output.
pub fn sum_by_category<'a, T: 'a>(
    records: impl IntoIterator<Item = &'a T>,
    category: impl Fn(&T) -> &str,
    value: impl Fn(&T) -> &str,
) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for record in records {
        let amount = parse_number(value(record));
        *totals
            .by_category
            .entry(category(record).to_owned())
            .or_insert(Decimal::ZERO) += amount;
        totals.grand_total += amount;
    }
    totals
}

/// Converts category totals into percentage shares of the grand total.
///
/// Percentages are rounded to two decimal places. A zero (or negative)
/// grand total yields zero for every category; the division is guarded so
/// the output can never contain NaN or infinity.
#[must_use]
pub fn allocation_percentages(totals: &CategoryTotals) -> BTreeMap<String, Decimal> {
    totals
        .by_category
        .iter()
        .map(|(category, total)| {
            let mut share = if totals.grand_total > Decimal::ZERO {
                total / totals.grand_total * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            share = share.round_dp(2);
            share.rescale(2);
            (category.clone(), share)
        })
        .collect()
}

/// Gain/loss figures for a single holding.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GainLoss {
    /// Purchase price multiplied by units held
    pub purchase_value: Decimal,
    /// Current value minus purchase value
    pub gain: Decimal,
    /// Gain as a percentage of purchase value, two decimal places
    pub gain_pct: Decimal,
}

/// Computes gain/loss for one holding from its string-typed numeric fields.
///
/// When the purchase value is not positive the gain percentage is zero,
/// regardless of current value.
#[must_use]
pub fn holding_gain_loss(holding: &Holding) -> GainLoss {
    let purchase_value = parse_number(&holding.purchase_price) * parse_number(&holding.units);
    let gain = parse_number(&holding.current_value) - purchase_value;
    let mut gain_pct = if purchase_value > Decimal::ZERO {
        (gain / purchase_value * Decimal::ONE_HUNDRED).round_dp(2)
    } else {
        Decimal::ZERO
    };
    gain_pct.rescale(2);
    GainLoss {
        purchase_value,
        gain,
        gain_pct,
    }
}

/// A holding paired with its computed performance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionView<'a> {
    /// The underlying portfolio record
    pub holding: &'a Holding,
    /// Gain/loss derived from the record's numeric fields
    pub performance: GainLoss,
}

/// Everything the portfolio view renders for one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSummary<'a> {
    /// The customer's holdings in original order, with per-position gain/loss
    pub positions: Vec<PositionView<'a>>,
    /// Value totals keyed by product type, plus the grand total
    pub totals: CategoryTotals,
    /// Percentage share of each product type, two decimal places
    pub allocation: BTreeMap<String, Decimal>,
}

/// Builds the full portfolio view model for one customer.
///
/// Filters the holdings down to the customer, totals balances by product
/// type and derives allocation percentages and per-position gain/loss. An
/// unknown customer id yields an empty summary with zero totals.
#[must_use]
pub fn portfolio_summary<'a>(holdings: &'a [Holding], customer_id: &str) -> PortfolioSummary<'a> {
    let owned = filter_by_customer(holdings, customer_id);
    let totals = sum_by_category(
        owned.iter().copied(),
        |holding| holding.product_type.as_str(),
        |holding| holding.balance.as_str(),
    );
    let allocation = allocation_percentages(&totals);
    let positions = owned
        .into_iter()
        .map(|holding| PositionView {
            performance: holding_gain_loss(holding),
            holding,
        })
        .collect();
    PortfolioSummary {
        positions,
        totals,
        allocation,
    }
}

/// Sums the absolute amounts of debit transactions per spending category.
///
/// Credits and transfers are excluded. Transactions with an empty category
/// land in [`UNCATEGORIZED`]. Unparseable amounts contribute zero.
pub fn spending_by_category<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> BTreeMap<String, Decimal> {
    let mut spending = BTreeMap::new();
    for transaction in transactions {
        if transaction.transaction_type != "debit" {
            continue;
        }
        let category = if transaction.category.is_empty() {
            UNCATEGORIZED
        } else {
            &transaction.category
        };
        *spending.entry(category.to_owned()).or_insert(Decimal::ZERO) +=
            parse_number(&transaction.amount).abs();
    }
    spending
}

/// Applies type and search-term restrictions to a transaction list.
///
/// The restrictions compose by intersection: an absent type means all types
/// pass, an absent or empty search term applies no text match. The term is
/// matched case-insensitively against the description and the transaction
/// type, with the same substring semantics as customer search.
pub fn apply_filters<'a>(
    transactions: &[&'a Transaction],
    filters: &TransactionFilters,
) -> Vec<&'a Transaction> {
    let term = filters
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);
    transactions
        .iter()
        .filter(|transaction| match &filters.transaction_type {
            Some(kind) => transaction.transaction_type == *kind,
            None => true,
        })
        .filter(|transaction| match &term {
            Some(term) => {
                transaction.description.to_lowercase().contains(term)
                    || transaction.transaction_type.to_lowercase().contains(term)
            }
            None => true,
        })
        .copied()
        .collect()
}
