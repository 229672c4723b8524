//! Helpers for loading the three source datasets and writing text reports

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use csv::Trim;
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    errors::{Dataset, Error},
    ops::PortfolioSummary,
    types::{CustomerProfile, Holding, Transaction},
};

/// Locations of the three source datasets, injected at startup.
///
/// Keeping the locators explicit (rather than baked-in asset paths) lets the
/// loader run against fixture files or any co-located deployment of the
/// three CSVs.
#[derive(Debug, Clone)]
pub struct DataSources {
    /// Path to the customer profile CSV
    pub profile: PathBuf,
    /// Path to the portfolio holdings CSV
    pub portfolio: PathBuf,
    /// Path to the transactions CSV
    pub transactions: PathBuf,
}

/// Reads one dataset from a CSV stream into typed records.
///
/// The first row is the header naming columns; fully empty lines are
/// skipped; short rows are tolerated and missing fields deserialize to empty
/// strings. No numeric coercion happens here.
fn read_records<R, T>(reader: &mut R) -> Result<Vec<T>, csv::Error>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for record in csv_reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Loads customer profiles from a CSV-formatted stream.
///
/// Expects input data in this format (including header):
/// ```csv
/// customer_id, first_name, last_name, email,               join_date
/// CUST001,     Maria,      Tan,       maria.tan@mail.com,  2015-03-02
/// CUST002,     Budi,       Santoso,   budi.s@mail.com,     2018-11-20
/// ```
pub fn load_profiles_from_csv<R: Read>(reader: &mut R) -> Result<Vec<CustomerProfile>, csv::Error> {
    read_records(reader)
}

/// Loads portfolio holdings from a CSV-formatted stream.
///
/// Expects input data in this format (including header):
/// ```csv
/// customer_id, product_type, product_category, product_name,    balance
/// CUST001,     FUNDING,      CASA,             Everyday Saver,  1500.00
/// CUST001,     WEALTH,       MUTUAL_FUNDS,     Equity Fund A,   9200.50
/// ```
pub fn load_holdings_from_csv<R: Read>(reader: &mut R) -> Result<Vec<Holding>, csv::Error> {
    read_records(reader)
}

/// Loads transactions from a CSV-formatted stream.
///
/// Expects input data in this format (including header):
/// ```csv
/// customer_id, date,        description,    category,  transaction_type, amount,  balance
/// CUST001,     2024-01-03,  Coffee Corner,  Food,      debit,            -4.50,   1495.50
/// CUST001,     2024-01-31,  Salary,         Salary,    credit,           3200.00, 4695.50
/// ```
pub fn load_transactions_from_csv<R: Read>(reader: &mut R) -> Result<Vec<Transaction>, csv::Error> {
    read_records(reader)
}

/// Opens one dataset file and reads it, tagging any failure with the dataset.
fn load_file<T: DeserializeOwned>(dataset: Dataset, path: &Path) -> Result<Vec<T>, Error> {
    let file = File::open(path).map_err(|err| Error::load(dataset, err))?;
    let mut reader = BufReader::new(file);
    read_records(&mut reader).map_err(|err| Error::load(dataset, err))
}

/// Loads all three datasets, all-or-nothing.
///
/// The first fetch or parse failure aborts the whole load with
/// [`Error::Load`] naming the failing dataset; callers must not render any
/// view from a partial result. There is no retry and no caching: this runs
/// once per session.
pub fn load_datasets(
    sources: &DataSources,
) -> Result<(Vec<CustomerProfile>, Vec<Holding>, Vec<Transaction>), Error> {
    let profiles = load_file(Dataset::Profile, &sources.profile)?;
    let holdings = load_file(Dataset::Portfolio, &sources.portfolio)?;
    let transactions = load_file(Dataset::Transactions, &sources.transactions)?;
    log::debug!(
        "Loaded {} profiles, {} holdings, {} transactions",
        profiles.len(),
        holdings.len(),
        transactions.len()
    );
    Ok((profiles, holdings, transactions))
}

/// Type used for serializing one allocation line of a portfolio report.
#[derive(Serialize, Debug)]
struct AllocationRow<'a> {
    /// The allocation category (product type)
    category: &'a str,
    /// Total value held in the category
    total: Decimal,
    /// Share of the portfolio, as a percentage rounded to two decimals
    percentage: Decimal,
}

/// Outputs a customer's portfolio allocation to CSV.
///
/// One row per allocation category, plus the grand total. Output data will
/// be in the form:
/// ```csv
/// category,total,percentage
/// FUNDING,100,33.33
/// LENDING,200,66.67
/// TOTAL,300,100.00
/// ```
pub fn write_allocation_to_csv<W: Write>(
    writer: &mut W,
    summary: &PortfolioSummary<'_>,
) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (category, total) in &summary.totals.by_category {
        let percentage = summary
            .allocation
            .get(category)
            .copied()
            .unwrap_or(Decimal::ZERO);
        csv_writer.serialize(AllocationRow {
            category: category.as_str(),
            total: *total,
            percentage,
        })?;
    }
    let grand_total = summary.totals.grand_total;
    let mut full_share = if grand_total > Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    full_share.rescale(2);
    csv_writer.serialize(AllocationRow {
        category: "TOTAL",
        total: grand_total,
        percentage: full_share,
    })?;
    Ok(())
}
