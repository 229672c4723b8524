use std::fmt::Display;

/// The three tabular datasets the dashboard is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// Customer profile records
    Profile,
    /// Portfolio holding records
    Portfolio,
    /// Transaction records
    Transactions,
}

impl Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dataset::Profile => "profile",
            Dataset::Portfolio => "portfolio",
            Dataset::Transactions => "transactions",
        };
        write!(f, "{name}")
    }
}

/// The underlying cause of a dataset load failure.
#[derive(Debug, thiserror::Error)]
pub enum LoadCause {
    /// The resource could not be opened or read
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The resource was readable but its CSV content failed to parse
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Error type that can be returned by fallible operations in this crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetch or parse failure on one of the three source datasets.
    ///
    /// Fatal for the whole view: the dashboard never renders from an
    /// incomplete dataset, so a single failing source aborts initialization.
    #[error("Failed to load {dataset} dataset")]
    Load {
        /// Which of the three sources failed
        dataset: Dataset,
        /// What went wrong while fetching or parsing it
        #[source]
        cause: LoadCause,
    },
    /// Error writing a report to CSV output
    #[error("Failed to write report")]
    Report(#[from] csv::Error),
}

impl Error {
    /// Tags an IO or CSV failure with the dataset it occurred in.
    pub(crate) fn load(dataset: Dataset, cause: impl Into<LoadCause>) -> Self {
        Error::Load {
            dataset,
            cause: cause.into(),
        }
    }
}
