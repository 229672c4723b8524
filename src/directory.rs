//! The customer directory: a searchable, selectable collection of customer
//! profiles.

use crate::types::CustomerProfile;

/// Holds the full customer list for the session, plus the transient
/// selection.
///
/// The list is immutable once built. Duplicate `customer_id` values are
/// resolved deterministically at construction: the first occurrence wins and
/// later duplicates are dropped. Selection defaults to the first profile.
#[derive(Debug, Default, Clone)]
pub struct CustomerDirectory {
    /// Customer profiles in load order, de-duplicated by id
    customers: Vec<CustomerProfile>,
    /// Currently selected customer id; not validated against the list
    selected: Option<String>,
}

impl CustomerDirectory {
    /// Builds a directory from loaded profiles, selecting the first one.
    #[must_use]
    pub fn new(profiles: Vec<CustomerProfile>) -> Self {
        let mut customers: Vec<CustomerProfile> = Vec::with_capacity(profiles.len());
        for profile in profiles {
            if customers
                .iter()
                .any(|existing| existing.customer_id == profile.customer_id)
            {
                log::debug!("Dropping duplicate customer id {}", profile.customer_id);
                continue;
            }
            customers.push(profile);
        }
        let selected = customers.first().map(|first| first.customer_id.clone());
        Self {
            customers,
            selected,
        }
    }

    /// Returns every customer in load order.
    #[must_use]
    pub fn customers(&self) -> &[CustomerProfile] {
        &self.customers
    }

    /// Returns the customers matching a search term.
    ///
    /// A customer matches when the term is a case-insensitive substring of
    /// its id, first name, last name, or `"first last"` full name. An empty
    /// or whitespace-only term returns no results, not the full list: the
    /// search box only suggests once the user has typed something.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&CustomerProfile> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.customers
            .iter()
            .filter(|customer| {
                customer.customer_id.to_lowercase().contains(&term)
                    || customer.first_name.to_lowercase().contains(&term)
                    || customer.last_name.to_lowercase().contains(&term)
                    || customer.full_name().to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Sets the current selection without validating that the id exists.
    ///
    /// Selecting an unknown id leaves [`current`](Self::current) returning
    /// `None`; dependent views render nothing rather than failing.
    pub fn select(&mut self, customer_id: impl Into<String>) {
        let customer_id = customer_id.into();
        log::debug!("Selected customer {customer_id}");
        self.selected = Some(customer_id);
    }

    /// Returns the currently selected customer id, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Returns the currently selected customer's profile.
    ///
    /// `None` when nothing is selected or the selected id is unknown.
    #[must_use]
    pub fn current(&self) -> Option<&CustomerProfile> {
        let selected = self.selected.as_deref()?;
        self.customers
            .iter()
            .find(|customer| customer.customer_id == selected)
    }
}
