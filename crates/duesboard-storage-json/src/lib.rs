//! duesboard-storage-json
//!
//! Filesystem-backed loading of the dashboard documents. Reads the fixed
//! set of JSON files from a data directory into typed records. Any missing
//! or unreadable document fails the whole load with one typed error; field
//! level leniency lives in the domain deserializers.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use duesboard_domain::{
    BankingDetails, Collection, Event, Expense, Income, Notice, Roster, SiteInfo,
};

pub const SITE_FILE: &str = "site.json";
pub const COLLECTIONS_FILE: &str = "collections.json";
pub const INCOMES_FILE: &str = "incomes.json";
pub const EXPENSES_FILE: &str = "expenses.json";
pub const BANKING_FILE: &str = "banking.json";
pub const EVENTS_FILE: &str = "events.json";
pub const INFORMATION_FILE: &str = "information.json";

/// Every document the dashboard reads, in load order.
pub const DOCUMENT_FILES: [&str; 7] = [
    SITE_FILE,
    COLLECTIONS_FILE,
    INCOMES_FILE,
    EXPENSES_FILE,
    BANKING_FILE,
    EVENTS_FILE,
    INFORMATION_FILE,
];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Missing document `{0}` in the data directory")]
    MissingDocument(String),

    #[error("Malformed document `{file}`: {message}")]
    MalformedDocument { file: String, message: String },

    #[error("I/O error reading `{file}`: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct CollectionsDocument {
    #[serde(default)]
    collections: Vec<Collection>,
}

#[derive(Debug, Default, Deserialize)]
struct IncomesDocument {
    #[serde(default)]
    incomes: Vec<Income>,
}

#[derive(Debug, Default, Deserialize)]
struct ExpensesDocument {
    #[serde(default)]
    expenses: Vec<Expense>,
}

#[derive(Debug, Default, Deserialize)]
struct EventsDocument {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Default, Deserialize)]
struct InformationDocument {
    #[serde(default)]
    information: Vec<Notice>,
}

/// Everything the dashboard needs, loaded in one pass.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub site: SiteInfo,
    pub roster: Roster,
    pub collections: Vec<Collection>,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub banking: BankingDetails,
    pub events: Vec<Event>,
    pub notices: Vec<Notice>,
}

/// Read-only access to the data directory of dashboard documents.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    data_dir: PathBuf,
}

impl DocumentStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn document_path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Loads all documents and resolves the roster. The fallback applies
    /// when the site document has no usable `totalChildren`.
    pub fn load_dashboard(&self, roster_fallback: u32) -> Result<DashboardData, StorageError> {
        let site: SiteInfo = self.load_document(SITE_FILE)?;
        let collections: CollectionsDocument = self.load_document(COLLECTIONS_FILE)?;
        let incomes: IncomesDocument = self.load_document(INCOMES_FILE)?;
        let expenses: ExpensesDocument = self.load_document(EXPENSES_FILE)?;
        let banking: BankingDetails = self.load_document(BANKING_FILE)?;
        let events: EventsDocument = self.load_document(EVENTS_FILE)?;
        let information: InformationDocument = self.load_document(INFORMATION_FILE)?;

        let roster = Roster::new(site.total_children.unwrap_or(roster_fallback));

        Ok(DashboardData {
            site,
            roster,
            collections: collections.collections,
            incomes: incomes.incomes,
            expenses: expenses.expenses,
            banking,
            events: events.events,
            notices: information.information,
        })
    }

    fn load_document<T: DeserializeOwned>(&self, file: &str) -> Result<T, StorageError> {
        let path = self.document_path(file);
        if !path.exists() {
            return Err(StorageError::MissingDocument(file.to_string()));
        }
        let data = fs::read_to_string(&path).map_err(|source| StorageError::Io {
            file: file.to_string(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|err| StorageError::MalformedDocument {
            file: file.to_string(),
            message: err.to_string(),
        })
    }
}
