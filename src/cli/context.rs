use std::{env, path::PathBuf};

use duesboard_config::{Config, ConfigManager};
use duesboard_core::{BalanceBreakdown, LedgerService, SummaryService};
use duesboard_domain::{
    BankingDetails, DerivedCollection, Event, Expense, Income, Notice, Roster, SiteInfo,
};
use duesboard_storage_json::{DashboardData, DocumentStore};

use crate::errors::AppError;

/// Overrides the configuration base directory.
pub const HOME_ENV: &str = "DUESBOARD_HOME";
/// Overrides the data directory holding the dashboard documents.
pub const DATA_DIR_ENV: &str = "DUESBOARD_DATA_DIR";

/// Everything a command needs: the active configuration and where to find
/// the dashboard documents.
pub struct CliContext {
    pub config: Config,
    manager: ConfigManager,
    data_dir_override: Option<PathBuf>,
}

impl CliContext {
    pub fn bootstrap(data_dir_override: Option<PathBuf>) -> Result<Self, AppError> {
        let base = env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(ConfigManager::default_base_dir);
        let manager = ConfigManager::with_base_dir(base)?;
        let config = manager.load()?;
        Ok(Self {
            config,
            manager,
            data_dir_override,
        })
    }

    /// Data directory precedence: `--data` flag, environment, configuration.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir_override
            .clone()
            .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| self.config.resolve_data_dir())
    }

    /// Loads the documents and derives the render-ready dashboard state.
    pub fn load_state(&self) -> Result<DashboardState, AppError> {
        let data_dir = self.resolve_data_dir();
        tracing::debug!(data_dir = %data_dir.display(), "loading dashboard documents");
        let store = DocumentStore::new(data_dir);
        let data = store.load_dashboard(self.config.roster_fallback)?;
        Ok(DashboardState::from_data(data))
    }

    pub fn save_config(&self) -> Result<(), AppError> {
        self.manager.save(&self.config)?;
        Ok(())
    }
}

/// Derived, render-ready snapshot of the loaded documents.
pub struct DashboardState {
    pub site: SiteInfo,
    pub roster: Roster,
    pub open: Vec<DerivedCollection>,
    pub closed: Vec<DerivedCollection>,
    pub breakdown: BalanceBreakdown,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub banking: BankingDetails,
    pub events: Vec<Event>,
    pub notices: Vec<Notice>,
}

impl DashboardState {
    pub fn from_data(data: DashboardData) -> Self {
        let derived = LedgerService::derive_collections(&data.roster, data.collections);
        let breakdown = SummaryService::balance_breakdown(&derived, &data.incomes, &data.expenses);
        let (open, closed) = LedgerService::partition_by_status(&derived);
        Self {
            site: data.site,
            roster: data.roster,
            open,
            closed,
            breakdown,
            incomes: data.incomes,
            expenses: data.expenses,
            banking: data.banking,
            events: data.events,
            notices: data.notices,
        }
    }
}
