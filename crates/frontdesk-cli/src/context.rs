use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

use frontdesk_store::{HotelStore, Session};

use crate::config::Config;
use crate::state::Snapshot;

/// Everything a handler needs: the loaded store, the config, and the
/// operator session, anchored to one data directory.
pub struct AppContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub store: HotelStore,
    pub session: Session,
}

impl AppContext {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config = Config::load_from(&data_dir.join("config.toml"))?;
        let store = Snapshot::load_from(&data_dir.join("hotel.json"))?.into_store();

        let operator = config
            .operator
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .unwrap_or_else(|| "operator".to_string());
        let session = Session::new(operator);

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config,
            store,
            session,
        })
    }

    /// Persist the store back to the data dir.  Mutating handlers call
    /// this after the store operation succeeded.
    pub fn save(&self) -> Result<()> {
        Snapshot::from_store(&self.store).save_to(&self.data_dir.join("hotel.json"))
    }

    /// The clock provider for "today" navigation and default form values.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
