pub mod config;
pub mod cycle;
pub mod dates;
pub mod exam;
pub mod profile;
pub mod quote;
pub mod reset;
pub mod status;
pub mod water;

use chrono::NaiveDate;
use miette::Result;
use wellspring_core::{Clock, JsonFileStore, WellnessData, WellnessStore, WellspringConfig};

/// Everything a command needs: loaded config, the data store and a clock.
pub struct Context {
    pub config: WellspringConfig,
    /// Where the config came from, for `config show`
    pub config_source: String,
    pub store: JsonFileStore,
    pub clock: Box<dyn Clock>,
}

impl Context {
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn load(&self) -> Result<WellnessData> {
        self.store.load().map_err(|err| {
            wellspring_core::log_error_chain!("Failed to load wellness data", err);
            err.into()
        })
    }

    pub fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut WellnessData) -> wellspring_core::Result<T>,
    {
        self.store.update(f).map_err(|err| {
            wellspring_core::log_error_chain!("Failed to update wellness data", err);
            err.into()
        })
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear().map_err(|err| {
            wellspring_core::log_error_chain!("Failed to clear wellness data", err);
            err.into()
        })
    }
}

#[cfg(test)]
pub fn test_context(dir: &std::path::Path, today: NaiveDate) -> Context {
    let mut config = WellspringConfig::default();
    config.data.path = dir.join("data.json");
    Context {
        store: config.store(),
        config,
        config_source: "test".to_string(),
        clock: Box::new(wellspring_core::FixedClock(today)),
    }
}
