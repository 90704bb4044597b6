//! Wellspring Core - wellness and study tracking calculators
//!
//! Pure date arithmetic for water targets, cycle phase estimation, exam
//! countdowns and daily quotes, plus the configuration and storage layers
//! the `wellspring` CLI drives them through.

pub mod clock;
pub mod config;
pub mod cycle;
pub mod dashboard;
pub mod date_math;
pub mod error;
pub mod exams;
pub mod hydration;
pub mod profile;
pub mod quotes;
pub mod store;
pub mod utils;

// Macros are automatically available at crate root due to #[macro_export]

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::WellspringConfig;
pub use cycle::{CycleRecord, Phase, PhaseResult};
pub use dashboard::{CycleSummary, Dashboard};
pub use error::{CoreError, Result};
pub use exams::{ExamCountdown, ExamRecord, Urgency};
pub use hydration::{HydrationSettings, WaterLog};
pub use profile::{Gender, Profile};
pub use quotes::Quote;
pub use store::{JsonFileStore, MemoryStore, WellnessData, WellnessStore};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Clock, CoreError, CycleRecord, CycleSummary, Dashboard, ExamCountdown, ExamRecord,
        FixedClock, Gender, HydrationSettings, JsonFileStore, MemoryStore, Phase, PhaseResult,
        Profile, Quote, Result, SystemClock, Urgency, WaterLog, WellnessData, WellnessStore,
        WellspringConfig,
    };
}
