mod ids;
mod record;
mod settings;

pub use ids::RecordId;
pub use record::{NewRecord, Record, RecordSummary};
pub use settings::{AnimationSpeed, ColorTheme, PlayerSettings, SettingsUpdate};
