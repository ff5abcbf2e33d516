pub mod browse;
pub mod prefs;
pub mod stats;
