use crate::prefs::Preferences;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;

pub fn handle_show(data_dir: &PathBuf, format: OutputFormat) -> Result<()> {
    let prefs = Preferences::load_from(&Preferences::path_in(data_dir))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&prefs)?),
        OutputFormat::Plain => {
            println!("default-page-size = {}", prefs.default_page_size);
            println!("hover-preview = {}", prefs.hover_preview);
        }
    }

    Ok(())
}

pub fn handle_set(data_dir: &PathBuf, key: &str, value: &str) -> Result<()> {
    let path = Preferences::path_in(data_dir);
    let mut prefs = Preferences::load_from(&path)?;

    prefs.set(key, value)?;
    prefs.save_to(&path)?;

    println!("Set {} to {}", key, value);
    Ok(())
}
