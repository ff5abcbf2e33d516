use crate::handlers::browse::load_items;
use crate::render;
use crate::types::OutputFormat;
use anyhow::Result;
use headshakers_engine::CollectionStats;
use std::path::Path;

pub fn handle(items_path: &Path, format: OutputFormat) -> Result<()> {
    let items = load_items(items_path)?;
    let stats = CollectionStats::from_items(&items);
    render::render_stats(&stats, format)
}
