use crate::types::OutputFormat;
use anyhow::Result;
use headshakers_engine::{CollectionStats, ListViewModel, PageMarker};
use owo_colors::OwoColorize;

pub fn render_view(view: &ListViewModel, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
        OutputFormat::Plain => render_view_plain(view),
    }
    Ok(())
}

fn render_view_plain(view: &ListViewModel) {
    if view.is_empty {
        println!("No bobbleheads yet. Add your first bobblehead to get started.");
        return;
    }

    if view.is_empty_due_to_filter {
        println!("No bobbleheads match your filters. Clear filters to see the full collection.");
        return;
    }

    println!(
        "  {} {} {} {}",
        format!("{:<32}", "Name").dimmed(),
        format!("{:<12}", "Category").dimmed(),
        format!("{:<10}", "Condition").dimmed(),
        format!("{:>10}", "Value").dimmed()
    );

    for item in &view.visible_items {
        let marker = if item.is_featured { "*" } else { " " };
        let category = item.category.as_deref().unwrap_or("-");
        let condition = item.condition.as_deref().unwrap_or("-");
        let value = item
            .total_value
            .map(|v| format!("${:.2}", v))
            .unwrap_or_else(|| "-".to_string());

        // Pad before coloring so ANSI codes do not skew the columns.
        println!(
            "{} {} {:<12} {:<10} {:>10}",
            marker,
            format!("{:<32}", item.name).bold(),
            category,
            condition,
            value
        );
    }

    println!();
    if let (Some(start), Some(end)) = (view.start_item, view.end_item) {
        println!(
            "Showing {} to {} of {} bobbleheads",
            start, end, view.total_filtered_count
        );
    }

    if view.total_pages > 1 {
        println!("Pages: {}", marker_strip(view));
    }

    if view.is_selection_mode_active {
        println!("Selected: {}", view.selected_count);
    }
}

fn marker_strip(view: &ListViewModel) -> String {
    let slots: Vec<String> = view
        .page_markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(n) if *n == view.current_page => format!("[{}]", n.bold()),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Ellipsis => "...".to_string(),
        })
        .collect();
    slots.join(" ")
}

pub fn render_stats(stats: &CollectionStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Plain => {
            println!("Total items:     {}", stats.total_items);
            println!("Estimated value: ${:.2}", stats.estimated_value);
            println!("Featured:        {}", stats.featured_count);
            println!("Categories:      {}", stats.category_count);
        }
    }
    Ok(())
}
