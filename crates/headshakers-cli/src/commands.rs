use crate::args::{Cli, Commands, PrefsCommand};
use crate::handlers;
use crate::prefs::{resolve_data_dir, Preferences};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Browse {
            items,
            query,
            search,
            category,
            condition,
            featured,
            sort,
            page,
            page_size,
        } => {
            let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
            let prefs = Preferences::load_from(&Preferences::path_in(&data_dir))?;

            handlers::browse::handle(
                &items,
                query,
                search,
                category,
                condition,
                featured,
                sort,
                page,
                page_size,
                prefs.default_page_size,
                cli.format,
            )
        }

        Commands::Stats { items } => handlers::stats::handle(&items, cli.format),

        Commands::Prefs { command } => {
            let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
            match command {
                PrefsCommand::Show => handlers::prefs::handle_show(&data_dir, cli.format),
                PrefsCommand::Set { key, value } => {
                    handlers::prefs::handle_set(&data_dir, &key, &value)
                }
            }
        }
    }
}
