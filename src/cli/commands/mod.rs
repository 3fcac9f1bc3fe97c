pub mod accounts;
pub mod categories;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod history;
pub mod system;
pub mod transaction;

use crate::cli::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    let groups = [
        dashboard::definitions(),
        transaction::definitions(),
        history::definitions(),
        accounts::definitions(),
        categories::definitions(),
        config::definitions(),
        export::definitions(),
        system::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}

/// Splits off a `--json` switch from the remaining arguments.
pub(crate) fn split_json_flag<'a>(args: &[&'a str]) -> (bool, Vec<&'a str>) {
    let json = args.iter().any(|arg| *arg == "--json");
    let rest = args.iter().copied().filter(|arg| *arg != "--json").collect();
    (json, rest)
}
