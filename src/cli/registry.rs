use once_cell::sync::Lazy;
use strsim::levenshtein;

const SUGGESTION_DISTANCE: usize = 3;

/// One dispatchable CLI command.
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub static REGISTRY: Lazy<Vec<CommandSpec>> = Lazy::new(|| {
    vec![
        CommandSpec {
            name: "show",
            usage: "show",
            summary: "Render the full dashboard (default)",
        },
        CommandSpec {
            name: "balance",
            usage: "balance",
            summary: "Balance with its breakdown",
        },
        CommandSpec {
            name: "collections",
            usage: "collections",
            summary: "Open and closed collections",
        },
        CommandSpec {
            name: "expenses",
            usage: "expenses",
            summary: "Expense table, newest first",
        },
        CommandSpec {
            name: "events",
            usage: "events",
            summary: "Planned events with countdowns",
        },
        CommandSpec {
            name: "notices",
            usage: "notices",
            summary: "Informational notices",
        },
        CommandSpec {
            name: "banking",
            usage: "banking",
            summary: "Account details and transfer title",
        },
        CommandSpec {
            name: "lookup",
            usage: "lookup [number]",
            summary: "Payment status and dues for one member",
        },
        CommandSpec {
            name: "theme",
            usage: "theme [plain|iconic]",
            summary: "Show or persist the theme preference",
        },
        CommandSpec {
            name: "help",
            usage: "help",
            summary: "List available commands",
        },
        CommandSpec {
            name: "version",
            usage: "version",
            summary: "Print version information",
        },
    ]
});

/// Nearest known command within a small edit distance.
pub fn suggest(input: &str) -> Option<&'static str> {
    REGISTRY
        .iter()
        .map(|spec| (levenshtein(spec.name, input), spec.name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .map(|(_, name)| name)
}
