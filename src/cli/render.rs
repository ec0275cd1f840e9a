//! Section renderers. Each returns a plain string so commands decide what
//! to print and tests can assert on content.

use chrono::NaiveDate;

use duesboard_core::{BalanceBreakdown, MemberStatement};
use duesboard_domain::{BankingDetails, DerivedCollection, Event, Expense, Income, Notice};

use crate::cli::{
    formatters::CliFormatters,
    ui::style::UiStyle,
    ui::table::{Table, TableColumn, TableRenderer},
};

/// Member number used in the worked transfer-title example.
const TRANSFER_TITLE_EXAMPLE_MEMBER: u32 = 8;

pub fn header(title: &str, today: NaiveDate, style: &UiStyle, fmt: &CliFormatters) -> String {
    let mut lines = vec![style.header(title)];
    if !style.plain_mode {
        lines.push(style.horizontal_line(style.line_width));
    }
    lines.push(fmt.long_date(today));
    lines.join("\n")
}

pub fn balance_section(
    breakdown: &BalanceBreakdown,
    incomes: &[Income],
    style: &UiStyle,
    fmt: &CliFormatters,
) -> String {
    let mut lines = vec![style.header("Balance")];
    lines.push(fmt.amount(breakdown.balance()));
    lines.push(format!(
        "  Collections income: {}",
        fmt.amount(breakdown.from_collections)
    ));
    for income in incomes {
        lines.push(format!(
            "  Other income - {}: {}",
            income.display_source(),
            fmt.amount(income.amount)
        ));
    }
    lines.push(format!(
        "  Total expenses: - {}",
        fmt.amount(breakdown.total_expenses)
    ));
    lines.join("\n")
}

pub fn collections_section(
    title: &str,
    collections: &[DerivedCollection],
    empty_message: &str,
    style: &UiStyle,
    fmt: &CliFormatters,
) -> String {
    let mut lines = vec![style.header(title)];
    if collections.is_empty() {
        lines.push(empty_message.to_string());
    }
    for collection in collections {
        let badge = if collection.is_open() {
            style.ok("[open]")
        } else {
            "[closed]".to_string()
        };
        lines.push(format!("{} {}", collection.name, badge));
        lines.push(format!(
            "  Due: {}{}Paid: {}/{} ({}%){}Collected: {}",
            fmt.amount(collection.amount_per_child),
            style.separator(),
            collection.paid_count,
            collection.roster_size(),
            collection.paid_percent(),
            style.separator(),
            fmt.amount(collection.collected_amount)
        ));
        if collection.is_open() && !collection.unpaid_numbers.is_empty() {
            let numbers = collection
                .unpaid_numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("  Unpaid: {numbers}"));
        }
    }
    lines.join("\n")
}

pub fn expenses_section(expenses: &[Expense], style: &UiStyle, fmt: &CliFormatters) -> String {
    if expenses.is_empty() {
        return format!("{}\nNo expenses recorded.", style.header("Expenses"));
    }

    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let receipt_cell = |expense: &Expense| -> String {
        if let Some(receipt) = expense.receipt.as_deref() {
            receipt.to_string()
        } else if let Some(note) = expense.receipt_note.as_deref() {
            note.to_string()
        } else {
            "-".to_string()
        }
    };

    let columns = vec![
        TableColumn::new("Date", column_width("Date", sorted.iter().map(|e| e.date.as_str()))),
        TableColumn::new("What", column_width("What", sorted.iter().map(|e| e.what.as_str()))),
        TableColumn::new("Amount", 12),
        TableColumn::new("Receipt", 8),
    ];
    let mut table = Table::new(Some("Expenses"), columns);
    for expense in sorted {
        table.add_row(vec![
            expense.date.clone(),
            expense.what.clone(),
            fmt.amount(expense.amount),
            receipt_cell(expense),
        ]);
    }
    TableRenderer::render(&table, style)
}

pub fn events_section(events: &[Event], today: NaiveDate, style: &UiStyle) -> String {
    let mut lines = vec![style.header("Events")];
    if events.is_empty() {
        lines.push("No events planned.".to_string());
        return lines.join("\n");
    }

    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    for event in sorted {
        lines.push(format!("{} ({})", event.title, event.date));
        if let Some(description) = event.description.as_deref() {
            lines.push(format!("  {description}"));
        }
        if event.is_upcoming(today) {
            if let Some(days) = event.days_until(today) {
                let noun = if days == 1 { "day" } else { "days" };
                lines.push(format!("  {days} {noun} to the event"));
            }
        }
    }
    lines.join("\n")
}

pub fn notices_section(notices: &[Notice], style: &UiStyle) -> String {
    let mut lines = vec![style.header("Information")];
    if notices.is_empty() {
        lines.push("No notices.".to_string());
        return lines.join("\n");
    }
    for notice in notices {
        lines.push(notice.title.clone());
        lines.push(format!("  {}", notice.content));
    }
    lines.join("\n")
}

pub fn banking_section(banking: &BankingDetails, style: &UiStyle) -> String {
    let example = TRANSFER_TITLE_EXAMPLE_MEMBER;
    let mut lines = vec![style.header("Banking")];
    lines.push(format!("Account number: {}", banking.account_number));
    lines.push(format!("BLIK: {}", banking.blik));
    lines.push(format!("Revolut: {}", banking.revolut));
    lines.push(format!(
        "Transfer title (example for member {example}): {}",
        banking.transfer_title(example)
    ));
    lines.join("\n")
}

pub fn lookup_section(
    statement: &MemberStatement,
    style: &UiStyle,
    fmt: &CliFormatters,
) -> String {
    let mut lines = vec![style.header(&format!(
        "Member {} - status across open collections",
        statement.member
    ))];
    if statement.per_collection.is_empty() {
        lines.push("No open collections.".to_string());
        return lines.join("\n");
    }
    for entry in &statement.per_collection {
        let status = if entry.paid {
            style.ok(&badge_text(style, "paid", "✅ paid"))
        } else {
            let text = format!("due ({})", fmt.amount(entry.amount_due));
            style.due(&badge_text(style, &text, &format!("❌ {text}")))
        };
        lines.push(format!("  {} - {}", entry.name, status));
    }
    let total = if statement.is_settled() {
        style.ok("none")
    } else {
        style.due(&fmt.amount(statement.total_due))
    };
    lines.push(format!("Total due: {total}"));
    lines.join("\n")
}

fn badge_text(style: &UiStyle, plain: &str, iconic: &str) -> String {
    if style.use_icons {
        iconic.to_string()
    } else {
        plain.to_string()
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(str::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
        .min(40)
}
