use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyspace::api::{CombinationEntry, PresetSummary, SavedSummary};
use keyspace::stats::Stats;
use keyspace::strategy::{Strategy, StrategyKind};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_presets(presets: &[PresetSummary]) {
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Pattern"),
        Cell::new("Unknowns"),
        Cell::new("Description"),
    ]);

    for p in presets {
        table.add_row(vec![
            Cell::new(&p.id).add_attribute(Attribute::Bold),
            Cell::new(&p.name),
            Cell::new(&p.pattern),
            Cell::new(p.unknowns_count),
            Cell::new(&p.description),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_saved(puzzles: &[SavedSummary]) {
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Pattern"),
        Cell::new("Unknowns"),
        Cell::new("Created"),
    ]);

    for p in puzzles {
        table.add_row(vec![
            Cell::new(&p.id).add_attribute(Attribute::Bold),
            Cell::new(&p.name),
            Cell::new(&p.pattern),
            Cell::new(p.unknowns_count),
            Cell::new(p.created_at.format("%Y-%m-%d %H:%M:%S")),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_combinations(entries: &[CombinationEntry]) {
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
        Cell::new("Key"),
        Cell::new("Status"),
    ]);

    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (i, entry) in entries.iter().enumerate() {
        let status = if entry.checked {
            Cell::new("checked").fg(Color::Red)
        } else {
            Cell::new("open").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.value).fg(Color::Cyan),
            Cell::new(&entry.key),
            status,
        ]);
    }
    println!("\n{}", table);
}

pub fn print_stats(stats: &Stats) {
    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new("Checked"),
        Cell::new("Remaining").fg(Color::Cyan),
        Cell::new("P(next)"),
        Cell::new("P(<=3)"),
        Cell::new("P(<=5)"),
        Cell::new("P(<=10)"),
        Cell::new("Expected"),
        Cell::new("Best"),
        Cell::new("Worst"),
    ]);

    for i in 0..=9 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new(stats.total),
        Cell::new(stats.checked),
        Cell::new(stats.remaining).fg(Color::Cyan),
        Cell::new(format!("{:.2}%", stats.probability_next)),
        Cell::new(format!("{:.2}%", stats.probability_within_3)),
        Cell::new(format!("{:.2}%", stats.probability_within_5)),
        Cell::new(format!("{:.2}%", stats.probability_within_10)),
        Cell::new(format!("{:.1}", stats.expected_attempts)),
        Cell::new(stats.best_case),
        Cell::new(stats.worst_case),
    ]);
    println!("\n{}", table);
}

pub fn print_strategy(strategy: &Strategy) {
    if strategy.strategy == StrategyKind::Exhausted {
        println!("\nAll candidates checked. Nothing left to try.");
        return;
    }

    let mut table = base_table();
    table.add_row(vec![
        Cell::new("Try").add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
        Cell::new("Key"),
    ]);

    for (i, candidate) in strategy.recommended.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&candidate.value).fg(Color::Cyan),
            Cell::new(&candidate.key),
        ]);
    }
    println!("\n{}", table);
    println!("{} candidate(s) remaining.", strategy.total_remaining);
}
