use takeoff_core::model::{dedup_sorted, ComponentRecord};
use takeoff_core::ExtractionOutcome;

pub fn print(outcome: &ExtractionOutcome) {
    let rows = dedup_sorted(&outcome.records);

    if rows.is_empty() {
        println!("No components found.");
        return;
    }

    print_rows(&rows);

    let total: i64 = rows.iter().map(|r| r.quantity).sum();
    println!();
    println!("{} unique component(s), {} unit(s) total", rows.len(), total);
}

fn print_rows(rows: &[ComponentRecord]) {
    let code_width = rows
        .iter()
        .map(|r| r.code.len())
        .max()
        .unwrap_or(0)
        .max("Component".len());
    let levels_width = rows
        .iter()
        .map(|r| r.levels.len())
        .max()
        .unwrap_or(0)
        .max("Levels".len());

    println!(
        "{:<cw$}  {:<lw$}  {:>4}",
        "Component",
        "Levels",
        "Qty",
        cw = code_width,
        lw = levels_width
    );
    for r in rows {
        println!(
            "{:<cw$}  {:<lw$}  {:>4}",
            r.code,
            r.levels,
            r.quantity,
            cw = code_width,
            lw = levels_width
        );
    }
}
