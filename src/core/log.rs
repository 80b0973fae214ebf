use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "add_group" => Colour::Green,
        "del" | "del_group" | "clear" | "load_error" => Colour::Red,
        "edit" | "move" => Colour::Yellow,
        "status" => Colour::Cyan,
        "import" | "export" | "backup" => Colour::Blue,
        "migration_applied" | "migrate_legacy" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// "operation (target)" cut to [`MAX_OP_WIDTH`] visible characters, with
/// only the operation word coloured.
fn format_op_target(entry: &LogEntry) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if plain.chars().count() > MAX_OP_WIDTH {
        let mut s = plain.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(&entry.operation);
    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, &str)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                (e.id, date, format_op_target(e), e.message.as_str())
            })
            .collect();

        let id_w = rows
            .iter()
            .map(|(id, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows.iter().map(|(_, d, _, _)| d.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rows {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
