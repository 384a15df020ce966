use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{BLUE, CYAN, GREEN, MAGENTA, RESET, WHITE, YELLOW};
use crate::utils::formatting::{truncate_visible, visible_width};

/// ANSI color for a log operation.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "punch" => GREEN,
        "shift" => CYAN,
        "check" => YELLOW,
        "migration_applied" => MAGENTA,
        "init" => BLUE,
        other if other.starts_with("rule_") => YELLOW,
        _ => WHITE,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;
            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| visible_width(op) + visible_width(target) + 3)
            .max()
            .unwrap_or(10)
            .min(48);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };
            let visible = truncate_visible(&op_target, op_w);
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&visible)));
            let color = color_for_operation(&operation);

            println!(
                "{:>id_w$}: {:<date_w$} | {color}{visible}{RESET}{padding} => {message}",
                id,
                date,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
