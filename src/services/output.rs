use crate::domain::models::JsonOut;
use serde::Serialize;

/// Emit one report: pretty JSON envelope with `--json`, otherwise the
/// caller's text rendering (which may span multiple lines).
pub fn emit<T: Serialize>(json: bool, data: T, text: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", text(&data));
    }
    Ok(())
}

/// Emit a list, one text line per entry.
pub fn emit_rows<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}
