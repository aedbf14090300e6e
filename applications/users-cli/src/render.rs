//! Output formatting for user lists.

use users_client::User;

const HEADERS: [&str; 4] = ["ID", "NAME", "USERNAME", "EMAIL"];
const MISSING: &str = "-";

/// Render users as an aligned plain-text table, one line per user.
pub fn render_table(users: &[User]) -> String {
    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|user| {
            [
                user.id.to_string(),
                user.name.clone(),
                user.username.clone().unwrap_or_else(|| MISSING.to_string()),
                user.email.clone().unwrap_or_else(|| MISSING.to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render users as a pretty-printed JSON array.
pub fn render_json(users: &[User]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(users)
}

/// Find a user by id.
pub fn find_user(users: &[User], id: u64) -> Option<&User> {
    users.iter().find(|user| user.id == id)
}
