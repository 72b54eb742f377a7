#![cfg(feature = "std")]

//! Console rendering of boards and shot results.

use std::fmt::Write as _;

use crate::{
    board::{Board, BoardView},
    common::HitResult,
    coord::Coordinate,
};

/// Welcome banner with the input format.
pub fn greeting() -> String {
    let mut out = String::new();
    out.push_str("════════════════════════════════════\n");
    out.push_str("            W A R S H I P S\n");
    out.push_str("════════════════════════════════════\n");
    out.push_str("Enter shots as: x y  (column, then row; e.g. 3 5)\n");
    out.push_str("Legend: ■ ship  X hit  T miss  O unknown");
    out
}

/// Render a board projection as text with 1-based column and row headers.
pub fn format_view(view: &BoardView) -> String {
    let mut out = String::from("    ");
    for x in 1..=view.len() {
        let _ = write!(out, "{} ", x);
    }
    out.push('\n');
    out.push_str("  ");
    out.push_str(&"-".repeat(view.len() * 2 + 2));
    out.push('\n');
    for (r, row) in view.iter().enumerate() {
        let _ = write!(out, "{} | ", r + 1);
        for cell in row.iter() {
            out.push(cell.symbol());
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str("  ");
    out.push_str(&"-".repeat(view.len() * 2 + 2));
    out
}

/// Print the player's own board followed by the enemy board.
pub fn print_boards(own: &Board, enemy: &Board) {
    std::println!("\nYour board:");
    std::println!("{}", format_view(&own.render(true)));
    std::println!("\nEnemy board:");
    std::println!("{}", format_view(&enemy.render(false)));
}

/// One-line description of a shot for the console.
pub fn describe_shot(shooter: &str, target: Coordinate, result: HitResult) -> String {
    match result {
        HitResult::Miss => format!("[{}] shot at {}: miss.", shooter, target),
        HitResult::Hit => format!("[{}] shot at {}: hit!", shooter, target),
        HitResult::Sunk(length) => {
            format!("[{}] shot at {}: ship of length {} sunk!", shooter, target, length)
        }
    }
}
