//! Line-driven keyboard simulation.
//!
//! Each input line is replayed key by key into a `KeyboardSession`, and the
//! edits the session asks for are applied to an in-memory text field:
//! - `-` is backspace
//! - `1`..`9` accept the numbered suggestion when one is shown
//! - any other character is typed as is

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use wordpredict_core::{Dictionary, KeyEvent, KeyboardContext, KeyboardSession};

/// Apply the session's pending edit to `field`.
fn apply(field: &mut String, ctx: &KeyboardContext) {
    for _ in 0..ctx.delete_before {
        field.pop();
    }
    field.push_str(&ctx.commit_text);
}

fn show(field: &str, ctx: &KeyboardContext) {
    println!("  text: {field}|");
    if !ctx.suggestions.is_empty() {
        let strip: Vec<String> = ctx
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}:{}", i + 1, s))
            .collect();
        println!("  suggestions: {}", strip.join("  "));
    }
}

pub fn run(dict: Arc<Dictionary>) -> Result<()> {
    let mut session = KeyboardSession::new(dict);
    let mut field = String::new();

    println!("Type text and press Enter. '-' is backspace, 1-9 pick a suggestion.");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        for ch in line.chars() {
            let pick = ch
                .to_digit(10)
                .filter(|d| *d >= 1 && (*d as usize) <= session.context().suggestions.len());
            if let Some(d) = pick {
                session.select_suggestion(d as usize - 1);
            } else if ch == '-' {
                session.process_key(KeyEvent::Backspace);
            } else {
                session.process_key(KeyEvent::char(ch));
            }
            apply(&mut field, session.context());
        }
        show(&field, session.context());
        io::stdout().flush()?;
    }
    Ok(())
}
