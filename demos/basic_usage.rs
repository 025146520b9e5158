//! Basic usage example for tel-input.
//!
//! Simulates a user focusing the phone field, typing a number keystroke by
//! keystroke, picking a flag from the dropdown and leaving the field.
//!
//! # Running
//!
//! ```bash
//! cargo run --example basic_usage
//! ```

use tel_input::{Command, InputWidget, PhoneInput};

fn dispatch(cmd: Option<Command>) {
    if let Some(Command::Change { value }) = cmd {
        println!("  -> change notification: {value:?}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Start with the UK as the default country
    let mut input = PhoneInput::builder().default_country("gb").build()?;

    input.on_focus();
    println!("Focused, field shows {:?}", input.value());

    // Type an Antiguan number one character at a time
    let typed = "+12684641234";
    for end in 1..=typed.len() {
        let text = &typed[..end];
        let cmd = input.on_input(text);
        println!(
            "Typed {:<14} -> {:<18} [{}]",
            text,
            input.value(),
            input.active_country().display_name()
        );
        dispatch(cmd);
    }

    // Override the country from the dropdown
    input.toggle_dropdown();
    let cmd = input.select_flag(("United States", "us"));
    println!(
        "Selected flag, field shows {:?} [{}]",
        input.value(),
        input.active_country().iso
    );
    dispatch(cmd);

    // Leaving the field keeps a touched value
    dispatch(input.on_blur());
    println!("Blurred, state: {}", serde_json::to_string(&input.state())?);

    Ok(())
}
