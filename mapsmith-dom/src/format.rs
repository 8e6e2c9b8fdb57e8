//! Rendering of compilation units plus the structural formatter check.
//!
//! The passes only mutate the tree; this module is the thin hand-off to the
//! downstream renderer. A unit whose rendered text is structurally broken
//! (unbalanced braces, typically a malformed synthesized body line) fails
//! hard here and aborts that compilation unit's generation run.

use eyre::{Result, bail};

use crate::{Interface, TopLevelClass};

/// Render an interface and verify the result is structurally sound.
pub fn format_interface(interface: &Interface) -> Result<String> {
    let source = interface.build();
    check_braces(&source)?;
    Ok(source)
}

/// Render a top-level class and verify the result is structurally sound.
pub fn format_class(class: &TopLevelClass) -> Result<String> {
    let source = class.build();
    check_braces(&source)?;
    Ok(source)
}

/// Verify that braces balance outside of string and character literals.
fn check_braces(source: &str) -> Result<()> {
    let mut depth: i64 = 0;
    let mut in_string = false;
    let mut in_char = false;
    let mut escaped = false;

    for c in source.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string || in_char => escaped = true,
            '"' if !in_char => in_string = !in_string,
            '\'' if !in_string => in_char = !in_char,
            '{' if !in_string && !in_char => depth += 1,
            '}' if !in_string && !in_char => {
                depth -= 1;
                if depth < 0 {
                    bail!("unbalanced braces: unexpected '}}'");
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        bail!("unbalanced braces: {depth} unclosed '{{'");
    }
    Ok(())
}
