//! Terminal output sanitization
//!
//! Uploaded transcripts are arbitrary user files. Anything printed from them (titles,
//! summaries, tags, the composed prompt) goes through [`sanitize_for_terminal`] first so
//! embedded escape sequences cannot move the cursor, recolor the screen, or set the
//! window title.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Removes ANSI escape sequences and control characters, keeping `\n`, `\r` and `\t`.
///
/// Handles CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`) and
/// two-character escapes.
///
/// # Examples
///
/// ```
/// use brain_system::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[1m[요청]\x1b[0m"), "[요청]");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.next() {
                Some('[') => {
                    // Parameters and intermediates until a final byte in '@'..='~'
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-character escape (or a lone trailing ESC): drop both
                _ => {}
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\n' | '\r' | '\t') {
            continue;
        }

        out.push(ch);
    }

    out
}
