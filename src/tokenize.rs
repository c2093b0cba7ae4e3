//! Quote- and bracket-aware splitting of raw parameter lists.
//!
//! Splits only on top-level commas. `"`, `'`, `<` and `(` open a quoted run
//! that ends at the matching `"`, `'`, `>` or `)`. `[...]` and `{...}` are
//! tracked as independent nesting depths. Unbalanced input is tolerated.

const OPEN_QUOTES: [char; 4] = ['"', '\'', '<', '('];
const CLOSE_QUOTES: [char; 4] = ['"', '\'', '>', ')'];

/// Scanner state for one parameter list.
#[derive(Default)]
struct Splitter {
    current: String,
    pieces: Vec<String>,
    /// Set after a backslash inside a quoted run.
    literal: bool,
    /// Closing delimiter of the open quoted run.
    quote: Option<char>,
    array_depth: i32,
    object_depth: i32,
}

impl Splitter {
    fn feed(&mut self, ch: char) {
        if self.literal {
            self.current.push(ch);
            self.literal = false;
            return;
        }

        if let Some(close) = self.quote {
            // Escapes only apply inside a quoted run; the backslash is dropped.
            if ch == '\\' {
                self.literal = true;
                return;
            }
            self.current.push(ch);
            if ch == close {
                self.quote = None;
            }
            return;
        }

        match ch {
            _ if OPEN_QUOTES.contains(&ch) => {
                self.current.push(ch);
                let idx = OPEN_QUOTES.iter().position(|&c| c == ch).unwrap_or(0);
                self.quote = Some(CLOSE_QUOTES[idx]);
            }
            '[' => {
                self.current.push(ch);
                self.array_depth += 1;
            }
            ']' => {
                self.current.push(ch);
                self.array_depth -= 1;
            }
            '{' => {
                self.current.push(ch);
                self.object_depth += 1;
            }
            '}' => {
                self.current.push(ch);
                self.object_depth -= 1;
            }
            ',' if self.array_depth == 0 && self.object_depth == 0 => {
                self.flush();
            }
            _ => self.current.push(ch),
        }
    }

    fn flush(&mut self) {
        let piece = self.current.trim();
        if !piece.is_empty() {
            self.pieces.push(piece.to_string());
        }
        self.current.clear();
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.pieces
    }
}

/// Split a raw parameter list into trimmed, non-empty argument strings.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut splitter = Splitter::default();
    for ch in raw.chars() {
        splitter.feed(ch);
    }
    splitter.finish()
}
