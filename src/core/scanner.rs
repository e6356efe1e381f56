//! Character-level scanner that extracts localization string literals.
//!
//! The scanner recognizes the lexical shape `t("...")` or `t('...')` (the
//! call identifier is configurable) in a single linear pass over the input,
//! one character at a time, tracking only the previous character. It is a
//! purely lexical match: calls inside comments or otherwise dead code are
//! reported too. This is a documented limitation, not something callers
//! should try to compensate for.

/// Characters that may legally precede the call identifier.
///
/// The identifier must sit at a word boundary so that e.g. `print("x")`
/// never matches a call named `t`.
fn is_word_break(c: char) -> bool {
    matches!(
        c,
        '=' | '*'
            | '+'
            | '-'
            | '/'
            | '('
            | ')'
            | '^'
            | '%'
            | '#'
            | '@'
            | '!'
            | '~'
            | '`'
            | '"'
            | '\''
            | ' '
            | '\t'
            | '\n'
    )
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

const ESCAPE: char = '\\';

/// Scanner states, advanced one character per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Looking for the call identifier at a word boundary.
    SeekCallName,
    /// Identifier seen; skipping whitespace up to `(`.
    SeekOpenParen,
    /// `(` seen; skipping whitespace up to an opening quote.
    SeekOpenQuote,
    /// Inside the string literal delimited by `delimiter`.
    AccumulateLiteral { delimiter: char },
}

/// Lazy iterator over the string literals passed to a translation call.
///
/// Yields each literal exactly as it appeared between the quote delimiters.
/// Escape sequences are kept verbatim (backslashes included), not decoded.
/// An input that ends mid-call or mid-literal discards the partial match
/// silently.
pub struct Literals<'a> {
    chars: std::str::Chars<'a>,
    call_name: char,
    state: State,
    prev: char,
    buffer: String,
    /// Length of the current run of consecutive backslashes. An even count
    /// in front of the delimiter means the delimiter is unescaped.
    escapes: usize,
}

impl<'a> Literals<'a> {
    /// Create a scanner over `source` matching calls to `call_name`.
    ///
    /// The previous character starts out as a space so that a call at the
    /// very start of the input counts as boundary-delimited.
    pub fn new(source: &'a str, call_name: char) -> Self {
        Self {
            chars: source.chars(),
            call_name,
            state: State::SeekCallName,
            prev: ' ',
            buffer: String::new(),
            escapes: 0,
        }
    }

    /// Advance the state machine by one character, returning a literal on
    /// the step that commits it.
    fn step(&mut self, c: char) -> Option<String> {
        let committed = match self.state {
            State::SeekCallName => {
                if c == self.call_name && is_word_break(self.prev) {
                    self.state = State::SeekOpenParen;
                }
                None
            }
            State::SeekOpenParen => {
                if !is_space(c) {
                    self.state = if c == '(' {
                        State::SeekOpenQuote
                    } else {
                        // Not a call after all, e.g. `t + 1`.
                        State::SeekCallName
                    };
                }
                None
            }
            State::SeekOpenQuote => {
                if !is_space(c) {
                    if is_quote(c) {
                        self.escapes = 0;
                        self.state = State::AccumulateLiteral { delimiter: c };
                    } else {
                        // First argument is not a string literal.
                        self.state = State::SeekCallName;
                    }
                }
                None
            }
            State::AccumulateLiteral { delimiter } => {
                if c == delimiter && self.escapes % 2 == 0 {
                    self.state = State::SeekCallName;
                    Some(std::mem::take(&mut self.buffer))
                } else {
                    if c == ESCAPE {
                        self.escapes += 1;
                    } else {
                        self.escapes = 0;
                    }
                    self.buffer.push(c);
                    None
                }
            }
        };
        self.prev = c;
        committed
    }
}

impl Iterator for Literals<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(c) = self.chars.next() {
            if let Some(literal) = self.step(c) {
                return Some(literal);
            }
        }
        // End of input: drop any partial match.
        self.buffer.clear();
        None
    }
}
