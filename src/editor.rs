use std::borrow::Cow::{self, Borrowed, Owned};

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{Highlighter, MatchingBracketHighlighter};
use rustyline::hint::HistoryHinter;
use rustyline::validate::MatchingBracketValidator;
use rustyline::{Context, Helper, Hinter, Validator};

const KEYWORDS: [&str; 14] = [
    "ADD", "INCOME", "EXPENSE", "EXPENSES", "DELETE", "CLEAR", "EXPORT", "TO",
    "LIST", "TOTALS", "CATEGORIES", "MONTHLY", "HELP", "All",
];

/// Words that may start a command
const COMMANDS: [&str; 9] = ["ADD", "DELETE", "CLEAR", "EXPORT", "LIST", "TOTALS", "CATEGORIES", "MONTHLY", "HELP"];

/// Line editor helper. Completes command keywords and category names.
#[derive(Helper, Hinter, Validator)]
pub(crate) struct LedgerHelper {
    pub(crate) categories: Vec<String>,
    pub(crate) highlighter: MatchingBracketHighlighter,
    #[rustyline(Validator)]
    pub(crate) validator: MatchingBracketValidator,
    #[rustyline(Hinter)]
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored_prompt: String,
}

impl LedgerHelper {
    pub(crate) fn new(categories: &[String], prompt: &str) -> LedgerHelper {
        LedgerHelper {
            categories: categories.to_vec(),
            highlighter: MatchingBracketHighlighter::new(),
            validator: MatchingBracketValidator::new(),
            hinter: HistoryHinter {},
            colored_prompt: format!("\x1b[1;32m{prompt}\x1b[0m"),
        }
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        KEYWORDS.iter().map(|k| k.to_string())
            .chain(self.categories.iter().cloned())
            .filter(|c| c.to_lowercase().starts_with(&lower))
            .collect()
    }
}

/// Byte offset where the word ending at `pos` begins. Words are separated by whitespace or quotes.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos].char_indices().rev()
        .find(|&(_, c)| c.is_whitespace() || c == '\'')
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Wraps the leading command keyword of `line` in bold blue, if it has one.
fn highlight_command(line: &str) -> Option<String> {
    let end = line.find(char::is_whitespace).unwrap_or(line.len());
    let (command, rest) = line.split_at(end);
    if is_command(command) {
        Some(format!("\x1b[1;34m{command}\x1b[0m{rest}"))
    } else {
        None
    }
}

fn is_command(word: &str) -> bool {
    COMMANDS.iter().any(|c| c.eq_ignore_ascii_case(word))
}

impl Completer for LedgerHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);
        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let pairs = self.candidates(word).into_iter()
            .map(|c| Pair { display: c.clone(), replacement: c })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for LedgerHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored_prompt)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned("\x1b[2m".to_owned() + hint + "\x1b[m")
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        match self.highlighter.highlight(line, pos) {
            Owned(brackets) => Owned(brackets),
            Borrowed(line) => highlight_command(line).map_or(Borrowed(line), Owned),
        }
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.highlighter.highlight_char(line, pos, forced) || line.split_whitespace().next().map_or(false, is_command)
    }
}
