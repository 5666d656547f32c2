//! Tokenizer: raw argument vector → command word + name→value map.
//!
//! Expected shape (program name already stripped):
//!
//! ```text
//! command --param1 val1 --param2=val2 ...
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Prefix that marks a token as a named option.
pub const OPTION_MARKER: &str = "--";

/// The result of tokenizing one argument vector.
///
/// `parameters` keys carry no marker prefix. Built once per invocation and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommandLine {
    pub command: String,
    pub parameters: HashMap<String, String>,
}

/// Split an argument vector into a command word and its named parameters.
///
/// Rules, in scan order over the tokens after the command word:
///
/// - A token without the `--` marker is skipped (reserved for positional
///   arguments).
/// - `--name=value` inserts `name → value`.
/// - `--name` takes the next token as its value, but only when that token
///   exists and is not itself marker-prefixed; otherwise the name is dropped
///   without consuming anything further.
/// - A repeated name overwrites the earlier value.
///
/// An empty vector yields an empty command and an empty map; "no command" is
/// surfaced later by dispatch, not here.
pub fn tokenize<I, S>(args: I) -> ParsedCommandLine
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let Some(first) = args.first() else {
        return ParsedCommandLine::default();
    };

    let command = first.as_ref().to_string();
    let mut parameters = HashMap::new();

    let mut i = 1;
    while i < args.len() {
        let token = args[i].as_ref();
        let Some(rest) = token.strip_prefix(OPTION_MARKER) else {
            tracing::debug!(token, "skipping token without option marker");
            i += 1;
            continue;
        };

        if let Some((name, value)) = rest.split_once('=') {
            parameters.insert(name.to_string(), value.to_string());
        } else {
            // Value lives in the next token, if there is one and it is not
            // another option.
            let next = args
                .get(i + 1)
                .map(|next| next.as_ref())
                .filter(|next| !next.starts_with(OPTION_MARKER));
            if let Some(value) = next {
                parameters.insert(rest.to_string(), value.to_string());
                i += 1;
            } else {
                tracing::debug!(name = rest, "dropping option with no value");
            }
        }
        i += 1;
    }

    ParsedCommandLine {
        command,
        parameters,
    }
}
