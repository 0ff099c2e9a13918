//! User-facing command words, prefixes and messages.

pub const FIND_COMMAND_WORD: &str = "find";
pub const FIND_COMMAND_ALIAS: &str = "f";
pub const LIST_COMMAND_WORD: &str = "list";

/// Prefix of name keywords, e.g. `n/alice bob`.
pub const PREFIX_NAME: &str = "n/";
/// Prefix of id keywords, e.g. `id/S872D`.
pub const PREFIX_ID: &str = "id/";

pub const FIND_USAGE: &str = r#"find or f: Finds all patients whose names contain any of the specified keywords (case-insensitive), or whose id matches one of the given ids, and displays them as a list.
Parameters: n/KEYWORD [MORE_KEYWORDS]... or id/ID [MORE_IDS]...
Example 1: find n/alice bob charlie
Example 2: find id/S872D
Example 3: f id/S872D"#;

pub const LIST_SUCCESS: &str = "Listed all patients";

/// Feedback after a search.
pub fn persons_listed(count: usize) -> String {
    format!("{} persons listed!", count)
}
