use crate::{Error, Result};

/// Every synthesized name starts with this.
pub const PREFIX: &str = "unit_test_";

/// Between the label and the id.  There is nothing between the id and the line.
pub const SEPARATOR: &str = "_";

/// Ids are zero-padded to this many digits, enough for any `u64`.
///
/// The line follows the id directly, so the id has to have a fixed width for `<id><line>` to split only one way.
/// Macros are not always expanded in source order, which means a later line can get a smaller id.
pub const ID_WIDTH: usize = 20;

/// A synthesized function name.
///
/// Always a legal Rust identifier: [UniqueName::synthesize] is the only constructor and it refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{}{}{}{:020}{}", "PREFIX", label, "SEPARATOR", id, line)]
pub struct UniqueName {
    label: String,
    id: u64,
    line: u32,
}

impl UniqueName {
    /// Concatenate `label`, `id`, and `line` into a name.
    ///
    /// The label is not checked on its own.  The concatenated result is, and if it isn't an identifier the error
    /// carries the whole thing so that the user can see what was built.  A raw identifier label (`r#match`) loses its
    /// `r#`, since the prefix already keeps the result from being a keyword.
    pub fn synthesize(label: &str, id: u64, line: u32) -> Result<UniqueName> {
        let label = label.strip_prefix("r#").unwrap_or(label);
        let ret = UniqueName {
            label: label.to_string(),
            id,
            line,
        };

        if !is_identifier_tail(label) {
            return Err(Error::InvalidIdentifier {
                name: ret.to_string(),
            });
        }

        Ok(ret)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// The head of a zero-argument function declaration: `name ()`.
    ///
    /// Return type and body are up to whoever is emitting the code.
    pub fn declaration_head(&self) -> String {
        format!("{self} ()")
    }
}

/// Can `s` follow [PREFIX] and still be an identifier?
///
/// The prefix starts with a letter, so digits are fine anywhere in the label.  ASCII only: `char::is_alphanumeric`
/// would let through numerals such as `²` which rustc rejects.
fn is_identifier_tail(s: &str) -> bool {
    s.chars().all(|c| c == '_' || c.is_ascii_alphanumeric())
}
