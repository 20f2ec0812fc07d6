use anyhow::Result;

use crate::config::Config;

/// Styled rendering for the interactive screens.
///
/// Implementors append their formatted representation to `f`, pulling colors
/// and prefixes from the output sections of `config`.
pub trait DisplayTerminal {
    fn fmt(&self, f: &mut String, config: &Config) -> Result<()>;

    fn fmt_to_string(&self, config: &Config) -> Result<String> {
        let mut s = String::new();
        self.fmt(&mut s, config)?;
        Ok(s)
    }
}
