use serde::{Deserialize, Serialize};

/// The language the generated code should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeTarget {
    Python,
    Sql,
}

impl CodeTarget {
    pub fn language(&self) -> &'static str {
        match self {
            CodeTarget::Python => "Python",
            CodeTarget::Sql => "SQL",
        }
    }

    /// Line-comment prefix of the target language, used for placeholder snippets.
    pub fn comment_prefix(&self) -> &'static str {
        match self {
            CodeTarget::Python => "#",
            CodeTarget::Sql => "--",
        }
    }
}
