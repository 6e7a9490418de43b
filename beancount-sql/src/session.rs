use std::path::PathBuf;

use typed_builder::TypedBuilder;

use crate::keys::KeyAllocator;
use crate::statements::Statements;

/// Settings of a single import.
#[derive(Clone, Debug, Default, PartialEq, TypedBuilder)]
pub struct ImportOptions {
    /// Directory document paths are stored relative to. Documents are not imported without it.
    #[builder(default)]
    pub document_root: Option<PathBuf>,
}

/// State of one import run: the allocated keys and the statements produced so far.
///
/// Every record builder and stage works on the same session, so independent runs never
/// share state.
#[derive(Debug)]
pub struct ImportSession {
    pub(crate) options: ImportOptions,
    pub(crate) keys: KeyAllocator,
    pub(crate) statements: Statements,
}

impl ImportSession {
    pub fn new(options: ImportOptions) -> Self {
        ImportSession {
            options,
            keys: KeyAllocator::new(),
            statements: Statements::new(),
        }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    pub fn keys(&self) -> &KeyAllocator {
        &self.keys
    }

    pub fn statements(&self) -> &Statements {
        &self.statements
    }

    pub fn into_statements(self) -> Statements {
        self.statements
    }
}
