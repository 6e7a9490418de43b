use std::fs;
use std::path::{Path, PathBuf};

use beancount_core::Document;
use log::debug;

use crate::escape::Blob;
use crate::keys::Positional;
use crate::statements::table;
use crate::{ImportError, ImportSession, RecordBuilder};

/// Embeds the referenced file. Does nothing unless a document root is configured.
impl<'a> RecordBuilder<&'a Document<'_>> for ImportSession {
    type Error = ImportError;
    fn build(&mut self, document: &'a Document<'_>) -> Result<(), Self::Error> {
        let root = match &self.options.document_root {
            Some(root) => root.clone(),
            None => return Ok(()),
        };
        let id = self.keys.next_position(Positional::Document);
        let account_id = self.keys.account_id(document.account.name())?;

        let path = Path::new(&*document.path);
        let data = fs::read(path).map_err(|source| ImportError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        let filename = canonical(path)
            .strip_prefix(canonical(&root))
            .map_err(|_| ImportError::DocumentOutsideRoot {
                path: path.to_path_buf(),
                root: root.clone(),
            })?
            .to_string_lossy()
            .into_owned();
        debug!("document {} ({} bytes)", filename, data.len());

        self.statements.insert(
            table::DOCUMENT,
            &[
                ("id", &id),
                ("date", &document.date),
                ("account_id", &account_id),
                ("filename", &filename),
                ("data", &Blob(&data)),
            ],
        );
        Ok(())
    }
}

// Symlinks and `..` are resolved so that the root and the document compare by location. A path
// that cannot be resolved is used as given.
fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
