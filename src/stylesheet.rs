//! Minimal stylesheet model consumed by the transform.
//!
//! The transform only needs to visit each declaration, read its textual value and know which file
//! it came from. Pipelines with their own CSS parser implement [`DeclarationWalker`]; plain source
//! text is split with [`find_declarations`](crate::declarations::find_declarations).

use std::path::{Path, PathBuf};

/// Where a declaration was authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationSource {
    /// Absolute path of the stylesheet file containing the declaration.
    pub input_file: Option<PathBuf>,
}

/// A single `property: value` pair with a mutable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, e.g. `background-image`.
    pub property: String,
    /// Raw value text.
    pub value: String,
    /// Optional origin metadata.
    pub source: Option<DeclarationSource>,
}

impl Declaration {
    /// Declaration without source metadata.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            source: None,
        }
    }

    /// Attach the file the declaration was read from.
    pub fn with_input_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.source = Some(DeclarationSource {
            input_file: Some(file.into()),
        });
        self
    }

    /// Directory of the originating file, if known.
    pub fn source_dir(&self) -> Option<&Path> {
        self.source
            .as_ref()
            .and_then(|source| source.input_file.as_deref())
            .and_then(Path::parent)
    }
}

/// Paths the pipeline is reading from and writing to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Source stylesheet path.
    pub from: Option<PathBuf>,
    /// Destination stylesheet path.
    pub to: Option<PathBuf>,
}

/// Iteration hook over the declarations of a parsed stylesheet.
pub trait DeclarationWalker {
    /// Visit every declaration in textual order, stopping at the first error.
    fn try_each_declaration<E>(
        &mut self,
        visit: impl FnMut(&mut Declaration) -> Result<(), E>,
    ) -> Result<(), E>;
}

/// Flat list of declarations in the order they appear in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Declarations in textual order.
    pub declarations: Vec<Declaration>,
}

impl Stylesheet {
    /// Build a stylesheet from declarations.
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }
}

impl DeclarationWalker for Stylesheet {
    fn try_each_declaration<E>(
        &mut self,
        visit: impl FnMut(&mut Declaration) -> Result<(), E>,
    ) -> Result<(), E> {
        self.declarations.iter_mut().try_for_each(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_dir_is_parent_of_input_file() {
        let declaration = Declaration::new("color", "red")
            .with_input_file("/proj/src/main.css");
        assert_eq!(declaration.source_dir(), Some(Path::new("/proj/src")));
    }

    #[test]
    fn source_dir_is_absent_without_metadata() {
        assert_eq!(Declaration::new("color", "red").source_dir(), None);
    }

    #[test]
    fn walks_declarations_in_order() {
        let declarations = vec![Declaration::new("a", "1"), Declaration::new("b", "2")];
        let mut sheet = Stylesheet::new(declarations);
        let mut seen = Vec::new();
        sheet
            .try_each_declaration(|declaration| {
                seen.push(declaration.property.clone());
                declaration.value.push('!');
                Ok::<(), ()>(())
            })
            .unwrap();

        assert_eq!(seen, ["a", "b"]);
        assert_eq!(sheet.declarations[1].value, "2!");
    }
}
