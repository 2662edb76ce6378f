use std::{fs, io, path::Path};

use ord_table::{OrdTable, TableError, TraversalOrder};
use ord_table_render::RenderError;
use thiserror::Error;

use crate::{
    generator::{Generator, GeneratorError},
    persistence::{self, PersistenceError},
    AgendaConfig, Municipality,
};

pub const SEQUENCE_LABEL: &str = "Output sequence: ";
pub const SEQUENCE_SEPARATOR: &str = ", ";

/// Failures of [Agenda] operations, with messages meant for the user
#[derive(Debug, Error)]
pub enum AgendaError {
    #[error("the municipality name is empty")]
    EmptyName,
    #[error("the register is empty")]
    Empty,
    #[error("municipality {0:?} was not found")]
    NotFound(String),
    #[error("municipality {0:?} is already in the register")]
    Duplicate(String),
    #[error("{0}")]
    Table(TableError),
    #[error("{0}")]
    Row(#[source] PersistenceError),
    #[error("import failed, nothing was changed: {0}")]
    Import(#[source] PersistenceError),
    #[error("export failed: {0}")]
    Export(#[source] PersistenceError),
    #[error(transparent)]
    Generate(#[from] GeneratorError),
    #[error("could not write the snapshot: {0}")]
    SnapshotWrite(#[from] ron::Error),
    #[error("could not read the snapshot: {0}")]
    SnapshotRead(#[from] ron::error::SpannedError),
    #[error("the snapshot entry {key:?} holds municipality {name:?}")]
    SnapshotMismatch { key: String, name: String },
    #[error("the {field} of snapshot entry {name:?} cannot be written as a row")]
    SnapshotField { name: String, field: &'static str },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AgendaError {
    fn from_table(e: TableError, name: &str) -> Self {
        match e {
            TableError::NullKey => AgendaError::EmptyName,
            TableError::EmptyRoot => AgendaError::Empty,
            TableError::NotFound => AgendaError::NotFound(name.to_owned()),
            TableError::AlreadyExists => AgendaError::Duplicate(name.to_owned()),
            e => AgendaError::Table(e),
        }
    }
}

/// A register of municipalities keyed by name, with the operations of the
/// command shell
pub struct Agenda {
    table: OrdTable<String, Municipality>,
    generator: Generator,
}

impl Agenda {
    pub fn new(config: &AgendaConfig) -> Self {
        Self {
            table: OrdTable::new(),
            generator: Generator::new(config.seed, config.name_prefix.clone()),
        }
    }

    pub fn table(&self) -> &OrdTable<String, Municipality> {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Imports a CSV file, see [persistence::import_csv]
    pub fn import(&mut self, path: impl AsRef<Path>) -> Result<usize, AgendaError> {
        let path = path.as_ref();
        let count = persistence::import_csv(&mut self.table, path).map_err(AgendaError::Import)?;
        tracing::info!(path = %path.display(), count, "imported");
        Ok(count)
    }

    pub fn export(&self, path: impl AsRef<Path>) -> Result<usize, AgendaError> {
        let path = path.as_ref();
        let count = persistence::export_csv(&self.table, path).map_err(AgendaError::Export)?;
        tracing::info!(path = %path.display(), count, "exported");
        Ok(count)
    }

    pub fn find(&self, name: &str) -> Result<&Municipality, AgendaError> {
        self.table
            .find(&name.to_owned())
            .map_err(|e| AgendaError::from_table(e, name))
    }

    pub fn insert(&mut self, m: Municipality) -> Result<(), AgendaError> {
        let name = m.name().to_owned();
        self.table
            .insert(name.clone(), m)
            .map_err(|e| AgendaError::from_table(e, &name))?;
        tracing::debug!(%name, "inserted");
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Municipality, AgendaError> {
        let m = self
            .table
            .remove(&name.to_owned())
            .map_err(|e| AgendaError::from_table(e, name))?;
        tracing::debug!(%name, "removed");
        Ok(m)
    }

    /// The number of records in the subtree of `name`, `None` if it is not
    /// in the register
    pub fn subtree_size(&self, name: &str) -> Option<usize> {
        self.table.subtree_size(&name.to_owned())
    }

    /// Names in the given traversal order, as a single line
    pub fn list(&self, order: TraversalOrder) -> String {
        let names: Vec<&str> = self
            .table
            .make_iterator(order)
            .map(Municipality::name)
            .collect();
        format!("{SEQUENCE_LABEL}{}", names.join(SEQUENCE_SEPARATOR))
    }

    /// The shape of the tree followed by the [Agenda::list] line
    pub fn dump(&self, order: TraversalOrder) -> String {
        if self.table.is_empty() {
            self.list(order)
        } else {
            format!("{}\n{}", self.table.dump(order), self.list(order))
        }
    }

    /// Generates `count` random records
    pub fn generate(&mut self, count: usize) -> Result<usize, AgendaError> {
        let count = self.generator.populate(&mut self.table, count)?;
        tracing::info!(count, len = self.table.len(), "generated");
        Ok(count)
    }

    pub fn clear(&mut self) {
        tracing::info!(len = self.table.len(), "clearing register");
        self.table.clear();
    }

    /// Builds a new table by inserting the records in ascending name order.
    /// The copy holds the same records, but its tree is a chain of right
    /// children.
    pub fn copy_table(&self) -> Result<OrdTable<String, Municipality>, AgendaError> {
        let mut copy = OrdTable::new();
        for m in &self.table {
            copy.insert(m.name().to_owned(), m.clone())
                .map_err(|e| AgendaError::from_table(e, m.name()))?;
        }
        Ok(copy)
    }

    /// Writes the records to `path` in RON
    pub fn snapshot_save(&self, path: impl AsRef<Path>) -> Result<(), AgendaError> {
        let path = path.as_ref();
        let s = ron::ser::to_string_pretty(&self.table, ron::ser::PrettyConfig::default())?;
        fs::write(path, s)?;
        tracing::info!(path = %path.display(), len = self.table.len(), "saved snapshot");
        Ok(())
    }

    /// Replaces the register with the records of a snapshot written by
    /// [Agenda::snapshot_save]. Records with a text field that [Agenda::export]
    /// could not write back are rejected. The register is unchanged on an
    /// error.
    pub fn snapshot_load(&mut self, path: impl AsRef<Path>) -> Result<usize, AgendaError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let table: OrdTable<String, Municipality> = ron::from_str(&s)?;
        for (key, m) in table.entries() {
            if key != m.name() {
                return Err(AgendaError::SnapshotMismatch {
                    key: key.clone(),
                    name: m.name().to_owned(),
                })
            }
            if let Some(field) = persistence::unwritable_field(m) {
                return Err(AgendaError::SnapshotField {
                    name: m.name().to_owned(),
                    field,
                })
            }
        }
        self.table = table;
        tracing::info!(path = %path.display(), len = self.table.len(), "loaded snapshot");
        Ok(self.table.len())
    }

    /// Renders the tree shape to an SVG file
    pub fn render(&self, path: impl AsRef<Path>) -> Result<(), AgendaError> {
        ord_table_render::render_to_svg_file(&self.table, path)?;
        Ok(())
    }
}
