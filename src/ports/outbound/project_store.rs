use crate::shared::Result;
use crate::sourcing::domain::Project;

/// ProjectStore port for persisting projects and their components.
///
/// The core only needs to read component identifiers and quantities and
/// to write back the per-vendor cache fields after a refresh, so the port
/// stays a whole-project load/save pair; component-level CRUD lives on
/// the `Project` domain type itself.
pub trait ProjectStore {
    /// Loads the project from the backing store
    ///
    /// # Errors
    /// Returns an error if the store is missing or cannot be parsed.
    fn load(&self) -> Result<Project>;

    /// Persists the full project snapshot
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    fn save(&self, project: &Project) -> Result<()>;
}
