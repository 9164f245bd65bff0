use anyhow::Result;

use crate::{
    Id,
    MoveCatalog,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all resource data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
/// The battle resolver never reads a data store itself; collaborators resolve species and tables
/// up front and hand the results to the battle.
pub trait DataStore: Send + Sync {
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;
    /// Gets the move catalog.
    fn get_move_catalog(&self) -> Result<MoveCatalog>;
    /// Gets all species IDs, sorted.
    fn all_species_ids(&self) -> Result<Vec<Id>>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
}

/// An extension of [`DataStore`] for looking up resources by name.
pub trait DataStoreByName: DataStore {
    /// Gets a species by name.
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>>;
}

impl<T> DataStoreByName for T
where
    T: DataStore + ?Sized,
{
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>> {
        self.get_species(&Id::from(name))
    }
}
