use std::{
    env,
    fs::File,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Result,
};
use serde::de::DeserializeOwned;

use crate::{
    DataStore,
    Id,
    MoveCatalog,
    MoveData,
    SpeciesData,
    TypeChart,
};

const SPECIES_FILE: &str = "species.json";
const MOVES_FILE: &str = "moves.json";
const TYPE_CHART_FILE: &str = "type-chart.json";

const EMBEDDED_SPECIES: &str = include_str!("../../data/species.json");

/// An implementation of [`DataStore`] that reads data locally from disk.
///
/// The data directory must contain `species.json`, a map of species name to [`SpeciesData`].
/// `moves.json` (a map of move name to [`MoveData`]) and `type-chart.json` are optional; the
/// standard tables are used when they are absent.
pub struct LocalDataStore {
    pub type_chart: TypeChart,
    pub moves: MoveCatalog,
    pub species: HashMap<Id, SpeciesData>,
}

impl LocalDataStore {
    /// Reads all data from the given directory.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let root = root.as_ref();
        let species = Self::read_file::<HashMap<String, SpeciesData>>(&root.join(SPECIES_FILE))?
            .context(format!(
                "{SPECIES_FILE} is missing from {}",
                root.to_string_lossy()
            ))?;
        let type_chart = Self::read_file::<TypeChart>(&root.join(TYPE_CHART_FILE))?
            .unwrap_or_else(TypeChart::standard);
        let moves = match Self::read_file::<HashMap<String, MoveData>>(&root.join(MOVES_FILE))? {
            Some(moves) => Self::move_catalog(moves)?,
            None => MoveCatalog::standard(),
        };
        Ok(Self {
            type_chart,
            moves,
            species: Self::species_table(species),
        })
    }

    /// Reads all data from the directory named by the given environment variable.
    pub fn new_from_env(var: &str) -> Result<Self> {
        let root = env::var(var).context(format!("environment variable {var} is not set"))?;
        Self::new(PathBuf::from(root))
    }

    /// Uses the species bundled with this crate and the standard tables.
    pub fn embedded() -> Result<Self> {
        let species = serde_json::from_str::<HashMap<String, SpeciesData>>(EMBEDDED_SPECIES)
            .context("failed to read embedded species data")?;
        Ok(Self {
            type_chart: TypeChart::standard(),
            moves: MoveCatalog::standard(),
            species: Self::species_table(species),
        })
    }

    fn read_file<T>(path: &Path) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        if !path.is_file() {
            return Ok(None);
        }
        let path_name = path.to_string_lossy().to_string();
        let file = File::open(path).context(format!("{path_name} could not be opened"))?;
        serde_json::from_reader(file)
            .map(Some)
            .context(format!("failed to read data from {path_name}"))
    }

    fn species_table(species: HashMap<String, SpeciesData>) -> HashMap<Id, SpeciesData> {
        species
            .into_iter()
            .map(|(key, value)| (Id::from(key), value))
            .collect()
    }

    fn move_catalog(moves: HashMap<String, MoveData>) -> Result<MoveCatalog> {
        // Map order is unspecified, but move selection must be reproducible.
        let mut moves = moves.into_iter().collect::<Vec<_>>();
        moves.sort_by_cached_key(|(key, _)| Id::from(key.as_str()));
        MoveCatalog::new(moves.into_iter().map(|(_, data)| data).collect())
            .context(format!("invalid {MOVES_FILE}"))
    }
}

impl DataStore for LocalDataStore {
    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn get_move_catalog(&self) -> Result<MoveCatalog> {
        Ok(self.moves.clone())
    }

    fn all_species_ids(&self) -> Result<Vec<Id>> {
        let mut ids = self.species.keys().cloned().collect::<Vec<_>>();
        ids.sort();
        Ok(ids)
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }
}
