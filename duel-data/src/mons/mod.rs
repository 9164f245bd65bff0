mod species_data;
mod stat;
mod r#type;

pub use species_data::SpeciesData;
pub use stat::{
    Stat,
    StatMap,
    StatTable,
    StatTableEntries,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
