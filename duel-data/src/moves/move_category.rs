use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which determines the stats used in damage calculation.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    /// Uses Attack against Defense.
    #[string = "Physical"]
    #[default]
    Physical,
    /// Uses Special Attack against Special Defense.
    #[string = "Special"]
    Special,
}
