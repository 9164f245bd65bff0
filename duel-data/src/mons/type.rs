use std::fmt;

use ahash::{
    HashMap,
    HashMapExt,
};
use serde::{
    Deserialize,
    Serialize,
    de::{
        self,
        Visitor,
    },
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a species or move, which determines weaknesses and resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

impl Type {
    /// Every type, in chart order.
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];
}

/// Type effectiveness of one type against another.
///
/// Also used to classify the combined multiplier against a dual-typed defender, in which case
/// 0.25 is [`TypeEffectiveness::Weak`] and 4 is [`TypeEffectiveness::Strong`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl From<f32> for TypeEffectiveness {
    fn from(value: f32) -> Self {
        if value < f32::EPSILON {
            Self::None
        } else if (value - 1f32).abs() < f32::EPSILON {
            Self::Normal
        } else if value < 1f32 {
            Self::Weak
        } else {
            Self::Strong
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => 0f32,
            TypeEffectiveness::Weak => 0.5,
            TypeEffectiveness::Normal => 1f32,
            TypeEffectiveness::Strong => 2f32,
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f32(f32::from(*self)),
            _ => serializer.serialize_u32(f32::from(*self) as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl TypeEffectivenessVisitor {
    fn exact<E>(value: f64, unexpected: de::Unexpected) -> Result<TypeEffectiveness, E>
    where
        E: de::Error,
    {
        match value {
            0f64 => Ok(TypeEffectiveness::None),
            0.5 => Ok(TypeEffectiveness::Weak),
            1f64 => Ok(TypeEffectiveness::Normal),
            2f64 => Ok(TypeEffectiveness::Strong),
            _ => Err(E::invalid_value(unexpected, &TypeEffectivenessVisitor)),
        }
    }
}

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::exact(v as f64, de::Unexpected::Signed(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::exact(v as f64, de::Unexpected::Unsigned(v))
    }

    fn visit_f32<E>(self, v: f32) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::exact(v as f64, de::Unexpected::Float(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::exact(v, de::Unexpected::Float(v))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f32(TypeEffectivenessVisitor)
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type.
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// A type chart, which contains all type effectiveness information for types against other types.
///
/// The key here is the attacking type. Pairs missing from the chart have normal effectiveness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// The standard chart for all eighteen types.
    pub fn standard() -> Self {
        use TypeEffectiveness::{
            None as X,
            Strong as S,
            Weak as W,
        };
        use Type::*;

        let rows: [(Type, &[(Type, TypeEffectiveness)]); 18] = [
            (Normal, &[(Rock, W), (Ghost, X), (Steel, W)]),
            (
                Fire,
                &[
                    (Fire, W),
                    (Water, W),
                    (Grass, S),
                    (Ice, S),
                    (Bug, S),
                    (Rock, W),
                    (Dragon, W),
                    (Steel, S),
                ],
            ),
            (
                Water,
                &[
                    (Fire, S),
                    (Water, W),
                    (Grass, W),
                    (Ground, S),
                    (Rock, S),
                    (Dragon, W),
                ],
            ),
            (
                Electric,
                &[
                    (Water, S),
                    (Electric, W),
                    (Grass, W),
                    (Ground, X),
                    (Flying, S),
                    (Dragon, W),
                ],
            ),
            (
                Grass,
                &[
                    (Fire, W),
                    (Water, S),
                    (Grass, W),
                    (Poison, W),
                    (Ground, S),
                    (Flying, W),
                    (Bug, W),
                    (Rock, S),
                    (Dragon, W),
                    (Steel, W),
                ],
            ),
            (
                Ice,
                &[
                    (Fire, W),
                    (Water, W),
                    (Grass, S),
                    (Ice, W),
                    (Ground, S),
                    (Flying, S),
                    (Dragon, S),
                    (Steel, W),
                ],
            ),
            (
                Fighting,
                &[
                    (Normal, S),
                    (Ice, S),
                    (Poison, W),
                    (Flying, W),
                    (Psychic, W),
                    (Bug, W),
                    (Rock, S),
                    (Ghost, X),
                    (Dark, S),
                    (Steel, S),
                    (Fairy, W),
                ],
            ),
            (
                Poison,
                &[
                    (Grass, S),
                    (Poison, W),
                    (Ground, W),
                    (Rock, W),
                    (Ghost, W),
                    (Steel, X),
                    (Fairy, S),
                ],
            ),
            (
                Ground,
                &[
                    (Fire, S),
                    (Electric, S),
                    (Grass, W),
                    (Poison, S),
                    (Flying, X),
                    (Bug, W),
                    (Rock, S),
                    (Steel, S),
                ],
            ),
            (
                Flying,
                &[
                    (Electric, W),
                    (Grass, S),
                    (Fighting, S),
                    (Bug, S),
                    (Rock, W),
                    (Steel, W),
                ],
            ),
            (
                Psychic,
                &[
                    (Fighting, S),
                    (Poison, S),
                    (Psychic, W),
                    (Dark, X),
                    (Steel, W),
                ],
            ),
            (
                Bug,
                &[
                    (Fire, W),
                    (Grass, S),
                    (Fighting, W),
                    (Poison, W),
                    (Flying, W),
                    (Psychic, S),
                    (Ghost, W),
                    (Dark, S),
                    (Steel, W),
                    (Fairy, W),
                ],
            ),
            (
                Rock,
                &[
                    (Fire, S),
                    (Ice, S),
                    (Fighting, W),
                    (Ground, W),
                    (Flying, S),
                    (Bug, S),
                    (Steel, W),
                ],
            ),
            (Ghost, &[(Normal, X), (Psychic, S), (Ghost, S), (Dark, W)]),
            (Dragon, &[(Dragon, S), (Steel, W), (Fairy, X)]),
            (
                Dark,
                &[
                    (Fighting, W),
                    (Psychic, S),
                    (Ghost, S),
                    (Dark, W),
                    (Fairy, W),
                ],
            ),
            (
                Steel,
                &[
                    (Fire, W),
                    (Water, W),
                    (Electric, W),
                    (Ice, S),
                    (Rock, S),
                    (Steel, W),
                    (Fairy, S),
                ],
            ),
            (
                Fairy,
                &[
                    (Fire, W),
                    (Fighting, S),
                    (Poison, W),
                    (Dragon, S),
                    (Dark, S),
                    (Steel, W),
                ],
            ),
        ];

        Self::from_filled(
            rows.into_iter()
                .map(|(attack, row)| (attack, row.iter().copied().collect()))
                .collect(),
        )
    }

    /// The effectiveness multiplier of an attacking type against a single defending type.
    ///
    /// Never fails. Pairs missing from the chart return 1.
    pub fn effectiveness(&self, attack: Type, defend: Type) -> f32 {
        self.types
            .get(&attack)
            .and_then(|row| row.get(&defend))
            .copied()
            .map(f32::from)
            .unwrap_or(1f32)
    }

    /// The combined effectiveness multiplier of an attacking type against every defending type.
    ///
    /// Each lookup is independent, so the result is one of 0, 0.25, 0.5, 1, 2, or 4 for a
    /// defender with at most two types.
    pub fn effectiveness_against(&self, attack: Type, defending: &[Type]) -> f32 {
        defending
            .iter()
            .map(|defend| self.effectiveness(attack, *defend))
            .product()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::new()
    }
}
