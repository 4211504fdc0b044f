use std::collections::HashSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum SignId {
    Forward,
    Backward,
    Right,
    Left,
    Brake,
    Turn,
    Jump,
    Crouch,
    #[strum(serialize = "Turn x2")]
    TurnTwice,
    #[strum(serialize = "Turn x3")]
    TurnThrice,
}

/// Opaque icon reference; the ui module decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowUp,
    ArrowDown,
    ArrowRight,
    ArrowLeft,
    Stop,
    Turn,
    Jump,
    Crouch,
    TurnX2,
    TurnX3,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn toggle(self) -> Self {
        match self {
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Normal,
        }
    }
}

/// A prompt and the key tokens that answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sign {
    pub id: SignId,
    pub accepted_keys: &'static [&'static str],
    pub label: &'static str,
    pub icon: Icon,
}

impl Sign {
    pub const fn new(
        id: SignId,
        accepted_keys: &'static [&'static str],
        label: &'static str,
        icon: Icon,
    ) -> Self {
        Self {
            id,
            accepted_keys,
            label,
            icon,
        }
    }

    /// Key tokens are case sensitive: "w" and "W" are separate bindings.
    pub fn accepts(&self, key: &str) -> bool {
        self.accepted_keys.contains(&key)
    }
}

pub const BASE_SIGNS: [Sign; 6] = [
    Sign::new(
        SignId::Forward,
        &["ArrowUp", "w", "W"],
        "Forward (↑)",
        Icon::ArrowUp,
    ),
    Sign::new(
        SignId::Backward,
        &["ArrowDown", "s", "S"],
        "Backward (↓)",
        Icon::ArrowDown,
    ),
    Sign::new(
        SignId::Right,
        &["ArrowRight", "d", "D"],
        "Right (→)",
        Icon::ArrowRight,
    ),
    Sign::new(
        SignId::Left,
        &["ArrowLeft", "a", "A"],
        "Left (←)",
        Icon::ArrowLeft,
    ),
    Sign::new(SignId::Brake, &[" ", "f", "F"], "Brake (Space)", Icon::Stop),
    Sign::new(SignId::Turn, &["g", "G", "r", "R"], "Turn (G)", Icon::Turn),
];

pub const EXTRA_HARD_SIGNS: [Sign; 4] = [
    Sign::new(SignId::Jump, &["j", "J"], "Jump (J)", Icon::Jump),
    Sign::new(SignId::Crouch, &["c", "C"], "Crouch (C)", Icon::Crouch),
    Sign::new(SignId::TurnTwice, &["2"], "Turn x2 (2)", Icon::TurnX2),
    Sign::new(SignId::TurnThrice, &["3"], "Turn x3 (3)", Icon::TurnX3),
];

/// Ordered set of signs for one difficulty.
///
/// Construction guarantees at least two members with distinct ids, so
/// "pick any sign except the last one" always has an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    signs: Vec<Sign>,
}

impl Pool {
    pub fn new(difficulty: Difficulty, signs: Vec<Sign>) -> Result<Self, CatalogError> {
        if signs.len() < 2 {
            return Err(CatalogError::PoolTooSmall {
                difficulty,
                len: signs.len(),
            });
        }

        let mut seen = HashSet::new();
        for sign in &signs {
            if !seen.insert(sign.id) {
                return Err(CatalogError::DuplicateSign {
                    difficulty,
                    id: sign.id,
                });
            }
        }

        Ok(Self { signs })
    }

    pub fn signs(&self) -> &[Sign] {
        &self.signs
    }

    // never empty: construction rejects fewer than two signs
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn get(&self, idx: usize) -> Option<&Sign> {
        self.signs.get(idx)
    }

    pub fn position(&self, id: SignId) -> Option<usize> {
        self.signs.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: SignId) -> bool {
        self.position(id).is_some()
    }

    /// Whether any sign in the pool is bound to `key`.
    pub fn recognizes(&self, key: &str) -> bool {
        self.signs.iter().any(|s| s.accepts(key))
    }
}

/// Sign pools keyed by difficulty. Hard is Normal plus extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    normal: Pool,
    hard: Pool,
}

impl Catalog {
    pub fn new(normal: Vec<Sign>, hard: Vec<Sign>) -> Result<Self, CatalogError> {
        let normal = Pool::new(Difficulty::Normal, normal)?;
        let hard = Pool::new(Difficulty::Hard, hard)?;

        if let Some(missing) = normal.signs().iter().find(|s| !hard.contains(s.id)) {
            return Err(CatalogError::NotAdditive { id: missing.id });
        }

        Ok(Self { normal, hard })
    }

    pub fn standard() -> Result<Self, CatalogError> {
        let normal = BASE_SIGNS.to_vec();
        let hard = BASE_SIGNS
            .iter()
            .chain(EXTRA_HARD_SIGNS.iter())
            .cloned()
            .collect();
        Self::new(normal, hard)
    }

    pub fn pool(&self, difficulty: Difficulty) -> &Pool {
        match difficulty {
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
        }
    }
}
