//! Inventory objects and their variants.
//!
//! Every object shares the same state (id, danger level, stability); the
//! variant decides how hard analysis hits stability, what gets reported, and
//! whether the object carries the emergency cooldown capability. Variant
//! data is tabled in [`KindSpec`] rather than spread across types.

use serde::{Deserialize, Serialize};

use crate::cooldown::Coolable;
use crate::error::CollapseFault;
use crate::stability::Stability;

/// Per-variant constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSpec {
    pub name: &'static str,
    pub danger_level: u8,
    /// Stability lost on every analysis.
    pub analysis_cost: f64,
    /// Stability restored by an emergency cooldown; `None` if the variant
    /// cannot be cooled.
    pub cooldown_boost: Option<f64>,
    pub analyze_message: &'static str,
    pub cooldown_message: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ObjectKind {
    DataPacket = 0,
    DarkMatter = 1,
    AntiMatter = 2,
}

impl ObjectKind {
    pub fn spec(&self) -> KindSpec {
        match self {
            Self::DataPacket => KindSpec {
                name: "Data Packet",
                danger_level: 1,
                analysis_cost: 5.0,
                cooldown_boost: None,
                analyze_message: "Data contents read. All nominal.",
                cooldown_message: None,
            },
            Self::DarkMatter => KindSpec {
                name: "Dark Matter",
                danger_level: 5,
                analysis_cost: 15.0,
                cooldown_boost: Some(50.0),
                analyze_message: "Dark matter analysis... Energy is fluctuating!",
                cooldown_message: Some("Cooling successful. Stability restored."),
            },
            Self::AntiMatter => KindSpec {
                name: "Anti Matter",
                danger_level: 10,
                analysis_cost: 25.0,
                cooldown_boost: Some(50.0),
                analyze_message: "WARNING: The fabric of the universe is trembling...",
                cooldown_message: Some("Anti matter neutralized. Take a deep breath."),
            },
        }
    }

    pub fn all() -> &'static [ObjectKind] {
        &[Self::DataPacket, Self::DarkMatter, Self::AntiMatter]
    }

    /// Whether objects of this variant expose the cooldown capability.
    pub fn is_coolable(&self) -> bool {
        self.spec().cooldown_boost.is_some()
    }
}

/// One object held in the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryObject {
    id: String,
    kind: ObjectKind,
    stability: Stability,
}

impl InventoryObject {
    pub fn new(id: impl Into<String>, kind: ObjectKind) -> Self {
        let id = id.into();
        log::info!("Created {} '{}'", kind.spec().name, id);
        Self {
            id,
            kind,
            stability: Stability::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn danger_level(&self) -> u8 {
        self.kind.spec().danger_level
    }

    pub fn stability(&self) -> f64 {
        self.stability.get()
    }

    /// The single choke point for stability writes on an object.
    ///
    /// Clamps at 100; a write at or below zero leaves stability untouched and
    /// returns a [`CollapseFault`] carrying this object's id.
    pub fn set_stability(&mut self, value: f64) -> Result<f64, CollapseFault> {
        match self.stability.set(value) {
            Ok(stored) => {
                log::debug!("'{}' stability -> {:.2}", self.id, stored);
                Ok(stored)
            }
            Err(breach) => {
                log::info!(
                    "'{}' collapsed (attempted stability {:.2})",
                    self.id,
                    breach.attempted
                );
                Err(CollapseFault::new(self.id.clone(), breach.attempted))
            }
        }
    }

    /// Analyze the object: drain its variant's analysis cost from stability
    /// and return the variant's report line.
    pub fn analyze(&mut self) -> Result<String, CollapseFault> {
        let spec = self.kind.spec();
        self.set_stability(self.stability() - spec.analysis_cost)?;
        Ok(format!("[{}] {}", self.id, spec.analyze_message))
    }

    /// Borrow the cooldown capability, if this variant has one.
    pub fn coolable(&mut self) -> Option<Coolable<'_>> {
        Coolable::new(self)
    }

    pub fn status_text(&self) -> String {
        format!(
            "ID: {} | Stability: {:.2}% | Danger: {}",
            self.id,
            self.stability(),
            self.danger_level()
        )
    }
}
