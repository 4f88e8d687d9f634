//! Emergency cooldown capability.
//!
//! Only variants whose spec declares a cooldown boost hand out a
//! [`Coolable`]; holding one is the proof that the capability check passed.

use crate::error::CollapseFault;
use crate::object::InventoryObject;

/// Mutable handle to an object that supports emergency cooldown.
#[derive(Debug)]
pub struct Coolable<'a> {
    object: &'a mut InventoryObject,
    boost: f64,
    message: &'static str,
}

impl<'a> Coolable<'a> {
    pub(crate) fn new(object: &'a mut InventoryObject) -> Option<Self> {
        let spec = object.kind().spec();
        let boost = spec.cooldown_boost?;
        let message = spec.cooldown_message?;
        Some(Self {
            object,
            boost,
            message,
        })
    }

    pub fn id(&self) -> &str {
        self.object.id()
    }

    /// Restore the variant's boost to stability (clamped at 100) and return
    /// the variant's confirmation line.
    ///
    /// Starting from a valid stability the write only increases the value,
    /// so in practice this never collapses; the fault is still propagated
    /// because the write goes through the same setter as everything else.
    pub fn emergency_cooldown(self) -> Result<String, CollapseFault> {
        let current = self.object.stability();
        self.object.set_stability(current + self.boost)?;
        Ok(format!("[{}] {}", self.object.id(), self.message))
    }
}

#[cfg(test)]
mod tests {
    use crate::object::{InventoryObject, ObjectKind};

    #[test]
    fn test_data_packet_has_no_capability() {
        let mut obj = InventoryObject::new("P-1", ObjectKind::DataPacket);
        assert!(obj.coolable().is_none());
    }

    #[test]
    fn test_cooldown_restores_fifty() {
        let mut obj = InventoryObject::new("A-1", ObjectKind::AntiMatter);
        obj.set_stability(30.0).unwrap();
        let msg = obj.coolable().unwrap().emergency_cooldown().unwrap();
        assert_eq!(obj.stability(), 80.0);
        assert_eq!(msg, "[A-1] Anti matter neutralized. Take a deep breath.");
    }

    #[test]
    fn test_cooldown_clamps_at_max() {
        let mut obj = InventoryObject::new("D-1", ObjectKind::DarkMatter);
        obj.set_stability(90.0).unwrap();
        let msg = obj.coolable().unwrap().emergency_cooldown().unwrap();
        assert_eq!(obj.stability(), 100.0);
        assert_eq!(msg, "[D-1] Cooling successful. Stability restored.");
    }

    #[test]
    fn test_cooldown_at_full_stays_full() {
        let mut obj = InventoryObject::new("D-2", ObjectKind::DarkMatter);
        let handle = obj.coolable().unwrap();
        assert_eq!(handle.id(), "D-2");
        handle.emergency_cooldown().unwrap();
        assert_eq!(obj.stability(), 100.0);
    }
}
