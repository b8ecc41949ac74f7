#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrapKind {
    Spike,
    Poison,
    Arrow,
    Fire,
}

/// A single-use trap. Armed until triggered, inert afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trap {
    pub kind: TrapKind,
    pub damage: u32,
    pub triggered: bool,
}

impl Trap {
    pub fn new(kind: TrapKind, damage: u32) -> Self {
        Self {
            kind,
            damage,
            triggered: false,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        !self.triggered
    }

    /// Fires the trap: yields its damage the first time, 0 ever after.
    pub fn trigger(&mut self) -> u32 {
        if self.triggered {
            return 0;
        }
        self.triggered = true;
        self.damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trap_yields_damage_exactly_once() {
        let mut trap = Trap::new(TrapKind::Spike, 12);
        assert!(trap.is_armed());

        assert_eq!(trap.trigger(), 12);
        assert!(!trap.is_armed());
        assert_eq!(trap.trigger(), 0);
        assert_eq!(trap.trigger(), 0);
    }
}
