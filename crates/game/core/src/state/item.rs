//! Loot lying in rooms and carried by the hero.

/// Item category; decides the effect applied when the hero picks it up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    HealthPotion,
    Weapon,
    Armor,
    Treasure,
}

/// Item quality. Anything but `Normal` is the curse's handiwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemQuality {
    #[default]
    Normal,
    Corrupted,
    Cursed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub kind: ItemKind,
    pub name: String,
    /// Effect magnitude. Negative once the item is cursed.
    pub value: i32,
    pub quality: ItemQuality,
    pub original_value: i32,
}

impl Item {
    pub fn new(kind: ItemKind, name: impl Into<String>, value: i32) -> Self {
        Self {
            kind,
            name: name.into(),
            value,
            quality: ItemQuality::Normal,
            original_value: value,
        }
    }

    pub fn with_quality(mut self, quality: ItemQuality) -> Self {
        self.quality = quality;
        self
    }

    #[inline]
    pub fn is_normal(&self) -> bool {
        self.quality == ItemQuality::Normal
    }

    /// Degrades the item one step: normal → corrupted (half value),
    /// corrupted → cursed (harmful value).
    ///
    /// Returns `false` if the item was already cursed.
    pub fn corrupt(&mut self) -> bool {
        match self.quality {
            ItemQuality::Normal => {
                self.quality = ItemQuality::Corrupted;
                self.value /= 2;
                true
            }
            ItemQuality::Corrupted => {
                self.quality = ItemQuality::Cursed;
                self.value = -self.value.abs();
                true
            }
            ItemQuality::Cursed => false,
        }
    }
}
