//! Closed classification sets used by inventory items.
//!
//! Every set carries a fixed display label (what the input surface shows) and
//! a stable serde name. Parsing accepts either, case-insensitively.

use serde::{Deserialize, Serialize};

use stockbook_core::DomainError;

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $t:ident, $kind:literal {
            $($variant:ident => ($name:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $t {
            $(#[serde(rename = $name)] $variant),+
        }

        impl $t {
            /// Every member, in display order.
            pub const ALL: &'static [$t] = &[$($t::$variant),+];

            /// Human-facing label.
            pub fn label(self) -> &'static str {
                match self {
                    $($t::$variant => $label),+
                }
            }

            /// Stable machine name (matches the serde representation).
            pub fn name(self) -> &'static str {
                match self {
                    $($t::$variant => $name),+
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl core::str::FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $t::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.label().eq_ignore_ascii_case(wanted)
                            || v.name().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| DomainError::unknown($kind, s))
            }
        }
    };
}

closed_set! {
    /// Top-level item classification.
    Category, "category" {
        Electronics => ("electronics", "Elektronik"),
        Tableware => ("tableware", "Alat Makan"),
        Stationery => ("stationery", "Alat Tulis"),
        OtherNonElectronic => ("other_non_electronic", "Non Elektronik Lainnya"),
    }
}

closed_set! {
    /// Unit of measure for an item's quantity.
    Unit, "unit" {
        Pcs => ("pcs", "Pcs"),
        Set => ("set", "Set"),
        Box => ("box", "Box"),
        Buah => ("buah", "Buah"),
        Unit => ("unit", "Unit"),
        Lembar => ("lembar", "Lembar"),
        Pak => ("pak", "Pak"),
    }
}

closed_set! {
    /// Physical condition.
    Condition, "condition" {
        Good => ("good", "Baik"),
        LightlyDamaged => ("lightly_damaged", "Rusak Ringan"),
        HeavilyDamaged => ("heavily_damaged", "Rusak Berat"),
    }
}

closed_set! {
    /// Whether the item was found at the last check.
    Status, "status" {
        Present => ("present", "Ada"),
        Missing => ("missing", "Hilang"),
    }
}

impl Category {
    /// Subcategories permitted under this category.
    pub fn sub_categories(self) -> &'static [&'static str] {
        match self {
            Category::Electronics => &["Laptop", "Mouse", "Keyboard"],
            Category::Tableware => &["Sendok", "Garpu", "Gelas", "Piring"],
            Category::Stationery => &["Bolpoin", "Pensil", "Penghapus"],
            Category::OtherNonElectronic => &["Lainnya"],
        }
    }

    pub fn allows_sub_category(self, sub_category: &str) -> bool {
        self.sub_categories().contains(&sub_category)
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Pcs
    }
}

impl Condition {
    /// Anything short of `Good` counts as damaged.
    pub fn is_damaged(self) -> bool {
        !matches!(self, Condition::Good)
    }
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Good
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Present
    }
}
