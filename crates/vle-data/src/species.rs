//! Chemical species of the ammonia/water system.

/// Chemical species with a canonical fluid name for dataset metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Ammonia (NH₃)
    Ammonia,
    /// Water (H₂O)
    H2O,
}

impl Species {
    /// Fluid name written into the dataset `about.names` header.
    pub fn fluid_name(&self) -> &'static str {
        match self {
            Species::Ammonia => "Ammonia",
            Species::H2O => "Water",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.fluid_name())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NH3" | "AMMONIA" => Ok(Species::Ammonia),
            "H2O" | "WATER" => Ok(Species::H2O),
            _ => Err("unknown species"),
        }
    }
}

/// Replace recognised formulas or spellings by the canonical fluid name.
///
/// Names of other components are kept as written.
pub fn canonical_name(name: &str) -> String {
    match name.parse::<Species>() {
        Ok(species) => species.fluid_name().to_string(),
        Err(_) => name.to_string(),
    }
}
