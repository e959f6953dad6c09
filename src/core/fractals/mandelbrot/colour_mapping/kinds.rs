use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    Ultra,
    Fire,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::Ultra, Self::Fire];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ultra => "Ultra",
            Self::Fire => "Fire",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for MandelbrotColourMapKinds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown palette '{s}'"))
    }
}
