#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    TwoTone,
    PaletteCycle,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::TwoTone, Self::PaletteCycle];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TwoTone => "Two-tone",
            Self::PaletteCycle => "Palette cycle",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
