use std::fmt;

use bitflags::bitflags;
use spicerush_common::Orientation;

bitflags! {
    /// Set of orientations the host may currently rotate into.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OrientationMask: u8 {
        const PORTRAIT = 1 << 0;
        const PORTRAIT_UPSIDE_DOWN = 1 << 1;
        const LANDSCAPE_LEFT = 1 << 2;
        const LANDSCAPE_RIGHT = 1 << 3;

        const LANDSCAPE = Self::LANDSCAPE_LEFT.bits() | Self::LANDSCAPE_RIGHT.bits();
        const ALL_BUT_UPSIDE_DOWN = Self::PORTRAIT.bits() | Self::LANDSCAPE.bits();
        const ALL = Self::ALL_BUT_UPSIDE_DOWN.bits() | Self::PORTRAIT_UPSIDE_DOWN.bits();
    }
}

impl OrientationMask {
    pub fn allows(self, orientation: Orientation) -> bool {
        self.contains(Self::from(orientation))
    }

    pub fn allows_portrait(self) -> bool {
        self.intersects(Self::PORTRAIT | Self::PORTRAIT_UPSIDE_DOWN)
    }

    pub fn allows_landscape(self) -> bool {
        self.intersects(Self::LANDSCAPE)
    }

    /// Individual orientations in the set, in declaration order.
    pub fn orientations(self) -> Vec<Orientation> {
        Orientation::ALL
            .into_iter()
            .filter(|o| self.allows(*o))
            .collect()
    }
}

impl From<Orientation> for OrientationMask {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self::PORTRAIT,
            Orientation::PortraitUpsideDown => Self::PORTRAIT_UPSIDE_DOWN,
            Orientation::LandscapeLeft => Self::LANDSCAPE_LEFT,
            Orientation::LandscapeRight => Self::LANDSCAPE_RIGHT,
        }
    }
}

impl FromIterator<Orientation> for OrientationMask {
    fn from_iter<I: IntoIterator<Item = Orientation>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |mask, o| mask | Self::from(o))
    }
}

impl<'a> FromIterator<&'a Orientation> for OrientationMask {
    fn from_iter<I: IntoIterator<Item = &'a Orientation>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl fmt::Display for OrientationMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            return f.write_str("all");
        }
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.orientations().into_iter().map(Orientation::name).collect();
        f.write_str(&names.join("|"))
    }
}
