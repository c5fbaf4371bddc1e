//! Static icon configuration
//!
//! The ordered registry of tab-bar icons, each pairing a name with a glyph
//! shape and two state colors (normal / active).

use crate::canvas::Canvas;
use crate::shapes;

/// Default tab-bar icon color (#7A7E83)
pub const NORMAL_COLOR: (u8, u8, u8) = (122, 126, 131);

/// Selected tab-bar icon color (#0f3460)
pub const ACTIVE_COLOR: (u8, u8, u8) = (15, 52, 96);

/// Glyph shape for an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconShape {
    /// House with a triangular roof and a door
    Home,
    /// Game controller with side buttons
    Simulation,
    /// Framed trend chart with data points
    Replay,
    /// Book with page lines and a spine
    Knowledge,
    /// Person: head circle over a body rectangle
    Profile,
}

impl IconShape {
    /// Draw this glyph onto the canvas in opaque white
    pub fn draw(&self, canvas: &mut Canvas, size: u32, margin: u32) {
        match self {
            IconShape::Home => shapes::home(canvas, size, margin),
            IconShape::Simulation => shapes::simulation(canvas, size, margin),
            IconShape::Replay => shapes::replay(canvas, size, margin),
            IconShape::Knowledge => shapes::knowledge(canvas, size, margin),
            IconShape::Profile => shapes::profile(canvas, size, margin),
        }
    }
}

/// Icon state variant, selecting color and file-name suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    Normal,
    Active,
}

impl IconVariant {
    /// File-name suffix appended to the icon name
    pub fn suffix(&self) -> &'static str {
        match self {
            IconVariant::Normal => "",
            IconVariant::Active => "-active",
        }
    }

    /// Backdrop color for this variant of the given descriptor
    pub fn color(&self, descriptor: &IconDescriptor) -> (u8, u8, u8) {
        match self {
            IconVariant::Normal => descriptor.normal_color,
            IconVariant::Active => descriptor.active_color,
        }
    }
}

/// Static record pairing an icon name with its glyph and state colors
#[derive(Debug, Clone, Copy)]
pub struct IconDescriptor {
    pub name: &'static str,
    pub shape: IconShape,
    pub normal_color: (u8, u8, u8),
    pub active_color: (u8, u8, u8),
}

impl IconDescriptor {
    /// Output file name for the given variant, e.g. `home.png` / `home-active.png`
    pub fn file_name(&self, variant: IconVariant) -> String {
        format!("{}{}.png", self.name, variant.suffix())
    }
}

/// The ordered tab-bar icon registry
pub const ICONS: [IconDescriptor; 5] = [
    IconDescriptor {
        name: "home",
        shape: IconShape::Home,
        normal_color: NORMAL_COLOR,
        active_color: ACTIVE_COLOR,
    },
    IconDescriptor {
        name: "simulation",
        shape: IconShape::Simulation,
        normal_color: NORMAL_COLOR,
        active_color: ACTIVE_COLOR,
    },
    IconDescriptor {
        name: "replay",
        shape: IconShape::Replay,
        normal_color: NORMAL_COLOR,
        active_color: ACTIVE_COLOR,
    },
    IconDescriptor {
        name: "knowledge",
        shape: IconShape::Knowledge,
        normal_color: NORMAL_COLOR,
        active_color: ACTIVE_COLOR,
    },
    IconDescriptor {
        name: "profile",
        shape: IconShape::Profile,
        normal_color: NORMAL_COLOR,
        active_color: ACTIVE_COLOR,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_five_unique_names_in_order() {
        let names: Vec<&str> = ICONS.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec!["home", "simulation", "replay", "knowledge", "profile"]
        );
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                assert_ne!(names[i], names[j]);
            }
        }
    }

    #[test]
    fn test_registry_colors() {
        for descriptor in &ICONS {
            assert_eq!(descriptor.normal_color, (122, 126, 131));
            assert_eq!(descriptor.active_color, (15, 52, 96));
        }
    }

    #[test]
    fn test_variant_suffix_and_color() {
        let descriptor = &ICONS[0];
        assert_eq!(IconVariant::Normal.suffix(), "");
        assert_eq!(IconVariant::Active.suffix(), "-active");
        assert_eq!(IconVariant::Normal.color(descriptor), NORMAL_COLOR);
        assert_eq!(IconVariant::Active.color(descriptor), ACTIVE_COLOR);
    }

    #[test]
    fn test_file_names() {
        let descriptor = &ICONS[2];
        assert_eq!(descriptor.file_name(IconVariant::Normal), "replay.png");
        assert_eq!(
            descriptor.file_name(IconVariant::Active),
            "replay-active.png"
        );
    }
}
