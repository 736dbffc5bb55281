//! Named frame-set presets.
//!
//! Each preset is an ordered list of glyph strings that the redraw loop
//! cycles through to produce one animation style. Presets are pure data:
//! they carry no behavior and are freely shared between spinners.

/// The classic ten-glyph braille spinner and the default frame set.
pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const DOTS2: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub const DOTS3: &[&str] = &["⠋", "⠙", "⠚", "⠞", "⠖", "⠦", "⠴", "⠲", "⠳", "⠓"];

pub const DOTS4: &[&str] = &["⠄", "⠆", "⠇", "⠋", "⠙", "⠸", "⠰", "⠠", "⠰", "⠸", "⠙", "⠋", "⠇", "⠆"];

pub const DOTS5: &[&str] = &[
    "⠋", "⠙", "⠚", "⠒", "⠂", "⠂", "⠒", "⠲", "⠴", "⠦", "⠖", "⠒", "⠐", "⠐", "⠒", "⠓", "⠋",
];

pub const DOTS6: &[&str] = &[
    "⠁", "⠉", "⠙", "⠚", "⠒", "⠂", "⠂", "⠒", "⠲", "⠴", "⠤", "⠄", "⠄", "⠤", "⠴", "⠲", "⠒", "⠂", "⠂",
    "⠒", "⠚", "⠙", "⠉", "⠁",
];

pub const DOTS7: &[&str] = &[
    "⠈", "⠉", "⠋", "⠓", "⠒", "⠐", "⠐", "⠒", "⠖", "⠦", "⠤", "⠠", "⠠", "⠤", "⠦", "⠖", "⠒", "⠐", "⠐",
    "⠒", "⠓", "⠋", "⠉", "⠈",
];

pub const DOTS8: &[&str] = &[
    "⠁", "⠁", "⠉", "⠙", "⠚", "⠒", "⠂", "⠂", "⠒", "⠲", "⠴", "⠤", "⠄", "⠄", "⠤", "⠠", "⠠", "⠤", "⠦",
    "⠖", "⠒", "⠐", "⠐", "⠒", "⠓", "⠋", "⠉", "⠈", "⠈",
];

pub const DOTS9: &[&str] = &["⢹", "⢺", "⢼", "⣸", "⣇", "⡧", "⡗", "⡏"];

pub const DOTS10: &[&str] = &["⢄", "⢂", "⢁", "⡁", "⡈", "⡐", "⡠"];

pub const DOTS11: &[&str] = &["⠁", "⠂", "⠄", "⡀", "⢀", "⠠", "⠐", "⠈"];

pub const DOTS12: &[&str] = &[
    "⢀⠀", "⡀⠀", "⠄⠀", "⢂⠀", "⡂⠀", "⠅⠀", "⢃⠀", "⡃⠀", "⠍⠀", "⢋⠀", "⡋⠀", "⠍⠁", "⢋⠁", "⡋⠁", "⠍⠉", "⠋⠉",
    "⠋⠉", "⠉⠙", "⠉⠙", "⠉⠩", "⠈⢙", "⠈⡙", "⢈⠩", "⡀⢙", "⠄⡙", "⢂⠩", "⡂⢘", "⠅⡘", "⢃⠨", "⡃⢐", "⠍⡐", "⢋⠠",
    "⡋⢀", "⠍⡁", "⢋⠁", "⡋⠁", "⠍⠉", "⠋⠉", "⠋⠉", "⠉⠙", "⠉⠙", "⠉⠩", "⠈⢙", "⠈⡙", "⠈⠩", "⠀⢙", "⠀⡙", "⠀⠩",
    "⠀⢘", "⠀⡘", "⠀⠨", "⠀⢐", "⠀⡐", "⠀⠠", "⠀⢀", "⠀⡀",
];

/// Plain ASCII sweep for terminals without Unicode glyphs.
pub const LINE: &[&str] = &["-", "\\", "|", "/"];

pub const PIPE: &[&str] = &["┤", "┘", "┴", "└", "├", "┌", "┬", "┐"];

pub const SIMPLE_DOTS: &[&str] = &[".  ", ".. ", "...", "   "];

pub const SIMPLE_DOTS_SCROLLING: &[&str] = &[".  ", ".. ", "...", " ..", "  .", "   "];

pub const STAR: &[&str] = &["✶", "✸", "✹", "✺", "✹", "✷"];

pub const FLIP: &[&str] = &["_", "_", "_", "-", "`", "`", "'", "´", "-", "_", "_", "_"];

pub const HAMBURGER: &[&str] = &["☱", "☲", "☴"];

pub const GROW_VERTICAL: &[&str] = &["▁", "▃", "▄", "▅", "▆", "▇", "▆", "▅", "▄", "▃"];

pub const GROW_HORIZONTAL: &[&str] = &["▏", "▎", "▍", "▌", "▋", "▊", "▉", "▊", "▋", "▌", "▍", "▎"];

pub const BALLOON: &[&str] = &[" ", ".", "o", "O", "@", "*", " "];

pub const NOISE: &[&str] = &["▓", "▒", "░"];

pub const BOUNCE: &[&str] = &["⠁", "⠂", "⠄", "⠂"];

pub const BOX_BOUNCE: &[&str] = &["▖", "▘", "▝", "▗"];

pub const BOX_BOUNCE2: &[&str] = &["▌", "▀", "▐", "▄"];

pub const TRIANGLE: &[&str] = &["◢", "◣", "◤", "◥"];

pub const ARC: &[&str] = &["◜", "◠", "◝", "◞", "◡", "◟"];

pub const CIRCLE: &[&str] = &["◡", "⊙", "◠"];

pub const SQUARE_CORNERS: &[&str] = &["◰", "◳", "◲", "◱"];

pub const CIRCLE_QUARTERS: &[&str] = &["◴", "◷", "◶", "◵"];

pub const CIRCLE_HALVES: &[&str] = &["◐", "◓", "◑", "◒"];

// The emoji presets render two columns wide on most terminals.
pub const MOON: &[&str] = &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"];

pub const SMILEY: &[&str] = &["😄 ", "😝 "];

pub const MONKEY: &[&str] = &["🙈 ", "🙈 ", "🙉 ", "🙊 "];

pub const HEARTS: &[&str] = &["💛 ", "💙 ", "💜 ", "💚 ", "❤️ "];

pub const CLOCK: &[&str] = &[
    "🕛 ", "🕐 ", "🕑 ", "🕒 ", "🕓 ", "🕔 ", "🕕 ", "🕖 ", "🕗 ", "🕘 ", "🕙 ", "🕚 ",
];

pub const EARTH: &[&str] = &["🌍 ", "🌎 ", "🌏 "];

/// Ninety-two step bar sweep in the Material Design style.
pub const MATERIAL: &[&str] = &[
    "█▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁", "██▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁", "███▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁", "████▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "██████▁▁▁▁▁▁▁▁▁▁▁▁▁▁", "██████▁▁▁▁▁▁▁▁▁▁▁▁▁▁", "███████▁▁▁▁▁▁▁▁▁▁▁▁▁", "████████▁▁▁▁▁▁▁▁▁▁▁▁",
    "█████████▁▁▁▁▁▁▁▁▁▁▁", "█████████▁▁▁▁▁▁▁▁▁▁▁", "██████████▁▁▁▁▁▁▁▁▁▁", "███████████▁▁▁▁▁▁▁▁▁",
    "█████████████▁▁▁▁▁▁▁", "██████████████▁▁▁▁▁▁", "██████████████▁▁▁▁▁▁", "▁██████████████▁▁▁▁▁",
    "▁██████████████▁▁▁▁▁", "▁██████████████▁▁▁▁▁", "▁▁██████████████▁▁▁▁", "▁▁▁██████████████▁▁▁",
    "▁▁▁▁█████████████▁▁▁", "▁▁▁▁██████████████▁▁", "▁▁▁▁██████████████▁▁", "▁▁▁▁▁██████████████▁",
    "▁▁▁▁▁██████████████▁", "▁▁▁▁▁██████████████▁", "▁▁▁▁▁▁██████████████", "▁▁▁▁▁▁██████████████",
    "▁▁▁▁▁▁▁█████████████", "▁▁▁▁▁▁▁█████████████", "▁▁▁▁▁▁▁▁████████████", "▁▁▁▁▁▁▁▁████████████",
    "▁▁▁▁▁▁▁▁▁███████████", "▁▁▁▁▁▁▁▁▁███████████", "▁▁▁▁▁▁▁▁▁▁██████████", "▁▁▁▁▁▁▁▁▁▁██████████",
    "▁▁▁▁▁▁▁▁▁▁▁▁████████", "▁▁▁▁▁▁▁▁▁▁▁▁▁███████", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁██████", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█████", "█▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████", "██▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁███", "██▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁███",
    "███▁▁▁▁▁▁▁▁▁▁▁▁▁▁███", "████▁▁▁▁▁▁▁▁▁▁▁▁▁▁██", "█████▁▁▁▁▁▁▁▁▁▁▁▁▁▁█", "█████▁▁▁▁▁▁▁▁▁▁▁▁▁▁█",
    "██████▁▁▁▁▁▁▁▁▁▁▁▁▁█", "████████▁▁▁▁▁▁▁▁▁▁▁▁", "█████████▁▁▁▁▁▁▁▁▁▁▁", "█████████▁▁▁▁▁▁▁▁▁▁▁",
    "█████████▁▁▁▁▁▁▁▁▁▁▁", "█████████▁▁▁▁▁▁▁▁▁▁▁", "███████████▁▁▁▁▁▁▁▁▁", "████████████▁▁▁▁▁▁▁▁",
    "████████████▁▁▁▁▁▁▁▁", "██████████████▁▁▁▁▁▁", "██████████████▁▁▁▁▁▁", "▁██████████████▁▁▁▁▁",
    "▁██████████████▁▁▁▁▁", "▁▁▁█████████████▁▁▁▁", "▁▁▁▁▁████████████▁▁▁", "▁▁▁▁▁████████████▁▁▁",
    "▁▁▁▁▁▁███████████▁▁▁", "▁▁▁▁▁▁▁▁█████████▁▁▁", "▁▁▁▁▁▁▁▁█████████▁▁▁", "▁▁▁▁▁▁▁▁▁█████████▁▁",
    "▁▁▁▁▁▁▁▁▁█████████▁▁", "▁▁▁▁▁▁▁▁▁▁█████████▁", "▁▁▁▁▁▁▁▁▁▁▁████████▁", "▁▁▁▁▁▁▁▁▁▁▁████████▁",
    "▁▁▁▁▁▁▁▁▁▁▁▁███████▁", "▁▁▁▁▁▁▁▁▁▁▁▁███████▁", "▁▁▁▁▁▁▁▁▁▁▁▁▁███████", "▁▁▁▁▁▁▁▁▁▁▁▁▁███████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█████", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁███", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁███", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁██", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁██",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁██", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁", "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
];

/// Every preset paired with the name the lookup functions match on.
pub const PRESETS: &[(&str, &[&str])] = &[
    ("dots", DOTS),
    ("dots2", DOTS2),
    ("dots3", DOTS3),
    ("dots4", DOTS4),
    ("dots5", DOTS5),
    ("dots6", DOTS6),
    ("dots7", DOTS7),
    ("dots8", DOTS8),
    ("dots9", DOTS9),
    ("dots10", DOTS10),
    ("dots11", DOTS11),
    ("dots12", DOTS12),
    ("line", LINE),
    ("pipe", PIPE),
    ("simple-dots", SIMPLE_DOTS),
    ("simple-dots-scrolling", SIMPLE_DOTS_SCROLLING),
    ("star", STAR),
    ("flip", FLIP),
    ("hamburger", HAMBURGER),
    ("grow-vertical", GROW_VERTICAL),
    ("grow-horizontal", GROW_HORIZONTAL),
    ("balloon", BALLOON),
    ("noise", NOISE),
    ("bounce", BOUNCE),
    ("box-bounce", BOX_BOUNCE),
    ("box-bounce2", BOX_BOUNCE2),
    ("triangle", TRIANGLE),
    ("arc", ARC),
    ("circle", CIRCLE),
    ("square-corners", SQUARE_CORNERS),
    ("circle-quarters", CIRCLE_QUARTERS),
    ("circle-halves", CIRCLE_HALVES),
    ("moon", MOON),
    ("smiley", SMILEY),
    ("monkey", MONKEY),
    ("hearts", HEARTS),
    ("clock", CLOCK),
    ("earth", EARTH),
    ("material", MATERIAL),
];

/// Looks up a preset by name. Matching ignores case and treats underscores
/// as hyphens, so `"Simple_Dots"` finds `simple-dots`.
pub fn by_name(name: &str) -> Option<&'static [&'static str]> {
    let needle = name.trim().to_ascii_lowercase().replace('_', "-");
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == needle)
        .map(|(_, set)| *set)
}

/// Iterates over the preset names in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn default_set_is_ten_braille_glyphs() {
        assert_eq!(DOTS.len(), 10);
        for frame in DOTS {
            assert_eq!(frame.width(), 1);
            assert!(frame.chars().all(|c| ('\u{2800}'..='\u{28FF}').contains(&c)));
        }
    }

    #[test]
    fn every_preset_has_at_least_one_frame() {
        for (name, set) in PRESETS {
            assert!(!set.is_empty(), "preset {name} has no frames");
        }
    }

    #[test]
    fn preset_names_are_unique() {
        let mut names: Vec<&str> = names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PRESETS.len());
    }

    #[test]
    fn lookup_normalizes_case_and_separators() {
        assert_eq!(by_name("dots"), Some(DOTS));
        assert_eq!(by_name("DOTS12"), Some(DOTS12));
        assert_eq!(by_name("Simple-Dots"), Some(SIMPLE_DOTS));
        assert_eq!(by_name("simple_dots_scrolling"), Some(SIMPLE_DOTS_SCROLLING));
        assert_eq!(by_name(" line "), Some(LINE));
        assert_eq!(by_name("no-such-preset"), None);
    }

    #[test]
    fn frames_within_a_preset_share_one_display_width() {
        // Mixed widths would make the animation wobble at the cursor column.
        for name in ["dots", "dots12", "line", "pipe", "material", "moon", "clock"] {
            let set = by_name(name).unwrap();
            let width = set[0].width();
            for frame in set {
                assert_eq!(frame.width(), width, "preset {name}, frame {frame:?}");
            }
        }
    }
}
