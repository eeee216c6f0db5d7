//! Named glyphs and the extended-ASCII glyph table

pub const FULL_BLOCK: char = '█';
pub const SPACE: char = ' ';
pub const SHADE_LIGHT: char = '░';
pub const SHADE_MEDIUM: char = '▒';
pub const SHADE_DARK: char = '▓';
pub const UPPER_HALF_BLOCK: char = '▀';
pub const LOWER_HALF_BLOCK: char = '▄';

pub const BORDER_HORIZONTAL: char = '─';
pub const BORDER_VERTICAL: char = '│';
pub const CORNER_TOP_LEFT: char = '┌';
pub const CORNER_TOP_RIGHT: char = '┐';
pub const CORNER_BOTTOM_LEFT: char = '└';
pub const CORNER_BOTTOM_RIGHT: char = '┘';

pub const DOUBLE_HORIZONTAL: char = '═';
pub const DOUBLE_VERTICAL: char = '║';
pub const DOUBLE_TOP_LEFT: char = '╔';
pub const DOUBLE_TOP_RIGHT: char = '╗';
pub const DOUBLE_BOTTOM_LEFT: char = '╚';
pub const DOUBLE_BOTTOM_RIGHT: char = '╝';

/// Upper half (128-255) of the code page 437 style table
const EXTENDED: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', //
    'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', //
    'ÿ', 'Ö', 'Ü', 'ø', '£', 'Ø', '×', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', //
    '¿', 'Ⓡ', '¬', '½', '¼', '¡', '«', '»', //
    '░', '▒', '▓', '│', '┤', 'Á', 'Â', 'À', //
    'Ⓒ', '╣', '║', '╗', '╝', '¢', '¥', '┐', //
    '└', '┴', '┬', '├', '─', '┼', 'ã', 'Ã', //
    '╚', '╔', '╩', '╦', '╠', '═', '╬', '¤', //
    'ð', 'Ð', 'Ê', 'Ë', 'È', 'ı', 'Í', 'Î', //
    'Ï', '┘', '┌', '█', '▄', '¦', 'Ì', '▀', //
    'Ó', 'ß', 'Ô', 'Ò', 'õ', 'Õ', 'μ', 'þ', //
    'Þ', 'Ú', 'Û', 'Ù', 'ý', 'Ý', '¯', '´', //
    '≡', '±', '‗', '¾', '¶', '§', '÷', '¸', //
    '°', '¨', '·', '¹', '³', '²', '■', ' ', //
];

/// Look up a glyph by its extended-ASCII index.
///
/// Control codes (0-31) and DEL (127) have no visible glyph.
pub fn cp437(index: u8) -> Option<char> {
    match index {
        0..=31 | 127 => None,
        32..=126 => Some(index as char),
        128..=255 => Some(EXTENDED[(index - 128) as usize]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cp437_invisible() {
        assert_eq!(cp437(0), None);
        assert_eq!(cp437(31), None);
        assert_eq!(cp437(127), None);
    }

    #[test]
    fn test_cp437_ascii() {
        assert_eq!(cp437(b'A'), Some('A'));
        assert_eq!(cp437(b' '), Some(' '));
        assert_eq!(cp437(b'~'), Some('~'));
    }

    #[test]
    fn test_cp437_extended() {
        assert_eq!(cp437(128), Some('Ç'));
        assert_eq!(cp437(176), Some(SHADE_LIGHT));
        assert_eq!(cp437(219), Some(FULL_BLOCK));
        assert_eq!(cp437(205), Some(DOUBLE_HORIZONTAL));
        assert_eq!(cp437(255), Some(' '));
    }
}
