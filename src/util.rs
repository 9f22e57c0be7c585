use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `value` as pretty JSON, creating parent directories as needed.
pub fn write_serialized<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Parse a `#RRGGBB` color.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_party_colors() {
        assert_eq!(parse_hex_color("#66BEE6"), Some((0x66, 0xbe, 0xe6)));
        assert_eq!(parse_hex_color("#c40000"), Some((0xc4, 0, 0)));
    }

    #[test]
    fn rejects_malformed_colors() {
        for color in ["66BEE6", "#66BEE", "#66BEE6F", "#GGGGGG", "red", ""] {
            assert_eq!(parse_hex_color(color), None, "{}", color);
        }
    }

    #[test]
    fn writes_pretty_json() {
        let dir = std::env::temp_dir().join(format!("seat-margin-util-{}", std::process::id()));
        let path = dir.join("nested").join("value.json");
        write_serialized(&path, &vec![1, 2, 3]).unwrap();

        let written: Vec<u32> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, [1, 2, 3]);
        fs::remove_dir_all(&dir).unwrap();
    }
}
