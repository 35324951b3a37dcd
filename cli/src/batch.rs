//! Input discovery and output naming for batch conversion

use anyhow::{Context, Result};
use ascii_ramp::AsciiConfig;
use std::path::{Path, PathBuf};

/// File extensions picked up when scanning a directory
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Expand `inputs` into a list of image files
///
/// Files are kept as given. Directories are scanned one level deep for
/// files with an image extension, in name order.
pub fn discover(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = std::fs::read_dir(input)
                .with_context(|| format!("Failed to read directory {}", input.display()))?
                .filter_map(std::result::Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.is_file() && is_image(path))
                .collect();
            found.sort();
            log::info!("Found {} images in {}", found.len(), input.display());
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }

    Ok(files)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// `<stem><suffix>.txt`, or `<stem><suffix>_reversed.txt` for a reversed ramp
///
/// The file lands in `output_dir` when given, otherwise next to the input.
pub fn output_path(input: &Path, output_dir: Option<&Path>, suffix: &str, reversed: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let name = format!(
        "{}{}{}.txt",
        stem,
        suffix,
        if reversed { "_reversed" } else { "" }
    );

    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Configuration for the `<stem><suffix>.txt` file, or the `_reversed` one
///
/// Ramps are written densest glyph first. The plain file puts the lightest
/// glyph first, so black pixels come out blank and bright ones dense; the
/// `_reversed` file uses the ramp as written.
pub fn orientation_config(base: &AsciiConfig, reversed: bool) -> AsciiConfig {
    AsciiConfig {
        reverse_ramp: !reversed,
        ..base.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascii_ramp::{Grid, Preset, convert_colors};
    use std::fs;

    #[test]
    fn test_output_path_next_to_input() {
        let path = output_path(Path::new("pics/omori.png"), None, "_29", false);
        assert_eq!(path, PathBuf::from("pics/omori_29.txt"));
    }

    #[test]
    fn test_output_path_reversed_in_output_dir() {
        let path = output_path(Path::new("pics/ringo.png"), Some(Path::new("out")), "_58c", true);
        assert_eq!(path, PathBuf::from("out/ringo_58c_reversed.txt"));
    }

    #[test]
    fn test_discover_scans_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.PNG"), b"").unwrap();
        fs::write(dir.path().join("a.jpg"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let files = discover(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG"]);
    }

    #[test]
    fn test_discover_keeps_explicit_files() {
        let files = discover(&[PathBuf::from("missing.png")]).unwrap();
        assert_eq!(files, vec![PathBuf::from("missing.png")]);
    }

    #[test]
    fn test_black_pixel_per_output_file() {
        let base = AsciiConfig::from_preset(Preset::Density29);
        let colors = Grid::from_rows(vec![vec![0x000000, 0xffffff]]).unwrap();
        let input = Path::new("pics/omori.png");

        let plain = orientation_config(&base, false);
        assert_eq!(
            output_path(input, None, "_29", false),
            PathBuf::from("pics/omori_29.txt")
        );
        assert_eq!(convert_colors(&colors, &plain).unwrap().row(0), &[' ', 'Ñ']);

        let reversed = orientation_config(&base, true);
        assert_eq!(
            output_path(input, None, "_29", true),
            PathBuf::from("pics/omori_29_reversed.txt")
        );
        assert_eq!(convert_colors(&colors, &reversed).unwrap().row(0), &['Ñ', ' ']);
    }
}
