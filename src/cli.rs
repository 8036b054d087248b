//! Command-line options and the preview check used by the `gridkey` binary.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::catalog::Catalog;
use crate::gallery::CardView;

pub const USAGE: &str =
    "Usage: gridkey [--catalog <file.yaml>] [--assets <dir>] [--playing <id>] [--json] [output]";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub catalog: Option<String>,
    pub assets: Option<String>,
    pub playing: Option<String>,
    pub json: bool,
    pub output: Option<String>,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => options.catalog = Some(flag_value(&mut iter, arg)?),
            "--assets" => options.assets = Some(flag_value(&mut iter, arg)?),
            "--playing" => options.playing = Some(flag_value(&mut iter, arg)?),
            "--json" => options.json = true,
            "-h" | "--help" => return Err("Render the GridKey motif gallery".to_string()),
            flag if flag.starts_with("--") => return Err(format!("Unknown option '{}'", flag)),
            path => {
                if options.output.is_some() {
                    return Err(format!("Unexpected argument '{}'", path));
                }
                options.output = Some(path.to_string());
            }
        }
    }

    Ok(options)
}

fn flag_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<String, String> {
    iter.next()
        .cloned()
        .ok_or_else(|| format!("Missing value for {}", flag))
}

/// Fall back to the placeholder for every card whose image is not on disk
/// under `root`. Cards are matched to entries by position.
pub fn check_previews(catalog: &Catalog, cards: &mut [CardView], root: &Path) {
    for (entry, card) in catalog.iter().zip(cards.iter_mut()) {
        let Some(image) = &entry.image else {
            continue;
        };
        let path = local_path(root, &image.locator, &image.file_name);
        if !path.is_file() {
            warn!(id = %entry.id, path = %path.display(), "preview image missing");
            card.mark_image_failed();
        }
    }
}

/// Map a locator back to a file under `root`: the locator's directory part
/// joined with the unencoded filename.
pub fn local_path(root: &Path, locator: &str, file_name: &str) -> PathBuf {
    let base = locator
        .trim_start_matches('/')
        .rsplit_once('/')
        .map(|(base, _)| base)
        .unwrap_or("");
    root.join(base).join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{gallery_cards, Preview};
    use std::fs;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let options = parse_args(&args(&[
            "--catalog", "c.yaml", "--assets", "site", "--playing", "GK-CM-STEP", "--json",
            "out.json",
        ]))
        .unwrap();
        assert_eq!(
            options,
            Options {
                catalog: Some("c.yaml".to_string()),
                assets: Some("site".to_string()),
                playing: Some("GK-CM-STEP".to_string()),
                json: true,
                output: Some("out.json".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse_args(&[]).unwrap(), Options::default());
    }

    #[test]
    fn test_parse_missing_flag_value() {
        assert_eq!(
            parse_args(&args(&["--playing"])).unwrap_err(),
            "Missing value for --playing"
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse_args(&args(&["--loop"])).unwrap_err(),
            "Unknown option '--loop'"
        );
    }

    #[test]
    fn test_parse_second_positional() {
        assert_eq!(
            parse_args(&args(&["a.html", "b.html"])).unwrap_err(),
            "Unexpected argument 'b.html'"
        );
    }

    #[test]
    fn test_local_path_empty_base() {
        let path = local_path(Path::new("site"), "/x%20y.png", "x y.png");
        assert_eq!(path, Path::new("site").join("x y.png"));
    }

    #[test]
    fn test_local_path_nested_base() {
        let path = local_path(Path::new("site"), "/static/img/CM%20FREE.png", "CM FREE.png");
        assert_eq!(path, Path::new("site").join("static").join("img").join("CM FREE.png"));
    }

    #[test]
    fn test_check_previews_only_missing_images() {
        let root = std::env::temp_dir().join(format!("gridkey-previews-{}", std::process::id()));
        fs::create_dir_all(root.join("images")).unwrap();
        fs::write(root.join("images").join("CM FREE.png"), b"png").unwrap();

        let catalog = Catalog::builtin();
        let mut cards = gallery_cards(&catalog, None);
        check_previews(&catalog, &mut cards, &root);
        fs::remove_dir_all(&root).unwrap();

        assert_eq!(
            cards[0].preview,
            Preview::Image("/images/CM%20FREE.png".to_string())
        );
        let placeholders = cards
            .iter()
            .filter(|c| c.preview == Preview::Placeholder)
            .count();
        assert_eq!(placeholders, catalog.len() - 1);
    }
}
