use std::env;
use std::fs;
use std::path::Path;
use std::process;

use gridkey::cli::{check_previews, parse_args, Options, USAGE};
use gridkey::playback::{LogPlayer, PlaybackController};
use gridkey::{gallery_cards, Catalog, GridKeyError};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), GridKeyError> {
    let catalog = match &options.catalog {
        Some(path) => Catalog::from_yaml(&read_file(path)?)?,
        None => Catalog::builtin(),
    };
    debug!(motifs = catalog.len(), "catalog ready");

    let mut controller = PlaybackController::new(LogPlayer::new());
    if let Some(id) = &options.playing {
        let entry = catalog
            .get(id)
            .ok_or_else(|| GridKeyError::UnknownMotif(id.clone()))?;
        if entry.audio.is_none() {
            warn!(id = %id, "motif has no audio, nothing to play");
        }
        controller.request_play(entry.audio.as_ref());
        if let Some(playing) = controller
            .currently_playing()
            .and_then(|audio| catalog.find_by_audio(audio))
        {
            info!(id = %playing.id, "rendering as playing");
        }
    }

    let mut cards = gallery_cards(&catalog, controller.currently_playing());
    if let Some(dir) = &options.assets {
        check_previews(&catalog, &mut cards, Path::new(dir));
    }

    let rendered = if options.json {
        serde_json::to_string_pretty(&cards)
            .map_err(|e| GridKeyError::Serialization(e.to_string()))?
    } else {
        gridkey::to_html(&cards)
    };

    match &options.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|e| GridKeyError::Io {
                path: path.clone(),
                message: e.to_string(),
            })?;
            eprintln!("Wrote {} motifs to {}", cards.len(), path);
        }
        None => println!("{}", rendered),
    }

    controller.stop();
    Ok(())
}

fn read_file(path: &str) -> Result<String, GridKeyError> {
    fs::read_to_string(path).map_err(|e| GridKeyError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })
}
