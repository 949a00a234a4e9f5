use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::core::Canvas;
use crate::foundation::error::{LyumenError, LyumenResult};
use crate::pattern::selection::PatternSelection;
use crate::playback::{DEFAULT_STEP, PlaybackState};
use crate::render::backend::RenderSettings;
use crate::scene::info::{InfoPoint, InfoPointSet, PercentPos};

/// Film strip shown by the projector.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FilmConfig {
    /// One caption per frame.
    pub frames: Vec<String>,
    /// Scrub step per wheel notch.
    pub step: f64,
}

impl Default for FilmConfig {
    fn default() -> Self {
        Self {
            frames: [
                "Une foule d'ouvriers sortant des usines Lumière",
                "Un jardinier arrosé par son propre tuyau",
                "Le repas d'un bébé avec ses parents",
                "L'arrivée d'un train en gare",
            ]
            .map(String::from)
            .to_vec(),
            step: DEFAULT_STEP,
        }
    }
}

/// Installation configuration loaded from JSON. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LyumenConfig {
    /// Pattern surface size.
    pub canvas: Canvas,
    /// Frames per second of the headless loop.
    pub fps: u32,
    /// Backdrop the surface is cleared to; `null` keeps it transparent.
    pub clear_rgba: Option<[u8; 4]>,
    /// Initial pattern selection.
    pub selection: PatternSelection,
    /// Film strip.
    pub film: FilmConfig,
    /// Info points of the Roman city map.
    pub info_points: Vec<InfoPoint>,
}

impl Default for LyumenConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fps: 60,
            clear_rgba: RenderSettings::default().clear_rgba,
            selection: PatternSelection::default(),
            film: FilmConfig::default(),
            info_points: default_info_points(),
        }
    }
}

fn default_info_points() -> Vec<InfoPoint> {
    [
        (
            1,
            "Autel des Trois Gaules",
            "L'Autel des Trois Gaules, érigé en 12 av. J.-C., était le centre religieux et politique de la Gaule romaine.",
            -20.0,
            30.0,
        ),
        (
            2,
            "Théâtre antique",
            "Construit au Ier siècle, le Théâtre antique pouvait accueillir jusqu'à 10 000 spectateurs.",
            25.0,
            40.0,
        ),
        (
            3,
            "Temple de Cybèle",
            "Ce sanctuaire dédié à Cybèle, la grande déesse mère, témoigne de l'importance des cultes orientaux à Lugdunum.",
            10.0,
            65.0,
        ),
    ]
    .into_iter()
    .map(|(id, title, description, x, y)| InfoPoint {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        position: PercentPos { x, y },
    })
    .collect()
}

impl LyumenConfig {
    /// Parse and validate a config from JSON.
    pub fn from_reader(r: impl Read) -> LyumenResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| LyumenError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a config file.
    pub fn from_path(path: &Path) -> LyumenResult<Self> {
        let f = File::open(path).map_err(|e| {
            LyumenError::Other(anyhow::anyhow!("open config '{}': {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_reader(BufReader::new(f))
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> LyumenResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?.as_u16()?;
        if self.fps == 0 || self.fps > 240 {
            return Err(LyumenError::validation(format!(
                "fps must be in 1..=240, got {}",
                self.fps
            )));
        }
        self.playback()?;
        self.info_point_set()?;
        Ok(())
    }

    /// Surface settings derived from the config.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            clear_rgba: self.clear_rgba,
        }
    }

    /// Fresh playback state over the configured film strip.
    pub fn playback(&self) -> LyumenResult<PlaybackState> {
        PlaybackState::new(self.film.frames.clone(), self.film.step)
    }

    /// Info point set with nothing active.
    pub fn info_point_set(&self) -> LyumenResult<InfoPointSet> {
        InfoPointSet::new(self.info_points.clone())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
