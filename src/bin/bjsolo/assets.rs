//! Card image and sound asset catalogue.

use std::io::Write;
use std::path::{Path, PathBuf};

use bjsolo::{Card, FaceValue, Suit};
use thiserror::Error;

const CARD_BACK: &str = "images/cardback.gif";

/// A sound played at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Win,
    Lose,
}

impl Cue {
    const fn file(self) -> &'static str {
        match self {
            Self::Win => "audio/WinSound.wav",
            Self::Lose => "audio/LoseSound.wav",
        }
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset directory {} does not exist", .0.display())]
    MissingRoot(PathBuf),
    #[error("missing asset {}", .0.display())]
    Missing(PathBuf),
}

fn card_file(card: &Card) -> String {
    format!("images/{}{}.jpg", card.face.name(), card.suit.name())
}

/// Every file the table needs, relative to the asset root.
fn required_files() -> impl Iterator<Item = String> {
    let cards = Suit::ALL.into_iter().flat_map(|suit| {
        FaceValue::ALL
            .into_iter()
            .map(move |face| card_file(&Card::new(suit, face)))
    });

    cards.chain(
        [CARD_BACK, Cue::Win.file(), Cue::Lose.file()]
            .into_iter()
            .map(str::to_string),
    )
}

/// Resolved asset paths. Every path existed when the catalogue was loaded.
#[derive(Debug, Clone)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    /// Checks that every asset is present under `root`.
    pub fn load(root: &Path) -> Result<Self, AssetError> {
        if !root.is_dir() {
            return Err(AssetError::MissingRoot(root.to_path_buf()));
        }

        for file in required_files() {
            let path = root.join(&file);
            if !path.is_file() {
                return Err(AssetError::Missing(path));
            }
        }

        tracing::debug!(root = %root.display(), "assets loaded");
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn card_image(&self, card: &Card) -> PathBuf {
        self.root.join(card_file(card))
    }

    pub fn card_back(&self) -> PathBuf {
        self.root.join(CARD_BACK)
    }

    pub fn sound(&self, cue: Cue) -> PathBuf {
        self.root.join(cue.file())
    }
}

/// Plays a cue. The terminal has no mixer, so the bell stands in for the clip.
pub fn play(assets: Option<&Assets>, cue: Cue) {
    if let Some(assets) = assets {
        tracing::debug!(?cue, path = %assets.sound(cue).display(), "playing cue");
    }
    print!("\u{7}");
    let _ = std::io::stdout().flush();
}
