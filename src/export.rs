//! Share and save surfaces for a finished reading.
//!
//! Three renditions of the same [`FortuneResult`]: a three-line share blurb,
//! a structured JSON payload for piping into other tools, and the plain-text
//! card written to disk. All of them read the result as-is; nothing here
//! recomputes scores.

use anyhow::{anyhow, Result};
use chrono::Utc;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::card;
use crate::fortune::{FortuneResult, Scores, TARGET_YEAR};

/// Compact payload for machine consumers of a reading.
#[derive(Debug, Clone, Serialize)]
pub struct SharePayload<'a> {
    pub name: &'a str,
    pub tone: &'a str,
    pub scores: Scores,
    pub overall: u8,
    pub advice: &'a str,
}

pub fn share_payload(result: &FortuneResult) -> SharePayload<'_> {
    SharePayload {
        name: &result.name,
        tone: result.tone.key,
        scores: result.scores,
        overall: result.scores.overall(),
        advice: result.advice,
    }
}

/// Short text suitable for pasting into a chat.
pub fn share_text(result: &FortuneResult) -> String {
    format!(
        "{}'s {} fortune\nKeyword: {} · Overall {}/100\nAdvice: {}",
        result.name,
        TARGET_YEAR,
        result.tone.key,
        result.scores.overall(),
        result.advice
    )
}

/// The share payload as pretty JSON.
pub fn share_json(result: &FortuneResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&share_payload(result))?)
}

/// Full plain-text card, the clipboard-copy rendition and the format written
/// by [`save_card`].
pub fn full_text(result: &FortuneResult) -> String {
    card::render_plain(result)
}

/// Generate safe filename from a display name using URL encoding
pub fn safe_filename(name: &str) -> String {
    utf8_percent_encode(name, NON_ALPHANUMERIC).to_string()
}

/// Write the plain-text card and return the path. With no explicit `file` the
/// card lands at `<base_dir>/cards/<name>-<timestamp>.txt`.
pub fn save_card(result: &FortuneResult, file: Option<&Path>, base_dir: &str) -> Result<PathBuf> {
    let path = match file {
        Some(f) => {
            if let Some(parent) = f.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| {
                        anyhow!("Failed to create directory {}: {}", parent.display(), e)
                    })?;
                }
            }
            f.to_path_buf()
        }
        None => {
            let dir = Path::new(base_dir).join("cards");
            fs::create_dir_all(&dir).map_err(|e| {
                anyhow!("Failed to create card directory {}: {}", dir.display(), e)
            })?;
            let stamp = Utc::now().format("%Y%m%d-%H%M%S");
            dir.join(format!("{}-{}.txt", safe_filename(&result.name), stamp))
        }
    };

    fs::write(&path, full_text(result))
        .map_err(|e| anyhow!("Failed to write card {}: {}", path.display(), e))?;

    log::info!("Saved card to {}", path.display());
    Ok(path)
}
