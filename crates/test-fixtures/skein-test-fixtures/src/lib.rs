//! Shared JSON fixtures for skein crates' tests.
//!
//! Fixture files live under the workspace-root `fixtures/` directory and are
//! addressed by the short names listed in `fixtures/manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    animations: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

pub mod animations {
    use super::*;

    /// Short names of every registered animation fixture.
    pub fn keys() -> Vec<String> {
        MANIFEST.animations.keys().cloned().collect()
    }

    /// Raw JSON text of the named animation fixture.
    pub fn json(name: &str) -> Result<String> {
        let rel = MANIFEST
            .animations
            .get(name)
            .ok_or_else(|| anyhow!("unknown animation fixture '{name}'"))?;
        read_to_string(rel)
    }
}
