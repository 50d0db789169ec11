use std::fs;
use std::path::Path;
use std::time::Instant;

use mux_manifest::{
    compile_manifest, parse_json_manifest, parse_manifest, CompileOutcome, Diagnostic,
    ParsedManifest,
};

pub struct LoadedManifest {
    pub outcome: CompileOutcome,
    /// Parse and compile diagnostics, in line order.
    pub diagnostics: Vec<Diagnostic>,
    pub total_ms: f64,
}

pub fn read_manifest(path: &Path) -> Result<ParsedManifest, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        parse_json_manifest(&text)
            .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))
    } else {
        Ok(parse_manifest(&text))
    }
}

pub fn load_manifest(path: &Path) -> Result<LoadedManifest, String> {
    let start = Instant::now();
    let parsed = read_manifest(path)?;
    let outcome = compile_manifest(&parsed.entries);

    let mut diagnostics = parsed.diagnostics;
    diagnostics.extend(outcome.diagnostics.iter().cloned());
    diagnostics.sort_by_key(|d| d.line);

    log::debug!("loaded '{}' with {} routes", path.display(), outcome.stats.routes);

    Ok(LoadedManifest {
        outcome,
        diagnostics,
        total_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}
