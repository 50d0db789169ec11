use log::{debug, warn};
use mux_core::Trie;

use crate::parser::{Diagnostic, DiagnosticKind, RouteEntry};

pub struct ManifestStats {
    pub entries: usize,
    pub routes: usize,
    pub rejected: usize,
}

pub struct CompileOutcome {
    pub trie: Trie<String>,
    pub stats: ManifestStats,
    pub diagnostics: Vec<Diagnostic>,
}

/// Append every entry to a fresh trie, keyed by handler name.
///
/// A rejected route becomes a diagnostic and compilation carries on, so one
/// bad line does not hide problems further down.
pub fn compile_manifest(entries: &[RouteEntry]) -> CompileOutcome {
    let mut trie = Trie::new();
    let mut diagnostics = Vec::new();

    for entry in entries {
        if let Err(err) = trie.append(&entry.path, entry.handler.clone()) {
            warn!("line {}: rejected `{}`: {}", entry.line, entry.path, err);
            diagnostics.push(Diagnostic {
                line: entry.line,
                path: Some(entry.path.clone()),
                kind: DiagnosticKind::Route(err),
            });
        }
    }

    let stats = ManifestStats {
        entries: entries.len(),
        routes: trie.len(),
        rejected: diagnostics.len(),
    };
    debug!(
        "compiled {} entries into {} routes ({} rejected)",
        stats.entries, stats.routes, stats.rejected
    );

    CompileOutcome {
        trie,
        stats,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_manifest;
    use mux_core::RouteError;

    #[test]
    fn test_compile_and_match() {
        let manifest = parse_manifest("/ home\n/users/:id users.show\n/static/:file* assets\n");
        let outcome = compile_manifest(&manifest.entries);

        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.stats.routes, 3);

        let m = outcome.trie.match_path("/static/css/site.css").unwrap().unwrap();
        assert_eq!(m.handler, "assets");
        assert_eq!(m.params.get("file"), Some("css/site.css"));
    }

    #[test]
    fn test_rejected_routes_carry_line_numbers() {
        let text = "\
/a/:x      first
/a/:y      conflict
/a/:x      duplicate
/b/:r*/c   not_last
/c         fine
";
        let outcome = compile_manifest(&parse_manifest(text).entries);

        assert_eq!(outcome.stats.entries, 5);
        assert_eq!(outcome.stats.routes, 2);
        assert_eq!(outcome.stats.rejected, 3);

        let lines: Vec<usize> = outcome.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![2, 3, 4]);

        assert!(matches!(
            outcome.diagnostics[0].kind,
            DiagnosticKind::Route(RouteError::ParamConflict { .. })
        ));
        assert!(matches!(
            outcome.diagnostics[1].kind,
            DiagnosticKind::Route(RouteError::DuplicateRoute { .. })
        ));
        assert!(matches!(
            outcome.diagnostics[2].kind,
            DiagnosticKind::Route(RouteError::CatchAllNotTerminal { .. })
        ));
        assert_eq!(
            outcome.diagnostics[0].to_string(),
            "line 2 (`/a/:y`): attempt to overwrite parameter `x` with `y`"
        );
    }
}
