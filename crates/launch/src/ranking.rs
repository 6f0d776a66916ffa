//! Name-based executable ranking.
//!
//! The executor reports every `.exe` it finds under the install
//! directory, utilities included. These heuristics filter out binaries
//! that are clearly not the game and order the rest so the selector's
//! "recommended" first slot is worth trusting. Name-only on purpose:
//! size-based scoring needs filesystem metadata the core does not have.

/// Substrings marking utility executables that should never be offered
/// for launch: uninstallers, installers, redistributables, anti-cheat
/// services.
const UTILITY_MARKERS: &[&str] = &[
    "unins",
    "setup",
    "installer",
    "updater",
    "redist",
    "vcredist",
    "directx",
    "dotnet",
    "_be",
    "eac",
    "crashreport",
];

/// Returns `true` for executables that are support tooling rather than
/// the game itself.
pub fn is_utility_executable(name: &str) -> bool {
    let name = name.to_lowercase();
    UTILITY_MARKERS.iter().any(|m| name.contains(m))
}

/// Heuristic launch priority for an executable name. Higher is better.
///
/// Binaries matching the game title or common main-binary patterns score
/// high; launchers and handlers score low.
pub fn executable_priority(name: &str, game_name: &str) -> i32 {
    let name = name.to_lowercase();
    let game = game_name.to_lowercase();

    let mut priority = 0;

    // A word of the game title in the file name is the strongest signal.
    for word in game.split([' ', '-', '_', '\'']) {
        if word.len() > 2 && name.contains(word) {
            priority += 150;
            break;
        }
    }

    if name.contains("game") || name.contains("main") {
        priority += 100;
    }

    if name.contains("engine") || name.contains("client") || name.contains("app") {
        priority += 80;
    }

    if name.contains("handler") || name.contains("launcher") {
        priority -= 100;
    }

    priority
}

/// Filters utility executables out of `paths` and orders the remainder by
/// descending priority. The sort is stable, so the executor's own order
/// breaks ties.
pub fn rank_candidates(paths: Vec<String>, game_name: &str) -> Vec<String> {
    let mut ranked: Vec<(String, i32)> = paths
        .into_iter()
        .filter(|p| !is_utility_executable(&display_name(p)))
        .map(|p| {
            let priority = executable_priority(&display_name(&p), game_name);
            (p, priority)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().map(|(p, _)| p).collect()
}

/// Final path segment, for either separator style — candidate paths come
/// from a Windows-hosted executor but tests and tooling use `/`.
pub fn display_name(path: &str) -> String {
    path.rsplit(['\\', '/'])
        .next()
        .unwrap_or(path)
        .to_string()
}
