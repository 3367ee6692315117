use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const WATCHED_EXTENSIONS: &[&str] = &["html", "js", "css"];

fn main() {
    // The built-in seed catalog is compiled in via include_str!.
    println!("cargo:rerun-if-changed=data/activities.json");
    watch_static_assets(Path::new("static"));

    // Logged at startup so a stale binary is easy to spot.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITIES_BUILD_ID={}", build_id);
}

/// Registers every landing-page asset below `dir`, recursing into subfolders.
fn watch_static_assets(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            watch_static_assets(&path);
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| WATCHED_EXTENSIONS.contains(&ext))
        {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
