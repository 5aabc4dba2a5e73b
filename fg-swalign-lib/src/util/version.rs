#[allow(dead_code)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// The version shown by `--version`: the package version, then the short commit hash and a
/// `-dirty` marker when built from a git checkout.
pub fn version() -> String {
    let mut version = built_info::PKG_VERSION.to_string();
    if let Some(hash) = built_info::GIT_COMMIT_HASH {
        version.push('-');
        version.push_str(hash.get(..8).unwrap_or(hash));
    }
    if built_info::GIT_DIRTY == Some(true) {
        version.push_str("-dirty");
    }
    version
}
