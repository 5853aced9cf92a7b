use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets"  // trunk serve mounts the asset dir at the root
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "assets"  // relative, so the page also works from a subpath
}

pub fn asset_url(name: &str) -> String {
    format!("{}/{}", get_asset_base(), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_base_and_name() {
        let url = asset_url("rocket.png");
        assert!(url.ends_with("assets/rocket.png"));
        assert!(!url.contains("//"));
    }
}
