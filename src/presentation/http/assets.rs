//! Static files compiled into the binary

use super::router::StaticAsset;

const SCRIPT: &str = include_str!("../../../assets/script.js");
const STYLESHEET: &str = include_str!("../../../assets/style.css");

impl StaticAsset {
    pub fn body(self) -> &'static str {
        match self {
            StaticAsset::Script => SCRIPT,
            StaticAsset::Stylesheet => STYLESHEET,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            StaticAsset::Script => "application/javascript; charset=utf-8",
            StaticAsset::Stylesheet => "text/css; charset=utf-8",
        }
    }
}
