//! Request routing
//!
//! Maps a request URL to what should be served. Pure; the server does the I/O.

use url::Url;

/// Embedded static files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticAsset {
    Script,
    Stylesheet,
}

/// What a URL asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/get_sidebar`
    Sidebar,
    /// `/get_file_content?path=…`, path percent-decoded
    FileContent(String),
    /// `/static/…`
    Static(StaticAsset),
    /// The page shell
    Page,
    NotFound,
}

/// Route `raw_url` (path plus optional query, as sent by the client).
///
/// `is_dir` answers whether a root-relative path names a directory; such
/// paths serve the page shell like `/` does.
pub fn route<F>(raw_url: &str, is_dir: F) -> Route
where
    F: Fn(&str) -> bool,
{
    let Ok(url) = parse(raw_url) else {
        return Route::NotFound;
    };
    let path = url.path();

    if path.starts_with("/get_sidebar") {
        return Route::Sidebar;
    }

    if path.starts_with("/get_file_content") {
        let file = url
            .query_pairs()
            .find(|(key, _)| key == "path")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
        return Route::FileContent(file);
    }

    match path {
        "/static/script.js" => return Route::Static(StaticAsset::Script),
        "/static/style.css" => return Route::Static(StaticAsset::Stylesheet),
        "/" => return Route::Page,
        _ => {}
    }

    if path.starts_with("/view/") || path.ends_with(".txt") {
        return Route::Page;
    }

    if is_dir(path.trim_start_matches('/')) {
        return Route::Page;
    }

    Route::NotFound
}

fn parse(raw_url: &str) -> Result<Url, url::ParseError> {
    let base = Url::parse("http://localhost/")?;
    base.join(raw_url)
}
