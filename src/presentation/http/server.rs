//! Blocking HTTP server
//!
//! One thread, one request at a time. Every response is built fresh from
//! disk and marked uncacheable so the polling client always sees new logs.

use std::io::Cursor;

use tiny_http::{Header, Method, Response, Server, StatusCode};

use super::router::{route, Route};
use crate::application::LogBrowser;
use crate::domain::ports::{FileSystem, FsError};
use crate::error::{LogviewError, LogviewResult};
use crate::presentation::html::{render_page, SidebarRenderer};

const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

const NO_CACHE_HEADERS: [(&str, &str); 3] = [
    ("Cache-Control", "no-store, no-cache, must-revalidate, max-age=0"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
];

/// A response before it is handed to `tiny_http`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: HTML,
            body,
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: TEXT,
            body: body.to_string(),
        }
    }

    fn into_tiny(self) -> Response<Cursor<Vec<u8>>> {
        let headers = std::iter::once(("Content-Type", self.content_type))
            .chain(NO_CACHE_HEADERS)
            .filter_map(|(name, value)| Header::from_bytes(name, value).ok())
            .collect();
        let body = self.body.into_bytes();
        let length = body.len();
        Response::new(
            StatusCode(self.status),
            headers,
            Cursor::new(body),
            Some(length),
            None,
        )
    }
}

/// Bind a listening socket on `address` (`host:port`).
pub fn bind(address: &str) -> LogviewResult<Server> {
    Server::http(address).map_err(|e| LogviewError::Server {
        message: format!("failed to bind {address}: {e}"),
    })
}

/// Serves one log root over HTTP.
pub struct LogServer<FS>
where
    FS: FileSystem,
{
    browser: LogBrowser<FS>,
    sidebar: SidebarRenderer,
}

impl<FS> LogServer<FS>
where
    FS: FileSystem,
{
    pub fn new(browser: LogBrowser<FS>, sidebar: SidebarRenderer) -> Self {
        Self { browser, sidebar }
    }

    pub fn browser(&self) -> &LogBrowser<FS> {
        &self.browser
    }

    /// Build the response for one request.
    pub fn handle(&self, method: &Method, url: &str) -> HttpResponse {
        if !matches!(method, Method::Get | Method::Head) {
            return HttpResponse::text(405, "Method Not Allowed");
        }

        match route(url, |path| self.browser.is_directory(path)) {
            Route::Sidebar => HttpResponse::html(self.render_sidebar()),
            Route::FileContent(path) => match self.browser.file_content(&path) {
                Ok(html) => HttpResponse::html(html),
                Err(err) => error_response(&path, &err),
            },
            Route::Static(asset) => HttpResponse {
                status: 200,
                content_type: asset.content_type(),
                body: asset.body().to_string(),
            },
            Route::Page => HttpResponse::html(render_page(&self.render_sidebar())),
            Route::NotFound => HttpResponse::text(404, "Not Found"),
        }
    }

    /// Answer requests until the server is unblocked.
    pub fn serve(&self, server: &Server) {
        for request in server.incoming_requests() {
            let response = self.handle(request.method(), request.url());
            log::debug!("{} {} -> {}", request.method(), request.url(), response.status);
            if let Err(err) = request.respond(response.into_tiny()) {
                log::warn!("failed to send response: {err}");
            }
        }
        log::info!("server stopped");
    }

    fn render_sidebar(&self) -> String {
        self.sidebar.render(&self.browser.tree())
    }
}

fn error_response(path: &str, err: &LogviewError) -> HttpResponse {
    match err {
        LogviewError::PathEscape { .. } => {
            log::warn!("rejected path outside log root: {path}");
            HttpResponse::text(403, "Forbidden")
        }
        LogviewError::NotAFile { .. } | LogviewError::Fs(FsError::NotFound(_)) => {
            HttpResponse::text(404, "File not found")
        }
        other => {
            log::warn!("error reading {path}: {other}");
            HttpResponse::text(500, "Error reading file")
        }
    }
}
