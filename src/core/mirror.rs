// Recursive fetcher: walks a directory listing depth-first and mirrors it to disk

use crate::core::links;
use crate::core::transport::{Page, Transport};
use crate::error::Result;
use crate::ui::progress;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

/// What happened when a single URL was visited.
#[derive(Debug)]
pub enum NodeOutcome {
    /// HTML listing; `children` follow the anchor order of the page.
    Directory {
        url: Url,
        path: PathBuf,
        created: bool,
        children: Vec<NodeOutcome>,
    },
    /// Non-HTML body written to `path`.
    File { url: Url, path: PathBuf, bytes: usize },
    /// The GET failed; nothing below this URL was visited.
    NetworkError { url: Url, message: String },
    /// Creating a folder or writing the file failed.
    WriteError {
        url: Url,
        path: PathBuf,
        message: String,
    },
}

impl NodeOutcome {
    pub fn url(&self) -> &Url {
        match self {
            NodeOutcome::Directory { url, .. }
            | NodeOutcome::File { url, .. }
            | NodeOutcome::NetworkError { url, .. }
            | NodeOutcome::WriteError { url, .. } => url,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            NodeOutcome::NetworkError { .. } | NodeOutcome::WriteError { .. }
        )
    }

    /// Child outcomes of a directory node; empty for every other kind.
    pub fn children(&self) -> &[NodeOutcome] {
        match self {
            NodeOutcome::Directory { children, .. } => children,
            _ => &[],
        }
    }

    /// Every visited URL, depth-first in visiting order.
    pub fn visited_urls(&self) -> Vec<&Url> {
        let mut urls = vec![self.url()];
        for child in self.children() {
            urls.extend(child.visited_urls());
        }
        urls
    }

    pub fn summary(&self) -> MirrorSummary {
        let mut summary = MirrorSummary::default();
        summary.add(self);
        summary
    }
}

/// Totals over an outcome tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MirrorSummary {
    pub folders: usize,
    pub files: usize,
    pub bytes: u64,
    pub network_errors: usize,
    pub write_errors: usize,
}

impl MirrorSummary {
    fn add(&mut self, outcome: &NodeOutcome) {
        match outcome {
            NodeOutcome::Directory { children, .. } => {
                self.folders += 1;
                for child in children {
                    self.add(child);
                }
            }
            NodeOutcome::File { bytes, .. } => {
                self.files += 1;
                self.bytes += *bytes as u64;
            }
            NodeOutcome::NetworkError { .. } => self.network_errors += 1,
            NodeOutcome::WriteError { .. } => self.write_errors += 1,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.network_errors + self.write_errors > 0
    }
}

/// Mirrors remote listings through a [`Transport`].
pub struct Mirror<T: Transport> {
    transport: T,
}

impl<T: Transport> Mirror<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `url` and mirror it at `local_path`.
    ///
    /// Network and filesystem failures are reported through the returned
    /// outcome and never abort siblings or the parent. `Err` is only returned
    /// for an href that cannot be resolved against its page, which ends the run.
    pub fn fetch(&self, url: &Url, local_path: &Path) -> Result<NodeOutcome> {
        progress::visiting(url.as_str());

        let page = match self.transport.get(url) {
            Ok(page) => page,
            Err(e) => {
                progress::network_error(url.as_str(), &e);
                return Ok(NodeOutcome::NetworkError {
                    url: url.clone(),
                    message: e.to_string(),
                });
            }
        };

        if page.is_html() {
            self.expand_directory(url, local_path, &page)
        } else {
            Ok(save_file(url, local_path, &page))
        }
    }

    fn expand_directory(&self, url: &Url, local_path: &Path, page: &Page) -> Result<NodeOutcome> {
        // The folder must exist before the listing is parsed
        let created = match ensure_dir(local_path) {
            Ok(created) => created,
            Err(e) => {
                progress::write_error(local_path, &e);
                return Ok(NodeOutcome::WriteError {
                    url: url.clone(),
                    path: local_path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };
        if created {
            progress::folder_created(local_path);
        }

        let hrefs = links::followable_links(&page.text())?;
        log::debug!("{} links to follow under {}", hrefs.len(), url);

        let mut children = Vec::with_capacity(hrefs.len());
        for href in hrefs {
            let child_url = links::child_url(url, &href)?;
            let child_path = links::child_path(local_path, &href);
            children.push(self.fetch(&child_url, &child_path)?);
        }

        Ok(NodeOutcome::Directory {
            url: url.clone(),
            path: local_path.to_path_buf(),
            created,
            children,
        })
    }
}

fn save_file(url: &Url, local_path: &Path, page: &Page) -> NodeOutcome {
    let write_error = |e: io::Error| {
        progress::write_error(local_path, &e);
        NodeOutcome::WriteError {
            url: url.clone(),
            path: local_path.to_path_buf(),
            message: e.to_string(),
        }
    };

    if let Some(parent) = local_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        match ensure_dir(parent) {
            Ok(true) => progress::parent_created(parent),
            Ok(false) => {}
            Err(e) => return write_error(e),
        }
    }

    progress::file_downloaded(local_path, page.body.len());
    if let Err(e) = fs::write(local_path, &page.body) {
        return write_error(e);
    }

    NodeOutcome::File {
        url: url.clone(),
        path: local_path.to_path_buf(),
        bytes: page.body.len(),
    }
}

/// Create `path` (and its parents) unless it is already a directory.
/// Returns whether anything was created.
fn ensure_dir(path: &Path) -> io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path)?;
    Ok(true)
}
