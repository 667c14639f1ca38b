// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Synthetic site fixture, removed from disk when dropped
#[allow(dead_code)] // Used in integration tests
pub struct TestSite {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestSite {
    /// A small site: home page, nested pages, declared and sibling icons
    #[allow(dead_code)] // Used in integration tests
    pub fn sample() -> Self {
        Self::with_files(&[
            (
                "index.html",
                "<html><head><title>Acme</title></head>\
                 <!-- snippet Welcome to Acme --></html>",
            ),
            ("favicon.ico", "ico"),
            (
                "about.html",
                "<html><head><title>About Us</title>\
                 <link rel=\"icon\" href=\"/brand.svg\"></head>\
                 <!-- snippet Our story --></html>",
            ),
            (
                "blog/first-post.html",
                "<title>First Post</title><!--snippet Hello <world> & friends -->",
            ),
            ("blog/favicon.png", "png"),
            ("docs/guide/setup.html", "<h1>Setup</h1>"),
            (
                "docs/guide/usage.html",
                "<title>Usage</title><link rel='icon' href='../img/docs.svg'>",
            ),
            ("404.html", "<title>Not Found</title>"),
            ("assets/readme.txt", "not a page"),
        ])
    }

    /// A generated site with `count` pages spread over a few directories
    #[allow(dead_code)] // Used in integration tests
    pub fn generated(count: usize) -> Self {
        let site = Self::with_files(&[("index.html", "<title>Start</title>")]);
        for i in 0..count {
            site.write(
                &format!("section_{}/page_{:04}.html", i % 5, i),
                &format!("<title>Page {i}</title><!-- snippet Generated page number {i} -->"),
            );
        }
        site
    }

    /// Create a site with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create directories");
            }
            std::fs::write(&full_path, content).expect("Failed to write file");
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Add or replace a file inside the site
    #[allow(dead_code)] // Used in integration tests
    pub fn write(&self, path: &str, content: impl AsRef<[u8]>) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(full_path, content).expect("Failed to write file");
    }

    /// Get path to the site root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
