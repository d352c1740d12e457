//! Fixed table of downloadable artifacts.
//!
//! Built once from the configured root directory before the listener starts,
//! then shared read-only by every request.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

const ZIP: &str = "application/zip";
const JAR: &str = "application/java-archive";

/// A file on disk plus the headers it is served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub download_name: String,
    pub content_type: &'static str,
}

/// Platform keys accepted by the `os` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacIntel,
    MacArm,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Windows,
        Platform::MacIntel,
        Platform::MacArm,
        Platform::Linux,
    ];

    /// Parse an `os` value. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "windows" => Some(Self::Windows),
            "mac_intel" => Some(Self::MacIntel),
            "mac_arm" => Some(Self::MacArm),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacIntel => "mac_intel",
            Self::MacArm => "mac_arm",
            Self::Linux => "linux",
        }
    }

    /// Suffix used in the jar file names.
    fn file_suffix(&self) -> &'static str {
        match self {
            Self::Windows => "win",
            other => other.key(),
        }
    }
}

/// Products served per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    /// Screaming Frog SEO Spider
    SeoSpider,
    /// Screaming Frog Log File Analyser
    LogFileAnalyser,
}

impl Product {
    pub const ALL: [Product; 2] = [Product::SeoSpider, Product::LogFileAnalyser];

    pub fn route(&self) -> &'static str {
        match self {
            Self::SeoSpider => "/download-sfss",
            Self::LogFileAnalyser => "/download-sfla",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            Self::SeoSpider => "ScreamingFrogSEOSpider",
            Self::LogFileAnalyser => "ScreamingFrogLogFileAnalyser",
        }
    }
}

/// Browser bundles served without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserBuild {
    Windows,
    Linux,
    Mac,
}

impl BrowserBuild {
    pub const ALL: [BrowserBuild; 3] = [
        BrowserBuild::Windows,
        BrowserBuild::Linux,
        BrowserBuild::Mac,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            Self::Windows => "/download",
            Self::Linux => "/download_linux",
            Self::Mac => "/download_mac",
        }
    }

    /// (file on disk, name the client saves it as)
    fn files(&self) -> (&'static str, &'static str) {
        match self {
            Self::Windows => ("browser.zip", "browser.zip"),
            Self::Linux => ("browser_linux.zip", "browser.zip"),
            Self::Mac => ("browser_mac.tar.xz", "browser.tar.xz"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArtifactCatalog {
    root: PathBuf,
    browsers: HashMap<BrowserBuild, Artifact>,
    products: HashMap<(Product, Platform), Artifact>,
}

impl ArtifactCatalog {
    /// Build the full table with every file resolved against `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();

        let browsers = BrowserBuild::ALL
            .iter()
            .map(|&build| {
                let (file, download_name) = build.files();
                let artifact = Artifact {
                    path: root.join(file),
                    download_name: download_name.to_string(),
                    content_type: ZIP,
                };
                (build, artifact)
            })
            .collect();

        let mut products = HashMap::new();
        for product in Product::ALL {
            for platform in Platform::ALL {
                let file = format!("{}_{}.jar", product.file_stem(), platform.file_suffix());
                let artifact = Artifact {
                    path: root.join(&file),
                    download_name: file,
                    content_type: JAR,
                };
                products.insert((product, platform), artifact);
            }
        }

        Self {
            root,
            browsers,
            products,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn browser(&self, build: BrowserBuild) -> Option<&Artifact> {
        self.browsers.get(&build)
    }

    /// Look up a product artifact by raw `os` key.
    /// `None` means the key is not a known platform.
    pub fn product(&self, product: Product, os: &str) -> Option<&Artifact> {
        let platform = Platform::from_key(os)?;
        self.products.get(&(product, platform))
    }
}
