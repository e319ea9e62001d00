//! Package descriptor and go-import metadata rendering.

use askama::Template;

use crate::redirect::{IMPORT_DOMAIN, REMOTE_REPO_BASE};

/// Fills out the go-import metadata document served to package tooling.
///
/// Both fields are derived from the one path suffix the descriptor was
/// constructed with; the remote keeps the full suffix even for multi-segment
/// sub-packages.
#[derive(Debug, Template)]
#[template(path = "go_import.html")]
pub struct PackageDescriptor {
    /// Fully-qualified import path of the requested package.
    pub package: String,

    /// Remote repository containing the package.
    pub remote: String,
}

impl PackageDescriptor {
    /// Build a descriptor from a request path with its leading `/` stripped.
    pub fn new(suffix: &str) -> Self {
        Self {
            package: format!("{IMPORT_DOMAIN}/{suffix}"),
            remote: format!("{REMOTE_REPO_BASE}/{suffix}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_share_the_suffix() {
        let descriptor = PackageDescriptor::new("foo/cmd/bar");

        assert_eq!(descriptor.package, "go.lattice.dev/foo/cmd/bar");
        assert_eq!(
            descriptor.remote,
            "https://github.com/lattice-systems/foo/cmd/bar"
        );
    }

    #[test]
    fn test_render_contains_meta_tag() {
        let html = PackageDescriptor::new("foo").render().unwrap();

        assert!(html.contains(
            "<meta name=\"go-import\" content=\"go.lattice.dev/foo git https://github.com/lattice-systems/foo\"/>"
        ));
    }

    #[test]
    fn test_render_escapes_attribute_values() {
        let html = PackageDescriptor::new("foo\"><script>").render().unwrap();

        assert!(!html.contains("\"><script>"));
        assert!(html.contains("&quot;"));
    }
}
