//! Admin layout: static page metadata and the HTML document shell.

use crate::i18n::RequestConfig;
use crate::view::escape_html;
use serde::Serialize;

/// Head metadata for a group of pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ADMIN_METADATA: Metadata = Metadata {
    title: "Admin Panel",
    description: "Manage categories and products",
};

/// Admin layout body: children pass through unchanged.
pub fn admin_layout<C>(children: C) -> C {
    children
}

/// Wrap rendered body HTML in a full document with head metadata.
pub fn document(metadata: &Metadata, ctx: &RequestConfig, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
<html lang=\"{lang}\" dir=\"{dir}\">\
<head>\
<meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title}</title>\
<meta name=\"description\" content=\"{description}\">\
</head>\
<body>{body}</body>\
</html>",
        lang = ctx.locale.code(),
        dir = ctx.locale.direction().as_str(),
        title = escape_html(metadata.title),
        description = escape_html(metadata.description),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, MessageBundle};
    use crate::view::{Node, Section};

    #[test]
    fn test_admin_layout_is_identity() {
        assert_eq!(admin_layout(42), 42);
        assert_eq!(admin_layout("text"), "text");
        assert_eq!(admin_layout(vec![1, 2, 3]), vec![1, 2, 3]);

        let node = Node::Fragment(vec![Node::Tab(Section::Products), Node::Text("x".into())]);
        assert_eq!(admin_layout(node.clone()), node);
    }

    #[test]
    fn test_metadata_is_fixed() {
        assert_eq!(ADMIN_METADATA.title, "Admin Panel");
        assert_eq!(ADMIN_METADATA.description, "Manage categories and products");
    }

    #[test]
    fn test_document_head() {
        let ctx = RequestConfig {
            locale: Locale::Fa,
            messages: MessageBundle::default(),
        };
        let html = document(&ADMIN_METADATA, &ctx, "<main></main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"fa\" dir=\"rtl\">"));
        assert!(html.contains("<title>Admin Panel</title>"));
        assert!(html.contains("content=\"Manage categories and products\""));
        assert!(html.contains("<body><main></main></body>"));
    }
}
