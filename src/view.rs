//! Render tree produced by page handlers and its HTML serialization.

use crate::i18n::{Locale, RequestConfig};
use serde::Serialize;

/// An admin section with its own page and tab component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Categories,
    Products,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Categories, Section::Products];

    /// Route segment under `/{locale}/admin/`.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Categories => "categories",
            Section::Products => "products",
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            Section::Categories => "admin.categories.title",
            Section::Products => "admin.products.title",
        }
    }

    pub fn description_key(&self) -> &'static str {
        match self {
            Section::Categories => "admin.categories.description",
            Section::Products => "admin.products.description",
        }
    }
}

/// A node of a rendered page.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Locale-aware wrapper around the page content.
    LocaleWrapper { locale: Locale, children: Vec<Node> },
    /// A section's tab component.
    Tab(Section),
    /// Links to every admin section.
    SectionIndex,
    Text(String),
    Fragment(Vec<Node>),
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::LocaleWrapper { children, .. } | Node::Fragment(children) => children,
            _ => &[],
        }
    }

    /// Serialize to HTML, translating through the request's messages.
    pub fn to_html(&self, ctx: &RequestConfig) -> String {
        let mut out = String::new();
        self.write_html(ctx, &mut out);
        out
    }

    fn write_html(&self, ctx: &RequestConfig, out: &mut String) {
        match self {
            Node::LocaleWrapper { locale, children } => {
                out.push_str(&format!(
                    "<div class=\"locale-wrapper\" lang=\"{}\" dir=\"{}\">",
                    locale.code(),
                    locale.direction().as_str()
                ));
                for child in children {
                    child.write_html(ctx, out);
                }
                out.push_str("</div>");
            }
            Node::Tab(section) => {
                out.push_str(&format!("<section class=\"tab tab-{}\">", section.slug()));
                out.push_str(&format!("<h1>{}</h1>", escape_html(ctx.t(section.title_key()))));
                out.push_str(&format!(
                    "<p>{}</p>",
                    escape_html(ctx.t(section.description_key()))
                ));
                out.push_str("</section>");
            }
            Node::SectionIndex => {
                out.push_str(&format!("<h1>{}</h1>", escape_html(ctx.t("admin.nav.title"))));
                out.push_str("<nav class=\"admin-nav\"><ul>");
                for section in Section::ALL {
                    out.push_str(&format!(
                        "<li><a href=\"/{}/admin/{}\">{}</a></li>",
                        ctx.locale.code(),
                        section.slug(),
                        escape_html(ctx.t(section.title_key()))
                    ));
                }
                out.push_str("</ul></nav>");
                write_locale_switcher(ctx.locale, out);
            }
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(ctx, out);
                }
            }
        }
    }
}

/// Links to the admin index in every other locale, labelled natively.
fn write_locale_switcher(current: Locale, out: &mut String) {
    out.push_str("<nav class=\"locale-switcher\"><ul>");
    for locale in Locale::ALL.iter().filter(|locale| **locale != current) {
        out.push_str(&format!(
            concat!(
                "<li><a href=\"/{code}/admin\" hreflang=\"{code}\" lang=\"{code}\" ",
                "title=\"{name}\">{native}</a></li>"
            ),
            code = locale.code(),
            name = escape_html(locale.name()),
            native = escape_html(locale.native_name()),
        ));
    }
    out.push_str("</ul></nav>");
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageBundle;

    fn ctx(locale: Locale) -> RequestConfig {
        let raw = serde_json::json!({
            "admin": {
                "categories": { "title": "Categories", "description": "Group <products>" },
                "products": { "title": "Products", "description": "Items & stock" }
            }
        });
        RequestConfig {
            locale,
            messages: MessageBundle::from_json(locale, raw.to_string().as_bytes()).unwrap(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("سلام"), "سلام");
    }

    #[test]
    fn test_tab_renders_translated_text() {
        let html = Node::Tab(Section::Categories).to_html(&ctx(Locale::En));
        assert!(html.contains("<h1>Categories</h1>"));
        assert!(html.contains("Group &lt;products&gt;"));
        assert!(html.contains("tab-categories"));
    }

    #[test]
    fn test_wrapper_sets_lang_and_dir() {
        let node = Node::LocaleWrapper {
            locale: Locale::Ar,
            children: vec![Node::Text("x".to_string())],
        };
        let html = node.to_html(&ctx(Locale::Ar));
        assert_eq!(html, "<div class=\"locale-wrapper\" lang=\"ar\" dir=\"rtl\">x</div>");
    }

    #[test]
    fn test_section_index_links_every_section() {
        let html = Node::SectionIndex.to_html(&ctx(Locale::Fa));
        assert!(html.contains("href=\"/fa/admin/categories\""));
        assert!(html.contains("href=\"/fa/admin/products\""));
    }

    #[test]
    fn test_section_index_switches_to_other_locales() {
        let html = Node::SectionIndex.to_html(&ctx(Locale::Fa));
        assert!(html.contains("href=\"/en/admin\""));
        assert!(html.contains("title=\"English\""));
        assert!(html.contains("href=\"/ar/admin\""));
        assert!(html.contains(">العربية</a>"));
        assert!(html.contains("title=\"Arabic\""));
        assert!(!html.contains("href=\"/fa/admin\""));
    }

    #[test]
    fn test_missing_key_renders_key() {
        let bare = RequestConfig {
            locale: Locale::En,
            messages: MessageBundle::default(),
        };
        let html = Node::Tab(Section::Products).to_html(&bare);
        assert!(html.contains("<h1>admin.products.title</h1>"));
    }

    #[test]
    fn test_children() {
        let node = Node::Fragment(vec![Node::Text("a".into()), Node::Tab(Section::Products)]);
        assert_eq!(node.children().len(), 2);
        assert!(Node::Tab(Section::Products).children().is_empty());
    }
}
