//! Page shell abstraction.

/// Document head for a storefront page: the title and inline styles.
///
/// The charset and viewport tags are the same on every page, so they are
/// baked into the rendered output rather than carried as state.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title. Interpolated verbatim; callers escape it.
    pub title: String,
    /// Inline CSS blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            styles: Vec::new(),
        }
    }

    /// Add an inline CSS block.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render the head inner HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!("<title>{}</title>\n", self.title));

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Full-page template: document head, shared chrome, body sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Head content.
    pub head: HeadContent,
    /// HTML before the sections (opening body, site header).
    pub body_start: String,
    /// HTML after the sections (closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with the basic RTL document structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render a complete document around the given sections.
    pub fn render(&self, sections: &str) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"fa\" dir=\"rtl\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html.push_str(sections);
        html.push('\n');
        html.push_str(&self.body_end);

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_sections() {
        let shell = Shell::new(HeadContent::new("عنوان"));
        let html = shell.render("<p>hi</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="fa" dir="rtl">"#));
        assert!(html.contains("<title>عنوان</title>"));
        assert!(html.contains("<p>hi</p>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_head_carries_viewport_and_styles() {
        let head = HeadContent::new("t").with_style("body { margin: 0; }");
        let html = head.render();

        assert!(html.contains(r#"<meta name="viewport""#));
        assert!(html.contains("<style>body { margin: 0; }</style>"));
    }

    #[test]
    fn test_custom_body_start() {
        let shell = Shell::new(HeadContent::new("t")).with_body_start("<body><header>x</header>");
        let html = shell.render("");
        assert!(html.contains("<header>x</header>"));
    }
}
