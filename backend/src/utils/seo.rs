use maud::{html, PreEscaped};
use serde_json::json;

use crate::repositories::content_repository::SiteContent;

/// schema.org business description for search engines.
pub fn structured_data(content: &SiteContent, public_url: &str) -> serde_json::Value {
    let offers: Vec<serde_json::Value> = content
        .services
        .iter()
        .filter(|s| s.available)
        .map(|s| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": s.title,
                    "description": s.description,
                }
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "AutomotiveBusiness",
        "additionalType": "https://schema.org/TowingService",
        "name": content.site.title,
        "description": content.site.description,
        "telephone": content.site.phone,
        "url": format!("{}/", public_url),
        "openingHours": "Mo-Su 00:00-23:59",
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Towing services",
            "itemListElement": offers,
        }
    })
}

/// Head tags rendered into the shell document once, instead of patched in at runtime.
pub fn head_tags(content: &SiteContent, public_url: &str) -> Result<String, serde_json::Error> {
    let site = &content.site;
    let canonical = format!("{}/", public_url);
    // Markup characters inside a script block could close it early.
    let ld_json = serde_json::to_string(&structured_data(content, public_url))?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026");

    let head = html! {
        title { (site.title) " | " (site.subtitle) }
        meta name="description" content=(site.description);
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta name="theme-color" content="#111111";
        link rel="canonical" href=(canonical);
        meta property="og:title" content=(site.title);
        meta property="og:description" content=(site.description);
        meta property="og:type" content="website";
        meta property="og:url" content=(canonical);
        link rel="preconnect" href="https://fonts.googleapis.com";
        link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
        script type="application/ld+json" { (PreEscaped(ld_json)) }
    };
    Ok(head.into_string())
}

const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
</head>
<body>
    <noscript>Please enable JavaScript, or call us directly.</noscript>
</body>
</html>
"#;

/// Inserts the head tags into `template` (the built index document) right
/// before `</head>`. Falls back to a bare shell when no template exists.
pub fn render_shell(template: Option<&str>, head: &str) -> String {
    let template = template.unwrap_or(DEFAULT_SHELL);
    match template.find("</head>") {
        Some(at) => {
            let mut page = String::with_capacity(template.len() + head.len() + 8);
            page.push_str(&template[..at]);
            page.push_str("    ");
            page.push_str(head);
            page.push('\n');
            page.push_str(&template[at..]);
            page
        }
        None => format!("{}\n{}", head, template),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_contains_escaped_metadata() {
        let mut content = SiteContent::default();
        content.site.title = "Tow & Go <24h>".to_string();
        let head = head_tags(&content, "https://tow.example.sa").unwrap();
        assert!(head.contains("<title>Tow &amp; Go &lt;24h&gt; | "));
        assert!(head.contains("<link rel=\"canonical\" href=\"https://tow.example.sa/\">"));
        assert!(!head.contains("<24h>"));
        assert!(head.contains("<meta property=\"og:title\" content=\"Tow &amp; Go &lt;24h&gt;\">"));
    }

    #[test]
    fn json_ld_cannot_close_its_script_tag() {
        let mut content = SiteContent::default();
        content.site.description = "</script><script>alert(1)</script>".to_string();
        let head = head_tags(&content, "http://localhost:3000").unwrap();
        assert_eq!(head.matches("</script>").count(), 1);
        assert!(head.contains("\\u003c/script\\u003e"));
    }

    #[test]
    fn structured_data_lists_only_available_services() {
        let mut content = SiteContent::default();
        content.services[0].available = false;
        let data = structured_data(&content, "http://localhost:3000");
        let offers = data["hasOfferCatalog"]["itemListElement"].as_array().unwrap();
        assert_eq!(offers.len(), content.services.len() - 1);
        assert_eq!(data["telephone"], "+966501234567");
    }

    #[test]
    fn shell_gets_head_before_closing_tag() {
        let page = render_shell(Some("<html><head><script src=\"/app.js\"></script></head><body></body></html>"), "<title>x</title>");
        let title_at = page.find("<title>x</title>").unwrap();
        assert!(title_at > page.find("/app.js").unwrap());
        assert!(title_at < page.find("</head>").unwrap());
    }

    #[test]
    fn missing_template_uses_default_shell() {
        let page = render_shell(None, "<title>x</title>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>x</title>"));
    }
}
