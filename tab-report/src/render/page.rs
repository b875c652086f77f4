//! Page assembly
//!
//! Owns the static page shell (CSS and the tab-switching script, constant
//! across invocations), HTML escaping of interpolated text, tab identifier
//! sanitization, and the final concatenation of sections into one document.

use crate::config::ReportConfig;
use crate::types::ReportSection;
use chrono::Utc;
use std::collections::HashSet;

/// Static styling embedded in every report
const PAGE_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background-color: #f4f4f4; }
.container { max-width: 1000px; margin: auto; background: white; padding: 20px; box-shadow: 0 0 10px rgba(0, 0, 0, 0.1); }
h1 { text-align: center; color: #333; }
h2 { border-bottom: 2px solid #4CAF50; color: #4CAF50; padding-bottom: 5px; }
.meta { text-align: center; color: #777; font-size: 13px; margin-bottom: 16px; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
table, th, td { border: 1px solid #ddd; }
th, td { padding: 8px; text-align: left; }
th { background-color: #4CAF50; color: white; }
.plot { text-align: center; margin: 20px 0; }
.plot img { max-width: 100%; height: auto; }
.tabs { display: flex; margin-bottom: 20px; cursor: pointer; justify-content: space-around; }
.tab { padding: 10px; background-color: #4CAF50; color: white; border-radius: 5px 5px 0 0; flex-grow: 1; text-align: center; margin: 0 5px; }
.tab.active-tab { background-color: #333; }
.tab-content { display: none; padding: 20px; border: 1px solid #ddd; border-top: none; background-color: white; }
.tab-content.active-content { display: block; }
";

/// Static tab-switching script embedded in every report.
///
/// Shows exactly one tab-content block at a time and activates the first tab
/// on page load. The load handler tolerates a report with zero tabs.
const TAB_SCRIPT: &str = "\
function openTab(evt, tabName) {
    var i, tabcontent, tablinks;
    tabcontent = document.getElementsByClassName(\"tab-content\");
    for (i = 0; i < tabcontent.length; i++) {
        tabcontent[i].style.display = \"none\";
    }
    tablinks = document.getElementsByClassName(\"tab\");
    for (i = 0; i < tablinks.length; i++) {
        tablinks[i].className = tablinks[i].className.replace(\" active-tab\", \"\");
    }
    document.getElementById(tabName).style.display = \"block\";
    evt.currentTarget.className += \" active-tab\";
}
document.addEventListener(\"DOMContentLoaded\", function() {
    var first = document.querySelector(\".tab\");
    if (first) {
        first.click();
    }
});
";

/// Escape text for interpolation into HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Allocator for sanitized, collision-free tab identifiers
///
/// Identifiers keep only `[A-Za-z0-9_-]`; everything else becomes `_`. An
/// identifier that would be empty becomes `tab`, one that would start with a
/// digit gains a `tab_` prefix, and duplicates gain an ascending numeric
/// suffix in allocation order.
#[derive(Debug, Default)]
pub struct TabIds {
    used: HashSet<String>,
}

impl TabIds {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the identifier for a display name, unique within this allocator
    pub fn allocate(&mut self, display_name: &str) -> String {
        let mut id: String = display_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if id.is_empty() {
            id = "tab".to_string();
        }
        if id.starts_with(|c: char| c.is_ascii_digit()) {
            id = format!("tab_{}", id);
        }

        let mut candidate = id.clone();
        let mut suffix = 2;
        while !self.used.insert(candidate.clone()) {
            candidate = format!("{}_{}", id, suffix);
            suffix += 1;
        }
        candidate
    }
}

/// Render one section as its tab-content block
fn render_section(section: &ReportSection) -> String {
    let mut html = format!("<div id=\"{}\" class=\"tab-content\">\n", section.tab_id);

    for table in &section.tables {
        html.push_str(&format!("<h2>{}</h2>\n", escape_html(&table.name)));
        html.push_str(&table.html);
        html.push('\n');
    }

    for plot in &section.plots {
        let name = escape_html(&plot.name);
        html.push_str(&format!(
            "<div class=\"plot\">\n<h3>{}</h3>\n<img src=\"data:image/png;base64,{}\" alt=\"{}\">\n</div>\n",
            name, plot.payload, name
        ));
    }

    html.push_str("</div>\n");
    html
}

/// Assemble the complete HTML document from rendered sections
pub fn render_page(config: &ReportConfig, sections: &[ReportSection]) -> String {
    let mut links = String::new();
    let mut contents = String::new();
    for section in sections {
        links.push_str(&format!(
            "<div class=\"tab\" onclick=\"openTab(event, '{}')\">{}</div>",
            section.tab_id,
            escape_html(&section.name)
        ));
        contents.push_str(&render_section(section));
    }

    let title = escape_html(&config.title);
    let meta = if config.timestamp {
        format!(
            "<div class=\"meta\">Generated at {}</div>\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\"/>\n\
         <title>{title}</title>\n<style>\n{PAGE_STYLE}</style>\n</head>\n<body>\n\
         <div class=\"container\">\n<h1>{title}</h1>\n{meta}\
         <div class=\"tabs\">{links}</div>\n{contents}</div>\n\
         <script>\n{TAB_SCRIPT}</script>\n</body>\n</html>\n"
    )
}
