//! HTML rendering for parsed resumes.

use crate::model::{
    DescriptionItem, ExperienceEntry, Header, LabeledPair, ResumeDocument, Section, SectionType,
};
use crate::syntax::{self, EDUCATION_SECTION};

use super::inline::{escape_html, InlineFormatter};
use super::stylesheet::{self, ResolvedStylesheet};
use super::{RenderOptions, RenderResult, RenderStats};

/// Notice appended to the page; hidden by the print stylesheet.
pub const PRINT_NOTICE: &str = "<div class=\"no-print\"><strong>📄 To save as PDF:</strong> \
Press Ctrl+P (or Cmd+P on Mac) and select \"Save as PDF\"</div>";

/// Convert a resume to a complete HTML document.
pub fn to_html(doc: &ResumeDocument, options: &RenderOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a resume to HTML with statistics and warnings.
pub fn to_html_with_stats(doc: &ResumeDocument, options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = HtmlRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    inline: InlineFormatter,
    stats: RenderStats,
    warnings: Vec<String>,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        let inline = InlineFormatter::new(options.escape_html);
        Self {
            options,
            inline,
            stats: RenderStats::new(),
            warnings: Vec::new(),
        }
    }

    /// Render a resume to HTML.
    pub fn render(mut self, doc: &ResumeDocument) -> String {
        self.render_internal(doc)
    }

    /// Render a resume to HTML, keeping statistics and warnings.
    pub fn render_with_stats(mut self, doc: &ResumeDocument) -> RenderResult {
        self.options.collect_stats = true;
        let html = self.render_internal(doc);
        RenderResult::new(html, self.stats, self.warnings)
    }

    fn render_internal(&mut self, doc: &ResumeDocument) -> String {
        let (sheet, warning) = stylesheet::resolve(&self.options.stylesheet);
        self.warnings.extend(warning);

        let mut output = String::new();
        self.render_head(&mut output, &doc.header, &sheet);

        output.push_str("<body>\n");
        self.render_header(&mut output, &doc.header);
        for section in &doc.sections {
            self.render_section(&mut output, section);
        }
        if self.options.print_notice {
            output.push_str(PRINT_NOTICE);
            output.push('\n');
        }
        output.push_str("</body>\n</html>\n");

        output
    }

    fn render_head(&self, output: &mut String, header: &Header, sheet: &ResolvedStylesheet) {
        let title = header
            .name
            .as_deref()
            .unwrap_or(&self.options.default_title);

        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!("<html lang=\"{}\">\n", escape_html(&self.options.lang)));
        output.push_str("<head>\n");
        output.push_str("    <meta charset=\"UTF-8\">\n");
        output.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        output.push_str(&format!("    <title>{}</title>\n", self.plain(title)));
        match sheet {
            ResolvedStylesheet::Inline(css) => {
                output.push_str("    <style>\n");
                output.push_str(css.trim_end());
                output.push_str("\n    </style>\n");
            }
            ResolvedStylesheet::Link(href) => {
                output.push_str(&format!(
                    "    <link rel=\"stylesheet\" href=\"{}\">\n",
                    escape_html(href)
                ));
            }
        }
        output.push_str("</head>\n");
    }

    fn render_header(&self, output: &mut String, header: &Header) {
        if let Some(ref name) = header.name {
            output.push_str(&format!("<h1>{}</h1>\n", self.inline.format(name)));
        }

        if let Some(ref title) = header.title {
            output.push_str("<div class=\"subtitle\"><strong>");
            output.push_str(&self.inline.format(title));
            output.push_str("</strong>");
            if let Some(specialization) = header.specialization() {
                output.push_str(" | ");
                output.push_str(&self.inline.format(specialization));
            }
            output.push_str("</div>\n");
        }

        if !header.contact.is_empty() {
            let lines: Vec<String> = header
                .contact
                .iter()
                .map(|line| self.inline.format(line))
                .collect();
            output.push_str(&format!(
                "<div class=\"contact-info\">{}</div>\n",
                lines.join(" | ")
            ));
        }
    }

    fn render_section(&mut self, output: &mut String, section: &Section) {
        if self.options.collect_stats {
            self.stats.add_section(section.section_type);
        }
        output.push_str(&format!("<h2>{}</h2>\n", self.inline.format(&section.title)));

        // Named override, checked before the generic dispatch.
        if section.title == EDUCATION_SECTION {
            let items = section.description_items();
            if !items.is_empty() {
                if self.options.collect_stats {
                    self.stats.add_education_override();
                }
                self.render_description_list(output, section, &items);
                return;
            }
        }

        match section.section_type {
            SectionType::Timeline => self.render_timeline(output, section),
            SectionType::AlignedList => self.render_aligned_list(output, section),
            SectionType::DescriptionList => {
                let items = section.description_items();
                self.render_description_list(output, section, &items);
            }
            SectionType::BulletList => self.render_bullet_list(output, section),
            SectionType::Paragraph => self.render_paragraph(output, section),
            SectionType::Unrecognized => {
                let warning = format!(
                    "Section '{}' has an unrecognized type; rendering it as a paragraph",
                    section.title
                );
                log::warn!("{}", warning);
                self.warnings.push(warning);
                self.render_paragraph(output, section);
            }
        }
    }

    fn render_timeline(&mut self, output: &mut String, section: &Section) {
        for entry in section.experience_entries() {
            if self.options.collect_stats {
                self.stats.add_timeline_entry();
            }
            self.render_entry(output, &entry);
        }
    }

    fn render_entry(&mut self, output: &mut String, entry: &ExperienceEntry) {
        output.push_str("<div class=\"job-title\"><span><span class=\"company-name\">");
        output.push_str(&self.inline.format(&entry.company));
        output.push_str("</span>");
        if !entry.role.is_empty() {
            output.push_str(" | ");
            output.push_str(&self.inline.format(&entry.role));
        }
        output.push_str("</span>");
        if !entry.date.is_empty() {
            output.push_str(&format!(
                "<span class=\"dates\">{}</span>",
                self.inline.format(&entry.date)
            ));
        }
        output.push_str("</div>\n");

        if !entry.bullets.is_empty() {
            output.push_str("<ul>\n");
            for bullet in &entry.bullets {
                if self.options.collect_stats {
                    self.stats.add_list_item();
                }
                output.push_str(&format!("<li>{}</li>\n", self.inline.format(bullet)));
            }
            output.push_str("</ul>\n");
        }
    }

    fn render_aligned_list(&mut self, output: &mut String, section: &Section) {
        let pairs = section.labeled_pairs();
        self.count_rows(section, pairs.len());

        for LabeledPair { label, value } in &pairs {
            output.push_str(&format!(
                "<div class=\"tech-skills\"><strong>{}:</strong> {}</div>\n",
                self.inline.format(label),
                self.inline.format(value)
            ));
        }
    }

    fn render_description_list(
        &mut self,
        output: &mut String,
        section: &Section,
        items: &[DescriptionItem],
    ) {
        self.count_rows(section, items.len());

        for DescriptionItem { term, description } in items {
            output.push_str("<div class=\"education-item\"><strong>");
            output.push_str(&self.inline.format(term));
            output.push_str("</strong>");
            if !description.is_empty() {
                output.push_str(" - ");
                output.push_str(&self.inline.format(description));
            }
            output.push_str("</div>\n");
        }
    }

    fn render_bullet_list(&mut self, output: &mut String, section: &Section) {
        let items: Vec<String> = section
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| syntax::bullet_text(line).unwrap_or(line))
            .filter(|text| !text.is_empty())
            .map(|text| self.inline.format(text))
            .collect();

        if items.is_empty() {
            return;
        }

        output.push_str("<ul>\n");
        for item in &items {
            if self.options.collect_stats {
                self.stats.add_list_item();
            }
            output.push_str(&format!("<li>{}</li>\n", item));
        }
        output.push_str("</ul>\n");
    }

    fn render_paragraph(&mut self, output: &mut String, section: &Section) {
        let body = self.inline.format(section.content.trim());
        if body.trim().is_empty() {
            return;
        }
        output.push_str(&format!("<p class=\"section-text\">{}</p>\n", body));
    }

    fn count_rows(&mut self, section: &Section, rows: usize) {
        if !self.options.collect_stats {
            return;
        }
        let non_blank = section.lines().filter(|l| !l.trim().is_empty()).count();
        for _ in 0..rows {
            self.stats.add_row();
        }
        self.stats.add_skipped(non_blank.saturating_sub(rows));
    }

    /// Header text outside markup (the `<title>` element).
    fn plain(&self, text: &str) -> String {
        if self.options.escape_html {
            escape_html(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(section: Section) -> ResumeDocument {
        let mut doc = ResumeDocument::new();
        doc.add_section(section);
        doc
    }

    fn render(doc: &ResumeDocument) -> String {
        to_html(doc, &RenderOptions::default())
    }

    #[test]
    fn test_render_timeline() {
        let doc = doc_with(Section::new(
            "Experience",
            SectionType::Timeline,
            "### Alpha Inc. | Lead Engineer\n_2022 - Present_\n- Feature **one**.\n- Feature _two_.",
        ));
        let html = render(&doc);

        assert!(html.contains("<h2>Experience</h2>"));
        assert!(html.contains("<span class=\"company-name\">Alpha Inc.</span> | Lead Engineer"));
        assert!(html.contains("<span class=\"dates\">2022 - Present</span>"));
        assert!(html.contains("<li>Feature <strong>one</strong>.</li>"));
        assert!(html.contains("<li>Feature <em>two</em>.</li>"));
    }

    #[test]
    fn test_render_aligned_list() {
        let doc = doc_with(Section::new(
            "Technical Expertise",
            SectionType::AlignedList,
            "**Core:** _Go_, Python\n**Tools:** Docker, **Kubernetes**",
        ));
        let html = render(&doc);

        assert!(html.contains(
            "<div class=\"tech-skills\"><strong>Core:</strong> <em>Go</em>, Python</div>"
        ));
        assert!(html.contains(
            "<div class=\"tech-skills\"><strong>Tools:</strong> Docker, <strong>Kubernetes</strong></div>"
        ));
    }

    #[test]
    fn test_aligned_list_drops_non_matching_lines() {
        let doc = doc_with(Section::new(
            "Skills",
            SectionType::AlignedList,
            "**Skills:** Go\nstray note\n**Tools:** CLI",
        ));
        let result = to_html_with_stats(&doc, &RenderOptions::default());

        assert!(!result.html.contains("stray note"));
        assert_eq!(result.stats.row_count, 2);
        assert_eq!(result.stats.skipped_lines, 1);
    }

    #[test]
    fn test_render_description_list_without_description() {
        let doc = doc_with(Section::new(
            "Certifications",
            SectionType::DescriptionList,
            "**CKA** - Linux Foundation\n**Solo** -",
        ));
        let html = render(&doc);

        assert!(html.contains("<strong>CKA</strong> - Linux Foundation</div>"));
        assert!(html.contains("<div class=\"education-item\"><strong>Solo</strong></div>"));
    }

    #[test]
    fn test_education_override() {
        let doc = doc_with(Section::new(
            "Education",
            SectionType::Paragraph,
            "**BSc** - State University\nGraduated with honors\nDean's list",
        ));
        let result = to_html_with_stats(&doc, &RenderOptions::default());

        assert!(result
            .html
            .contains("<div class=\"education-item\"><strong>BSc</strong> - State University</div>"));
        assert!(!result.html.contains("Dean's list"));
        assert_eq!(result.stats.education_overrides, 1);
    }

    #[test]
    fn test_education_without_pairs_uses_generic_dispatch() {
        let doc = doc_with(Section::new(
            "Education",
            SectionType::Paragraph,
            "Self-taught",
        ));
        let html = render(&doc);
        assert!(html.contains("<p class=\"section-text\">Self-taught</p>"));
    }

    #[test]
    fn test_render_bullet_list_skips_blank_items() {
        let doc = doc_with(Section::new(
            "Achievements",
            SectionType::BulletList,
            "- Item **one**\n\n- Item two\n-",
        ));
        let html = render(&doc);

        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<li>Item <strong>one</strong></li>"));
        assert!(html.contains("<li>Item two</li>"));
    }

    #[test]
    fn test_render_empty_paragraph_emits_heading_only() {
        let doc = doc_with(Section::new("Languages", SectionType::Paragraph, "  "));
        let html = render(&doc);

        assert!(html.contains("<h2>Languages</h2>"));
        assert!(!html.contains("<p"));
    }

    #[test]
    fn test_unrecognized_type_warns_and_renders_paragraph() {
        let doc = doc_with(Section::new(
            "Gallery",
            SectionType::Unrecognized,
            "Some _text_",
        ));
        let result = to_html_with_stats(&doc, &RenderOptions::default());

        assert!(result
            .html
            .contains("<p class=\"section-text\">Some <em>text</em></p>"));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Gallery"));
        assert_eq!(result.stats.unrecognized_sections, 1);
    }

    #[test]
    fn test_render_header() {
        let mut doc = ResumeDocument::new();
        doc.header.name = Some("Alice Wonderland".to_string());
        doc.header
            .set_title("**Chief Storyteller**", Some("_Dream Weaver_".to_string()));
        doc.header.contact = vec![
            "alice@example.com".to_string(),
            "[LinkedIn](http://linkedin.com/alice)".to_string(),
        ];
        let html = render(&doc);

        assert!(html.contains("<h1>Alice Wonderland</h1>"));
        assert!(html.contains("<strong>Chief Storyteller</strong>"));
        assert!(html.contains("<em>Dream Weaver</em>"));
        assert!(html.contains(
            "<div class=\"contact-info\">alice@example.com | <a href=\"http://linkedin.com/alice\">LinkedIn</a></div>"
        ));
    }

    #[test]
    fn test_subtitle_without_specialization() {
        let mut doc = ResumeDocument::new();
        doc.header.name = Some("Test User".to_string());
        doc.header.set_title("Tester", None);
        let html = render(&doc);
        assert!(html.contains("<div class=\"subtitle\"><strong>Tester</strong></div>"));
    }

    #[test]
    fn test_contact_block_omitted_when_empty() {
        let mut doc = ResumeDocument::new();
        doc.header.name = Some("Solo".to_string());
        let html = render(&doc);
        assert!(!html.contains("contact-info\">"));
    }

    #[test]
    fn test_document_skeleton() {
        let html = render(&ResumeDocument::new());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Resume</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains(PRINT_NOTICE));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_linked_stylesheet_and_no_notice() {
        let options = RenderOptions::new()
            .with_stylesheet_link("print.css")
            .with_print_notice(false);
        let html = to_html(&ResumeDocument::new(), &options);

        assert!(html.contains("<link rel=\"stylesheet\" href=\"print.css\">"));
        assert!(!html.contains("<style>"));
        assert!(!html.contains("no-print\">"));
    }

    #[test]
    fn test_escape_html_option() {
        let doc = doc_with(Section::new(
            "Summary",
            SectionType::Paragraph,
            "Built <b>tools</b> & more",
        ));
        let raw = render(&doc);
        assert!(raw.contains("Built <b>tools</b> & more"));

        let escaped = to_html(&doc, &RenderOptions::new().with_escape_html(true));
        assert!(escaped.contains("Built &lt;b&gt;tools&lt;/b&gt; &amp; more"));
    }
}
