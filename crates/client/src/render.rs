//! Pure HTML rendering of the portfolio page.
//!
//! `render_page` is a function of the collections and the form state only;
//! it holds no state of its own. All user-provided text is escaped.

use portfolio_core::category::Category;
use portfolio_core::project::ProjectRecord;

use crate::api::ProjectCollections;
use crate::controller::FormState;

/// Render the whole page body: both category sections plus the add-project
/// form when one is open.
pub fn render_page(collections: &ProjectCollections, form: &FormState) -> String {
    let mut html = String::new();
    for category in [Category::Personal, Category::Group] {
        html.push_str(&render_category(category, collections.collection(category)));
    }
    html.push_str(&render_form(form));
    html
}

/// Render one category section.
pub fn render_category(category: Category, records: &[ProjectRecord]) -> String {
    let mut html = format!(
        r#"<section id="{category}-projects" class="project-section">"#
    );
    if records.is_empty() {
        html.push_str(r#"<p class="empty-hint">No projects yet</p>"#);
    } else {
        for record in records {
            html.push_str(&render_card(category, record));
        }
    }
    html.push_str("</section>");
    html
}

/// Render a single project card.
///
/// Link elements are emitted only for non-empty link fields; an absent link
/// must not produce an empty or broken anchor.
fn render_card(category: Category, record: &ProjectRecord) -> String {
    let mut html = String::from(r#"<div class="project-card">"#);

    html.push_str(&format!(
        r#"<button class="delete-btn" data-category="{category}" data-id="{}">&times;</button>"#,
        escape_html(&record.id)
    ));
    html.push_str(&format!(
        r#"<h3 class="project-title">{}</h3>"#,
        escape_html(&record.title)
    ));
    html.push_str(&format!(
        r#"<p class="project-description">{}</p>"#,
        escape_html(&record.description)
    ));

    html.push_str(r#"<div class="project-tech">"#);
    for tech in &record.technologies {
        html.push_str(&format!(
            r#"<span class="tech-tag">{}</span>"#,
            escape_html(tech)
        ));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="project-links">"#);
    if !record.project_link.is_empty() {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" class="project-link">View project</a>"#,
            escape_html(&record.project_link)
        ));
    }
    if !record.download_link.is_empty() {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" class="project-link download-link">Download</a>"#,
            escape_html(&record.download_link)
        ));
    }
    html.push_str("</div>");

    html.push_str("</div>");
    html
}

/// Render the add-project form, or nothing while idle.
fn render_form(form: &FormState) -> String {
    let (draft, submitting) = match form {
        FormState::Idle => return String::new(),
        FormState::Editing(draft) => (draft, false),
        FormState::Submitting(draft) => (draft, true),
    };

    let heading = match draft.category {
        Category::Personal => "Add a Personal Project",
        Category::Group => "Add a Group Project",
    };

    let mut html = format!(
        r#"<div class="modal"><form id="project-form" data-category="{}"><h2>{heading}</h2>"#,
        draft.category
    );

    html.push_str(&format!(
        r#"<input name="title" value="{}">"#,
        escape_html(&draft.title)
    ));
    html.push_str(&format!(
        r#"<textarea name="description">{}</textarea>"#,
        escape_html(&draft.description)
    ));

    html.push_str(r#"<div class="tech-list">"#);
    for tag in &draft.tags {
        html.push_str(&format!(
            r#"<span class="tech-item">{}<span class="remove-tech">&times;</span></span>"#,
            escape_html(tag)
        ));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<input name="projectLink" value="{}">"#,
        escape_html(&draft.project_link)
    ));
    html.push_str(&format!(
        r#"<input name="downloadLink" value="{}">"#,
        escape_html(&draft.download_link)
    ));

    // The submit control is the double-submit guard: disabled in flight.
    if submitting {
        html.push_str(r#"<button type="submit" disabled>Adding...</button>"#);
    } else {
        html.push_str(r#"<button type="submit">Add project</button>"#);
    }

    html.push_str("</form></div>");
    html
}

/// Minimal HTML escaping for text and attribute positions.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use portfolio_core::project::CreateProject;

    use super::*;
    use crate::controller::Controller;

    fn record_with_links(project_link: &str, download_link: &str) -> ProjectRecord {
        let mut record = ProjectRecord::create(CreateProject {
            title: "Linked".to_string(),
            description: "desc".to_string(),
            ..Default::default()
        })
        .unwrap();
        record.project_link = project_link.to_string();
        record.download_link = download_link.to_string();
        record
    }

    #[test]
    fn absent_project_link_renders_only_download_link() {
        let record = record_with_links("", "https://example.com/dl");
        let html = render_category(Category::Personal, &[record]);

        assert_eq!(html.matches("<a ").count(), 1, "exactly one link element");
        assert!(html.contains("download-link"));
        assert!(html.contains("https://example.com/dl"));
    }

    #[test]
    fn both_links_absent_renders_no_anchor() {
        let record = record_with_links("", "");
        let html = render_category(Category::Personal, &[record]);
        assert_eq!(html.matches("<a ").count(), 0);
    }

    #[test]
    fn tags_render_in_insertion_order() {
        let mut record = record_with_links("", "");
        record.technologies = vec!["Zig".to_string(), "Ada".to_string()];
        let html = render_category(Category::Group, &[record]);

        let zig = html.find("Zig").unwrap();
        let ada = html.find("Ada").unwrap();
        assert!(zig < ada, "display order must match insertion order");
    }

    #[test]
    fn text_is_escaped() {
        let mut record = record_with_links("", "");
        record.title = "<script>alert('x')</script>".to_string();
        let html = render_category(Category::Personal, &[record]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_collection_renders_hint() {
        let html = render_category(Category::Personal, &[]);
        assert!(html.contains("No projects yet"));
    }

    #[test]
    fn idle_form_renders_nothing() {
        assert!(render_form(&FormState::Idle).is_empty());
    }

    #[test]
    fn submitting_form_disables_submit_button() {
        let mut controller = Controller::new();
        controller.open_form(Category::Personal);
        {
            let draft = controller.draft_mut().unwrap();
            draft.title = "A".to_string();
            draft.description = "B".to_string();
        }
        let editing_html = render_form(controller.form());
        assert!(!editing_html.contains("disabled"));

        controller.submit().unwrap();
        let submitting_html = render_form(controller.form());
        assert!(submitting_html.contains("disabled"));
    }

    #[test]
    fn page_render_is_deterministic() {
        let collections = ProjectCollections {
            personal: vec![record_with_links("https://example.com", "")],
            group: vec![],
        };
        let a = render_page(&collections, &FormState::Idle);
        let b = render_page(&collections, &FormState::Idle);
        assert_eq!(a, b);
    }
}
