// src/ui/templates.rs
//! HTML fragments rendered into the page.
//!
//! Every interpolated value goes through `escape_html`.

use super::matching::ScoreTier;
use super::page::{Select, ThemeToggle, Toast};
use crate::types::{FileSelection, Interview, MatchResult, Shortlist};
use crate::utils::{escape_html, format_file_size, format_score, split_skills};

/// Spinner with a status line, shown while a form request is in flight.
pub fn loading(message: &str) -> String {
    format!(
        r#"<div class="flex items-center justify-center p-4 bg-indigo-50 rounded-md">
    <div class="spinner mr-3"></div>
    <p class="text-indigo-700">{}</p>
</div>"#,
        escape_html(message)
    )
}

/// Larger spinner used by the match result container.
pub fn match_loading() -> String {
    r#"<div class="text-center py-12">
    <div class="spinner mx-auto"></div>
    <p class="mt-4 text-gray-600">Calculating match score...</p>
</div>"#
        .to_string()
}

pub fn success_alert(message: &str) -> String {
    format!(
        r#"<div class="alert alert-success">
    <i class="fas fa-check-circle mr-2"></i>
    {}
</div>"#,
        escape_html(message)
    )
}

pub fn error_alert(message: &str) -> String {
    format!(
        r#"<div class="alert alert-error">
    <i class="fas fa-exclamation-circle mr-2"></i>
    {}
</div>"#,
        escape_html(message)
    )
}

/// Contents of a `.file-list`, rebuilt in one pass.
pub fn file_list(selection: &FileSelection) -> String {
    if selection.is_empty() {
        return r#"<div class="text-center text-gray-500 py-4">
    <p>No files selected yet</p>
</div>"#
            .to_string();
    }

    let mut items = String::new();
    for file in selection.iter() {
        items.push_str(&format!(
            r#"<div class="file-item">
    <i class="fas fa-file-alt text-indigo-500"></i>
    <div class="file-name">{}</div>
    <div class="file-size">{}</div>
</div>"#,
            escape_html(&file.name),
            format_file_size(file.size)
        ));
    }
    items
}

/// One badge per matched skill.
pub fn skill_badges(skills: &str) -> String {
    split_skills(skills)
        .into_iter()
        .map(|skill| {
            format!(
                r#"<span class="skill-badge inline-block bg-indigo-100 text-indigo-800 px-2 py-1 rounded-full text-xs font-medium mr-2 mb-2">{}</span>"#,
                escape_html(skill)
            )
        })
        .collect()
}

fn or_fallback<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback)
}

/// Detailed result panel of the match calculator.
pub fn match_panel(
    result: &MatchResult,
    job_id: &str,
    candidate_id: &str,
    schedule_url: &str,
) -> String {
    let tier = ScoreTier::from_score(result.match_score);
    let score = format_score(result.match_score);
    let name = escape_html(&result.candidate_name);
    let job_title = escape_html(&result.job_title);

    format!(
        r#"<div class="bg-white shadow overflow-hidden sm:rounded-lg">
    <div class="px-4 py-5 sm:px-6 flex justify-between items-center">
        <div>
            <h3 class="text-lg leading-6 font-medium text-gray-900">Match Results</h3>
            <p class="mt-1 max-w-2xl text-sm text-gray-500">{name} for {job_title}</p>
        </div>
        <a class="schedule-interview-button inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700" href="{href}" data-job-id="{job_id}" data-candidate-id="{candidate_id}">
            <i class="fas fa-calendar-alt mr-2"></i>
            Schedule Interview
        </a>
    </div>
    <div class="border-t border-gray-200">
        <div class="p-6">
            <div class="text-center mb-6">
                <div class="{score_class} match-score">{score}%</div>
                <div class="text-sm text-gray-500">Match Score</div>
                <div class="match-progress mt-2">
                    <div class="match-progress-bar {progress_class}" style="width: {score}%"></div>
                </div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-6">
                <div>
                    <h4 class="text-sm font-medium text-gray-500 uppercase tracking-wider mb-3">Candidate Information</h4>
                    <p class="text-sm text-gray-900 mb-1"><span class="font-medium">Name:</span> {name}</p>
                    <p class="text-sm text-gray-900 mb-1"><span class="font-medium">Email:</span> {email}</p>
                    <p class="text-sm text-gray-900 mb-3"><span class="font-medium">Phone:</span> {phone}</p>
                    <h4 class="text-sm font-medium text-gray-500 uppercase tracking-wider mb-3">Skills</h4>
                    <div class="text-sm text-gray-900">{skills}</div>
                </div>
                <div>
                    <h4 class="text-sm font-medium text-gray-500 uppercase tracking-wider mb-3">Match Analysis</h4>
                    <div class="bg-gray-50 p-3 rounded-md">
                        <p class="match-analysis text-sm text-gray-700">{analysis}</p>
                    </div>
                    <h4 class="text-sm font-medium text-gray-500 uppercase tracking-wider mt-4 mb-3">Job Details</h4>
                    <p class="text-sm text-gray-900 mb-1"><span class="font-medium">Title:</span> {job_title}</p>
                    <p class="text-sm text-gray-900 mb-1"><span class="font-medium">Company:</span> {company}</p>
                </div>
            </div>
        </div>
    </div>
</div>"#,
        name = name,
        job_title = job_title,
        href = escape_html(schedule_url),
        job_id = escape_html(job_id),
        candidate_id = escape_html(candidate_id),
        score_class = tier.score_class(),
        progress_class = tier.progress_class(),
        score = score,
        email = escape_html(&result.candidate_email),
        phone = escape_html(or_fallback(result.candidate_phone.as_deref(), "N/A")),
        skills = skill_badges(&result.matched_skills),
        analysis = escape_html(or_fallback(
            result.match_analysis.as_deref(),
            "This candidate has a good match with the required skills for this position."
        )),
        company = escape_html(or_fallback(result.company.as_deref(), "Your Company")),
    )
}

pub fn select(select: &Select) -> String {
    let mut attrs = String::new();
    if let Some(id) = &select.id {
        attrs.push_str(&format!(r#" id="{}""#, escape_html(id)));
    }
    if let Some(name) = &select.name {
        attrs.push_str(&format!(r#" name="{}""#, escape_html(name)));
    }

    let options: String = select
        .options
        .iter()
        .map(|option| {
            let selected = if option.value == select.value {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(&option.value),
                selected,
                escape_html(&option.text)
            )
        })
        .collect();

    format!("<select{}>{}</select>", attrs, options)
}

pub fn interviews_list(interviews: &[Interview]) -> String {
    if interviews.is_empty() {
        return r#"<div class="text-center text-gray-500 py-4">
    <p>No upcoming interviews</p>
</div>"#
            .to_string();
    }

    let mut rows = String::new();
    for interview in interviews {
        rows.push_str(&format!(
            r#"<li class="interview-item py-3" data-interview-id="{}">
    <p class="text-sm font-medium text-gray-900">{}</p>
    <p class="text-sm text-gray-500">{} &middot; {}</p>
    <p class="text-xs text-gray-400">{}</p>
</li>"#,
            escape_html(&interview.id),
            escape_html(&interview.candidate_name),
            escape_html(&interview.job_title),
            escape_html(&interview.candidate_email),
            escape_html(&interview.scheduled_time)
        ));
    }

    format!(r#"<ul class="divide-y divide-gray-200">{}</ul>"#, rows)
}

pub fn shortlist_table(shortlist: &Shortlist) -> String {
    if shortlist.shortlisted.is_empty() {
        return format!(
            r#"<p class="text-gray-500">No shortlisted candidates for {} yet.</p>"#,
            escape_html(&shortlist.job.title)
        );
    }

    let mut rows = String::new();
    for entry in &shortlist.shortlisted {
        let tier = ScoreTier::from_score(entry.match_score);
        rows.push_str(&format!(
            r#"<tr class="shortlist-row" data-candidate-id="{}">
    <td>{}</td>
    <td>{}</td>
    <td><span class="{} match-score">{}%</span></td>
    <td>{}</td>
</tr>"#,
            escape_html(&entry.candidate_id),
            escape_html(&entry.candidate_name),
            escape_html(&entry.candidate_email),
            tier.score_class(),
            format_score(entry.match_score),
            skill_badges(entry.candidate_skills.as_deref().unwrap_or_default())
        ));
    }

    format!(
        r#"<h3 class="text-lg font-medium text-gray-900">{}</h3>
<table class="shortlist min-w-full">
    <thead><tr><th>Name</th><th>Email</th><th>Score</th><th>Skills</th></tr></thead>
    <tbody>{}</tbody>
</table>"#,
        escape_html(&shortlist.job.title),
        rows
    )
}

/// Fixed-position toggle injected at load.
pub fn theme_toggle(toggle: &ThemeToggle) -> String {
    format!(
        r#"<button class="dark-mode-toggle" title="Toggle Dark Mode" aria-label="Toggle Dark Mode" style="position: fixed; bottom: 20px; right: 20px; width: 50px; height: 50px; border-radius: 25px; background-color: var(--color-accent-primary); color: white; border: none; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.2); cursor: pointer; z-index: 9999; display: flex; align-items: center; justify-content: center; font-size: 1.2rem;"><i class="fas {}"></i></button>"#,
        toggle.icon.css_class()
    )
}

pub fn toast(toast: &Toast) -> String {
    format!(
        r#"<div class="toast" style="position: fixed; bottom: 80px; right: 20px; background-color: var(--color-bg-secondary); color: var(--color-text-primary); padding: 10px 20px; border-radius: 4px; z-index: 10000; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.2); transition: opacity 0.5s ease; opacity: {};">{}</div>"#,
        if toast.visible { "1" } else { "0" },
        escape_html(&toast.message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Job, SelectedFile, ShortlistedCandidate};
    use crate::ui::page::SelectOption;
    use scraper::{Html, Selector};

    fn texts(html: &str, selector: &str) -> Vec<String> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        fragment
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    fn sample_result(score: f64) -> MatchResult {
        MatchResult {
            match_score: score,
            candidate_name: "Ada Lovelace".to_string(),
            candidate_email: "ada@example.com".to_string(),
            candidate_phone: None,
            matched_skills: "Python, SQL,Go".to_string(),
            match_analysis: None,
            job_title: "Engineer".to_string(),
            company: Some("Analytical Engines".to_string()),
        }
    }

    #[test]
    fn test_file_list_placeholder() {
        let html = file_list(&FileSelection::default());
        assert!(html.contains("No files selected yet"));
    }

    #[test]
    fn test_file_list_entries() {
        let selection = FileSelection::new(vec![
            SelectedFile::new("cv.pdf", vec![0; 1536]),
            SelectedFile::new("<script>.txt", Vec::new()),
        ]);
        let html = file_list(&selection);

        assert_eq!(texts(&html, ".file-name"), vec!["cv.pdf", "<script>.txt"]);
        assert_eq!(texts(&html, ".file-size"), vec!["1.5 KB", "0 Bytes"]);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_skill_badges_are_trimmed() {
        let html = skill_badges("Python, SQL,Go");
        assert_eq!(texts(&html, ".skill-badge"), vec!["Python", "SQL", "Go"]);
    }

    #[test]
    fn test_match_panel_high_tier() {
        let html = match_panel(&sample_result(85.0), "3", "7", "schedule-interview.html?job_id=3&candidate_id=7");
        let fragment = Html::parse_fragment(&html);

        let score = Selector::parse(".match-score-high").unwrap();
        assert_eq!(fragment.select(&score).count(), 1);
        let bar = Selector::parse(".match-progress-bar-high").unwrap();
        let bar = fragment.select(&bar).next().unwrap();
        assert_eq!(bar.value().attr("style"), Some("width: 85%"));

        assert_eq!(texts(&html, ".match-score"), vec!["85%"]);
        assert_eq!(texts(&html, ".skill-badge").len(), 3);
    }

    #[test]
    fn test_match_panel_fallbacks() {
        let html = match_panel(&sample_result(40.0), "3", "7", "x");
        assert!(html.contains("N/A"));
        assert!(html.contains("match-score-low"));
        assert_eq!(
            texts(&html, ".match-analysis"),
            vec!["This candidate has a good match with the required skills for this position."]
        );
    }

    #[test]
    fn test_match_panel_schedule_link() {
        let html = match_panel(&sample_result(65.0), "3", "7", "schedule-interview.html?job_id=3&candidate_id=7");
        let fragment = Html::parse_fragment(&html);
        let button = Selector::parse(".schedule-interview-button").unwrap();
        let button = fragment.select(&button).next().unwrap();

        assert_eq!(
            button.value().attr("href"),
            Some("schedule-interview.html?job_id=3&candidate_id=7")
        );
        assert_eq!(button.value().attr("data-job-id"), Some("3"));
        assert!(html.contains("match-score-medium"));
    }

    #[test]
    fn test_select_marks_selected_option() {
        let mut s = Select::named("job_id", "Select...");
        s.replace_options(vec![SelectOption::new("1", "Engineer")]);
        s.set_value("1");

        let html = select(&s);
        assert!(html.contains(r#"<option value="1" selected>Engineer</option>"#));
        assert!(html.contains(r#"name="job_id""#));
    }

    #[test]
    fn test_interviews_list() {
        assert!(interviews_list(&[]).contains("No upcoming interviews"));

        let html = interviews_list(&[Interview {
            id: "4".to_string(),
            job_id: "1".to_string(),
            candidate_id: "2".to_string(),
            scheduled_time: "2026-10-20T10:00:00".to_string(),
            job_title: "Engineer".to_string(),
            candidate_name: "Ada".to_string(),
            candidate_email: "ada@example.com".to_string(),
        }]);
        assert_eq!(texts(&html, ".interview-item").len(), 1);
    }

    #[test]
    fn test_shortlist_table() {
        let shortlist = Shortlist {
            job: Job {
                id: "1".to_string(),
                title: "Engineer".to_string(),
                company: None,
            },
            shortlisted: vec![ShortlistedCandidate {
                id: "10".to_string(),
                job_id: "1".to_string(),
                candidate_id: "7".to_string(),
                match_score: 91.0,
                candidate_name: "Ada".to_string(),
                candidate_email: "ada@example.com".to_string(),
                candidate_skills: Some("Rust, SQL".to_string()),
            }],
        };
        let html = shortlist_table(&shortlist);
        assert!(html.contains("match-score-high"));
        assert_eq!(texts(&html, ".skill-badge"), vec!["Rust", "SQL"]);
    }
}
