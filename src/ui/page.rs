// src/ui/page.rs
//! Explicit model of the elements the controller binds to.
//!
//! An element that is absent from the page is `None` (or missing from its
//! list); events aimed at it are ignored, like a handler that was never bound.

use uuid::Uuid;

use crate::types::FileSelection;

/// Container whose inner HTML the controller replaces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageArea {
    html: String,
}

impl MessageArea {
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn set_html(&mut self, html: String) {
        self.html = html;
    }
}

/// Mobile menu panel, present only when both the button and the panel exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    pub hidden: bool,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self { hidden: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadArea {
    pub id: String,
    /// Form the area belongs to
    pub form: Option<String>,
    /// Name of the file input; an area without one is never bound
    pub input_name: Option<String>,
    pub files: FileSelection,
    pub dragover: bool,
    /// Text of the `.file-name` element, when the area has one
    pub name_display: Option<String>,
    /// HTML of the `.file-list` element, when the area has one
    pub file_list: Option<String>,
}

impl UploadArea {
    pub fn new(id: impl Into<String>, input_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            form: None,
            input_name: Some(input_name.into()),
            files: FileSelection::default(),
            dragover: false,
            name_display: Some(String::new()),
            file_list: Some(String::new()),
        }
    }

    pub fn in_form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    pub fn without_input(mut self) -> Self {
        self.input_name = None;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub name: String,
    pub value: String,
    pub initial: String,
}

impl TextField {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_initial(name, "")
    }

    pub fn with_initial(name: impl Into<String>, initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            name: name.into(),
            value: initial.clone(),
            initial,
        }
    }
}

/// What a form does when submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Generic multipart POST to `endpoint`, optionally followed by a redirect
    Api {
        endpoint: String,
        redirect: Option<String>,
    },
    /// Match calculator
    Match,
    /// Interview scheduler
    ScheduleInterview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub id: String,
    pub action: FormAction,
    pub fields: Vec<TextField>,
    /// The form's own `.message-container`
    pub message_area: Option<MessageArea>,
}

impl Form {
    pub fn new(id: impl Into<String>, action: FormAction) -> Self {
        Self {
            id: id.into(),
            action,
            fields: Vec::new(),
            message_area: None,
        }
    }

    pub fn api(id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new(
            id,
            FormAction::Api {
                endpoint: endpoint.into(),
                redirect: None,
            },
        )
    }

    pub fn with_redirect(mut self, url: impl Into<String>) -> Self {
        if let FormAction::Api { redirect, .. } = &mut self.action {
            *redirect = Some(url.into());
        }
        self
    }

    pub fn with_field(mut self, field: TextField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_message_area(mut self) -> Self {
        self.message_area = Some(MessageArea::default());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub name: Option<String>,
    pub id: Option<String>,
    pub form: Option<String>,
    /// The first option is the placeholder and survives repopulation
    pub options: Vec<SelectOption>,
    pub value: String,
    /// Value asked for before a matching option existed
    pub requested: Option<String>,
}

impl Select {
    pub fn named(name: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
            form: None,
            options: vec![SelectOption::new("", placeholder)],
            value: String::new(),
            requested: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn in_form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    /// Select `value` if an option carries it. Returns whether it changed.
    pub fn set_value(&mut self, value: &str) -> bool {
        if !self.has_option(value) {
            return false;
        }
        self.value = value.to_string();
        true
    }

    /// Keep the placeholder and replace every other option
    pub fn replace_options(&mut self, options: Vec<SelectOption>) {
        self.options.truncate(1);
        self.options.extend(options);

        if !self.has_option(&self.value) {
            self.value = self
                .options
                .first()
                .map(|placeholder| placeholder.value.clone())
                .unwrap_or_default();
        }

        if let Some(requested) = self.requested.take() {
            if !self.set_value(&requested) {
                self.requested = Some(requested);
            }
        }
    }

    /// Back to the placeholder, as a form reset does
    pub fn reset(&mut self) {
        self.value = self
            .options
            .first()
            .map(|placeholder| placeholder.value.clone())
            .unwrap_or_default();
    }

    fn matches(&self, key: &str) -> bool {
        self.id.as_deref() == Some(key) || self.name.as_deref() == Some(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    pub fn swapped(self) -> Self {
        match self {
            ThemeIcon::Moon => ThemeIcon::Sun,
            ThemeIcon::Sun => ThemeIcon::Moon,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ThemeIcon::Moon => "fa-moon",
            ThemeIcon::Sun => "fa-sun",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggle {
    pub icon: ThemeIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub nav: Option<NavMenu>,
    pub upload_areas: Vec<UploadArea>,
    pub forms: Vec<Form>,
    pub selects: Vec<Select>,
    /// Page level `.alert-container`
    pub alert_container: Option<MessageArea>,
    /// `#match-result-container`
    pub match_result: Option<MessageArea>,
    pub interviews_panel: Option<MessageArea>,
    pub shortlist_panel: Option<MessageArea>,
    pub theme_toggle: Option<ThemeToggle>,
    pub toasts: Vec<Toast>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nav(mut self) -> Self {
        self.nav = Some(NavMenu::default());
        self
    }

    pub fn with_upload_area(mut self, area: UploadArea) -> Self {
        self.upload_areas.push(area);
        self
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.forms.push(form);
        self
    }

    pub fn with_select(mut self, select: Select) -> Self {
        self.selects.push(select);
        self
    }

    pub fn with_alert_container(mut self) -> Self {
        self.alert_container = Some(MessageArea::default());
        self
    }

    pub fn with_match_result(mut self) -> Self {
        self.match_result = Some(MessageArea::default());
        self
    }

    pub fn with_interviews_panel(mut self) -> Self {
        self.interviews_panel = Some(MessageArea::default());
        self
    }

    pub fn with_shortlist_panel(mut self) -> Self {
        self.shortlist_panel = Some(MessageArea::default());
        self
    }

    pub fn form(&self, id: &str) -> Option<&Form> {
        self.forms.iter().find(|form| form.id == id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut Form> {
        self.forms.iter_mut().find(|form| form.id == id)
    }

    pub fn upload_area(&self, id: &str) -> Option<&UploadArea> {
        self.upload_areas.iter().find(|area| area.id == id)
    }

    pub fn upload_area_mut(&mut self, id: &str) -> Option<&mut UploadArea> {
        self.upload_areas.iter_mut().find(|area| area.id == id)
    }

    /// First select whose id, or else name, is `key`
    pub fn select(&self, key: &str) -> Option<&Select> {
        self.selects
            .iter()
            .find(|s| s.id.as_deref() == Some(key))
            .or_else(|| self.selects.iter().find(|s| s.matches(key)))
    }

    pub fn select_mut(&mut self, key: &str) -> Option<&mut Select> {
        let index = self
            .selects
            .iter()
            .position(|s| s.id.as_deref() == Some(key))
            .or_else(|| self.selects.iter().position(|s| s.matches(key)))?;
        self.selects.get_mut(index)
    }

    /// Value of the select named `name` inside `form`
    pub fn form_select_value(&self, form: &str, name: &str) -> Option<&str> {
        self.selects
            .iter()
            .find(|s| s.form.as_deref() == Some(form) && s.name.as_deref() == Some(name))
            .map(|s| s.value.as_str())
    }

    /// Where a form's messages go: its own container, else the page's
    pub fn message_area_for(&mut self, form: &str) -> Option<&mut MessageArea> {
        let has_own = self
            .form(form)
            .map(|f| f.message_area.is_some())
            .unwrap_or(false);

        if has_own {
            self.form_mut(form).and_then(|f| f.message_area.as_mut())
        } else {
            self.alert_container.as_mut()
        }
    }

    pub fn toast_mut(&mut self, id: Uuid) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|toast| toast.id == id)
    }
}

/// The application's pages, as laid out by its HTML templates
impl Page {
    pub const MATCH_FORM: &'static str = "match-form";
    pub const SCHEDULE_FORM: &'static str = "schedule-interview-form";
    pub const SHORTLIST_SELECT: &'static str = "shortlisted-job-select";

    pub fn match_page() -> Self {
        Self::new()
            .with_nav()
            .with_form(Form::new(Self::MATCH_FORM, FormAction::Match))
            .with_select(job_select().in_form(Self::MATCH_FORM))
            .with_select(candidate_select().in_form(Self::MATCH_FORM))
            .with_match_result()
    }

    pub fn schedule_page() -> Self {
        Self::new()
            .with_nav()
            .with_form(
                Form::new(Self::SCHEDULE_FORM, FormAction::ScheduleInterview)
                    .with_field(TextField::new("interview_date"))
                    .with_field(TextField::new("interview_time")),
            )
            .with_select(job_select().in_form(Self::SCHEDULE_FORM))
            .with_select(candidate_select().in_form(Self::SCHEDULE_FORM))
            .with_alert_container()
            .with_interviews_panel()
    }

    pub fn shortlist_page() -> Self {
        Self::new()
            .with_nav()
            .with_select(
                Select::named("shortlisted_job", "Select a job...")
                    .with_id(Self::SHORTLIST_SELECT),
            )
            .with_shortlist_panel()
    }
}

fn job_select() -> Select {
    Select::named("job_id", "Select a job description...")
}

fn candidate_select() -> Select {
    Select::named("candidate_id", "Select a candidate...")
}
