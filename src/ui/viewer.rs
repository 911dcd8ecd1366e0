//! Interactive report viewer.
//!
//! Checks are grouped into tab groups of five in report order. The top
//! menu lists the groups with each check's glyph, then About and Quit;
//! choosing a group lists its checks and choosing a check shows its panel.
//! Esc goes back one level.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use super::icons::StatusKind;
use super::theme::RtcheckTheme;
use crate::error::{Result, RtcheckError};
use crate::report::{Report, Status};

/// Checks shown per tab group.
pub const TABS_PER_GROUP: usize = 5;

/// One check as displayed by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerTab {
    pub key: String,
    pub title: String,
    pub glyph: &'static str,
    pub status: Status,
    pub passed: bool,
    pub detail: String,
}

impl ViewerTab {
    /// Tab label: glyph directly followed by the headline.
    pub fn label(&self) -> String {
        format!("{}{}", self.glyph, self.title)
    }
}

/// Everything the viewer shows, derived once from a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerModel {
    version: String,
    tabs: Vec<ViewerTab>,
}

impl ViewerModel {
    pub fn new(report: &Report, version: impl Into<String>) -> Self {
        let tabs = report
            .records()
            .into_iter()
            .map(|record| ViewerTab {
                glyph: StatusKind::from_passed(record.passed).icon(),
                key: record.key,
                title: record.headline,
                status: record.status,
                passed: record.passed,
                detail: record.detail,
            })
            .collect();
        Self {
            version: version.into(),
            tabs,
        }
    }

    pub fn tabs(&self) -> &[ViewerTab] {
        &self.tabs
    }

    /// Tabs split into groups of [`TABS_PER_GROUP`].
    pub fn groups(&self) -> Vec<&[ViewerTab]> {
        self.tabs.chunks(TABS_PER_GROUP).collect()
    }

    pub fn all_passed(&self) -> bool {
        self.tabs.iter().all(|t| t.passed)
    }

    /// ✔ only when every check passed.
    pub fn aggregate_glyph(&self) -> &'static str {
        StatusKind::from_passed(self.all_passed()).icon()
    }

    /// Prompt for the top menu, e.g. `✘ rtcheck: 12 of 15 checks passed`.
    pub fn headline(&self) -> String {
        let passed = self.tabs.iter().filter(|t| t.passed).count();
        format!(
            "{} rtcheck: {} of {} checks passed",
            self.aggregate_glyph(),
            passed,
            self.tabs.len()
        )
    }

    /// Menu label for a tab group.
    pub fn group_label(group: &[ViewerTab]) -> String {
        group
            .iter()
            .map(ViewerTab::label)
            .collect::<Vec<_>>()
            .join("  ")
    }

    pub fn about(&self) -> String {
        format!(
            "rtcheck - version {}\n\nrtcheck inspects a Linux host and reports how well it is \
             set up for low-latency real-time audio work.",
            self.version
        )
    }
}

/// Text of a check's panel.
pub fn render_panel(tab: &ViewerTab, theme: &RtcheckTheme) -> String {
    let kind = StatusKind::from_passed(tab.passed);
    let mut panel = format!(
        "{} {}\n{}\n",
        kind.styled(theme),
        theme.headline.apply_to(&tab.title),
        "=".repeat(tab.title.chars().count() + 2)
    );
    panel.push_str(&tab.detail);
    panel.push('\n');
    panel
}

/// Convert dialoguer errors to RtcheckError.
fn map_dialoguer_err(e: dialoguer::Error) -> RtcheckError {
    RtcheckError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Run the viewer until the user quits.
pub fn run_viewer(model: &ViewerModel, term: &Term, theme: &RtcheckTheme) -> Result<()> {
    let prompt_theme = prompt_theme();
    let groups = model.groups();

    let mut items: Vec<String> = groups.iter().map(|g| ViewerModel::group_label(g)).collect();
    let about = items.len();
    items.push("About".to_string());
    items.push("Quit".to_string());

    loop {
        let choice = Select::with_theme(&prompt_theme)
            .with_prompt(model.headline())
            .items(&items)
            .default(0)
            .interact_on_opt(term)
            .map_err(map_dialoguer_err)?;

        match choice {
            Some(index) if index < about => show_group(groups[index], term, theme, &prompt_theme)?,
            Some(index) if index == about => {
                term.write_line(&model.about())?;
                term.write_line("")?;
            }
            _ => return Ok(()),
        }
    }
}

fn show_group(
    group: &[ViewerTab],
    term: &Term,
    theme: &RtcheckTheme,
    prompt_theme: &ColorfulTheme,
) -> Result<()> {
    let mut items: Vec<String> = group.iter().map(ViewerTab::label).collect();
    items.push("Back".to_string());

    loop {
        let choice = Select::with_theme(prompt_theme)
            .with_prompt("Select a check")
            .items(&items)
            .default(0)
            .interact_on_opt(term)
            .map_err(map_dialoguer_err)?;

        match choice {
            Some(index) if index < group.len() => {
                term.write_line(&render_panel(&group[index], theme))?;
            }
            _ => return Ok(()),
        }
    }
}
