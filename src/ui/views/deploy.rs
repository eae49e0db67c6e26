use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use raspberry_web_deploy::domain::ports::{DeployEvent, DeployEventSink};
use raspberry_web_deploy::domain::value_objects::{CopyKind, DirStatus, SkipReason, SyncOutcome};
use raspberry_web_deploy::DeployReport;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::Tone;

pub fn render_deploy_header(
    build_root: &Path,
    destdir: Option<&Path>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = ColoredText::new("raspberry-web install", Tone::Info)
        .bold()
        .render(supports_color);
    let mut out = format!(
        "{} {}\nBuild root: {}\n",
        Icon::Deploy.colored(supports_color, supports_unicode),
        title,
        build_root.display()
    );
    if let Some(destdir) = destdir {
        out.push_str(&format!("Destdir: {}\n", destdir.display()));
    }
    out
}

/// One status line per event; `None` for events this verbosity hides.
pub fn render_event(event: &DeployEvent, ui: &UiContext) -> Option<String> {
    let (color, unicode) = (ui.color, ui.unicode);
    let icon = |icon: Icon| icon.colored(color, unicode);

    let line = match event {
        DeployEvent::StateChanged { from, to } => {
            if ui.verbose == 0 {
                return None;
            }
            ColoredText::dim(format!(
                "state {} {} {}",
                from,
                Icon::Transition.render(unicode),
                to
            ))
            .render(color)
        }
        DeployEvent::PlatformDetected { platform } => {
            format!("{} Platform: {}", icon(Icon::Arrow), platform)
        }
        DeployEvent::SourceFound { path, .. } => {
            format!("{} Found source file {}", icon(Icon::Success), path.display())
        }
        DeployEvent::SourceMissing { path, .. } => {
            format!(
                "{} {}",
                icon(Icon::Error),
                ColoredText::error(format!("Source file not present: {}", path.display()))
                    .render(color)
            )
        }
        DeployEvent::DirectoryReady { path, status } => match status {
            DirStatus::Created => format!(
                "{} Created directory {}",
                icon(Icon::Success),
                path.display()
            ),
            DirStatus::AlreadyExists => format!(
                "{} {} is already present",
                icon(Icon::Pending),
                path.display()
            ),
        },
        DeployEvent::ItemSynced { target, outcome, .. } => match outcome {
            SyncOutcome::Copied(CopyKind::NewFile) => {
                format!("{} Added file {}", icon(Icon::Success), target.display())
            }
            SyncOutcome::Copied(CopyKind::NewVersion) => format!(
                "{} Added new version of file {}",
                icon(Icon::Success),
                target.display()
            ),
            SyncOutcome::Skipped(SkipReason::Unchanged) => format!(
                "{} {} already present in same version",
                icon(Icon::Pending),
                target.display()
            ),
            SyncOutcome::Skipped(SkipReason::AlreadyPresent) => format!(
                "{} {} already present",
                icon(Icon::Pending),
                target.display()
            ),
        },
        DeployEvent::ItemExcluded {
            item,
            target,
            platform,
        } => format!(
            "{} Not adding {} {} since we are running {}",
            icon(Icon::Pending),
            item,
            target.display(),
            platform
        ),
        DeployEvent::PermissionsApplied { target, mode, .. } => {
            if ui.verbose == 0 {
                return None;
            }
            format!(
                "{} Set mode {} on {}",
                icon(Icon::Arrow),
                mode,
                target.display()
            )
        }
        DeployEvent::ItemFailed { item, error } => format!(
            "{} {}",
            icon(Icon::Error),
            ColoredText::error(format!("{} failed: {}", item, error)).render(color)
        ),
        DeployEvent::Completed { .. } => return None,
    };

    Some(line)
}

const SERVICE_NEXT_STEP: &str = "systemctl daemon-reload && systemctl enable --now raspberry-web";

pub fn render_deploy_summary(
    report: &DeployReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::new("Done.")
        .count(report.copied_count(), "files copied")
        .count(report.skipped_count(), "already up to date");
    if report.excluded_count() > 0 {
        summary = summary.count(
            report.excluded_count(),
            format!("skipped on {}", report.platform),
        );
    }
    if report.created_dir_count() > 0 {
        summary = summary.note(format!(
            "{} directories created",
            report.created_dir_count()
        ));
    }

    let service_installed = report
        .outcome("service")
        .is_some_and(|outcome| outcome.copied());
    if service_installed {
        summary = summary.next_step(SERVICE_NEXT_STEP);
    }

    summary.render(supports_color, supports_unicode)
}

/// Prints status lines to stdout as the run progresses.
pub struct ConsoleEventSink {
    ui: UiContext,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self {
            ui,
            out: Mutex::new(Box::new(std::io::stdout())),
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Some(line) = render_event(&event, &self.ui) else {
            return;
        };
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }

    fn wants_state_events(&self) -> bool {
        self.ui.verbose > 0
    }
}
