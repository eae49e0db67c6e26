use raspberry_web_deploy::config::ConfigWarning;
use raspberry_web_deploy::domain::value_objects::FailureKind;
use raspberry_web_deploy::DeployError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::primitives::icon::Icon;

const PERMISSION_FIX: &str = "Check ownership of the target location, or re-run with sudo. \
     Items listed above as added stay installed.";

const BUILD_FIX: &str = "Run `cargo build --release` first, \
     and run the installer from scripts/ or pass --build-root.";

fn step_name(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::UnsupportedPlatform => "platform detection",
        FailureKind::MissingSource => "source validation",
        FailureKind::DirectoryCreateFailed => "directory provisioning",
        FailureKind::CopyFailed => "copy",
        FailureKind::PermissionSetFailed => "setting permissions",
        FailureKind::InvalidConfig => "configuration",
        FailureKind::Io => "io",
    }
}

pub fn format_deploy_error(
    err: &DeployError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let kind = FailureKind::from(err);
    let mut block = ErrorBlock::new(step_name(kind), err.to_string());
    if let Some(path) = err.path() {
        block = block.with_path(path);
    }

    let fix = match err {
        DeployError::UnsupportedPlatform { .. } => {
            Some("Only Linux and Darwin hosts are supported.")
        }
        DeployError::MissingSource { .. } => Some(BUILD_FIX),
        DeployError::DirectoryCreateFailed { .. }
        | DeployError::CopyFailed { .. }
        | DeployError::PermissionSetFailed { .. } => Some(PERMISSION_FIX),
        DeployError::InvalidConfig { .. } => Some("Fix or remove the config file and try again."),
        DeployError::Io(_) => None,
    };

    if let Some(fix) = fix {
        block = if err.is_precondition() {
            block.with_fix(format!("{fix} Nothing was changed."))
        } else {
            block.with_fix(fix)
        };
    }

    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::TerminalCapabilities::detect();
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return format_deploy_error(deploy, caps.supports_color, caps.supports_unicode);
    }

    format!("{} {}\n", Icon::Error.render(caps.supports_unicode), err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(deploy) = err.downcast_ref::<DeployError>() {
            output["kind"] = serde_json::Value::String(FailureKind::from(deploy).to_string());
            if let Some(path) = deploy.path() {
                output["path"] = serde_json::Value::String(path.display().to_string());
            }
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}

pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool) {
    let unicode = crate::ui::terminal::TerminalCapabilities::detect().supports_unicode;
    for w in warnings {
        if json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "message": w.to_string(),
            }));
            continue;
        }

        if let Some(line) = w.line {
            eprintln!(
                "{} Unknown config key '{}' in {}:{}",
                Icon::Warning.render(unicode),
                w.key,
                w.file.display(),
                line
            );
        } else {
            eprintln!(
                "{} Unknown config key '{}' in {}",
                Icon::Warning.render(unicode),
                w.key,
                w.file.display()
            );
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
