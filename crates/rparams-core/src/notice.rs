//! Admin warning shown when the host redirection system is missing.

use crate::config::DependencyConfig;

/// Text of the missing-dependency warning.
pub const MISSING_DEPENDENCY_MESSAGE: &str = "Redirection Params & Logging Enhancer requires the \
Redirection plugin to be active. Please activate or install \"Redirection\" to enable full functionality.";

/// Host platform queries the notice needs.
pub trait HostEnvironment {
    /// Whether the current request renders an administration screen.
    fn is_admin(&self) -> bool;
    fn current_user_can(&self, capability: &str) -> bool;
    fn class_exists(&self, name: &str) -> bool;
    fn is_defined(&self, constant: &str) -> bool;
    fn is_plugin_active(&self, slug: &str) -> bool;
}

/// Fixed answers to every [`HostEnvironment`] query.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    pub admin: bool,
    pub capabilities: Vec<String>,
    pub classes: Vec<String>,
    pub constants: Vec<String>,
    pub active_plugins: Vec<String>,
}

impl HostEnvironment for StaticEnvironment {
    fn is_admin(&self) -> bool {
        self.admin
    }

    fn current_user_can(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }

    fn class_exists(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    fn is_defined(&self, constant: &str) -> bool {
        self.constants.iter().any(|c| c == constant)
    }

    fn is_plugin_active(&self, slug: &str) -> bool {
        self.active_plugins.iter().any(|p| p == slug)
    }
}

/// A warning notice for the admin screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminNotice {
    pub message: String,
    pub dismissible: bool,
}

impl AdminNotice {
    /// Notice markup with the message HTML-escaped.
    pub fn to_html(&self) -> String {
        let class = if self.dismissible {
            "notice notice-warning is-dismissible"
        } else {
            "notice notice-warning"
        };
        format!(
            "<div class=\"{class}\"><p>{}</p></div>",
            escape_html(&self.message)
        )
    }
}

/// Whether the host redirection system appears to be loaded or active.
pub fn redirection_available<E>(env: &E, cfg: &DependencyConfig) -> bool
where
    E: HostEnvironment + ?Sized,
{
    cfg.marker_classes.iter().any(|c| env.class_exists(c))
        || cfg.marker_constants.iter().any(|k| env.is_defined(k))
        || env.is_plugin_active(&cfg.plugin_slug)
}

/// Builds the missing-dependency notice, if one should be shown.
///
/// Nothing is shown outside the admin area, to users lacking
/// `cfg.required_capability`, or when the redirection system is present.
pub fn dependency_notice<E>(env: &E, cfg: &DependencyConfig) -> Option<AdminNotice>
where
    E: HostEnvironment + ?Sized,
{
    if !env.is_admin() || !env.current_user_can(&cfg.required_capability) {
        return None;
    }

    if redirection_available(env, cfg) {
        return None;
    }

    tracing::warn!(plugin = %cfg.plugin_slug, "redirection system not active");
    Some(AdminNotice {
        message: MISSING_DEPENDENCY_MESSAGE.to_string(),
        dismissible: true,
    })
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}
