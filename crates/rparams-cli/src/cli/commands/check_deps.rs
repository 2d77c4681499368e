//! `rparams check-deps` – evaluate the missing-dependency notice.

use rparams_core::config::RparamsConfig;
use rparams_core::notice::{dependency_notice, StaticEnvironment};

pub fn run_check_deps(
    cfg: &RparamsConfig,
    active_plugins: Vec<String>,
    classes: Vec<String>,
    constants: Vec<String>,
    admin: bool,
    can_activate: bool,
) -> String {
    let dependency = cfg.dependency();
    let env = StaticEnvironment {
        admin,
        capabilities: if can_activate {
            vec![dependency.required_capability.clone()]
        } else {
            Vec::new()
        },
        classes,
        constants,
        active_plugins,
    };

    match dependency_notice(&env, &dependency) {
        Some(notice) => notice.to_html(),
        None => "No notice.".to_string(),
    }
}
