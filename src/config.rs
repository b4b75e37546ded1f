use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Prognosa";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port, overridable via PROGNOSA_PORT.
pub const DEFAULT_PORT: u16 = 8080;

pub fn default_log_filter() -> &'static str {
    "info,prognosa=debug"
}

/// Get the application data directory
/// ~/Prognosa/ on all platforms (user-visible, by design)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Prognosa")
}

/// Path of the patient record database.
pub fn database_path() -> PathBuf {
    app_data_dir().join("patients.db")
}

/// HTTP port, from PROGNOSA_PORT when set and parseable.
pub fn api_port() -> u16 {
    std::env::var("PROGNOSA_PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Optional path of a JSON knowledge file replacing the built-in
/// condition table, from PROGNOSA_KNOWLEDGE.
pub fn knowledge_file() -> Option<PathBuf> {
    std::env::var("PROGNOSA_KNOWLEDGE").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Prognosa"));
    }

    #[test]
    fn database_path_under_app_data() {
        let db = database_path();
        assert!(db.starts_with(app_data_dir()));
        assert!(db.ends_with("patients.db"));
    }

    #[test]
    fn app_name_is_prognosa() {
        assert_eq!(APP_NAME, "Prognosa");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
