use crate::config::Settings;

/// Settings for this run, plus why the defaults were used instead of the
/// config file, if they were.
pub fn load_settings() -> (Settings, Option<String>) {
    settings_or_defaults(Settings::load())
}

fn settings_or_defaults(
    loaded: Result<Settings, ::config::ConfigError>,
) -> (Settings, Option<String>) {
    let rejected = match loaded {
        Ok(settings) => match settings.validate() {
            Ok(()) => return (settings, None),
            Err(msg) => format!("invalid config ({msg}), using defaults"),
        },
        Err(e) => format!("cannot load config ({e}), using defaults"),
    };
    (Settings::default(), Some(rejected))
}
