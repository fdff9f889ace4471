use std::fmt;

/// Reasons the app refuses to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    LeafletMissing,
    MissingElement(&'static str),
    Leaflet(String),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeafletMissing => write!(f, "Leaflet failed to load."),
            Self::MissingElement(what) => write!(f, "Required element is missing: {what}"),
            Self::Leaflet(msg) => write!(f, "Leaflet map initialization failed: {msg}"),
        }
    }
}

impl std::error::Error for StartupError {}

pub fn report(err: &StartupError) {
    web_sys::console::error_1(&err.to_string().into());
}

#[cfg(test)]
mod tests {
    use super::StartupError;

    #[test]
    fn messages() {
        assert_eq!(StartupError::LeafletMissing.to_string(), "Leaflet failed to load.");
        assert_eq!(
            StartupError::MissingElement("map container").to_string(),
            "Required element is missing: map container"
        );
        assert_eq!(
            StartupError::Leaflet("Map container is already initialized.".into()).to_string(),
            "Leaflet map initialization failed: Map container is already initialized."
        );
    }
}
