use crate::time::Time;
use serde::{Deserialize, Serialize};

/// The attributes of a bookmark to be created.
///
/// Immutable once built; assemble one with [`Pin::new`]:
///
/// ```
/// use pinboard_poster::Pin;
///
/// let pin = Pin::new("https://www.example.com/", "Example")
///     .extended("A site about examples.")
///     .tags(["test", "example"])
///     .toread(true)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// The URL of the bookmark
    pub url: String,
    /// The title of the bookmark
    pub description: String,
    /// Extended notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<String>,
    /// Up to 100 tags, order preserved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Creation time of the bookmark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt: Option<Time>,
    /// Replace any existing bookmark with the same URL
    pub replace: bool,
    /// Make the bookmark public
    pub shared: bool,
    /// Mark the bookmark as unread
    pub toread: bool,
}

impl Pin {
    /// Start building a pin from its two required fields
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> PinBuilder {
        PinBuilder {
            pin: Pin {
                url: url.into(),
                description: description.into(),
                extended: None,
                tags: Vec::new(),
                dt: None,
                replace: true,
                shared: true,
                toread: false,
            },
        }
    }

    /// Tags serialized the way the API wants them, space-joined
    pub fn tags_param(&self) -> String {
        self.tags.join(" ")
    }
}

/// Builder for [`Pin`], with the service's defaults: public, replace
/// allowed, not read-later.
#[derive(Debug, Clone)]
pub struct PinBuilder {
    pin: Pin,
}

impl PinBuilder {
    /// The extended description of the bookmark
    pub fn extended(mut self, extended: impl Into<String>) -> Self {
        self.pin.extended = Some(extended.into());
        self
    }

    /// Add a single tag, ignoring duplicates
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.pin.tags.contains(&tag) {
            self.pin.tags.push(tag);
        }
        self
    }

    /// Add tags in order, ignoring duplicates
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self = self.tag(tag);
        }
        self
    }

    /// The creation time of the bookmark
    pub fn dt(mut self, dt: impl Into<Time>) -> Self {
        self.pin.dt = Some(dt.into());
        self
    }

    /// Replace any existing bookmark with the same URL. Default `true`.
    pub fn replace(mut self, replace: bool) -> Self {
        self.pin.replace = replace;
        self
    }

    /// Make the bookmark public. Default `true`.
    pub fn shared(mut self, shared: bool) -> Self {
        self.pin.shared = shared;
        self
    }

    /// Mark the bookmark as unread. Default `false`.
    pub fn toread(mut self, toread: bool) -> Self {
        self.pin.toread = toread;
        self
    }

    /// Finish building the pin
    pub fn build(self) -> Pin {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_builder_defaults() {
        let pin = Pin::new("https://www.example.com/", "Example").build();

        assert_eq!(pin.url, "https://www.example.com/");
        assert_eq!(pin.description, "Example");
        assert_eq!(pin.extended, None);
        assert!(pin.tags.is_empty());
        assert_eq!(pin.dt, None);
        assert!(pin.replace);
        assert!(pin.shared);
        assert!(!pin.toread);
    }

    #[test]
    fn test_builder_fields() {
        let dt = Utc.with_ymd_and_hms(2023, 4, 1, 0, 0, 0).unwrap();
        let pin = Pin::new("https://www.example.com/", "Example")
            .extended("notes")
            .tags(["test", "java"])
            .dt(dt)
            .replace(false)
            .shared(false)
            .toread(true)
            .build();

        assert_eq!(pin.extended.as_deref(), Some("notes"));
        assert_eq!(pin.tags, vec!["test", "java"]);
        assert_eq!(pin.dt.unwrap().unix(), dt.timestamp());
        assert!(!pin.replace);
        assert!(!pin.shared);
        assert!(pin.toread);
    }

    #[test]
    fn test_tags_keep_order_and_drop_duplicates() {
        let pin = Pin::new("https://www.example.com/", "Example")
            .tag("rust")
            .tags(["test", "rust", "java", "test"])
            .build();

        assert_eq!(pin.tags, vec!["rust", "test", "java"]);
    }

    #[test]
    fn test_tags_param_is_space_joined() {
        let pin = Pin::new("https://www.example.com/", "Example")
            .tags(["test", "java"])
            .build();

        assert_eq!(pin.tags_param(), "test java");
    }

    #[test]
    fn test_pin_serde() {
        let pin = Pin::new("https://www.example.com/", "Example")
            .tags(["test"])
            .build();

        let json = serde_json::to_string(&pin).unwrap();
        let back: Pin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pin);
    }
}
