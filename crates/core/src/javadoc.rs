use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputLevel {
    Quiet,
    #[default]
    Verbose,
}

/// Javadoc settings of a publication.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JavadocDescriptor {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub window_title: Option<String>,
    #[serde(default)]
    pub output_level: OutputLevel,
    /// External API docs linked with `-link`
    #[serde(default)]
    pub links: Option<Vec<String>>,
}

impl JavadocDescriptor {
    /// Javadoc tool options. Titles fall back to `fallback_title`.
    #[must_use]
    pub fn options(&self, fallback_title: &str) -> Vec<String> {
        let mut options = vec![
            "-doctitle".to_string(),
            self.title.as_deref().unwrap_or(fallback_title).to_string(),
            "-windowtitle".to_string(),
            self.window_title
                .as_deref()
                .unwrap_or(fallback_title)
                .to_string(),
        ];
        for link in self.links.iter().flatten() {
            options.push("-link".to_string());
            options.push(link.clone());
        }
        options.push(
            match self.output_level {
                OutputLevel::Quiet => "-quiet",
                OutputLevel::Verbose => "-verbose",
            }
            .to_string(),
        );
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_with_fallback_titles() {
        let options = JavadocDescriptor::default().options("jvm-utilities");
        assert_eq!(
            options,
            vec![
                "-doctitle",
                "jvm-utilities",
                "-windowtitle",
                "jvm-utilities",
                "-verbose"
            ]
        );
    }

    #[test]
    fn test_options_with_links_and_quiet() {
        let javadoc = JavadocDescriptor {
            title: Some("JVM Utilities".to_string()),
            window_title: None,
            output_level: OutputLevel::Quiet,
            links: Some(vec![
                "https://docs.oracle.com/en/java/javase/11/docs/api/".to_string(),
            ]),
        };
        let options = javadoc.options("release");
        assert_eq!(options[1], "JVM Utilities");
        assert_eq!(options[3], "release");
        assert_eq!(options[4], "-link");
        assert_eq!(
            options[5],
            "https://docs.oracle.com/en/java/javase/11/docs/api/"
        );
        assert_eq!(options.last().map(String::as_str), Some("-quiet"));
    }
}
