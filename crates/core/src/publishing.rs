use crate::{error::PublishError, maven_publication::MavenPublication};

/// Registered publications, in registration order.
#[derive(Debug, Default)]
pub struct Publishing {
    publications: Vec<MavenPublication>,
}

impl Publishing {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Returns error if a publication with the same name is already registered.
    pub fn register(&mut self, publication: MavenPublication) -> Result<(), PublishError> {
        if self.get(&publication.name).is_some() {
            return Err(PublishError::DuplicatePublication(publication.name));
        }
        self.publications.push(publication);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MavenPublication> {
        self.publications.iter().find(|p| p.name == name)
    }

    /// # Errors
    /// Returns error if no publication has this name.
    pub fn require(&self, name: &str) -> Result<&MavenPublication, PublishError> {
        self.get(name)
            .ok_or_else(|| PublishError::UnknownPublication(name.to_string()))
    }

    pub fn publications(&self) -> &[MavenPublication] {
        &self.publications
    }

    pub fn names(&self) -> Vec<&str> {
        self.publications.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }
}
