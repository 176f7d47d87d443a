use pomkit_core::{
    DeveloperDescriptor, MavenPublication, Pom, PomDeveloper, PomLicense, PomScm,
    ProjectDefaults, PublicationDescriptor, PublishError, Publishing, PublishingHost,
};

/// Assemble one publication from its descriptor.
///
/// Group and version fall back to `defaults`, the artifact id to the POM's own artifact id.
/// The component and the javadoc/sources jars are attached when the host knows them and
/// skipped otherwise.
///
/// # Errors
/// Returns [`PublishError::MissingArtifactId`] when no artifact id can be resolved.
pub fn assemble<H: PublishingHost + ?Sized>(
    descriptor: &PublicationDescriptor,
    defaults: &ProjectDefaults,
    host: &H,
) -> Result<MavenPublication, PublishError> {
    let artifact_id = descriptor
        .artifact_id
        .as_ref()
        .or(descriptor.pom.artifact_id.as_ref())
        .ok_or_else(|| PublishError::MissingArtifactId {
            publication: descriptor.name.clone(),
        })?
        .clone();
    let group_id = descriptor
        .group_id
        .clone()
        .unwrap_or_else(|| defaults.group.clone());
    let base_version = descriptor.version.as_deref().unwrap_or(&defaults.version);
    let version = if descriptor.is_snapshot {
        format!("{base_version}-SNAPSHOT")
    } else {
        base_version.to_string()
    };

    let component = host.find_component(&descriptor.component);
    if component.is_none() {
        tracing::debug!(
            "Component '{}' not found for publication '{}'",
            descriptor.component,
            descriptor.name
        );
    }

    let artifacts = descriptor
        .javadoc
        .task_names()
        .filter_map(|task| {
            let artifact = host.find_artifact(task);
            if artifact.is_none() {
                tracing::debug!(
                    "Task '{task}' not found for publication '{}'",
                    descriptor.name
                );
            }
            artifact
        })
        .collect();

    Ok(MavenPublication {
        name: descriptor.name.clone(),
        group_id,
        artifact_id,
        version,
        component,
        artifacts,
        pom: configure_pom(descriptor),
    })
}

/// Assemble and register every descriptor, stopping at the first failure.
///
/// # Errors
/// Returns error if a publication cannot be assembled or its name is taken.
pub fn register_publications<H: PublishingHost + ?Sized>(
    descriptors: &[PublicationDescriptor],
    defaults: &ProjectDefaults,
    host: &H,
) -> Result<Publishing, PublishError> {
    let mut publishing = Publishing::new();
    for descriptor in descriptors {
        publishing.register(assemble(descriptor, defaults, host)?)?;
    }
    Ok(publishing)
}

fn configure_pom(descriptor: &PublicationDescriptor) -> Pom {
    let pom = &descriptor.pom;

    let scm = pom.scm.as_ref().map(|scm| {
        // A blank SCM url points at the artifact url instead
        let scm = if scm.url.trim().is_empty() {
            scm.with_url(&pom.artifact_url)
        } else {
            scm.clone()
        };
        PomScm {
            url: scm.valid_url(),
            connection: scm.valid_connection(false),
            developer_connection: scm.valid_connection(true),
        }
    });

    Pom {
        url: pom.artifact_url.clone(),
        name: descriptor.name.clone(),
        description: pom.description.clone(),
        licenses: pom
            .licenses
            .iter()
            .map(|license| PomLicense {
                name: license.name.clone(),
                url: license.url.clone(),
            })
            .collect(),
        developers: pom.developers.iter().map(configure_developer).collect(),
        scm,
    }
}

fn configure_developer(developer: &DeveloperDescriptor) -> PomDeveloper {
    PomDeveloper {
        id: developer.id.clone(),
        name: developer.name.clone(),
        email: developer.email.clone(),
        organization: developer.organization.clone(),
        organization_url: developer.organization_url.clone(),
        roles: developer.roles.clone().unwrap_or_default(),
        timezone: developer.timezone.clone(),
        url: developer.url.clone(),
    }
}
