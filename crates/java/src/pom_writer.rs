use anyhow::{Context, Result};
use pomkit_core::{MavenPublication, PomDeveloper};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;
use std::path::{Path, PathBuf};

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

type PomWriter = Writer<Cursor<Vec<u8>>>;

/// Render the `pom.xml` of an assembled publication.
///
/// # Errors
/// Returns error if writing the XML fails.
pub fn render_pom(publication: &MavenPublication) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    let pom = &publication.pom;

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("project").with_attributes([
        ("xmlns", POM_NAMESPACE),
        ("xmlns:xsi", XSI_NAMESPACE),
        ("xsi:schemaLocation", POM_SCHEMA_LOCATION),
    ])))?;

    text_element(&mut writer, "modelVersion", "4.0.0")?;
    text_element(&mut writer, "groupId", &publication.group_id)?;
    text_element(&mut writer, "artifactId", &publication.artifact_id)?;
    text_element(&mut writer, "version", &publication.version)?;
    text_element(&mut writer, "name", &pom.name)?;
    optional_element(&mut writer, "description", pom.description.as_deref())?;
    text_element(&mut writer, "url", &pom.url)?;

    if !pom.licenses.is_empty() {
        start(&mut writer, "licenses")?;
        for license in &pom.licenses {
            start(&mut writer, "license")?;
            text_element(&mut writer, "name", &license.name)?;
            text_element(&mut writer, "url", &license.url)?;
            end(&mut writer, "license")?;
        }
        end(&mut writer, "licenses")?;
    }

    if !pom.developers.is_empty() {
        start(&mut writer, "developers")?;
        for developer in &pom.developers {
            write_developer(&mut writer, developer)?;
        }
        end(&mut writer, "developers")?;
    }

    if let Some(scm) = &pom.scm {
        start(&mut writer, "scm")?;
        text_element(&mut writer, "connection", &scm.connection)?;
        text_element(&mut writer, "developerConnection", &scm.developer_connection)?;
        text_element(&mut writer, "url", &scm.url)?;
        end(&mut writer, "scm")?;
    }

    end(&mut writer, "project")?;

    let mut result = writer.into_inner().into_inner();
    result.push(b'\n');
    String::from_utf8(result).context("Failed to convert POM to UTF-8")
}

/// Where Gradle's maven-publish plugin puts the generated POM of a publication.
pub fn pom_output_path(root: &Path, publication: &MavenPublication) -> PathBuf {
    root.join("build")
        .join("publications")
        .join(&publication.name)
        .join("pom-default.xml")
}

fn write_developer(writer: &mut PomWriter, developer: &PomDeveloper) -> Result<()> {
    start(writer, "developer")?;
    text_element(writer, "id", &developer.id)?;
    optional_element(writer, "name", developer.name.as_deref())?;
    optional_element(writer, "email", developer.email.as_deref())?;
    optional_element(writer, "url", developer.url.as_deref())?;
    optional_element(writer, "organization", developer.organization.as_deref())?;
    optional_element(
        writer,
        "organizationUrl",
        developer.organization_url.as_deref(),
    )?;
    if !developer.roles.is_empty() {
        start(writer, "roles")?;
        for role in &developer.roles {
            text_element(writer, "role", role)?;
        }
        end(writer, "roles")?;
    }
    optional_element(writer, "timezone", developer.timezone.as_deref())?;
    end(writer, "developer")
}

fn start(writer: &mut PomWriter, name: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end(writer: &mut PomWriter, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn text_element(writer: &mut PomWriter, name: &str, value: &str) -> Result<()> {
    start(writer, name)?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    end(writer, name)
}

fn optional_element(writer: &mut PomWriter, name: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(value) => text_element(writer, name, value),
        None => Ok(()),
    }
}
