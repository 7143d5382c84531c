use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use aws_profile::commands::set::SetWorkflow;
use aws_profile::config::AppPaths;
use aws_profile::error::{AppError, AppResult};
use aws_profile::profile::ProfileCatalog;
use aws_profile::select::{ProfileSelector, SelectionError};
use aws_profile::store::{ConfigFile, ConfigReader, ConfigWriter};

const CREDENTIALS_PATH: &str = "/aws/credentials";
const CONFIG_PATH: &str = "/aws/config";

const CREDENTIALS: &str = "\
[default]
aws_access_key_id = default-id
aws_secret_access_key = default-secret
aws_session_token = stale-token

[profile-1]
aws_access_key_id = 1-id
aws_secret_access_key = 1-secret

[profile-2]
aws_access_key_id = 2-id
aws_secret_access_key = 2-secret

[shared]
aws_access_key_id = shared-id
aws_secret_access_key = shared-secret
";

const CONFIG: &str = "\
[default]
role_arn = old-arn
source_profile = old-source
region = ap-southeast-2
mfa_serial = old-mfa

[profile profile-1]
region = us-east-2

[profile profile-3]
role_arn = arn2
source_profile = src2

[profile assumed-1]
role_arn = arn:aws:iam::1:role/assumed-1
source_profile = profile-1
region = us-west-2

[profile shared]
role_arn = arn:shared
source_profile = profile-2
";

struct MemoryReader {
    files: HashMap<&'static str, &'static str>,
}

impl MemoryReader {
    fn standard() -> Self {
        Self {
            files: HashMap::from([(CREDENTIALS_PATH, CREDENTIALS), (CONFIG_PATH, CONFIG)]),
        }
    }

    fn with(path: &'static str, contents: &'static str) -> Self {
        let mut reader = Self::standard();
        reader.files.insert(path, contents);
        reader
    }

    fn without(path: &'static str) -> Self {
        let mut reader = Self::standard();
        reader.files.remove(path);
        reader
    }
}

impl ConfigReader for MemoryReader {
    fn read(&self, path: &str) -> AppResult<ConfigFile> {
        let raw = self
            .files
            .get(path)
            .ok_or_else(|| AppError::FileNotFound(PathBuf::from(path)))?;
        raw.parse::<ConfigFile>().map_err(|source| AppError::Parse {
            path: PathBuf::from(path),
            source,
        })
    }
}

#[derive(Default)]
struct RecordingWriter {
    writes: RefCell<Vec<(String, ConfigFile)>>,
    fail_on: Option<&'static str>,
}

impl RecordingWriter {
    fn failing_on(path: &'static str) -> Self {
        Self {
            fail_on: Some(path),
            ..Self::default()
        }
    }

    fn written(&self, path: &str) -> Option<ConfigFile> {
        self.writes
            .borrow()
            .iter()
            .find(|(written, _)| written == path)
            .map(|(_, file)| file.clone())
    }

    fn paths(&self) -> Vec<String> {
        self.writes.borrow().iter().map(|(path, _)| path.clone()).collect()
    }
}

impl ConfigWriter for RecordingWriter {
    fn write(&self, file: &ConfigFile, path: &str) -> AppResult<()> {
        if self.fail_on == Some(path) {
            return Err(AppError::Write {
                path: PathBuf::from(path),
                source: io::Error::other("disk full"),
            });
        }

        self.writes
            .borrow_mut()
            .push((path.to_string(), file.clone()));
        Ok(())
    }
}

enum Pick {
    Name(&'static str),
    Cancel,
    Fail(&'static str),
}

struct StubSelector {
    pick: Pick,
    calls: Cell<usize>,
    seen_pattern: RefCell<Option<String>>,
    seen_names: RefCell<Vec<String>>,
}

impl StubSelector {
    fn new(pick: Pick) -> Self {
        Self {
            pick,
            calls: Cell::new(0),
            seen_pattern: RefCell::new(None),
            seen_names: RefCell::new(Vec::new()),
        }
    }
}

impl ProfileSelector for StubSelector {
    fn select_profile(
        &self,
        catalog: &ProfileCatalog,
        pattern: &str,
    ) -> Result<String, SelectionError> {
        self.calls.set(self.calls.get() + 1);
        *self.seen_pattern.borrow_mut() = Some(pattern.to_string());
        *self.seen_names.borrow_mut() = catalog
            .display_profile_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        match self.pick {
            Pick::Name(name) => Ok(name.to_string()),
            Pick::Cancel => Err(SelectionError::Cancelled),
            Pick::Fail(message) => Err(SelectionError::Failed(message.to_string())),
        }
    }
}

fn paths() -> AppPaths {
    AppPaths::new(CREDENTIALS_PATH, CONFIG_PATH, "/aws-profile/config.yaml")
}

fn default_value(file: &ConfigFile, key: &str) -> Option<String> {
    file.section("default")
        .and_then(|section| section.get(key))
        .map(str::to_string)
}

#[test]
fn fails_when_credentials_file_is_missing() {
    let paths = paths();
    let reader = MemoryReader::without(CREDENTIALS_PATH);
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("profile-1"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(!outcome.success);
    assert!(outcome.message.contains("Fail to read AWS credentials file"));
    assert_eq!(selector.calls.get(), 0);
}

#[test]
fn fails_when_config_file_is_malformed() {
    let paths = paths();
    let reader = MemoryReader::with(CONFIG_PATH, "[default\nregion = x\n");
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("profile-1"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(!outcome.success);
    assert!(outcome.message.contains("Fail to read AWS config file"));
    assert!(outcome.message.contains("line 1"));
    assert!(writer.paths().is_empty());
}

#[test]
fn hands_catalog_and_pattern_to_selector() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Cancel);

    SetWorkflow::new(&paths, &reader, &writer, &selector).run("prof");

    assert_eq!(selector.seen_pattern.borrow().as_deref(), Some("prof"));
    assert_eq!(
        *selector.seen_names.borrow(),
        [
            "profile-1",
            "profile-2",
            "shared",
            "assume profile-3",
            "assume assumed-1",
            "assume shared",
        ]
    );
}

#[test]
fn credentials_profile_updates_both_files() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("profile-1\n"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(outcome.message, "=== [profile-1] -> [default] (/aws/credentials)");
    assert_eq!(writer.paths(), [CREDENTIALS_PATH, CONFIG_PATH]);

    let credentials = writer.written(CREDENTIALS_PATH).expect("credentials written");
    assert_eq!(default_value(&credentials, "aws_access_key_id").as_deref(), Some("1-id"));
    assert_eq!(
        default_value(&credentials, "aws_secret_access_key").as_deref(),
        Some("1-secret")
    );
    assert_eq!(default_value(&credentials, "aws_session_token"), None);

    let config = writer.written(CONFIG_PATH).expect("config written");
    assert_eq!(default_value(&config, "region").as_deref(), Some("us-east-2"));
    assert_eq!(default_value(&config, "role_arn"), None);
    assert_eq!(default_value(&config, "source_profile"), None);
    assert_eq!(default_value(&config, "mfa_serial"), None);
}

#[test]
fn credentials_profile_without_config_entry_clears_region() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("profile-2"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(outcome.success);
    let config = writer.written(CONFIG_PATH).expect("config written");
    assert_eq!(default_value(&config, "region"), None);
}

#[test]
fn assumed_profile_updates_config_only() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("assumed-1"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(outcome.message, "=== [assumed-1] -> [default] (/aws/config)");
    assert_eq!(writer.paths(), [CONFIG_PATH]);

    let config = writer.written(CONFIG_PATH).expect("config written");
    assert_eq!(
        default_value(&config, "role_arn").as_deref(),
        Some("arn:aws:iam::1:role/assumed-1")
    );
    assert_eq!(default_value(&config, "source_profile").as_deref(), Some("profile-1"));
    assert_eq!(default_value(&config, "region").as_deref(), Some("us-west-2"));
    assert_eq!(default_value(&config, "mfa_serial"), None);
}

#[test]
fn assumed_profile_without_region_clears_default_region() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("profile-3"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(outcome.success);
    let config = writer.written(CONFIG_PATH).expect("config written");
    assert_eq!(default_value(&config, "role_arn").as_deref(), Some("arn2"));
    assert_eq!(default_value(&config, "source_profile").as_deref(), Some("src2"));
    assert_eq!(default_value(&config, "region"), None);
}

#[test]
fn credentials_match_takes_precedence() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("shared"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(outcome.success);
    assert!(outcome.message.ends_with("(/aws/credentials)"));
    let config = writer.written(CONFIG_PATH).expect("config written");
    assert_eq!(default_value(&config, "role_arn"), None);
}

#[test]
fn unknown_selection_is_reported() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("nope"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(!outcome.success);
    assert!(
        outcome
            .message
            .contains("not found in either credentials or config file")
    );
    assert!(writer.paths().is_empty());
}

#[test]
fn decorated_display_name_does_not_resolve() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("assume assumed-1"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(!outcome.success);
    assert!(writer.paths().is_empty());
}

#[test]
fn cancellation_is_a_silent_success() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Cancel);

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(outcome.success);
    assert!(outcome.message.is_empty());
    assert!(writer.paths().is_empty());
}

#[test]
fn selector_failure_aborts_before_writing() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Fail("terminal went away"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Failed to select profile: terminal went away");
    assert!(writer.paths().is_empty());
}

#[test]
fn credentials_write_failure_stops_before_config() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::failing_on(CREDENTIALS_PATH);
    let selector = StubSelector::new(Pick::Name("profile-1"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(!outcome.success);
    assert!(outcome.message.contains("disk full"));
    assert!(writer.paths().is_empty());
}

// Accepted limitation: the two files are not written transactionally, so a failed
// config write leaves the already-written credentials file in place.
#[test]
fn config_write_failure_keeps_credentials_write() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::failing_on(CONFIG_PATH);
    let selector = StubSelector::new(Pick::Name("profile-1"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(!outcome.success);
    assert!(outcome.message.contains("fail to write to file /aws/config"));
    assert_eq!(writer.paths(), [CREDENTIALS_PATH]);
}

#[test]
fn assumed_profile_write_failure_is_reported() {
    let paths = paths();
    let reader = MemoryReader::standard();
    let writer = RecordingWriter::failing_on(CONFIG_PATH);
    let selector = StubSelector::new(Pick::Name("assumed-1"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(!outcome.success);
    assert!(outcome.message.contains("disk full"));
}

#[test]
fn assumed_profile_reads_role_from_the_section_it_resolved() {
    let paths = paths();
    let reader = MemoryReader::with(
        CONFIG_PATH,
        "\
[dev]
region = us-east-1

[profile dev]
role_arn = arn:dev
source_profile = base
",
    );
    let writer = RecordingWriter::default();
    let selector = StubSelector::new(Pick::Name("dev"));

    let outcome = SetWorkflow::new(&paths, &reader, &writer, &selector).run("");

    assert!(outcome.success, "{}", outcome.message);
    let config = writer.written(CONFIG_PATH).expect("config written");
    assert_eq!(default_value(&config, "role_arn").as_deref(), Some("arn:dev"));
    assert_eq!(default_value(&config, "source_profile").as_deref(), Some("base"));
    assert_eq!(default_value(&config, "region"), None);
}
