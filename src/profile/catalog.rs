use crate::store::{ConfigFile, Section};

use super::keys::{MFA_SERIAL, REGION, ROLE_ARN, SOURCE_PROFILE};
use super::{is_assumable_section, is_default_section, strip_profile_prefix};

const ASSUME_PREFIX: &str = "assume ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Canonical name used for lookups.
    pub profile_name: String,
    /// Label shown to the user.
    pub display_profile_name: String,
    pub source: ProfileSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Credentials,
    Assumed(AssumedRole),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumedRole {
    pub role_arn: String,
    pub source_profile: String,
    pub mfa_serial: Option<String>,
    pub region: Option<String>,
}

impl Profile {
    fn from_credentials(section: &Section) -> Self {
        Self {
            profile_name: section.name().to_string(),
            display_profile_name: section.name().to_string(),
            source: ProfileSource::Credentials,
        }
    }

    /// Returns `None` unless the section names both a role and a source profile.
    fn from_config(section: &Section) -> Option<Self> {
        if !is_assumable_section(section) {
            return None;
        }
        let role_arn = section.get(ROLE_ARN)?;
        let source_profile = section.get(SOURCE_PROFILE)?;
        let profile_name = strip_profile_prefix(section.name());

        Some(Self {
            profile_name: profile_name.to_string(),
            display_profile_name: format!("{ASSUME_PREFIX}{profile_name}"),
            source: ProfileSource::Assumed(AssumedRole {
                role_arn: role_arn.to_string(),
                source_profile: source_profile.to_string(),
                mfa_serial: section.get(MFA_SERIAL).map(str::to_string),
                region: section.get(REGION).map(str::to_string),
            }),
        })
    }

    pub fn assumed_role(&self) -> Option<&AssumedRole> {
        match &self.source {
            ProfileSource::Assumed(role) => Some(role),
            ProfileSource::Credentials => None,
        }
    }
}

/// Profiles from the credentials file followed by assumable profiles from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileCatalog {
    credentials_profiles: Vec<Profile>,
    config_assumed_profiles: Vec<Profile>,
}

impl ProfileCatalog {
    pub fn build(credentials: &ConfigFile, config: &ConfigFile) -> Self {
        let credentials_profiles = credentials
            .sections()
            .iter()
            .filter(|section| !is_default_section(section.name()))
            .map(Profile::from_credentials)
            .collect();

        let config_assumed_profiles = config
            .sections()
            .iter()
            .filter(|section| !is_default_section(strip_profile_prefix(section.name())))
            .filter_map(Profile::from_config)
            .collect();

        Self {
            credentials_profiles,
            config_assumed_profiles,
        }
    }

    pub fn credentials_profiles(&self) -> &[Profile] {
        &self.credentials_profiles
    }

    pub fn config_assumed_profiles(&self) -> &[Profile] {
        &self.config_assumed_profiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.credentials_profiles
            .iter()
            .chain(&self.config_assumed_profiles)
    }

    pub fn len(&self) -> usize {
        self.credentials_profiles.len() + self.config_assumed_profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Profiles whose name contains `pattern`; an empty pattern keeps everything.
    pub fn filter(&self, pattern: &str) -> Vec<&Profile> {
        self.iter()
            .filter(|profile| profile.profile_name.contains(pattern))
            .collect()
    }

    pub fn display_profile_names(&self) -> Vec<&str> {
        self.iter()
            .map(|profile| profile.display_profile_name.as_str())
            .collect()
    }
}
