//! Load applicant profiles from CSV exports of the simulator form

use super::ApplicantProfile;
use std::io::Read;
use std::path::Path;

/// Load profiles from a CSV file with a header row named after the profile fields
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicantProfile>, csv::Error> {
    let reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    collect_profiles(reader)
}

/// Load profiles from any reader (used by tests and stdin pipelines)
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantProfile>, csv::Error> {
    let reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    collect_profiles(reader)
}

fn collect_profiles<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<ApplicantProfile>, csv::Error> {
    let mut profiles = Vec::new();
    for record in reader.deserialize() {
        let profile: ApplicantProfile = record?;
        profiles.push(profile);
    }
    log::debug!("loaded {} applicant profiles", profiles.len());
    Ok(profiles)
}
