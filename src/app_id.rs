//! Validation for reverse-DNS app identifiers like "io.ionic.starter".

/// Check that `id` is a reverse-DNS application identifier.
///
/// App-store packaging (Android application ids, iOS bundle ids) accepts
/// at least two dot-separated segments, each starting with an ASCII letter
/// and containing only ASCII letters, digits and underscores.
pub(crate) fn validate_app_id(id: &str) -> Result<(), String> {
    if !id.contains('.') {
        return Err(format!(
            "appId must have at least two dot-separated segments: {}",
            id
        ));
    }

    for segment in id.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Err(format!("appId has an empty segment: {}", id)),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(format!(
                    "appId segment must start with a letter: {}",
                    segment
                ));
            }
            Some(_) => {}
        }

        if let Some(c) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(format!(
                "invalid character {:?} in appId segment: {}",
                c, segment
            ));
        }
    }

    Ok(())
}
