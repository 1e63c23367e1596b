use url::Url;

use crate::error::PeasyError;

/// Joins `endpoint` onto the path of `base`.
///
/// `https://host/v1/ingest` and `https://host/v1/ingest/` both join with `e`
/// to `https://host/v1/ingest/e`. Empty segments anywhere in the resulting
/// path are dropped, `.` and `..` in `endpoint` are resolved, and each
/// remaining endpoint segment is percent-encoded as a single path segment.
///
/// Bases containing ASCII control characters are rejected outright rather
/// than stripped or percent-encoded by the url parser.
pub fn join_endpoint(base: &str, endpoint: &str) -> Result<Url, PeasyError> {
    if base.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return Err(PeasyError::UrlControlCharacter {
            url: base.to_string(),
        });
    }

    let mut url = Url::parse(base).map_err(|source| PeasyError::Url {
        url: base.to_string(),
        source,
    })?;

    let cannot_be_a_base = || PeasyError::UrlCannotBeABase {
        url: base.to_string(),
    };

    let mut joined: Vec<String> = url
        .path_segments()
        .ok_or_else(cannot_be_a_base)?
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    for segment in endpoint.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                joined.pop();
            }
            segment => joined.push(segment.to_string()),
        }
    }

    url.path_segments_mut()
        .map_err(|_| cannot_be_a_base())?
        .clear()
        .extend(&joined);

    Ok(url)
}
